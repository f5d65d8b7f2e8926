#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Decoder for BC1-BC5 (DXT) block compressed texture data
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Decode(commands::decode::DecodeCmd),
    Size(commands::size::SizeCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Decode(cmd) => {
            commands::decode::handle_decode_command(cmd)?;
        }
        Commands::Size(cmd) => {
            commands::size::handle_size_command(cmd)?;
        }
    }

    Ok(())
}
