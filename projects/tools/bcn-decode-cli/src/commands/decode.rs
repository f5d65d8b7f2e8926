use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bcn_decode_api::{required_destination_size, BcnDecodeBuilder, DestinationFormat, EncodeFormat};
use std::{path::PathBuf, time::Instant};
use tracing::info;

#[derive(FromArgs, Debug)]
/// Decode a file of raw BCn blocks into a file of raw 8-bit texels
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input file of encoded texture data (no container header)
    #[argh(option)]
    pub input: PathBuf,

    /// output file for decoded texels (created or overwritten)
    #[argh(option)]
    pub output: PathBuf,

    /// image width in texels
    #[argh(option)]
    pub width: u32,

    /// image height in texels
    #[argh(option)]
    pub height: u32,

    /// encoding of the input (raw, bc1, bc2, bc3, bc4, bc5, dxt1, dxt3, dxt5, ati1, ati2)
    #[argh(option, from_str_fn(parse_encode_format))]
    pub format: EncodeFormat,

    /// byte order of each output texel (rgba, bgra, argb, abgr) [default: rgba]
    #[argh(option, from_str_fn(parse_destination_format), default = "DestinationFormat::Rgba")]
    pub channel_order: DestinationFormat,

    /// write rows bottom to top
    #[argh(switch)]
    pub flip: bool,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let start = Instant::now();
    let written = decode_file(&cmd)?;
    info!(
        input = %cmd.input.display(),
        output = %cmd.output.display(),
        format = ?cmd.format,
        width = cmd.width,
        height = cmd.height,
        bytes = written,
        "Decode completed in {:.2?}",
        start.elapsed()
    );
    Ok(())
}

/// Maps the input, creates the output at its final size, and decodes straight into it.
///
/// The output file is only created once the request passes validation.
pub fn decode_file(cmd: &DecodeCmd) -> Result<usize, CliError> {
    let input_path = path_str(&cmd.input)?;
    let output_path = path_str(&cmd.output)?;

    let builder = BcnDecodeBuilder::new()
        .destination_format(cmd.channel_order)
        .flip_vertically(cmd.flip);

    let (input_handle, input_size) = open_read_handle(input_path)?;
    let input_mapping = open_readonly_mmap(&input_handle, input_path, input_size)?;
    let input = input_mapping.as_slice();

    // Reject bad requests before touching the output path, in the core's order:
    // format, dimensions, source size.
    let needed = bcn_decode_api::required_source_size(cmd.width, cmd.height, cmd.format)?;
    if input.len() < needed {
        return Err(bcn_decode_api::DecodeError::SourceBufferTooSmall {
            needed,
            actual: input.len(),
        }
        .into());
    }
    let output_size = required_destination_size(cmd.width, cmd.height)?;

    let output_handle = open_write_handle(output_path, output_size)?;
    let mut output_mapping = create_output_mapping(&output_handle, output_path, output_size)?;

    Ok(builder.decode(
        input,
        cmd.width,
        cmd.height,
        cmd.format,
        output_mapping.as_mut_slice(),
    )?)
}
