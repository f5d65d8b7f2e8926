use crate::error::CliError;
use crate::util::parse_encode_format;
use argh::FromArgs;
use bcn_decode_api::{required_destination_size, required_source_size, EncodeFormat};

#[derive(FromArgs, Debug)]
/// Print the input and output sizes, in bytes, of an image
#[argh(subcommand, name = "size")]
pub struct SizeCmd {
    /// image width in texels
    #[argh(option)]
    pub width: u32,

    /// image height in texels
    #[argh(option)]
    pub height: u32,

    /// encoding of the input (raw, bc1, bc2, bc3, bc4, bc5, dxt1, dxt3, dxt5, ati1, ati2)
    #[argh(option, from_str_fn(parse_encode_format))]
    pub format: EncodeFormat,
}

/// Required `(source, destination)` sizes in bytes.
pub fn sizes(cmd: &SizeCmd) -> Result<(usize, usize), CliError> {
    Ok((
        required_source_size(cmd.width, cmd.height, cmd.format)?,
        required_destination_size(cmd.width, cmd.height)?,
    ))
}

pub fn handle_size_command(cmd: SizeCmd) -> Result<(), CliError> {
    let (source, destination) = sizes(&cmd)?;
    println!("source: {source}");
    println!("destination: {destination}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcn_decode_api::DecodeError;
    use rstest::rstest;

    #[rstest]
    #[case(EncodeFormat::Bc1, 5, 5, 32, 100)]
    #[case(EncodeFormat::Bc3, 8, 8, 64, 256)]
    #[case(EncodeFormat::Raw, 2, 3, 24, 24)]
    fn reports_sizes(
        #[case] format: EncodeFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] source: usize,
        #[case] destination: usize,
    ) {
        let cmd = SizeCmd {
            width,
            height,
            format,
        };
        assert_eq!(sizes(&cmd).unwrap(), (source, destination));
    }

    #[test]
    fn rejects_unsupported_format() {
        let cmd = SizeCmd {
            width: 4,
            height: 4,
            format: EncodeFormat::Bc6,
        };
        assert!(matches!(
            sizes(&cmd),
            Err(CliError::Decode(bcn_decode_api::BcnDecodeError::Decode(
                DecodeError::UnsupportedFormat { tag: 6 }
            )))
        ));
    }
}
