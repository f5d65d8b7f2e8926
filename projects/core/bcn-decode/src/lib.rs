#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod decode;
pub mod error;
pub mod format;
pub mod output;
pub mod tiler;
pub mod util;

#[cfg(test)]
pub mod test_prelude;

pub use block::decode_block;
pub use decode::{
    decode, decode_with_format_tags, required_destination_size, required_source_size,
};
pub use error::DecodeError;
pub use format::{DecodeSettings, DestinationFormat, EncodeFormat, ImageDescriptor};
