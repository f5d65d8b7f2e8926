#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod builder;
pub mod decoded_image;
pub mod error;

#[cfg(test)]
pub mod test_prelude;

pub use builder::BcnDecodeBuilder;
pub use decoded_image::DecodedImage;
pub use error::BcnDecodeError;

// Types needed to drive the builder, so callers need not depend on the core crate.
pub use bcn_decode::{
    required_destination_size, required_source_size, DecodeError, DecodeSettings,
    DestinationFormat, EncodeFormat,
};
