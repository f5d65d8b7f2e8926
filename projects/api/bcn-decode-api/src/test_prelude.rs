//! Common test imports for API tests.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::{
    BcnDecodeBuilder, BcnDecodeError, DecodeError, DecodeSettings, DecodedImage,
    DestinationFormat, EncodeFormat,
};
