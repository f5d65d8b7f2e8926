//! Common test imports and utilities for decoder tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{vec, vec::Vec};

pub use rstest::rstest;

pub use crate::block::*;
pub use crate::decode::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::output::*;
pub use crate::util::*;

pub use bcn_decode_common::color_565::Color565;
pub use bcn_decode_common::color_8888::Color8888;
pub use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Fills `len` bytes with a deterministic xorshift sequence, so tests cover arbitrary
/// block contents without pulling in an RNG.
pub(crate) fn generate_test_data(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
