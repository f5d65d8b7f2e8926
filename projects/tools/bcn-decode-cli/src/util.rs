#![cfg(not(tarpaulin_include))]

use crate::error::CliError;
use bcn_decode_api::{DestinationFormat, EncodeFormat};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Parses a texture format name such as `bc1` or `dxt5`.
pub fn parse_encode_format(value: &str) -> Result<EncodeFormat, String> {
    EncodeFormat::from_name(value).ok_or_else(|| {
        format!(
            "Invalid format: {value}. Valid formats are: raw, bc1, bc2, bc3, bc4, bc5 \
             (aliases dxt1, dxt3, dxt5, ati1, ati2)"
        )
    })
}

/// Parses a channel order name such as `rgba` or `bgra`.
pub fn parse_destination_format(value: &str) -> Result<DestinationFormat, String> {
    DestinationFormat::from_name(value).ok_or_else(|| {
        format!("Invalid channel order: {value}. Valid orders are: rgba, bgra, argb, abgr")
    })
}

/// Converts a path to the `&str` form `lightweight-mmap` expects.
pub fn path_str(path: &Path) -> Result<&str, CliError> {
    path.to_str()
        .ok_or_else(|| CliError::InvalidPath(path.to_string_lossy().into_owned()))
}

fn mmap_error(path: &str, error: impl core::fmt::Display) -> CliError {
    CliError::MmapError {
        path: path.to_owned(),
        message: error.to_string(),
    }
}

/// Opens a file in read-only mode and returns a handle along with its size in bytes.
#[inline(always)]
pub fn open_read_handle(path: &str) -> Result<(ReadOnlyFileHandle, usize), CliError> {
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| mmap_error(path, e))?;
    let size = handle.size().map_err(|e| mmap_error(path, e))? as usize;
    Ok((handle, size))
}

/// Creates a memory mapping covering the first `len` bytes of a read-only file.
#[inline(always)]
pub fn open_readonly_mmap<'a>(
    handle: &'a ReadOnlyFileHandle,
    path: &str,
    len: usize,
) -> Result<ReadOnlyMmap<'a>, CliError> {
    ReadOnlyMmap::new(handle, 0, len).map_err(|e| mmap_error(path, e))
}

/// Creates (or truncates) a file of exactly `size` bytes for writing.
#[inline(always)]
pub fn open_write_handle(path: &str, size: usize) -> Result<ReadWriteFileHandle, CliError> {
    ReadWriteFileHandle::create_preallocated(path, size as i64).map_err(|e| mmap_error(path, e))
}

/// Creates a writable memory mapping covering the first `size` bytes of a file.
#[inline(always)]
pub fn create_output_mapping<'a>(
    handle: &'a ReadWriteFileHandle,
    path: &str,
    size: usize,
) -> Result<ReadWriteMmap<'a>, CliError> {
    ReadWriteMmap::new(handle, 0, size).map_err(|e| mmap_error(path, e))
}
