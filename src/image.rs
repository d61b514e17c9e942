//! Memory image files: raw binary dumps loaded into or saved from RAM.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::address_space::AddressSpace;
use crate::clock::Clock;
use crate::display::DisplayPort;
use crate::Apple1Error;

/// Parses a hex address such as `"0280"`, `"E000"` or `"0x7f"`.
///
/// ```
/// use apple1::parse_hex_address;
///
/// assert_eq!(parse_hex_address("0x0280").unwrap(), 0x0280);
/// assert_eq!(parse_hex_address("ff").unwrap(), 0x00FF);
/// assert!(parse_hex_address("12345").is_err());
/// ```
pub fn parse_hex_address(text: &str) -> Result<u16, Apple1Error> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Apple1Error::InvalidAddress(text.to_string()));
    }

    u16::from_str_radix(digits, 16).map_err(|_| Apple1Error::InvalidAddress(text.to_string()))
}

/// Reads a whole file and loads it into RAM at `address`.
///
/// RAM is untouched if the file can't be read or doesn't fit.
pub fn load_file<D: DisplayPort, C: Clock>(
    space: &mut AddressSpace<D, C>,
    path: impl AsRef<Path>,
    address: u16,
) -> Result<usize, Apple1Error> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    space.load(address, &bytes)?;
    log::info!("loaded {} from ${:04X}", path.display(), address);
    Ok(bytes.len())
}

/// Writes RAM from `start` through `end` inclusive to a file.
///
/// The range is validated before anything touches the disk, and the bytes go
/// to a sibling temp file that is renamed over `path`, so a failed save never
/// leaves a truncated image behind.
pub fn save_file<D: DisplayPort, C: Clock>(
    space: &AddressSpace<D, C>,
    path: impl AsRef<Path>,
    start: u16,
    end: u16,
) -> Result<usize, Apple1Error> {
    let path = path.as_ref();
    let bytes = space.save(start, end)?;
    write_replacing(path, &bytes)?;
    log::info!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp = temp_sibling(path);
    let result = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, path));
    if result.is_err() {
        // The temp file may not exist if the first write failed.
        let _ = fs::remove_file(&temp);
    }
    result
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
