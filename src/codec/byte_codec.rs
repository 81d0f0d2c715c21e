// Fixed width field access.
//
// All multi byte values are little endian, lowest byte at the lowest offset.
// Setters mask the value to the field width and wrap silently. That is not an
// error, the on-disk fields are simply that wide.

// Imports

use crate::error_types::table::TableError;

// Functions

/// Make sure `width` bytes starting at `offset` exist in `buf`.
fn check_range(buf: &[u8], offset: usize, width: usize) -> Result<(), TableError> {
    match offset.checked_add(width) {
        Some(end) if end <= buf.len() => Ok(()),
        _ => Err(TableError::OutOfRange {
            offset,
            width,
            len: buf.len(),
        }),
    }
}

pub fn get_u8(buf: &[u8], offset: usize) -> Result<u8, TableError> {
    check_range(buf, offset, 1)?;
    Ok(buf[offset])
}

pub fn get_u16(buf: &[u8], offset: usize) -> Result<u16, TableError> {
    check_range(buf, offset, 2)?;
    Ok(u16::from_le_bytes([buf[offset], buf[offset + 1]]))
}

/// 24 bit read, byte 0 is the least significant.
pub fn get_u24(buf: &[u8], offset: usize) -> Result<u32, TableError> {
    check_range(buf, offset, 3)?;
    Ok(u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        0,
    ]))
}

pub fn set_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<(), TableError> {
    check_range(buf, offset, 1)?;
    buf[offset] = value;
    Ok(())
}

pub fn set_u16(buf: &mut [u8], offset: usize, value: u16) -> Result<(), TableError> {
    check_range(buf, offset, 2)?;
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    Ok(())
}

/// 24 bit write. Anything above bit 23 is dropped.
pub fn set_u24(buf: &mut [u8], offset: usize, value: u32) -> Result<(), TableError> {
    check_range(buf, offset, 3)?;
    buf[offset..offset + 3].copy_from_slice(&value.to_le_bytes()[..3]);
    Ok(())
}

/// Read `len` bytes of Apple II text.
///
/// The high bit is stripped from every byte, and anything that is not
/// printable ASCII afterwards becomes an underscore.
pub fn get_text(buf: &[u8], offset: usize, len: usize) -> Result<String, TableError> {
    check_range(buf, offset, len)?;
    Ok(buf[offset..offset + len]
        .iter()
        .map(|byte| {
            let character = byte & 0x7F;
            if (0x20..=0x7E).contains(&character) {
                character as char
            } else {
                '_'
            }
        })
        .collect())
}

/// Write `text` as Apple II text, right padded with spaces to `len` bytes.
///
/// Longer text is cut off. Every byte gets its high bit set.
pub fn set_text(buf: &mut [u8], offset: usize, len: usize, text: &str) -> Result<(), TableError> {
    check_range(buf, offset, len)?;
    let padded = text.bytes().chain(std::iter::repeat(b' '));
    for (slot, byte) in buf[offset..offset + len].iter_mut().zip(padded) {
        *slot = byte | 0x80;
    }
    Ok(())
}

pub fn get_bytes(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], TableError> {
    check_range(buf, offset, len)?;
    Ok(&buf[offset..offset + len])
}

pub fn set_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<(), TableError> {
    check_range(buf, offset, bytes.len())?;
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(())
}

pub fn fill(buf: &mut [u8], offset: usize, len: usize, value: u8) -> Result<(), TableError> {
    check_range(buf, offset, len)?;
    buf[offset..offset + len].fill(value);
    Ok(())
}
