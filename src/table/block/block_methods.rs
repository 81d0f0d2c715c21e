// Getting fields in and out of block 0.

// Imports

use crate::codec::byte_codec::{get_u16, get_u24, get_u8, set_u16, set_u24, set_u8};
use crate::error_types::table::{AssertionFault, TableError};
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};
use crate::table::layout::{header_field, FieldKind, FieldSpec, ACTIVE_SLOT_COUNT, BLOCK_SIZE};

// Implementations

impl LogicalBlock {
    /// A block of nothing but zeros.
    pub fn zeroed() -> Self {
        Self {
            data: [0u8; BLOCK_SIZE],
        }
    }
    pub fn from_bytes(data: [u8; BLOCK_SIZE]) -> Self {
        Self { data }
    }
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.data
    }
    /// Take the block out of a larger scratch buffer.
    ///
    /// Everything past the first 512 bytes must be zero, anything else means
    /// there is data we do not know about.
    pub fn from_scratch(buffer: &[u8]) -> Result<Self, TableError> {
        Ok(Self {
            data: block_from_scratch(buffer)?,
        })
    }

    /// Read a numeric header field.
    pub fn header_value(&self, kind: FieldKind) -> Result<u32, TableError> {
        read_header_value(&self.data, kind)
    }
    /// Write a numeric header field. Values wrap to the field width.
    pub fn set_header_value(&mut self, kind: FieldKind, value: u32) -> Result<(), TableError> {
        write_header_value(&mut self.data, kind, value)
    }

    pub fn magic(&self) -> Result<u16, TableError> {
        Ok(self.header_value(FieldKind::Magic)? as u16)
    }
    pub fn stored_checksum(&self) -> Result<u16, TableError> {
        Ok(self.header_value(FieldKind::Checksum)? as u16)
    }
    pub fn drive_type(&self) -> Result<u8, TableError> {
        Ok(self.header_value(FieldKind::DriveType)? as u8)
    }
    pub fn total_blocks(&self) -> Result<u32, TableError> {
        self.header_value(FieldKind::TotalBlocks)
    }
    pub fn cylinders(&self) -> Result<u16, TableError> {
        Ok(self.header_value(FieldKind::Cylinders)? as u16)
    }
    pub fn heads(&self) -> Result<u8, TableError> {
        Ok(self.header_value(FieldKind::Heads)? as u8)
    }
    pub fn sectors(&self) -> Result<u8, TableError> {
        Ok(self.header_value(FieldKind::Sectors)? as u8)
    }
    pub fn interleave(&self) -> Result<u8, TableError> {
        Ok(self.header_value(FieldKind::Interleave)? as u8)
    }
    pub fn boot_index(&self) -> Result<u8, TableError> {
        Ok(self.header_value(FieldKind::BootIndex)? as u8)
    }
    /// The active ProDOS partition slots, 0xFF is an unused slot.
    pub fn active_slots(&self) -> Result<[u8; ACTIVE_SLOT_COUNT], TableError> {
        let mut slots = [0u8; ACTIVE_SLOT_COUNT];
        for (slot, value) in slots.iter_mut().enumerate() {
            *value = self.header_value(FieldKind::ActiveSlot(slot))? as u8;
        }
        Ok(slots)
    }
}

impl PhysicalSector {
    pub fn zeroed() -> Self {
        Self {
            data: [0u8; BLOCK_SIZE],
        }
    }
    pub fn from_bytes(data: [u8; BLOCK_SIZE]) -> Self {
        Self { data }
    }
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.data
    }
    /// Same rules as the logical version, trailing bytes must be zero.
    pub fn from_scratch(buffer: &[u8]) -> Result<Self, TableError> {
        Ok(Self {
            data: block_from_scratch(buffer)?,
        })
    }
}

// Functions

/// Ensure every byte from `from` onwards is zero.
pub(crate) fn check_zero_padding(buffer: &[u8], from: usize) -> Result<(), TableError> {
    if buffer.len() < from {
        return Err(AssertionFault::BufferTooSmall { len: buffer.len() }.into());
    }
    match buffer[from..].iter().position(|byte| *byte != 0) {
        Some(position) => Err(AssertionFault::NonZeroPadding {
            offset: from + position,
        }
        .into()),
        None => Ok(()),
    }
}

fn block_from_scratch(buffer: &[u8]) -> Result<[u8; BLOCK_SIZE], TableError> {
    check_zero_padding(buffer, BLOCK_SIZE)?;
    let mut data = [0u8; BLOCK_SIZE];
    data.copy_from_slice(&buffer[..BLOCK_SIZE]);
    Ok(data)
}

/// Read a numeric field of 1 to 3 bytes.
pub(crate) fn read_number(buf: &[u8], offset: usize, width: usize) -> Result<u32, TableError> {
    match width {
        1 => Ok(get_u8(buf, offset)? as u32),
        2 => Ok(get_u16(buf, offset)? as u32),
        3 => get_u24(buf, offset),
        _ => Err(AssertionFault::FieldWidth { offset, width }.into()),
    }
}

/// Write a numeric field of 1 to 3 bytes, wrapping to the width.
pub(crate) fn write_number(
    buf: &mut [u8],
    offset: usize,
    width: usize,
    value: u32,
) -> Result<(), TableError> {
    match width {
        1 => set_u8(buf, offset, value as u8),
        2 => set_u16(buf, offset, value as u16),
        3 => set_u24(buf, offset, value),
        _ => Err(AssertionFault::FieldWidth { offset, width }.into()),
    }
}

fn read_header_value(buf: &[u8], kind: FieldKind) -> Result<u32, TableError> {
    let spec = numeric_field(kind)?;
    read_number(buf, spec.offset, spec.width)
}

fn write_header_value(buf: &mut [u8], kind: FieldKind, value: u32) -> Result<(), TableError> {
    let spec = numeric_field(kind)?;
    write_number(buf, spec.offset, spec.width, value)
}

/// Reserved regions are blobs, they have no numeric value.
fn numeric_field(kind: FieldKind) -> Result<&'static FieldSpec, TableError> {
    match header_field(kind) {
        Some(spec) if !matches!(spec.kind, FieldKind::Reserved(_)) => Ok(spec),
        _ => Err(AssertionFault::UndeclaredField(kind).into()),
    }
}
