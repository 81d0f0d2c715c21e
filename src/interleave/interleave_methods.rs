// Shuffling block 0 between medium order and field order.
//
// Both orders are 256 two byte units. Physical unit u holds the logical bytes at
// 2 * (u / 2) + 256 * (u % 2), so the medium alternates between the front and
// back half of the logical block.

// Imports

use log::{debug, error};

use crate::error_types::table::{AssertionFault, TableError};
use crate::table::block::block_methods::check_zero_padding;
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};
use crate::table::layout::BLOCK_SIZE;

// Constants

const UNIT_COUNT: usize = BLOCK_SIZE / 2;

// Implementations

impl PhysicalSector {
    /// De-interleave into the field addressable order.
    pub fn to_logical(&self) -> LogicalBlock {
        deinterleave(self)
    }
}

impl LogicalBlock {
    /// Interleave into the order the medium stores.
    pub fn to_physical(&self) -> PhysicalSector {
        interleave(self)
    }
}

impl From<&PhysicalSector> for LogicalBlock {
    fn from(sector: &PhysicalSector) -> Self {
        deinterleave(sector)
    }
}

impl From<&LogicalBlock> for PhysicalSector {
    fn from(block: &LogicalBlock) -> Self {
        interleave(block)
    }
}

// Functions

/// Logical byte offset of physical unit `unit`.
pub fn logical_offset(unit: usize) -> usize {
    2 * (unit / 2) + 256 * (unit % 2)
}

pub fn deinterleave(sector: &PhysicalSector) -> LogicalBlock {
    let mut block = LogicalBlock::zeroed();
    for unit in 0..UNIT_COUNT {
        let logical = logical_offset(unit);
        let physical = unit * 2;
        block.data[logical..logical + 2].copy_from_slice(&sector.data[physical..physical + 2]);
    }
    block
}

pub fn interleave(block: &LogicalBlock) -> PhysicalSector {
    let mut sector = PhysicalSector::zeroed();
    for unit in 0..UNIT_COUNT {
        let logical = logical_offset(unit);
        let physical = unit * 2;
        sector.data[physical..physical + 2].copy_from_slice(&block.data[logical..logical + 2]);
    }
    sector
}

/// De-interleave between two scratch buffers of at least 512 bytes.
///
/// Only the first 512 bytes take part. Everything after that must be zero in
/// both buffers, before and after.
pub fn deinterleave_scratch(physical: &[u8], logical: &mut [u8]) -> Result<(), TableError> {
    shuffle_scratch(physical, logical, |unit| (unit * 2, logical_offset(unit)))
}

/// Interleave between two scratch buffers of at least 512 bytes.
pub fn interleave_scratch(logical: &[u8], physical: &mut [u8]) -> Result<(), TableError> {
    shuffle_scratch(logical, physical, |unit| (logical_offset(unit), unit * 2))
}

/// Copy every unit from its source offset to its destination offset.
/// `mapping` gives (source, destination) for a unit.
fn shuffle_scratch(
    source: &[u8],
    destination: &mut [u8],
    mapping: impl Fn(usize) -> (usize, usize),
) -> Result<(), TableError> {
    check_zero_padding(source, BLOCK_SIZE)?;
    check_zero_padding(destination, BLOCK_SIZE)?;
    debug!(
        "Shuffling a {} byte scratch buffer into a {} byte one.",
        source.len(),
        destination.len()
    );

    for unit in 0..UNIT_COUNT {
        let (from, to) = mapping(unit);
        // The mapping is fixed, but a bad one must never spill into the padding.
        for index in [from, to] {
            if index + 2 > BLOCK_SIZE {
                error!("Interleave mapping produced index 0x{index:03X}!");
                return Err(AssertionFault::IndexOutOfRange { index }.into());
            }
        }
        destination[to..to + 2].copy_from_slice(&source[from..from + 2]);
    }

    // The padding must have survived.
    check_zero_padding(destination, BLOCK_SIZE)
}
