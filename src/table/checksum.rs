// Checksum

// This is the XOR scheme from the old part_vulcan.c tooling. It does not match
// what the partition manager writes after editing a table, but the manager
// does not check it either. Mismatches are only ever warnings.

// Imports

use crate::table::block::block_struct::LogicalBlock;
use crate::table::layout::{BLOCK_SIZE, CHECKSUM_OFFSET};

// Functions

/// XOR every byte pair of the block, skipping the checksum's own pair.
///
/// The stored checksum never influences the result.
pub fn compute_checksum(block: &LogicalBlock) -> u16 {
    let mut low: u8 = 0;
    let mut high: u8 = 0;
    for offset in (0..BLOCK_SIZE).step_by(2) {
        if offset == CHECKSUM_OFFSET {
            continue;
        }
        low ^= block.data[offset];
        high ^= block.data[offset + 1];
    }
    u16::from_le_bytes([low, high])
}

/// Check whether the stored checksum matches the block.
/// Returns the stored and computed values when it does not.
pub fn check_checksum(block: &LogicalBlock) -> Option<(u16, u16)> {
    let stored = u16::from_le_bytes([block.data[CHECKSUM_OFFSET], block.data[CHECKSUM_OFFSET + 1]]);
    let computed = compute_checksum(block);
    if stored == computed {
        None
    } else {
        Some((stored, computed))
    }
}

/// Compute the checksum and store it in the block.
pub(crate) fn add_checksum_to_block(block: &mut LogicalBlock) {
    let checksum = compute_checksum(block);
    block.data[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].copy_from_slice(&checksum.to_le_bytes());
}
