// Blocks in, blocks out.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

// Imports

use crate::error_types::table::{AssertionFault, TableError};
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};
use crate::table::layout::{FieldKind, ReservedFill, BLOCK_SIZE};

use test_log::test; // We want to see logs while testing.

// Tests

#[test]
fn scratch_buffer_with_zero_tail_is_accepted() {
    let mut scratch = vec![0u8; 8192];
    scratch[0] = 0xAE;
    scratch[511] = 0x42;
    let block = LogicalBlock::from_scratch(&scratch).unwrap();
    assert_eq!(block.as_bytes()[0], 0xAE);
    assert_eq!(block.as_bytes()[511], 0x42);

    // Exactly one block is fine too.
    let sector = PhysicalSector::from_scratch(&scratch[..BLOCK_SIZE]).unwrap();
    assert_eq!(sector.as_bytes()[..], scratch[..BLOCK_SIZE]);
}

#[test]
fn scratch_buffer_with_junk_tail_is_fatal() {
    let mut scratch = vec![0u8; 1024];
    scratch[700] = 1;
    assert_eq!(
        LogicalBlock::from_scratch(&scratch),
        Err(TableError::AssertionFailed(AssertionFault::NonZeroPadding {
            offset: 700
        }))
    );
}

#[test]
fn short_scratch_buffer_is_fatal() {
    let scratch = vec![0u8; 100];
    assert_eq!(
        PhysicalSector::from_scratch(&scratch),
        Err(TableError::AssertionFailed(AssertionFault::BufferTooSmall {
            len: 100
        }))
    );
}

#[test]
fn header_fields_land_at_their_offsets() {
    let mut block = LogicalBlock::zeroed();
    block.set_header_value(FieldKind::TotalBlocks, 0x050000).unwrap();
    block.set_header_value(FieldKind::Cylinders, 1405).unwrap();
    block.set_header_value(FieldKind::ActiveSlot(2), 0x07).unwrap();

    let bytes = block.as_bytes();
    assert_eq!(&bytes[0x05..0x08], &[0x00, 0x00, 0x05]);
    assert_eq!(&bytes[0x09..0x0B], &1405u16.to_le_bytes());
    assert_eq!(bytes[0x13], 0x07);

    assert_eq!(block.total_blocks().unwrap(), 0x050000);
    assert_eq!(block.cylinders().unwrap(), 1405);
    assert_eq!(block.active_slots().unwrap(), [0, 0, 7, 0]);
}

#[test]
fn header_values_wrap_to_field_width() {
    let mut block = LogicalBlock::zeroed();
    block.set_header_value(FieldKind::Heads, 0x1_06).unwrap();
    assert_eq!(block.heads().unwrap(), 0x06);
    // And the neighbours are left alone.
    assert_eq!(block.as_bytes()[0x0A], 0);
    assert_eq!(block.as_bytes()[0x0C], 0);
}

#[test]
fn reserved_regions_have_no_numeric_value() {
    let block = LogicalBlock::zeroed();
    let kind = FieldKind::Reserved(ReservedFill::Zero);
    assert_eq!(
        block.header_value(kind),
        Err(TableError::AssertionFailed(AssertionFault::UndeclaredField(
            kind
        )))
    );
    assert!(block.header_value(FieldKind::ActiveSlot(4)).is_err());
}
