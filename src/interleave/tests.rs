// Shuffle, unshuffle.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

// Imports
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error_types::table::{AssertionFault, TableError};
use crate::interleave::interleave_methods::*;
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};
use crate::table::layout::BLOCK_SIZE;

use test_log::test; // We want to see logs while testing.

// Tests

#[test]
fn mapping_is_a_permutation() {
    let mut seen = [false; BLOCK_SIZE / 2];
    for unit in 0..BLOCK_SIZE / 2 {
        let offset = logical_offset(unit);
        assert_eq!(offset % 2, 0);
        assert!(!seen[offset / 2], "offset 0x{offset:03X} mapped twice");
        seen[offset / 2] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn units_alternate_between_halves() {
    let mut raw = [0u8; BLOCK_SIZE];
    raw[0] = 0xAE;
    raw[1] = 0xAE;
    raw[2] = 0x01;
    raw[3] = 0x00;
    raw[4] = 0x34;
    let block = PhysicalSector::from_bytes(raw).to_logical();
    assert_eq!(&block.as_bytes()[0..2], &[0xAE, 0xAE]);
    assert_eq!(&block.as_bytes()[0x100..0x102], &[0x01, 0x00]);
    assert_eq!(block.as_bytes()[2], 0x34);
}

#[test]
fn ping_pong_both_ways() {
    for _ in 0..1000 {
        let bytes = random_bytes();

        let sector = PhysicalSector::from_bytes(bytes);
        assert_eq!(sector.to_logical().to_physical(), sector);

        let block = LogicalBlock::from_bytes(bytes);
        assert_eq!(PhysicalSector::from(&block).to_logical(), block);
    }
}

#[test]
fn scratch_agrees_with_fixed() {
    let bytes = random_bytes();
    let mut physical = vec![0u8; 8192];
    physical[..BLOCK_SIZE].copy_from_slice(&bytes);
    let mut logical = vec![0u8; 8192];

    deinterleave_scratch(&physical, &mut logical).unwrap();
    let expected = PhysicalSector::from_bytes(bytes).to_logical();
    assert_eq!(&logical[..BLOCK_SIZE], &expected.as_bytes()[..]);
    assert!(logical[BLOCK_SIZE..].iter().all(|byte| *byte == 0));

    let mut back = vec![0u8; 8192];
    interleave_scratch(&logical, &mut back).unwrap();
    assert_eq!(back, physical);
}

#[test]
fn scratch_padding_must_be_zero() {
    let mut physical = vec![0u8; 1024];
    physical[BLOCK_SIZE + 3] = 9;
    let mut logical = vec![0u8; 1024];
    assert_eq!(
        deinterleave_scratch(&physical, &mut logical),
        Err(TableError::AssertionFailed(AssertionFault::NonZeroPadding {
            offset: BLOCK_SIZE + 3
        }))
    );

    // Dirty destination padding is just as bad.
    let clean = vec![0u8; 1024];
    logical[1000] = 1;
    assert!(interleave_scratch(&clean, &mut logical).is_err());
}

#[test]
fn scratch_must_hold_a_block() {
    let short = vec![0u8; 511];
    let mut logical = vec![0u8; BLOCK_SIZE];
    assert_eq!(
        deinterleave_scratch(&short, &mut logical),
        Err(TableError::AssertionFailed(AssertionFault::BufferTooSmall {
            len: 511
        }))
    );
}

// Helpers

fn random_bytes() -> [u8; BLOCK_SIZE] {
    let mut random: ThreadRng = rand::rng();
    let mut buffer = [0u8; BLOCK_SIZE];
    for byte in buffer.iter_mut() {
        *byte = random.random()
    }
    buffer
}
