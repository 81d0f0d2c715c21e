// Building tables.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

// Imports
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::codec::byte_codec::get_text;
use crate::error_types::warning::TableWarning;
use crate::table::block::block_struct::LogicalBlock;
use crate::table::builder::builder_methods::build_table;
use crate::table::builder::config_struct::DriveConfig;
use crate::table::checksum::{check_checksum, compute_checksum};
use crate::table::entry::entry_struct::PartitionKind;
use crate::table::layout::{entry_offset, ENTRY_COUNT, MAGIC};

use test_log::test; // We want to see logs while testing.

// Tests

#[test]
fn five_full_partitions() {
    let config = DriveConfig {
        total_blocks: 5 * 0x10000,
        max_partition_blocks: 0xFFFF,
        full_partition_count: 5,
        max_active_partitions: 4,
        ..DriveConfig::default()
    };
    let built = build_table(&config).unwrap();
    assert!(built.warnings.is_empty());

    let entries = built.block.entries().unwrap();
    for (index, entry) in entries.iter().enumerate() {
        // Only the first four can be active, even though the fifth is full too.
        assert_eq!(entry.is_active(), index < 4, "entry {index}");
        match index {
            0..=4 => assert_eq!(entry.size, 0xFFFF),
            // The pool is one short of five times 0x10000, four blocks are left over.
            5 => assert_eq!(entry.size, 4),
            _ => assert_eq!(entry.size, 0),
        }
    }
    assert_eq!(entries[5].start, 1 + 5 * 0xFFFF);
}

#[test]
fn default_header_bytes() {
    let built = LogicalBlock::build(&DriveConfig::default()).unwrap();
    let bytes = built.block.as_bytes();

    assert_eq!(&bytes[0x00..0x02], &[0xAE, 0xAE]);
    assert_eq!(
        &bytes[0x04..0x1D],
        &[
            0x10, // SWIFT 200
            0x00, 0x00, 0x05, // 0x50000 blocks
            0x00, // reserved
            0x7D, 0x05, // 1405 cylinders
            0x06, 0x27, 0x01, 0x00, // heads, sectors, interleave, boot
            0xFF, 0xFF, // reserved
            0xFF, 0xFF, 0xFF, 0xFF, // no active slots
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        ]
    );
    assert!(bytes[0x1D..0xB6].iter().all(|byte| *byte == 0));
    assert_eq!(&bytes[0xB6..0xB9], &[0x00, 0x80, 0x01]);
    assert!(bytes[0xB9..0x100].iter().all(|byte| *byte == 0));
    assert_eq!(built.block.magic().unwrap(), MAGIC);
}

#[test]
fn first_name_is_padded() {
    let built = build_table(&DriveConfig::default()).unwrap();
    let base = entry_offset(0);
    let raw = &built.block.as_bytes()[base + 6..base + 16];
    assert!(raw.iter().all(|byte| byte & 0x80 != 0));
    assert_eq!(get_text(raw, 0, 10).unwrap(), "AE1       ");
    assert_eq!(built.block.entry(15).unwrap().name, "AE16      ");
}

#[test]
fn kind_nibble_is_left_clear() {
    let built = build_table(&DriveConfig::default()).unwrap();
    for entry in built.block.entries().unwrap() {
        assert_eq!(entry.kind(), PartitionKind::Clear);
    }
}

#[test]
fn checksum_is_stored() {
    let built = build_table(&DriveConfig::default()).unwrap();
    assert_eq!(check_checksum(&built.block), None);
    assert_eq!(
        built.block.stored_checksum().unwrap(),
        compute_checksum(&built.block)
    );
}

#[test]
fn mismatched_total_is_only_a_warning() {
    let config = DriveConfig {
        total_blocks: 1000,
        ..DriveConfig::default()
    };
    let built = build_table(&config).unwrap();
    assert_eq!(
        built.warnings,
        vec![TableWarning::PoolMismatch {
            configured: 1000,
            derived: 5 * 0x10000
        }]
    );
    // Declared total is kept as configured.
    assert_eq!(built.block.total_blocks().unwrap(), 1000);
}

#[test]
fn no_full_partitions_still_builds() {
    let built = build_table(&DriveConfig::for_full_partitions(0)).unwrap();
    let entries = built.block.entries().unwrap();
    assert!(entries.iter().all(|entry| entry.size == 0 && entry.start == 1));
    // Entry 0 is always flagged.
    assert!(entries[0].is_active());
    assert_eq!(entries.iter().filter(|entry| entry.is_active()).count(), 1);
}

#[test]
fn random_configs_keep_invariants() {
    let mut random: ThreadRng = rand::rng();
    for _ in 0..500 {
        let config = DriveConfig {
            max_partition_blocks: random.random_range(1..=0xFFFF),
            full_partition_count: random.random_range(0..=20),
            max_active_partitions: random.random_range(0..=16),
            ..DriveConfig::default()
        };
        let built = build_table(&config).unwrap();
        let entries = built.block.entries().unwrap();
        assert_eq!(entries.len(), ENTRY_COUNT);
        assert_eq!(entries[0].start, 1);
        for pair in entries.windows(2) {
            assert_eq!(pair[1].start, pair[0].end());
        }
        let active = entries.iter().filter(|entry| entry.is_active()).count();
        assert!(active <= 4);
        assert!(active <= config.max_active_partitions);
    }
}

#[test]
fn active_flags_never_exceed_the_slots() {
    let config = DriveConfig {
        max_active_partitions: 16,
        ..DriveConfig::for_full_partitions(16)
    };
    let built = build_table(&config).unwrap();
    let entries = built.block.entries().unwrap();
    // Every entry is full, but only the first four get the flag.
    assert!(entries.iter().all(|entry| entry.size == 0xFFFF));
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(entry.is_active(), index < 4, "entry {index}");
    }
}

#[test]
fn huge_drives_saturate_instead_of_overflowing() {
    // The block count saturates, and a 1x1 geometry needs more cylinders than fit.
    let config = DriveConfig::for_full_partitions(100_000).with_geometry(1, 1);
    assert_eq!(config.total_blocks, u32::MAX);
    // Wraps to the field width like every other oversized value.
    assert_eq!(config.cylinders, u32::MAX as u16);

    let built = build_table(&config).unwrap();
    assert_eq!(built.block.cylinders().unwrap(), 0xFFFF);
}
