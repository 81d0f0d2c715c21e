#![allow(clippy::unwrap_used)]

use log::info;
use rand::{rng, rngs::ThreadRng, Rng};
// We want to see logs while testing.
use test_log::test;

use vulcan_table::analyzer::analyzer_methods::analyze;
use vulcan_table::error_types::storage::StorageError;
use vulcan_table::error_types::table::{AssertionFault, TableError};
use vulcan_table::error_types::warning::TableWarning;
use vulcan_table::helpers::report_view::render_report;
use vulcan_table::storage::read::{load_sector, load_table};
use vulcan_table::storage::write::store_table;
use vulcan_table::table::block::block_struct::LogicalBlock;
use vulcan_table::table::builder::builder_methods::build_table;
use vulcan_table::table::builder::config_struct::DriveConfig;
use vulcan_table::table::entry::entry_struct::PartitionKind;


#[test]
// Build a table, put it on an image, read it back and check it.
fn build_store_load_analyze() {
    let dir = test_common::get_actually_temp_dir();
    let path = test_common::make_image(&dir, "card.po", 64, 0x00);

    let built = build_table(&DriveConfig::default()).unwrap();
    assert!(built.warnings.is_empty());
    store_table(&path, &built.block).unwrap();

    // On disk the header and the entries alternate every two bytes, so the
    // magic is followed by the start of the first partition.
    let raw = load_sector(&path).unwrap();
    assert_eq!(&raw.as_bytes()[..4], &[0xAE, 0xAE, 0x01, 0x00]);
    assert_ne!(raw.as_bytes(), built.block.as_bytes());

    let loaded = load_table(&path).unwrap();
    assert_eq!(loaded, built.block);

    let report = analyze(&loaded).unwrap();
    assert!(report.is_clean(), "{:?}", report.warnings);
    assert_eq!(report.active_count(), 4);
    assert_eq!(report.entries[0].name, "AE1       ");
    assert!(report.entries.iter().all(|entry| entry.kind == PartitionKind::Clear));
    info!("\n{}", render_report(&report));
}

#[test]
// Rewriting the table of a used card must leave the partitions alone.
fn partitions_survive_a_rebuild() {
    let dir = test_common::get_actually_temp_dir();
    let path = test_common::make_image(&dir, "used.po", 128, 0x6D);

    let built = build_table(&DriveConfig::for_full_partitions(2)).unwrap();
    store_table(&path, &built.block).unwrap();

    let image = std::fs::read(&path).unwrap();
    assert_eq!(image.len(), 128 * 512);
    assert!(image[512..].iter().all(|byte| *byte == 0x6D));
}

#[test]
// Random garbage is not a table.
fn garbage_is_rejected() {
    let dir = test_common::get_actually_temp_dir();
    let path = dir.path().join("garbage.bin");
    let mut random: ThreadRng = rng();
    let mut data = [0u8; 512];
    random.fill(&mut data);
    // Make sure we did not roll the magic by accident.
    data[0] = 0x00;
    std::fs::write(&path, data).unwrap();

    let block = load_table(&path).unwrap();
    assert!(matches!(
        analyze(&block),
        Err(TableError::AssertionFailed(AssertionFault::BadMagic { .. }))
    ));
}

#[test]
// An empty file loads as zeros, which also is not a table.
fn empty_image_has_no_table() {
    let dir = test_common::get_actually_temp_dir();
    let path = test_common::make_image(&dir, "empty.po", 0, 0x00);
    let block = load_table(&path).unwrap();
    assert_eq!(block, LogicalBlock::zeroed());
    assert!(analyze(&block).is_err());
}

#[test]
fn missing_image_is_an_io_failure() {
    let dir = test_common::get_actually_temp_dir();
    let result = load_table(&dir.path().join("not_here.po"));
    assert!(matches!(result, Err(StorageError::IoFailure(_))));
}

#[test]
// Geometry that does not fit the blocks is still written, and reported.
fn odd_geometry_round_trips_with_warnings() {
    let dir = test_common::get_actually_temp_dir();
    let path = test_common::make_image(&dir, "odd.po", 1, 0x00);

    let config = DriveConfig {
        cylinders: 10,
        ..DriveConfig::default()
    };
    store_table(&path, &build_table(&config).unwrap().block).unwrap();

    let report = analyze(&load_table(&path).unwrap()).unwrap();
    assert_eq!(report.geometry.cylinders, 10);
    assert_eq!(
        report.warnings,
        vec![TableWarning::CylinderMismatch {
            derived: 1400,
            declared: 10
        }]
    );
}
