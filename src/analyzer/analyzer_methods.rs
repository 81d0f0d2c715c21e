// Walking a table and writing down what we find.
//
// The walk follows the declared layout with a running cursor. Anything that
// breaks the layout stops the walk, anything that merely looks wrong is noted
// as a warning and the walk carries on.

// Imports

use log::{debug, error, warn};

use crate::analyzer::report_struct::{
    EntryReport, FieldValue, GeometryReport, HeaderFieldReport, TableReport,
};
use crate::analyzer::sizes::{blocks_to_bytes, kilobytes_half_even, megabytes_half_up};
use crate::codec::byte_codec::get_bytes;
use crate::error_types::table::{AssertionFault, TableError};
use crate::error_types::warning::TableWarning;
use crate::table::block::block_methods::read_number;
use crate::table::block::block_struct::LogicalBlock;
use crate::table::checksum::{check_checksum, compute_checksum};
use crate::table::drive_type::drive_type_label;
use crate::table::layout::{
    entry_offset, FieldKind, ENTRY_COUNT, ENTRY_SIZE, ENTRY_TABLE_END, ENTRY_TABLE_OFFSET,
    FIRST_PARTITION_BLOCK, HEADER_LAYOUT, MAGIC,
};

// Implementations

impl LogicalBlock {
    /// Decode and check the whole table.
    pub fn analyze(&self) -> Result<TableReport, TableError> {
        analyze(self)
    }
}

impl TableReport {
    /// True if nothing looked off.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
    /// How many entries carry the active flag.
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.active).count()
    }
}

// Functions

/// Analyze a table held in a scratch buffer of 512 bytes or more.
/// Anything past the table must be zero.
pub fn analyze_scratch(buffer: &[u8]) -> Result<TableReport, TableError> {
    let block = LogicalBlock::from_scratch(buffer).inspect_err(|err| error!("{err}"))?;
    analyze(&block)
}

pub fn analyze(block: &LogicalBlock) -> Result<TableReport, TableError> {
    // Without the magic this is not one of our tables, nothing else is worth reading.
    let magic = block.magic()?;
    if magic != MAGIC {
        let fault = AssertionFault::BadMagic {
            expected: MAGIC,
            found: magic,
        };
        error!("{fault}");
        return Err(fault.into());
    }

    let mut warnings: Vec<TableWarning> = Vec::new();

    // Header
    let header = walk_header(block)?;
    let geometry = read_geometry(block)?;
    debug!("Header decoded: {geometry:?}");

    // Entries
    let entries = walk_entries(block, geometry.boot_index, &mut warnings)?;
    let partitioned_blocks = FIRST_PARTITION_BLOCK
        + entries.iter().map(|entry| entry.size as u32).sum::<u32>();

    // Cross checks
    let computed_checksum = compute_checksum(block);
    if let Some((stored, computed)) = check_checksum(block) {
        note(&mut warnings, TableWarning::ChecksumMismatch { stored, computed });
    }

    if partitioned_blocks != geometry.total_blocks {
        note(
            &mut warnings,
            TableWarning::BlockCountMismatch {
                partitioned: partitioned_blocks,
                declared: geometry.total_blocks,
            },
        );
    }

    let derived_cylinders = geometry
        .total_blocks
        .checked_div(geometry.heads as u32)
        .and_then(|per_head| per_head.checked_div(geometry.sectors as u32));
    match derived_cylinders {
        Some(derived) if derived > geometry.cylinders as u32 => note(
            &mut warnings,
            TableWarning::CylinderMismatch {
                derived,
                declared: geometry.cylinders,
            },
        ),
        Some(_) => {}
        None => debug!("Zero heads or sectors, skipping the cylinder check."),
    }

    // Sizes
    let logical_size = megabytes_half_up(blocks_to_bytes(geometry.total_blocks as u64));
    let native_size = megabytes_half_up(blocks_to_bytes(
        geometry.cylinders as u64 * geometry.heads as u64 * geometry.sectors as u64,
    ));

    Ok(TableReport {
        header,
        geometry,
        computed_checksum,
        derived_cylinders,
        logical_size,
        native_size,
        entries,
        partitioned_blocks,
        warnings,
    })
}

fn note(warnings: &mut Vec<TableWarning>, warning: TableWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

/// Every header field must start where the previous one ended, and the last
/// one must end where the entries begin.
fn expect_cursor(expected: usize, found: usize) -> Result<(), TableError> {
    if expected == found {
        return Ok(());
    }
    let fault = AssertionFault::CursorMismatch { expected, found };
    error!("{fault}");
    Err(fault.into())
}

fn walk_header(block: &LogicalBlock) -> Result<Vec<HeaderFieldReport>, TableError> {
    let mut cursor: usize = 0;
    let mut fields: Vec<HeaderFieldReport> = Vec::with_capacity(HEADER_LAYOUT.len());

    for spec in HEADER_LAYOUT.iter() {
        expect_cursor(cursor, spec.offset)?;
        let value = match spec.kind {
            FieldKind::Reserved(_) => {
                FieldValue::Opaque(get_bytes(&block.data, spec.offset, spec.width)?.to_vec())
            }
            _ => FieldValue::Number(read_number(&block.data, spec.offset, spec.width)?),
        };
        fields.push(HeaderFieldReport {
            name: spec.name,
            offset: spec.offset,
            width: spec.width,
            value,
        });
        cursor = spec.end();
    }

    expect_cursor(ENTRY_TABLE_OFFSET, cursor)?;
    Ok(fields)
}

fn read_geometry(block: &LogicalBlock) -> Result<GeometryReport, TableError> {
    let drive_type = block.drive_type()?;
    Ok(GeometryReport {
        magic: block.magic()?,
        stored_checksum: block.stored_checksum()?,
        drive_type,
        drive_type_label: drive_type_label(drive_type),
        total_blocks: block.total_blocks()?,
        cylinders: block.cylinders()?,
        heads: block.heads()?,
        sectors: block.sectors()?,
        interleave: block.interleave()?,
        boot_index: block.boot_index()?,
        active_slots: block.active_slots()?,
    })
}

fn walk_entries(
    block: &LogicalBlock,
    boot_index: u8,
    warnings: &mut Vec<TableWarning>,
) -> Result<Vec<EntryReport>, TableError> {
    let mut cursor: usize = ENTRY_TABLE_OFFSET;
    let mut next_block: u32 = FIRST_PARTITION_BLOCK;
    let mut entries: Vec<EntryReport> = Vec::with_capacity(ENTRY_COUNT);

    for index in 0..ENTRY_COUNT {
        expect_cursor(cursor, entry_offset(index))?;
        let entry = block.entry(index)?;

        if entry.start != next_block {
            note(
                warnings,
                TableWarning::StartMismatch {
                    index,
                    found: entry.start,
                    expected: next_block,
                },
            );
        }
        // The next entry has to follow this one, wherever this one ended up.
        next_block = entry.end();

        entries.push(EntryReport {
            index,
            start: entry.start,
            size: entry.size,
            type_byte: entry.type_byte,
            kind: entry.kind(),
            active: entry.is_active(),
            locked: entry.is_locked(),
            size_kb: kilobytes_half_even(blocks_to_bytes(entry.size as u64)),
            boot: index == boot_index as usize,
            name: entry.name,
        });
        cursor += ENTRY_SIZE;
    }

    expect_cursor(ENTRY_TABLE_END, cursor)?;
    Ok(entries)
}
