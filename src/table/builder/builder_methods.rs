// Making a table from scratch.

// Imports

use log::{debug, warn};

use crate::codec::byte_codec::{fill, set_bytes};
use crate::error_types::table::{AssertionFault, TableError};
use crate::error_types::warning::TableWarning;
use crate::table::block::block_methods::write_number;
use crate::table::block::block_struct::LogicalBlock;
use crate::table::builder::config_struct::DriveConfig;
use crate::table::checksum::add_checksum_to_block;
use crate::table::entry::entry_struct::{PartitionEntry, PartitionFlags};
use crate::table::layout::{
    FieldKind, FieldSpec, ReservedFill, ACTIVE_SLOT_COUNT, ENTRY_COUNT, FIRST_PARTITION_BLOCK,
    HEADER_LAYOUT, MAGIC, UNUSED_ACTIVE_SLOT,
};

// Structs

/// A freshly built table, and whatever the builder had to say about the config.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuiltTable {
    pub block: LogicalBlock,
    pub warnings: Vec<TableWarning>,
}

// Implementations

impl LogicalBlock {
    /// Build a complete table from a drive configuration.
    pub fn build(config: &DriveConfig) -> Result<BuiltTable, TableError> {
        build_table(config)
    }
}

// Functions

pub fn build_table(config: &DriveConfig) -> Result<BuiltTable, TableError> {
    debug!("Building a partition table for {config:?}");
    let mut block = LogicalBlock::zeroed();
    let mut warnings: Vec<TableWarning> = Vec::new();

    // Header first, in layout order.
    for spec in HEADER_LAYOUT.iter() {
        write_header_field(&mut block, spec, config)?;
    }

    // The pool is derived from the full partition count. The declared total is
    // written as configured, the hardware does not care if they disagree.
    let pool = config.pool_blocks();
    let derived_total = pool.saturating_add(1);
    if config.total_blocks != derived_total {
        let warning = TableWarning::PoolMismatch {
            configured: config.total_blocks,
            derived: derived_total,
        };
        warn!("{warning}");
        warnings.push(warning);
    }

    size_partitions(&mut block, config, pool)?;

    // Seal it.
    add_checksum_to_block(&mut block);
    debug!("Table built, checksum is 0x{:04X}.", block.stored_checksum()?);

    Ok(BuiltTable { block, warnings })
}

fn write_header_field(
    block: &mut LogicalBlock,
    spec: &FieldSpec,
    config: &DriveConfig,
) -> Result<(), TableError> {
    let value: u32 = match spec.kind {
        FieldKind::Magic => MAGIC as u32,
        // Filled in once everything else is in place.
        FieldKind::Checksum => 0,
        FieldKind::DriveType => config.drive_type as u32,
        FieldKind::TotalBlocks => config.total_blocks,
        FieldKind::Cylinders => config.cylinders as u32,
        FieldKind::Heads => config.heads as u32,
        FieldKind::Sectors => config.sectors as u32,
        FieldKind::Interleave => config.interleave as u32,
        FieldKind::BootIndex => config.boot_index as u32,
        // The manager fills these in when partitions get activated.
        FieldKind::ActiveSlot(_) => UNUSED_ACTIVE_SLOT as u32,
        FieldKind::Reserved(reserved_fill) => {
            return write_reserved(block, spec, reserved_fill);
        }
    };
    write_number(&mut block.data, spec.offset, spec.width, value)
}

fn write_reserved(
    block: &mut LogicalBlock,
    spec: &FieldSpec,
    reserved_fill: ReservedFill,
) -> Result<(), TableError> {
    match reserved_fill {
        ReservedFill::Zero => fill(&mut block.data, spec.offset, spec.width, 0),
        ReservedFill::Repeat(value) => fill(&mut block.data, spec.offset, spec.width, value),
        ReservedFill::Bytes(bytes) => {
            if bytes.len() != spec.width {
                return Err(AssertionFault::FieldWidth {
                    offset: spec.offset,
                    width: bytes.len(),
                }
                .into());
            }
            set_bytes(&mut block.data, spec.offset, bytes)
        }
    }
}

/// Hand the pool out to the entries, front to back.
///
/// Only the active flag is set on the type byte, the kind nibble stays clear.
/// Partitions get their kind when the manager formats them.
fn size_partitions(block: &mut LogicalBlock, config: &DriveConfig, pool: u32) -> Result<(), TableError> {
    let max_size = config.max_partition_blocks;
    // The manager has four active slots, no config gets more than that.
    let active_limit = config.max_active_partitions.min(ACTIVE_SLOT_COUNT);
    let mut free_blocks = pool;
    let mut start = FIRST_PARTITION_BLOCK;

    for index in 0..ENTRY_COUNT {
        let size = free_blocks.min(max_size as u32) as u16;
        free_blocks -= size as u32;

        let wants_active = index == 0 || size == max_size;
        let type_byte = if wants_active && index < active_limit {
            PartitionFlags::Active.bits()
        } else {
            0
        };

        let entry = PartitionEntry {
            start,
            size,
            type_byte,
            name: format!("AE{}", index + 1),
        };
        debug!("Entry {index}: start 0x{start:06X}, size 0x{size:04X}, type 0x{type_byte:02X}");
        entry.write(block, index)?;

        start += size as u32;
    }

    Ok(())
}
