// What a fresh table is built from.

// Imports

use crate::table::drive_type::DRIVE_TYPE_SWIFT_200;
use crate::table::layout::{ACTIVE_SLOT_COUNT, MAX_PARTITION_BLOCKS};

// Constants

/// The manager shows five fewer cylinders than are stored, so we store five extra.
pub const CYLINDER_DISPLAY_OFFSET: u32 = 5;

/// 6 heads and 39 sectors per track are what CF cards are stable with.
/// Other combinations cause trouble formatting or copying on some partitions.
pub const DEFAULT_HEADS: u8 = 6;
pub const DEFAULT_SECTORS: u8 = 39;

/// Five full ProDOS partitions. Six makes the manager show the wrong drive size,
/// and only four can be active anyway.
pub const DEFAULT_FULL_PARTITIONS: u32 = 5;

// Structs

/// Drive parameters and sizing policy for the builder.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DriveConfig {
    /// Cosmetic, decides the name the manager shows.
    pub drive_type: u8,
    pub total_blocks: u32,
    pub cylinders: u16,
    pub heads: u8,
    pub sectors: u8,
    /// 1 means no skew. Fast disks and CF cards want 1.
    pub interleave: u8,
    pub boot_index: u8,
    /// How many partitions may carry the active flag. Anything above the
    /// four active slots is treated as four.
    pub max_active_partitions: usize,
    /// Largest partition, in blocks.
    pub max_partition_blocks: u16,
    /// How many partitions to size as full. The pool handed out to the
    /// entries is derived from this, not from `total_blocks`.
    pub full_partition_count: u32,
}

// Implementations

impl Default for DriveConfig {
    fn default() -> Self {
        DriveConfig::for_full_partitions(DEFAULT_FULL_PARTITIONS)
    }
}

impl DriveConfig {
    /// A CF card configuration holding `count` full size ProDOS partitions.
    ///
    /// Total blocks and cylinders are derived from the count with the default
    /// geometry. Values too big for their fields wrap when written.
    pub fn for_full_partitions(count: u32) -> Self {
        let total_blocks = count.saturating_mul(MAX_PARTITION_BLOCKS as u32 + 1);
        Self {
            drive_type: DRIVE_TYPE_SWIFT_200,
            total_blocks,
            cylinders: cylinders_for(total_blocks, DEFAULT_HEADS, DEFAULT_SECTORS),
            heads: DEFAULT_HEADS,
            sectors: DEFAULT_SECTORS,
            interleave: 1,
            boot_index: 0,
            max_active_partitions: ACTIVE_SLOT_COUNT,
            max_partition_blocks: MAX_PARTITION_BLOCKS,
            full_partition_count: count,
        }
    }

    /// Change the geometry, recomputing the cylinder count to match.
    pub fn with_geometry(mut self, heads: u8, sectors: u8) -> Self {
        self.heads = heads;
        self.sectors = sectors;
        self.cylinders = cylinders_for(self.total_blocks, heads, sectors);
        self
    }

    /// The blocks the builder hands out to partitions.
    pub fn pool_blocks(&self) -> u32 {
        (self.max_partition_blocks as u32 + 1)
            .saturating_mul(self.full_partition_count)
            .saturating_sub(1)
    }
}

// Functions

/// Cylinders needed for `total_blocks`, plus the display offset.
/// A zero head or sector count gives just the offset.
fn cylinders_for(total_blocks: u32, heads: u8, sectors: u8) -> u16 {
    let per_cylinder = heads as u32 * sectors as u32;
    let needed = total_blocks.checked_div(per_cylinder).unwrap_or(0);
    needed.saturating_add(CYLINDER_DISPLAY_OFFSET) as u16
}
