// Where everything lives in the logical block.
//
// The header and the entry layouts are declared once, as data. The builder
// writes through these declarations and the analyzer reads through them, so the
// two can never disagree about an offset.

// Constants

/// Bytes per block, which is also one logical disk sector.
pub const BLOCK_SIZE: usize = 512;

/// "Applied Engineering". Every table starts with this.
pub const MAGIC: u16 = 0xAEAE;

/// Offset of the checksum, the checksum skips its own byte pair.
pub const CHECKSUM_OFFSET: usize = 0x02;

/// The partition entries fill the back half of the block.
pub const ENTRY_TABLE_OFFSET: usize = 0x100;
pub const ENTRY_SIZE: usize = 16;
pub const ENTRY_COUNT: usize = 16;
pub const ENTRY_TABLE_END: usize = ENTRY_TABLE_OFFSET + ENTRY_SIZE * ENTRY_COUNT;

/// Block 0 holds the table, partitions start right after it.
pub const FIRST_PARTITION_BLOCK: u32 = 1;

/// The manager can only have this many ProDOS partitions active at once.
pub const ACTIVE_SLOT_COUNT: usize = 4;
/// Marks an active slot as unused.
pub const UNUSED_ACTIVE_SLOT: u8 = 0xFF;

/// Largest partition a 16 bit size field can describe.
pub const MAX_PARTITION_BLOCKS: u16 = 0xFFFF;

pub const NAME_LEN: usize = 10;

// Structs, Enums

/// What a header field means.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    Magic,
    Checksum,
    DriveType,
    TotalBlocks,
    Cylinders,
    Heads,
    Sectors,
    Interleave,
    BootIndex,
    /// One of the active ProDOS partition slots.
    ActiveSlot(usize),
    /// Bytes nobody has figured out. Preserved exactly, never decoded.
    /// The builder writes the given default.
    Reserved(ReservedFill),
}

/// What the builder puts into a reserved region.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReservedFill {
    Zero,
    Repeat(u8),
    Bytes(&'static [u8]),
}

/// One header field.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, offset: usize, width: usize, kind: FieldKind) -> Self {
        Self {
            name,
            offset,
            width,
            kind,
        }
    }
    /// Offset of the first byte after this field.
    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// The fields of one partition entry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntryFieldKind {
    Start,
    Size,
    TypeAndFlags,
    Name,
}

/// One partition entry field, offset is relative to the start of the entry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EntryFieldSpec {
    pub offset: usize,
    pub width: usize,
    pub kind: EntryFieldKind,
}

// Layouts

use FieldKind::*;
use ReservedFill::*;

/// The header, in on-disk order, covering 0x000 up to the entry table.
pub const HEADER_LAYOUT: [FieldSpec; 28] = [
    FieldSpec::new("magic", 0x00, 2, Magic),
    FieldSpec::new("checksum", 0x02, 2, Checksum),
    FieldSpec::new("drive type", 0x04, 1, DriveType),
    FieldSpec::new("blocks", 0x05, 3, TotalBlocks),
    FieldSpec::new("reserved", 0x08, 1, Reserved(Zero)),
    FieldSpec::new("cylinders", 0x09, 2, Cylinders),
    FieldSpec::new("heads", 0x0B, 1, Heads),
    FieldSpec::new("sectors", 0x0C, 1, Sectors),
    FieldSpec::new("interleave", 0x0D, 1, Interleave),
    FieldSpec::new("boot partition", 0x0E, 1, BootIndex),
    FieldSpec::new("reserved", 0x0F, 2, Reserved(Repeat(0xFF))),
    FieldSpec::new("ProDOS slot 1", 0x11, 1, ActiveSlot(0)),
    FieldSpec::new("ProDOS slot 2", 0x12, 1, ActiveSlot(1)),
    FieldSpec::new("ProDOS slot 3", 0x13, 1, ActiveSlot(2)),
    FieldSpec::new("ProDOS slot 4", 0x14, 1, ActiveSlot(3)),
    FieldSpec::new("reserved", 0x15, 8, Reserved(Repeat(0xFF))),
    // Filled in by the manager when the interleave is above 1, all zero otherwise.
    FieldSpec::new("sector skew list", 0x1D, 113, Reserved(Zero)),
    FieldSpec::new("reserved", 0x8E, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0x94, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0x9A, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0xA0, 2, Reserved(Zero)),
    FieldSpec::new("reserved", 0xA2, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0xA8, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0xAE, 6, Reserved(Zero)),
    FieldSpec::new("reserved", 0xB4, 2, Reserved(Zero)),
    FieldSpec::new("reserved", 0xB6, 3, Reserved(Bytes(&[0x00, 0x80, 0x01]))),
    FieldSpec::new("empty", 0xB9, 7, Reserved(Zero)),
    FieldSpec::new("empty", 0xC0, 64, Reserved(Zero)),
];

/// A single partition entry, 16 bytes.
pub const ENTRY_LAYOUT: [EntryFieldSpec; 4] = [
    EntryFieldSpec {
        offset: 0,
        width: 3,
        kind: EntryFieldKind::Start,
    },
    EntryFieldSpec {
        offset: 3,
        width: 2,
        kind: EntryFieldKind::Size,
    },
    EntryFieldSpec {
        offset: 5,
        width: 1,
        kind: EntryFieldKind::TypeAndFlags,
    },
    EntryFieldSpec {
        offset: 6,
        width: NAME_LEN,
        kind: EntryFieldKind::Name,
    },
];

/// Find a header field by what it means.
pub fn header_field(kind: FieldKind) -> Option<&'static FieldSpec> {
    HEADER_LAYOUT.iter().find(|spec| spec.kind == kind)
}

/// Offset of entry `index` within the block.
pub fn entry_offset(index: usize) -> usize {
    ENTRY_TABLE_OFFSET + index * ENTRY_SIZE
}
