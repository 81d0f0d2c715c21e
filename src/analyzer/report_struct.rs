// What analyzing a table tells you.
// Plain values only, rendering is somebody else's problem.

// Imports

use crate::analyzer::sizes::DecimalSize;
use crate::error_types::warning::TableWarning;
use crate::table::entry::entry_struct::PartitionKind;
use crate::table::layout::ACTIVE_SLOT_COUNT;

// Structs, Enums

/// Everything read out of one logical block.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TableReport {
    /// Every header field, in on-disk order.
    pub header: Vec<HeaderFieldReport>,
    pub geometry: GeometryReport,
    /// Checksum as we would have written it.
    pub computed_checksum: u16,
    /// `total_blocks / heads / sectors`. None when heads or sectors is zero.
    pub derived_cylinders: Option<u32>,
    /// Size by block count, MB with one decimal, rounded half up.
    pub logical_size: DecimalSize,
    /// Size by cylinders, heads and sectors, same rounding.
    pub native_size: DecimalSize,
    pub entries: Vec<EntryReport>,
    /// Blocks covered by the entries, plus the table block itself.
    pub partitioned_blocks: u32,
    /// Everything that looked off but did not stop the analysis.
    pub warnings: Vec<TableWarning>,
}

/// A single header field as found.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderFieldReport {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub value: FieldValue,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldValue {
    Number(u32),
    /// Reserved regions are never decoded.
    Opaque(Vec<u8>),
}

/// The decoded drive description.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GeometryReport {
    pub magic: u16,
    pub stored_checksum: u16,
    pub drive_type: u8,
    /// Name the manager shows for the drive type, if it knows one.
    pub drive_type_label: Option<&'static str>,
    pub total_blocks: u32,
    pub cylinders: u16,
    pub heads: u8,
    pub sectors: u8,
    pub interleave: u8,
    pub boot_index: u8,
    pub active_slots: [u8; ACTIVE_SLOT_COUNT],
}

/// One decoded partition entry.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EntryReport {
    pub index: usize,
    pub start: u32,
    pub size: u16,
    pub type_byte: u8,
    pub kind: PartitionKind,
    pub active: bool,
    pub locked: bool,
    pub name: String,
    /// KB, rounded half to even.
    pub size_kb: DecimalSize,
    pub boot: bool,
}
