// Partition entries

// Imports
use bitflags::bitflags;

// Structs, Enums, Flags

/// One 16 byte partition descriptor.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PartitionEntry {
    /// First block of the partition, absolute.
    pub start: u32,
    /// Number of blocks. 16 bits, so at most 0xFFFF.
    pub size: u16,
    /// Low nibble is the kind, high bits are flags. Kept raw so unknown
    /// kinds survive a round trip.
    pub type_byte: u8,
    /// Name as stored, high bits already stripped.
    pub name: String,
}

bitflags! {
    /// Flag bits of the partition type byte.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct PartitionFlags: u8 {
        /// Partition is one of the (at most four) active ProDOS volumes.
        const Active = 0b0100_0000;
        /// Manager refuses to modify the partition.
        const Locked = 0b1000_0000;
    }
}

/// What the low nibble of the type byte says lives in the partition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PartitionKind {
    Clear,
    ProDos,
    Dos33,
    Pascal,
    CpM,
    /// Carries the whole type byte, not just the nibble.
    Unknown(u8),
}
