// Reading and writing partition entries.

// Imports

use crate::codec::byte_codec::{get_text, set_text};
use crate::error_types::table::TableError;
use crate::table::block::block_methods::{read_number, write_number};
use crate::table::block::block_struct::LogicalBlock;
use crate::table::entry::entry_struct::{PartitionEntry, PartitionFlags, PartitionKind};
use crate::table::layout::{entry_offset, EntryFieldKind, ENTRY_COUNT, ENTRY_LAYOUT};

// Implementations

impl PartitionEntry {
    /// Pull entry `index` out of the block.
    pub fn read(block: &LogicalBlock, index: usize) -> Result<Self, TableError> {
        read_entry(block, index)
    }
    /// Overwrite entry `index` in the block.
    pub fn write(&self, block: &mut LogicalBlock, index: usize) -> Result<(), TableError> {
        write_entry(self, block, index)
    }
    pub fn flags(&self) -> PartitionFlags {
        PartitionFlags::from_bits_truncate(self.type_byte)
    }
    pub fn kind(&self) -> PartitionKind {
        PartitionKind::from_type_byte(self.type_byte)
    }
    pub fn is_active(&self) -> bool {
        self.flags().contains(PartitionFlags::Active)
    }
    pub fn is_locked(&self) -> bool {
        self.flags().contains(PartitionFlags::Locked)
    }
    /// First block after this partition.
    pub fn end(&self) -> u32 {
        self.start + self.size as u32
    }
}

impl PartitionKind {
    pub fn from_type_byte(type_byte: u8) -> Self {
        match type_byte & 0x0F {
            0 => PartitionKind::Clear,
            1 => PartitionKind::ProDos,
            2 => PartitionKind::Dos33,
            3 => PartitionKind::Pascal,
            4 => PartitionKind::CpM,
            _ => PartitionKind::Unknown(type_byte),
        }
    }
    /// Name as the partition manager shows it.
    pub fn label(&self) -> String {
        match self {
            PartitionKind::Clear => "CLEAR".to_string(),
            PartitionKind::ProDos => "PRODOS".to_string(),
            PartitionKind::Dos33 => "DOS3.3".to_string(),
            PartitionKind::Pascal => "PASCAL".to_string(),
            PartitionKind::CpM => "CP/M".to_string(),
            PartitionKind::Unknown(raw) => format!("UNKNOWN: 0x{raw:02X}"),
        }
    }
}

impl LogicalBlock {
    pub fn entry(&self, index: usize) -> Result<PartitionEntry, TableError> {
        PartitionEntry::read(self, index)
    }
    pub fn set_entry(&mut self, index: usize, entry: &PartitionEntry) -> Result<(), TableError> {
        entry.write(self, index)
    }
    /// All 16 entries, in table order.
    pub fn entries(&self) -> Result<Vec<PartitionEntry>, TableError> {
        (0..ENTRY_COUNT).map(|index| self.entry(index)).collect()
    }
}

// Functions

fn read_entry(block: &LogicalBlock, index: usize) -> Result<PartitionEntry, TableError> {
    let base = entry_offset(index);
    let mut entry = PartitionEntry {
        start: 0,
        size: 0,
        type_byte: 0,
        name: String::new(),
    };

    for field in ENTRY_LAYOUT.iter() {
        let offset = base + field.offset;
        match field.kind {
            EntryFieldKind::Start => entry.start = read_number(&block.data, offset, field.width)?,
            EntryFieldKind::Size => entry.size = read_number(&block.data, offset, field.width)? as u16,
            EntryFieldKind::TypeAndFlags => {
                entry.type_byte = read_number(&block.data, offset, field.width)? as u8
            }
            EntryFieldKind::Name => entry.name = get_text(&block.data, offset, field.width)?,
        }
    }

    Ok(entry)
}

fn write_entry(entry: &PartitionEntry, block: &mut LogicalBlock, index: usize) -> Result<(), TableError> {
    // Reconstruct so adding a field to the entry forces a look at this function.
    let PartitionEntry {
        start,
        size,
        type_byte,
        name,
    } = entry;

    let base = entry_offset(index);
    for field in ENTRY_LAYOUT.iter() {
        let offset = base + field.offset;
        match field.kind {
            EntryFieldKind::Start => write_number(&mut block.data, offset, field.width, *start)?,
            EntryFieldKind::Size => write_number(&mut block.data, offset, field.width, *size as u32)?,
            EntryFieldKind::TypeAndFlags => {
                write_number(&mut block.data, offset, field.width, *type_byte as u32)?
            }
            EntryFieldKind::Name => set_text(&mut block.data, offset, field.width, name)?,
        }
    }

    Ok(())
}
