// Non-fatal problems.
// The partition manager is known to tolerate every one of these, so they are
// collected and reported, never raised.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableWarning {
    #[error("stored checksum 0x{stored:04X} does not match computed checksum 0x{computed:04X}")]
    ChecksumMismatch { stored: u16, computed: u16 },
    #[error("partition {index} starts at block 0x{found:06X}, expected 0x{expected:06X}")]
    StartMismatch {
        index: usize,
        found: u32,
        expected: u32,
    },
    #[error("partitions cover 0x{partitioned:06X} blocks, drive declares 0x{declared:06X}")]
    BlockCountMismatch { partitioned: u32, declared: u32 },
    #[error("block count needs {derived} cylinders, drive declares {declared}")]
    CylinderMismatch { derived: u32, declared: u16 },
    #[error("configured block count 0x{configured:06X} does not match the sized pool plus table block 0x{derived:06X}")]
    PoolMismatch { configured: u32, derived: u32 },
}
