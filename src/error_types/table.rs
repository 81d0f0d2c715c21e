// Errors for table level operations.
// We do not allow string errors here either, every failure gets a variant.

use thiserror::Error;

use crate::table::layout::FieldKind;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
/// Anything that goes wrong while reading, building or transforming a table.
pub enum TableError {
    /// The block is not a table of this format, or the implementation disagrees
    /// with the fixed layout. Processing of the block must stop.
    #[error("Assertion failed: {0}")]
    AssertionFailed(#[from] AssertionFault),
    /// A codec access ran past the end of the buffer it was given.
    #[error("Access of {width} byte(s) at offset 0x{offset:03X} is outside of a {len} byte buffer.")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
/// Structural faults. None of these are caused by a recoverable condition.
pub enum AssertionFault {
    #[error("expected magic 0x{expected:04X}, found 0x{found:04X}")]
    BadMagic { expected: u16, found: u16 },
    #[error("expected layout cursor at 0x{expected:03X}, found 0x{found:03X}")]
    CursorMismatch { expected: usize, found: usize },
    #[error("buffer space past the table is not zero at offset 0x{offset:04X}")]
    NonZeroPadding { offset: usize },
    #[error("a {len} byte buffer cannot hold a 512 byte block")]
    BufferTooSmall { len: usize },
    #[error("no numeric field is {width} byte(s) wide (field at offset 0x{offset:03X})")]
    FieldWidth { offset: usize, width: usize },
    #[error("no numeric header field is declared for {0:?}")]
    UndeclaredField(FieldKind),
    #[error("transform index 0x{index:03X} is outside of the 512 byte block")]
    IndexOutOfRange { index: usize },
}
