// The two shapes of block 0.

use crate::table::layout::BLOCK_SIZE;

// Structs

/// Block 0 in field addressable order.
///
/// This should only ever be produced by the builder or by de-interleaving a
/// PhysicalSector, never written to the medium directly.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LogicalBlock {
    pub(crate) data: [u8; BLOCK_SIZE],
}

/// Block 0 exactly as it is stored on the medium.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PhysicalSector {
    pub(crate) data: [u8; BLOCK_SIZE],
}
