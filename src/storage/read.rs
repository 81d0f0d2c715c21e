// Reading!

// Imports

use log::{debug, trace};
use std::io::Read;
use std::{fs::File, path::Path};

use crate::error_types::storage::StorageError;
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};
use crate::table::layout::BLOCK_SIZE;

// Implementations

impl PhysicalSector {
    /// Read the first sector of an image file or device.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        load_sector(path)
    }
}

// Functions

/// Read the first 512 bytes of `path`.
///
/// A source shorter than a sector is padded out with zeros.
pub fn load_sector(path: &Path) -> Result<PhysicalSector, StorageError> {
    trace!("Reading sector 0 of {}...", path.display());
    let file = File::open(path)?;

    let mut read_buffer: Vec<u8> = Vec::with_capacity(BLOCK_SIZE);
    let read = file.take(BLOCK_SIZE as u64).read_to_end(&mut read_buffer)?;
    if read < BLOCK_SIZE {
        debug!("Only got {read} bytes, padding the rest with zeros.");
    }

    let mut data = [0u8; BLOCK_SIZE];
    data[..read].copy_from_slice(&read_buffer[..read]);
    Ok(PhysicalSector::from_bytes(data))
}

/// Load sector 0 and put it back in logical order.
pub fn load_table(path: &Path) -> Result<LogicalBlock, StorageError> {
    Ok(load_sector(path)?.to_logical())
}
