// Writing!

// Imports

use log::{error, trace};
use std::fs::{File, OpenOptions};
use std::os::unix::fs::FileExt;
use std::path::Path;

use crate::error_types::storage::StorageError;
use crate::table::block::block_struct::{LogicalBlock, PhysicalSector};

// Implementations

impl PhysicalSector {
    /// Write this sector over sector 0 of an image file or device.
    pub fn store(&self, path: &Path) -> Result<(), StorageError> {
        store_sector(path, self)
    }
}

// Functions

/// Write exactly one sector at offset 0.
///
/// The target is created if missing but never truncated, anything past the
/// first sector stays where it was.
pub fn store_sector(path: &Path, sector: &PhysicalSector) -> Result<(), StorageError> {
    trace!("Writing sector 0 of {}...", path.display());
    let file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .inspect_err(|err| error!("Could not open {}: {err}", path.display()))?;

    file.write_all_at(sector.as_bytes(), 0)?;
    file.sync_all()?;
    trace!("Sector written successfully.");
    Ok(())
}

/// Interleave a logical block and store it.
pub fn store_table(path: &Path, block: &LogicalBlock) -> Result<(), StorageError> {
    store_sector(path, &block.to_physical())
}
