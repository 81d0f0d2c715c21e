// Error types pertaining to the image file or device holding the table.

use thiserror::Error;

use crate::error_types::table::TableError;

#[derive(Debug, Error)]
/// Failures while loading or storing a sector.
///
/// IO errors are passed up untouched, the caller decides what to tell the user.
pub enum StorageError {
    #[error("IO failure: {0}")]
    IoFailure(#[from] std::io::Error),
    /// Loading worked, but the sector did not hold a usable table.
    #[error(transparent)]
    Table(#[from] TableError),
}
