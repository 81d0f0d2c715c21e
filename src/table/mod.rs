// The partition table itself.

pub mod block;
pub mod builder;
pub mod checksum;
pub mod drive_type;
pub mod entry;
pub mod layout;
