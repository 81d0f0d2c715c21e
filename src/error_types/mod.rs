// Every error the crate can hand back.
// Fatal layout problems, codec misuse, storage failures, and the non-fatal warnings.

pub mod storage;
pub mod table;
pub mod warning;
