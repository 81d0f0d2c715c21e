// The library cannot use unwraps.
#![deny(clippy::unwrap_used)]
// Gotta use all the results.
#![deny(unused_results)]

pub mod analyzer;
pub mod codec;
pub mod error_types;
pub mod helpers;
pub mod interleave;
pub mod storage;
pub mod table;
