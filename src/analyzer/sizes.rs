// Human readable sizes.
//
// Drive sizes round half up, partition sizes round half to even. Both rules
// are what the reports have always shown, so both stay.

use std::fmt::{Display, Formatter};

use crate::table::layout::BLOCK_SIZE;

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = 1024 * 1024;

/// A size with exactly one decimal, stored in tenths.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct DecimalSize {
    pub tenths: u64,
}

impl Display for DecimalSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Megabytes to one decimal, half up.
pub fn megabytes_half_up(bytes: u64) -> DecimalSize {
    DecimalSize {
        tenths: (bytes * 10 + MEGABYTE / 2) / MEGABYTE,
    }
}

/// Whole kilobytes, half to even. Shown with a trailing `.0`.
pub fn kilobytes_half_even(bytes: u64) -> DecimalSize {
    let whole = bytes / KILOBYTE;
    let remainder = bytes % KILOBYTE;
    let rounded = match remainder.cmp(&(KILOBYTE / 2)) {
        std::cmp::Ordering::Less => whole,
        std::cmp::Ordering::Greater => whole + 1,
        // Exactly half, go to the even neighbour.
        std::cmp::Ordering::Equal => whole + (whole % 2),
    };
    DecimalSize {
        tenths: rounded * 10,
    }
}

/// Bytes in `blocks` blocks.
pub fn blocks_to_bytes(blocks: u64) -> u64 {
    blocks * BLOCK_SIZE as u64
}
