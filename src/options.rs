use std::num::ParseIntError;
use std::path::PathBuf;

use gumdrop::Options;

/// Bytes may be given as decimal, `0x10` or `$10`.
fn parse_byte(s: &str) -> Result<u8, ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix('$')) {
        u8::from_str_radix(hex, 16)
    } else {
        s.parse::<u8>()
    }
}

#[derive(Debug, Options)]
pub struct VulcanOptions {
    #[options(help = "get the text you are literally reading atm")]
    pub help: bool,

    #[options(command)]
    pub operation: Option<Operation>,
}

#[derive(Debug, Options)]
#[options(help = "operation to perform")]
pub enum Operation {
    #[options(help = "read and check the partition table of an image")]
    Analyze(AnalyzeOpts),
    #[options(help = "write a fresh partition table to an image")]
    Build(BuildOpts),
}

#[derive(Debug, Options)]
pub struct AnalyzeOpts {
    #[options(help = "get the text you are literally reading atm")]
    pub help: bool,

    #[options(help = "path to the image or device", required, free)]
    pub image: PathBuf,

    #[options(help = "also dump the table block", no_short)]
    pub hex: bool,
}

#[derive(Debug, Options)]
pub struct BuildOpts {
    #[options(help = "get the text you are literally reading atm")]
    pub help: bool,

    #[options(help = "path to the image or device to write to", required, free)]
    pub output: PathBuf,

    #[options(help = "how many full size partitions to make", default = "5")]
    pub partitions: u32,

    #[options(help = "drive type code shown by the manager", parse(try_from_str = "parse_byte"), no_short)]
    pub drive_type: Option<u8>,

    #[options(help = "heads per cylinder", no_short)]
    pub heads: Option<u8>,

    #[options(help = "sectors per track", no_short)]
    pub sectors: Option<u8>,

    #[options(help = "interleave factor, 1 is no skew", no_short)]
    pub interleave: Option<u8>,

    #[options(help = "index of the partition to boot", no_short)]
    pub boot: Option<u8>,

    #[options(help = "also dump the table block", no_short)]
    pub hex: bool,
}
