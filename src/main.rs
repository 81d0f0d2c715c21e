mod options;

use std::path::Path;

use gumdrop::Options;
use log::info;
use vulcan_table::analyzer::analyzer_methods::analyze;
use vulcan_table::helpers::hex_view::hex_view;
use vulcan_table::helpers::report_view::render_report;
use vulcan_table::storage::read::load_table;
use vulcan_table::storage::write::store_table;
use vulcan_table::table::block::block_struct::LogicalBlock;
use vulcan_table::table::builder::builder_methods::build_table;
use vulcan_table::table::builder::config_struct::DriveConfig;

use crate::options::{AnalyzeOpts, BuildOpts, Operation, VulcanOptions};

#[inline]
fn error_exit(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1)
}

fn main() {
    // Logs go to stderr, set RUST_LOG to see them.
    env_logger::init();

    let opts = VulcanOptions::parse_args_default_or_exit();

    let result = match opts.operation {
        None => error_exit("please specify the operation you want to perform"),
        Some(Operation::Analyze(analyze_opts)) => run_analyze(&analyze_opts),
        Some(Operation::Build(build_opts)) => run_build(&build_opts),
    };

    if let Err(msg) = result {
        error_exit(&msg);
    }
}

fn run_analyze(opts: &AnalyzeOpts) -> Result<(), String> {
    let block = load_table(&opts.image).map_err(|err| format!("reading {}: {err}", opts.image.display()))?;
    print_table(&opts.image, &block, opts.hex)
}

fn run_build(opts: &BuildOpts) -> Result<(), String> {
    let mut config = DriveConfig::for_full_partitions(opts.partitions);
    if opts.heads.is_some() || opts.sectors.is_some() {
        config = config.with_geometry(
            opts.heads.unwrap_or(config.heads),
            opts.sectors.unwrap_or(config.sectors),
        );
    }
    if let Some(drive_type) = opts.drive_type {
        config.drive_type = drive_type;
    }
    if let Some(interleave) = opts.interleave {
        config.interleave = interleave;
    }
    if let Some(boot) = opts.boot {
        config.boot_index = boot;
    }

    let built = build_table(&config).map_err(|err| format!("building the table: {err}"))?;
    for warning in &built.warnings {
        println!("WARNING: {warning}");
    }

    store_table(&opts.output, &built.block).map_err(|err| format!("writing {}: {err}", opts.output.display()))?;
    info!("Table written to {}", opts.output.display());
    print_table(&opts.output, &built.block, opts.hex)
}

fn print_table(path: &Path, block: &LogicalBlock, hex: bool) -> Result<(), String> {
    if hex {
        println!("{}", hex_view(block.as_bytes()));
    }
    let report = analyze(block).map_err(|err| format!("analyzing {}: {err}", path.display()))?;
    println!("-- Vulcan partition table: {} --", path.display());
    print!("{}", render_report(&report));
    Ok(())
}
