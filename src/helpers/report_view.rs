// Turning a report into something a person can read.

// Imports

use crate::analyzer::report_struct::{EntryReport, FieldValue, HeaderFieldReport, TableReport};

// Functions

/// Render a whole report as text.
pub fn render_report(report: &TableReport) -> String {
    let mut out = String::new();

    out.push_str("Partition block header:\n");
    for field in &report.header {
        out.push_str(&render_field(field));
        out.push('\n');
    }

    let geometry = &report.geometry;
    out.push_str(&format!(
        "Drive type: 0x{:02X} ({})\n",
        geometry.drive_type,
        geometry.drive_type_label.unwrap_or("no label")
    ));
    out.push_str(&format!(
        "Checksum: stored 0x{:04X}, computed 0x{:04X}\n",
        geometry.stored_checksum, report.computed_checksum
    ));
    match report.derived_cylinders {
        Some(derived) => out.push_str(&format!("Calculated cylinder count: 0x{derived:04X} ({derived})\n")),
        None => out.push_str("Calculated cylinder count: n/a (zero heads or sectors)\n"),
    }
    out.push_str(&format!(
        "Calculated logical drive size (by blocks): {}MB\n",
        report.logical_size
    ));
    out.push_str(&format!(
        "Calculated native drive size (by cylinders): {}MB\n",
        report.native_size
    ));

    out.push_str("\nPartition table entries:\n");
    out.push_str("INDEX:      LOCK: NAME:       START:    SIZE:               ON: TYPE:           BOOT:\n");
    for entry in &report.entries {
        out.push_str(&render_entry(entry));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} entries active, 0x{:06X} blocks partitioned.\n",
        report.active_count(),
        report.entries.len(),
        report.partitioned_blocks
    ));

    if !report.warnings.is_empty() {
        out.push('\n');
        for warning in &report.warnings {
            out.push_str(&format!("WARNING: {warning}\n"));
        }
    }

    out
}

fn render_field(field: &HeaderFieldReport) -> String {
    let value = match &field.value {
        FieldValue::Number(number) => {
            let digits = field.width * 2;
            format!("0x{number:0digits$X} ({number})")
        }
        FieldValue::Opaque(bytes) => opaque_bytes(bytes),
    };
    format!(
        "ofs: 0x{:02X} size: 0x{:02X}  {}: {}",
        field.offset, field.width, field.name, value
    )
}

fn render_entry(entry: &EntryReport) -> String {
    format!(
        " 0x{:02X} ({:2}), {:1}, {:10}, 0x{:06X}, 0x{:04X} ({:>9}K), {:2}, {:14}, {}",
        entry.index,
        entry.index + 1,
        if entry.locked { "*" } else { "" },
        entry.name,
        entry.start,
        entry.size,
        entry.size_kb.to_string(),
        if entry.active { "*" } else { "" },
        entry.kind.label(),
        if entry.boot { "*" } else { "" },
    )
}

/// Zero bytes are shown as a dot, so the empty regions stay short.
fn opaque_bytes(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut after_hex = false;
    for byte in bytes {
        if *byte == 0 {
            out.push('.');
            after_hex = false;
            continue;
        }
        if after_hex {
            out.push(',');
        }
        out.push_str(&format!("0x{byte:02X}"));
        after_hex = true;
    }
    out
}
