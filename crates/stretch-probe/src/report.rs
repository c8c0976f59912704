use std::io::{self, Write};

use crate::scenario::{GrowthReport, CreationRow, ShrinkReport, CompactionReport};

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{} {} {}\n", "=".repeat(20), title, "=".repeat(20))
}

pub fn growth(out: &mut impl Write, report: &GrowthReport, policy: &str) -> io::Result<()> {
    banner(out, "Growth")?;
    writeln!(out, "policy: {}, elements pushed: {}", policy, report.count)?;
    writeln!(out, "\n{:>10} {:>10}", "count", "capacity")?;
    for t in report.transitions.iter() {
        writeln!(out, "{:>10} {:>10}", t.count, t.capacity)?;
    }
    let seq = report
        .capacities()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "\nsequence: 0, {}", seq)?;
    writeln!(out, "reallocations: {}", report.reallocs)
}

pub fn creation(out: &mut impl Write, rows: &[CreationRow]) -> io::Result<()> {
    banner(out, "Construction routes")?;
    writeln!(
        out,
        "{:<14} {:>5} {:>8} {:>7} {:>6}   {:>5} {:>8} {:>7} {:>6}  {}",
        "route", "len", "capacity", "bytes", "util%",
        "len'", "capacity'", "bytes'", "util%'", "after one push",
    )?;
    for row in rows {
        let note = match row.growth_factor() {
            Some(factor) => format!("reallocated, x{:.2}", factor),
            None if row.reallocated() => "reallocated".to_string(),
            None => "fits".to_string(),
        };
        writeln!(
            out,
            "{:<14} {:>5} {:>8} {:>7} {:>6.1}   {:>5} {:>8} {:>7} {:>6.1}  {}",
            row.route.name(), row.len, row.capacity, row.bytes, row.utilization(),
            row.after_len, row.after_capacity, row.after_bytes, row.after_utilization(),
            note,
        )?;
    }
    Ok(())
}

pub fn shrink(out: &mut impl Write, report: &ShrinkReport) -> io::Result<()> {
    banner(out, "Shrink")?;
    writeln!(
        out,
        "policy: {}, start: len={} capacity={} bytes={}",
        report.policy.name(), report.initial_len, report.initial_capacity, report.initial_bytes,
    )?;
    writeln!(out, "\n{:>6} {:>8} {:>10} {:>8}", "keep", "capacity", "delta", "bytes")?;
    for row in report.rows.iter() {
        let delta = row.capacity as i64 - report.initial_capacity as i64;
        writeln!(out, "{:>6} {:>8} {:>+10} {:>8}", row.keep, row.capacity, delta, row.bytes)?;
    }
    for row in report.rows.iter().filter(|row| row.skipped != 0) {
        writeln!(out, "keep {}: {} shrink(s) skipped, allocation failed", row.keep, row.skipped)?;
    }
    if report.events.is_empty() {
        return writeln!(out, "\nno capacity reduction observed")
    }
    writeln!(out)?;
    for event in report.events.iter() {
        writeln!(
            out,
            "shrunk between keep {} and keep {}: {} -> {}",
            event.from_keep, event.to_keep, event.from_capacity, event.to_capacity,
        )?;
    }
    Ok(())
}

pub fn compaction(out: &mut impl Write, report: &CompactionReport) -> io::Result<()> {
    banner(out, "Compaction")?;
    writeln!(
        out,
        "after truncating to {}: capacity={} bytes={}",
        report.keep, report.truncated_capacity, report.truncated_bytes,
    )?;
    writeln!(out, "\n{:<24} {:>5} {:>8} {:>7}", "method", "len", "capacity", "bytes")?;
    for row in report.rows.iter() {
        writeln!(out, "{:<24} {:>5} {:>8} {:>7}", row.method.name(), row.len, row.capacity, row.bytes)?;
    }
    Ok(())
}
