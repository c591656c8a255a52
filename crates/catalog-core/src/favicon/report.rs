//! Per-record outcome rows and the plain-text report file.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default report path, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "favicon_report.txt";

/// Whether the written PNG is a real favicon or the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Placeholder,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => f.write_str("ok"),
            Status::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// Outcome of one input record. Displays as one report line (without newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based position in the input array.
    pub index: usize,
    pub filename: String,
    pub status: Status,
    pub message: String,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03} {} {} {}",
            self.index, self.filename, self.status, self.message
        )
    }
}

/// Totals over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounts {
    pub total: usize,
    pub ok: usize,
    pub placeholder: usize,
}

impl ReportCounts {
    pub fn tally(rows: &[ReportRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.total += 1;
            match row.status {
                Status::Ok => acc.ok += 1,
                Status::Placeholder => acc.placeholder += 1,
            }
            acc
        })
    }
}

/// Writes all rows, one per line, replacing any existing file.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
