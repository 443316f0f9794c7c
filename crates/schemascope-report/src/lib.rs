//! Report generation over a schema [`Database`](schemascope_core::Database).
//!
//! Thin presentation layer: each report renders to any `io::Write`, and the
//! driver writes the full report set into an output directory.

pub mod error;
pub mod reports;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use schemascope_core::Database;
use tracing::info;

pub use error::{ReportError, Result};
pub use reports::{dependency_report, routines_report, tables_report, views_report};

/// Where and how report files are written.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub overwrite: bool,
}

/// Writes the dependency, tables, views, and routines reports and returns the
/// paths written.
pub fn write_all_reports(db: &Database, opts: &ReportOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&opts.output_dir)?;

    let reports: [(&str, fn(&Database, &mut dyn Write) -> std::io::Result<()>); 4] = [
        ("Dependency.txt", dependency_report),
        ("Tables.csv", tables_report),
        ("Views.csv", views_report),
        ("Routines.csv", routines_report),
    ];

    let mut written = Vec::with_capacity(reports.len());
    for (suffix, render) in reports {
        let path = report_path(&opts.output_dir, db.name(), suffix);
        write_report(db, &path, opts.overwrite, render)?;
        info!(path = %path.display(), "wrote report");
        written.push(path);
    }
    Ok(written)
}

fn write_report(
    db: &Database,
    path: &Path,
    overwrite: bool,
    render: fn(&Database, &mut dyn Write) -> std::io::Result<()>,
) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(ReportError::FileExists(path.to_path_buf()));
    }
    let mut writer = BufWriter::new(File::create(path)?);
    render(db, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn report_path(dir: &Path, database_name: &str, suffix: &str) -> PathBuf {
    let cleaned = database_name.replace(' ', "_");
    dir.join(format!("{cleaned}_{suffix}"))
}
