//! Correction report rendering and persistence.
//!
//! The report is plain UTF-8 text: a total line followed by one `label: count`
//! line per non-zero counter, with counts written in Persian digits.

use crate::charmap::to_persian_digits;
use crate::counters::RuleCounters;
use crate::error::{Error, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const TOTAL_LABEL: &str = "مجموع اصلاحات";
const NOTHING_TO_FIX: &str = "هیچ اصلاحی لازم نبود.";

/// Render the report text for a counter bag.
pub fn render(counters: &RuleCounters) -> String {
    let total = counters.total();
    if total == 0 {
        return NOTHING_TO_FIX.to_string();
    }
    let mut lines = vec![format!(
        "{}: {}",
        TOTAL_LABEL,
        to_persian_digits(&total.to_string())
    )];
    for (counter, n) in counters.nonzero() {
        lines.push(format!("{}: {}", counter.label(), to_persian_digits(&n.to_string())));
    }
    lines.join("\n")
}

/// Write the rendered report to `dir/paknevis-report-YYYYMMDD-HHMMSS.txt`.
pub fn write_timestamped(dir: &Path, counters: &RuleCounters) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("paknevis-report-{}.txt", stamp));
    let mut content = render(counters);
    content.push('\n');
    fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
