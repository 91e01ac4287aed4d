//! Benchmark normalizer
//!
//! Turns hyperfine result records into chart measurements. The label of each
//! measurement is its command with the prefix and suffix shared by the whole
//! batch stripped off:
//!
//! ```text
//! ./bench --queue rtrb --size 64   ->  rtrb
//! ./bench --queue crossbeam --size 64   ->  crossbeam
//! ```

use crate::affix::{longest_common_prefix, longest_common_suffix};
use crate::data::{HyperfineReport, Measurement, RawBenchmarkEntry};
use crate::error::Result;
use tracing::debug;

/// Normalize a batch of raw entries into measurements.
///
/// Affixes are computed once across the batch, not per entry. Output order
/// matches input order. An entry whose command is entirely covered by the
/// shared affixes gets an empty group.
pub fn normalize(entries: &[RawBenchmarkEntry]) -> Vec<Measurement> {
    let commands: Vec<&str> = entries.iter().map(|e| e.command.as_str()).collect();
    let prefix_len = longest_common_prefix(&commands).len();
    let suffix_len = longest_common_suffix(&commands).len();

    debug!(
        entries = entries.len(),
        prefix_len, suffix_len, "Normalizing benchmark entries"
    );

    entries
        .iter()
        .map(|entry| {
            let group = strip_affixes(&entry.command, prefix_len, suffix_len);
            Measurement::from_entry(group, entry)
        })
        .collect()
}

/// Normalize every result of a hyperfine report
pub fn normalize_report(report: &HyperfineReport) -> Vec<Measurement> {
    normalize(&report.results)
}

/// `command[prefix_len .. len - suffix_len]`, or `""` when the affixes
/// overlap or cover the whole command.
fn strip_affixes(command: &str, prefix_len: usize, suffix_len: usize) -> &str {
    let end = command.len().saturating_sub(suffix_len);
    if prefix_len >= end {
        return "";
    }
    command.get(prefix_len..end).unwrap_or("")
}

/// Parse a hyperfine JSON document and normalize it
pub fn parse_from_string(json: &str) -> Result<Vec<Measurement>> {
    let report: HyperfineReport = serde_json::from_str(json)?;
    Ok(normalize_report(&report))
}

/// Parse a hyperfine JSON file and normalize it
pub fn parse_from_file(path: &std::path::Path) -> Result<Vec<Measurement>> {
    let report = HyperfineReport::load_from_file(path)?;
    Ok(normalize_report(&report))
}
