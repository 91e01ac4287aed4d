//! Data structures for benchmark fixtures and chart series

use serde::{Deserialize, Serialize};

/// A single hyperfine result record
///
/// Only the command line and the five summary statistics are read; the
/// rest of the record (`user`, `system`, `times`, `exit_codes`, ...) is
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawBenchmarkEntry {
    /// Full command line that was benchmarked
    pub command: String,
    /// Median run time in seconds
    pub median: f64,
    /// Mean run time in seconds
    pub mean: f64,
    /// Standard deviation of the run time
    pub stddev: f64,
    /// Slowest run
    pub max: f64,
    /// Fastest run
    pub min: f64,
}

/// Top level of a `hyperfine --export-json` file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HyperfineReport {
    /// One entry per benchmarked command variant
    pub results: Vec<RawBenchmarkEntry>,
}

impl HyperfineReport {
    /// Load a report from a JSON file
    pub fn load_from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;

        let report: Self = serde_json::from_str(&content)?;
        Ok(report)
    }
}

/// One chart-ready data point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Short label: the command with the batch-wide common affixes removed
    pub group: String,
    pub median: f64,
    pub mean: f64,
    pub stddev: f64,
    pub max: f64,
    pub min: f64,
}

impl Measurement {
    /// Build a measurement from a raw entry, copying its statistics verbatim
    pub fn from_entry(group: impl Into<String>, entry: &RawBenchmarkEntry) -> Self {
        Self {
            group: group.into(),
            median: entry.median,
            mean: entry.mean,
            stddev: entry.stddev,
            max: entry.max,
            min: entry.min,
        }
    }
}

/// A named, normalized fixture ready to hand to the charting layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    /// Series name (e.g. the fixture's file stem)
    pub name: String,
    /// Measurements in fixture order
    pub measurements: Vec<Measurement>,
}

impl ChartSeries {
    /// Normalize a report into a named series
    pub fn from_report(name: impl Into<String>, report: &HyperfineReport) -> Self {
        Self {
            name: name.into(),
            measurements: crate::normalize::normalize(&report.results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
  "results": [
    {
      "command": "./target/release/bench --map dashmap",
      "mean": 0.0123,
      "stddev": 0.0004,
      "median": 0.0121,
      "user": 0.041,
      "system": 0.002,
      "min": 0.0118,
      "max": 0.0139,
      "times": [0.0118, 0.0121, 0.0139],
      "exit_codes": [0, 0, 0]
    }
  ]
}"#;

    #[test]
    fn test_extra_fields_ignored() {
        let report: HyperfineReport = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(report.results.len(), 1);
        let entry = &report.results[0];
        assert_eq!(entry.command, "./target/release/bench --map dashmap");
        assert_eq!(entry.median, 0.0121);
        assert_eq!(entry.mean, 0.0123);
        assert_eq!(entry.stddev, 0.0004);
        assert_eq!(entry.min, 0.0118);
        assert_eq!(entry.max, 0.0139);
    }

    #[test]
    fn test_missing_stat_is_an_error() {
        let json = r#"{"results": [{"command": "a", "mean": 1.0}]}"#;
        assert!(serde_json::from_str::<HyperfineReport>(json).is_err());
    }

    #[test]
    fn test_measurement_field_names() {
        let m = Measurement {
            group: "fast".to_string(),
            median: 1.0,
            mean: 1.1,
            stddev: 0.1,
            max: 1.5,
            min: 0.9,
        };

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "group": "fast",
                "median": 1.0,
                "mean": 1.1,
                "stddev": 0.1,
                "max": 1.5,
                "min": 0.9
            })
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = HyperfineReport::load_from_file("does/not/exist.json".as_ref());
        assert!(matches!(
            result,
            Err(crate::error::Error::FileReadError { .. })
        ));
    }
}
