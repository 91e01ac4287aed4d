//! Benchmark fixture arguments for the `chart` command

use anyhow::{bail, Context, Result};
use folio_core::{ChartSeries, HyperfineReport};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// A `--fixture` argument: `NAME=PATH`, or a bare `PATH` named after its
/// file stem.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureArg {
    pub name: String,
    pub path: PathBuf,
}

impl FromStr for FixtureArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Fixture argument cannot be empty");
        }

        if let Some((name, path)) = s.split_once('=') {
            let (name, path) = (name.trim(), path.trim());
            if name.is_empty() || path.is_empty() {
                bail!("Invalid fixture '{}': expected NAME=PATH", s);
            }
            return Ok(Self {
                name: name.to_string(),
                path: PathBuf::from(path),
            });
        }

        let path = PathBuf::from(s);
        let name = stem_name(&path)
            .with_context(|| format!("Cannot derive a series name from '{}'", s))?;
        Ok(Self { name, path })
    }
}

fn stem_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

impl FixtureArg {
    /// Load and normalize the fixture into a named series
    pub fn load(&self) -> Result<ChartSeries> {
        debug!("Loading fixture '{}' from {:?}", self.name, self.path);

        let report = HyperfineReport::load_from_file(&self.path)
            .with_context(|| format!("Failed to load benchmark fixture: {:?}", self.path))?;
        let series = ChartSeries::from_report(self.name.clone(), &report);

        info!(
            "Normalized {} measurements for '{}'",
            series.measurements.len(),
            series.name
        );
        Ok(series)
    }
}
