//! folio-core - Data layer for the folio blog and portfolio site
//!
//! This crate holds the pure transforms behind the site's pages and has no
//! dependency on any rendering or build tooling.
//!
//! # Features
//!
//! - Longest common prefix / suffix over a list of strings
//! - Normalize hyperfine JSON results into chart-ready measurements
//! - Parse `Mon D, YYYY` post dates
//! - Filter and sort post metadata from a pluggable data source
//!
//! # Example
//!
//! ```no_run
//! use folio_core::{normalize, posts};
//!
//! let chart = normalize::parse_from_file("rtrb-benchmarks.json".as_ref()).unwrap();
//! for m in &chart {
//!     println!("{}: {:.4}s", m.group, m.median);
//! }
//!
//! let source = posts::ManifestSource::new("posts.json");
//! let listing = posts::published_posts(&source).unwrap();
//! println!("{} posts", listing.len());
//! ```

pub mod affix;
pub mod data;
pub mod date;
pub mod error;
pub mod normalize;
pub mod posts;

pub use affix::{longest_common_prefix, longest_common_suffix};
pub use data::{ChartSeries, HyperfineReport, Measurement, RawBenchmarkEntry};
pub use date::{format_month_day_year, parse_month_day_year, DateParser};
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_report};
pub use posts::{
    all_posts, published_posts, sort_by_date_desc, ManifestSource, PostMeta, PostSource,
    PostStatus, StaticPosts,
};
