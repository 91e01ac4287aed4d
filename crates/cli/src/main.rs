//! folio CLI - Chart data and post listings for the folio site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::posts::{DEFAULT_ROUTE_PREFIX, DEFAULT_ROUTE_SUFFIX};
use folio_core::{
    all_posts, format_month_day_year, published_posts, ChartSeries, DateParser, ManifestSource,
    PostMeta,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod fixture;

use fixture::FixtureArg;

/// folio: data preparation for the blog and portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize hyperfine JSON fixtures into chart series
    Chart(ChartArgs),
    /// List posts from a front-matter manifest, newest first
    Posts(PostsArgs),
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Fixture to include, as NAME=PATH or PATH (named after the file stem)
    #[arg(short, long = "fixture", value_name = "NAME=PATH", required = true)]
    fixtures: Vec<FixtureArg>,

    /// Write the chart data here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PostsArgs {
    #[arg(short, long, value_name = "FILE")]
    manifest: PathBuf,

    #[arg(long, env = "FOLIO_ROUTE_PREFIX", default_value = DEFAULT_ROUTE_PREFIX)]
    prefix: String,

    #[arg(long, env = "FOLIO_ROUTE_SUFFIX", default_value = DEFAULT_ROUTE_SUFFIX)]
    suffix: String,

    /// Include posts of every status, not only published and drafts
    #[arg(long, default_value = "false")]
    all: bool,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Chart(args) => chart_command(args),
        Commands::Posts(args) => posts_command(args),
    }
}

fn chart_command(args: ChartArgs) -> Result<()> {
    info!("Normalizing {} benchmark fixture(s)", args.fixtures.len());

    let series = args
        .fixtures
        .iter()
        .map(FixtureArg::load)
        .collect::<Result<Vec<ChartSeries>>>()?;

    let json = serde_json::to_string_pretty(&series)?;
    write_output(args.output.as_deref(), &json)
}

fn posts_command(args: PostsArgs) -> Result<()> {
    let source = ManifestSource::new(&args.manifest)
        .with_prefix(args.prefix)
        .with_suffix(args.suffix);

    let posts = if args.all {
        all_posts(&source)
    } else {
        published_posts(&source)
    }
    .with_context(|| format!("Failed to load posts from {:?}", args.manifest))?;

    info!("Listing {} posts", posts.len());

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Text => print!("{}", format_listing(&posts)),
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write chart data: {:?}", path))?;
            info!("Wrote chart data to {:?}", path);
        }
        None => {
            debug!("Writing chart data to stdout");
            println!("{}", content);
        }
    }
    Ok(())
}

/// Plain-text listing, one post per line
///
/// Dates are re-rendered in canonical `Mon D, YYYY` form; unparseable ones
/// are shown as written.
fn format_listing(posts: &[PostMeta]) -> String {
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let parser = DateParser::default();
    let dates: Vec<String> = posts
        .iter()
        .map(|p| match parser.parse(&p.date) {
            Ok(date) => format_month_day_year(date),
            Err(_) => p.date.clone(),
        })
        .collect();

    let date_width = dates.iter().map(|d| d.len()).max().unwrap_or(0);
    let status_width = posts
        .iter()
        .map(|p| p.status.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (post, date) in posts.iter().zip(&dates) {
        out.push_str(&format!(
            "{:<dw$}  {:<sw$}  {} ({})",
            date,
            post.status,
            post.title,
            post.path,
            dw = date_width,
            sw = status_width,
        ));
        if !post.badges.is_empty() {
            out.push_str(&format!(" [{}]", post.badges.join(", ")));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PostStatus;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn post(title: &str, date: &str, status: PostStatus, badges: &[&str]) -> PostMeta {
        PostMeta {
            title: title.to_string(),
            date: date.to_string(),
            badges: badges.iter().map(|b| b.to_string()).collect(),
            status,
            excerpt: None,
            path: title.to_lowercase(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_cli_parses_chart_args() {
        let cli = Cli::try_parse_from([
            "folio",
            "chart",
            "--fixture",
            "dashmap=a.json",
            "-f",
            "b.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Chart(args) => {
                assert_eq!(args.fixtures.len(), 2);
                assert_eq!(args.fixtures[0].name, "dashmap");
                assert_eq!(args.fixtures[1].name, "b");
                assert!(args.output.is_none());
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn test_cli_chart_requires_fixture() {
        assert!(Cli::try_parse_from(["folio", "chart"]).is_err());
    }

    #[test]
    fn test_cli_posts_defaults() {
        let cli = Cli::try_parse_from(["folio", "posts", "--manifest", "posts.json"]).unwrap();

        match cli.command {
            Commands::Posts(args) => {
                assert!(!args.all);
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("expected posts command"),
        }
    }

    #[test]
    fn test_format_listing() {
        let posts = vec![
            post("Streams", "Apr 20, 2022", PostStatus::Published, &["rust"]),
            post("Hello", "Dec 1, 2021", PostStatus::Draft, &[]),
        ];

        let listing = format_listing(&posts);

        assert_eq!(
            listing,
            "Apr 20, 2022  PUBLISHED  Streams (streams) [rust]\n\
             Dec 1, 2021   DRAFT      Hello (hello)\n"
        );
    }

    #[test]
    fn test_format_listing_normalizes_dates() {
        let posts = vec![
            post("Padded", "Mar 05, 2023", PostStatus::Published, &[]),
            post("Odd", "sometime", PostStatus::Other("hidden".to_string()), &[]),
        ];

        let listing = format_listing(&posts);

        assert_eq!(
            listing,
            "Mar 5, 2023  PUBLISHED  Padded (padded)\n\
             sometime     hidden     Odd (odd)\n"
        );
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(format_listing(&[]), "No posts found.\n");
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("static/data/chart.json");

        write_output(Some(&path), "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
