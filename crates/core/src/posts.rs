//! Post metadata, data sources and the listing policy
//!
//! Front matter is parsed elsewhere; this module only sees the resulting
//! metadata records. Where they come from is abstracted behind
//! [`PostSource`] so the listing logic never touches the filesystem itself.

use crate::date::DateParser;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default storage prefix stripped from manifest keys
pub const DEFAULT_ROUTE_PREFIX: &str = "/src/routes/";
/// Default storage suffix stripped from manifest keys
pub const DEFAULT_ROUTE_SUFFIX: &str = "/+page.md";

/// Publication status of a post
///
/// Known statuses are matched case-insensitively and serialized upper-case.
/// Anything else is kept verbatim in [`PostStatus::Other`] and never listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    Draft,
    Published,
    Test,
    Other(String),
}

impl PostStatus {
    /// Whether posts with this status appear in the public listing
    pub fn is_listed(&self) -> bool {
        matches!(self, PostStatus::Published | PostStatus::Draft)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Published => "PUBLISHED",
            PostStatus::Test => "TEST",
            PostStatus::Other(status) => status.as_str(),
        }
    }
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => PostStatus::Draft,
            "published" => PostStatus::Published,
            "test" => PostStatus::Test,
            _ => PostStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for PostStatus {
    fn from(s: String) -> Self {
        PostStatus::from(s.as_str())
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Front-matter metadata of a single post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostMeta {
    pub title: String,
    /// Publication date, e.g. `Apr 20, 2022`
    pub date: String,
    #[serde(default)]
    pub badges: Vec<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Route of the post, derived from where it is stored
    #[serde(default)]
    pub path: String,
    /// Any other front-matter keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Something that can hand out post metadata
///
/// Implementations return one record per stored post (no duplicates by
/// storage location), each with `path` filled in.
pub trait PostSource {
    fn load_posts(&self) -> Result<Vec<PostMeta>>;
}

/// In-memory post source
#[derive(Debug, Clone, Default)]
pub struct StaticPosts {
    posts: Vec<PostMeta>,
}

impl StaticPosts {
    pub fn new(posts: Vec<PostMeta>) -> Self {
        Self { posts }
    }
}

impl PostSource for StaticPosts {
    fn load_posts(&self) -> Result<Vec<PostMeta>> {
        Ok(self.posts.clone())
    }
}

#[derive(Deserialize)]
struct ManifestEntry {
    metadata: PostMeta,
}

/// Post source backed by a JSON manifest
///
/// The manifest maps storage paths to their parsed front matter:
///
/// ```json
/// {
///   "/src/routes/hello-world/+page.md": {
///     "metadata": { "title": "Hello", "date": "Apr 20, 2022", "status": "PUBLISHED" }
///   }
/// }
/// ```
///
/// The post path is the storage path minus the route prefix and suffix
/// (`hello-world` above).
#[derive(Debug, Clone)]
pub struct ManifestSource {
    manifest: PathBuf,
    prefix: String,
    suffix: String,
}

impl ManifestSource {
    /// Create a source for a manifest file, using the default route affixes
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            suffix: DEFAULT_ROUTE_SUFFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl PostSource for ManifestSource {
    fn load_posts(&self) -> Result<Vec<PostMeta>> {
        let content =
            std::fs::read_to_string(&self.manifest).map_err(|e| Error::FileReadError {
                path: self.manifest.display().to_string(),
                source: e,
            })?;

        let posts = posts_from_manifest(&content, &self.prefix, &self.suffix)?;
        debug!(
            "Loaded {} posts from {}",
            posts.len(),
            self.manifest.display()
        );
        Ok(posts)
    }
}

/// Decode a manifest document into posts, in storage-path order
pub fn posts_from_manifest(json: &str, prefix: &str, suffix: &str) -> Result<Vec<PostMeta>> {
    let entries: BTreeMap<String, ManifestEntry> = serde_json::from_str(json)?;

    let posts = entries
        .into_iter()
        .map(|(storage_path, entry)| {
            let mut post = entry.metadata;
            post.path = route_from_storage_path(&storage_path, prefix, suffix).to_string();
            post
        })
        .collect();

    Ok(posts)
}

/// Strip the route prefix and suffix from a storage path.
///
/// A side that does not match is left in place.
pub fn route_from_storage_path<'a>(storage_path: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let path = storage_path.strip_prefix(prefix).unwrap_or(storage_path);
    path.strip_suffix(suffix).unwrap_or(path)
}

/// Sort posts newest first.
///
/// Equal dates keep their relative order. Posts whose date cannot be parsed
/// go after every dated post.
pub fn sort_by_date_desc(posts: &mut [PostMeta]) {
    let parser = DateParser::default();

    posts.sort_by_cached_key(|post| match parser.parse(&post.date) {
        Ok(date) => Reverse(Some(date)),
        Err(e) => {
            warn!("Post '{}' ({}): {}", post.title, post.path, e);
            Reverse(None)
        }
    });
}

/// Every post from the source, newest first
pub fn all_posts(source: &dyn PostSource) -> Result<Vec<PostMeta>> {
    let mut posts = source.load_posts()?;
    sort_by_date_desc(&mut posts);
    Ok(posts)
}

/// Listed posts (published and drafts) from the source, newest first
pub fn published_posts(source: &dyn PostSource) -> Result<Vec<PostMeta>> {
    let mut posts: Vec<PostMeta> = source
        .load_posts()?
        .into_iter()
        .filter(|post| post.status.is_listed())
        .collect();

    sort_by_date_desc(&mut posts);
    Ok(posts)
}
