//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    /// Base URL to load posts from over HTTP; `None` reads the site directory
    pub url: Option<String>,
    pub root: String,
    pub manifest_path: String,
    pub posts_dir: String,
    pub post_page: String,

    // Listing
    pub per_page: usize,
    pub words_per_minute: usize,
    pub excerpt_length: usize,

    // Date format (strftime)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: "John Doe".to_string(),

            url: None,
            root: "/".to_string(),
            manifest_path: "/posts/index.json".to_string(),
            posts_dir: "/posts".to_string(),
            post_page: "/post.html".to_string(),

            per_page: 4,
            words_per_minute: 200,
            excerpt_length: 160,

            date_format: "%Y-%m-%d".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Page size used by the listing; zero is not a valid page size
    pub fn page_size(&self) -> usize {
        if self.per_page == 0 {
            tracing::warn!("per_page is 0, using 1");
            1
        } else {
            self.per_page
        }
    }

    /// Path of the markdown body for a slug, relative to the site root
    pub fn post_source_path(&self, slug: &str) -> String {
        format!("{}/{}.md", self.posts_dir.trim_end_matches('/'), slug)
    }
}
