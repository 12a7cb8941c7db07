//! blogfront: the loading and listing pipeline of a markdown blog
//!
//! Posts are markdown files with a front-matter block, discovered through a
//! JSON manifest. This crate loads them (from disk or over HTTP), and drives
//! a searchable, tag-filterable, paginated listing.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod listing;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{DirSource, HttpSource, PostRepository, SiteSource};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (holds `_config.yml` and the posts directory)
    pub base_dir: PathBuf,
}

impl Blog {
    /// Open the site in a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Where posts are read from: `url` (or the configured url) over HTTP,
    /// otherwise the site directory
    pub fn source(&self, url: Option<&str>) -> SiteSource {
        match url.or(self.config.url.as_deref()) {
            Some(url) => SiteSource::Http(HttpSource::new(url)),
            None => SiteSource::Dir(DirSource::new(&self.base_dir)),
        }
    }

    pub fn repository(&self, url: Option<&str>) -> PostRepository<SiteSource> {
        PostRepository::new(self.source(url), &self.config)
    }

    /// Local path of a site path such as `/posts/index.json`
    pub fn local_path(&self, site_path: &str) -> PathBuf {
        self.base_dir.join(site_path.trim_start_matches('/'))
    }

    /// Local path of the manifest
    pub fn manifest_file(&self) -> PathBuf {
        self.local_path(&self.config.manifest_path)
    }
}
