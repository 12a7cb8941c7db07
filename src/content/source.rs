//! Post sources - where the manifest and post bodies are read from

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::helpers::join_url;

/// Transport for site documents addressed by site paths like `/posts/index.json`
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the document at `path` as UTF-8 text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches documents over HTTP from a deployed (or locally served) site
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PostSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = join_url(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        Ok(response.text().await?)
    }
}

/// Reads documents from a site directory on disk
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a site path onto the directory
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl PostSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let path = self.resolve(path);
        tracing::debug!("Reading {:?}", path);

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })
    }
}

/// Source picked at runtime: a remote site or a local directory
#[derive(Debug, Clone)]
pub enum SiteSource {
    Http(HttpSource),
    Dir(DirSource),
}

#[async_trait]
impl PostSource for SiteSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        match self {
            SiteSource::Http(source) => source.fetch_text(path).await,
            SiteSource::Dir(source) => source.fetch_text(path).await,
        }
    }
}
