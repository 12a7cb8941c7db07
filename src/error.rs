//! Error types for loading and parsing posts

use std::path::PathBuf;
use thiserror::Error;

/// A single document could not be retrieved from a post source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The post manifest could not be retrieved or is not well-formed
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to fetch manifest: {0}")]
    Fetch(#[source] FetchError),

    #[error("Invalid manifest: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Failure of a whole `load_all` call
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Invalid slug in manifest: {0:?}")]
    InvalidSlug(String),

    #[error("Failed to fetch post '{slug}': {source}")]
    PostFetch {
        slug: String,
        #[source]
        source: FetchError,
    },
}

/// Malformed metadata block. Recovered by the parser and only ever logged.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a mapping of keys to values")]
    NotMapping,

    #[error("key {0:?} is not a string")]
    Key(String),

    #[error("unsupported value for '{key}': {reason}")]
    Unsupported { key: String, reason: &'static str },
}
