//! Post repository - loads the manifest and every post it lists

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::markdown::derive_excerpt;
use super::post::MetaValue;
use super::source::PostSource;
use super::{FrontMatter, Post};
use crate::config::SiteConfig;
use crate::error::{LoadError, ManifestError};

/// One manifest entry. Fields other than `slug` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub slug: String,
}

/// Loads posts through a [`PostSource`]
pub struct PostRepository<S> {
    source: S,
    config: SiteConfig,
}

impl<S: PostSource> PostRepository<S> {
    /// Create a repository using the site's path layout
    pub fn new(source: S, config: &SiteConfig) -> Self {
        Self {
            source,
            config: config.clone(),
        }
    }

    /// Fetch and decode the manifest
    pub async fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>, ManifestError> {
        let text = self
            .source
            .fetch_text(&self.config.manifest_path)
            .await
            .map_err(ManifestError::Fetch)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load every post in the manifest, newest first.
    ///
    /// Bodies are fetched concurrently; the first failing fetch fails the
    /// whole load.
    pub async fn load_all(&self) -> Result<Vec<Post>, LoadError> {
        let manifest = self.fetch_manifest().await?;
        tracing::debug!("Manifest lists {} posts", manifest.len());

        let mut posts = try_join_all(manifest.iter().map(|entry| self.load_post(entry))).await?;
        sort_by_date_desc(&mut posts);

        tracing::info!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// Fetch, parse and normalize a single post
    async fn load_post(&self, entry: &ManifestEntry) -> Result<Post, LoadError> {
        if !is_safe_slug(&entry.slug) {
            return Err(LoadError::InvalidSlug(entry.slug.clone()));
        }

        let raw = self
            .source
            .fetch_text(&self.config.post_source_path(&entry.slug))
            .await
            .map_err(|source| LoadError::PostFetch {
                slug: entry.slug.clone(),
                source,
            })?;

        let FrontMatter { metadata, body } = FrontMatter::parse(&raw);
        let mut post = Post::new(metadata, body);

        if let Some(warning) = slug_warning(&entry.slug, &post) {
            tracing::warn!("{}", warning);
        }

        if post.excerpt().is_empty() {
            let excerpt = derive_excerpt(&post.body, self.config.excerpt_length);
            post.metadata
                .insert("excerpt".to_string(), MetaValue::Text(excerpt));
        }

        Ok(post)
    }
}

/// A manifest slug must name a single file in the posts directory
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}

/// Warning for a post whose front-matter slug is missing or differs from
/// the manifest entry it was loaded for
fn slug_warning(listed: &str, post: &Post) -> Option<String> {
    match post.slug() {
        None => Some(format!(
            "Slug undefined for post '{}', metadata: {:?}",
            listed, post.metadata
        )),
        Some(slug) if slug != listed => Some(format!(
            "Slug mismatch: manifest lists '{}' but front-matter says '{}'",
            listed, slug
        )),
        Some(_) => None,
    }
}

/// Sort newest first. Missing or invalid dates sort last; ties keep their order.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by_key(|post| Reverse(post.date()));
}
