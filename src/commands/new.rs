//! Create a new post

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{FrontMatter, Metadata, MetaValue};
use crate::Blog;

/// Create `posts/<slug>.md` and register it in the manifest
pub fn create_post(
    blog: &Blog,
    title: &str,
    tags: &[String],
    author: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let file_path = blog.local_path(&blog.config.post_source_path(&slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut metadata = Metadata::new();
    metadata.insert("title".into(), MetaValue::from(title));
    metadata.insert("slug".into(), MetaValue::from(slug.as_str()));
    metadata.insert(
        "date".into(),
        MetaValue::from(now.format("%Y-%m-%d %H:%M:%S").to_string().as_str()),
    );
    metadata.insert(
        "author".into(),
        MetaValue::from(author.unwrap_or(&blog.config.author)),
    );
    metadata.insert("tags".into(), MetaValue::List(tags.to_vec()));

    fs::write(&file_path, FrontMatter::render(&metadata, "\n")?)?;
    add_to_manifest(&blog.manifest_file(), &slug)?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}

/// Append a slug to the manifest, keeping existing entries untouched
fn add_to_manifest(manifest_path: &Path, slug: &str) -> Result<()> {
    let mut entries: Vec<Value> = if manifest_path.exists() {
        let text = fs::read_to_string(manifest_path)?;
        serde_json::from_str(&text)
            .with_context(|| format!("Manifest {:?} is not a JSON array", manifest_path))?
    } else {
        Vec::new()
    };

    let listed = entries
        .iter()
        .any(|entry| entry.get("slug").and_then(Value::as_str) == Some(slug));
    if !listed {
        entries.push(serde_json::json!({ "slug": slug }));
    }

    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(manifest_path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}
