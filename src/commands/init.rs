//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{FrontMatter, ManifestEntry, Metadata, MetaValue};

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let posts_dir = target_dir.join("posts");
    fs::create_dir_all(&posts_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    // Create default _config.yml
    let config_content = r#"# Site
title: Blog
author: John Doe

# URL
## Leave url unset to read posts from this directory
# url: http://localhost:4000
root: /
manifest_path: /posts/index.json
posts_dir: /posts
post_page: /post.html

# Listing
per_page: 4
words_per_minute: 200
excerpt_length: 160
date_format: "%Y-%m-%d"
"#;

    fs::write(&config_path, config_content)?;

    // Create a sample post
    let now = chrono::Local::now();
    let mut metadata = Metadata::new();
    metadata.insert("title".into(), MetaValue::from("Hello World"));
    metadata.insert("slug".into(), MetaValue::from("hello-world"));
    metadata.insert(
        "date".into(),
        MetaValue::from(now.format("%Y-%m-%d %H:%M:%S").to_string().as_str()),
    );
    metadata.insert("author".into(), MetaValue::from("John Doe"));
    metadata.insert(
        "excerpt".into(),
        MetaValue::from("Your first post. Edit or delete it, then start writing."),
    );
    metadata.insert("tags".into(), MetaValue::List(vec!["welcome".to_string()]));

    let body = r#"
Welcome! This is your very first post.

## Quick Start

### Create a new post

```bash
$ blogfront new "My New Post" --tag rust
```

### Browse the listing

```bash
$ blogfront list --search rust
```

### Run server

```bash
$ blogfront serve
```
"#;

    fs::write(
        posts_dir.join("hello-world.md"),
        FrontMatter::render(&metadata, body)?,
    )?;

    let manifest = vec![ManifestEntry {
        slug: "hello-world".to_string(),
    }];
    fs::write(
        posts_dir.join("index.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    Ok(())
}
