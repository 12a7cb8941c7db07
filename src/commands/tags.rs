//! List the tags used across all posts

use anyhow::Result;
use std::collections::HashMap;

use crate::listing::collect_tags;
use crate::Blog;

/// Tags in display order with the number of posts carrying each
pub async fn tag_counts(blog: &Blog, url: Option<&str>) -> Result<Vec<(String, usize)>> {
    let posts = blog.repository(url).load_all().await?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in &posts {
        for tag in post.tags() {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    Ok(collect_tags(&posts)
        .into_iter()
        .map(|tag| {
            let count = counts.get(tag.as_str()).copied().unwrap_or(0);
            (tag, count)
        })
        .collect())
}

/// Print the tag set
pub async fn run(blog: &Blog, url: Option<&str>) -> Result<()> {
    let tags = tag_counts(blog, url).await?;
    println!("Tags ({}):", tags.len());
    for (tag, count) in tags {
        println!("  {} ({})", tag, count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use crate::commands::new::create_post;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_tag_counts_sorted() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        create_post(&blog, "One", &["rust".into(), "aws".into()], None).unwrap();
        create_post(&blog, "Two", &["rust".into()], None).unwrap();

        let tags = tag_counts(&blog, None).await.unwrap();
        assert_eq!(
            tags,
            [
                ("aws".to_string(), 1),
                ("rust".to_string(), 2),
                ("welcome".to_string(), 1)
            ]
        );
    }
}
