//! Render the listing containers as HTML fragments

use anyhow::Result;

use super::list::{build_listing, check_loaded, ListingOptions};
use crate::listing::HtmlListing;
use crate::Blog;

/// Print the HTML of every listing container for the given query
pub async fn run(blog: &Blog, options: &ListingOptions) -> Result<()> {
    let controller = build_listing(blog, HtmlListing::new(blog.config.clone()), options).await;
    print!("{}", controller.view().to_fragments());
    check_loaded(&controller)
}
