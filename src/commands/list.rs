//! List posts in the terminal

use anyhow::Result;

use crate::listing::{ListingController, ListingState, ListingView, PageNav, TextListing};
use crate::Blog;

/// Query given on the command line
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    pub tag: Option<String>,
    pub search: Option<String>,
    /// One-based page number
    pub page: usize,
    /// Load from this base URL instead of the site directory
    pub url: Option<String>,
}

/// Load the listing and replay the command-line query as listing events
pub async fn build_listing<V: ListingView>(
    blog: &Blog,
    view: V,
    options: &ListingOptions,
) -> ListingController<V> {
    let repository = blog.repository(options.url.as_deref());
    let mut controller = ListingController::new(view, blog.config.page_size());
    controller.load(&repository).await;

    if let Some(tag) = &options.tag {
        controller.on_tag_selected(tag);
    }
    if let Some(text) = &options.search {
        controller.on_search_input(text);
    }
    if options.page > 1 {
        controller.on_page(PageNav::To(options.page - 1));
    }

    controller
}

/// Turn a failed load into a command error
pub fn check_loaded<V>(controller: &ListingController<V>) -> Result<()>
where
    V: ListingView,
{
    match controller.state() {
        ListingState::LoadError(reason) => anyhow::bail!("Error loading posts: {}", reason),
        _ => Ok(()),
    }
}

/// Print one page of the listing
pub async fn run(blog: &Blog, options: &ListingOptions) -> Result<()> {
    let controller = build_listing(blog, TextListing::new(blog.config.clone()), options).await;
    println!("{}", controller.view().render());
    check_loaded(&controller)
}
