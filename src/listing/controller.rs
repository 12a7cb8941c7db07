//! Listing controller - loads the posts and reacts to listing events

use super::pagination::{paginate, total_pages};
use super::query::{apply, collect_tags, QueryState};
use super::view::{ListingView, LOAD_ERROR_MESSAGE};
use crate::content::{Post, PostRepository, PostSource};

/// Pagination input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Prev,
    Next,
    /// Zero-based page index
    To(usize),
}

/// Loaded collection plus the query being shown
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub posts: Vec<Post>,
    pub tags: Vec<String>,
    pub query: QueryState,
}

impl Listing {
    pub fn new(posts: Vec<Post>) -> Self {
        let tags = collect_tags(&posts);
        Self {
            posts,
            tags,
            query: QueryState::new(),
        }
    }

    /// Page count of the current filtered result
    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(apply(&self.posts, &self.query).len(), page_size)
    }
}

#[derive(Debug, Clone)]
pub enum ListingState {
    Loading,
    Ready(Listing),
    LoadError(String),
}

/// Drives a [`ListingView`] from user events.
///
/// Every event recomputes the page from (collection, query) and re-renders
/// it in full.
pub struct ListingController<V> {
    view: V,
    state: ListingState,
    page_size: usize,
}

impl<V: ListingView> ListingController<V> {
    pub fn new(view: V, page_size: usize) -> Self {
        Self {
            view,
            state: ListingState::Loading,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn query(&self) -> Option<&QueryState> {
        match &self.state {
            ListingState::Ready(listing) => Some(&listing.query),
            _ => None,
        }
    }

    /// Load all posts and show the first page. Failures are shown, not retried.
    pub async fn load<S: PostSource>(&mut self, repository: &PostRepository<S>) -> &ListingState {
        self.state = ListingState::Loading;
        self.view.show_loading();

        match repository.load_all().await {
            Ok(posts) => self.show(posts),
            Err(e) => {
                tracing::error!("Error loading posts: {}", e);
                self.state = ListingState::LoadError(e.to_string());
                self.view.show_error(LOAD_ERROR_MESSAGE);
            }
        }

        &self.state
    }

    /// Enter the ready state with an already loaded collection
    pub fn show(&mut self, posts: Vec<Post>) {
        self.state = ListingState::Ready(Listing::new(posts));
        self.render();
    }

    pub fn on_tag_selected(&mut self, tag: &str) {
        self.update(|query, _| query.with_tag(tag));
    }

    pub fn on_search_input(&mut self, text: &str) {
        self.update(|query, _| query.with_search(text));
    }

    pub fn on_page(&mut self, nav: PageNav) {
        self.update(|query, total| match nav {
            PageNav::Prev => query.prev_page(),
            PageNav::Next => query.next_page(total),
            PageNav::To(page) => query.with_page(page, total),
        });
    }

    fn update(&mut self, f: impl FnOnce(QueryState, usize) -> QueryState) {
        let ListingState::Ready(listing) = &mut self.state else {
            tracing::debug!("Ignoring listing event while not ready");
            return;
        };

        let total = listing.total_pages(self.page_size);
        let query = std::mem::take(&mut listing.query);
        listing.query = f(query, total);
        tracing::debug!("Listing query: {:?}", listing.query);

        self.render();
    }

    fn render(&mut self) {
        if let ListingState::Ready(listing) = &self.state {
            render_listing(&mut self.view, listing, self.page_size);
        }
    }
}

fn render_listing<V: ListingView>(view: &mut V, listing: &Listing, page_size: usize) {
    if listing.posts.is_empty() {
        view.show_no_posts();
        return;
    }

    let query = &listing.query;
    view.render_search(&query.search_text);
    view.render_tag_filters(&listing.tags, &query.active_tag);

    let matches = apply(&listing.posts, query);
    let page = paginate(&matches, query.current_page, page_size);
    if page.is_empty() {
        view.show_no_matches();
    } else {
        view.render_posts(&page);
    }
    view.render_pagination(&page);
}
