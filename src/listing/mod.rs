//! Listing module - query, pagination and rendering of the post index

mod controller;
pub mod pagination;
pub mod query;
mod view;

pub use controller::{Listing, ListingController, ListingState, PageNav};
pub use pagination::{paginate, PageView};
pub use query::{apply, collect_tags, filter_by_tag, search, QueryState, TagFilter};
pub use view::{
    HtmlListing, ListingView, TextListing, LOADING_MESSAGE, LOAD_ERROR_MESSAGE,
    NO_MATCHES_MESSAGE, NO_POSTS_MESSAGE,
};
