//! Helper functions shared by the listing renderers and loaders

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
