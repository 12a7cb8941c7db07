//! Content module - posts, front-matter, and loading them from a site

mod frontmatter;
pub mod markdown;
mod post;
pub mod repository;
pub mod source;

pub use frontmatter::FrontMatter;
pub use post::{MetaValue, Metadata, Post};
pub use repository::{ManifestEntry, PostRepository};
pub use source::{DirSource, HttpSource, PostSource, SiteSource};
