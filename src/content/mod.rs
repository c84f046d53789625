//! Content module - loads posts and renders their markdown

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
pub(crate) mod post;

pub use error::ContentError;
pub use frontmatter::{split_tags, FrontMatter};
pub use loader::{ContentLoader, LoadOptions};
pub use markdown::MarkdownRenderer;
pub use post::Post;
