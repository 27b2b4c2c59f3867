//! Content module - handles posts and content processing

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{CoverSource, FrontMatter};
pub use markdown::{MarkdownAnalyzer, MarkdownSummary};
pub use post::{Post, TableOfContents, TocItem};
