//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::frontmatter::CoverSource;

/// A blog post loaded from the content directory
#[derive(Debug, Clone)]
pub struct Post {
    /// Stable identifier, derived from the source path
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// `private` as written in front-matter, `None` when absent
    pub private: Option<bool>,

    /// Cover image as written in front-matter
    pub cover: Option<CoverSource>,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Destination path, e.g. `/my-post/`
    pub slug: String,

    /// Body stripped down to prose
    pub plain_text: String,

    pub word_count: usize,

    pub table_of_contents: TableOfContents,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        let slug = format!("/{}/", slug::slugify(&title));
        Self {
            id: source.clone(),
            title,
            date,
            private: None,
            cover: None,
            source: source.clone(),
            full_source: PathBuf::from(&source),
            slug,
            plain_text: String::new(),
            word_count: 0,
            table_of_contents: TableOfContents::default(),
        }
    }

    /// Listed on the front page only when explicitly marked `private: false`
    pub fn is_listed(&self) -> bool {
        self.private == Some(false)
    }
}

/// Headings of a post, nested by depth
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableOfContents {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocItem {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocItem>,
}
