//! The index query: which posts the front page lists, in what order, and
//! in what shape.
//!
//! Field names serialize exactly as the page consumes them (`frontmatter`,
//! `fields.slug`, `fields.editLink`, `timeToRead`, `tableOfContents`), so the
//! JSON dump written next to `index.html` has the same shape as the data the
//! page was rendered from.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::{CoverSource, Post, TableOfContents};
use crate::helpers::{format_date, prune, resolve_relative};

/// Appended to excerpts that were cut short
const EXCERPT_OMISSION: &str = "…";

/// One published post as the front page sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub excerpt: String,
    pub frontmatter: SummaryFrontMatter,
    pub fields: PostFields,
    pub time_to_read: u32,
    #[serde(default)]
    pub table_of_contents: TableOfContents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFrontMatter {
    pub title: String,
    /// Already formatted for display
    pub date: String,
    #[serde(default)]
    pub cover: Option<CoverImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    pub slug: String,
    #[serde(default)]
    pub edit_link: String,
}

/// A cover image ready to be laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverImage {
    pub sizes: ImageSizes,
}

/// Responsive image descriptor: what an `<img>` needs for `src`, `srcset`
/// and `sizes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSizes {
    pub src: String,
    #[serde(default)]
    pub src_set: Option<String>,
    pub sizes: String,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

/// `{ "allMdx": { "nodes": [...] } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexData {
    pub all_mdx: PostNodes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostNodes {
    pub nodes: Vec<PostSummary>,
}

impl IndexData {
    pub fn new(nodes: Vec<PostSummary>) -> Self {
        Self {
            all_mdx: PostNodes { nodes },
        }
    }
}

/// Runs the front-page query over loaded posts
pub struct IndexQuery<'a> {
    config: &'a SiteConfig,
}

impl<'a> IndexQuery<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Posts marked `private: false`, newest first, projected to summaries
    pub fn run(&self, posts: &[Post]) -> Vec<PostSummary> {
        let mut published: Vec<&Post> = posts.iter().filter(|p| p.is_listed()).collect();
        published.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            "Index query matched {} of {} posts",
            published.len(),
            posts.len()
        );

        published.into_iter().map(|p| self.summarize(p)).collect()
    }

    fn summarize(&self, post: &Post) -> PostSummary {
        PostSummary {
            id: post.id.clone(),
            excerpt: prune(&post.plain_text, self.config.excerpt_length, EXCERPT_OMISSION),
            frontmatter: SummaryFrontMatter {
                title: post.title.clone(),
                date: format_date(&post.date, &self.config.date_format),
                cover: post.cover.as_ref().map(|c| self.cover_image(post, c)),
            },
            fields: PostFields {
                slug: post.slug.clone(),
                edit_link: self.edit_link(post),
            },
            time_to_read: time_to_read(post.word_count, self.config.words_per_minute),
            table_of_contents: post.table_of_contents.clone(),
        }
    }

    fn cover_image(&self, post: &Post, cover: &CoverSource) -> CoverImage {
        let sizes = match cover {
            CoverSource::Path(path) => ImageSizes {
                src: resolve_relative(&post.slug, path),
                src_set: None,
                sizes: self.config.cover_sizes.clone(),
                aspect_ratio: None,
            },
            CoverSource::Image {
                src,
                srcset,
                sizes,
                aspect_ratio,
            } => ImageSizes {
                src: resolve_relative(&post.slug, src),
                src_set: srcset.clone(),
                sizes: sizes
                    .clone()
                    .unwrap_or_else(|| self.config.cover_sizes.clone()),
                aspect_ratio: *aspect_ratio,
            },
        };
        CoverImage { sizes }
    }

    fn edit_link(&self, post: &Post) -> String {
        match self.config.edit_url.as_deref() {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), post.source),
            None => String::new(),
        }
    }
}

/// Whole minutes at `words_per_minute`, rounded, never less than one
pub fn time_to_read(word_count: usize, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1) as f64;
    let minutes = (word_count as f64 / wpm).round() as u32;
    minutes.max(1)
}
