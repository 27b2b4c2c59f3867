//! The blog front page: a list of post cards, or a notice for browsers the
//! site does not support.
//!
//! [`render`] is pure: it turns the query result and the site metadata into
//! an [`IndexPage`] tree without touching the filesystem or any global
//! state. [`IndexPage::to_html`] serializes that tree through the embedded
//! templates.

mod seo;

use serde::Serialize;
use tera::Context;

use crate::browser::LegacyBrowser;
use crate::config::SiteMetadata;
use crate::query::PostSummary;
use crate::templates::{RenderError, TemplateRenderer};

pub use seo::{Seo, DESCRIPTION_PLACEHOLDER, PAGE_TITLE};

pub const LEGACY_TITLE: &str = "IE is not supported.";
pub const LEGACY_MESSAGE: &str = "Please use a modern browser, download Firefox, Chrome or Edge";
pub const COVER_ALT: &str = "cover image";

/// Rendered front page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IndexPage {
    LegacyBrowserNotice(Notice),
    PostList(PostList),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostList {
    pub seo: Seo,
    pub cards: Vec<PostCard>,
}

/// One post, linked to its own page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub key: String,
    pub href: String,
    pub cover: Option<CardImage>,
    pub title: String,
    pub minutes_to_read: u32,
    /// `"{minutes_to_read} minutes to read"`
    pub read_time: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub src_set: Option<String>,
    pub sizes: String,
    pub alt: String,
}

/// Render the front page.
///
/// `browser` is asked once. A legacy browser gets only the notice; anyone
/// else gets the SEO block and one card per summary, in the order given.
pub fn render<B>(posts: &[PostSummary], metadata: &SiteMetadata, browser: &B) -> IndexPage
where
    B: LegacyBrowser + ?Sized,
{
    if browser.is_legacy() {
        return IndexPage::LegacyBrowserNotice(Notice {
            title: LEGACY_TITLE.to_string(),
            message: LEGACY_MESSAGE.to_string(),
        });
    }

    IndexPage::PostList(PostList {
        seo: Seo::from_metadata(metadata),
        cards: posts.iter().map(PostCard::from).collect(),
    })
}

impl From<&PostSummary> for PostCard {
    fn from(post: &PostSummary) -> Self {
        // Displayed read time is twice the estimate.
        let minutes_to_read = post.time_to_read * 2;

        PostCard {
            key: post.id.clone(),
            href: post.fields.slug.clone(),
            cover: post.frontmatter.cover.as_ref().map(|cover| CardImage {
                src: cover.sizes.src.clone(),
                src_set: cover.sizes.src_set.clone(),
                sizes: cover.sizes.sizes.clone(),
                alt: COVER_ALT.to_string(),
            }),
            title: post.frontmatter.title.clone(),
            minutes_to_read,
            read_time: format!("{} minutes to read", minutes_to_read),
            excerpt: post.excerpt.clone(),
        }
    }
}

impl IndexPage {
    /// Cards on the page; none for the legacy notice
    pub fn cards(&self) -> &[PostCard] {
        match self {
            IndexPage::PostList(list) => &list.cards,
            IndexPage::LegacyBrowserNotice(_) => &[],
        }
    }

    pub fn is_legacy_notice(&self) -> bool {
        matches!(self, IndexPage::LegacyBrowserNotice(_))
    }

    /// Serialize the page as an HTML document
    pub fn to_html(&self, renderer: &TemplateRenderer) -> Result<String, RenderError> {
        let mut context = Context::new();
        match self {
            IndexPage::LegacyBrowserNotice(notice) => {
                context.insert("lang", "");
                context.insert("notice", notice);
                renderer.render("legacy.html", &context)
            }
            IndexPage::PostList(list) => {
                context.insert("lang", &list.seo.site_language);
                context.insert("seo", &list.seo);
                context.insert("cards", &list.cards);
                renderer.render("index.html", &context)
            }
        }
    }
}
