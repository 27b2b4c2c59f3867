//! Document metadata (SEO) block of the front page

use serde::Serialize;

use crate::config::SiteMetadata;
use crate::helpers::full_url_for;

/// Title of the front page itself; the site title is the template around it
pub const PAGE_TITLE: &str = "Home";

/// Shown when the site has no description
pub const DESCRIPTION_PLACEHOLDER: &str = "nothin’";

/// Values for the `<title>`, description, canonical, Open Graph and Twitter
/// tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seo {
    pub title: String,
    pub title_template: String,
    /// `Home | {title_template}`
    pub document_title: String,
    pub description: String,
    /// Absolute: site URL followed by the image path
    pub image: String,
    pub canonical: String,
    pub site_language: String,
    pub site_locale: String,
    pub twitter_username: String,
}

impl Seo {
    pub fn from_metadata(metadata: &SiteMetadata) -> Self {
        let description = match metadata.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => DESCRIPTION_PLACEHOLDER.to_string(),
        };

        let document_title = if metadata.title.is_empty() {
            PAGE_TITLE.to_string()
        } else {
            format!("{} | {}", PAGE_TITLE, metadata.title)
        };

        Self {
            title: PAGE_TITLE.to_string(),
            title_template: metadata.title.clone(),
            document_title,
            description,
            image: full_url_for(&metadata.site_url, &metadata.image),
            canonical: metadata.site_url.clone(),
            site_language: metadata.site_language.clone(),
            site_locale: metadata.site_locale.clone(),
            twitter_username: metadata.twitter_username.clone(),
        }
    }
}
