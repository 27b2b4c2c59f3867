//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    #[serde(rename = "siteMetadata")]
    pub site_metadata: SiteMetadata,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Index query
    pub excerpt_length: usize,
    pub date_format: String,
    pub words_per_minute: usize,
    pub edit_url: Option<String>,
    pub cover_sizes: String,

    // Rendering
    pub legacy_browser: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_metadata: SiteMetadata::default(),

            source_dir: "content".to_string(),
            public_dir: "public".to_string(),

            excerpt_length: 100,
            date_format: "YYYY MMMM Do".to_string(),
            words_per_minute: 265,
            edit_url: None,
            cover_sizes: "(max-width: 960px) 100vw, 960px".to_string(),

            legacy_browser: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The site metadata record, resolved once per render
    pub fn site_metadata(&self) -> &SiteMetadata {
        &self.site_metadata
    }
}

/// Site-wide metadata used for the SEO block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub site_url: String,
    pub site_language: String,
    pub site_locale: String,
    pub twitter_username: String,
}
