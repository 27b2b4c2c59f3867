//! blog-index: renders the front page of a statically generated blog
//!
//! Posts are loaded from Markdown/MDX files ([`content`]), narrowed and
//! shaped by the index query ([`query`]), and rendered into a list of post
//! cards ([`page`]) through embedded Tera templates ([`templates`]). Browsers
//! the site does not support get a short notice instead ([`browser`]).

pub mod browser;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod query;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub source_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        }
    }

    /// Directory holding the posts
    pub fn posts_dir(&self) -> PathBuf {
        self.source_dir.join("posts")
    }

    /// Directory copied verbatim into the public directory
    pub fn static_dir(&self) -> PathBuf {
        self.source_dir.join("static")
    }

    /// Generate the front page
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self, self.config.legacy_browser)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
