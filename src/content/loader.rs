//! Content loader - loads posts from the content directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownAnalyzer, Post};
use crate::Blog;

/// Loads posts from `{source_dir}/posts`
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    analyzer: MarkdownAnalyzer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            analyzer: MarkdownAnalyzer::new(),
        }
    }

    /// Load every post, private ones included, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.blog.posts_dir();
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_post(&posts_dir, path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, posts_dir: &Path, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = relative_source(&self.blog.source_dir, path);

        let slug = match fm.slug.as_deref() {
            Some(custom) => normalize_slug(custom),
            None => slug_from_path(posts_dir, path),
        };

        let summary = self.analyzer.analyze(body);

        let mut post = Post::new(title, date, source);
        post.private = fm.private;
        post.cover = fm.cover;
        post.full_source = path.to_path_buf();
        post.slug = slug;
        post.plain_text = summary.plain_text;
        post.word_count = summary.word_count;
        post.table_of_contents = summary.table_of_contents;

        Ok(post)
    }
}

/// Check if a file is a markdown or MDX file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "markdown" | "mdx"))
        .unwrap_or(false)
}

/// Source path relative to the content directory, always `/`-separated
fn relative_source(source_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(source_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `posts/2019/hello.md` -> `/2019/hello/`, `posts/hello/index.mdx` -> `/hello/`
fn slug_from_path(posts_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(posts_dir).unwrap_or(path);
    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .map(|c| slug::slugify(c.as_os_str().to_string_lossy()))
        .collect();

    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    if stem != "index" {
        parts.push(slug::slugify(stem));
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

fn normalize_slug(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
