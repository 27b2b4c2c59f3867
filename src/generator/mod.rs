//! Generator module - writes the front page and its assets to the public
//! directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{CoverSource, Post};
use crate::helpers::is_absolute;
use crate::page::{self, IndexPage};
use crate::query::{IndexData, IndexQuery};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static site generator for the front page
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate `index.html`, `index.json` and copy assets
    pub fn generate(&self, posts: &[Post], legacy_browser: bool) -> Result<IndexPage> {
        fs::create_dir_all(&self.blog.public_dir)?;

        self.copy_static_assets()?;
        self.copy_post_assets(posts)?;

        let summaries = IndexQuery::new(&self.blog.config).run(posts);
        let metadata = self.blog.config.site_metadata();
        let page = page::render(&summaries, metadata, &legacy_browser);

        let html = page.to_html(&self.renderer)?;
        let index_path = self.blog.public_dir.join("index.html");
        fs::write(&index_path, html)?;
        tracing::debug!("Generated: {:?}", index_path);

        let json_path = self.blog.public_dir.join("index.json");
        let json = serde_json::to_string_pretty(&IndexData::new(summaries))?;
        fs::write(&json_path, json)?;
        tracing::debug!("Generated: {:?}", json_path);

        Ok(page)
    }

    /// Copy `{source_dir}/static/**` into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = self.blog.static_dir();
        if !static_dir.exists() {
            return Ok(());
        }
        copy_tree(&static_dir, &self.blog.public_dir)
    }

    /// Copy post-relative assets into `{public_dir}{slug}`: the whole
    /// directory of an `index.*` post, only the cover file otherwise
    fn copy_post_assets(&self, posts: &[Post]) -> Result<()> {
        for post in posts.iter().filter(|p| p.is_listed()) {
            let Some(post_dir) = post.full_source.parent() else {
                continue;
            };
            let dest = self.blog.public_dir.join(post.slug.trim_matches('/'));

            let is_bundle = post
                .full_source
                .file_stem()
                .map(|stem| stem == "index")
                .unwrap_or(false);
            if is_bundle {
                copy_tree(post_dir, &dest)?;
                continue;
            }

            let Some(cover) = post.cover.as_ref().map(CoverSource::src) else {
                continue;
            };
            if is_absolute(cover) {
                continue;
            }

            let relative = cover.trim_start_matches("./");
            let source = post_dir.join(relative);
            if !source.is_file() {
                tracing::warn!("Cover {:?} of {} not found", source, post.source);
                continue;
            }

            let target = dest.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&source, &target)?;
            tracing::debug!("Copied: {:?}", target);
        }
        Ok(())
    }
}

/// Copy every non-markdown file under `src` to the same relative path under `dest`
fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str());
        if matches!(ext, Some("md") | Some("markdown") | Some("mdx")) {
            continue;
        }

        let relative = path.strip_prefix(src)?;
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        tracing::debug!("Copied: {:?}", target);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::ContentLoader;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str, content: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/posts/hello/index.mdx",
            "---\ntitle: Hello\ndate: 2020-02-02\nprivate: false\ncover: ./cover.png\n---\nHello there.",
        );
        write(&dir, "content/posts/hello/cover.png", "png");
        write(
            &dir,
            "content/posts/hidden.md",
            "---\ntitle: Hidden\ndate: 2021-01-01\nprivate: true\n---\nSecret.",
        );
        write(&dir, "content/static/robots.txt", "User-agent: *");
        dir
    }

    #[test]
    fn test_generate_writes_index_and_assets() {
        let dir = site();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let page = Generator::new(&blog).unwrap().generate(&posts, false).unwrap();
        assert_eq!(page.cards().len(), 1);

        let html = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(html.contains("Hello"));
        assert!(!html.contains("Hidden"));
        assert!(html.contains(r#"src="/hello/cover.png""#));

        assert!(blog.public_dir.join("hello/cover.png").exists());
        assert!(blog.public_dir.join("robots.txt").exists());

        let json = fs::read_to_string(blog.public_dir.join("index.json")).unwrap();
        let data: IndexData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.all_mdx.nodes.len(), 1);
        assert_eq!(data.all_mdx.nodes[0].fields.slug, "/hello/");
    }

    #[test]
    fn test_generate_copies_cover_of_single_file_post() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/posts/loose.md",
            "---\ntitle: Loose\ndate: 2020-03-03\nprivate: false\ncover: ./images/loose.png\n---\nBody.",
        );
        write(&dir, "content/posts/images/loose.png", "png");
        write(
            &dir,
            "content/posts/remote.md",
            "---\ntitle: Remote\ndate: 2020-03-04\nprivate: false\ncover: https://cdn.example.com/r.png\n---\nBody.",
        );
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        Generator::new(&blog).unwrap().generate(&posts, false).unwrap();

        let html = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(html.contains(r#"src="/loose/images/loose.png""#));
        assert!(blog.public_dir.join("loose/images/loose.png").is_file());
        assert!(html.contains(r#"src="https://cdn.example.com/r.png""#));
        assert!(!blog.public_dir.join("remote").exists());
    }

    #[test]
    fn test_generate_legacy_notice() {
        let dir = site();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let page = Generator::new(&blog).unwrap().generate(&posts, true).unwrap();
        assert!(page.is_legacy_notice());

        let html = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(html.contains("IE is not supported."));
        assert!(!html.contains("minutes to read"));
    }
}
