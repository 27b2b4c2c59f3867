//! Generate the front page

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Blog;

/// Load posts and write the front page to the public directory
pub fn run(blog: &Blog, legacy_browser: bool) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(blog).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(blog)?;
    let page = generator.generate(&posts, legacy_browser)?;

    if page.is_legacy_notice() {
        tracing::info!("Rendered the unsupported-browser notice");
    } else {
        tracing::info!("Rendered {} post cards", page.cards().len());
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
