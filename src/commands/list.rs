//! List the posts the front page would show

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::query::IndexQuery;
use crate::Blog;

/// Print the index query result, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let summaries = IndexQuery::new(&blog.config).run(&posts);

    println!("Posts ({} of {}):", summaries.len(), posts.len());
    for summary in summaries {
        println!(
            "  {} - {} ({} min) [{}]",
            summary.frontmatter.date,
            summary.frontmatter.title,
            summary.time_to_read,
            summary.fields.slug
        );
    }

    Ok(())
}
