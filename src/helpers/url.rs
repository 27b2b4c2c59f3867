//! URL helper functions

/// Absolute URL formed by plain concatenation of the site URL and a path,
/// e.g. `https://example.com` + `/image.png`
pub fn full_url_for(site_url: &str, path: &str) -> String {
    format!("{}{}", site_url, path)
}

/// Whether a path points off-site or is already root-relative
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("data:")
}

/// Resolve a path written relative to a post against the post's slug
///
/// # Examples
/// ```ignore
/// resolve_relative("/hello/", "./cover.png") // -> "/hello/cover.png"
/// ```
pub fn resolve_relative(slug: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    let path = path.trim_start_matches("./");
    format!("{}/{}", slug.trim_end_matches('/'), path)
}
