//! Preview server
//!
//! `/` is rendered per request, using the request's `User-Agent` to decide
//! between the post list and the unsupported-browser notice. Everything
//! else is served from the public directory.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::browser::UserAgent;
use crate::config::SiteMetadata;
use crate::content::loader::ContentLoader;
use crate::page;
use crate::query::{IndexQuery, PostSummary};
use crate::templates::{RenderError, TemplateRenderer};
use crate::Blog;

/// Server state, immutable once the server starts
struct ServerState {
    summaries: Vec<PostSummary>,
    metadata: SiteMetadata,
    renderer: TemplateRenderer,
}

impl ServerState {
    fn load(blog: &Blog) -> Result<Self> {
        let posts = ContentLoader::new(blog).load_posts()?;
        Ok(Self {
            summaries: IndexQuery::new(&blog.config).run(&posts),
            metadata: blog.config.site_metadata().clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    fn render_index(&self, user_agent: &str) -> Result<String, RenderError> {
        page::render(&self.summaries, &self.metadata, &UserAgent(user_agent))
            .to_html(&self.renderer)
    }
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::load(blog)?);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .fallback_service(ServeDir::new(&blog.public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render the front page for the requesting browser
async fn index_handler(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match state.render_index(user_agent) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render front page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    fn state() -> (TempDir, ServerState) {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("content/posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("hello.md"),
            "---\ntitle: Hello Post\ndate: 2020-01-01\nprivate: false\n---\nHi.",
        )
        .unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let state = ServerState::load(&blog).unwrap();
        (dir, state)
    }

    #[test]
    fn test_modern_browser_sees_posts() {
        let (_dir, state) = state();
        let html = state
            .render_index("Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0")
            .unwrap();
        assert!(html.contains("Hello Post"));
        assert!(!html.contains("IE is not supported."));
    }

    #[test]
    fn test_internet_explorer_sees_notice() {
        let (_dir, state) = state();
        let html = state
            .render_index("Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko")
            .unwrap();
        assert!(html.contains("IE is not supported."));
        assert!(!html.contains("Hello Post"));
    }
}
