//! Legacy browser detection
//!
//! The front page refuses to render for Internet Explorer. Whether the
//! reader is on such a browser is injected into the render as a
//! [`LegacyBrowser`] predicate and evaluated once, so the page itself never
//! inspects global state: a build passes a configuration flag, the preview
//! server passes the request's `User-Agent`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `MSIE 6.0` through `MSIE 10.0`, and the `Trident/7.0` engine token IE 11 sends
    static ref INTERNET_EXPLORER: Regex = Regex::new(r"MSIE \d+|Trident/\d+").unwrap();
}

/// Decides whether the page should fall back to the unsupported-browser notice
pub trait LegacyBrowser {
    fn is_legacy(&self) -> bool;
}

impl LegacyBrowser for bool {
    fn is_legacy(&self) -> bool {
        *self
    }
}

impl<F> LegacyBrowser for F
where
    F: Fn() -> bool,
{
    fn is_legacy(&self) -> bool {
        self()
    }
}

/// A `User-Agent` header value
#[derive(Debug, Clone, Copy)]
pub struct UserAgent<'a>(pub &'a str);

impl LegacyBrowser for UserAgent<'_> {
    fn is_legacy(&self) -> bool {
        is_internet_explorer(self.0)
    }
}

/// Whether a user-agent string identifies Internet Explorer
pub fn is_internet_explorer(user_agent: &str) -> bool {
    INTERNET_EXPLORER.is_match(user_agent)
}
