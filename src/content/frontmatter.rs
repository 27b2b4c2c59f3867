//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Cover image as written in front-matter: either a bare path or a
/// responsive image descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverSource {
    Path(String),
    Image {
        src: String,
        #[serde(default, alias = "srcSet")]
        srcset: Option<String>,
        #[serde(default)]
        sizes: Option<String>,
        #[serde(default, alias = "aspectRatio")]
        aspect_ratio: Option<f64>,
    },
}

impl CoverSource {
    /// The image path, whichever form was used
    pub fn src(&self) -> &str {
        match self {
            CoverSource::Path(path) => path,
            CoverSource::Image { src, .. } => src,
        }
    }
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Only posts with an explicit `private: false` reach the index
    pub private: Option<bool>,
    pub cover: Option<CoverSource>,
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A thematic break (`---`) followed by prose is not front-matter.
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| anyhow!("Invalid front-matter: {}", e))?;
        Ok((fm, remaining))
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// `key: value` or `key:` with a plain identifier key (not a URL scheme)
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");
    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2019-01-15
private: false
cover: ./cover.png
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.private, Some(false));
        assert_eq!(fm.cover, Some(CoverSource::Path("./cover.png".to_string())));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_private_left_unset() {
        let content = "---\ntitle: Draft\n---\nbody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.private, None);
        assert!(fm.cover.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        for content in [
            "---\ntitle: Secret\nprivate: yes\n---\nbody",
            "---\ntitle: Secret\nprivate: \"true\"\n---\nbody",
            "---\ntitle: Secret\ncover:\n  alt: no src\n---\nbody",
        ] {
            assert!(FrontMatter::parse(content).is_err(), "{}", content);
        }
    }

    #[test]
    fn test_cover_descriptor() {
        let content = r#"---
title: With Cover
private: true
cover:
  src: /images/cover.jpg
  srcSet: /images/cover-480.jpg 480w, /images/cover.jpg 960w
  aspectRatio: 1.5
---
"#;
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.private, Some(true));
        match &fm.cover {
            Some(CoverSource::Image {
                src,
                srcset,
                aspect_ratio,
                ..
            }) => {
                assert_eq!(src, "/images/cover.jpg");
                assert!(srcset.as_deref().unwrap().contains("480w"));
                assert_eq!(*aspect_ratio, Some(1.5));
            }
            other => panic!("unexpected cover: {:?}", other),
        }
        assert_eq!(fm.cover.unwrap().src(), "/images/cover.jpg");
    }

    #[test]
    fn test_parse_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        let fm = FrontMatter {
            date: Some("2019-03-02".to_string()),
            ..Default::default()
        };
        assert_eq!(
            fm.parse_date().unwrap().format("%Y-%m-%d").to_string(),
            "2019-03-02"
        );
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and http://test.com

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("# Just a heading\n").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, "# Just a heading\n");
    }
}
