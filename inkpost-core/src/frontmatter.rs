//! Frontmatter parsing from markdown post files.

use crate::models::Frontmatter;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX
        .get_or_init(|| Regex::new(r"(?s)^---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n(.*))?$").unwrap())
}

/// Split a document into its raw YAML block (if any) and the markdown body.
///
/// Never fails; a document without a leading `---` block is all body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    match frontmatter_regex().captures(content) {
        Some(captures) => {
            let yaml = captures.get(1).map(|m| m.as_str());
            let body = captures.get(2).map_or("", |m| m.as_str());
            (yaml, body)
        }
        None => (None, content),
    }
}

/// Parse frontmatter from markdown content
///
/// Returns a tuple of (frontmatter, markdown_body).
/// If no frontmatter is present, returns default frontmatter with the full content as body.
///
/// # Example
///
/// ```
/// use inkpost_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: My Post\ndate: 2025-01-01\n---\n# Hello World\n";
///
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title, "My Post");
/// assert_eq!(fm.date, Some("2025-01-01".to_string()));
/// assert!(body.trim().starts_with("# Hello World"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let (yaml, body) = split_frontmatter(content);
    let Some(yaml) = yaml else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match serde_yaml::from_str(yaml) {
        Ok(fm) => fm,
        Err(e) => {
            if e.to_string().contains("missing field `title`") {
                return Err(FrontmatterError::MissingField("title".to_string()));
            }
            return Err(FrontmatterError::YamlError(e));
        }
    };

    if frontmatter.title.trim().is_empty() {
        return Err(FrontmatterError::MissingField("title".to_string()));
    }

    Ok((frontmatter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_frontmatter() {
        let content = r#"---
title: Test Post
slug: custom-slug
date: 2025-01-01
excerpt: Hand written summary
---

# Hello World

This is the content."#;

        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title, "Test Post");
        assert_eq!(fm.slug, Some("custom-slug".to_string()));
        assert_eq!(fm.date, Some("2025-01-01".to_string()));
        assert_eq!(fm.excerpt, Some("Hand written summary".to_string()));
        assert!(fm.published);
        assert!(body.contains("# Hello World"));
        assert!(body.contains("This is the content."));
    }

    #[test]
    fn test_parse_frontmatter_with_tags() {
        let content = r#"---
title: Tagged Post
tags:
  - rust
  - web dev
---

Content."#;

        let (fm, _) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.tags, vec!["rust", "web dev"]);
    }

    #[test]
    fn test_parse_unpublished() {
        let content = "---\ntitle: Draft Post\npublished: false\n---\n\nContent.";
        let (fm, _) = parse_frontmatter(content).unwrap();
        assert!(!fm.published);
    }

    #[test]
    fn test_parse_no_frontmatter() {
        let content = "# Just Content\n\nNo frontmatter here.";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title, "");
        assert!(fm.published);
        assert_eq!(body, content);
    }

    #[test]
    fn test_frontmatter_without_body() {
        let (yaml, body) = split_frontmatter("---\ntitle: Only\n---");
        assert_eq!(yaml, Some("title: Only"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title, "Windows");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_invalid_yaml() {
        let content = "---\ntitle: Test\ninvalid yaml: [unclosed\n---\n\nContent.";
        assert!(matches!(
            parse_frontmatter(content),
            Err(FrontmatterError::YamlError(_))
        ));
    }

    #[test]
    fn test_missing_title() {
        let content = "---\nexcerpt: No title\n---\n\nContent.";
        match parse_frontmatter(content) {
            Err(FrontmatterError::MissingField(field)) => assert_eq!(field, "title"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_title() {
        let content = "---\ntitle: \"  \"\n---\n\nContent.";
        assert!(matches!(
            parse_frontmatter(content),
            Err(FrontmatterError::MissingField(_))
        ));
    }
}
