//! Slug generation for posts and tags.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Post slugs shorter than this get a generated suffix.
pub const MIN_POST_SLUG_LEN: usize = 3;

static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert a string to a URL-safe slug
///
/// Rules:
/// - Lowercase
/// - Replace whitespace with hyphens
/// - Remove special characters (except hyphens)
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use inkpost_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("C++ Programming"), "c-programming");
/// ```
pub fn slugify(input: &str) -> String {
    let lowercased = input.to_lowercase();

    let cleaned = lowercased
        .graphemes(true)
        .filter_map(|g| {
            let c = g.chars().next()?;
            if c.is_whitespace() || c == '_' {
                Some("-")
            } else if c.is_ascii_alphanumeric() || c == '-' || c.is_alphabetic() {
                Some(g)
            } else {
                None
            }
        })
        .collect::<String>();

    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Slug for a new post, derived from its title.
///
/// Titles that slugify to fewer than three characters get a time-based
/// suffix so the slug stays meaningful in a URL.
pub fn post_slug(title: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
    post_slug_with_seed(title, millis)
}

/// Deterministic core of [`post_slug`]: `seed` feeds the short-slug suffix.
pub fn post_slug_with_seed(title: &str, seed: u64) -> String {
    let slug = slugify(title);
    if slug.chars().count() >= MIN_POST_SLUG_LEN {
        return slug;
    }

    let suffix: String = to_base36(seed).chars().skip(2).take(6).collect();
    let stem = if slug.is_empty() { "post" } else { slug.as_str() };
    format!("{stem}-{suffix}")
}

/// Slug for a tag name. Unlike posts, short tag slugs are kept as is.
pub fn tag_slug(name: &str) -> String {
    slugify(name)
}

/// First of `base`, `base-1`, `base-2`, ... for which `is_taken` is false.
pub fn unique_slug(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    let mut counter = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("Rust & Safety"), "rust-safety");
        assert_eq!(slugify("Node.js Tips"), "nodejs-tips");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(slugify("Café"), "café");
        assert_eq!(slugify("中文 标题"), "中文-标题");
    }

    #[test]
    fn test_whitespace_and_hyphens() {
        assert_eq!(slugify("  Hello    World  "), "hello-world");
        assert_eq!(slugify("hello_world"), "hello-world");
        assert_eq!(slugify("-Leading -- Hyphen-"), "leading-hyphen");
    }

    #[test]
    fn test_empty_and_special_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_post_slug_long_enough() {
        assert_eq!(post_slug_with_seed("Hello World", 0), "hello-world");
        assert_eq!(post_slug("Hello World"), "hello-world");
    }

    #[test]
    fn test_post_slug_short_title_gets_suffix() {
        // 36^7 renders as "10000000"; digits 2..8 are "000000"
        let seed = 36u64.pow(7);
        assert_eq!(post_slug_with_seed("Go", seed), "go-000000");
        assert_eq!(post_slug_with_seed("!!", seed), "post-000000");
    }

    #[test]
    fn test_post_slug_from_clock() {
        let slug = post_slug("?");
        assert!(slug.starts_with("post-"));
        assert_eq!(slug.len(), "post-".len() + 6);
    }

    #[test]
    fn test_tag_slug_keeps_short_names() {
        assert_eq!(tag_slug("Go"), "go");
        assert_eq!(tag_slug("Web Dev"), "web-dev");
    }

    #[test]
    fn test_unique_slug() {
        let taken: HashSet<String> = ["hello", "hello-1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(unique_slug("fresh", |s| taken.contains(s)), "fresh");
        assert_eq!(unique_slug("hello", |s| taken.contains(s)), "hello-2");
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
