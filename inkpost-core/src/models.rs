//! Content model structs for posts, tags and the post index.

use crate::excerpt::{generate_excerpt_with, ExcerptOptions};
use crate::frontmatter::{parse_frontmatter, FrontmatterError};
use crate::slug::{post_slug, slugify, tag_slug};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Frontmatter metadata from markdown files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    /// Hand-written summary; overrides the generated excerpt
    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_true")]
    pub published: bool,

    #[serde(default)]
    pub featured_image: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: None,
            excerpt: None,
            date: None,
            updated: None,
            tags: Vec::new(),
            published: true,
            featured_image: None,
        }
    }
}

/// A tag attached to one or more posts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        Self {
            name: name.to_string(),
            slug: tag_slug(name),
        }
    }
}

/// A single blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL slug (e.g., "my-first-post")
    pub slug: String,

    /// Display title
    pub title: String,

    /// Plain-text summary shown in listings
    pub excerpt: String,

    /// Raw markdown body (without frontmatter)
    pub body: String,

    pub tags: Vec<Tag>,

    /// Whether the post is publicly listed
    pub published: bool,

    #[serde(default)]
    pub featured_image: Option<String>,

    /// Publication date
    pub date: Option<NaiveDate>,

    /// Last updated date
    pub updated: Option<NaiveDate>,

    /// Source file relative to the posts directory
    #[serde(default)]
    pub source_path: Option<PathBuf>,
}

impl Post {
    /// Build a post from a markdown document with optional frontmatter.
    ///
    /// `fallback_title` is used when the document has no frontmatter
    /// (typically the file stem).
    pub fn from_markdown(
        markdown: &str,
        fallback_title: &str,
        options: &ExcerptOptions,
    ) -> Result<Self, FrontmatterError> {
        let (frontmatter, body) = parse_frontmatter(markdown)?;

        let title = if frontmatter.title.trim().is_empty() {
            fallback_title.trim().to_string()
        } else {
            frontmatter.title.trim().to_string()
        };

        let slug = match frontmatter.slug.as_deref().map(slugify) {
            Some(slug) if !slug.is_empty() => slug,
            _ => post_slug(&title),
        };

        let excerpt = match frontmatter.excerpt.as_deref().map(str::trim) {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => generate_excerpt_with(&body, options),
        };

        let date = parse_date(frontmatter.date.as_deref(), &slug);
        let updated = parse_date(frontmatter.updated.as_deref(), &slug);

        Ok(Self {
            slug,
            title,
            excerpt,
            body,
            tags: collect_tags(&frontmatter.tags),
            published: frontmatter.published,
            featured_image: frontmatter.featured_image,
            date,
            updated,
            source_path: None,
        })
    }

    /// Get the URL path for this post
    pub fn url(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t.slug == slug)
    }
}

fn parse_date(raw: Option<&str>, slug: &str) -> Option<NaiveDate> {
    let raw = raw?.trim();
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("Ignoring invalid date '{}' on '{}': {}", raw, slug, e);
            None
        }
    }
}

/// Skip blank names and drop tags whose slug was already seen.
fn collect_tags(names: &[String]) -> Vec<Tag> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| Tag::new(name))
        .filter(|tag| !tag.slug.is_empty() && seen.insert(tag.slug.clone()))
        .collect()
}

/// Summary of a tag across the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    #[serde(flatten)]
    pub tag: Tag,
    pub count: usize,
}

/// All loaded posts, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<Post>,
}

impl PostIndex {
    pub fn new(mut posts: Vec<Post>) -> Self {
        sort_newest_first(&mut posts);
        Self { posts }
    }

    /// Find a post by slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Published posts only
    pub fn published(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.published).collect()
    }

    /// Posts passing the visibility and tag filters, in index order
    pub fn matching(&self, published_only: bool, tag_slug: Option<&str>) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| !published_only || p.published)
            .filter(|p| tag_slug.map_or(true, |slug| p.has_tag(slug)))
            .collect()
    }

    /// A window of the listing, like the blog's paged post list.
    ///
    /// `total` counts every matching post, not just the returned window.
    pub fn page(
        &self,
        limit: usize,
        offset: usize,
        published_only: bool,
        tag_slug: Option<&str>,
    ) -> Page<'_> {
        let matching = self.matching(published_only, tag_slug);
        Page {
            total: matching.len(),
            posts: matching.into_iter().skip(offset).take(limit).collect(),
        }
    }

    /// Unique tags with post counts, ordered by slug
    pub fn tags(&self, published_only: bool) -> Vec<TagCount> {
        let mut counts: BTreeMap<String, TagCount> = BTreeMap::new();
        for tag in self
            .matching(published_only, None)
            .into_iter()
            .flat_map(|p| &p.tags)
        {
            counts
                .entry(tag.slug.clone())
                .or_insert_with(|| TagCount {
                    tag: tag.clone(),
                    count: 0,
                })
                .count += 1;
        }
        counts.into_values().collect()
    }
}

/// One window of a post listing
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub total: usize,
    pub posts: Vec<&'a Post>,
}

/// Newest first; undated posts last; ties broken by title.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    });
}
