//! Shared JSON schema helpers for machine-readable command output.

use chrono::NaiveDate;
use inkpost_core::{Post, Tag, TagCount};
use serde::Serialize;
use std::path::PathBuf;

pub const SCHEMA_VERSION: &str = "inkpost-v1";

/// Standard envelope for machine-consumable responses.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub schema_version: &'static str,
    pub kind: &'static str,
    pub data: T,
}

pub fn envelope<T>(kind: &'static str, data: T) -> Envelope<T> {
    Envelope {
        schema_version: SCHEMA_VERSION,
        kind,
        data,
    }
}

#[derive(Serialize)]
pub struct ExcerptData {
    pub excerpt: String,
    pub length: usize,
    pub max_length: usize,
}

#[derive(Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub tags: Vec<Tag>,
    pub published: bool,
    pub date: Option<String>,
    pub updated: Option<String>,
    pub featured_image: Option<String>,
}

#[derive(Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub body: String,
    pub source_path: Option<PathBuf>,
}

#[derive(Serialize)]
pub struct PostListData {
    pub limit: usize,
    pub offset: usize,
    pub total: usize,
    pub posts: Vec<PostSummary>,
}

#[derive(Serialize)]
pub struct TagListData {
    pub tags: Vec<TagCount>,
}

#[derive(Serialize)]
pub struct NewPostData {
    pub slug: String,
    pub path: PathBuf,
}

pub fn post_to_summary(post: &Post) -> PostSummary {
    PostSummary {
        slug: post.slug.clone(),
        title: post.title.clone(),
        url: post.url(),
        excerpt: post.excerpt.clone(),
        tags: post.tags.clone(),
        published: post.published,
        date: format_date(post.date),
        updated: format_date(post.updated),
        featured_image: post.featured_image.clone(),
    }
}

pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}
