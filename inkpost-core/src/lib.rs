//! # inkpost-core
//!
//! Core library for the inkpost blog.
//!
//! This crate turns markdown post files into a content model: plain-text
//! excerpts for listings, URL slugs for posts and tags, frontmatter
//! parsing, a newest-first post index, and a sitemap of published posts.

pub mod config;
pub mod excerpt;
pub mod frontmatter;
pub mod loader;
pub mod models;
pub mod sitemap;
pub mod slug;

pub use config::Config;
pub use excerpt::{generate_excerpt, generate_excerpt_with, ExcerptOptions};
pub use loader::PostLoader;
pub use models::{Frontmatter, Page, Post, PostIndex, Tag, TagCount};
pub use sitemap::render_sitemap;
pub use slug::{post_slug, slugify, tag_slug, unique_slug};
