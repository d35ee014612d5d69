//! Post and tag listing commands.

use crate::agent;
use anyhow::{Context, Result};
use inkpost_core::{slugify, tag_slug, Config, Post, PostIndex, PostLoader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub limit: usize,
    pub offset: usize,
    pub drafts: bool,
    pub tag: Option<String>,
    pub json: bool,
}

fn load_index(config_path: &Path) -> Result<PostIndex> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    PostLoader::new(config).load().context("Failed to load posts")
}

/// List posts newest first, optionally filtered by tag
pub fn list_posts(config_path: &Path, opts: ListOptions) -> Result<()> {
    let index = load_index(config_path)?;

    let tag = opts.tag.as_deref().map(tag_slug);
    let page = index.page(opts.limit, opts.offset, !opts.drafts, tag.as_deref());
    let total = page.total;
    let page = page.posts;

    if opts.json {
        let payload = agent::envelope(
            "posts.list",
            agent::PostListData {
                limit: opts.limit,
                offset: opts.offset,
                total,
                posts: page.iter().map(|p| agent::post_to_summary(p)).collect(),
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if page.is_empty() {
        println!("No posts found");
        return Ok(());
    }

    for post in &page {
        print_post(post);
    }

    let shown = opts.offset + page.len();
    if total > shown {
        println!("... and {} more posts", total - shown);
    }

    Ok(())
}

fn print_post(post: &Post) {
    // Format:
    // 2025-06-01  Hello Rust [draft]
    //   /blog/hello-rust  #rust #web-dev
    //   Rust is fun.
    //
    let date = agent::format_date(post.date).unwrap_or_else(|| "----------".to_string());
    let draft = if post.published { "" } else { " [draft]" };
    println!("{}  {}{}", date, post.title, draft);

    let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t.slug)).collect();
    if tags.is_empty() {
        println!("  {}", post.url());
    } else {
        println!("  {}  {}", post.url(), tags.join(" "));
    }
    println!("  {}", post.excerpt);
    println!();
}

/// Show a single post by slug, drafts included
pub fn show_post(config_path: &Path, slug: &str, json: bool) -> Result<()> {
    let index = load_index(config_path)?;
    let post = find_post(&index, slug)
        .with_context(|| format!("Post '{}' not found (slug or /blog/ URL)", slug))?;

    if json {
        let payload = agent::envelope(
            "post.show",
            agent::PostDetail {
                summary: agent::post_to_summary(post),
                body: post.body.clone(),
                source_path: post.source_path.clone(),
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_post(post);
    println!("{}", post.body.trim());
    Ok(())
}

fn find_post<'a>(index: &'a PostIndex, query: &str) -> Option<&'a Post> {
    let trimmed = query.trim().trim_matches('/');
    let bare = trimmed.strip_prefix("blog/").unwrap_or(trimmed);

    index
        .find_by_slug(bare)
        .or_else(|| index.find_by_slug(&slugify(bare)))
}

/// List unique tags with post counts
pub fn list_tags(config_path: &Path, drafts: bool, json: bool) -> Result<()> {
    let index = load_index(config_path)?;
    let tags = index.tags(!drafts);

    if json {
        let payload = agent::envelope("tags.list", agent::TagListData { tags });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags found");
        return Ok(());
    }

    for entry in &tags {
        println!("{} ({}) {}", entry.tag.name, entry.count, entry.tag.slug);
    }

    Ok(())
}
