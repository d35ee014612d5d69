//! Scaffold a new post from a title.

use crate::agent;
use anyhow::{bail, Context, Result};
use inkpost_core::{post_slug, unique_slug, Config, PostLoader};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct NewFrontmatter {
    title: String,
    slug: String,
    date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    published: bool,
}

/// Write `posts/<slug>.md` for `title`, picking a slug no other post uses.
pub fn new_post(
    config_path: &Path,
    title: &str,
    tags: &[String],
    draft: bool,
    json: bool,
) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Post title must not be empty");
    }

    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let posts_dir = config.posts_dir();
    fs::create_dir_all(&posts_dir).with_context(|| format!("Failed to create {:?}", posts_dir))?;

    let index = PostLoader::new(config)
        .load()
        .context("Failed to load existing posts")?;
    let taken: HashSet<&str> = index.posts.iter().map(|p| p.slug.as_str()).collect();

    // The slug is pinned in frontmatter, so short titles keep their suffix.
    let slug = unique_slug(&post_slug(title), |s| {
        taken.contains(s) || posts_dir.join(format!("{s}.md")).exists()
    });
    let path = posts_dir.join(format!("{slug}.md"));

    let frontmatter = NewFrontmatter {
        title: title.to_string(),
        slug: slug.clone(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        tags: tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        published: !draft,
    };
    let yaml = serde_yaml::to_string(&frontmatter).context("Failed to serialize frontmatter")?;
    let contents = format!("---\n{}---\n\nStart writing here.\n", yaml);

    fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::info!("Created post '{}'", slug);

    if json {
        let payload = agent::envelope("post.new", agent::NewPostData { slug, path });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Created {:?}", path);
    }

    Ok(())
}
