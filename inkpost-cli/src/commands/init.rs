//! Init command implementation.

use anyhow::{Context, Result};
use inkpost_core::config::DEFAULT_CONFIG_FILE;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../inkpost.yml.example");

/// Initialize a new inkpost blog
pub fn init_blog(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_posts(root)?;

    println!("✓ inkpost initialized in {:?}", root);
    println!("  - Edit {} to tune excerpts", DEFAULT_CONFIG_FILE);
    println!("  - Write posts as markdown files in posts/");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        println!("{} already exists at {:?}", DEFAULT_CONFIG_FILE, config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_posts(root: &Path) -> Result<()> {
    let posts = root.join("posts");
    fs::create_dir_all(&posts).with_context(|| format!("Failed to create {:?}", posts))?;

    let sample = posts.join("welcome.md");
    if !sample.exists() {
        fs::write(&sample, sample_post())
            .with_context(|| format!("Failed to write {:?}", sample))?;
        println!("Created {:?}", sample);
    }

    Ok(())
}

fn sample_post() -> String {
    let today = chrono::Local::now().format("%Y-%m-%d");
    format!(
        r#"---
title: Welcome to inkpost
date: {today}
tags: [meta]
---

# Welcome

This is your first post. Its opening paragraphs, stripped of markdown,
become the excerpt shown in post listings.

Add more posts as markdown files next to this one, then run `inkpost posts`.
"#
    )
}
