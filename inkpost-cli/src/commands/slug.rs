//! Slug command implementation.

use anyhow::{bail, Result};
use inkpost_core::{post_slug, tag_slug};

/// Print the slug a post title (or, with `tag`, a tag name) would get.
pub fn show_slug(text: &str, tag: bool) -> Result<()> {
    let slug = if tag { tag_slug(text) } else { post_slug(text) };

    if slug.is_empty() {
        bail!("'{}' does not produce a usable slug", text);
    }

    println!("{slug}");
    Ok(())
}
