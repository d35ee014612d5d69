//! Excerpt command implementation.

use crate::agent;
use anyhow::{bail, Context, Result};
use inkpost_core::config::MIN_MAX_LENGTH;
use inkpost_core::frontmatter::split_frontmatter;
use inkpost_core::{generate_excerpt_with, Config};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Print the excerpt of a markdown file (or stdin).
///
/// Frontmatter, if present, is not part of the excerpt.
pub fn show_excerpt(
    config_path: &Path,
    file: Option<&Path>,
    max_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;

    let mut options = config.excerpt.clone();
    if let Some(max_length) = max_length {
        if max_length < MIN_MAX_LENGTH {
            bail!("--max-length must be at least {MIN_MAX_LENGTH}, got {max_length}");
        }
        options.max_length = max_length;
    }

    let content = read_input(file)?;
    let (_, body) = split_frontmatter(&content);
    let excerpt = generate_excerpt_with(body, &options);

    if json {
        let payload = agent::envelope(
            "excerpt",
            agent::ExcerptData {
                length: excerpt.chars().count(),
                max_length: options.max_length,
                excerpt,
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{excerpt}");
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
