//! Sitemap command implementation.

use anyhow::{bail, Context, Result};
use inkpost_core::{render_sitemap, Config, PostLoader};
use std::fs;
use std::path::Path;

/// Render sitemap.xml for published posts to `output`, or stdout.
pub fn write_sitemap(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let site_url = config.site.url.trim().to_string();
    if site_url.is_empty() {
        bail!("Set site.url in {:?} to generate a sitemap", config_path);
    }

    let index = PostLoader::new(config)
        .load()
        .context("Failed to load posts")?;
    let xml = render_sitemap(&index, &site_url);

    match output {
        Some(path) => {
            fs::write(path, xml).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Generated sitemap with {} posts", index.published().len());
            println!("Wrote {:?}", path);
        }
        None => print!("{xml}"),
    }

    Ok(())
}
