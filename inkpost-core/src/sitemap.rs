//! Sitemap XML for published posts.

use crate::models::PostIndex;

/// Render a sitemap with the site root followed by every published post.
///
/// `lastmod` uses the post's `updated` date, falling back to `date`.
pub fn render_sitemap(index: &PostIndex, site_url: &str) -> String {
    let mut urls = String::new();

    urls.push_str(&format!(
        "  <url><loc>{}</loc></url>\n",
        escape_xml(&absolute_url(site_url, ""))
    ));

    for post in index.published() {
        urls.push_str("  <url>");
        urls.push_str(&format!(
            "<loc>{}</loc>",
            escape_xml(&absolute_url(site_url, &post.url()))
        ));
        if let Some(date) = post.updated.or(post.date) {
            urls.push_str(&format!("<lastmod>{}</lastmod>", date.format("%Y-%m-%d")));
        }
        urls.push_str("</url>\n");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}</urlset>
"#,
        urls
    )
}

fn absolute_url(site_url: &str, rel: &str) -> String {
    let root = site_url.trim_end_matches('/');
    let rel = rel.trim_start_matches('/');
    if rel.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, rel)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
