//! Post loading - walks the posts directory and builds the index.

use crate::{
    config::Config,
    models::{Post, PostIndex},
    slug::unique_slug,
};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] crate::frontmatter::FrontmatterError),

    #[error("Posts directory not found: {0:?}")]
    MissingPostsDir(PathBuf),
}

/// Loads every markdown post under the configured directory
pub struct PostLoader {
    config: Config,
}

impl PostLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse all posts into a [`PostIndex`], newest first.
    ///
    /// Files that fail to parse are logged and skipped. Colliding slugs are
    /// made unique with a numeric suffix in discovery order.
    pub fn load(&self) -> Result<PostIndex, LoadError> {
        let posts_dir = self.config.posts_dir();
        if !posts_dir.is_dir() {
            return Err(LoadError::MissingPostsDir(posts_dir));
        }

        let files = self.discover_markdown_files(&posts_dir);
        tracing::info!("Found {} markdown files", files.len());

        let mut taken: HashSet<String> = HashSet::new();
        let mut posts = Vec::new();

        for path in &files {
            match self.parse_post(&posts_dir, path) {
                Ok(mut post) => {
                    let slug = unique_slug(&post.slug, |s| taken.contains(s));
                    if slug != post.slug {
                        tracing::warn!("Duplicate slug '{}', using '{}'", post.slug, slug);
                        post.slug = slug;
                    }
                    taken.insert(post.slug.clone());
                    posts.push(post);
                }
                Err(e) => {
                    tracing::error!("Failed to parse {:?}: {}", path, e);
                }
            }
        }

        tracing::info!("Loaded {} posts", posts.len());
        Ok(PostIndex::new(posts))
    }

    /// Discover all markdown files, sorted so slug de-duplication is stable
    fn discover_markdown_files(&self, posts_dir: &Path) -> Vec<PathBuf> {
        let ignore_patterns = compile_ignore_patterns(&self.config.ignore_patterns);

        let mut files: Vec<PathBuf> = WalkDir::new(posts_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
            .filter(|e| {
                let rel = e
                    .path()
                    .strip_prefix(posts_dir)
                    .unwrap_or(e.path())
                    .to_string_lossy()
                    .to_string();
                if should_ignore(&rel, &ignore_patterns) {
                    tracing::debug!("Ignoring {} due to ignore_patterns", rel);
                    return false;
                }
                true
            })
            .map(|e| e.into_path())
            .collect();

        files.sort();
        files
    }

    fn parse_post(&self, posts_dir: &Path, path: &Path) -> Result<Post, LoadError> {
        let content = fs::read_to_string(path)?;
        let fallback_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled");

        let mut post = Post::from_markdown(&content, fallback_title, &self.config.excerpt)?;
        post.source_path = path.strip_prefix(posts_dir).ok().map(Path::to_path_buf);
        Ok(post)
    }
}

fn compile_ignore_patterns(patterns: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::new();
    for pat in patterns {
        match Regex::new(pat) {
            Ok(re) => compiled.push(re),
            Err(err) => tracing::warn!("Invalid ignore pattern '{}': {}", pat, err),
        }
    }
    compiled
}

fn should_ignore(path: &str, ignores: &[Regex]) -> bool {
    ignores.iter().any(|re| re.is_match(path))
}
