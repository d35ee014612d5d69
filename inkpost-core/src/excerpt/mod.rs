//! Plain-text excerpts from Markdown post bodies.
//!
//! The pipeline is a fixed sequence of pure steps:
//!
//! 1. structural rewrites ([`rules::STRUCTURAL_RULES`]): code fences and
//!    tables become markers, horizontal rules disappear
//! 2. inline formatting strip ([`rules::INLINE_RULES`])
//! 3. paragraph segmentation
//! 4. merging of runs of very short paragraphs
//! 5. accumulation of leading paragraphs within the length budget
//! 6. truncation with an ellipsis
//! 7. a raw punctuation-stripping fallback if everything above came up empty
//!
//! Every step is total, so [`generate_excerpt`] never fails.

pub mod paragraphs;
pub mod rules;

pub use paragraphs::{
    accumulate, ellipsize, fallback_excerpt, merge_short_paragraphs, split_paragraphs,
};
pub use rules::{apply_rules, Rule, INLINE_RULES, STRUCTURAL_RULES};

use serde::{Deserialize, Serialize};

/// Default excerpt length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 200;

/// Paragraphs shorter than this (in chars) are candidates for merging.
pub const SHORT_PARAGRAPH_THRESHOLD: usize = 20;

/// Maximum number of paragraphs that contribute to an excerpt.
pub const MAX_PARAGRAPHS: usize = 2;

/// Returned when the input has no extractable text.
pub const PLACEHOLDER: &str = "no excerpt available";

/// Appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Tunables for excerpt generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptOptions {
    /// Hard upper bound on the excerpt length, in chars
    pub max_length: usize,

    /// Length under which a paragraph counts as short
    pub short_paragraph_threshold: usize,

    /// How many paragraphs may be joined into the excerpt
    pub max_paragraphs: usize,

    /// Text used when nothing can be extracted
    pub placeholder: String,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            short_paragraph_threshold: SHORT_PARAGRAPH_THRESHOLD,
            max_paragraphs: MAX_PARAGRAPHS,
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

impl ExcerptOptions {
    /// Default options with a different length budget.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }

    /// The configured placeholder, or the default one when it is blank.
    fn placeholder_text(&self) -> String {
        let placeholder = if self.placeholder.trim().is_empty() {
            PLACEHOLDER
        } else {
            &self.placeholder
        };
        ellipsize(placeholder, self.max_length)
    }
}

/// Generate an excerpt of at most `max_length` chars from Markdown `content`.
///
/// # Examples
///
/// ```
/// use inkpost_core::excerpt::generate_excerpt;
///
/// assert_eq!(generate_excerpt("**Hello** world", 200), "Hello world");
/// assert_eq!(generate_excerpt("   ", 200), "no excerpt available");
/// ```
pub fn generate_excerpt(content: &str, max_length: usize) -> String {
    generate_excerpt_with(content, &ExcerptOptions::with_max_length(max_length))
}

/// Generate an excerpt using explicit [`ExcerptOptions`].
pub fn generate_excerpt_with(content: &str, options: &ExcerptOptions) -> String {
    if content.trim().is_empty() {
        return options.placeholder_text();
    }

    let plain = strip_markdown(content);
    let paragraphs = split_paragraphs(&plain);
    if paragraphs.is_empty() {
        tracing::debug!("no paragraphs left after stripping markup");
        return options.placeholder_text();
    }

    let paragraphs = merge_short_paragraphs(
        paragraphs,
        options.short_paragraph_threshold,
        options.max_length,
    );
    let excerpt = accumulate(&paragraphs, options.max_length, options.max_paragraphs);
    let excerpt = ellipsize(&excerpt, options.max_length);
    if !excerpt.trim().is_empty() {
        return excerpt;
    }

    tracing::debug!("excerpt empty after processing, falling back to raw text");
    fallback_excerpt(content, options.max_length).unwrap_or_else(|| options.placeholder_text())
}

/// Run the structural and inline rule tables, leaving plain text with
/// paragraphs separated by exactly one blank line.
pub fn strip_markdown(content: &str) -> String {
    let structural = apply_rules(&STRUCTURAL_RULES, content);
    apply_rules(&INLINE_RULES, &structural)
}
