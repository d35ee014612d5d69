//! Paragraph segmentation, merging, budgeted accumulation and truncation.
//!
//! All lengths are counted in `char`s.

use super::ELLIPSIS;

/// Characters removed from the raw input when every other step came up empty.
const FALLBACK_STRIP: &[char] = &['#', '*', '_', '`', '>', '|', '[', ']', '(', ')'];

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Split normalized text into trimmed, non-empty paragraphs.
///
/// Blank-line boundaries are tried first; single newlines only if that
/// produced nothing.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let paragraphs = split_trimmed(text, "\n\n");
    if !paragraphs.is_empty() {
        return paragraphs;
    }
    split_trimmed(text, "\n")
}

fn split_trimmed(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Greedily join runs of short paragraphs into space-separated chunks.
///
/// Only kicks in when there is more than one paragraph and every one of
/// them is shorter than `threshold`. Otherwise the input comes back as is.
pub fn merge_short_paragraphs(
    paragraphs: Vec<String>,
    threshold: usize,
    max_length: usize,
) -> Vec<String> {
    if paragraphs.len() <= 1 || !paragraphs.iter().all(|p| char_len(p) < threshold) {
        return paragraphs;
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for paragraph in paragraphs {
        let len = char_len(&paragraph);
        let joined = if current.is_empty() {
            len
        } else {
            current_len + 1 + len
        };

        if joined <= max_length {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&paragraph);
            current_len = joined;
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current = paragraph;
            current_len = len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    tracing::debug!("merged short paragraphs into {} chunk(s)", chunks.len());
    chunks
}

/// Join leading paragraphs while they fit in `max_length` and the
/// paragraph cap has not been reached.
///
/// The first paragraph is always taken, even when it alone is over
/// budget; [`ellipsize`] shortens it afterwards.
pub fn accumulate(paragraphs: &[String], max_length: usize, max_paragraphs: usize) -> String {
    let mut excerpt = String::new();
    let mut len = 0;

    for (count, paragraph) in paragraphs.iter().enumerate() {
        if count >= max_paragraphs {
            break;
        }

        let paragraph_len = char_len(paragraph);
        if count == 0 {
            excerpt.push_str(paragraph);
            len = paragraph_len;
            continue;
        }

        // The joining space is part of the budget.
        let joined = len + 1 + paragraph_len;
        if joined > max_length {
            break;
        }
        excerpt.push(' ');
        excerpt.push_str(paragraph);
        len = joined;
    }

    excerpt
}

/// Cut `text` to `max_length` chars, reserving the tail for `"..."`.
pub fn ellipsize(text: &str, max_length: usize) -> String {
    if char_len(text) <= max_length {
        return text.to_string();
    }

    let ellipsis_len = char_len(ELLIPSIS);
    if max_length <= ellipsis_len {
        return take_chars(ELLIPSIS, max_length);
    }

    let mut out = take_chars(text, max_length - ellipsis_len);
    out.push_str(ELLIPSIS);
    out
}

/// Last resort: drop Markdown punctuation from the untouched input.
///
/// Returns `None` when nothing but punctuation and whitespace remains.
pub fn fallback_excerpt(original: &str, max_length: usize) -> Option<String> {
    let raw: String = original
        .chars()
        .filter(|c| !FALLBACK_STRIP.contains(c))
        .collect();
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let keep = max_length.saturating_sub(char_len(ELLIPSIS));
    let mut out = take_chars(raw, keep);
    out.push_str(ELLIPSIS);
    Some(take_chars(&out, max_length))
}
