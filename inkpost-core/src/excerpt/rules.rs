//! Ordered regex substitution tables used to flatten Markdown into plain text.
//!
//! Rules run top to bottom. Order matters: fenced code must be replaced
//! before inline code is unwrapped, and images must be removed before the
//! link rule sees their `[alt](url)` tail.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// A single named regex substitution.
pub struct Rule {
    pub name: &'static str,
    pattern: &'static str,
    replacement: &'static str,
    regex: OnceLock<Regex>,
}

impl Rule {
    pub const fn new(name: &'static str, pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
            regex: OnceLock::new(),
        }
    }

    /// Compiled pattern, built on first use.
    pub fn regex(&self) -> &Regex {
        self.regex.get_or_init(|| Regex::new(self.pattern).unwrap())
    }

    /// Replace every match of this rule in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex().replace_all(text, self.replacement)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("replacement", &self.replacement)
            .finish()
    }
}

/// Block-level rewrites that would otherwise disturb paragraph splitting.
pub static STRUCTURAL_RULES: [Rule; 4] = [
    Rule::new("line_endings", r"\r\n", "\n"),
    Rule::new("code_fence", r"(?s)```.*?```", "[code block]"),
    // Header row, separator row, then everything up to the next blank line.
    Rule::new(
        "table",
        r"\|.*\|[\s\S]*?\n\|[-:|\s]*\|[\s\S]*?(?:\n\n|\n$|$)",
        "[table] ",
    ),
    Rule::new("horizontal_rule", r"(?m)^[ \t]*[-*_]{3,}[ \t]*$", ""),
];

/// Inline formatting and line markers, applied after [`STRUCTURAL_RULES`].
pub static INLINE_RULES: [Rule; 13] = [
    Rule::new("heading", r"(?m)^[ \t]*#{1,6}[ \t]+", ""),
    Rule::new("bold_asterisk", r"\*\*(.*?)\*\*", "${1}"),
    Rule::new("bold_underscore", r"__(.*?)__", "${1}"),
    Rule::new("italic_asterisk", r"\*(.*?)\*", "${1}"),
    Rule::new("italic_underscore", r"_(.*?)_", "${1}"),
    Rule::new("strikethrough", r"~~(.*?)~~", "${1}"),
    Rule::new("inline_code", r"`([^`]+)`", "${1}"),
    Rule::new("image", r"!\[[^\]]*\]\([^)]+\)", ""),
    Rule::new("link", r"\[([^\]]+)\]\([^)]+\)", "${1}"),
    Rule::new("blockquote", r"(?m)^[ \t]*>[ \t]*", ""),
    Rule::new("unordered_list", r"(?m)^[ \t]*[-*+][ \t]+", ""),
    Rule::new("ordered_list", r"(?m)^[ \t]*\d+\.[ \t]+", ""),
    Rule::new("blank_lines", r"\n\s*\n", "\n\n"),
];

/// Fold `rules` over `text` in order.
pub fn apply_rules(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}
