//! Text normalisation for raw quick-notes blobs.
//!
//! Questionnaire exports arrive as a single HTML-ish string: answers joined
//! with break tags, the odd wrapper element, and a handful of named entities.
//! This module reduces that blob to clean, line-oriented text. The markup
//! handling is a regex-level strip, not a DOM parse; the export format is
//! narrow and non-adversarial, and malformed markup degrades to best-effort
//! text rather than failing.

use once_cell::sync::Lazy;
use regex::Regex;

static BREAK_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid break-tag regex"));
static MARKUP_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup-tag regex"));

/// The entities the export is known to emit. Anything else stays literal.
/// Order matters: `&amp;` decodes first, so double-encoded entities collapse.
const ENTITIES: [(&str, &str); 13] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&rsquo;", "'"),
    ("&lsquo;", "'"),
    ("&rdquo;", "\""),
    ("&ldquo;", "\""),
    ("&nbsp;", " "),
    ("&hellip;", "..."),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
];

/// Normalises a raw quick-notes blob into trimmed, non-empty lines.
///
/// Processing order:
/// 1. every break-tag variant (self-closing or not, any case) becomes a
///    newline;
/// 2. all remaining angle-bracket tags are stripped;
/// 3. the fixed entity set above is decoded;
/// 4. the text is split on newlines, each line trimmed, empties dropped.
///
/// An empty input yields an empty vector. There is no error path.
pub fn normalize(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let text = BREAK_TAG_RE.replace_all(raw, "\n");
    let text = MARKUP_TAG_RE.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, plain) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, plain);
        }
    }

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
