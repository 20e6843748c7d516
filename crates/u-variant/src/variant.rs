//! Variant — one rendered output, plus the request that asks for them.
//!
//! Variants are plain serializable values. The field names serialize in
//! camelCase (`renderedText`, `previewText`) to match the JSON shape the web
//! front-end consumes.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One styled rendering of the caller's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Sequential, 1-based, unique within one response.
    pub id: usize,
    /// `"{DisplayName} Style {id}"`.
    pub name: String,
    /// The final copy-pasteable string.
    pub rendered_text: String,
    /// `rendered_text` cut to the preview width for grid display.
    pub preview_text: String,
}

/// A request for `requested_count` variants of `base_text` in a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRequest {
    /// Style key, slug or free-text category; resolved before generation.
    pub style: String,
    pub base_text: String,
    pub requested_count: usize,
}

impl VariantRequest {
    #[must_use]
    pub fn new(style: impl Into<String>, base_text: impl Into<String>, requested_count: usize) -> Self {
        Self {
            style: style.into(),
            base_text: base_text.into(),
            requested_count,
        }
    }
}

/// Variant name for a style display name and 1-based sequence number.
#[must_use]
pub fn variant_name(display_name: &str, id: usize) -> String {
    format!("{display_name} Style {id}")
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when cut.
///
/// Works by grapheme cluster, so combining-mark runs and emoji sequences are
/// either kept whole or dropped whole. Combining marks occupy zero columns.
#[must_use]
pub fn preview(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for cluster in text.graphemes(true) {
        let w = cluster.width();
        if used + w > budget {
            break;
        }
        out.push_str(cluster);
        used += w;
    }
    out.push('…');
    out
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_text_untouched() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn long_text_truncated_with_ellipsis() {
        assert_eq!(preview("hello world", 6), "hello…");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each fullwidth letter is two columns.
        assert_eq!(preview("ＡＢＣＤ", 5), "ＡＢ…");
    }

    #[test]
    fn combining_marks_stay_with_their_base() {
        let struck = "a\u{0336}b\u{0336}c\u{0336}d\u{0336}";
        assert_eq!(preview(struck, 3), "a\u{0336}b\u{0336}…");
        // Marks are zero-width, so four struck letters fit in four columns.
        assert_eq!(preview(struck, 4), struck);
    }

    #[test]
    fn zero_width_budget() {
        assert_eq!(preview("hello", 0), "…");
    }

    #[test]
    fn names_are_sequential() {
        assert_eq!(variant_name("Bold", 3), "Bold Style 3");
    }

    #[test]
    fn serializes_camel_case() {
        let v = Variant {
            id: 1,
            name: "Bold Style 1".into(),
            rendered_text: "𝐇𝐢".into(),
            preview_text: "𝐇𝐢".into(),
        };
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"renderedText\""));
        assert!(json.contains("\"previewText\""));
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn request_new() {
        let r = VariantRequest::new("bold", "Hi", 5);
        assert_eq!(r.style, "bold");
        assert_eq!(r.requested_count, 5);
    }
}
