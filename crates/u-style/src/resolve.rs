//! Category resolution — any string in, a style out.
//!
//! Callers hand us URL slugs (`/instagram/bold-text-generator`), free text
//! (`"Cursive Fonts"`), or garbage. Resolution never fails: each input walks
//! a fixed ladder and the first rung that matches wins.
//!
//! | Rung | Match                                   | Example input             |
//! |------|-----------------------------------------|---------------------------|
//! | 1    | exact canonical key                     | `bold-font-generator`     |
//! | 2    | stem, after suffix/platform stripping   | `instagram-bold-generator`|
//! | 3    | first synonym keyword contained in slug | `crossed-out-letters`     |
//! | 4    | generic decorative fallback             | `unknown-category-xyz`    |
//!
//! Input is normalized first: lowercased, every run of non-alphanumeric
//! characters collapsed to a single `-`, leading/trailing `-` trimmed.
//!
//! Resolution is idempotent: resolving a style's own key returns that style.

use tracing::{debug, trace};

use crate::definition::{StyleDefinition, strip_key_suffix};
use crate::platform::Platform;
use crate::registry;

/// Which rung of the ladder matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Stem,
    Keyword(&'static str),
    Fallback,
}

/// The outcome of resolving a raw slug or name.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub style: &'static StyleDefinition,
    pub matched: MatchKind,
}

/// Ordered keyword → key synonyms. More specific keywords come first, so
/// `bold-italic` is tried before `italic` and `bold`, and `superscript`
/// before `script`.
const SYNONYMS: &[(&str, &str)] = &[
    // Compound styles first.
    ("sans-bold-italic", "sans-bold-italic-font-generator"),
    ("sans-bold", "sans-bold-font-generator"),
    ("sans-italic", "sans-italic-font-generator"),
    ("bold-italic", "bold-italic-font-generator"),
    ("bolditalic", "bold-italic-font-generator"),
    ("bold-cursive", "bold-cursive-font-generator"),
    ("bold-script", "bold-cursive-font-generator"),
    ("bold-gothic", "bold-gothic-font-generator"),
    ("bold-fraktur", "bold-gothic-font-generator"),
    ("black-bubble", "black-bubble-font-generator"),
    ("black-circle", "black-bubble-font-generator"),
    ("black-square", "black-square-font-generator"),
    ("double-underline", "double-underline-text-generator"),
    ("double-struck", "double-struck-font-generator"),
    // Marks.
    ("strike", "strikethrough-text-generator"),
    ("crossed", "strikethrough-text-generator"),
    ("cross-out", "strikethrough-text-generator"),
    ("slash", "slash-text-generator"),
    ("underline", "underline-text-generator"),
    ("overline", "overline-text-generator"),
    ("wavy", "wavy-text-generator"),
    ("zalgo", "zalgo-text-generator"),
    ("glitch", "zalgo-text-generator"),
    ("creepy", "zalgo-text-generator"),
    ("cursed", "zalgo-text-generator"),
    ("chaos", "zalgo-text-generator"),
    // Structural.
    ("upside", "upside-down-text-generator"),
    ("flip", "upside-down-text-generator"),
    ("rotate", "upside-down-text-generator"),
    ("mirror", "mirror-text-generator"),
    ("reflect", "mirror-text-generator"),
    ("reverse", "reverse-text-generator"),
    ("backward", "reverse-text-generator"),
    // Tables. Before `script`, which they contain.
    ("superscript", "superscript-text-generator"),
    ("subscript", "subscript-text-generator"),
    ("tiny", "superscript-text-generator"),
    ("small-cap", "small-caps-font-generator"),
    ("smallcap", "small-caps-font-generator"),
    ("greek", "greek-font-generator"),
    ("russian", "russian-font-generator"),
    ("cyrillic", "russian-font-generator"),
    ("viking", "viking-font-generator"),
    ("rune", "viking-font-generator"),
    ("runic", "viking-font-generator"),
    ("norse", "viking-font-generator"),
    // Enclosed.
    ("bubble", "bubble-font-generator"),
    ("circle", "bubble-font-generator"),
    ("square", "square-font-generator"),
    ("parenthes", "parenthesized-font-generator"),
    // Alphabets.
    ("cursive", "cursive-font-generator"),
    ("script", "cursive-font-generator"),
    ("calligraphy", "cursive-font-generator"),
    ("handwriting", "cursive-font-generator"),
    ("gothic", "gothic-font-generator"),
    ("fraktur", "gothic-font-generator"),
    ("old-english", "gothic-font-generator"),
    ("blackletter", "gothic-font-generator"),
    ("medieval", "gothic-font-generator"),
    ("outline", "double-struck-font-generator"),
    ("blackboard", "double-struck-font-generator"),
    ("aesthetic", "aesthetic-font-generator"),
    ("vaporwave", "aesthetic-font-generator"),
    ("fullwidth", "aesthetic-font-generator"),
    ("wide", "aesthetic-font-generator"),
    ("monospace", "monospace-font-generator"),
    ("typewriter", "monospace-font-generator"),
    ("mono", "monospace-font-generator"),
    ("sans", "sans-serif-font-generator"),
    ("italic", "italic-font-generator"),
    ("bold", "bold-font-generator"),
    ("cute", "cute-font-generator"),
    ("kawaii", "cute-font-generator"),
];

/// Normalize a raw slug or name into hyphenated lowercase form.
///
/// ```
/// use u_style::resolve::normalize;
///
/// assert_eq!(normalize("  Bold Text_Generator!! "), "bold-text-generator");
/// assert_eq!(normalize("/instagram/cursive"), "instagram-cursive");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Strip generator suffixes and a leading platform segment.
fn stem_of(normalized: &str) -> &str {
    let without_platform = Platform::all()
        .iter()
        .find_map(|p| {
            normalized
                .strip_prefix(p.slug())
                .and_then(|rest| rest.strip_prefix('-'))
        })
        .unwrap_or(normalized);
    strip_key_suffix(without_platform)
}

/// Resolve any string to a style, reporting which rung matched.
#[must_use]
pub fn resolve_detailed(raw: &str) -> Resolution {
    let normalized = normalize(raw);

    if let Some(style) = registry::lookup(&normalized) {
        trace!(input = raw, key = style.key, "exact style match");
        return Resolution { style, matched: MatchKind::Exact };
    }

    let stem = stem_of(&normalized);
    if let Some(style) = registry::all().iter().find(|s| s.stem() == stem) {
        trace!(input = raw, key = style.key, "stem style match");
        return Resolution { style, matched: MatchKind::Stem };
    }

    for &(keyword, key) in SYNONYMS {
        if normalized.contains(keyword) {
            if let Some(style) = registry::lookup(key) {
                trace!(input = raw, keyword, key, "keyword style match");
                return Resolution { style, matched: MatchKind::Keyword(keyword) };
            }
        }
    }

    debug!(input = raw, fallback = registry::FALLBACK_KEY, "unresolved style, using fallback");
    Resolution { style: registry::fallback(), matched: MatchKind::Fallback }
}

/// Resolve any string to a style. Never fails.
#[must_use]
pub fn resolve(raw: &str) -> &'static StyleDefinition {
    resolve_detailed(raw).style
}

/// Resolve any string to a canonical style key. Never fails.
#[must_use]
pub fn resolve_style(raw: &str) -> &'static str {
    resolve(raw).key
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize("Bold   Font__Generator"), "bold-font-generator");
        assert_eq!(normalize("--upside--down--"), "upside-down");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn exact_key() {
        let r = resolve_detailed("bold-font-generator");
        assert_eq!(r.style.key, "bold-font-generator");
        assert_eq!(r.matched, MatchKind::Exact);
    }

    #[test]
    fn exact_key_after_normalization() {
        assert_eq!(resolve_style("Bold Font Generator"), "bold-font-generator");
    }

    #[test]
    fn suffix_stripped_stem() {
        let r = resolve_detailed("bold-text-generator");
        assert_eq!(r.style.key, "bold-font-generator");
        assert_eq!(r.matched, MatchKind::Stem);
        assert_eq!(resolve_style("zalgo"), "zalgo-text-generator");
        assert_eq!(resolve_style("upside-down-generator"), "upside-down-text-generator");
    }

    #[test]
    fn platform_prefix_stripped() {
        let r = resolve_detailed("instagram-cursive-font-generator");
        assert_eq!(r.style.key, "cursive-font-generator");
        assert_eq!(r.matched, MatchKind::Stem);
        assert_eq!(resolve_style("/discord/bubble"), "bubble-font-generator");
    }

    #[test]
    fn keyword_synonyms() {
        assert_eq!(resolve_style("strike"), "strikethrough-text-generator");
        assert_eq!(resolve_style("upside"), "upside-down-text-generator");
        assert_eq!(resolve_style("Creepy Glitch Letters"), "zalgo-text-generator");
        assert_eq!(resolve_style("old english font"), "gothic-font-generator");
        assert_eq!(resolve_style("crossed out"), "strikethrough-text-generator");
    }

    #[test]
    fn specific_keywords_beat_general() {
        assert_eq!(resolve_style("my bold italic letters"), "bold-italic-font-generator");
        assert_eq!(resolve_style("superscript maker"), "superscript-text-generator");
        assert_eq!(resolve_style("fancy script letters"), "cursive-font-generator");
        assert_eq!(resolve_style("double underline please"), "double-underline-text-generator");
        assert_eq!(resolve_style("black bubble letters"), "black-bubble-font-generator");
    }

    #[test]
    fn unknown_falls_back() {
        let r = resolve_detailed("unknown-category-xyz");
        assert_eq!(r.style.key, registry::FALLBACK_KEY);
        assert_eq!(r.matched, MatchKind::Fallback);
        assert_eq!(resolve_style(""), registry::FALLBACK_KEY);
        assert_eq!(resolve_style("🙂🙂"), registry::FALLBACK_KEY);
    }

    #[test]
    fn resolution_is_idempotent() {
        let inputs = [
            "bold", "Strike", "unknown-category-xyz", "", "instagram bubble",
            "bold-text-generator", "mirror mirror", "tiny",
        ];
        for input in inputs {
            let first = resolve(input);
            let second = resolve(first.key);
            assert_eq!(first, second, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn every_key_resolves_to_itself() {
        for style in registry::all() {
            let r = resolve_detailed(style.key);
            assert_eq!(r.style.key, style.key);
            assert_eq!(r.matched, MatchKind::Exact);
        }
    }

    #[test]
    fn every_stem_resolves_to_its_style() {
        for style in registry::all() {
            assert_eq!(resolve_style(style.stem()), style.key);
        }
    }

    #[test]
    fn every_synonym_targets_a_real_style() {
        for (keyword, key) in SYNONYMS {
            assert!(registry::lookup(key).is_some(), "{keyword} → missing {key}");
            assert_eq!(normalize(keyword), *keyword, "keyword {keyword} not normalized");
        }
    }
}
