//! Style definitions — the static description of one "font style".
//!
//! A [`StyleDefinition`] bundles everything needed to render text in a style:
//! a character map, optional combining marks, an optional whole-string
//! operation, and an ornament pool for decoration. Definitions are immutable
//! and live in the static [`registry`](crate::registry).
//!
//! The transform pipeline is fixed:
//!
//! ```text
//! text ──► CharMap ──► MarkSpec ──► Structural ──► (ornaments, in u-variant)
//! ```
//!
//! A definition with none of the three stages is the identity transform. That
//! is a supported style (the generic decorative fallback), not an error.

use serde::Serialize;

use u_glyph::marks::apply_marks;
use u_glyph::{CharMap, Entropy, MarkSpec, Structural};

use crate::ornament::{self, OrnamentPool};

/// Suffixes stripped from a key to form its stem, longest first.
pub const KEY_SUFFIXES: [&str; 3] = ["-font-generator", "-text-generator", "-generator"];

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse grouping tag. Descriptive only; never drives transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Decorative,
    Bold,
    Script,
    Gothic,
    Enclosed,
    Lookalike,
    Playful,
    Chaotic,
    Lined,
    Reflected,
    Inverted,
    Expressive,
    Technical,
}

impl Category {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decorative => "decorative",
            Self::Bold => "bold",
            Self::Script => "script",
            Self::Gothic => "gothic",
            Self::Enclosed => "enclosed",
            Self::Lookalike => "lookalike",
            Self::Playful => "playful",
            Self::Chaotic => "chaotic",
            Self::Lined => "lined",
            Self::Reflected => "reflected",
            Self::Inverted => "inverted",
            Self::Expressive => "expressive",
            Self::Technical => "technical",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Decorative, Self::Bold, Self::Script, Self::Gothic,
            Self::Enclosed, Self::Lookalike, Self::Playful, Self::Chaotic,
            Self::Lined, Self::Reflected, Self::Inverted, Self::Expressive,
            Self::Technical,
        ]
    }
}

// ---------------------------------------------------------------------------
// StyleDefinition
// ---------------------------------------------------------------------------

/// One built-in style.
#[derive(Debug)]
pub struct StyleDefinition {
    /// Canonical slug, e.g. `"bold-font-generator"`.
    pub key: &'static str,
    /// Human label, e.g. `"Bold"`.
    pub display_name: &'static str,
    pub category: Category,
    pub char_map: CharMap,
    pub marks: Option<MarkSpec>,
    pub structural: Option<Structural>,
    pub ornaments: &'static OrnamentPool,
    /// Shown in place of empty input so the caller always has something to render.
    pub demo_text: &'static str,
}

impl StyleDefinition {
    /// Apply map → marks → structural to `text`.
    ///
    /// `variant_index` only matters for styles whose marks vary per variant
    /// (zalgo intensity). `entropy` is consulted only by randomized styles.
    pub fn transform<E: Entropy + ?Sized>(
        &self,
        text: &str,
        variant_index: usize,
        entropy: &mut E,
    ) -> String {
        let mapped = self.char_map.map_str(text);
        let marked = self.apply_marks(&mapped, variant_index, entropy);
        match self.structural {
            Some(op) => op.apply(&marked),
            None => marked,
        }
    }

    /// Map one character. Unmapped characters come back unchanged.
    #[must_use]
    pub fn map_char(&self, ch: char) -> String {
        let mut out = String::new();
        self.char_map.map_char(ch, &mut out);
        out
    }

    /// Append this style's combining marks, if any, after every cluster.
    pub fn apply_marks<E: Entropy + ?Sized>(
        &self,
        text: &str,
        variant_index: usize,
        entropy: &mut E,
    ) -> String {
        match self.marks {
            Some(spec) => apply_marks(text, spec, variant_index, entropy),
            None => text.to_string(),
        }
    }

    /// Wrap already-transformed text in this style's ornaments.
    #[must_use]
    pub fn decorate(&self, text: &str, variant_index: usize) -> String {
        ornament::decorate(text, self.ornaments, variant_index)
    }

    /// The key without its generator suffix: `"bold-font-generator"` → `"bold"`.
    #[must_use]
    pub fn stem(&self) -> &'static str {
        strip_key_suffix(self.key)
    }

    /// No map, no marks, no structural op.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.char_map.is_identity() && self.marks.is_none() && self.structural.is_none()
    }

    /// Whether output depends on entropy (so repeated calls may differ).
    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        match self.marks {
            Some(spec) => spec.is_randomized(),
            None => false,
        }
    }
}

impl PartialEq for StyleDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for StyleDefinition {}

/// Strip the first matching generator suffix from `slug`.
#[must_use]
pub fn strip_key_suffix(slug: &str) -> &str {
    KEY_SUFFIXES
        .iter()
        .find_map(|suffix| slug.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(slug)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
