// SPDX-License-Identifier: MIT
//
// Structural transforms — whole-string operations.
//
// Reverse, mirror and upside-down all reorder the string, so they must work
// on extended grapheme clusters rather than chars or bytes. Reversing by
// char would peel a combining mark off its base and hang it on the wrong
// letter; reversing by byte would corrupt every multi-byte sequence.
//
//   "e\u{301}x"  by char     → "x\u{301}e"   (accent jumps to x)   ✗
//   "e\u{301}x"  by cluster  → "xe\u{301}"                         ✓
//
// Mirror and upside-down substitute the first scalar of each cluster
// through a fixed table, keep any trailing marks, then reverse. Characters
// with no table entry stay as they are, so word shapes survive even when a
// letter has no flipped counterpart.

use unicode_segmentation::UnicodeSegmentation;

use crate::table::GlyphTable;

/// A whole-string operation applied after character mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structural {
    /// Reverse cluster order.
    Reverse,
    /// Left-right mirror glyphs, then reverse.
    Mirror,
    /// Rotated (180°) glyphs, then reverse.
    UpsideDown,
}

impl Structural {
    /// Apply this operation to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Reverse => reverse(text),
            Self::Mirror => substitute_reversed(text, &MIRROR),
            Self::UpsideDown => substitute_reversed(text, &UPSIDE_DOWN),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::Mirror => "mirror",
            Self::UpsideDown => "upside-down",
        }
    }

    /// Parse an operation from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|op| op.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Reverse, Self::Mirror, Self::UpsideDown]
    }
}

/// Reverse `text` by extended grapheme cluster.
#[must_use]
pub fn reverse(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

fn substitute_reversed(text: &str, table: &GlyphTable) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for cluster in text.graphemes(true).rev() {
        let mut chars = cluster.chars();
        let Some(base) = chars.next() else { continue };
        match table.get(base) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(base),
        }
        out.push_str(chars.as_str());
    }
    out
}

// ─── Tables ──────────────────────────────────────────────────────────────────
//
// One canonical table per operation. Self-symmetric letters (o, x, H, ...)
// are omitted; they pass through as themselves.

pub static MIRROR: GlyphTable = GlyphTable::new(
    "mirror",
    &[
        ('a', "ɒ"), ('b', "d"), ('c', "ɔ"), ('d', "b"), ('e', "ɘ"), ('f', "ʇ"),
        ('g', "ϱ"), ('j', "į"), ('k', "ʞ"), ('p', "q"), ('q', "p"),
        ('r', "ɿ"), ('s', "ƨ"), ('t', "ƚ"), ('z', "ƹ"),
        ('B', "ᙠ"), ('C', "Ɔ"), ('D', "ᗡ"), ('E', "Ǝ"), ('F', "ꟻ"), ('G', "Ꭾ"),
        ('J', "Ⴑ"), ('K', "ꓘ"), ('L', "⅃"), ('N', "И"), ('P', "ꟼ"), ('Q', "Ọ"),
        ('R', "Я"), ('S', "Ƨ"), ('Z', "Ƹ"),
        ('2', "ς"), ('3', "Ɛ"), ('7', "Ⴈ"),
        ('(', ")"), (')', "("), ('[', "]"), (']', "["), ('{', "}"), ('}', "{"),
        ('<', ">"), ('>', "<"), ('/', "\\"), ('\\', "/"), ('?', "⸮"),
    ],
    false,
);

pub static UPSIDE_DOWN: GlyphTable = GlyphTable::new(
    "upside-down",
    &[
        ('a', "ɐ"), ('b', "q"), ('c', "ɔ"), ('d', "p"), ('e', "ǝ"), ('f', "ɟ"),
        ('g', "ƃ"), ('h', "ɥ"), ('i', "ᴉ"), ('j', "ɾ"), ('k', "ʞ"), ('m', "ɯ"),
        ('n', "u"), ('p', "d"), ('q', "b"), ('r', "ɹ"), ('t', "ʇ"), ('u', "n"),
        ('v', "ʌ"), ('w', "ʍ"), ('y', "ʎ"),
        ('A', "∀"), ('B', "ꓭ"), ('C', "Ɔ"), ('D', "ꓷ"), ('E', "Ǝ"), ('F', "Ⅎ"),
        ('G', "⅁"), ('J', "ſ"), ('K', "ꓘ"), ('L', "˥"), ('M', "W"), ('P', "Ԁ"),
        ('Q', "Ό"), ('R', "ꓤ"), ('T', "⊥"), ('U', "∩"), ('V', "Λ"), ('W', "M"),
        ('Y', "⅄"),
        ('1', "Ɩ"), ('2', "ᄅ"), ('3', "Ɛ"), ('4', "ㄣ"), ('5', "ϛ"), ('6', "9"),
        ('7', "ㄥ"), ('9', "6"),
        ('.', "˙"), (',', "'"), ('\'', ","), ('"', "„"), ('?', "¿"), ('!', "¡"),
        ('(', ")"), (')', "("), ('[', "]"), (']', "["), ('{', "}"), ('}', "{"),
        ('<', ">"), ('>', "<"), ('&', "⅋"), ('_', "‾"), (';', "؛"),
    ],
    false,
);

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reverse_ascii() {
        assert_eq!(Structural::Reverse.apply("Hello"), "olleH");
    }

    #[test]
    fn reverse_keeps_astral_code_points_whole() {
        let reversed = reverse("a𝐁c");
        assert_eq!(reversed, "c𝐁a");
        let scalars: Vec<char> = reversed.chars().collect();
        assert_eq!(scalars, vec!['c', '𝐁', 'a']);
    }

    #[test]
    fn reverse_keeps_mark_clusters_whole() {
        assert_eq!(reverse("e\u{0301}x"), "xe\u{0301}");
        assert_eq!(reverse("H\u{0336}i\u{0336}"), "i\u{0336}H\u{0336}");
    }

    #[test]
    fn reverse_keeps_emoji_sequences_whole() {
        // Family emoji joined by ZWJ is a single cluster.
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(reverse(&format!("a{family}b")), format!("b{family}a"));
    }

    #[test]
    fn reverse_twice_is_identity() {
        let text = "Zalgo t\u{0338}ext 🎉 日本";
        assert_eq!(reverse(&reverse(text)), text);
    }

    #[test]
    fn upside_down_substitutes_then_reverses() {
        assert_eq!(Structural::UpsideDown.apply("hello"), "ollǝɥ");
        assert_eq!(Structural::UpsideDown.apply("Hi!"), "¡ᴉH");
    }

    #[test]
    fn upside_down_unmapped_pass_through() {
        assert_eq!(Structural::UpsideDown.apply("x日"), "日x");
    }

    #[test]
    fn mirror_substitutes_then_reverses() {
        assert_eq!(Structural::Mirror.apply("bad"), "bɒd");
        assert_eq!(Structural::Mirror.apply("(R)"), "(Я)");
    }

    #[test]
    fn substitution_keeps_trailing_marks() {
        assert_eq!(Structural::UpsideDown.apply("a\u{0336}b"), "qɐ\u{0336}");
    }

    #[test]
    fn empty_input() {
        for op in Structural::all() {
            assert_eq!(op.apply(""), "");
        }
    }

    #[test]
    fn from_name_roundtrip() {
        for &op in Structural::all() {
            assert_eq!(Structural::from_name(op.name()), Some(op));
        }
        assert_eq!(Structural::from_name("Upside-Down"), Some(Structural::UpsideDown));
        assert_eq!(Structural::from_name("sideways"), None);
    }

    #[test]
    fn mirror_without_mirror_image_passes_through() {
        // No true left-right counterpart: left as is, only reordered.
        assert_eq!(Structural::Mirror.apply("hy4"), "4yh");
        assert_eq!(MIRROR.get('h'), None);
    }
}
