// SPDX-License-Identifier: MIT
//
// CharMap — the per-character substitution stage.
//
// A style maps characters in exactly one of three ways: not at all, by
// arithmetic into a Unicode alphabet, or through an explicit glyph table.
// CharMap is the tagged union over those. It is `Copy` (two words at most)
// and points at static data, so style definitions can hold one by value in
// a `static` registry.
//
// Total by construction: any character without a mapping is pushed through
// unchanged. Nothing here can fail.

use crate::alphabet::Alphabet;
use crate::table::GlyphTable;

/// How a style substitutes individual characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharMap {
    /// No substitution.
    #[default]
    Identity,
    /// Arithmetic offset into a Unicode alphabet.
    Alphabet(&'static Alphabet),
    /// Explicit lookup table.
    Table(&'static GlyphTable),
}

impl CharMap {
    /// Append the mapping of `ch` to `out`.
    #[inline]
    pub fn map_char(self, ch: char, out: &mut String) {
        match self {
            Self::Identity => out.push(ch),
            Self::Alphabet(alphabet) => out.push(alphabet.map(ch).unwrap_or(ch)),
            Self::Table(table) => match table.get(ch) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(ch),
            },
        }
    }

    /// Map every character of `text`.
    #[must_use]
    pub fn map_str(self, text: &str) -> String {
        if self.is_identity() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            self.map_char(ch, &mut out);
        }
        out
    }

    /// Whether `ch` has a substitute under this map.
    #[must_use]
    pub fn covers(self, ch: char) -> bool {
        match self {
            Self::Identity => false,
            Self::Alphabet(alphabet) => alphabet.map(ch).is_some(),
            Self::Table(table) => table.get(ch).is_some(),
        }
    }

    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Name of the underlying alphabet or table, `"identity"` otherwise.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Alphabet(alphabet) => alphabet.name(),
            Self::Table(table) => table.name(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, table};
    use pretty_assertions::assert_eq;

    #[test]
    fn identity_returns_input() {
        assert_eq!(CharMap::Identity.map_str("Hello, world"), "Hello, world");
        assert!(!CharMap::Identity.covers('a'));
    }

    #[test]
    fn alphabet_map_preserves_unmapped() {
        let map = CharMap::Alphabet(&alphabet::BOLD);
        assert_eq!(map.map_str("Hi, 2 you!"), "𝐇𝐢, 𝟐 𝐲𝐨𝐮!");
    }

    #[test]
    fn table_map_can_expand() {
        let map = CharMap::Table(&table::SMALL_CAPS);
        assert_eq!(map.map_str("Rust"), "ʀᴜꜱᴛ");
    }

    #[test]
    fn non_latin_input_untouched() {
        let map = CharMap::Alphabet(&alphabet::SCRIPT);
        assert_eq!(map.map_str("こんにちは 🎉"), "こんにちは 🎉");
    }

    #[test]
    fn covers_matches_map() {
        let map = CharMap::Alphabet(&alphabet::ITALIC);
        assert!(map.covers('h'));
        assert!(!map.covers('3'));
        assert_eq!(map.name(), "italic");
    }

    #[test]
    fn default_is_identity() {
        assert!(CharMap::default().is_identity());
    }
}
