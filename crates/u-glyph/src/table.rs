// SPDX-License-Identifier: MIT
//
// Glyph tables — explicit lookups for alphabets Unicode never encoded.
//
// Small caps, superscripts and the look-alike styles (Greek, Cyrillic,
// Runic) borrow glyphs from all over the code space: IPA Extensions,
// Phonetic Extensions, Cyrillic, Runic, Letterlike Symbols. There is no
// arithmetic relationship between them, so each style is a flat table of
// `(source, replacement)` pairs. Replacements are `&str` rather than `char`
// so a table may expand one letter into a short sequence.
//
// Tables are at most a few dozen entries. A linear scan over a static
// slice beats a hash map at this size and keeps the tables `const`.

/// A static character → glyph lookup table.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphTable {
    name: &'static str,
    entries: &'static [(char, &'static str)],
    /// Fold ASCII uppercase onto the lowercase entries before lookup.
    fold_case: bool,
}

impl GlyphTable {
    #[must_use]
    pub const fn new(
        name: &'static str,
        entries: &'static [(char, &'static str)],
        fold_case: bool,
    ) -> Self {
        Self { name, entries, fold_case }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the replacement for `ch`, or `None` to pass it through.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&'static str> {
        let key = if self.fold_case { ch.to_ascii_lowercase() } else { ch };
        self.entries
            .iter()
            .find(|(from, _)| *from == key)
            .map(|&(_, glyph)| glyph)
    }

    /// Number of entries (before case folding).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Letter styles ───────────────────────────────────────────────────────────

pub static SMALL_CAPS: GlyphTable = GlyphTable::new(
    "small-caps",
    &[
        ('a', "ᴀ"), ('b', "ʙ"), ('c', "ᴄ"), ('d', "ᴅ"), ('e', "ᴇ"), ('f', "ꜰ"),
        ('g', "ɢ"), ('h', "ʜ"), ('i', "ɪ"), ('j', "ᴊ"), ('k', "ᴋ"), ('l', "ʟ"),
        ('m', "ᴍ"), ('n', "ɴ"), ('o', "ᴏ"), ('p', "ᴘ"), ('q', "ǫ"), ('r', "ʀ"),
        ('s', "ꜱ"), ('t', "ᴛ"), ('u', "ᴜ"), ('v', "ᴠ"), ('w', "ᴡ"), ('y', "ʏ"),
        ('z', "ᴢ"),
    ],
    true,
);

pub static SUPERSCRIPT: GlyphTable = GlyphTable::new(
    "superscript",
    &[
        ('a', "ᵃ"), ('b', "ᵇ"), ('c', "ᶜ"), ('d', "ᵈ"), ('e', "ᵉ"), ('f', "ᶠ"),
        ('g', "ᵍ"), ('h', "ʰ"), ('i', "ⁱ"), ('j', "ʲ"), ('k', "ᵏ"), ('l', "ˡ"),
        ('m', "ᵐ"), ('n', "ⁿ"), ('o', "ᵒ"), ('p', "ᵖ"), ('q', "ᑫ"), ('r', "ʳ"),
        ('s', "ˢ"), ('t', "ᵗ"), ('u', "ᵘ"), ('v', "ᵛ"), ('w', "ʷ"), ('x', "ˣ"),
        ('y', "ʸ"), ('z', "ᶻ"),
        ('A', "ᴬ"), ('B', "ᴮ"), ('D', "ᴰ"), ('E', "ᴱ"), ('G', "ᴳ"), ('H', "ᴴ"),
        ('I', "ᴵ"), ('J', "ᴶ"), ('K', "ᴷ"), ('L', "ᴸ"), ('M', "ᴹ"), ('N', "ᴺ"),
        ('O', "ᴼ"), ('P', "ᴾ"), ('R', "ᴿ"), ('T', "ᵀ"), ('U', "ᵁ"), ('V', "ⱽ"),
        ('W', "ᵂ"),
        ('0', "⁰"), ('1', "¹"), ('2', "²"), ('3', "³"), ('4', "⁴"), ('5', "⁵"),
        ('6', "⁶"), ('7', "⁷"), ('8', "⁸"), ('9', "⁹"),
        ('+', "⁺"), ('-', "⁻"), ('=', "⁼"), ('(', "⁽"), (')', "⁾"),
    ],
    false,
);

/// Subscript letters exist for only part of the alphabet; the rest pass through.
pub static SUBSCRIPT: GlyphTable = GlyphTable::new(
    "subscript",
    &[
        ('a', "ₐ"), ('e', "ₑ"), ('h', "ₕ"), ('i', "ᵢ"), ('j', "ⱼ"), ('k', "ₖ"),
        ('l', "ₗ"), ('m', "ₘ"), ('n', "ₙ"), ('o', "ₒ"), ('p', "ₚ"), ('r', "ᵣ"),
        ('s', "ₛ"), ('t', "ₜ"), ('u', "ᵤ"), ('v', "ᵥ"), ('x', "ₓ"),
        ('0', "₀"), ('1', "₁"), ('2', "₂"), ('3', "₃"), ('4', "₄"), ('5', "₅"),
        ('6', "₆"), ('7', "₇"), ('8', "₈"), ('9', "₉"),
        ('+', "₊"), ('-', "₋"), ('=', "₌"), ('(', "₍"), (')', "₎"),
    ],
    true,
);

// ─── Look-alike scripts ──────────────────────────────────────────────────────

pub static GREEK: GlyphTable = GlyphTable::new(
    "greek",
    &[
        ('a', "α"), ('b', "β"), ('c', "ς"), ('d', "δ"), ('e', "ε"), ('f', "ϝ"),
        ('g', "ϑ"), ('i', "ι"), ('j', "ϳ"), ('k', "κ"), ('l', "λ"),
        ('m', "μ"), ('n', "η"), ('o', "σ"), ('p', "ρ"), ('q', "φ"),
        ('s', "ϛ"), ('t', "τ"), ('u', "υ"), ('v', "ν"), ('w', "ω"), ('x', "χ"),
        ('y', "ψ"), ('z', "ζ"),
    ],
    true,
);

pub static CYRILLIC: GlyphTable = GlyphTable::new(
    "cyrillic",
    &[
        ('A', "Д"), ('B', "Б"), ('C', "Ҁ"), ('D', "ↁ"), ('E', "Є"), ('F', "Ғ"),
        ('G', "Ǥ"), ('H', "Н"), ('I', "Ї"), ('J', "Ј"), ('K', "Ќ"), ('L', "Ł"),
        ('M', "М"), ('N', "И"), ('O', "Ф"), ('P', "Р"), ('Q', "Ԛ"), ('R', "Я"),
        ('S', "Ѕ"), ('T', "Г"), ('U', "Ц"), ('V', "Ѵ"), ('W', "Щ"), ('X', "Ж"),
        ('Y', "Ч"), ('Z', "З"),
        ('a', "д"), ('b', "б"), ('c', "ҁ"), ('d', "ԁ"), ('e', "є"), ('f', "ғ"),
        ('g', "ǥ"), ('h', "н"), ('i', "ї"), ('j', "ј"), ('k', "ќ"), ('l', "ł"),
        ('m', "м"), ('n', "и"), ('o', "ф"), ('p', "р"), ('q', "ԛ"), ('r', "я"),
        ('s', "ѕ"), ('t', "г"), ('u', "ц"), ('v', "ѵ"), ('w', "щ"), ('x', "ж"),
        ('y', "ч"), ('z', "з"),
    ],
    false,
);

pub static RUNIC: GlyphTable = GlyphTable::new(
    "runic",
    &[
        ('a', "ᚨ"), ('b', "ᛒ"), ('c', "ᚲ"), ('d', "ᛞ"), ('e', "ᛖ"), ('f', "ᚠ"),
        ('g', "ᚷ"), ('h', "ᚺ"), ('i', "ᛁ"), ('j', "ᛃ"), ('k', "ᛕ"), ('l', "ᛚ"),
        ('m', "ᛗ"), ('n', "ᚾ"), ('o', "ᛟ"), ('p', "ᛈ"), ('q', "ᛩ"), ('r', "ᚱ"),
        ('s', "ᛊ"), ('t', "ᛏ"), ('u', "ᚢ"), ('v', "ᚡ"), ('w', "ᚹ"), ('x', "ᛪ"),
        ('y', "ᚤ"), ('z', "ᛉ"),
    ],
    true,
);

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn map_all(table: &GlyphTable, text: &str) -> String {
        text.chars()
            .map(|ch| table.get(ch).map_or_else(|| ch.to_string(), str::to_string))
            .collect()
    }

    #[test]
    fn small_caps_folds_uppercase() {
        assert_eq!(map_all(&SMALL_CAPS, "Hello"), "ʜᴇʟʟᴏ");
        assert_eq!(SMALL_CAPS.get('H'), SMALL_CAPS.get('h'));
    }

    #[test]
    fn small_caps_x_passes_through() {
        assert_eq!(SMALL_CAPS.get('x'), None);
        assert_eq!(map_all(&SMALL_CAPS, "box"), "ʙᴏx");
    }

    #[test]
    fn superscript_is_case_sensitive() {
        assert_eq!(SUPERSCRIPT.get('a'), Some("ᵃ"));
        assert_eq!(SUPERSCRIPT.get('A'), Some("ᴬ"));
        // No superscript capital C exists.
        assert_eq!(SUPERSCRIPT.get('C'), None);
    }

    #[test]
    fn subscript_partial_alphabet() {
        assert_eq!(map_all(&SUBSCRIPT, "H2O"), "ₕ₂ₒ");
        assert_eq!(SUBSCRIPT.get('b'), None);
    }

    #[test]
    fn cyrillic_keeps_case_distinct() {
        assert_eq!(CYRILLIC.get('R'), Some("Я"));
        assert_eq!(CYRILLIC.get('r'), Some("я"));
    }

    #[test]
    fn runic_covers_alphabet() {
        for ch in 'a'..='z' {
            assert!(RUNIC.get(ch).is_some(), "runic missing {ch}");
        }
        assert_eq!(RUNIC.len(), 26);
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(GREEK.get('é'), None);
        assert_eq!(GREEK.get('日'), None);
        assert!(!GREEK.is_empty());
    }

    #[test]
    fn greek_targets_are_greek() {
        for &(_, glyph) in GREEK.entries {
            for ch in glyph.chars() {
                let cp = ch as u32;
                assert!((0x0370..=0x03FF).contains(&cp), "{ch} is outside the Greek block");
            }
        }
        assert_eq!(GREEK.get('h'), None);
        assert_eq!(GREEK.get('r'), None);
    }

    #[test]
    fn no_duplicate_sources() {
        for table in [&SMALL_CAPS, &SUPERSCRIPT, &SUBSCRIPT, &GREEK, &CYRILLIC, &RUNIC] {
            let sources: Vec<char> = table.entries.iter().map(|(c, _)| *c).collect();
            for (i, ch) in sources.iter().enumerate() {
                assert!(!sources[i + 1..].contains(ch), "{} repeats {ch:?}", table.name());
            }
        }
    }
}
