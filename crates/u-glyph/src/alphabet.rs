// SPDX-License-Identifier: MIT
//
// Alphabet — arithmetic-offset mapping into Unicode letterlike blocks.
//
// Most "font" styles are not fonts at all. Unicode carries whole alphabets
// of styled letters in the Mathematical Alphanumeric Symbols block
// (U+1D400–U+1D7FF), the Enclosed Alphanumerics blocks, and the Halfwidth
// and Fullwidth Forms. Inside each alphabet the letters are laid out in
// ASCII order, so a styled letter is just `base + (ch - 'A')`.
//
// The catch is that several math alphabets have holes. Letters such as
// script B or Fraktur C were encoded years earlier in Letterlike Symbols
// (U+2100–U+214F), and the math block leaves their slots reserved. Pure
// arithmetic lands on an unassigned code point for those, so every
// alphabet carries an exception list that is consulted before the runs.
//
//   source char ──► exception hit? ──yes──► exception glyph
//                         │ no
//                         ▼
//                  inside a run? ──yes──► run.base + (ch - run.first)
//                         │ no
//                         ▼
//                     pass-through

// ─── Run ─────────────────────────────────────────────────────────────────────

/// A contiguous range of source characters mapped onto a target block.
///
/// `first..first + len` maps to `base..base + len`, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    first: char,
    len: u8,
    base: u32,
}

impl Run {
    /// Create a run starting at `first`, covering `len` characters.
    #[must_use]
    pub const fn new(first: char, len: u8, base: u32) -> Self {
        Self { first, len, base }
    }

    /// Map `ch` if it falls inside this run.
    ///
    /// Returns `None` when `ch` is outside the run, or when the arithmetic
    /// result is not a valid scalar value.
    #[inline]
    fn map(self, ch: char) -> Option<char> {
        let offset = (ch as u32).checked_sub(self.first as u32)?;
        if offset >= u32::from(self.len) {
            return None;
        }
        char::from_u32(self.base + offset)
    }
}

// ─── Alphabet ────────────────────────────────────────────────────────────────

/// An arithmetic-offset alphabet: runs plus explicit exceptions.
#[derive(Debug, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    runs: &'static [Run],
    exceptions: &'static [(char, char)],
}

impl Alphabet {
    #[must_use]
    pub const fn new(
        name: &'static str,
        runs: &'static [Run],
        exceptions: &'static [(char, char)],
    ) -> Self {
        Self { name, runs, exceptions }
    }

    /// Short identifier, e.g. `"bold"` or `"script"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Map a character, or `None` if this alphabet has no glyph for it.
    #[must_use]
    pub fn map(&self, ch: char) -> Option<char> {
        if let Some(&(_, glyph)) = self.exceptions.iter().find(|(from, _)| *from == ch) {
            return Some(glyph);
        }
        self.runs.iter().find_map(|run| run.map(ch))
    }
}

// ─── Mathematical Alphanumeric Symbols ───────────────────────────────────────

pub static BOLD: Alphabet = Alphabet::new(
    "bold",
    &[
        Run::new('A', 26, 0x1D400),
        Run::new('a', 26, 0x1D41A),
        Run::new('0', 10, 0x1D7CE),
    ],
    &[],
);

pub static ITALIC: Alphabet = Alphabet::new(
    "italic",
    &[Run::new('A', 26, 0x1D434), Run::new('a', 26, 0x1D44E)],
    &[('h', 'ℎ')],
);

pub static BOLD_ITALIC: Alphabet = Alphabet::new(
    "bold-italic",
    &[Run::new('A', 26, 0x1D468), Run::new('a', 26, 0x1D482)],
    &[],
);

pub static SCRIPT: Alphabet = Alphabet::new(
    "script",
    &[Run::new('A', 26, 0x1D49C), Run::new('a', 26, 0x1D4B6)],
    &[
        ('B', 'ℬ'),
        ('E', 'ℰ'),
        ('F', 'ℱ'),
        ('H', 'ℋ'),
        ('I', 'ℐ'),
        ('L', 'ℒ'),
        ('M', 'ℳ'),
        ('R', 'ℛ'),
        ('e', 'ℯ'),
        ('g', 'ℊ'),
        ('o', 'ℴ'),
    ],
);

pub static BOLD_SCRIPT: Alphabet = Alphabet::new(
    "bold-script",
    &[Run::new('A', 26, 0x1D4D0), Run::new('a', 26, 0x1D4EA)],
    &[],
);

pub static FRAKTUR: Alphabet = Alphabet::new(
    "fraktur",
    &[Run::new('A', 26, 0x1D504), Run::new('a', 26, 0x1D51E)],
    &[('C', 'ℭ'), ('H', 'ℌ'), ('I', 'ℑ'), ('R', 'ℜ'), ('Z', 'ℨ')],
);

pub static BOLD_FRAKTUR: Alphabet = Alphabet::new(
    "bold-fraktur",
    &[Run::new('A', 26, 0x1D56C), Run::new('a', 26, 0x1D586)],
    &[],
);

pub static DOUBLE_STRUCK: Alphabet = Alphabet::new(
    "double-struck",
    &[
        Run::new('A', 26, 0x1D538),
        Run::new('a', 26, 0x1D552),
        Run::new('0', 10, 0x1D7D8),
    ],
    &[
        ('C', 'ℂ'),
        ('H', 'ℍ'),
        ('N', 'ℕ'),
        ('P', 'ℙ'),
        ('Q', 'ℚ'),
        ('R', 'ℝ'),
        ('Z', 'ℤ'),
    ],
);

pub static SANS: Alphabet = Alphabet::new(
    "sans",
    &[
        Run::new('A', 26, 0x1D5A0),
        Run::new('a', 26, 0x1D5BA),
        Run::new('0', 10, 0x1D7E2),
    ],
    &[],
);

pub static SANS_BOLD: Alphabet = Alphabet::new(
    "sans-bold",
    &[
        Run::new('A', 26, 0x1D5D4),
        Run::new('a', 26, 0x1D5EE),
        Run::new('0', 10, 0x1D7EC),
    ],
    &[],
);

pub static SANS_ITALIC: Alphabet = Alphabet::new(
    "sans-italic",
    &[Run::new('A', 26, 0x1D608), Run::new('a', 26, 0x1D622)],
    &[],
);

pub static SANS_BOLD_ITALIC: Alphabet = Alphabet::new(
    "sans-bold-italic",
    &[Run::new('A', 26, 0x1D63C), Run::new('a', 26, 0x1D656)],
    &[],
);

pub static MONOSPACE: Alphabet = Alphabet::new(
    "monospace",
    &[
        Run::new('A', 26, 0x1D670),
        Run::new('a', 26, 0x1D68A),
        Run::new('0', 10, 0x1D7F6),
    ],
    &[],
);

// ─── Fullwidth Forms ─────────────────────────────────────────────────────────

/// Every printable ASCII character has a fullwidth twin at U+FF01..U+FF5E.
pub static FULLWIDTH: Alphabet = Alphabet::new(
    "fullwidth",
    &[Run::new('!', 94, 0xFF01)],
    &[(' ', '\u{3000}')],
);

// ─── Enclosed Alphanumerics ──────────────────────────────────────────────────
//
// The enclosed digit rows start at one, not zero. Zero lives elsewhere and
// comes in through the exception list (or not at all, for parenthesized).

pub static CIRCLED: Alphabet = Alphabet::new(
    "circled",
    &[
        Run::new('A', 26, 0x24B6),
        Run::new('a', 26, 0x24D0),
        Run::new('1', 9, 0x2460),
    ],
    &[('0', '⓪')],
);

/// Negative circled letters exist in uppercase only; lowercase folds onto them.
pub static NEGATIVE_CIRCLED: Alphabet = Alphabet::new(
    "negative-circled",
    &[
        Run::new('A', 26, 0x1F150),
        Run::new('a', 26, 0x1F150),
        Run::new('1', 9, 0x2776),
    ],
    &[('0', '⓿')],
);

pub static SQUARED: Alphabet = Alphabet::new(
    "squared",
    &[Run::new('A', 26, 0x1F130), Run::new('a', 26, 0x1F130)],
    &[],
);

pub static NEGATIVE_SQUARED: Alphabet = Alphabet::new(
    "negative-squared",
    &[Run::new('A', 26, 0x1F170), Run::new('a', 26, 0x1F170)],
    &[],
);

pub static PARENTHESIZED: Alphabet = Alphabet::new(
    "parenthesized",
    &[
        Run::new('A', 26, 0x1F110),
        Run::new('a', 26, 0x249C),
        Run::new('1', 9, 0x2474),
    ],
    &[],
);

/// Every built-in alphabet, for enumeration in tests and listings.
#[must_use]
pub fn all() -> [&'static Alphabet; 19] {
    [
        &BOLD,
        &ITALIC,
        &BOLD_ITALIC,
        &SCRIPT,
        &BOLD_SCRIPT,
        &FRAKTUR,
        &BOLD_FRAKTUR,
        &DOUBLE_STRUCK,
        &SANS,
        &SANS_BOLD,
        &SANS_ITALIC,
        &SANS_BOLD_ITALIC,
        &MONOSPACE,
        &FULLWIDTH,
        &CIRCLED,
        &NEGATIVE_CIRCLED,
        &SQUARED,
        &NEGATIVE_SQUARED,
        &PARENTHESIZED,
    ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────
