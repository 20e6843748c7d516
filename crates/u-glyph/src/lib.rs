// SPDX-License-Identifier: MIT
//
// u-glyph — the glyph layer of u-fonts.
//
// Everything that touches individual characters lives here: arithmetic
// alphabets into the Unicode math and enclosed blocks, explicit glyph
// tables for look-alike scripts, combining-mark overlays (strike,
// underline, zalgo) and grapheme-aware whole-string transforms (reverse,
// mirror, upside-down).
//
// Every operation is total. A character with no mapping passes through
// unchanged, an empty string stays empty, and nothing panics on input.
// Randomness enters only through the `Entropy` trait, so every output is
// reproducible from a seed.

pub mod alphabet;
pub mod charmap;
pub mod marks;
pub mod rng;
pub mod structural;
pub mod table;

pub use charmap::CharMap;
pub use marks::{MarkSpec, Marks};
pub use rng::{Entropy, Xorshift32};
pub use structural::Structural;
