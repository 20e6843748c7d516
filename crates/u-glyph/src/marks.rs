// SPDX-License-Identifier: MIT
//
// Combining marks — strikethrough, underline, overline, and zalgo.
//
// A combining mark (general category M) renders on top of, through, or
// under the character before it. Appending U+0336 after every character
// strikes a line through the whole word, with no font or markup support
// required from the destination.
//
// Marks attach per grapheme cluster, never once at the end of the string:
//
//   H  i         →  H ̶  i ̶          (each base gets its own trailing run)
//   é (e + ◌́)   →  e ◌́ ◌̶           (appended after the existing cluster)
//
// Two flavours:
//
//   Fixed  — a bitflag set of overlay marks, emitted in bit order after
//            every cluster (spaces included, so lines read continuously).
//   Chaos  — zalgo: a random run of marks above, through and below each
//            non-space cluster. Intensity cycles with the variant index.
//
// Base characters are never removed or reordered. `strip_marks` undoes
// any output of this module.

use unicode_segmentation::UnicodeSegmentation;

use crate::rng::Entropy;

// ─── Fixed overlay marks ─────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Fixed combining marks appended after every grapheme cluster.
    ///
    /// ```
    /// use u_glyph::marks::Marks;
    ///
    /// let lines = Marks::LOW_LINE | Marks::OVERLINE;
    /// assert!(lines.contains(Marks::OVERLINE));
    /// assert!(!lines.contains(Marks::STRIKE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Marks: u8 {
        /// U+0336 COMBINING LONG STROKE OVERLAY.
        const STRIKE          = 1 << 0;
        /// U+0335 COMBINING SHORT STROKE OVERLAY.
        const SHORT_STRIKE    = 1 << 1;
        /// U+0334 COMBINING TILDE OVERLAY.
        const TILDE_OVERLAY   = 1 << 2;
        /// U+0338 COMBINING LONG SOLIDUS OVERLAY.
        const SLASH           = 1 << 3;
        /// U+0332 COMBINING LOW LINE.
        const LOW_LINE        = 1 << 4;
        /// U+0333 COMBINING DOUBLE LOW LINE.
        const DOUBLE_LOW_LINE = 1 << 5;
        /// U+0305 COMBINING OVERLINE.
        const OVERLINE        = 1 << 6;
    }
}

/// Code point for each fixed mark, in emission order.
const FIXED: [(Marks, char); 7] = [
    (Marks::STRIKE, '\u{0336}'),
    (Marks::SHORT_STRIKE, '\u{0335}'),
    (Marks::TILDE_OVERLAY, '\u{0334}'),
    (Marks::SLASH, '\u{0338}'),
    (Marks::LOW_LINE, '\u{0332}'),
    (Marks::DOUBLE_LOW_LINE, '\u{0333}'),
    (Marks::OVERLINE, '\u{0305}'),
];

impl Marks {
    /// The combining characters for this set, in emission order.
    #[must_use]
    pub fn chars(self) -> Vec<char> {
        FIXED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, ch)| ch)
            .collect()
    }
}

// ─── Chaos (zalgo) ───────────────────────────────────────────────────────────

/// Zalgo intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChaosLevel {
    Mini,
    Normal,
    Max,
}

impl ChaosLevel {
    /// Intensity for a variant: cycles Mini → Normal → Max.
    #[must_use]
    pub const fn for_index(variant_index: usize) -> Self {
        match variant_index % 3 {
            0 => Self::Mini,
            1 => Self::Normal,
            _ => Self::Max,
        }
    }

    /// Upper bound on marks drawn per pool, per cluster.
    #[must_use]
    pub const fn cap(self) -> u32 {
        match self {
            Self::Mini => 2,
            Self::Normal => 4,
            Self::Max => 7,
        }
    }
}

const CHAOS_ABOVE: &[char] = &[
    '\u{030D}', '\u{030E}', '\u{0304}', '\u{0305}', '\u{033F}', '\u{0311}', '\u{0306}',
    '\u{0310}', '\u{0352}', '\u{0357}', '\u{0351}', '\u{0307}', '\u{0308}', '\u{030A}',
    '\u{0342}', '\u{0343}', '\u{0344}', '\u{034A}', '\u{034B}', '\u{034C}', '\u{0303}',
    '\u{0302}', '\u{030C}', '\u{0350}', '\u{0300}', '\u{0301}', '\u{030B}', '\u{030F}',
    '\u{0312}', '\u{0313}', '\u{0314}', '\u{033D}', '\u{0309}', '\u{0363}', '\u{0364}',
    '\u{0365}', '\u{0366}', '\u{0367}', '\u{0368}', '\u{0369}', '\u{036A}', '\u{036B}',
    '\u{036C}', '\u{036D}', '\u{036E}', '\u{036F}', '\u{033E}', '\u{035B}', '\u{0346}',
    '\u{031A}',
];

const CHAOS_MIDDLE: &[char] = &[
    '\u{0315}', '\u{031B}', '\u{0340}', '\u{0341}', '\u{0358}', '\u{0321}', '\u{0322}',
    '\u{0327}', '\u{0328}', '\u{0334}', '\u{0335}', '\u{0336}', '\u{034F}', '\u{035C}',
    '\u{035D}', '\u{035E}', '\u{035F}', '\u{0360}', '\u{0362}', '\u{0338}', '\u{0337}',
    '\u{0361}', '\u{0489}',
];

const CHAOS_BELOW: &[char] = &[
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031C}', '\u{031D}', '\u{031E}',
    '\u{031F}', '\u{0320}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0329}', '\u{032A}',
    '\u{032B}', '\u{032C}', '\u{032D}', '\u{032E}', '\u{032F}', '\u{0330}', '\u{0331}',
    '\u{0332}', '\u{0333}', '\u{0339}', '\u{033A}', '\u{033B}', '\u{033C}', '\u{0345}',
    '\u{0347}', '\u{0348}', '\u{0349}', '\u{034D}', '\u{034E}', '\u{0353}', '\u{0354}',
    '\u{0355}', '\u{0356}', '\u{0359}', '\u{035A}', '\u{0323}',
];

/// Total number of distinct marks the chaos generator can draw from.
#[must_use]
pub const fn chaos_pool_size() -> usize {
    CHAOS_ABOVE.len() + CHAOS_MIDDLE.len() + CHAOS_BELOW.len()
}

// ─── MarkSpec ────────────────────────────────────────────────────────────────

/// How a style decorates characters with combining marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkSpec {
    Fixed(Marks),
    Chaos,
}

impl MarkSpec {
    /// Whether output depends on the entropy source.
    #[must_use]
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Chaos)
    }
}

/// Append combining marks after every grapheme cluster of `text`.
///
/// `variant_index` selects the chaos intensity; fixed marks ignore it.
/// Line breaks and control characters never receive marks.
pub fn apply_marks<E: Entropy + ?Sized>(
    text: &str,
    spec: MarkSpec,
    variant_index: usize,
    entropy: &mut E,
) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    match spec {
        MarkSpec::Fixed(marks) => {
            let run: String = marks.chars().into_iter().collect();
            for cluster in text.graphemes(true) {
                out.push_str(cluster);
                if accepts_marks(cluster) {
                    out.push_str(&run);
                }
            }
        }
        MarkSpec::Chaos => {
            let cap = ChaosLevel::for_index(variant_index).cap();
            for cluster in text.graphemes(true) {
                out.push_str(cluster);
                if accepts_marks(cluster) && !cluster.chars().all(char::is_whitespace) {
                    push_chaos(&mut out, cap, entropy);
                }
            }
        }
    }
    out
}

fn push_chaos<E: Entropy + ?Sized>(out: &mut String, cap: u32, entropy: &mut E) {
    let above = 1 + entropy.below(cap);
    let middle = entropy.below(cap / 2 + 1);
    let below = 1 + entropy.below(cap);
    for (pool, count) in [(CHAOS_ABOVE, above), (CHAOS_MIDDLE, middle), (CHAOS_BELOW, below)] {
        for _ in 0..count {
            out.push(pool[entropy.below(pool.len() as u32) as usize]);
        }
    }
}

fn accepts_marks(cluster: &str) -> bool {
    cluster.chars().next().is_some_and(|ch| !ch.is_control())
}

// ─── Stripping ───────────────────────────────────────────────────────────────

/// Whether `ch` lies in one of the combining-mark blocks.
#[must_use]
pub const fn is_combining(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{0483}'..='\u{0489}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Remove every combining mark, recovering the base text.
#[must_use]
pub fn strip_marks(text: &str) -> String {
    text.chars().filter(|&ch| !is_combining(ch)).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift32;
    use pretty_assertions::assert_eq;

    fn fixed(text: &str, marks: Marks) -> String {
        apply_marks(text, MarkSpec::Fixed(marks), 0, &mut Xorshift32::new(1))
    }

    #[test]
    fn strike_follows_every_character() {
        assert_eq!(fixed("Hi", Marks::STRIKE), "H\u{0336}i\u{0336}");
    }

    #[test]
    fn spaces_are_marked_for_continuous_lines() {
        assert_eq!(fixed("a b", Marks::LOW_LINE), "a\u{0332} \u{0332}b\u{0332}");
    }

    #[test]
    fn newlines_are_not_marked() {
        assert_eq!(fixed("a\nb", Marks::STRIKE), "a\u{0336}\nb\u{0336}");
        assert_eq!(fixed("a\r\nb", Marks::STRIKE), "a\u{0336}\r\nb\u{0336}");
    }

    #[test]
    fn multiple_marks_in_bit_order() {
        let both = Marks::LOW_LINE | Marks::OVERLINE;
        assert_eq!(fixed("x", both), "x\u{0332}\u{0305}");
        assert_eq!(both.chars(), vec!['\u{0332}', '\u{0305}']);
    }

    #[test]
    fn marks_append_after_existing_cluster() {
        // e + combining acute is one cluster; the strike goes after both.
        assert_eq!(fixed("e\u{0301}", Marks::STRIKE), "e\u{0301}\u{0336}");
    }

    #[test]
    fn astral_characters_marked_once() {
        let out = fixed("𝐀", Marks::STRIKE);
        assert_eq!(out, "𝐀\u{0336}");
    }

    #[test]
    fn strip_recovers_base_text() {
        let mut rng = Xorshift32::new(77);
        for index in 0..6 {
            let out = apply_marks("Hello, zalgo!", MarkSpec::Chaos, index, &mut rng);
            assert_eq!(strip_marks(&out), "Hello, zalgo!");
        }
        assert_eq!(strip_marks(&fixed("Hi there", Marks::all())), "Hi there");
    }

    #[test]
    fn chaos_marks_every_visible_character() {
        let out = apply_marks("ab c", MarkSpec::Chaos, 1, &mut Xorshift32::new(5));
        let clusters: Vec<&str> = out.graphemes(true).collect();
        assert_eq!(clusters.len(), 4);
        assert!(clusters[0].chars().count() >= 3);
        assert!(clusters[1].chars().count() >= 3);
        assert_eq!(clusters[2], " ");
        assert!(clusters[3].chars().count() >= 3);
    }

    #[test]
    fn chaos_is_deterministic_for_fixed_seed() {
        let a = apply_marks("zalgo", MarkSpec::Chaos, 2, &mut Xorshift32::new(9));
        let b = apply_marks("zalgo", MarkSpec::Chaos, 2, &mut Xorshift32::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn chaos_intensity_grows_with_level() {
        let text = "a".repeat(200);
        let mini = apply_marks(&text, MarkSpec::Chaos, 0, &mut Xorshift32::new(3));
        let max = apply_marks(&text, MarkSpec::Chaos, 2, &mut Xorshift32::new(3));
        assert!(max.chars().count() > mini.chars().count());
    }

    #[test]
    fn chaos_level_cycles() {
        assert_eq!(ChaosLevel::for_index(0), ChaosLevel::Mini);
        assert_eq!(ChaosLevel::for_index(1), ChaosLevel::Normal);
        assert_eq!(ChaosLevel::for_index(5), ChaosLevel::Max);
    }

    #[test]
    fn every_pool_mark_is_combining() {
        for &ch in CHAOS_ABOVE.iter().chain(CHAOS_MIDDLE).chain(CHAOS_BELOW) {
            assert!(is_combining(ch), "U+{:04X} is not a combining mark", ch as u32);
        }
        assert!(chaos_pool_size() > 100);
    }

    #[test]
    fn randomized_flag() {
        assert!(MarkSpec::Chaos.is_randomized());
        assert!(!MarkSpec::Fixed(Marks::STRIKE).is_randomized());
    }
}
