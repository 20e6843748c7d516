//! Ornaments — decorative wrapping that multiplies one transform into many.
//!
//! A style has only a handful of genuinely different character mappings,
//! but callers want hundreds of visibly distinct variants. The ornament
//! wrapper closes the gap: it surrounds the transformed text with symbols
//! from the style's [`OrnamentPool`], following one of six [`Layout`]s.
//!
//! ```text
//! index % 6   layout           example (pool ✨ ★ ☆ …)
//! ─────────   ──────────────   ─────────────────────────
//!     0       Bare             𝐇𝐢
//!     1       SymmetricPair    ✨ 𝐇𝐢 ✨
//!     2       AsymmetricPair   ✨ 𝐇𝐢 ★
//!     3       Repeated         ✨✨✨ 𝐇𝐢 ✨✨✨
//!     4       LeftOnly         ✨ 𝐇𝐢
//!     5       RightOnly        𝐇𝐢 ✨
//! ```
//!
//! `index / 6` (the *pass*) then walks the pool: which symbol leads, which
//! partner joins it, and whether the separator is a space or nothing.
//! Everything is a pure function of the index, so the same index always
//! yields the same decoration.

/// A named pool of ornament glyphs.
#[derive(Debug, PartialEq, Eq)]
pub struct OrnamentPool {
    name: &'static str,
    symbols: &'static [&'static str],
}

impl OrnamentPool {
    #[must_use]
    pub const fn new(name: &'static str, symbols: &'static [&'static str]) -> Self {
        Self { name, symbols }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// How ornaments are arranged around the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Text alone.
    Bare,
    /// Same ornament run on both sides, mirrored.
    SymmetricPair,
    /// Lead ornament on the left, its partner on the right.
    AsymmetricPair,
    /// Three joined ornaments on each side.
    Repeated,
    /// Ornament before the text only.
    LeftOnly,
    /// Ornament after the text only.
    RightOnly,
}

const LAYOUTS: [Layout; 6] = [
    Layout::Bare,
    Layout::SymmetricPair,
    Layout::AsymmetricPair,
    Layout::Repeated,
    Layout::LeftOnly,
    Layout::RightOnly,
];

const SEPARATORS: [&str; 2] = [" ", ""];

impl Layout {
    /// Layout for a variant index.
    #[must_use]
    pub const fn for_index(variant_index: usize) -> Self {
        LAYOUTS[variant_index % LAYOUTS.len()]
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &LAYOUTS
    }
}

/// Wrap `text` in ornaments from `pool`, chosen by `variant_index`.
///
/// An empty pool returns the text unchanged.
#[must_use]
pub fn decorate(text: &str, pool: &OrnamentPool, variant_index: usize) -> String {
    let layout = Layout::for_index(variant_index);
    let n = pool.len();
    if n == 0 || layout == Layout::Bare {
        return text.to_string();
    }

    let pass = variant_index / LAYOUTS.len();
    let lead = pass % n;
    let offset = (pass / n) % n;
    let sep = SEPARATORS[(pass / (n * n)) % SEPARATORS.len()];

    let a = pool.symbols[lead];
    let b = pool.symbols[(lead + offset) % n];
    // offset 0 means "single symbol"; otherwise the partner joins in.
    let duo = if offset == 0 { a.to_string() } else { format!("{a}{b}") };
    let duo_mirrored = if offset == 0 { a.to_string() } else { format!("{b}{a}") };

    match layout {
        Layout::Bare => text.to_string(),
        Layout::SymmetricPair => format!("{duo}{sep}{text}{sep}{duo_mirrored}"),
        Layout::AsymmetricPair => format!("{a}{sep}{text}{sep}{b}"),
        Layout::Repeated => {
            let run = if offset == 0 { a.repeat(3) } else { format!("{a}{b}{a}") };
            format!("{run}{sep}{text}{sep}{run}")
        }
        Layout::LeftOnly => format!("{duo}{sep}{text}"),
        Layout::RightOnly => format!("{text}{sep}{duo_mirrored}"),
    }
}

/// Upper bound on distinct decorations a pool can produce for one text.
#[must_use]
pub const fn capacity(pool: &OrnamentPool) -> usize {
    let n = pool.len();
    // Bare once, plus five ornamented layouts over (lead, offset, sep).
    1 + (LAYOUTS.len() - 1) * n * n * SEPARATORS.len()
}

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

pub static SPARKLE: OrnamentPool = OrnamentPool::new(
    "sparkle",
    &["✨", "★", "☆", "✦", "✧", "⋆", "✩", "✪", "✫", "✬", "❋", "✺"],
);

pub static HEART: OrnamentPool = OrnamentPool::new(
    "heart",
    &["♡", "♥", "❤", "❥", "❣", "💕", "💖", "💗", "💘", "💝", "😍", "🥰"],
);

pub static ROYAL: OrnamentPool = OrnamentPool::new(
    "royal",
    &["♔", "♕", "♚", "♛", "⚜", "❦", "❧", "☙", "👑", "🏰", "💎", "🦁"],
);

pub static FLORAL: OrnamentPool = OrnamentPool::new(
    "floral",
    &["🌸", "🌺", "🌼", "🌷", "🌹", "🍃", "🌿", "🦋", "❀", "✿", "❁", "🌻"],
);

pub static GOTHIC: OrnamentPool = OrnamentPool::new(
    "gothic",
    &["☠", "⛧", "⸸", "✟", "†", "🕯", "🦇", "🥀", "⚰", "🖤", "🌑", "🗡"],
);

pub static CHAOS: OrnamentPool = OrnamentPool::new(
    "chaos",
    &["☣", "☢", "⚠", "👁", "🩸", "🌀", "💀", "⛓", "🕷", "👹", "⚡", "🔥"],
);

pub static BUBBLE: OrnamentPool = OrnamentPool::new(
    "bubble",
    &["🫧", "○", "◌", "◎", "●", "◯", "⚪", "🔵", "🟣", "💭", "🎈", "☁"],
);

pub static GEOMETRIC: OrnamentPool = OrnamentPool::new(
    "geometric",
    &["■", "□", "▣", "▤", "◆", "◇", "◈", "▲", "△", "▶", "◀", "⬛"],
);

pub static TECH: OrnamentPool = OrnamentPool::new(
    "tech",
    &["⚡", "⟡", "⌬", "⌘", "⎔", "⏣", "◉", "⊕", "⊗", "⟁", "⌖", "💾"],
);

pub static REFLECT: OrnamentPool = OrnamentPool::new(
    "reflect",
    &["⇄", "⟷", "◐", "◑", "⧉", "🪞", "↔", "⇋", "⇌", "◒", "◓", "⥂"],
);

pub static FLIP: OrnamentPool = OrnamentPool::new(
    "flip",
    &["🙃", "↻", "↺", "⤾", "⤿", "🔄", "🔃", "🌀", "🤸", "⥁", "⥀", "🎢"],
);

pub static PLAYFUL: OrnamentPool = OrnamentPool::new(
    "playful",
    &["🎉", "🎊", "🍭", "🌈", "⭐", "🦄", "🍬", "🧁", "🎀", "🪅", "🥳", "😜"],
);

pub static MUSIC: OrnamentPool = OrnamentPool::new(
    "music",
    &["♪", "♫", "♬", "♩", "🎵", "🎶", "🎸", "🎧", "🎤", "🎹", "🥁", "🎷"],
);

pub static VIKING: OrnamentPool = OrnamentPool::new(
    "viking",
    &["ᛟ", "ᛉ", "ᚠ", "⚔", "🛡", "🪓", "⚒", "🐺", "🌲", "🏔", "ᛝ", "ᛥ"],
);

pub static LINE: OrnamentPool = OrnamentPool::new(
    "line",
    &["—", "═", "─", "━", "〰", "≈", "∿", "⁓", "⌇", "⸺", "⫘", "▬"],
);

pub static WAVE: OrnamentPool = OrnamentPool::new(
    "wave",
    &["🌴", "🌊", "🌅", "💿", "📼", "🗿", "🍹", "🌐", "░", "▒", "▓", "彡"],
);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
