//! Built-in styles — the one canonical registry.
//!
//! Every style the engine knows is declared once, here, as a `static`
//! [`StyleDefinition`]. Lookups are by canonical key; loose matching of
//! slugs and free text lives in [`resolve`](crate::resolve).

use u_glyph::{CharMap, MarkSpec, Marks, Structural, alphabet, table};

use crate::definition::{Category, StyleDefinition};
use crate::ornament::{self, OrnamentPool};

/// Key of the generic decorative identity style used as the fallback.
pub const FALLBACK_KEY: &str = "fancy-text-generator";

const fn style(
    key: &'static str,
    display_name: &'static str,
    category: Category,
    char_map: CharMap,
    ornaments: &'static OrnamentPool,
    demo_text: &'static str,
) -> StyleDefinition {
    StyleDefinition {
        key,
        display_name,
        category,
        char_map,
        marks: None,
        structural: None,
        ornaments,
        demo_text,
    }
}

const fn marked(
    key: &'static str,
    display_name: &'static str,
    category: Category,
    marks: MarkSpec,
    ornaments: &'static OrnamentPool,
    demo_text: &'static str,
) -> StyleDefinition {
    StyleDefinition {
        key,
        display_name,
        category,
        char_map: CharMap::Identity,
        marks: Some(marks),
        structural: None,
        ornaments,
        demo_text,
    }
}

const fn structural(
    key: &'static str,
    display_name: &'static str,
    category: Category,
    op: Structural,
    ornaments: &'static OrnamentPool,
    demo_text: &'static str,
) -> StyleDefinition {
    StyleDefinition {
        key,
        display_name,
        category,
        char_map: CharMap::Identity,
        marks: None,
        structural: Some(op),
        ornaments,
        demo_text,
    }
}

static STYLES: [StyleDefinition; 37] = [
    // ── Fallback / decorative ─────────────────────────────────
    style(FALLBACK_KEY, "Fancy Text", Category::Decorative, CharMap::Identity,
        &ornament::SPARKLE, "Fancy Text"),
    style("cute-font-generator", "Cute", Category::Playful, CharMap::Identity,
        &ornament::HEART, "Cute Text"),

    // ── Mathematical alphabets ────────────────────────────────
    style("bold-font-generator", "Bold", Category::Bold,
        CharMap::Alphabet(&alphabet::BOLD), &ornament::ROYAL, "Bold Text"),
    style("italic-font-generator", "Italic", Category::Decorative,
        CharMap::Alphabet(&alphabet::ITALIC), &ornament::FLORAL, "Italic Text"),
    style("bold-italic-font-generator", "Bold Italic", Category::Bold,
        CharMap::Alphabet(&alphabet::BOLD_ITALIC), &ornament::ROYAL, "Bold Italic Text"),
    style("cursive-font-generator", "Cursive", Category::Script,
        CharMap::Alphabet(&alphabet::SCRIPT), &ornament::HEART, "Cursive Text"),
    style("bold-cursive-font-generator", "Bold Cursive", Category::Script,
        CharMap::Alphabet(&alphabet::BOLD_SCRIPT), &ornament::FLORAL, "Bold Cursive Text"),
    style("gothic-font-generator", "Gothic", Category::Gothic,
        CharMap::Alphabet(&alphabet::FRAKTUR), &ornament::GOTHIC, "Gothic Text"),
    style("bold-gothic-font-generator", "Bold Gothic", Category::Gothic,
        CharMap::Alphabet(&alphabet::BOLD_FRAKTUR), &ornament::GOTHIC, "Bold Gothic Text"),
    style("double-struck-font-generator", "Double Struck", Category::Decorative,
        CharMap::Alphabet(&alphabet::DOUBLE_STRUCK), &ornament::GEOMETRIC, "Double Struck"),
    style("sans-serif-font-generator", "Sans Serif", Category::Technical,
        CharMap::Alphabet(&alphabet::SANS), &ornament::TECH, "Sans Serif Text"),
    style("sans-bold-font-generator", "Sans Bold", Category::Bold,
        CharMap::Alphabet(&alphabet::SANS_BOLD), &ornament::TECH, "Sans Bold Text"),
    style("sans-italic-font-generator", "Sans Italic", Category::Decorative,
        CharMap::Alphabet(&alphabet::SANS_ITALIC), &ornament::FLORAL, "Sans Italic Text"),
    style("sans-bold-italic-font-generator", "Sans Bold Italic", Category::Bold,
        CharMap::Alphabet(&alphabet::SANS_BOLD_ITALIC), &ornament::ROYAL, "Sans Bold Italic"),
    style("monospace-font-generator", "Monospace", Category::Technical,
        CharMap::Alphabet(&alphabet::MONOSPACE), &ornament::TECH, "Monospace Text"),
    style("aesthetic-font-generator", "Aesthetic", Category::Expressive,
        CharMap::Alphabet(&alphabet::FULLWIDTH), &ornament::WAVE, "Aesthetic"),

    // ── Enclosed alphanumerics ────────────────────────────────
    style("bubble-font-generator", "Bubble", Category::Enclosed,
        CharMap::Alphabet(&alphabet::CIRCLED), &ornament::BUBBLE, "Bubble Text"),
    style("black-bubble-font-generator", "Black Bubble", Category::Enclosed,
        CharMap::Alphabet(&alphabet::NEGATIVE_CIRCLED), &ornament::BUBBLE, "Black Bubble"),
    style("square-font-generator", "Square", Category::Enclosed,
        CharMap::Alphabet(&alphabet::SQUARED), &ornament::GEOMETRIC, "Square Text"),
    style("black-square-font-generator", "Black Square", Category::Enclosed,
        CharMap::Alphabet(&alphabet::NEGATIVE_SQUARED), &ornament::GEOMETRIC, "Black Square"),
    style("parenthesized-font-generator", "Parenthesized", Category::Enclosed,
        CharMap::Alphabet(&alphabet::PARENTHESIZED), &ornament::GEOMETRIC, "Parenthesized"),

    // ── Glyph tables ──────────────────────────────────────────
    style("small-caps-font-generator", "Small Caps", Category::Decorative,
        CharMap::Table(&table::SMALL_CAPS), &ornament::SPARKLE, "Small Caps Text"),
    style("superscript-text-generator", "Superscript", Category::Playful,
        CharMap::Table(&table::SUPERSCRIPT), &ornament::MUSIC, "tiny text"),
    style("subscript-text-generator", "Subscript", Category::Playful,
        CharMap::Table(&table::SUBSCRIPT), &ornament::MUSIC, "tiny text"),
    style("greek-font-generator", "Greek", Category::Lookalike,
        CharMap::Table(&table::GREEK), &ornament::ROYAL, "Greek Text"),
    style("russian-font-generator", "Russian", Category::Lookalike,
        CharMap::Table(&table::CYRILLIC), &ornament::ROYAL, "Russian Text"),
    style("viking-font-generator", "Viking", Category::Lookalike,
        CharMap::Table(&table::RUNIC), &ornament::VIKING, "Viking Runes"),

    // ── Combining marks ───────────────────────────────────────
    marked("strikethrough-text-generator", "Strikethrough", Category::Lined,
        MarkSpec::Fixed(Marks::STRIKE), &ornament::LINE, "Strikethrough"),
    marked("slash-text-generator", "Slashed", Category::Lined,
        MarkSpec::Fixed(Marks::SLASH), &ornament::LINE, "Slashed Text"),
    marked("wavy-text-generator", "Wavy", Category::Lined,
        MarkSpec::Fixed(Marks::TILDE_OVERLAY), &ornament::WAVE, "Wavy Text"),
    marked("underline-text-generator", "Underline", Category::Lined,
        MarkSpec::Fixed(Marks::LOW_LINE), &ornament::LINE, "Underlined"),
    marked("double-underline-text-generator", "Double Underline", Category::Lined,
        MarkSpec::Fixed(Marks::DOUBLE_LOW_LINE), &ornament::LINE, "Double Underlined"),
    marked("overline-text-generator", "Overline", Category::Lined,
        MarkSpec::Fixed(Marks::OVERLINE), &ornament::LINE, "Overlined"),
    marked("zalgo-text-generator", "Zalgo", Category::Chaotic,
        MarkSpec::Chaos, &ornament::CHAOS, "Zalgo Text"),

    // ── Structural ────────────────────────────────────────────
    structural("mirror-text-generator", "Mirror", Category::Reflected,
        Structural::Mirror, &ornament::REFLECT, "Mirror Text"),
    structural("upside-down-text-generator", "Upside Down", Category::Inverted,
        Structural::UpsideDown, &ornament::FLIP, "Upside Down"),
    structural("reverse-text-generator", "Reverse", Category::Reflected,
        Structural::Reverse, &ornament::REFLECT, "Reverse Text"),
];

/// Every built-in style, in registry order.
#[must_use]
pub fn all() -> &'static [StyleDefinition] {
    &STYLES
}

/// Look up a style by canonical key (exact match).
#[must_use]
pub fn lookup(key: &str) -> Option<&'static StyleDefinition> {
    STYLES.iter().find(|s| s.key == key)
}

/// The generic decorative identity style.
#[must_use]
pub fn fallback() -> &'static StyleDefinition {
    // The fallback is always the first registry entry.
    &STYLES[0]
}

/// Styles grouped by category, in [`Category::all`] order. Empty groups are omitted.
#[must_use]
pub fn by_category() -> Vec<(Category, Vec<&'static StyleDefinition>)> {
    Category::all()
        .iter()
        .map(|&cat| (cat, STYLES.iter().filter(|s| s.category == cat).collect::<Vec<_>>()))
        .filter(|(_, styles)| !styles.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
