//! Variant generation — N unique, named renderings of one text in one style.
//!
//! ```text
//! for index in 0..count × iteration_factor:
//!     core      = style.transform(text, index, stream(seed, index))
//!     decorated = style.decorate(core, index)
//!     keep it if not seen before
//! pad with repeats of accepted entries until count is reached
//! ```
//!
//! The search is bounded, so a style with a tiny generative space (an empty
//! ornament pool, say) terminates in `count × iteration_factor` steps and
//! then pads. The result always holds exactly `count` entries.
//!
//! Non-randomized styles compute the core transform once; only decoration
//! varies with the index. Randomized (chaos) styles get an independent
//! entropy stream per index, derived from one seed drawn per request, so a
//! fixed caller-supplied seed reproduces the whole response.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::{debug, trace};
use u_glyph::{Entropy, Xorshift32};
use u_style::StyleDefinition;

use crate::config::EngineConfig;
use crate::variant::{Variant, preview, variant_name};

/// Default multiple of `count` spent on novelty search before padding.
pub const DEFAULT_ITERATION_FACTOR: usize = 8;

/// Default preview width in terminal columns.
pub const DEFAULT_PREVIEW_WIDTH: usize = 40;

// Up-front reservation limit; larger lists grow as they fill.
const MAX_PREALLOC: usize = 1024;

/// Bounded generate-then-deduplicate loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    iteration_factor: usize,
    preview_width: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATION_FACTOR, DEFAULT_PREVIEW_WIDTH)
    }
}

impl Generator {
    /// A factor of zero is treated as one so at least `count` attempts run.
    #[must_use]
    pub const fn new(iteration_factor: usize, preview_width: usize) -> Self {
        Self {
            iteration_factor: if iteration_factor == 0 { 1 } else { iteration_factor },
            preview_width,
        }
    }

    #[must_use]
    pub const fn iteration_factor(&self) -> usize {
        self.iteration_factor
    }

    #[must_use]
    pub const fn preview_width(&self) -> usize {
        self.preview_width
    }

    /// Produce exactly `count` variants of `base_text` in `style`.
    ///
    /// Blank input renders the style's demo text instead. `count == 0`
    /// yields an empty list. One `u32` is drawn from `entropy` per call.
    ///
    /// `count` is not clamped here; the output really holds `count`
    /// entries, so callers taking counts from outside should bound them
    /// first (see [`EngineConfig::clamp_count`]).
    pub fn generate<E: Entropy + ?Sized>(
        &self,
        style: &StyleDefinition,
        base_text: &str,
        count: usize,
        entropy: &mut E,
    ) -> Vec<Variant> {
        if count == 0 {
            return Vec::new();
        }

        let text = if base_text.trim().is_empty() {
            debug!(style = style.key, "blank input, rendering demo text");
            style.demo_text
        } else {
            base_text
        };

        let seed = entropy.next_u32();
        let ceiling = count.saturating_mul(self.iteration_factor);
        let fixed_core = if style.is_randomized() {
            None
        } else {
            Some(style.transform(text, 0, &mut Xorshift32::new(seed)))
        };

        let reserve = count.min(MAX_PREALLOC);
        let mut seen: HashSet<String> = HashSet::with_capacity(reserve);
        let mut accepted: Vec<String> = Vec::with_capacity(reserve);
        let mut attempts = 0;

        while accepted.len() < count && attempts < ceiling {
            let index = attempts;
            attempts += 1;

            let core = match &fixed_core {
                Some(core) => Cow::Borrowed(core.as_str()),
                None => Cow::Owned(style.transform(
                    text,
                    index,
                    &mut Xorshift32::for_variant(seed, index),
                )),
            };
            let decorated = style.decorate(&core, index);
            if seen.contains(&decorated) {
                trace!(index, "duplicate variant skipped");
                continue;
            }
            seen.insert(decorated.clone());
            accepted.push(decorated);
        }

        let novel = accepted.len();
        if novel < count {
            debug!(
                style = style.key,
                novel,
                count,
                attempts,
                "generative space exhausted, padding with repeats"
            );
            let padding: Vec<String> = accepted.iter().cycle().take(count - novel).cloned().collect();
            accepted.extend(padding);
        }

        accepted
            .into_iter()
            .enumerate()
            .map(|(i, rendered_text)| {
                let id = i + 1;
                Variant {
                    id,
                    name: variant_name(style.display_name, id),
                    preview_text: preview(&rendered_text, self.preview_width),
                    rendered_text,
                }
            })
            .collect()
    }
}

/// Resolve `style` and generate with system entropy and default settings.
///
/// `count` is clamped to the default `max_count` (1000).
#[must_use]
pub fn generate_variants(style: &str, base_text: &str, count: usize) -> Vec<Variant> {
    generate_variants_with(style, base_text, count, &mut Xorshift32::from_system())
}

/// Resolve `style` and generate with caller-supplied entropy.
///
/// `count` is clamped to the default `max_count` (1000).
pub fn generate_variants_with<E: Entropy + ?Sized>(
    style: &str,
    base_text: &str,
    count: usize,
    entropy: &mut E,
) -> Vec<Variant> {
    let definition = u_style::resolve(style);
    let count = EngineConfig::default().clamp_count(count);
    Generator::default().generate(definition, base_text, count, entropy)
}

// ─── Tests ─────────────────────────────────────────────────────────────────
