//! Engine — the boundary API.
//!
//! `Engine` is what a front-end holds: it resolves the style, clamps the
//! count, consults the injected cache, and otherwise delegates to the pure
//! [`Generator`]. It is `Send + Sync`; one instance can serve concurrent
//! requests from many threads.
//!
//! ```text
//! request ──► resolve ──► clamp ──► cache? ──hit──► Arc<[Variant]>
//!                                      │
//!                                     miss
//!                                      ▼
//!                           Generator::generate ──► cache.put
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;
use u_glyph::{Entropy, Xorshift32};
use u_style::{Resolution, StyleDefinition};

use crate::cache::{CacheKey, NoCache, TtlCache, VariantCache, Variants};
use crate::config::EngineConfig;
use crate::generate::Generator;
use crate::variant::{Variant, VariantRequest};

/// The JSON shape returned to HTTP and CLI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantResponse {
    /// Resolved canonical style key.
    pub style: &'static str,
    pub display_name: &'static str,
    pub count: usize,
    pub variants: Vec<Variant>,
}

impl VariantResponse {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Variant engine with configuration, cache and entropy source.
pub struct Engine {
    config: EngineConfig,
    generator: Generator,
    cache: Box<dyn VariantCache>,
    entropy: Mutex<Box<dyn Entropy + Send>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Build an engine from `config`, with a TTL cache when enabled and
    /// system-seeded entropy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let cache: Box<dyn VariantCache> = if config.cache.enabled {
            Box::new(TtlCache::new(config.cache.capacity))
        } else {
            Box::new(NoCache)
        };
        Self {
            generator: Generator::new(config.iteration_factor, config.preview_width),
            cache,
            entropy: Mutex::new(Box::new(Xorshift32::from_system())),
            config,
        }
    }

    /// Replace the cache.
    #[must_use]
    pub fn with_cache(mut self, cache: impl VariantCache + 'static) -> Self {
        self.cache = Box::new(cache);
        self
    }

    /// Replace the entropy source, e.g. with a seeded `Xorshift32`.
    #[must_use]
    pub fn with_entropy(mut self, entropy: impl Entropy + Send + 'static) -> Self {
        self.entropy = Mutex::new(Box::new(entropy));
        self
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve a slug or free-text name. Never fails.
    #[must_use]
    pub fn resolve_style(&self, raw: &str) -> Resolution {
        u_style::resolve::resolve_detailed(raw)
    }

    /// Generate `count` variants of `base_text` in the style `style` resolves to.
    ///
    /// `count` is clamped to `max_count`. Cached lists are returned as-is.
    ///
    /// The text is rendered exactly as given, edge whitespace included, so
    /// the output matches [`Generator::generate`]. Cache keys hold trimmed
    /// text; input with leading or trailing whitespace therefore skips the
    /// cache rather than share an entry with its trimmed form.
    pub fn generate_variants(&self, style: &str, base_text: &str, count: usize) -> Variants {
        let definition = u_style::resolve(style);
        self.generate_for(definition, base_text, count)
    }

    /// [`generate_variants`](Self::generate_variants) for a request value.
    pub fn generate(&self, request: &VariantRequest) -> Variants {
        self.generate_variants(&request.style, &request.base_text, request.requested_count)
    }

    /// Generate and wrap the result for serialization.
    pub fn respond(&self, style: &str, base_text: &str, count: usize) -> VariantResponse {
        let definition = u_style::resolve(style);
        let variants = self.generate_for(definition, base_text, count);
        VariantResponse {
            style: definition.key,
            display_name: definition.display_name,
            count: variants.len(),
            variants: variants.to_vec(),
        }
    }

    fn generate_for(&self, definition: &'static StyleDefinition, base_text: &str, count: usize) -> Variants {
        let count = self.config.clamp_count(count);
        if count == 0 {
            return Arc::from(Vec::new());
        }

        // Blank input renders demo text whatever its whitespace, so it
        // shares the empty key.
        let trimmed = base_text.trim();
        let key = (trimmed.len() == base_text.len() || trimmed.is_empty())
            .then(|| CacheKey::new(definition.key, trimmed, count));
        if let Some(hit) = key.as_ref().and_then(|key| self.cache.get(key)) {
            return hit;
        }

        // Hold the lock only long enough to draw a seed.
        let seed = self.entropy.lock().next_u32();
        let mut stream = Xorshift32::new(seed);
        let variants: Variants = self
            .generator
            .generate(definition, base_text, count, &mut stream)
            .into();

        debug!(style = definition.key, count, cached = key.is_some(), "generated variants");
        if let Some(key) = key {
            self.cache.put(key, Arc::clone(&variants), self.config.cache_ttl());
        }
        variants
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use u_style::MatchKind;

    fn seeded(config: EngineConfig) -> Engine {
        Engine::new(config).with_entropy(Xorshift32::new(1234))
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn generates_requested_count() {
        let engine = seeded(EngineConfig::default());
        let out = engine.generate_variants("bold", "Hi", 12);
        assert_eq!(out.len(), 12);
        assert_eq!(out[0].rendered_text, "𝐇𝐢");
    }

    #[test]
    fn count_is_clamped() {
        let config = EngineConfig {
            max_count: 10,
            default_count: 5,
            ..EngineConfig::default()
        };
        let engine = seeded(config);
        assert_eq!(engine.generate_variants("bold", "Hi", 5000).len(), 10);
    }

    #[test]
    fn zero_count_is_empty() {
        let engine = seeded(EngineConfig::default());
        assert!(engine.generate_variants("bold", "Hi", 0).is_empty());
    }

    #[test]
    fn cache_returns_same_list() {
        let engine = seeded(EngineConfig::default());
        let a = engine.generate_variants("zalgo", "Hi", 8);
        // A different spelling of the style lands on the same key.
        let b = engine.generate_variants("zalgo-text-generator", "Hi", 8);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn edge_whitespace_is_rendered_and_not_cached() {
        let engine = seeded(EngineConfig::default());
        let out = engine.generate_variants("strikethrough", " Hi ", 1);
        let core = Generator::default().generate(
            u_style::resolve("strikethrough"),
            " Hi ",
            1,
            &mut Xorshift32::new(1),
        );
        assert_eq!(out[0].rendered_text, " \u{0336}H\u{0336}i\u{0336} \u{0336}");
        assert_eq!(out[0].rendered_text, core[0].rendered_text);

        // The trimmed form has its own entry; padded input never reuses it.
        let trimmed = engine.generate_variants("strikethrough", "Hi", 1);
        assert_eq!(trimmed[0].rendered_text, "H\u{0336}i\u{0336}");
        let again = engine.generate_variants("strikethrough", " Hi ", 1);
        assert!(!Arc::ptr_eq(&trimmed, &again));
        assert!(!Arc::ptr_eq(&out, &again));
        assert_eq!(out, again);
    }

    #[test]
    fn blank_inputs_share_one_entry() {
        let engine = seeded(EngineConfig::default());
        let a = engine.generate_variants("bold", "", 3);
        let b = engine.generate_variants("bold", "   ", 3);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn without_cache_chaos_differs_between_calls() {
        let engine = seeded(EngineConfig::default()).with_cache(NoCache);
        let a = engine.generate_variants("zalgo", "Hello", 8);
        let b = engine.generate_variants("zalgo", "Hello", 8);
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(a != b);
    }

    #[test]
    fn disabled_cache_config_uses_no_cache() {
        let mut config = EngineConfig::default();
        config.cache.enabled = false;
        let engine = seeded(config);
        let a = engine.generate_variants("bold", "Hi", 3);
        let b = engine.generate_variants("bold", "Hi", 3);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn request_value_round_trip() {
        let engine = seeded(EngineConfig::default());
        let out = engine.generate(&VariantRequest::new("strike", "Hi", 5));
        assert_eq!(out[0].name, "Strikethrough Style 1");
    }

    #[test]
    fn respond_serializes_camel_case() {
        let engine = seeded(EngineConfig::default());
        let response = engine.respond("Instagram Cursive Fonts", "Hi", 2);
        assert_eq!(response.style, "cursive-font-generator");
        assert_eq!(response.count, 2);

        let value: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value["displayName"], "Cursive");
        assert_eq!(value["count"], 2);
        assert_eq!(value["variants"][0]["id"], 1);
        assert_eq!(value["variants"][0]["renderedText"], "ℋ𝒾");
        assert!(value["variants"][1]["previewText"].is_string());
    }

    #[test]
    fn resolve_style_reports_match_kind() {
        let engine = Engine::default();
        assert_eq!(engine.resolve_style("bold-font-generator").matched, MatchKind::Exact);
        assert_eq!(engine.resolve_style("???").matched, MatchKind::Fallback);
    }

    #[test]
    fn concurrent_requests() {
        let engine = Arc::new(seeded(EngineConfig::default()));
        let handles: Vec<_> = ["bold", "zalgo", "mirror", "bubble"]
            .into_iter()
            .map(|style| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.generate_variants(style, "Hello", 50).len())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 50);
        }
    }
}
