// SPDX-License-Identifier: MIT

//! # u-variant — Variant engine for u-fonts
//!
//! Turns one piece of text into many distinct, named renderings of a style.
//!
//! - **[`generate`]**: bounded generate-then-deduplicate loop with padding
//! - **[`variant`]**: `Variant`, `VariantRequest`, names and previews
//! - **[`cache`]**: `VariantCache` capability, `TtlCache` and `NoCache`
//! - **[`config`]**: `EngineConfig`, loaded from TOML
//! - **[`engine`]**: the boundary `Engine` and its JSON response
//!
//! ```
//! use u_glyph::Xorshift32;
//! use u_variant::generate_variants_with;
//!
//! let variants = generate_variants_with("bold", "Hi", 3, &mut Xorshift32::new(1));
//! assert_eq!(variants.len(), 3);
//! assert_eq!(variants[0].rendered_text, "𝐇𝐢");
//! assert_eq!(variants[0].name, "Bold Style 1");
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod generate;
pub mod variant;

pub use cache::{CacheKey, NoCache, TtlCache, VariantCache, Variants};
pub use config::{CacheConfig, EngineConfig};
pub use engine::{Engine, VariantResponse};
pub use error::ConfigError;
pub use generate::{Generator, generate_variants, generate_variants_with};
pub use variant::{Variant, VariantRequest};
