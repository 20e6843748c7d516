// SPDX-License-Identifier: MIT

//! # u-style — Style registry for u-fonts
//!
//! Knows every style the engine can render and how to find one from a loose
//! description.
//!
//! - **[`definition`]** — `StyleDefinition` and `Category`; the map → marks →
//!   structural transform pipeline
//! - **[`registry`]** — the single static table of built-in styles
//! - **[`ornament`]** — ornament pools and the six decoration layouts
//! - **[`resolve`]** — slug / free-text → style, total and idempotent
//! - **[`platform`]** — platforms and the `platform × style` catalog
//!
//! # Architecture
//!
//! ```text
//! "Instagram Cursive Fonts"
//!     │
//!     ▼
//! resolve.rs:    normalize → exact → stem → keyword → fallback
//!     │
//!     ▼
//! registry.rs:   &'static StyleDefinition
//!     │
//!     ▼
//! definition.rs: transform(text, index, entropy)   (u-glyph does the work)
//!     │
//!     ▼
//! ornament.rs:   decorate(transformed, pool, index)
//! ```

pub mod definition;
pub mod ornament;
pub mod platform;
pub mod registry;
pub mod resolve;

pub use definition::{Category, StyleDefinition};
pub use ornament::{Layout, OrnamentPool, decorate};
pub use platform::{CatalogEntry, Platform, catalog};
pub use resolve::{MatchKind, Resolution, resolve, resolve_style};
