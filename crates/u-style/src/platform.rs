//! Platforms and the style catalog.
//!
//! Styled text is usually pasted somewhere specific: a bio, a username, a
//! server nickname. The catalog is the cross product of [`Platform`] and
//! every built-in style, one entry per landing path. It is a pure listing
//! for sitemap and navigation generators; nothing here touches generation.

use serde::Serialize;

use crate::definition::Category;
use crate::registry;

/// A destination platform that appears in landing-page paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Discord,
    Twitter,
    TikTok,
    Facebook,
    YouTube,
    WhatsApp,
    Twitch,
    Steam,
    Reddit,
}

impl Platform {
    /// URL slug, e.g. `"tiktok"`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Discord => "discord",
            Self::Twitter => "twitter",
            Self::TikTok => "tiktok",
            Self::Facebook => "facebook",
            Self::YouTube => "youtube",
            Self::WhatsApp => "whatsapp",
            Self::Twitch => "twitch",
            Self::Steam => "steam",
            Self::Reddit => "reddit",
        }
    }

    /// Display name, e.g. `"TikTok"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Discord => "Discord",
            Self::Twitter => "Twitter",
            Self::TikTok => "TikTok",
            Self::Facebook => "Facebook",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Twitch => "Twitch",
            Self::Steam => "Steam",
            Self::Reddit => "Reddit",
        }
    }

    /// Parse a platform from its slug (case-insensitive).
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let lower = slug.to_lowercase();
        Self::all().iter().find(|p| p.slug() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Instagram, Self::Discord, Self::Twitter, Self::TikTok,
            Self::Facebook, Self::YouTube, Self::WhatsApp, Self::Twitch,
            Self::Steam, Self::Reddit,
        ]
    }
}

/// One `platform × style` landing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub platform: Platform,
    pub style_key: &'static str,
    pub display_name: String,
    pub category: Category,
    /// `/{platform}/{style-key}`.
    pub path: String,
}

/// Enumerate every platform × style pair, platform-major.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    let styles = registry::all();
    let mut entries = Vec::with_capacity(Platform::all().len() * styles.len());
    for &platform in Platform::all() {
        for style in styles {
            entries.push(CatalogEntry {
                platform,
                style_key: style.key,
                display_name: format!("{} {} Generator", platform.display_name(), style.display_name),
                category: style.category,
                path: format!("/{}/{}", platform.slug(), style.key),
            });
        }
    }
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_is_full_cross_product() {
        let entries = catalog();
        assert_eq!(entries.len(), Platform::all().len() * registry::all().len());
    }

    #[test]
    fn catalog_paths_are_unique() {
        let entries = catalog();
        let mut paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), entries.len());
    }

    #[test]
    fn catalog_path_shape() {
        let first = &catalog()[0];
        assert_eq!(first.path, format!("/instagram/{}", registry::fallback().key));
        assert_eq!(first.display_name, "Instagram Fancy Text Generator");
    }

    #[test]
    fn catalog_paths_resolve_back_to_their_style() {
        for entry in catalog() {
            assert_eq!(resolve::resolve_style(&entry.path), entry.style_key, "{}", entry.path);
        }
    }

    #[test]
    fn slug_roundtrip() {
        for &p in Platform::all() {
            assert_eq!(Platform::from_slug(p.slug()), Some(p));
        }
        assert_eq!(Platform::from_slug("TikTok"), Some(Platform::TikTok));
        assert_eq!(Platform::from_slug("myspace"), None);
    }
}
