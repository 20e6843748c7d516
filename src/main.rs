// SPDX-License-Identifier: MIT
//
// u-fonts — render text in Unicode "font" styles from the command line.
//
// This is the main binary that wires together the crates:
//
//   u-glyph   → character maps, combining marks, structural transforms
//   u-style   → style registry, ornaments, resolution, platform catalog
//   u-variant → bounded variant generation, cache, config, Engine
//
// Every subcommand is a thin shell over the library. A render request
// flows through:
//
//   argv → clap → EngineConfig (TOML, optional) → Engine
//        → resolve → generate → text table or JSON on stdout
//
// Logs go to stderr through tracing-subscriber, so `--json` output stays
// clean when piped. RUST_LOG overrides the -v levels.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use u_glyph::Xorshift32;
use u_style::{CatalogEntry, MatchKind, Platform, Resolution, registry};
use u_variant::{Engine, EngineConfig, Variant};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "u-fonts", version, about = "Unicode text styler: bold, cursive, zalgo, upside-down and more")]
struct Cli {
    /// Engine config file (TOML).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render text as a list of styled variants.
    Render {
        /// Style key, slug or free-text name ("bold", "Instagram Cursive Fonts").
        style: String,

        /// Text to render; words are joined with spaces. Empty renders demo text.
        text: Vec<String>,

        /// Number of variants [default: from config].
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Emit the JSON response instead of a table.
        #[arg(long)]
        json: bool,

        /// Seed for randomized styles, for reproducible output.
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Show which style a slug or name resolves to.
    Resolve {
        slug: String,
    },

    /// List every built-in style, grouped by category.
    Styles,

    /// List `/{platform}/{style}` landing paths.
    Catalog {
        /// Only this platform.
        #[arg(long)]
        platform: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn filter_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,u_fonts=debug,u_variant=debug,u_style=debug,u_glyph=debug",
        _ => "warn,u_fonts=trace,u_variant=trace,u_style=trace,u_glyph=trace",
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ─── Formatting ─────────────────────────────────────────────────────────────

fn format_variants(variants: &[Variant]) -> String {
    let width = variants.len().to_string().len();
    let mut out = String::new();
    for v in variants {
        let _ = writeln!(out, "{:>width$}  {}", v.id, v.rendered_text);
    }
    out
}

fn match_label(kind: MatchKind) -> String {
    match kind {
        MatchKind::Exact => "exact key".to_string(),
        MatchKind::Stem => "stem".to_string(),
        MatchKind::Keyword(k) => format!("keyword \"{k}\""),
        MatchKind::Fallback => "fallback".to_string(),
    }
}

fn format_resolution(resolution: &Resolution) -> String {
    format!(
        "{} ({}) via {}\n",
        resolution.style.key,
        resolution.style.display_name,
        match_label(resolution.matched)
    )
}

fn format_styles() -> String {
    let mut out = String::new();
    for (category, styles) in registry::by_category() {
        let _ = writeln!(out, "{}:", category.name());
        for style in styles {
            let _ = writeln!(out, "  {:<34} {}", style.key, style.display_name);
        }
    }
    out
}

fn format_catalog(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(out, "{:<52} {}", e.path, e.display_name);
    }
    out
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn catalog_for(platform: Option<&str>) -> Result<Vec<CatalogEntry>> {
    let entries = u_style::catalog();
    let Some(slug) = platform else {
        return Ok(entries);
    };
    let platform = Platform::from_slug(slug).with_context(|| {
        let known: Vec<_> = Platform::all().iter().map(|p| p.slug()).collect();
        format!("unknown platform '{slug}' (known: {})", known.join(", "))
    })?;
    Ok(entries.into_iter().filter(|e| e.platform == platform).collect())
}

fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Render { style, text, count, json, seed } => {
            let count = count.unwrap_or(config.default_count);
            let mut engine = Engine::new(config);
            if let Some(seed) = seed {
                engine = engine.with_entropy(Xorshift32::new(seed));
            }
            let text = text.join(" ");
            debug!(style = %style, count, "render");

            let response = engine.respond(&style, &text, count);
            if json {
                let mut body = response.to_json_pretty().context("serializing response")?;
                body.push('\n');
                Ok(body)
            } else {
                Ok(format_variants(&response.variants))
            }
        }
        Command::Resolve { slug } => {
            let engine = Engine::new(config);
            Ok(format_resolution(&engine.resolve_style(&slug)))
        }
        Command::Styles => Ok(format_styles()),
        Command::Catalog { platform, json } => {
            let entries = catalog_for(platform.as_deref())?;
            if json {
                let mut body = serde_json::to_string_pretty(&entries).context("serializing catalog")?;
                body.push('\n');
                Ok(body)
            } else {
                Ok(format_catalog(&entries))
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = run(cli)?;
    print!("{output}");
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
