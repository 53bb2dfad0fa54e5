//! Catalog listing command.
//!
//! Prints every decoded entry of one catalog: idiom, resolved color
//! space and canonical channels.

use crate::ListArgs;
use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use acat_core::{CapabilityTier, CatalogDecoder, CatalogDocument, ColorAssetEntry};

/// Runs the list command.
pub fn run(args: ListArgs, tier: CapabilityTier) -> Result<()> {
    let doc = CatalogDecoder::with_tier(tier)
        .decode_file(&args.input)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    debug!(entries = doc.len(), ?tier, "decoded catalog");

    if args.json {
        print_json(&doc)?;
    } else {
        print_text(&args, &doc);
    }

    Ok(())
}

/// Prints entries in human-readable text format.
fn print_text(args: &ListArgs, doc: &CatalogDocument) {
    println!("{}", args.input.display());
    println!("  Entries: {}", doc.len());

    for entry in doc.iter() {
        let [r, g, b, a] = entry.color.components();
        let gamut = if entry.color.is_wide_gamut() {
            " (wide gamut)"
        } else {
            ""
        };
        println!(
            "  {:<10} {}{}  r={:.3} g={:.3} b={:.3} a={:.3}",
            idiom_label(entry),
            entry.color.color_space.as_str(),
            gamut,
            r,
            g,
            b,
            a,
        );
    }
}

/// Prints entries as a JSON array.
fn print_json(doc: &CatalogDocument) -> Result<()> {
    let entries: Vec<_> = doc
        .iter()
        .map(|entry| {
            json!({
                "idiom": entry.idiom_token,
                "recognized": entry.idiom.is_some(),
                "color-space": entry.color.color_space.as_str(),
                "wide-gamut": entry.color.is_wide_gamut(),
                "components": entry.color.components(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

/// Idiom column label; unrecognized tokens are shown raw, marked.
fn idiom_label(entry: &ColorAssetEntry) -> String {
    match entry.idiom {
        Some(idiom) => idiom.as_str().to_string(),
        None => format!("{}?", entry.idiom_token),
    }
}
