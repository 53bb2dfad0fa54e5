//! Catalog document decoding.
//!
//! This module handles parsing a color-set `Contents.json` document into
//! a [`CatalogDocument`]: an ordered sequence of [`ColorAssetEntry`]
//! values, each carrying an idiom tag, a resolved color space and a
//! canonical 4-channel color.
//!
//! # Format
//!
//! ```text
//! {
//!   "colors": [
//!     {
//!       "idiom": "<string>",
//!       "color": {
//!         "color-space": "<string>",
//!         "components": {
//!           "alpha": <number|string>,   // optional, default 1.0
//!           "red":   <number|string>,   // optional, default 0.0
//!           "green": <number|string>,   // optional, default 0.0
//!           "blue":  <number|string>,   // optional, default 0.0
//!           "white": <number|string>    // optional; overrides red/green/blue
//!         }
//!       }
//!     }, ...
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use acat_core::CatalogDocument;
//!
//! let doc = CatalogDocument::from_file("Colors.xcassets/Accent.colorset/Contents.json")?;
//! for entry in doc.iter() {
//!     println!("{}: {:?}", entry.idiom_token, entry.color.components());
//! }
//! ```
//!
//! Decoding is a pure, independent transformation of one document: no
//! caching, no shared state, safe to run concurrently on different
//! documents without coordination.

use std::path::Path;

use serde_json::{Map, Value};

use crate::channel;
use crate::colorspace::{CapabilityTier, ColorSpaceId};
use crate::error::{CatalogError, CatalogResult};
use crate::idiom::Idiom;

/// Normalized 4-channel color with its resolved color space.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalColor {
    /// Alpha channel. Defaults to 1.0 when absent.
    pub alpha: f64,
    /// Red channel. Defaults to 0.0 when absent.
    pub red: f64,
    /// Green channel. Defaults to 0.0 when absent.
    pub green: f64,
    /// Blue channel. Defaults to 0.0 when absent.
    pub blue: f64,
    /// Raw color-space label as written in the source.
    pub color_space_token: String,
    /// Resolved color-space identifier.
    pub color_space: ColorSpaceId,
}

impl CanonicalColor {
    /// Returns the channels as `[red, green, blue, alpha]`, the order
    /// native color constructors expect.
    #[inline]
    pub fn components(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Checks if the resolved space is the wide-gamut Display P3 space.
    #[inline]
    pub fn is_wide_gamut(&self) -> bool {
        self.color_space.is_wide_gamut()
    }
}

/// One color variant from a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssetEntry {
    /// Raw idiom label as written in the source. Always present.
    pub idiom_token: String,
    /// Device class derived from the token; `None` for unrecognized
    /// tokens (never an error).
    pub idiom: Option<Idiom>,
    /// The resolved color payload.
    pub color: CanonicalColor,
}

/// A decoded color-asset catalog.
///
/// Entries keep the source document's order; catalogs may intentionally
/// contain several entries differentiated only by idiom.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    colors: Vec<ColorAssetEntry>,
}

impl CatalogDocument {
    /// Returns all entries in source order.
    #[inline]
    pub fn colors(&self) -> &[ColorAssetEntry] {
        &self.colors
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Checks if the catalog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorAssetEntry> {
        self.colors.iter()
    }

    /// Selects the variant for a device class.
    ///
    /// Returns the first entry whose idiom matches exactly, falling back
    /// to the first universal entry. Entries with unrecognized idiom
    /// tokens are never selected implicitly.
    pub fn entry_for_idiom(&self, idiom: Idiom) -> Option<&ColorAssetEntry> {
        self.colors
            .iter()
            .find(|e| e.idiom == Some(idiom))
            .or_else(|| {
                self.colors
                    .iter()
                    .find(|e| e.idiom == Some(Idiom::Unspecified))
            })
    }

    /// Decodes a catalog from a JSON string with the default decoder.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        CatalogDecoder::new().decode_str(json)
    }

    /// Decodes a catalog from raw bytes with the default decoder.
    pub fn from_slice(bytes: &[u8]) -> CatalogResult<Self> {
        CatalogDecoder::new().decode_slice(bytes)
    }

    /// Decodes a catalog file with the default decoder.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        CatalogDecoder::new().decode_file(path)
    }
}

/// Catalog decoder with caller configuration.
///
/// The only knob is the target environment's [`CapabilityTier`], which
/// drives color-space fallback; the default assumes full capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogDecoder {
    tier: CapabilityTier,
}

impl CatalogDecoder {
    /// Creates a decoder assuming full color-space capability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder for a restricted capability tier.
    pub fn with_tier(tier: CapabilityTier) -> Self {
        Self { tier }
    }

    /// Returns the configured capability tier.
    #[inline]
    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    /// Decodes a catalog from a JSON string.
    pub fn decode_str(&self, json: &str) -> CatalogResult<CatalogDocument> {
        let value: Value = serde_json::from_str(json)?;
        self.decode_value(&value)
    }

    /// Decodes a catalog from raw bytes.
    pub fn decode_slice(&self, bytes: &[u8]) -> CatalogResult<CatalogDocument> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.decode_value(&value)
    }

    /// Decodes a catalog file.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> CatalogResult<CatalogDocument> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.decode_str(&content)
    }

    /// Decodes a catalog from an already-parsed JSON value.
    ///
    /// All-or-nothing: any required field that is missing or has the
    /// wrong shape aborts the whole decode with an error naming the
    /// offending path. Unrecognized idiom and color-space *values* are
    /// tolerated and resolve to defaults.
    pub fn decode_value(&self, value: &Value) -> CatalogResult<CatalogDocument> {
        let root = as_object(value, "document")?;
        let colors = as_array(require(root, "document", "colors")?, "colors")?;

        let mut entries = Vec::with_capacity(colors.len());
        for (index, entry) in colors.iter().enumerate() {
            entries.push(self.decode_entry(entry, index)?);
        }

        Ok(CatalogDocument { colors: entries })
    }

    /// Decodes one entry object.
    fn decode_entry(&self, value: &Value, index: usize) -> CatalogResult<ColorAssetEntry> {
        let path = format!("colors[{index}]");
        let entry = as_object(value, &path)?;

        let idiom_token = require_str(entry, &path, "idiom")?.to_owned();
        let idiom = Idiom::from_token(&idiom_token);

        let color_path = format!("{path}.color");
        let color = as_object(require(entry, &path, "color")?, &color_path)?;
        let color = self.decode_color(color, &color_path)?;

        Ok(ColorAssetEntry {
            idiom_token,
            idiom,
            color,
        })
    }

    /// Decodes a color object: color space plus canonical channels.
    fn decode_color(
        &self,
        color: &Map<String, Value>,
        path: &str,
    ) -> CatalogResult<CanonicalColor> {
        let color_space_token = require_str(color, path, "color-space")?.to_owned();
        let color_space = ColorSpaceId::resolve(&color_space_token, self.tier);

        let components_path = format!("{path}.components");
        let components = as_object(require(color, path, "components")?, &components_path)?;

        let mut alpha = 1.0;
        let mut red = 0.0;
        let mut green = 0.0;
        let mut blue = 0.0;

        for (name, slot) in [
            ("alpha", &mut alpha),
            ("red", &mut red),
            ("green", &mut green),
            ("blue", &mut blue),
        ] {
            if let Some(value) = components.get(name) {
                *slot = channel::decode(value, &format!("{components_path}.{name}"))?;
            }
        }

        // Grayscale shorthand: applied after the literal channels, so a
        // single intensity value fans out to all three regardless of
        // field order in the source.
        if let Some(white) = components.get("white") {
            let white = channel::decode(white, &format!("{components_path}.white"))?;
            red = white;
            green = white;
            blue = white;
        }

        Ok(CanonicalColor {
            alpha,
            red,
            green,
            blue,
            color_space_token,
            color_space,
        })
    }
}

/// Returns a short name for a JSON value's shape, for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetches a required field from an object.
fn require<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> CatalogResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| CatalogError::missing(format!("{parent}.{key}"), "a value"))
}

/// Fetches a required string field from an object.
fn require_str<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> CatalogResult<&'a str> {
    let path = format!("{parent}.{key}");
    match object.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CatalogError::structural(path, "a string", type_name(other))),
        None => Err(CatalogError::missing(path, "a string")),
    }
}

/// Interprets a value as an object or fails structurally.
fn as_object<'a>(value: &'a Value, path: &str) -> CatalogResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CatalogError::structural(path, "an object", type_name(value)))
}

/// Interprets a value as an array or fails structurally.
fn as_array<'a>(value: &'a Value, path: &str) -> CatalogResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| CatalogError::structural(path, "an array", type_name(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> CatalogResult<CatalogDocument> {
        CatalogDecoder::new().decode_value(&value)
    }

    #[test]
    fn end_to_end_single_entry() {
        let doc = CatalogDocument::from_json_str(
            r#"{"colors":[{"idiom":"iphone","color":{"color-space":"srgb","components":{"red":1,"green":0,"blue":0,"alpha":1}}}]}"#,
        )
        .unwrap();

        assert_eq!(doc.len(), 1);
        let entry = &doc.colors()[0];
        assert_eq!(entry.idiom_token, "iphone");
        assert_eq!(entry.idiom, Some(Idiom::Phone));
        assert_eq!(entry.color.color_space, ColorSpaceId::Srgb);
        assert_eq!(entry.color.components(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn order_preserved() {
        let doc = decode(json!({
            "colors": [
                {"idiom": "universal", "color": {"color-space": "srgb", "components": {}}},
                {"idiom": "ipad", "color": {"color-space": "srgb", "components": {}}},
                {"idiom": "iphone", "color": {"color-space": "srgb", "components": {}}},
            ]
        }))
        .unwrap();

        let tokens: Vec<&str> = doc.iter().map(|e| e.idiom_token.as_str()).collect();
        assert_eq!(tokens, ["universal", "ipad", "iphone"]);
    }

    #[test]
    fn empty_catalog() {
        let doc = decode(json!({"colors": []})).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn channel_defaults() {
        let doc = decode(json!({
            "colors": [{"idiom": "universal", "color": {"color-space": "srgb", "components": {}}}]
        }))
        .unwrap();

        let color = &doc.colors()[0].color;
        assert_eq!(color.alpha, 1.0);
        assert_eq!([color.red, color.green, color.blue], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn white_shorthand_overrides_literals() {
        let doc = decode(json!({
            "colors": [{"idiom": "universal", "color": {
                "color-space": "gray-gamma-22",
                "components": {"white": "0.2", "red": 0.9}
            }}]
        }))
        .unwrap();

        let color = &doc.colors()[0].color;
        assert_eq!([color.red, color.green, color.blue], [0.2, 0.2, 0.2]);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn string_channels_decode() {
        let doc = decode(json!({
            "colors": [{"idiom": "universal", "color": {
                "color-space": "srgb",
                "components": {"red": "0.878", "green": "0.090", "blue": "0.313", "alpha": "1.000"}
            }}]
        }))
        .unwrap();

        let color = &doc.colors()[0].color;
        assert_eq!(color.components(), [0.878, 0.090, 0.313, 1.000]);
    }

    #[test]
    fn unknown_idiom_decodes_without_error() {
        let doc = decode(json!({
            "colors": [{"idiom": "watch", "color": {"color-space": "srgb", "components": {}}}]
        }))
        .unwrap();

        let entry = &doc.colors()[0];
        assert_eq!(entry.idiom_token, "watch");
        assert_eq!(entry.idiom, None);
    }

    #[test]
    fn tier_configuration_drives_resolution() {
        let json = json!({
            "colors": [{"idiom": "universal", "color": {"color-space": "display-P3", "components": {}}}]
        });

        let full = CatalogDecoder::new().decode_value(&json).unwrap();
        assert_eq!(full.colors()[0].color.color_space, ColorSpaceId::DisplayP3);
        assert!(full.colors()[0].color.is_wide_gamut());

        let legacy = CatalogDecoder::with_tier(CapabilityTier::Tier0)
            .decode_value(&json)
            .unwrap();
        assert_eq!(legacy.colors()[0].color.color_space, ColorSpaceId::Srgb);
        assert!(!legacy.colors()[0].color.is_wide_gamut());
        // The raw token is preserved either way.
        assert_eq!(legacy.colors()[0].color.color_space_token, "display-P3");
    }

    #[test]
    fn missing_color_space_names_path() {
        let err = decode(json!({
            "colors": [{"idiom": "universal", "color": {"components": {}}}]
        }))
        .unwrap_err();

        assert!(err.is_structural());
        assert_eq!(err.path(), Some("colors[0].color.color-space"));
    }

    #[test]
    fn missing_idiom_is_structural() {
        let err = decode(json!({
            "colors": [{"color": {"color-space": "srgb", "components": {}}}]
        }))
        .unwrap_err();

        assert!(err.is_structural());
        assert_eq!(err.path(), Some("colors[0].idiom"));
    }

    #[test]
    fn wrong_shape_entry_is_structural() {
        let err = decode(json!({"colors": ["red"]})).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("colors[0]"));

        let err = decode(json!({"colors": {}})).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("colors"));

        let err = decode(json!([])).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("document"));
    }

    #[test]
    fn bad_channel_aborts_whole_decode() {
        let err = decode(json!({
            "colors": [
                {"idiom": "universal", "color": {"color-space": "srgb", "components": {}}},
                {"idiom": "ipad", "color": {"color-space": "srgb", "components": {"green": "not-a-number"}}},
            ]
        }))
        .unwrap_err();

        assert!(err.is_schema_mismatch());
        assert_eq!(err.path(), Some("colors[1].color.components.green"));
    }

    #[test]
    fn syntax_error_surfaces_as_json() {
        let err = CatalogDocument::from_json_str("{\"colors\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn entry_for_idiom_prefers_exact_match() {
        let doc = decode(json!({
            "colors": [
                {"idiom": "universal", "color": {"color-space": "srgb", "components": {"white": 1}}},
                {"idiom": "tv", "color": {"color-space": "display-P3", "components": {"red": 1}}},
                {"idiom": "watch", "color": {"color-space": "srgb", "components": {}}},
            ]
        }))
        .unwrap();

        let tv = doc.entry_for_idiom(Idiom::Tv).unwrap();
        assert_eq!(tv.idiom, Some(Idiom::Tv));

        // No phone variant: falls back to universal.
        let phone = doc.entry_for_idiom(Idiom::Phone).unwrap();
        assert_eq!(phone.idiom, Some(Idiom::Unspecified));
    }

    #[test]
    fn entry_for_idiom_without_universal_fallback() {
        let doc = decode(json!({
            "colors": [{"idiom": "watch", "color": {"color-space": "srgb", "components": {}}}]
        }))
        .unwrap();

        assert!(doc.entry_for_idiom(Idiom::Phone).is_none());
    }
}
