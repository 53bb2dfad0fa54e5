//! # acat-core
//!
//! Decoder for color-asset catalogs: the `Contents.json` color-set
//! documents asset-catalog tooling produces.
//!
//! This crate turns one catalog document into a normalized in-memory
//! color model:
//!
//! - [`CatalogDocument`] - ordered sequence of decoded color variants
//! - [`ColorAssetEntry`] - one variant: idiom tag plus canonical color
//! - [`CanonicalColor`] - 4 channel floats plus resolved color space
//! - [`ColorSpaceId`] / [`CapabilityTier`] - tiered color-space resolution
//! - [`Idiom`] - device-class tag
//!
//! ## Design Philosophy
//!
//! Decoding is **strict about shapes, permissive about values**. A
//! missing required field or a wrong-typed container aborts the whole
//! decode with a path-carrying error; an unknown idiom or color-space
//! token resolves to a defined default so a partially-understood catalog
//! still decodes into something renderable. Channel values may be JSON
//! numbers or numeral strings interchangeably, since catalog tooling has
//! produced both.
//!
//! The decoder tags color spaces; it never converts between them, and it
//! never clamps channel values.
//!
//! ## Example
//!
//! ```
//! use acat_core::prelude::*;
//!
//! let doc = CatalogDocument::from_json_str(
//!     r#"{"colors":[{"idiom":"universal","color":{
//!         "color-space":"display-P3",
//!         "components":{"red":"1.0","green":0.5,"blue":0,"alpha":1}}}]}"#,
//! )?;
//!
//! let entry = doc.entry_for_idiom(Idiom::Phone).unwrap();
//! assert_eq!(entry.color.color_space, ColorSpaceId::DisplayP3);
//! assert!(entry.color.is_wide_gamut());
//! # Ok::<(), acat_core::CatalogError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod channel;
pub mod colorspace;
pub mod error;
pub mod idiom;

// Re-exports for convenience
pub use catalog::{CanonicalColor, CatalogDecoder, CatalogDocument, ColorAssetEntry};
pub use colorspace::{CapabilityTier, ColorSpaceId};
pub use error::{CatalogError, CatalogResult};
pub use idiom::Idiom;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use acat_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{CanonicalColor, CatalogDecoder, CatalogDocument, ColorAssetEntry};
    pub use crate::colorspace::{CapabilityTier, ColorSpaceId};
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::idiom::Idiom;
}
