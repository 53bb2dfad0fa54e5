//! Color-space identifiers and capability-tiered name resolution.
//!
//! Catalogs name color spaces with string tokens (`"srgb"`,
//! `"display-P3"`, ...). Resolution maps a token to a [`ColorSpaceId`],
//! substituting a narrower fallback space when the target environment's
//! [`CapabilityTier`] is below what the literal space requires. The tier
//! is an explicit input rather than an ambient platform check, so
//! restricted environments (e.g. legacy-mode rendering) are testable.
//!
//! Resolution is total: unknown tokens resolve to [`ColorSpaceId::Srgb`]
//! so a partially-understood catalog still decodes into something
//! renderable. Spaces are *tagged*, never converted; no value transform
//! is implied by any identifier.

/// Identifier for a resolved color space.
///
/// [`LinearRgb`](ColorSpaceId::LinearRgb) exists only as the below-tier
/// fallback target for `"extended-linear-srgb"`; it is a distinct tag
/// from [`Srgb`](ColorSpaceId::Srgb) with no conversion semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceId {
    /// The sRGB color space. Also the universal fallback.
    Srgb,
    /// The Display P3 wide-gamut color space.
    DisplayP3,
    /// Grayscale with a 2.2 gamma.
    GrayGamma22,
    /// Extended-range grayscale.
    ExtendedGray,
    /// Extended-range sRGB.
    ExtendedSrgb,
    /// Extended-range linear sRGB.
    ExtendedLinearSrgb,
    /// Generic linear RGB (fallback for extended linear sRGB).
    LinearRgb,
}

/// Minimum feature tier of the target rendering environment.
///
/// Ordered: `Tier0 < Tier1 < Tier2`. Higher tiers support more advanced
/// color spaces. The default assumes full capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CapabilityTier {
    /// Baseline: sRGB and gamma-2.2 grayscale only.
    Tier0,
    /// Adds the Display P3 wide-gamut space.
    Tier1,
    /// Adds the extended-range spaces.
    #[default]
    Tier2,
}

impl ColorSpaceId {
    /// Resolves a color-space token against a capability tier.
    ///
    /// Exact-match, case-sensitive. When the literal space requires a
    /// higher tier than `tier`, the table's fallback space is returned;
    /// unknown tokens resolve to [`Srgb`](Self::Srgb). Never fails.
    pub fn resolve(token: &str, tier: CapabilityTier) -> Self {
        match token {
            "srgb" => Self::Srgb,
            "display-P3" => {
                if tier >= CapabilityTier::Tier1 {
                    Self::DisplayP3
                } else {
                    Self::Srgb
                }
            }
            "gray-gamma-22" => Self::GrayGamma22,
            "extended-gray" => {
                if tier >= CapabilityTier::Tier2 {
                    Self::ExtendedGray
                } else {
                    Self::GrayGamma22
                }
            }
            "extended-srgb" => {
                if tier >= CapabilityTier::Tier2 {
                    Self::ExtendedSrgb
                } else {
                    Self::Srgb
                }
            }
            "extended-linear-srgb" => {
                if tier >= CapabilityTier::Tier2 {
                    Self::ExtendedLinearSrgb
                } else {
                    Self::LinearRgb
                }
            }
            _ => Self::Srgb,
        }
    }

    /// Returns a display name for this color space.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::DisplayP3 => "Display P3",
            Self::GrayGamma22 => "Gray Gamma 2.2",
            Self::ExtendedGray => "Extended Gray",
            Self::ExtendedSrgb => "Extended sRGB",
            Self::ExtendedLinearSrgb => "Extended Linear sRGB",
            Self::LinearRgb => "Linear RGB",
        }
    }

    /// Checks if this is the Tier1 wide-gamut space (Display P3).
    ///
    /// A binary gamut classification for callers choosing between wide
    /// and standard rendering paths; every other space reports `false`.
    #[inline]
    pub fn is_wide_gamut(&self) -> bool {
        matches!(self, Self::DisplayP3)
    }
}
