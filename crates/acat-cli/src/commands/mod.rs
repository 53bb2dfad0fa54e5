//! Command implementations.

use anyhow::{Result, bail};

use acat_core::CapabilityTier;

pub mod check;
pub mod list;

/// Maps the numeric `--tier` flag to a capability tier.
pub fn parse_tier(tier: u8) -> Result<CapabilityTier> {
    match tier {
        0 => Ok(CapabilityTier::Tier0),
        1 => Ok(CapabilityTier::Tier1),
        2 => Ok(CapabilityTier::Tier2),
        _ => bail!("Unsupported capability tier: {} (expected 0, 1 or 2)", tier),
    }
}
