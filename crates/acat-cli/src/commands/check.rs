//! Catalog validation command.
//!
//! Decodes each given catalog and reports pass/fail per file. Exits
//! nonzero if any catalog fails to decode.

use crate::CheckArgs;
use anyhow::{Result, bail};
use tracing::debug;

use acat_core::{CapabilityTier, CatalogDecoder};

/// Runs the check command.
pub fn run(args: CheckArgs, tier: CapabilityTier, verbose: bool) -> Result<()> {
    let decoder = CatalogDecoder::with_tier(tier);
    let mut failed = 0usize;

    for path in &args.input {
        match decoder.decode_file(path) {
            Ok(doc) => {
                debug!(path = %path.display(), entries = doc.len(), "catalog ok");
                if verbose {
                    println!("ok      {} ({} entries)", path.display(), doc.len());
                } else {
                    println!("ok      {}", path.display());
                }
            }
            Err(err) => {
                failed += 1;
                println!("FAILED  {}: {}", path.display(), err);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} catalog(s) failed to decode", failed, args.input.len());
    }

    Ok(())
}
