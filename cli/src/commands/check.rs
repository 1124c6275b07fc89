use iprange_core::{RangeError, RangeSpec};
use tracing::{debug, info, warn};

use crate::terminal::print;

/// Reports whether `target` describes a usable range. Never fails, only answers.
pub fn check(target: &str) -> bool {
    let valid = match assess(target) {
        Ok(()) => {
            info!("{target} is a valid range");
            true
        }
        Err(reason) => {
            warn!("{target} is not a valid range");
            debug!("Reason: {reason}");
            false
        }
    };

    print::verdict(valid);
    valid
}

/// Goes through the same parsing as `walk` and `info`, so all three agree on `target`.
fn assess(target: &str) -> Result<(), RangeError> {
    let spec: RangeSpec = target.parse()?;
    iprange_core::resolve(&spec).map(drop)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
