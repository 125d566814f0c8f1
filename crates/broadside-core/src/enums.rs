//! Enumeration types shared across the gunnery crates.

use serde::{Deserialize, Serialize};

/// Mount hardware kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountKind {
    /// Fires along a fixed, convergence-adjusted hull-relative bearing.
    Gun,
    /// Slews to a computed lead bearing toward the current target.
    Turret,
}
