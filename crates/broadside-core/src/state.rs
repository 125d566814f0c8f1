//! Serializable views of weapon-bank state for status panels.

use serde::{Deserialize, Serialize};

use crate::enums::MountKind;
use crate::weapons::WeaponId;

/// One mount's visible status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountView {
    pub kind: MountKind,
    pub weapon: Option<WeaponId>,
    /// Ticks until this mount can fire again.
    pub reload: u32,
    /// Full reload of the installed weapon (0 when empty).
    pub reload_total: u32,
    /// Hull-frame hardpoint position (x = starboard, y = forward).
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Shared throttle status for one streamed weapon type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamView {
    pub weapon: WeaponId,
    /// Remaining shared reload; positive means the type is recycling.
    pub remaining: i32,
}

/// Complete weapon-bank status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankView {
    pub mounts: Vec<MountView>,
    pub streams: Vec<StreamView>,
    /// Mounts currently able to fire.
    pub ready_mounts: u32,
}
