//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Gunnery logic lives in the sim crate's systems, not here.
//! `Position` and `Velocity` from `types` double as components.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::weapons::WeaponId;

/// Hull orientation as a bearing in radians, 0 = North, clockwise.
/// Independent of velocity; a hull can drift sideways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub bearing: f64,
}

/// Ammunition stocks carried by a hull, keyed by weapon type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmmoMagazine {
    pub rounds: HashMap<WeaponId, u32>,
}

/// Marks an entity as an incoming missile and carries the penetration
/// strength it brings to a point-defense contest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MissileThreat {
    pub strength: u32,
}
