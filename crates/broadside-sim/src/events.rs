//! Records handed to the owning world's spawn sinks.
//!
//! Entity-bearing records live here rather than in the vocabulary
//! crate; `hecs::Entity` never crosses the UI/serde boundary.

use glam::DVec2;
use hecs::Entity;

use broadside_core::types::{Position, Velocity};
use broadside_core::weapons::{EffectId, WeaponId};

/// One projectile to be spawned into the world.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub shooter: Entity,
    /// World position of the mount at the moment of firing.
    pub origin: Position,
    /// Aim bearing (radians, 0 = North, clockwise).
    pub bearing: f64,
    pub weapon: WeaponId,
}

/// One visual effect to be spawned into the world.
#[derive(Debug, Clone, Copy)]
pub struct EffectSpawn {
    pub effect: EffectId,
    pub position: Position,
    pub velocity: Velocity,
    /// Orientation bearing (radians, 0 = North, clockwise).
    pub bearing: f64,
}

/// Side effects of a shot, applied to the hull by the gunnery system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discharge {
    /// Recoil as a velocity change, opposite the aim direction.
    pub impulse: Option<DVec2>,
    /// Ammo item to expend, one round.
    pub ammo: Option<WeaponId>,
    /// Energy drawn from the hull.
    pub energy: f64,
    /// Heat added to the hull.
    pub heat: f64,
}

/// Outcome of a point-defense burst.
#[derive(Debug, Clone, Copy)]
pub struct AntiMissileShot {
    /// Whether the missile should be removed from the world.
    pub destroyed: bool,
    pub discharge: Discharge,
}
