//! ECS glue for the weapon banks.
//!
//! Reads hull and target components out of the world, drives the bank,
//! and applies the resulting side effects back onto the hull. Target
//! and missile handles are resolved against the live world immediately
//! before use; a handle that no longer resolves degrades to the
//! aim-at-facing fallback rather than aiming at stale state.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use broadside_core::components::{AmmoMagazine, Facing, MissileThreat};
use broadside_core::types::{Position, Velocity};
use broadside_core::weapons::WeaponCatalog;

use crate::bank::WeaponBank;
use crate::events::{Discharge, EffectSpawn, ProjectileSpawn};
use crate::mount::{MissileFrame, ShooterFrame, TargetFrame};

/// Advance every weapon bank in the world by one tick.
pub fn step(world: &mut World) {
    for (_entity, bank) in world.query_mut::<&mut WeaponBank>() {
        bank.step();
    }
}

/// Fire one mount of the shooter's bank at its current target. Returns
/// whether a projectile was emitted.
pub fn fire_mount(
    world: &mut World,
    catalog: &WeaponCatalog,
    shooter: Entity,
    index: usize,
    target: Option<Entity>,
    projectiles: &mut Vec<ProjectileSpawn>,
) -> bool {
    let frame = match shooter_frame(world, shooter) {
        Some(frame) => frame,
        None => return false,
    };
    let target = target.and_then(|t| target_frame(world, t));

    let discharge = match world.get::<&mut WeaponBank>(shooter) {
        Ok(mut bank) => bank.fire_mount(catalog, index, &frame, target.as_ref(), projectiles),
        Err(_) => None,
    };
    match discharge {
        Some(discharge) => {
            apply_discharge(world, shooter, &discharge);
            true
        }
        None => false,
    }
}

/// Fire one mount as point defense against `missile`. Returns whether
/// the missile should be destroyed. A missile that no longer resolves
/// in the world is a no-op.
pub fn fire_anti_missile(
    world: &mut World,
    catalog: &WeaponCatalog,
    shooter: Entity,
    index: usize,
    missile: Entity,
    rng: &mut ChaCha8Rng,
    effects: &mut Vec<EffectSpawn>,
) -> bool {
    let frame = match shooter_frame(world, shooter) {
        Some(frame) => frame,
        None => return false,
    };
    let missile = match missile_frame(world, missile) {
        Some(missile) => missile,
        None => return false,
    };

    let shot = match world.get::<&mut WeaponBank>(shooter) {
        Ok(mut bank) => {
            bank.fire_anti_missile_mount(catalog, index, &frame, &missile, rng, effects)
        }
        Err(_) => None,
    };
    match shot {
        Some(shot) => {
            apply_discharge(world, shooter, &shot.discharge);
            shot.destroyed
        }
        None => false,
    }
}

/// Read the shooter's kinematic frame. `None` when the entity lacks the
/// hull components (nothing to fire from).
fn shooter_frame(world: &World, shooter: Entity) -> Option<ShooterFrame> {
    let mut query = world
        .query_one::<(&Position, &Velocity, &Facing)>(shooter)
        .ok()?;
    let (position, velocity, facing) = query.get()?;
    Some(ShooterFrame {
        entity: shooter,
        position: *position,
        velocity: *velocity,
        facing: facing.bearing,
    })
}

/// Resolve a target handle against the live world. A despawned or
/// component-less target resolves to `None`.
fn target_frame(world: &World, target: Entity) -> Option<TargetFrame> {
    let mut query = world.query_one::<(&Position, &Velocity)>(target).ok()?;
    let (position, velocity) = query.get()?;
    Some(TargetFrame {
        position: *position,
        velocity: *velocity,
    })
}

/// Resolve an incoming missile against the live world.
fn missile_frame(world: &World, missile: Entity) -> Option<MissileFrame> {
    let mut query = world
        .query_one::<(&Position, &MissileThreat)>(missile)
        .ok()?;
    let (position, threat) = query.get()?;
    Some(MissileFrame {
        position: *position,
        strength: threat.strength,
    })
}

/// Apply a shot's side effects to the hull: recoil onto its velocity,
/// one round out of its magazine.
fn apply_discharge(world: &mut World, shooter: Entity, discharge: &Discharge) {
    if let Some(impulse) = discharge.impulse {
        if let Ok(mut velocity) = world.get::<&mut Velocity>(shooter) {
            velocity.x += impulse.x;
            velocity.y += impulse.y;
        }
    }
    if let Some(ammo) = discharge.ammo {
        if let Ok(mut magazine) = world.get::<&mut AmmoMagazine>(shooter) {
            if let Some(rounds) = magazine.rounds.get_mut(&ammo) {
                *rounds = rounds.saturating_sub(1);
            }
        }
    }
}
