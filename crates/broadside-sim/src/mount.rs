//! A single weapon mount: one hardpoint, its occupant, and its reload
//! countdown.

use std::f64::consts::TAU;

use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use broadside_core::constants::{CONVERGENCE_RANGE_FRACTION, HARDPOINT_SCALE};
use broadside_core::enums::MountKind;
use broadside_core::types::{bearing_unit, mount_to_world, Position, Velocity};
use broadside_core::weapons::{WeaponDef, WeaponId};

use crate::events::{AntiMissileShot, Discharge, EffectSpawn, ProjectileSpawn};
use crate::intercept;
use crate::point_defense;

/// Kinematic state of the firing hull, read once per shot.
#[derive(Debug, Clone, Copy)]
pub struct ShooterFrame {
    pub entity: hecs::Entity,
    pub position: Position,
    pub velocity: Velocity,
    /// Hull facing bearing (radians, 0 = North, clockwise).
    pub facing: f64,
}

/// Kinematic state of a live target, resolved immediately before aiming.
#[derive(Debug, Clone, Copy)]
pub struct TargetFrame {
    pub position: Position,
    pub velocity: Velocity,
}

/// An incoming missile under point-defense consideration.
#[derive(Debug, Clone, Copy)]
pub struct MissileFrame {
    pub position: Position,
    pub strength: u32,
}

/// One weapon attachment point on a hull. Created once at template
/// construction; only its occupant and reload state change afterward.
#[derive(Debug, Clone)]
pub struct WeaponMount {
    offset: DVec2,
    kind: MountKind,
    weapon: Option<WeaponId>,
    reload: u32,
    /// Tilt applied to gun-mount shots so laterally offset guns cross
    /// near `CONVERGENCE_RANGE_FRACTION` of the weapon's range. Unused
    /// for turret mounts; recomputed on every install.
    convergence: f64,
}

impl WeaponMount {
    /// `offset` is the hardpoint position in @2x art coordinates
    /// (x = starboard, y = forward); it is stored at hull scale.
    pub fn new(offset: DVec2, kind: MountKind) -> Self {
        Self {
            offset: offset * HARDPOINT_SCALE,
            kind,
            weapon: None,
            reload: 0,
            convergence: 0.0,
        }
    }

    pub fn kind(&self) -> MountKind {
        self.kind
    }

    /// Hull-frame position projectiles originate from.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn weapon(&self) -> Option<WeaponId> {
        self.weapon
    }

    /// Ticks until this mount can fire again.
    pub fn reload(&self) -> u32 {
        self.reload
    }

    pub fn convergence(&self) -> f64 {
        self.convergence
    }

    /// Occupied and done reloading.
    pub fn is_ready(&self) -> bool {
        self.weapon.is_some() && self.reload == 0
    }

    /// Advance the reload countdown by one tick.
    pub fn step(&mut self) {
        if self.reload > 0 {
            self.reload -= 1;
        }
    }

    /// Install a weapon. Rejected without any state change when the
    /// weapon demands a turret and this is a gun mount.
    pub fn install(&mut self, id: WeaponId, def: &WeaponDef) -> bool {
        if def.turret_only && self.kind == MountKind::Gun {
            return false;
        }
        self.weapon = Some(id);
        if self.kind == MountKind::Gun {
            // Shots from this hardpoint should cross the centerline at
            // distance d, so the tilt is asin(lateral / d). Clamped:
            // a weapon too short-ranged to converge gets the full tilt
            // rather than a NaN.
            let d = def.range() * CONVERGENCE_RANGE_FRACTION;
            self.convergence = if d > 0.0 {
                (self.offset.x * 0.5 / d).clamp(-1.0, 1.0).asin()
            } else {
                0.0
            };
        }
        true
    }

    /// Remove the occupant, if any.
    pub fn uninstall(&mut self) {
        self.weapon = None;
    }

    /// Fire the installed weapon. The bank has already checked
    /// readiness and stream throttling; `def` is the resolved
    /// definition of `id`.
    pub(crate) fn fire(
        &mut self,
        id: WeaponId,
        def: &WeaponDef,
        shooter: &ShooterFrame,
        target: Option<&TargetFrame>,
        projectiles: &mut Vec<ProjectileSpawn>,
    ) -> Discharge {
        let origin = shooter
            .position
            .translated(mount_to_world(self.offset, shooter.facing));

        let bearing = match (self.kind, target) {
            (MountKind::Gun, _) => shooter.facing + self.convergence,
            (MountKind::Turret, Some(target)) => {
                let mut p = origin.offset_to(&target.position);
                let v = target.velocity.delta(&shooter.velocity);
                if let Some(t) = intercept::intercept_time(p, v, def.velocity) {
                    // Only trust the extrapolation within the
                    // projectile's travel time; past that, shoot at
                    // where the target is now.
                    if t < def.lifetime as f64 {
                        p += v * t;
                    }
                }
                p.x.atan2(p.y)
            }
            (MountKind::Turret, None) => shooter.facing,
        }
        .rem_euclid(TAU);

        projectiles.push(ProjectileSpawn {
            shooter: shooter.entity,
            origin,
            bearing,
            weapon: id,
        });

        self.reload = def.reload;

        Discharge {
            impulse: (def.firing_force != 0.0).then(|| bearing_unit(bearing) * -def.firing_force),
            ammo: def.ammo,
            energy: def.firing_energy,
            heat: def.firing_heat,
        }
    }

    /// Attempt a point-defense burst against an incoming missile.
    /// Returns `None` without touching any state when this weapon has
    /// no point-defense strength or the missile is outside its
    /// detection radius.
    pub(crate) fn fire_anti_missile(
        &mut self,
        def: &WeaponDef,
        shooter: &ShooterFrame,
        missile: &MissileFrame,
        rng: &mut ChaCha8Rng,
        effects: &mut Vec<EffectSpawn>,
    ) -> Option<AntiMissileShot> {
        if def.anti_missile == 0 {
            return None;
        }

        // The velocity stat doubles as the detection radius.
        let origin = shooter
            .position
            .translated(mount_to_world(self.offset, shooter.facing));
        let offset = origin.offset_to(&missile.position);
        if offset.length() > def.velocity {
            return None;
        }

        // The burst itself is pure animation: effects at the midpoint
        // of the offset, oriented along it, carried with the hull.
        let burst = origin.translated(offset * 0.5);
        let bearing = offset.x.atan2(offset.y).rem_euclid(TAU);
        for &(effect, count) in &def.hit_effects {
            for _ in 0..count {
                effects.push(EffectSpawn {
                    effect,
                    position: burst,
                    velocity: shooter.velocity,
                    bearing,
                });
            }
        }

        self.reload = def.reload;

        Some(AntiMissileShot {
            destroyed: point_defense::resolve(rng, def.anti_missile, missile.strength),
            discharge: Discharge {
                impulse: None,
                ammo: def.ammo,
                energy: def.firing_energy,
                heat: def.firing_heat,
            },
        })
    }
}
