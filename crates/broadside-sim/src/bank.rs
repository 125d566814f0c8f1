//! The weapon bank: every mount on a hull plus the shared stream
//! throttles that pace multiple copies of the same weapon.

use std::collections::HashMap;

use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use broadside_core::enums::MountKind;
use broadside_core::state::{BankView, MountView, StreamView};
use broadside_core::weapons::{WeaponCatalog, WeaponId};

use crate::events::{AntiMissileShot, Discharge, EffectSpawn, ProjectileSpawn};
use crate::mount::{MissileFrame, ShooterFrame, TargetFrame, WeaponMount};

/// Ordered collection of weapon mounts. The mount index is the stable
/// public identity used by callers; the mount set is fixed once the
/// hull template is built.
#[derive(Debug, Clone, Default)]
pub struct WeaponBank {
    mounts: Vec<WeaponMount>,
    /// Shared reload countdown per streamed weapon type, keyed by
    /// catalog id. An entry exists only while at least one copy of the
    /// type is installed; positive means the type as a whole is still
    /// recycling.
    stream_reload: HashMap<WeaponId, i32>,
}

impl WeaponBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mount. Template-construction time only.
    /// `offset` is in @2x art coordinates (x = starboard, y = forward).
    pub fn add_mount(&mut self, offset: DVec2, kind: MountKind) {
        self.mounts.push(WeaponMount::new(offset, kind));
    }

    pub fn mounts(&self) -> &[WeaponMount] {
        &self.mounts
    }

    /// Number of mounts currently holding the given weapon type.
    pub fn installed_count(&self, weapon: WeaponId) -> u32 {
        self.mounts
            .iter()
            .filter(|m| m.weapon() == Some(weapon))
            .count() as u32
    }

    /// Remaining shared reload for a streamed type, if any copy of it is
    /// installed.
    pub fn stream_remaining(&self, weapon: WeaponId) -> Option<i32> {
        self.stream_reload.get(&weapon).copied()
    }

    /// Whether the mount at `index` exists, is occupied, and has
    /// finished reloading.
    pub fn is_ready(&self, index: usize) -> bool {
        self.mounts.get(index).map_or(false, |m| m.is_ready())
    }

    /// Install (`delta` > 0) or remove (`delta` < 0) copies of a weapon
    /// type, filling or emptying kind-compatible mounts in mount order.
    /// Over-requests are truncated to the compatible mounts available;
    /// the signed count actually applied is returned so a loader that
    /// cares can detect the shortfall.
    pub fn set_loadout(&mut self, catalog: &WeaponCatalog, weapon: WeaponId, delta: i32) -> i32 {
        let def = match catalog.get(weapon) {
            Some(def) => def,
            None => return 0,
        };
        if delta == 0 {
            return 0;
        }

        let mut applied: i32 = 0;
        if delta > 0 {
            let kind = if def.turret_only {
                MountKind::Turret
            } else {
                MountKind::Gun
            };
            for mount in &mut self.mounts {
                if applied == delta {
                    break;
                }
                if mount.weapon().is_none() && mount.kind() == kind && mount.install(weapon, def) {
                    applied += 1;
                }
            }
        } else {
            for mount in &mut self.mounts {
                if applied == delta {
                    break;
                }
                if mount.weapon() == Some(weapon) {
                    mount.uninstall();
                    applied -= 1;
                }
            }
        }

        // Missiles and anti-missiles do not stream; everything else
        // shares one throttle per type while any copy is installed.
        if def.streams() && applied != 0 {
            *self.stream_reload.entry(weapon).or_insert(0) += applied;
            if self.installed_count(weapon) == 0 {
                self.stream_reload.remove(&weapon);
            }
        }
        applied
    }

    /// Advance one simulation tick: every mount's reload, then the
    /// shared stream countdowns. A type with N installed copies recovers
    /// its shared throttle N per tick.
    pub fn step(&mut self) {
        let mut counts: HashMap<WeaponId, i32> = HashMap::new();
        for mount in &mut self.mounts {
            mount.step();
            if let Some(weapon) = mount.weapon() {
                *counts.entry(weapon).or_insert(0) += 1;
            }
        }
        for (weapon, remaining) in &mut self.stream_reload {
            if *remaining > 0 {
                *remaining -= counts.get(weapon).copied().unwrap_or(0);
            }
        }
    }

    /// Fire the mount at `index`. Silently refuses (returning `None`)
    /// when the index is out of range, the mount is not ready, the
    /// installed weapon is unknown to the catalog, or the type's shared
    /// stream countdown is still positive.
    pub fn fire_mount(
        &mut self,
        catalog: &WeaponCatalog,
        index: usize,
        shooter: &ShooterFrame,
        target: Option<&TargetFrame>,
        projectiles: &mut Vec<ProjectileSpawn>,
    ) -> Option<Discharge> {
        if !self.is_ready(index) {
            return None;
        }
        let id = self.mounts[index].weapon()?;
        let def = catalog.get(id)?;
        if self.stream_reload.get(&id).map_or(false, |r| *r > 0) {
            return None;
        }

        let discharge = self.mounts[index].fire(id, def, shooter, target, projectiles);
        if let Some(remaining) = self.stream_reload.get_mut(&id) {
            // Keep the shared countdown in lockstep with the mount that
            // just fired.
            *remaining += def.reload as i32;
        }
        Some(discharge)
    }

    /// Fire the mount at `index` as point defense against an incoming
    /// missile. Readiness-gated like `fire_mount`; anti-missile weapons
    /// never stream, so no shared countdown applies.
    pub fn fire_anti_missile_mount(
        &mut self,
        catalog: &WeaponCatalog,
        index: usize,
        shooter: &ShooterFrame,
        missile: &MissileFrame,
        rng: &mut ChaCha8Rng,
        effects: &mut Vec<EffectSpawn>,
    ) -> Option<AntiMissileShot> {
        if !self.is_ready(index) {
            return None;
        }
        let id = self.mounts[index].weapon()?;
        let def = catalog.get(id)?;
        self.mounts[index].fire_anti_missile(def, shooter, missile, rng, effects)
    }

    /// Build the serializable status view for display panels.
    pub fn view(&self, catalog: &WeaponCatalog) -> BankView {
        let mounts = self
            .mounts
            .iter()
            .map(|m| MountView {
                kind: m.kind(),
                weapon: m.weapon(),
                reload: m.reload(),
                reload_total: m
                    .weapon()
                    .and_then(|id| catalog.get(id))
                    .map_or(0, |def| def.reload),
                offset_x: m.offset().x,
                offset_y: m.offset().y,
            })
            .collect();

        let mut streams: Vec<StreamView> = self
            .stream_reload
            .iter()
            .map(|(&weapon, &remaining)| StreamView { weapon, remaining })
            .collect();
        // Map iteration order is unstable; present streams by id.
        streams.sort_by_key(|s| s.weapon);

        BankView {
            mounts,
            streams,
            ready_mounts: self.mounts.iter().filter(|m| m.is_ready()).count() as u32,
        }
    }
}
