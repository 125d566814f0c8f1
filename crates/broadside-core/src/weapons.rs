//! Immutable weapon definitions and the catalog that interns them.

use serde::{Deserialize, Serialize};

/// Stable catalog index identifying a weapon type.
///
/// The streaming ledger and ammo linkage key on this id, never on a
/// reference or address, so definitions may be copied or reloaded freely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WeaponId(pub u32);

/// Stable catalog index identifying a visual effect template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EffectId(pub u32);

/// One weapon type. Immutable once cataloged; shared by id across every
/// hull carrying it. Supplied pre-parsed by the data loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponDef {
    pub name: String,
    /// Ticks between shots from a single mount.
    pub reload: u32,
    /// Projectile speed in world units per tick. Anti-missile weapons
    /// repurpose this as their detection radius.
    pub velocity: f64,
    /// Projectile lifetime in ticks.
    pub lifetime: u32,
    /// Recoil impulse applied to the hull per shot (0 = none).
    pub firing_force: f64,
    /// Energy drawn from the hull per shot.
    pub firing_energy: f64,
    /// Heat added to the hull per shot.
    pub firing_heat: f64,
    /// Projectiles home on their target.
    pub homing: bool,
    /// Penetration strength this weapon's projectile brings to a
    /// point-defense contest. Nonzero marks a missile weapon.
    pub missile_strength: u32,
    /// Point-defense strength. Nonzero marks an anti-missile weapon.
    pub anti_missile: u32,
    /// Only installable on turret mounts.
    pub turret_only: bool,
    /// Ammo item consumed per shot, if any.
    pub ammo: Option<WeaponId>,
    /// Effect templates placed by an anti-missile burst, with repeat
    /// counts.
    pub hit_effects: Vec<(EffectId, u32)>,
}

impl WeaponDef {
    /// Effective projectile travel range.
    pub fn range(&self) -> f64 {
        self.velocity * self.lifetime as f64
    }

    /// Whether installed copies of this weapon share one fire-rate
    /// throttle. Missiles and anti-missiles do not stream.
    pub fn streams(&self) -> bool {
        self.missile_strength == 0 && self.anti_missile == 0
    }

    pub fn is_anti_missile(&self) -> bool {
        self.anti_missile > 0
    }
}

/// Append-only registry of weapon definitions, indexed by `WeaponId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponCatalog {
    defs: Vec<WeaponDef>,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a definition, returning its stable id.
    pub fn add(&mut self, def: WeaponDef) -> WeaponId {
        let id = WeaponId(self.defs.len() as u32);
        self.defs.push(def);
        id
    }

    /// Resolve an id. Unknown ids resolve to `None`.
    pub fn get(&self, id: WeaponId) -> Option<&WeaponDef> {
        self.defs.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
