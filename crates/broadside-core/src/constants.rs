//! Tuning constants for the gunnery model.

/// Hardpoint offsets are authored in @2x art coordinates; mounts store
/// them scaled down to hull coordinates.
pub const HARDPOINT_SCALE: f64 = 0.5;

/// Fraction of a weapon's travel range at which laterally offset gun
/// mounts are angled to converge.
pub const CONVERGENCE_RANGE_FRACTION: f64 = 0.9;
