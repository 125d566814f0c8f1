//! Probabilistic point-defense resolution.
//!
//! An anti-missile burst is a contest of two strength ratings: both
//! sides draw a uniform integer below their strength, and the missile
//! dies only if the defender's draw is strictly higher. Ties favor the
//! missile, so even matched strengths leave it alive.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Resolve one point-defense contest. Draws two independent uniform
/// integers `d ∈ [0, defender)` and `a ∈ [0, attacker)`; the missile is
/// destroyed iff `d > a`.
///
/// Strengths are expected to be positive. A zero defender strength never
/// destroys; a zero attacker strength is rolled as 1 to keep the draw
/// well-defined.
pub fn resolve(rng: &mut ChaCha8Rng, defender: u32, attacker: u32) -> bool {
    if defender == 0 {
        return false;
    }
    let d = rng.gen_range(0..defender);
    let a = rng.gen_range(0..attacker.max(1));
    d > a
}
