//! Lead-aim intercept solver.
//!
//! Answers: how many ticks until a projectile fired now at a fixed
//! speed can meet a target moving at a constant relative velocity?

use glam::DVec2;

/// Smallest non-negative time `t` at which a projectile fired at `speed`
/// along the ideal bearing coincides with the target's extrapolated
/// position, given relative position `p` (target − shooter) and relative
/// velocity `v` (target − shooter).
///
/// `t` solves `|p + v·t| = speed·t`, i.e.
/// `(v·v − speed²)·t² + 2(p·v)·t + p·p = 0`.
///
/// Returns `None` when no non-negative solution exists. Never NaN.
pub fn intercept_time(p: DVec2, v: DVec2, speed: f64) -> Option<f64> {
    let a = v.dot(v) - speed * speed;
    let b = 2.0 * p.dot(v);
    let c = p.dot(p);

    if a == 0.0 {
        // Relative speed equals projectile speed: the quadratic
        // collapses to b·t + c = 0.
        if b == 0.0 {
            return (c == 0.0).then_some(0.0);
        }
        let t = -c / b;
        return (t >= 0.0).then_some(t);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();

    let r1 = (-b + root) / (2.0 * a);
    let r2 = (-b - root) / (2.0 * a);
    if r1 >= 0.0 && r2 >= 0.0 {
        Some(r1.min(r2))
    } else if r1 >= 0.0 || r2 >= 0.0 {
        Some(r1.max(r2))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_target() {
        // Target 100 units out, holding still; projectile at 10/tick
        // arrives in exactly 10 ticks.
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::ZERO, 10.0);
        assert_eq!(t, Some(10.0));
    }

    #[test]
    fn test_head_on_closure_takes_smaller_root() {
        // Closing at 20/tick against a 10/tick projectile: both roots
        // are non-negative; the first meeting is at 100 / 30.
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::new(-20.0, 0.0), 10.0)
            .expect("closing target must be interceptable");
        assert!((t - 100.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_receding_faster_than_projectile() {
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::new(20.0, 0.0), 10.0);
        assert_eq!(t, None);
    }

    #[test]
    fn test_crossing_target_out_of_reach() {
        // Perpendicular crossing at twice the projectile speed: the
        // discriminant goes negative. No NaN, just no solution.
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::new(0.0, 20.0), 10.0);
        assert_eq!(t, None);
    }

    #[test]
    fn test_degenerate_linear_closing() {
        // Relative speed equals projectile speed (a == 0); the linear
        // branch must still solve a direct closure: 100 − 10t = 10t.
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::new(-10.0, 0.0), 10.0);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn test_degenerate_linear_receding() {
        let t = intercept_time(DVec2::new(100.0, 0.0), DVec2::new(10.0, 0.0), 10.0);
        assert_eq!(t, None);
    }

    #[test]
    fn test_colocated_target() {
        let t = intercept_time(DVec2::ZERO, DVec2::new(10.0, 0.0), 10.0);
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_solution_is_finite() {
        // A sweep of awkward geometries: whatever comes back is a finite
        // non-negative time, never NaN or infinity.
        let cases = [
            (DVec2::new(100.0, 50.0), DVec2::new(-3.0, 7.0), 9.0),
            (DVec2::new(-40.0, 0.0), DVec2::new(0.0, 0.0), 0.0),
            (DVec2::new(0.0, 1.0), DVec2::new(1.0, -1.0), 1e-9),
            (DVec2::new(1e9, -1e9), DVec2::new(300.0, 300.0), 250.0),
        ];
        for (p, v, s) in cases {
            if let Some(t) = intercept_time(p, v, s) {
                assert!(t.is_finite() && t >= 0.0, "bad root {t} for {p:?} {v:?} {s}");
            }
        }
    }
}
