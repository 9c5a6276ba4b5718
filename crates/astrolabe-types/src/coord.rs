// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Phase-Space Coordinate
// ─────────────────────────────────────────────────────────────────────
//! The (θ, φ, ρ) phase coordinate and its wraparound-aware metric.
//!
//! θ and φ are angular components held modulo 2π; ρ is a non-negative
//! radial magnitude. Coordinates are immutable values produced only by
//! the phase projector or the flux motor.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Golden ratio Φ.
pub const PHI: f64 = 1.618033988749895;

/// Cubic golden invariant Φ³ ≈ 4.236.
pub const PHI_CUBED: f64 = PHI * PHI * PHI;

/// Zero a non-finite component before it can poison the metric.
#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("non-finite coordinate component, zeroing");
        0.0
    }
}

/// Wrap an angle into [0, 2π).
#[inline]
pub fn wrap_angle(value: f64) -> f64 {
    let w = finite_or_zero(value).rem_euclid(TAU);
    // rem_euclid can land exactly on TAU after rounding near the seam.
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Shortest-arc gap between two wrapped angles, in [0, π].
#[inline]
pub fn arc_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    if d > PI {
        TAU - d
    } else {
        d
    }
}

/// Phase-space coordinate (θ, φ, ρ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseCoordinate {
    /// Angular component, wrapped into [0, 2π).
    pub theta: f64,
    /// Angular component, wrapped into [0, 2π).
    pub phi: f64,
    /// Radial magnitude, >= 0.
    pub rho: f64,
}

impl PhaseCoordinate {
    /// Construct a coordinate, wrapping θ/φ and flooring ρ at zero.
    pub fn new(theta: f64, phi: f64, rho: f64) -> Self {
        Self {
            theta: wrap_angle(theta),
            phi: wrap_angle(phi),
            rho: finite_or_zero(rho).max(0.0),
        }
    }

    /// The defined projection of empty input.
    pub fn origin() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            rho: 0.0,
        }
    }

    pub fn is_origin(&self) -> bool {
        self.theta == 0.0 && self.phi == 0.0 && self.rho == 0.0
    }

    /// Wraparound-aware distance: shortest arc on θ and φ, linear on ρ.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dt = arc_gap(self.theta, other.theta);
        let dp = arc_gap(self.phi, other.phi);
        let dr = self.rho - other.rho;
        (dt * dt + dp * dp + dr * dr).sqrt()
    }

    /// Bitwise identity key, used for read-path memoization.
    pub fn bit_key(&self) -> [u64; 3] {
        [
            self.theta.to_bits(),
            self.phi.to_bits(),
            self.rho.to_bits(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        let w = wrap_angle(1e9);
        assert!((0.0..TAU).contains(&w));
    }

    #[test]
    fn test_wrap_angle_non_finite() {
        assert_eq!(wrap_angle(f64::NAN), 0.0);
        assert_eq!(wrap_angle(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_arc_gap_short_way_around() {
        // 0.1 and 2π-0.1 are 0.2 apart across the seam.
        let gap = arc_gap(0.1, TAU - 0.1);
        assert!((gap - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_arc_gap_symmetric() {
        assert_eq!(arc_gap(1.0, 4.0), arc_gap(4.0, 1.0));
    }

    #[test]
    fn test_distance_self_is_zero() {
        let c = PhaseCoordinate::new(1.2, 3.4, 0.7);
        assert_eq!(c.distance_to(&c), 0.0);
    }

    #[test]
    fn test_distance_wraps() {
        let a = PhaseCoordinate::new(0.05, 0.0, 0.5);
        let b = PhaseCoordinate::new(TAU - 0.05, 0.0, 0.5);
        assert!(a.distance_to(&b) < 0.11);
    }

    #[test]
    fn test_rho_floored() {
        let c = PhaseCoordinate::new(0.0, 0.0, -0.3);
        assert_eq!(c.rho, 0.0);
    }

    #[test]
    fn test_origin() {
        assert!(PhaseCoordinate::origin().is_origin());
        assert!(!PhaseCoordinate::new(0.1, 0.0, 0.0).is_origin());
    }

    #[test]
    fn test_phi_cubed() {
        assert!((PHI_CUBED - 4.2360679).abs() < 1e-6);
    }
}
