// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Topology Constraints
// ─────────────────────────────────────────────────────────────────────
//! Structural constraint system over phase space.
//!
//! A locked region is forbidden: coordinates landing inside are
//! deterministically pushed out past the nearest face. Neutral regions
//! are annotations only. Ranges must not straddle the 0/2π seam.

use astrolabe_types::PhaseCoordinate;

const PUSH_MARGIN: f64 = 0.02;

/// Axis-aligned region in phase space.
#[derive(Debug, Clone)]
pub struct TopologyRegion {
    pub name: &'static str,
    pub theta_range: (f64, f64),
    pub phi_range: (f64, f64),
    pub rho_range: (f64, f64),
    /// Locked regions are forbidden; neutral ones are not enforced.
    pub locked: bool,
}

impl TopologyRegion {
    fn contains(&self, c: &PhaseCoordinate) -> bool {
        in_range(c.theta, self.theta_range)
            && in_range(c.phi, self.phi_range)
            && in_range(c.rho, self.rho_range)
    }
}

fn in_range(v: f64, (lo, hi): (f64, f64)) -> bool {
    (lo..=hi).contains(&v)
}

/// Minimal deterministic displacement past the nearer face.
fn push_out(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if !in_range(v, (lo, hi)) {
        return v;
    }
    if v - lo < hi - v {
        lo - PUSH_MARGIN
    } else {
        hi + PUSH_MARGIN
    }
}

/// Deterministic topological constraint system.
#[derive(Debug, Clone)]
pub struct Topology {
    regions: Vec<TopologyRegion>,
}

impl Default for Topology {
    /// Canonical topology: a neutral basin at the origin and one
    /// locked ridge.
    fn default() -> Self {
        Self::new(vec![
            TopologyRegion {
                name: "origin_basin",
                theta_range: (0.0, 0.05),
                phi_range: (0.0, 0.05),
                rho_range: (0.0, 0.15),
                locked: false,
            },
            TopologyRegion {
                name: "singular_ridge",
                theta_range: (1.20, 1.60),
                phi_range: (3.00, 3.60),
                rho_range: (0.70, 1.00),
                locked: true,
            },
        ])
    }
}

impl Topology {
    pub fn new(regions: Vec<TopologyRegion>) -> Self {
        Self { regions }
    }

    /// Unconstrained phase space (useful in tests).
    pub fn open() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Enforce constraints: a coordinate inside a locked region is
    /// pushed out past the nearest face of each axis.
    pub fn enforce(&self, coord: PhaseCoordinate) -> PhaseCoordinate {
        let mut c = coord;
        for region in self.regions.iter().filter(|r| r.locked) {
            if region.contains(&c) {
                c = PhaseCoordinate::new(
                    push_out(c.theta, region.theta_range),
                    push_out(c.phi, region.phi_range),
                    push_out(c.rho, region.rho_range),
                );
            }
        }
        c
    }
}
