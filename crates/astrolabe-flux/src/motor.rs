// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Φ³ Flux Motor
// ─────────────────────────────────────────────────────────────────────
//! Deterministic candidate generation under low confidence.
//!
//! The motor does not read data; it perturbs. Each candidate is one
//! application of the Φ³ twist to the previous coordinate (c₀ = the
//! query):
//!
//! ```text
//!   Δθ = intensity · sin(φᵢ · Φ³ + kᵢ)
//!   Δφ = intensity · cos(θᵢ · Φ³ + kᵢ)
//!   ρ' = ρᵢ · (1 + intensity / Φ)      (rebounds off the ceiling)
//! ```
//!
//! The key stream kᵢ is a golden-ratio Weyl sequence on the unit
//! interval, u₀ = frac((seed mod 2³²)·Φ), uᵢ₊₁ = frac(uᵢ + Φ³),
//! kᵢ = uᵢ·2π. Distinct seeds walk distinguishable trajectories and
//! the whole sequence is restartable from (query, seed) alone.

use std::f64::consts::TAU;

use astrolabe_types::{Candidate, EngineConfig, PhaseCoordinate, PHI, PHI_CUBED};

/// Seeded Φ³ candidate generator.
pub struct FluxMotor {
    intensity: f64,
    rho_ceiling: f64,
    candidates: usize,
}

impl FluxMotor {
    /// At least one candidate is always produced.
    pub fn new(intensity: f64, rho_ceiling: f64, candidates: usize) -> Self {
        Self {
            intensity,
            rho_ceiling,
            candidates: candidates.max(1),
        }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self::new(cfg.flux_intensity, cfg.rho_ceiling, cfg.flux_candidates)
    }

    /// Generate the ordered candidate sequence for (query, seed).
    pub fn generate(&self, query: PhaseCoordinate, seed: u64) -> Vec<Candidate> {
        let mut u = ((seed % (1u64 << 32)) as f64 * PHI).fract();
        let mut current = query;
        let mut out = Vec::with_capacity(self.candidates);

        for index in 0..self.candidates {
            let key = u * TAU;
            current = self.perturb(current, key);
            out.push(Candidate {
                coordinate: current,
                origin: query,
                seed,
                index: index as u32,
            });
            u = (u + PHI_CUBED).fract();
        }

        log::debug!(
            "flux ignited: {} candidate(s) from seed {seed}",
            out.len()
        );
        out
    }

    /// One Φ³ twist: angular leap plus radial energy injection.
    fn perturb(&self, c: PhaseCoordinate, key: f64) -> PhaseCoordinate {
        let d_theta = self.intensity * (c.phi * PHI_CUBED + key).sin();
        let d_phi = self.intensity * (c.theta * PHI_CUBED + key).cos();

        let mut rho = if c.rho == 0.0 {
            // A resting coordinate still receives the injection.
            self.intensity / PHI
        } else {
            c.rho * (1.0 + self.intensity / PHI)
        };
        if rho > self.rho_ceiling {
            // Rebound instead of running away.
            rho = (2.0 * self.rho_ceiling - rho).max(0.0);
        }

        PhaseCoordinate::new(c.theta + d_theta, c.phi + d_phi, rho)
    }
}
