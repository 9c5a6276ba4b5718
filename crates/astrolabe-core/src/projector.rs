// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Phase Projector
// ─────────────────────────────────────────────────────────────────────
//! Deterministic symbolic → phase projection.
//!
//! Any input string maps to a stable coordinate, derived from
//! domain-separated digests of the normalized symbolic content. This
//! is not an embedding and not a learned space: two runs, two
//! machines, two platforms produce the same coordinate for the same
//! input. Distinct inputs may collide; injectivity is not guaranteed.

use std::f64::consts::TAU;

use astrolabe_types::{AstrolabeError, AstrolabeResult, PhaseCoordinate};

use crate::topology::Topology;

/// Normalize symbolic input: trim, lowercase, collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// Minimal FNV-1a 64 — stable across platforms and releases, no
// external dep.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub(crate) fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Digest of `domain:text` mapped to the unit interval [0, 1).
fn unit_digest(domain: &str, text: &str) -> f64 {
    let mut h = fnv1a64(domain.as_bytes());
    h ^= u64::from(b':');
    h = h.wrapping_mul(FNV_PRIME);
    for &b in text.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    // Top 53 bits → exact f64 in [0, 1).
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// Deterministic semantic → phase mapper.
pub struct PhaseProjector {
    topology: Topology,
}

impl Default for PhaseProjector {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
        }
    }
}

impl PhaseProjector {
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// Project symbolic input to a phase coordinate.
    ///
    /// Empty input maps to the origin. Input with no alphanumeric
    /// content has no projector features and is malformed.
    pub fn project(&self, input: &str) -> AstrolabeResult<PhaseCoordinate> {
        let t = normalize(input);
        if t.is_empty() {
            return Ok(PhaseCoordinate::origin());
        }
        if !t.chars().any(char::is_alphanumeric) {
            return Err(AstrolabeError::MalformedInput(format!(
                "no alphanumeric content in {input:?}"
            )));
        }

        let theta = unit_digest("theta", &t) * TAU;
        let phi = unit_digest("phi", &t) * TAU;
        let rho = unit_digest("rho", &t);

        Ok(self
            .topology
            .enforce(PhaseCoordinate::new(theta, phi, rho)))
    }
}
