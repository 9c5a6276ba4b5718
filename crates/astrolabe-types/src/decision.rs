// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Decision Pipeline Value Types
// ─────────────────────────────────────────────────────────────────────
//! Ontological modes, flux candidates, and the tagged decision result
//! returned by one pipeline pass.

use serde::{Deserialize, Serialize};

use crate::coord::PhaseCoordinate;
use crate::star::Star;

/// Ontological role of a symbolic input, assigned by the Λ operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Entity,
    Group,
    Definition,
    Relation,
    Unknown,
}

/// Ephemeral coordinate produced by the flux motor.
///
/// Carries the generating seed and the originating query coordinate so
/// any candidate can be regenerated exactly. Discarded after
/// validation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub coordinate: PhaseCoordinate,
    /// Query coordinate the perturbation started from.
    pub origin: PhaseCoordinate,
    pub seed: u64,
    /// Position in the generated sequence (0-based).
    pub index: u32,
}

/// Why the Gödel filter rejected a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Candidate coincides with an existing star region — redundant,
    /// not novel.
    Redundant { anchor: String, distance: f64 },
    /// Nearest anchor lies beyond the coherence ceiling —
    /// topologically incoherent.
    Incoherent { distance: f64 },
    /// No stars committed; nothing to resonate against.
    NoAnchors,
}

/// Tagged outcome of one decision pipeline pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionResult {
    /// Query matched a committed star with sufficient confidence.
    Fact { star: Star, stability: f64 },
    /// Flux produced a candidate the Gödel filter accepted; `anchor`
    /// is the resonant star's label.
    Hypothesis {
        candidate: Candidate,
        resonance: f64,
        anchor: String,
    },
    /// Flux ran and no candidate survived the audit.
    Noise {
        candidate: Candidate,
        reason: RejectReason,
    },
}

impl DecisionResult {
    pub fn is_fact(&self) -> bool {
        matches!(self, DecisionResult::Fact { .. })
    }

    /// Short tag for log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            DecisionResult::Fact { .. } => "FACT",
            DecisionResult::Hypothesis { .. } => "HYPOTHESIS",
            DecisionResult::Noise { .. } => "NOISE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let star = Star {
            id: "star:0".to_string(),
            label: "x".to_string(),
            coordinate: PhaseCoordinate::origin(),
            seq: 0,
        };
        let fact = DecisionResult::Fact {
            star,
            stability: 1.0,
        };
        assert!(fact.is_fact());
        assert_eq!(fact.tag(), "FACT");

        let candidate = Candidate {
            coordinate: PhaseCoordinate::origin(),
            origin: PhaseCoordinate::origin(),
            seed: 7,
            index: 0,
        };
        let noise = DecisionResult::Noise {
            candidate,
            reason: RejectReason::NoAnchors,
        };
        assert!(!noise.is_fact());
        assert_eq!(noise.tag(), "NOISE");
    }
}
