// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Gödel Filter
// ─────────────────────────────────────────────────────────────────────
//! Topological audit of flux candidates.
//!
//! A candidate must sit in the resonant band: close enough to some
//! anchor to be coherent, far enough from every anchor to be novel.
//!
//! | nearest distance d              | verdict                    |
//! |---------------------------------|----------------------------|
//! | atlas empty                     | rejected, no anchors       |
//! | d ≤ novelty_min                 | rejected, redundant        |
//! | novelty_min < d ≤ coherence_max | accepted, resonance = confidence(d) |
//! | d > coherence_max               | rejected, incoherent       |

use astrolabe_core::Atlas;
use astrolabe_types::{Candidate, EngineConfig, RejectReason};

/// Audit outcome for a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted { resonance: f64, anchor: String },
    Rejected { reason: RejectReason },
}

/// Outcome of auditing a whole candidate batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FluxOutcome {
    /// Best accepted candidate by resonance.
    Hypothesis {
        candidate: Candidate,
        resonance: f64,
        anchor: String,
    },
    /// Nothing survived; carries the least-distant reject and its
    /// reason.
    Noise {
        candidate: Candidate,
        reason: RejectReason,
    },
}

/// Topological auditor over atlas geometry.
pub struct GodelFilter {
    coherence_max: f64,
    novelty_min: f64,
}

impl GodelFilter {
    pub fn new(coherence_max: f64, novelty_min: f64) -> Self {
        Self {
            coherence_max,
            novelty_min,
        }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self::new(cfg.coherence_max, cfg.novelty_min)
    }

    /// Classify one candidate against the atlas.
    pub fn validate(&self, candidate: &Candidate, atlas: &Atlas) -> Verdict {
        let Ok((star, distance)) = atlas.nearest(&candidate.coordinate) else {
            return Verdict::Rejected {
                reason: RejectReason::NoAnchors,
            };
        };

        if distance <= self.novelty_min {
            return Verdict::Rejected {
                reason: RejectReason::Redundant {
                    anchor: star.label.clone(),
                    distance,
                },
            };
        }
        if distance <= self.coherence_max {
            return Verdict::Accepted {
                resonance: atlas.confidence(distance),
                anchor: star.label.clone(),
            };
        }
        Verdict::Rejected {
            reason: RejectReason::Incoherent { distance },
        }
    }

    /// Audit a batch and pick the overall outcome.
    ///
    /// Returns `None` only for an empty batch; the motor guarantees at
    /// least one candidate.
    pub fn select(&self, candidates: &[Candidate], atlas: &Atlas) -> Option<FluxOutcome> {
        let mut best_accept: Option<(usize, f64, String)> = None;
        let mut best_reject: Option<(usize, f64, RejectReason)> = None;

        for (idx, candidate) in candidates.iter().enumerate() {
            match self.validate(candidate, atlas) {
                Verdict::Accepted { resonance, anchor } => {
                    if best_accept.as_ref().is_none_or(|(_, r, _)| resonance > *r) {
                        best_accept = Some((idx, resonance, anchor));
                    }
                }
                Verdict::Rejected { reason } => {
                    let distance = match &reason {
                        RejectReason::Redundant { distance, .. } => *distance,
                        RejectReason::Incoherent { distance } => *distance,
                        RejectReason::NoAnchors => f64::INFINITY,
                    };
                    if best_reject.as_ref().is_none_or(|(_, d, _)| distance < *d) {
                        best_reject = Some((idx, distance, reason));
                    }
                }
            }
        }

        if let Some((idx, resonance, anchor)) = best_accept {
            return Some(FluxOutcome::Hypothesis {
                candidate: candidates[idx].clone(),
                resonance,
                anchor,
            });
        }
        best_reject.map(|(idx, _, reason)| {
            log::debug!("flux rejected: {reason:?}");
            FluxOutcome::Noise {
                candidate: candidates[idx].clone(),
                reason,
            }
        })
    }
}
