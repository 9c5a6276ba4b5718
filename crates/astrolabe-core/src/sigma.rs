// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Σ Session Coherence
// ─────────────────────────────────────────────────────────────────────
//! Per-session coherence state.
//!
//! The score lives in [0, 1]: consecutive confident matches pull it
//! toward a stable band, a low-confidence event drops it sharply. The
//! state is owned by exactly one session (branch isolation) — it is
//! created at session start, updated after each query, and discarded
//! at session end. Nothing here is shared or aggregated across
//! sessions.

use serde::{Deserialize, Serialize};

use astrolabe_types::{EngineConfig, Mode};

/// Σ-state for one interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    branch: String,
    coherence: f64,
    queries: u64,
}

/// Reproducible audit snapshot of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigmaAudit {
    pub branch: String,
    pub coherence: f64,
    pub queries: u64,
}

impl SessionState {
    /// Fresh session state for the given branch identity.
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            coherence: 1.0,
            queries: 0,
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    pub fn queries(&self) -> u64 {
        self.queries
    }

    /// Fold one query's (mode, confidence) into the coherence score.
    ///
    /// Confident events move the score toward `sigma_band`; a
    /// low-confidence event (or an Unknown mode) multiplies it by
    /// `sigma_drop`. Returns the updated score.
    pub fn update(&mut self, mode: Mode, confidence: f64, cfg: &EngineConfig) -> f64 {
        let confident = confidence >= cfg.sigma_confident_min && mode != Mode::Unknown;
        if confident {
            self.coherence += cfg.sigma_gain * (cfg.sigma_band - self.coherence);
        } else {
            self.coherence *= cfg.sigma_drop;
        }
        self.coherence = self.coherence.clamp(0.0, 1.0);
        self.queries += 1;
        self.coherence
    }

    pub fn audit(&self) -> SigmaAudit {
        SigmaAudit {
            branch: self.branch.clone(),
            coherence: self.coherence,
            queries: self.queries,
        }
    }
}
