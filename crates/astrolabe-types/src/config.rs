// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Engine Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::coord::PHI_CUBED;
use crate::error::{AstrolabeError, AstrolabeResult};

/// Runtime configuration for the decision pipeline.
///
/// Every threshold is caller-overridable; nothing is hard-coded at the
/// call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Confidence below this triggers the flux motor.
    /// Default: 1/√Φ³ ≈ 0.486 (critical resonance).
    pub flux_threshold: f64,

    /// Falloff of the distance → confidence map, `1/(1 + falloff·d)`.
    /// Default: 1.0.
    pub confidence_falloff: f64,

    /// Candidates farther than this from every anchor are noise.
    /// Default: 0.55.
    pub coherence_max: f64,

    /// Candidates closer than this to an anchor are redundant, not
    /// novel. Default: 0.05.
    pub novelty_min: f64,

    /// Amplitude of the flux perturbation. Default: 0.15.
    pub flux_intensity: f64,

    /// Candidates generated per flux ignition. Default: 3.
    pub flux_candidates: usize,

    /// ρ rebound ceiling for generated candidates. Default: 1.0.
    pub rho_ceiling: f64,

    /// Stable band the Σ coherence score decays toward under
    /// consecutive confident matches. Default: 0.9.
    pub sigma_band: f64,

    /// Per-update approach rate toward the stable band. Default: 0.35.
    pub sigma_gain: f64,

    /// Multiplier applied on a low-confidence event. Default: 0.5.
    pub sigma_drop: f64,

    /// Confidence at or above which an event counts as confident for
    /// Σ. Default: 0.5.
    pub sigma_confident_min: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // 1/√Φ³ — the resonance boundary of the Φ³ geometry.
            flux_threshold: 1.0 / PHI_CUBED.sqrt(),
            confidence_falloff: 1.0,
            coherence_max: 0.55,
            novelty_min: 0.05,
            flux_intensity: 0.15,
            flux_candidates: 3,
            rho_ceiling: 1.0,
            sigma_band: 0.9,
            sigma_gain: 0.35,
            sigma_drop: 0.5,
            sigma_confident_min: 0.5,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> AstrolabeResult<()> {
        if !(0.0..=1.0).contains(&self.flux_threshold) {
            return Err(AstrolabeError::Config(format!(
                "flux_threshold must be in [0, 1], got {}",
                self.flux_threshold
            )));
        }
        if self.confidence_falloff <= 0.0 {
            return Err(AstrolabeError::Config(format!(
                "confidence_falloff must be > 0, got {}",
                self.confidence_falloff
            )));
        }
        if self.novelty_min < 0.0 {
            return Err(AstrolabeError::Config(format!(
                "novelty_min must be >= 0, got {}",
                self.novelty_min
            )));
        }
        if self.coherence_max <= self.novelty_min {
            return Err(AstrolabeError::Config(format!(
                "coherence_max must exceed novelty_min, got {} <= {}",
                self.coherence_max, self.novelty_min
            )));
        }
        if self.flux_intensity <= 0.0 {
            return Err(AstrolabeError::Config(format!(
                "flux_intensity must be > 0, got {}",
                self.flux_intensity
            )));
        }
        if self.flux_candidates < 1 || self.flux_candidates > 64 {
            return Err(AstrolabeError::Config(format!(
                "flux_candidates must be in [1, 64], got {}",
                self.flux_candidates
            )));
        }
        if self.rho_ceiling <= 0.0 {
            return Err(AstrolabeError::Config(format!(
                "rho_ceiling must be > 0, got {}",
                self.rho_ceiling
            )));
        }
        if !(0.0..=1.0).contains(&self.sigma_band) || self.sigma_band == 0.0 {
            return Err(AstrolabeError::Config(format!(
                "sigma_band must be in (0, 1], got {}",
                self.sigma_band
            )));
        }
        if !(0.0..=1.0).contains(&self.sigma_gain) || self.sigma_gain == 0.0 {
            return Err(AstrolabeError::Config(format!(
                "sigma_gain must be in (0, 1], got {}",
                self.sigma_gain
            )));
        }
        if !(0.0..1.0).contains(&self.sigma_drop) || self.sigma_drop == 0.0 {
            return Err(AstrolabeError::Config(format!(
                "sigma_drop must be in (0, 1), got {}",
                self.sigma_drop
            )));
        }
        if !(0.0..=1.0).contains(&self.sigma_confident_min) {
            return Err(AstrolabeError::Config(format!(
                "sigma_confident_min must be in [0, 1], got {}",
                self.sigma_confident_min
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> AstrolabeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AstrolabeError::Config(format!("JSON parse error: {e}")))
    }
}
