// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Decision Pipeline
// ─────────────────────────────────────────────────────────────────────
//! One-pass decision state machine:
//!
//! ```text
//!   Start → Projected → Matched → Fact
//!                          └→ Flux-Triggered → Generated → Validated → Done
//! ```
//!
//! No state is ever revisited and no stage failure is swallowed: a
//! projector or filter fault aborts the current query and surfaces its
//! error kind. A caller wanting a different outcome re-invokes with a
//! different seed or threshold.

use astrolabe_core::{classify, Atlas, DuplicatePolicy, PhaseProjector, SessionState};
use astrolabe_flux::{FluxMotor, FluxOutcome, GodelFilter};
use astrolabe_types::{AstrolabeError, AstrolabeResult, DecisionResult, EngineConfig, Star};

/// The composed decision procedure.
///
/// Holds no atlas and no session state: both are passed per call, so
/// multiple atlas instances and any number of isolated sessions can
/// coexist. The engine itself is immutable after construction and safe
/// to share across threads.
pub struct DecisionEngine {
    cfg: EngineConfig,
    projector: PhaseProjector,
    motor: FluxMotor,
    filter: GodelFilter,
}

impl DecisionEngine {
    /// Build an engine from a validated configuration.
    pub fn new(cfg: EngineConfig) -> AstrolabeResult<Self> {
        Self::with_projector(cfg, PhaseProjector::default())
    }

    /// Build with a custom projector (e.g. a custom topology).
    pub fn with_projector(cfg: EngineConfig, projector: PhaseProjector) -> AstrolabeResult<Self> {
        cfg.validate()?;
        let motor = FluxMotor::from_config(&cfg);
        let filter = GodelFilter::from_config(&cfg);
        Ok(Self {
            cfg,
            projector,
            motor,
            filter,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Run one query through the pipeline against an atlas snapshot.
    ///
    /// Deterministic: the result is a pure function of
    /// (input, seed, flux_threshold, atlas contents), regardless of
    /// what other queries run concurrently.
    pub fn decide(
        &self,
        input: &str,
        seed: u64,
        flux_threshold: f64,
        atlas: &Atlas,
        session: &mut SessionState,
    ) -> AstrolabeResult<DecisionResult> {
        if !(0.0..=1.0).contains(&flux_threshold) {
            return Err(AstrolabeError::Config(format!(
                "flux_threshold must be in [0, 1], got {flux_threshold}"
            )));
        }

        // Start → Projected
        let coordinate = self.projector.project(input)?;

        // Projected → Matched
        let mode = classify(&coordinate, input);
        let matched = match atlas.nearest(&coordinate) {
            Ok((star, distance)) => Some((star.clone(), distance)),
            // Zero stars: automatic flux trigger with confidence 0.
            Err(AstrolabeError::EmptyAtlas) => None,
            Err(e) => return Err(e),
        };
        let confidence = matched
            .as_ref()
            .map_or(0.0, |(_, distance)| atlas.confidence(*distance));

        session.update(mode, confidence, &self.cfg);

        // Matched → Fact (terminal)
        if let Some((star, distance)) = matched {
            if confidence >= flux_threshold {
                log::debug!(
                    "fact: {:?} at distance {distance:.4} (confidence {confidence:.4})",
                    star.label
                );
                return Ok(DecisionResult::Fact {
                    star,
                    stability: confidence,
                });
            }
        }

        // Matched → Flux-Triggered → Generated
        log::debug!("low signal ({confidence:.4} < {flux_threshold:.4}), igniting flux motor");
        let candidates = self.motor.generate(coordinate, seed);

        // Generated → Validated → Done
        match self.filter.select(&candidates, atlas) {
            Some(FluxOutcome::Hypothesis {
                candidate,
                resonance,
                anchor,
            }) => Ok(DecisionResult::Hypothesis {
                candidate,
                resonance,
                anchor,
            }),
            Some(FluxOutcome::Noise { candidate, reason }) => {
                Ok(DecisionResult::Noise { candidate, reason })
            }
            None => Err(AstrolabeError::Flux(
                "motor produced no candidates".to_string(),
            )),
        }
    }

    /// `decide` with the configured default threshold.
    pub fn decide_default(
        &self,
        input: &str,
        seed: u64,
        atlas: &Atlas,
        session: &mut SessionState,
    ) -> AstrolabeResult<DecisionResult> {
        self.decide(input, seed, self.cfg.flux_threshold, atlas, session)
    }

    /// Project a label and commit it as a star.
    ///
    /// Uses the engine's own projector, so a committed label re-queried
    /// through `decide` matches its star at distance zero. Never
    /// invoked by `decide` itself.
    pub fn commit_star(&self, label: &str, atlas: &mut Atlas) -> AstrolabeResult<Star> {
        self.commit_star_with(label, atlas, DuplicatePolicy::Reject)
    }

    /// `commit_star` under an explicit duplicate policy.
    pub fn commit_star_with(
        &self,
        label: &str,
        atlas: &mut Atlas,
        policy: DuplicatePolicy,
    ) -> AstrolabeResult<Star> {
        let coordinate = self.projector.project(label)?;
        atlas.commit_with(label, coordinate, policy)
    }
}
