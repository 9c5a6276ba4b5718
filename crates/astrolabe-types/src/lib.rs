// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Decision Pipeline Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Astrolabe engine — deterministic structure-versus-generation over a
//! fixed star atlas.

pub mod config;
pub mod coord;
pub mod decision;
pub mod error;
pub mod star;

pub use config::EngineConfig;
pub use coord::{PhaseCoordinate, PHI, PHI_CUBED};
pub use decision::{Candidate, DecisionResult, Mode, RejectReason};
pub use error::{AstrolabeError, AstrolabeResult};
pub use star::Star;
