// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Astrolabe failures.
///
/// Nothing here is fatal to the process: every variant is a typed,
/// recoverable result surfaced to the caller.
#[derive(Error, Debug)]
pub enum AstrolabeError {
    /// Commit of a label that already exists, without a versioned-append
    /// policy. Caller may re-commit with versioning or ignore.
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// Input cannot be structurally parsed into projector features.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Nearest-anchor query against an atlas with zero stars.
    #[error("empty atlas: no stars committed")]
    EmptyAtlas,

    /// Candidate generation failed.
    #[error("flux error: {0}")]
    Flux(String),

    /// Configuration error (bad threshold, band, or candidate count).
    #[error("config error: {0}")]
    Config(String),

    /// Star log read or append failed.
    #[error("atlas log error: {0}")]
    Log(String),
}

pub type AstrolabeResult<T> = Result<T, AstrolabeError>;
