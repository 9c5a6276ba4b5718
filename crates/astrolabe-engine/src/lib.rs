// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Pipeline Orchestrator
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! The decision procedure exposed to callers: one pass through
//! projection, atlas matching, flux generation, and Gödel validation,
//! returning a tagged FACT / HYPOTHESIS / NOISE result.

pub mod pipeline;

pub use pipeline::DecisionEngine;
