// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Flux Generation and Topological Audit
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Generative arm of the Astrolabe pipeline.
//!
//! - `FluxMotor`: seeded Φ³ perturbation of a query coordinate into a
//!   bounded batch of candidate coordinates. Hard determinism: the
//!   seed is a mandatory argument, there is no hidden random source,
//!   and the same (query, seed) pair always yields the same ordered
//!   candidate sequence.
//! - `GodelFilter`: topological auditor classifying each candidate as
//!   an accepted hypothesis or rejected noise against atlas geometry.

pub mod filter;
pub mod motor;

pub use filter::{FluxOutcome, GodelFilter, Verdict};
pub use motor::FluxMotor;
