// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Structural Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Structural core of the Astrolabe pipeline: deterministic phase
//! projection, the append-only star atlas with its nearest-anchor
//! query, ontological mode classification (Λ), and per-session
//! coherence tracking (Σ).
//!
//! # Determinism Invariants
//!
//! 1. **Projection is a pure function of the symbolic content**: no
//!    corpus, no random source, no mutable state. Identical input
//!    yields an identical coordinate on any platform.
//!
//! 2. **The atlas only grows**: commit appends, nothing mutates or
//!    removes an existing star. Nearest-anchor ties resolve to the
//!    earliest commit, so query results are stable under growth order.
//!
//! 3. **Memoization never changes a decision**: the read-path cache
//!    stores exactly what a fresh scan would recompute and is dropped
//!    on every commit.
//!
//! 4. **Branch isolation**: Σ state is owned by one session and never
//!    aggregated across sessions.

pub mod atlas;
pub mod lambda;
pub mod oracle;
pub mod persist;
pub mod projector;
pub mod sigma;
pub mod topology;

pub use atlas::{Atlas, DuplicatePolicy, SharedAtlas};
pub use lambda::classify;
pub use oracle::{corroborate, Corroboration, ExternalOracle, InMemoryOracle, ReferenceOracle};
pub use persist::{append_star, load_atlas};
pub use projector::PhaseProjector;
pub use sigma::{SessionState, SigmaAudit};
pub use topology::{Topology, TopologyRegion};
