// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Star Atlas
// ─────────────────────────────────────────────────────────────────────
//! Append-only reference topology: an ordered list of committed stars
//! with a deterministic nearest-anchor query.
//!
//! The linear scan is intentional: small N, commit-order iteration,
//! and a strict `<` comparison give a platform-independent result with
//! ties resolving to the earliest commit. Repeated lookups are served
//! from a read-path cache keyed by the query's bit pattern; the cache
//! is dropped on every commit and never alters what a fresh scan would
//! return.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use astrolabe_types::{AstrolabeError, AstrolabeResult, PhaseCoordinate, Star};

use crate::projector::{fnv1a64, normalize};

/// Shared handle for concurrent use: many readers, one committer.
pub type SharedAtlas = Arc<RwLock<Atlas>>;

/// Read-path cache entries kept before the map is reset.
const CACHE_CAP: usize = 4096;

/// What commit does when the label already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateLabel` (default).
    Reject,
    /// Append a new star with the same label and a fresh sequence
    /// number. Nothing is overwritten.
    Version,
}

/// Append-only star atlas.
pub struct Atlas {
    stars: Vec<Star>,
    by_label: HashMap<String, usize>,
    falloff: f64,
    cache: Mutex<HashMap<[u64; 3], (usize, f64)>>,
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Atlas {
    /// An empty atlas with the given confidence falloff.
    pub fn new(falloff: f64) -> Self {
        Self {
            stars: Vec::new(),
            by_label: HashMap::new(),
            falloff: falloff.max(f64::MIN_POSITIVE),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Rebuild from an ordered record list (log replay). Records must
    /// carry strictly increasing sequence numbers.
    pub fn from_records(records: Vec<Star>, falloff: f64) -> AstrolabeResult<Self> {
        let mut atlas = Self::new(falloff);
        let mut last_seq = None;
        for star in records {
            if last_seq.is_some_and(|prev| star.seq <= prev) {
                return Err(AstrolabeError::Log(format!(
                    "out-of-order record: seq {} after {:?}",
                    star.seq, last_seq
                )));
            }
            last_seq = Some(star.seq);
            let norm = normalize(&star.label);
            atlas.by_label.entry(norm).or_insert(atlas.stars.len());
            atlas.stars.push(star);
        }
        Ok(atlas)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Distance → confidence, strictly decreasing with
    /// `confidence(0) == 1.0` exactly.
    pub fn confidence(&self, distance: f64) -> f64 {
        1.0 / (1.0 + self.falloff * distance.max(0.0))
    }

    /// Nearest committed star and its distance. Ties resolve to the
    /// lowest commit-sequence-number.
    pub fn nearest(&self, coordinate: &PhaseCoordinate) -> AstrolabeResult<(&Star, f64)> {
        if self.stars.is_empty() {
            return Err(AstrolabeError::EmptyAtlas);
        }

        let key = coordinate.bit_key();
        if let Some(&(idx, d)) = self.cache.lock().get(&key) {
            return Ok((&self.stars[idx], d));
        }

        let mut best_idx = 0;
        let mut best_d = f64::INFINITY;
        for (idx, star) in self.stars.iter().enumerate() {
            let d = star.coordinate.distance_to(coordinate);
            if d < best_d {
                best_d = d;
                best_idx = idx;
            }
        }

        let mut cache = self.cache.lock();
        if cache.len() >= CACHE_CAP {
            cache.clear();
        }
        cache.insert(key, (best_idx, best_d));
        Ok((&self.stars[best_idx], best_d))
    }

    /// Append a star; fails with `DuplicateLabel` if the label exists.
    pub fn commit(&mut self, label: &str, coordinate: PhaseCoordinate) -> AstrolabeResult<Star> {
        self.commit_with(label, coordinate, DuplicatePolicy::Reject)
    }

    /// Append a star under an explicit duplicate policy. Atlas size
    /// strictly increases on success; nothing is ever overwritten.
    pub fn commit_with(
        &mut self,
        label: &str,
        coordinate: PhaseCoordinate,
        policy: DuplicatePolicy,
    ) -> AstrolabeResult<Star> {
        let norm = normalize(label);
        if norm.is_empty() {
            return Err(AstrolabeError::MalformedInput(
                "cannot commit an empty label".to_string(),
            ));
        }

        let duplicate = self.by_label.contains_key(&norm);
        if duplicate && policy == DuplicatePolicy::Reject {
            return Err(AstrolabeError::DuplicateLabel(label.trim().to_string()));
        }

        let seq = self.next_seq();
        let digest = fnv1a64(norm.as_bytes());
        let id = if duplicate {
            format!("star:{digest:016x}.{seq}")
        } else {
            format!("star:{digest:016x}")
        };

        let idx = self.stars.len();
        self.stars.push(Star {
            id,
            label: label.trim().to_string(),
            coordinate,
            seq,
        });
        self.by_label.entry(norm).or_insert(idx);
        self.cache.lock().clear();

        log::info!("star committed: {:?} (seq {seq})", self.stars[idx].label);
        Ok(self.stars[idx].clone())
    }

    fn next_seq(&self) -> u64 {
        self.stars.last().map_or(0, |s| s.seq + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(theta: f64, phi: f64, rho: f64) -> PhaseCoordinate {
        PhaseCoordinate::new(theta, phi, rho)
    }

    // ── commit ────────────────────────────────────────────────────

    #[test]
    fn test_commit_grows_by_one() {
        let mut atlas = Atlas::default();
        assert_eq!(atlas.len(), 0);
        atlas.commit("alpha", coord(1.0, 1.0, 0.5)).unwrap();
        assert_eq!(atlas.len(), 1);
        atlas.commit("beta", coord(2.0, 2.0, 0.5)).unwrap();
        assert_eq!(atlas.len(), 2);
    }

    #[test]
    fn test_commit_sequence_numbers() {
        let mut atlas = Atlas::default();
        let a = atlas.commit("alpha", coord(1.0, 1.0, 0.5)).unwrap();
        let b = atlas.commit("beta", coord(2.0, 2.0, 0.5)).unwrap();
        assert_eq!(a.seq, 0);
        assert_eq!(b.seq, 1);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut atlas = Atlas::default();
        atlas.commit("alpha", coord(1.0, 1.0, 0.5)).unwrap();
        let err = atlas.commit("  ALPHA ", coord(2.0, 2.0, 0.5));
        assert!(matches!(err, Err(AstrolabeError::DuplicateLabel(_))));
        assert_eq!(atlas.len(), 1);
    }

    #[test]
    fn test_versioned_append_allowed() {
        let mut atlas = Atlas::default();
        let first = atlas.commit("alpha", coord(1.0, 1.0, 0.5)).unwrap();
        let second = atlas
            .commit_with("alpha", coord(2.0, 2.0, 0.5), DuplicatePolicy::Version)
            .unwrap();
        assert_eq!(atlas.len(), 2);
        assert_ne!(first.id, second.id);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_empty_label_malformed() {
        let mut atlas = Atlas::default();
        assert!(matches!(
            atlas.commit("   ", coord(1.0, 1.0, 0.5)),
            Err(AstrolabeError::MalformedInput(_))
        ));
    }

    // ── nearest ───────────────────────────────────────────────────

    #[test]
    fn test_nearest_empty_atlas() {
        let atlas = Atlas::default();
        assert!(matches!(
            atlas.nearest(&coord(1.0, 1.0, 0.5)),
            Err(AstrolabeError::EmptyAtlas)
        ));
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let mut atlas = Atlas::default();
        atlas.commit("far", coord(3.0, 3.0, 0.9)).unwrap();
        atlas.commit("near", coord(1.0, 1.0, 0.5)).unwrap();
        let (star, d) = atlas.nearest(&coord(1.1, 1.0, 0.5)).unwrap();
        assert_eq!(star.label, "near");
        assert!(d < 0.2);
    }

    #[test]
    fn test_nearest_tie_breaks_to_earliest() {
        let mut atlas = Atlas::default();
        let c = coord(1.0, 1.0, 0.5);
        atlas.commit("first", c).unwrap();
        atlas.commit("second", c).unwrap();
        let (star, d) = atlas.nearest(&c).unwrap();
        assert_eq!(star.label, "first");
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_nearest_cache_dropped_on_commit() {
        let mut atlas = Atlas::default();
        atlas.commit("far", coord(3.0, 3.0, 0.9)).unwrap();
        let query = coord(1.0, 1.0, 0.5);
        let (star, _) = atlas.nearest(&query).unwrap();
        assert_eq!(star.label, "far");
        // Cached now; a closer commit must invalidate it.
        atlas.commit("near", query).unwrap();
        let (star, d) = atlas.nearest(&query).unwrap();
        assert_eq!(star.label, "near");
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_nearest_cached_result_identical() {
        let mut atlas = Atlas::default();
        atlas.commit("alpha", coord(1.0, 1.0, 0.5)).unwrap();
        let query = coord(1.2, 0.8, 0.4);
        let cold = atlas.nearest(&query).map(|(s, d)| (s.seq, d)).unwrap();
        let warm = atlas.nearest(&query).map(|(s, d)| (s.seq, d)).unwrap();
        assert_eq!(cold, warm);
    }

    // ── confidence ────────────────────────────────────────────────

    #[test]
    fn test_confidence_at_zero_is_one() {
        let atlas = Atlas::default();
        assert_eq!(atlas.confidence(0.0), 1.0);
    }

    #[test]
    fn test_confidence_strictly_decreasing() {
        let atlas = Atlas::default();
        let samples = [0.0, 0.1, 0.3, 0.7, 1.5, 4.0];
        for pair in samples.windows(2) {
            assert!(atlas.confidence(pair[0]) > atlas.confidence(pair[1]));
        }
    }

    #[test]
    fn test_confidence_bounded() {
        let atlas = Atlas::default();
        assert!((0.0..=1.0).contains(&atlas.confidence(1e9)));
    }

    // ── from_records ──────────────────────────────────────────────

    #[test]
    fn test_from_records_preserves_order() {
        let stars = vec![
            Star {
                id: "star:a".into(),
                label: "alpha".into(),
                coordinate: coord(1.0, 1.0, 0.5),
                seq: 0,
            },
            Star {
                id: "star:b".into(),
                label: "beta".into(),
                coordinate: coord(2.0, 2.0, 0.5),
                seq: 3,
            },
        ];
        let atlas = Atlas::from_records(stars, 1.0).unwrap();
        assert_eq!(atlas.len(), 2);
        assert_eq!(atlas.stars()[0].label, "alpha");
    }

    #[test]
    fn test_from_records_rejects_out_of_order() {
        let stars = vec![
            Star {
                id: "star:a".into(),
                label: "alpha".into(),
                coordinate: coord(1.0, 1.0, 0.5),
                seq: 5,
            },
            Star {
                id: "star:b".into(),
                label: "beta".into(),
                coordinate: coord(2.0, 2.0, 0.5),
                seq: 2,
            },
        ];
        assert!(matches!(
            Atlas::from_records(stars, 1.0),
            Err(AstrolabeError::Log(_))
        ));
    }
}
