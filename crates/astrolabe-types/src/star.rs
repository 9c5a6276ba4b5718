// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Star Record
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::coord::PhaseCoordinate;

/// Anchor point of the atlas.
///
/// Created only via commit; never mutated or removed. The id is derived
/// from the normalized label, the sequence number records commit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: String,
    /// Source symbolic input, as committed.
    pub label: String,
    pub coordinate: PhaseCoordinate,
    /// Commit-sequence-number; ties in nearest-anchor queries resolve
    /// to the lowest value.
    pub seq: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_roundtrips_through_json() {
        let star = Star {
            id: "star:00000000deadbeef".to_string(),
            label: "Quantum Physics".to_string(),
            coordinate: PhaseCoordinate::new(1.0, 2.0, 0.5),
            seq: 3,
        };
        let json = serde_json::to_string(&star).unwrap();
        let back: Star = serde_json::from_str(&json).unwrap();
        assert_eq!(back, star);
    }
}
