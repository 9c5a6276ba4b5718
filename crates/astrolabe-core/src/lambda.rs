// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Λ Mode Classifier
// ─────────────────────────────────────────────────────────────────────
//! Ontological role classification.
//!
//! A pure function of the input's structure and its projected
//! coordinate — no semantics, no learned weights. Rules are checked in
//! a fixed order, so the assignment is deterministic.

use astrolabe_types::{Mode, PhaseCoordinate};

use crate::projector::normalize;

const DEFINITION_MARKS: [&str; 6] = [
    " is a ",
    " is an ",
    " is the ",
    " are the ",
    " means ",
    " refers to ",
];

const RELATION_MARKS: [&str; 6] = [" is ", " are ", " has ", " have ", " of ", " belongs to "];

const GROUP_MARKS: [&str; 3] = [", ", " and ", " & "];

/// Classify an input's ontological role from its structure.
pub fn classify(coordinate: &PhaseCoordinate, input: &str) -> Mode {
    let t = normalize(input);
    if t.is_empty() || coordinate.is_origin() {
        return Mode::Unknown;
    }
    if !t.chars().any(char::is_alphabetic) {
        return Mode::Unknown;
    }
    if DEFINITION_MARKS.iter().any(|m| t.contains(m)) {
        return Mode::Definition;
    }
    if RELATION_MARKS.iter().any(|m| t.contains(m)) {
        return Mode::Relation;
    }
    if GROUP_MARKS.iter().any(|m| t.contains(m)) {
        return Mode::Group;
    }
    Mode::Entity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> PhaseCoordinate {
        PhaseCoordinate::new(1.0, 1.0, 0.5)
    }

    #[test]
    fn test_entity() {
        assert_eq!(classify(&coord(), "Angus Young"), Mode::Entity);
    }

    #[test]
    fn test_definition() {
        assert_eq!(
            classify(&coord(), "Alternating current is a flow of charge"),
            Mode::Definition
        );
        assert_eq!(
            classify(&coord(), "entropy means disorder"),
            Mode::Definition
        );
    }

    #[test]
    fn test_relation() {
        assert_eq!(
            classify(&coord(), "Angus Young is Scottish-born"),
            Mode::Relation
        );
        assert_eq!(
            classify(&coord(), "the guitar of Angus"),
            Mode::Relation
        );
    }

    #[test]
    fn test_group() {
        assert_eq!(
            classify(&coord(), "guitars, drums, bass"),
            Mode::Group
        );
        assert_eq!(classify(&coord(), "salt and pepper"), Mode::Group);
    }

    #[test]
    fn test_definition_wins_over_relation() {
        // Copula + article reads as a definition, not a bare relation.
        assert_eq!(
            classify(&coord(), "AC/DC is a rock band"),
            Mode::Definition
        );
    }

    #[test]
    fn test_unknown_empty() {
        assert_eq!(classify(&PhaseCoordinate::origin(), ""), Mode::Unknown);
    }

    #[test]
    fn test_unknown_origin_coordinate() {
        assert_eq!(
            classify(&PhaseCoordinate::origin(), "anything"),
            Mode::Unknown
        );
    }

    #[test]
    fn test_unknown_no_letters() {
        assert_eq!(classify(&coord(), "1234 5678"), Mode::Unknown);
    }

    #[test]
    fn test_deterministic() {
        let a = classify(&coord(), "salt and pepper");
        let b = classify(&coord(), "salt and pepper");
        assert_eq!(a, b);
    }
}
