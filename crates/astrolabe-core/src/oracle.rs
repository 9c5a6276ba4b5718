// ─────────────────────────────────────────────────────────────────────
// Astrolabe — External Reference Oracle
// ─────────────────────────────────────────────────────────────────────
//! Caller-supplied reference lookup.
//!
//! The oracle is consulted only after the pipeline has produced its
//! verdict, to corroborate an accepted hypothesis. It is never a
//! dependency of the decision itself: the core behaves bit-for-bit
//! identically whether or not an oracle is wired in.

use std::collections::HashMap;

use astrolabe_types::DecisionResult;

/// Trait for reference lookup backends.
pub trait ReferenceOracle: Send + Sync {
    /// Reference text for the term, or `None` if unavailable.
    fn reference(&self, term: &str) -> Option<String>;
}

/// In-memory keyword-matching oracle for tests and offline use.
pub struct InMemoryOracle {
    entries: HashMap<String, String>,
}

impl Default for InMemoryOracle {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl InMemoryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn add_entry(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

impl ReferenceOracle for InMemoryOracle {
    fn reference(&self, term: &str) -> Option<String> {
        let term_lower = term.to_lowercase();
        let mut hits = Vec::new();

        for (key, value) in &self.entries {
            let key_words: Vec<&str> = key.split_whitespace().collect();
            if key_words.iter().any(|w| term_lower.contains(w)) {
                hits.push(format!("{key}: {value}"));
            }
        }

        if hits.is_empty() {
            None
        } else {
            hits.sort();
            Some(hits.join("; "))
        }
    }
}

/// Oracle backed by a caller-supplied function.
type ReferenceFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct ExternalOracle {
    reference_fn: ReferenceFn,
}

impl ExternalOracle {
    pub fn new(reference_fn: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            reference_fn: Box::new(reference_fn),
        }
    }
}

impl ReferenceOracle for ExternalOracle {
    fn reference(&self, term: &str) -> Option<String> {
        (self.reference_fn)(term)
    }
}

/// Reference material attached to an already-accepted hypothesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corroboration {
    pub anchor: String,
    pub reference: String,
}

/// Look up the resonant anchor of an accepted hypothesis.
///
/// Facts and noise are never corroborated; the verdict is already
/// final either way.
pub fn corroborate(
    result: &DecisionResult,
    oracle: &dyn ReferenceOracle,
) -> Option<Corroboration> {
    match result {
        DecisionResult::Hypothesis { anchor, .. } => {
            oracle.reference(anchor).map(|reference| Corroboration {
                anchor: anchor.clone(),
                reference,
            })
        }
        _ => None,
    }
}
