// SPDX-License-Identifier: MIT OR Apache-2.0
//! Labeled triad composition.
//!
//! A thin layer over the core operators: hybridize two concepts, resolve
//! the tension, and report the result under caller-supplied display labels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::vector::TriadVector;

/// The outcome of composing two labeled concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriadReport {
    /// Display label of the first input concept.
    pub concept_1: String,
    /// Display label of the second input concept.
    pub concept_2: String,
    /// The raw hybridization, before resolution.
    pub tension: TriadVector,
    /// The resolved, stable state.
    pub synthesis: TriadVector,
    /// Whether the synthesis satisfies the balance axiom. Always true,
    /// recorded explicitly so reports are self-contained.
    pub balanced: bool,
}

/// Composes two concepts: hybridize, resolve, and label.
///
/// Labels come from the caller's mapping; a vector without an entry falls
/// back to its literal tuple form.
#[must_use]
pub fn compose_triad(
    v1: &TriadVector,
    v2: &TriadVector,
    labels: &HashMap<TriadVector, String>,
) -> TriadReport {
    let label = |v: &TriadVector| labels.get(v).cloned().unwrap_or_else(|| v.to_string());

    let tension = v1.hybridize(v2);
    let synthesis = tension.resolve();
    let balanced = synthesis.is_balanced();

    TriadReport {
        concept_1: label(v1),
        concept_2: label(v2),
        tension,
        synthesis,
        balanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept_labels() -> HashMap<TriadVector, String> {
        let mut labels = HashMap::new();
        labels.insert(TriadVector::unit_thesis(), "Interrogation".to_string());
        labels.insert(TriadVector::unit_antithesis(), "Negation".to_string());
        labels.insert(TriadVector::unit_synthesis(), "Affirmation".to_string());
        labels
    }

    #[test]
    fn test_compose_with_labels() {
        let report = compose_triad(
            &TriadVector::unit_thesis(),
            &TriadVector::unit_antithesis(),
            &concept_labels(),
        );

        assert_eq!(report.concept_1, "Interrogation");
        assert_eq!(report.concept_2, "Negation");
        assert_eq!(report.tension, TriadVector::new(1u32, 1u32, 0u32));
        assert_eq!(report.synthesis, TriadVector::new(1u32, 1u32, 2u32));
        assert!(report.balanced);
    }

    #[test]
    fn test_compose_falls_back_to_tuple_form() {
        let unlabeled = TriadVector::new(2u32, 0u32, 2u32);
        let report = compose_triad(&unlabeled, &TriadVector::unit_thesis(), &concept_labels());

        assert_eq!(report.concept_1, "(2, 0, 2)");
        assert_eq!(report.concept_2, "Interrogation");
    }

    #[test]
    fn test_compose_synthesis_always_balanced() {
        let labels = HashMap::new();
        let a = TriadVector::new(5u32, 5u32, 0u32);
        let b = TriadVector::new(3u32, 0u32, 1u32);
        let report = compose_triad(&a, &b, &labels);
        assert!(report.balanced);
        assert!(report.synthesis.is_balanced());
    }
}
