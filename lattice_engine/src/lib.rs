// SPDX-License-Identifier: MIT OR Apache-2.0
//! Lattice Engine - bounded cube enumeration and anchoring statistics
//!
//! Enumerates the fixed 27-point cube {0,1,2}³ of dialectical states and
//! counts, over all 729 ordered pairs, how many satisfy the anchoring
//! rule: the first state's antithesis equals the second's thesis. The
//! domain is fixed, so the whole analysis is a constant: 243 of the 729
//! pairs anchor (each left point pins the right point's thesis to one of
//! three values, and exactly 9 of the 27 points carry it).
//!
//! Independent of the closure engine; the two share only the vector type.

#![warn(missing_docs)]
#![allow(clippy::cast_precision_loss)] // counts are tiny, f64 ratios are exact enough

use serde::{Deserialize, Serialize};

use dialectic_core::TriadVector;

/// Component values spanned by each cube axis.
pub const CUBE_AXIS: [u32; 3] = [0, 1, 2];

/// Number of points in the cube.
pub const CUBE_POINTS: usize = 27;

/// Enumerates the full cube in lexicographic order, thesis varying slowest.
///
/// Always returns exactly [`CUBE_POINTS`] distinct vectors.
#[must_use]
pub fn enumerate_cube() -> Vec<TriadVector> {
    let mut cube = Vec::with_capacity(CUBE_POINTS);
    for t in CUBE_AXIS {
        for a in CUBE_AXIS {
            for s in CUBE_AXIS {
                cube.push(TriadVector::new(t, a, s));
            }
        }
    }
    cube
}

/// The anchoring rule for recursive nesting: the first state's antithesis
/// must coincide with the second's thesis. Directed, not symmetric.
#[must_use]
pub fn anchors(v1: &TriadVector, v2: &TriadVector) -> bool {
    v1.antithesis == v2.thesis
}

/// Anchoring statistics over the full cube cross product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeReport {
    /// Number of cube points (27).
    pub point_count: usize,
    /// Number of ordered pairs evaluated, self-pairs included (729).
    pub total_pairs: usize,
    /// Ordered pairs satisfying the anchoring rule.
    pub valid_anchor_count: usize,
    /// `valid_anchor_count / total_pairs`, as a percentage rounded to two
    /// decimals for reporting. Use [`CubeReport::anchor_ratio`] for the
    /// unrounded value.
    pub valid_anchor_percentage: f64,
}

impl CubeReport {
    /// The unrounded anchor ratio in [0, 1], derived from the raw counts.
    #[must_use]
    pub fn anchor_ratio(&self) -> f64 {
        self.valid_anchor_count as f64 / self.total_pairs as f64
    }
}

/// Enumerates the cube and counts anchoring pairs over all 729 ordered
/// pairs. Deterministic: the domain is fixed and there is no randomness.
#[must_use]
pub fn analyze_cube() -> CubeReport {
    let cube = enumerate_cube();
    let total_pairs = cube.len() * cube.len();

    let valid_anchor_count = cube
        .iter()
        .flat_map(|p1| cube.iter().map(move |p2| (p1, p2)))
        .filter(|&(p1, p2)| anchors(p1, p2))
        .count();

    let percentage = valid_anchor_count as f64 / total_pairs as f64 * 100.0;

    CubeReport {
        point_count: cube.len(),
        total_pairs,
        valid_anchor_count,
        valid_anchor_percentage: (percentage * 100.0).round() / 100.0,
    }
}
