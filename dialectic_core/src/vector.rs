// SPDX-License-Identifier: MIT OR Apache-2.0
//! The `TriadVector` value type and its two algebraic operators.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{DialecticError, Result};

/// A dialectical state: an ordered triple of non-negative integers.
///
/// Equality and hashing are structural; two vectors are the same state
/// iff all three components match. Components are arbitrary-precision,
/// so repeated hybridization cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriadVector {
    /// Thesis weight.
    pub thesis: BigUint,
    /// Antithesis weight.
    pub antithesis: BigUint,
    /// Synthesis weight.
    pub synthesis: BigUint,
}

impl TriadVector {
    /// Builds a vector from any integer types convertible to `BigUint`.
    pub fn new(
        thesis: impl Into<BigUint>,
        antithesis: impl Into<BigUint>,
        synthesis: impl Into<BigUint>,
    ) -> Self {
        Self {
            thesis: thesis.into(),
            antithesis: antithesis.into(),
            synthesis: synthesis.into(),
        }
    }

    /// Builds a vector from a component slice.
    ///
    /// # Errors
    ///
    /// Returns [`DialecticError::InvalidArity`] unless the slice has
    /// exactly three components.
    pub fn from_components(components: &[BigUint]) -> Result<Self> {
        match components {
            [t, a, s] => Ok(Self {
                thesis: t.clone(),
                antithesis: a.clone(),
                synthesis: s.clone(),
            }),
            other => Err(DialecticError::InvalidArity(other.len())),
        }
    }

    /// The canonical thesis seed (1, 0, 0).
    #[must_use]
    pub fn unit_thesis() -> Self {
        Self::new(1u32, 0u32, 0u32)
    }

    /// The canonical antithesis seed (0, 1, 0).
    #[must_use]
    pub fn unit_antithesis() -> Self {
        Self::new(0u32, 1u32, 0u32)
    }

    /// The canonical synthesis seed (0, 0, 1).
    #[must_use]
    pub fn unit_synthesis() -> Self {
        Self::new(0u32, 0u32, 1u32)
    }

    /// Checks the balance axiom: `synthesis >= thesis + antithesis`.
    ///
    /// This is recomputed on every call, never cached.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.synthesis >= &self.thesis + &self.antithesis
    }

    /// Hybridization: component-wise addition of two states.
    ///
    /// Commutative and associative. The result may be unbalanced even when
    /// both inputs are balanced; that tension is what [`resolve`] corrects.
    ///
    /// [`resolve`]: TriadVector::resolve
    #[must_use]
    pub fn hybridize(&self, other: &Self) -> Self {
        Self {
            thesis: &self.thesis + &other.thesis,
            antithesis: &self.antithesis + &other.antithesis,
            synthesis: &self.synthesis + &other.synthesis,
        }
    }

    /// Resolution: `(t, a, max(s, t + a))`.
    ///
    /// Idempotent. Never decreases the synthesis component and never
    /// alters the other two; the output always satisfies the axiom.
    #[must_use]
    pub fn resolve(&self) -> Self {
        let floor = &self.thesis + &self.antithesis;
        if self.synthesis >= floor {
            return self.clone();
        }
        Self {
            thesis: self.thesis.clone(),
            antithesis: self.antithesis.clone(),
            synthesis: floor,
        }
    }
}

impl fmt::Display for TriadVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.thesis, self.antithesis, self.synthesis)
    }
}

impl FromStr for TriadVector {
    type Err = DialecticError;

    /// Parses the tuple form produced by `Display`, e.g. `(1, 0, 2)`.
    /// Parentheses are optional.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DialecticError::InvalidArity(parts.len()));
        }
        let component = |raw: &str| {
            BigUint::from_str(raw).map_err(|_| DialecticError::InvalidComponent(raw.to_string()))
        };
        Ok(Self {
            thesis: component(parts[0])?,
            antithesis: component(parts[1])?,
            synthesis: component(parts[2])?,
        })
    }
}

/// The three canonical seed states of the model.
///
/// Note that (1,0,0) and (0,1,0) do not satisfy the balance axiom; they
/// are base states of the source model regardless and are returned as-is.
#[must_use]
pub fn canonical_seeds() -> [TriadVector; 3] {
    [
        TriadVector::unit_thesis(),
        TriadVector::unit_antithesis(),
        TriadVector::unit_synthesis(),
    ]
}
