// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dialectic Core - ternary vector algebra for the dialectical generative model
//!
//! This crate provides the shared primitives for the dialectic workspace:
//! states are vectors `(thesis, antithesis, synthesis)` over non-negative
//! arbitrary-precision integers, subject to the balance axiom `s >= t + a`.
//!
//! # Operators
//!
//! - **Hybridization**: component-wise addition of two states, producing a
//!   possibly unbalanced "tension" state
//! - **Resolution**: the stabilizing correction `(t, a, max(s, t + a))`,
//!   idempotent and always producing a balanced state
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dialectic_core::TriadVector;
//!
//! let thesis = TriadVector::new(1u32, 0u32, 0u32);
//! let antithesis = TriadVector::new(0u32, 1u32, 0u32);
//!
//! let tension = thesis.hybridize(&antithesis);     // (1, 1, 0)
//! let synthesis = tension.resolve();               // (1, 1, 2)
//! assert!(synthesis.is_balanced());
//! ```
//!
//! # Canonical seeds
//!
//! The model's three base states are (1,0,0), (0,1,0) and (0,0,1). Note
//! that the first two do not satisfy the balance axiom; the source model
//! treats them as base states regardless, and this crate preserves that.

#![warn(missing_docs)]

mod error;
mod triad;
mod vector;

pub use error::{DialecticError, Result};
pub use triad::{compose_triad, TriadReport};
pub use vector::{canonical_seeds, TriadVector};
