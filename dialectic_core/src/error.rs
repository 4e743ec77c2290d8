// SPDX-License-Identifier: MIT OR Apache-2.0
//! Boundary validation errors.
//!
//! Every operator in this workspace is a total function over well-typed
//! triples; the only representable misuses are malformed textual or slice
//! input at the API boundary.

use thiserror::Error;

/// Errors raised when constructing a [`crate::TriadVector`] from untyped input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialecticError {
    /// A vector must have exactly three components.
    #[error("expected 3 components, got {0}")]
    InvalidArity(usize),

    /// A component failed to parse as a non-negative integer.
    #[error("invalid component value: {0}")]
    InvalidComponent(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DialecticError>;
