//! # Divergence Matrix
//!
//! Pairwise Jensen-Shannon divergence matrices over discrete probability
//! distributions.
//!
//! ## Theory
//!
//! Given row-wise distributions, every unordered pair of rows is scored
//! with the Jensen-Shannon divergence - a symmetrized, smoothed composition
//! of Kullback-Leibler terms against the pair's mixture:
//!
//! ```text
//! JS(P,Q) = (D_KL(P || M) + D_KL(Q || M)) / 2,   M = (P + Q) / 2
//! ```
//!
//! Logarithms are natural, so JS(P,Q) lies in [0, ln 2] for proper
//! distributions. KL terms where either operand is zero are excluded from
//! the sum, a deliberate smoothing convention in place of the strict
//! (singular) definition.
//!
//! ## Example
//!
//! ```rust
//! use divergence_matrix::jsd_matrix;
//!
//! let rows = vec![
//!     vec![0.7, 0.2, 0.1],
//!     vec![0.3, 0.4, 0.3],
//!     vec![0.25, 0.5, 0.25],
//! ];
//!
//! let result = jsd_matrix(&rows).unwrap();
//!
//! assert_eq!(result.dim(), 3);
//! assert_eq!(result.get(0, 0), 0.0);
//! assert_eq!(result.get(0, 1), result.get(1, 0));
//! ```

pub mod divergence;
pub mod error;
pub mod matrix;

// Re-exports
pub use divergence::*;
pub use error::*;
pub use matrix::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
