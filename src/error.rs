//! Error types.

use thiserror::Error;

/// Errors from spatial-math operations that can fail at runtime.
///
/// Violated preconditions that indicate programmer error (out-of-range
/// component indices, malformed projection parameters) panic instead; the
/// panics are documented on the operations that perform them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    /// Strict projection of homogeneous coordinates with `w = 0`.
    #[error("division by zero when projecting homogeneous coordinates (w = 0)")]
    DivisionByZero,
    /// Inversion of a matrix whose determinant is zero or near zero.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
