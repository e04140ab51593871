//! Error types for body construction.
//!
//! Runtime degenerate inputs (zero-length normalize, both-static pairs, an
//! emptied clip segment) are defined fallbacks inside the collision code and
//! never surface as errors; only construction-time misuse is reported.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// A shape's defining geometry cannot produce valid mass properties.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
}
