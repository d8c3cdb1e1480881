//! Pure 2D geometry shared by the intercept pipeline.

/// Tolerance for floating-point comparisons in tests and host-side checks.
/// The pipeline itself compares exactly; see `intersection`.
pub const EPSILON: f64 = 1e-6;

pub mod intersection;
pub use intersection::*;
