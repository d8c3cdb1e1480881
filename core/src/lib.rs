pub mod geometry;
pub mod intercept;
pub mod trendline;

pub use intercept::{compute_intersection, compute_intersection_with};
pub use trendline::fit_trendline;

pub fn version() -> &'static str {
    "0.1.0"
}
