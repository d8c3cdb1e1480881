//! Ordinary-least-squares trendline for chart data.

use serde::{Deserialize, Serialize};

/// One input sample for a trendline fit.
///
/// Untagged to match the wire shapes charting hosts produce: `[x, y]`
/// pairs (either coordinate may be `null`), bare numbers (a y value on a
/// categorical axis, x is the sample's position), and `null` gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendSample {
    Pair(Option<f64>, Option<f64>),
    Value(f64),
    Missing,
}

impl TrendSample {
    /// The (x, y) this sample contributes, with `index` standing in for x
    /// on the categorical axis. `None` for gaps and half-empty pairs.
    fn resolve(&self, index: usize) -> Option<(f64, f64)> {
        match *self {
            TrendSample::Pair(Some(x), Some(y)) => Some((x, y)),
            TrendSample::Value(y) => Some((index as f64, y)),
            _ => None,
        }
    }
}

/// A fitted trendline: the predicted points plus the line coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendlineResult {
    /// `[x, slope * x + intercept]` for every retained sample, in input
    /// order.
    pub fitted: Vec<[f64; 2]>,
    pub slope: f64,
    pub intercept: f64,
}

/// Fit a least-squares line through `samples`.
///
/// Gaps (`Missing`, pairs with a `null` coordinate) are skipped: they
/// contribute nothing to the fit and do not appear in `fitted`. Bare
/// values take their 0-based position in `samples` as x, gaps included.
///
/// With no retained samples, or all retained x identical, the closed form
/// divides by zero and the non-finite slope/intercept propagate to the
/// caller; guard with `is_finite` before drawing. Never panics.
pub fn fit_trendline(samples: &[TrendSample]) -> TrendlineResult {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.resolve(i))
        .collect();

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) =
        points
            .iter()
            .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxy, sxx), &(x, y)| {
                (sx + x, sy + y, sxy + x * y, sxx + x * x)
            });

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    let fitted = points
        .iter()
        .map(|&(x, _)| [x, slope * x + intercept])
        .collect();

    TrendlineResult {
        fitted,
        slope,
        intercept,
    }
}
