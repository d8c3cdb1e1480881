use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One vertex of a chart line.
///
/// Untagged so both wire shapes a charting host uses round-trip as-is:
/// `[x, y]` arrays deserialize to `Pair`, `{ "x": .., "y": .., ... }`
/// objects to `Labeled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinePoint {
    Pair([f64; 2]),
    Labeled(LabeledPoint),
}

/// A labeled point: coordinates plus whatever extra fields the host
/// attached (label, color, tooltip payload, ...). Extra fields are kept
/// verbatim and flattened back into the object on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinePoint {
    #[inline]
    pub fn x(&self) -> f64 {
        match self {
            LinePoint::Pair(p) => p[0],
            LinePoint::Labeled(p) => p.x,
        }
    }

    #[inline]
    pub fn y(&self) -> f64 {
        match self {
            LinePoint::Pair(p) => p[1],
            LinePoint::Labeled(p) => p.y,
        }
    }
}

impl From<[f64; 2]> for LinePoint {
    fn from(p: [f64; 2]) -> Self {
        LinePoint::Pair(p)
    }
}

/// Result of a successful intercept computation.
///
/// `line1`/`line2` are freshly built copies of the inputs with the
/// intercept point inserted (or substituted) in sort order; the caller's
/// slices are never touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterceptResult {
    pub x: f64,
    pub y: f64,
    pub line1: Vec<LinePoint>,
    pub line2: Vec<LinePoint>,
}

/// Why no intercept was produced.
///
/// Every variant is a normal, recoverable outcome: the caller keeps
/// drawing its original, unmodified lines. Nothing here is a fault to
/// propagate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoIntercept {
    #[error("invalid line input: {0}")]
    InvalidInput(String),

    #[error("lines are parallel")]
    Parallel,

    #[error("intercept rejected by caller hook")]
    Rejected,
}
