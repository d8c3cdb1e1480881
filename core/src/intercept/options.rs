//! Configuration and policy hooks for the intercept pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{LabeledPoint, LinePoint};

/// Shape of the intercept point materialized into the output lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum InterceptPointShape {
    /// Emit a bare `[x, y]` pair.
    #[default]
    Pair,
    /// Emit a labeled `{x, y, ...}` point carrying the template's fields,
    /// with `x`/`y` overwritten by the computed coordinates.
    Labeled { template: Map<String, Value> },
}

impl InterceptPointShape {
    /// Build the intercept point at (x, y) in this shape.
    pub fn materialize(&self, x: f64, y: f64) -> LinePoint {
        match self {
            InterceptPointShape::Pair => LinePoint::Pair([x, y]),
            InterceptPointShape::Labeled { template } => {
                let mut extra = template.clone();
                extra.remove("x");
                extra.remove("y");
                LinePoint::Labeled(LabeledPoint { x, y, extra })
            }
        }
    }
}

/// Configuration for the intercept computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterceptOptions {
    /// Shape of the inserted intercept point. Defaults to `Pair`.
    #[serde(default)]
    pub point_shape: InterceptPointShape,
}

/// Verdict returned by policy hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookDecision {
    /// Keep processing. This is the default for every hook.
    #[default]
    Continue,
    /// Abort the call with `NoIntercept::Rejected`.
    Reject,
}

/// Caller-supplied policy hooks for the intercept pipeline.
///
/// Every method has a defined default, so implementors override only what
/// they care about and a hookless call behaves identically to one with
/// `AcceptAll`.
pub trait InterceptHooks {
    /// The two lines are exactly parallel (zero determinant). Observation
    /// only; the call resolves to `NoIntercept::Parallel` regardless.
    fn on_parallel(&mut self) {}

    /// The computed intercept already lies within both segments' x
    /// extents, meaning the drawn lines cross or touch without help.
    /// `Reject` aborts; `Continue` inserts the point anyway.
    fn on_already_intersecting(&mut self, _x: f64, _y: f64) -> HookDecision {
        HookDecision::Continue
    }

    /// Final veto over the computed intercept point.
    fn validate_intersection(&mut self, _x: f64, _y: f64) -> HookDecision {
        HookDecision::Continue
    }
}

/// Hook set that accepts every intercept.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl InterceptHooks for AcceptAll {}
