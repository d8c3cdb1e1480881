//! Intercept pipeline: where do two chart lines cross, and what do the
//! lines look like with that crossing point spliced in?
//!
//! Each line is treated as the straight segment from its first to its
//! last point. The computed crossing is run past caller policy hooks,
//! materialized in the configured shape, and inserted into copies of both
//! lines in their original sort order.

pub mod options;
pub mod types;


pub use options::{AcceptAll, HookDecision, InterceptHooks, InterceptOptions, InterceptPointShape};
pub use types::{InterceptResult, LabeledPoint, LinePoint, NoIntercept};

use std::cmp::Ordering;
use tracing::debug;

use crate::geometry::intersection::{line_line_intercept, within_x_extent};

/// Compute the intercept of two chart lines with no policy hooks.
///
/// `Err` is the normal "keep your original lines" signal, not a fault;
/// see [`NoIntercept`].
pub fn compute_intersection(
    line1: &[LinePoint],
    line2: &[LinePoint],
    options: &InterceptOptions,
) -> Result<InterceptResult, NoIntercept> {
    compute_intersection_with(line1, line2, options, &mut AcceptAll)
}

/// Compute the intercept of two chart lines under caller policy hooks.
pub fn compute_intersection_with(
    line1: &[LinePoint],
    line2: &[LinePoint],
    options: &InterceptOptions,
    hooks: &mut dyn InterceptHooks,
) -> Result<InterceptResult, NoIntercept> {
    let (a1, a2) = endpoints(line1, "line1")?;
    let (b1, b2) = endpoints(line2, "line2")?;

    let Some([x, y]) = line_line_intercept(a1, a2, b1, b2) else {
        debug!("chart lines are parallel, no intercept");
        hooks.on_parallel();
        return Err(NoIntercept::Parallel);
    };

    // The segments themselves already cross or touch; give the caller a
    // chance to skip connecting lines that need no connecting.
    if within_x_extent(x, a1, a2)
        && within_x_extent(x, b1, b2)
        && hooks.on_already_intersecting(x, y) == HookDecision::Reject
    {
        return Err(NoIntercept::Rejected);
    }

    if hooks.validate_intersection(x, y) == HookDecision::Reject {
        return Err(NoIntercept::Rejected);
    }

    let point = options.point_shape.materialize(x, y);

    Ok(InterceptResult {
        x,
        y,
        line1: splice_intercept(line1, &point),
        line2: splice_intercept(line2, &point),
    })
}

/// First and last point of a line, or `InvalidInput` if it is too short
/// to define a segment.
fn endpoints(line: &[LinePoint], which: &str) -> Result<([f64; 2], [f64; 2]), NoIntercept> {
    match line {
        [first, .., last] => Ok(([first.x(), first.y()], [last.x(), last.y()])),
        _ => {
            debug!("{} has {} point(s), need at least 2", which, line.len());
            Err(NoIntercept::InvalidInput(format!(
                "{} needs at least 2 points, got {}",
                which,
                line.len()
            )))
        }
    }
}

/// Copy `line` with the intercept point spliced in.
///
/// A point with exactly the intercept's coordinates is replaced in place,
/// so repeated runs never duplicate the intercept. Otherwise the point is
/// appended and the copy re-sorted by x primary / y secondary, each axis
/// keeping the direction (ascending or descending) the original line used.
fn splice_intercept(line: &[LinePoint], point: &LinePoint) -> Vec<LinePoint> {
    let mut out = line.to_vec();

    let (x, y) = (point.x(), point.y());
    if let Some(existing) = out.iter_mut().find(|p| p.x() == x && p.y() == y) {
        *existing = point.clone();
        return out;
    }

    let x_ascending = line[0].x() <= line[line.len() - 1].x();
    let y_ascending = line[0].y() <= line[line.len() - 1].y();

    out.push(point.clone());
    out.sort_by(|a, b| {
        axis_cmp(a.x(), b.x(), x_ascending).then(axis_cmp(a.y(), b.y(), y_ascending))
    });
    out
}

#[inline]
fn axis_cmp(a: f64, b: f64, ascending: bool) -> Ordering {
    let ord = a.total_cmp(&b);
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}
