//! Adaptive fitting of a cubic Bezier spline to a polyline.
//!
//! Every subset of the input is fitted in the same way: parameterize by chord
//! length, generate a least-squares segment and measure its worst deviation.
//! A segment within the tolerance is accepted. A segment that misses only
//! slightly is refined by Newton-Raphson reparameterization. Otherwise the
//! subset is split at the worst point and both halves are fitted on their own,
//! sharing the split point and a common tangent direction there.

use log::{debug, trace};
use num_traits::Float;

use crate::deviation::{compute_max_error, MaxDeviation};
use crate::generate::generate_bezier;
use crate::parameterize::chord_length_parameterize;
use crate::roots::reparameterize;
use crate::{cast, CubicBezier, Spline, Vector2};

/// Parameters the error of a refined segment is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorReference {
    /// The chord-length parameters the subset started with.
    #[default]
    Initial,
    /// The parameters produced by the latest Newton-Raphson pass.
    Refined,
}

/// Tuning knobs of the fitting driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions<T> {
    /// Upper bound of reparameterization passes per subset.
    pub max_iterations: usize,
    /// Ratios of current to previous error inside this open interval count as
    /// a stall when the worst point did not move.
    pub stall_band: (T, T),
    /// Parameters the worst deviation is measured against while refining.
    pub error_reference: ErrorReference,
}

impl<T> Default for FitOptions<T>
where
    T: Float,
{
    fn default() -> Self {
        FitOptions {
            max_iterations: 20,
            stall_band: (cast(0.9999), cast(1.0001)),
            error_reference: ErrorReference::Initial,
        }
    }
}

impl<T> FitOptions<T>
where
    T: Float,
{
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_stall_band(mut self, lower: T, upper: T) -> Self {
        self.stall_band = (lower, upper);
        self
    }

    pub fn with_error_reference(mut self, error_reference: ErrorReference) -> Self {
        self.error_reference = error_reference;
        self
    }

    fn is_stalled(&self, ratio: T) -> bool {
        ratio > self.stall_band.0 && ratio < self.stall_band.1
    }
}

/// Fits a spline to `points` so that no point deviates more than
/// `max_error` (a squared distance) from the curve, using default options.
///
/// Consecutive duplicate points are dropped first. Fewer than two remaining
/// points give an empty spline. Otherwise the first segment starts at the
/// first point, the last segment ends at the last point, and consecutive
/// segments share their joint anchors.
pub fn fit<T>(points: &[Vector2<T>], max_error: T) -> Spline<T>
where
    T: Float + Default,
{
    fit_with_options(points, max_error, &FitOptions::default())
}

/// Same as [`fit`] with explicit [`FitOptions`].
pub fn fit_with_options<T>(points: &[Vector2<T>], max_error: T, options: &FitOptions<T>) -> Spline<T>
where
    T: Float + Default,
{
    fit_with_stats(points, max_error, options).0
}

/// How often each exit of the per-subset state machine was taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FitStats {
    /// Segments accepted after at least one reparameterization pass.
    pub(crate) refined: usize,
    /// Refinements abandoned because the error stopped improving.
    pub(crate) stalled: usize,
    pub(crate) splits: usize,
}

pub(crate) fn fit_with_stats<T>(
    points: &[Vector2<T>],
    max_error: T,
    options: &FitOptions<T>,
) -> (Spline<T>, FitStats)
where
    T: Float + Default,
{
    let mut stats = FitStats::default();
    let mut points = points.to_vec();
    points.dedup();

    let mut spline = Spline::new();
    if points.len() < 2 {
        debug!("{} distinct point(s), nothing to fit", points.len());
        return (spline, stats);
    }

    let n = points.len();
    let left = compute_tangent(points[1], points[0]);
    let right = compute_tangent(points[n - 2], points[n - 1]);

    // Ranges still to be fitted. The left half of a split is pushed last so it
    // is popped first, which keeps the segments in polyline order.
    let mut pending = vec![Subset {
        first: 0,
        last: n - 1,
        left,
        right,
    }];

    while let Some(subset) = pending.pop() {
        let slice = &points[subset.first..=subset.last];
        match fit_subset(slice, subset.left, subset.right, max_error, options, &mut stats) {
            SubsetFit::Accepted(bezier) => spline.push(bezier),
            SubsetFit::Split { index, to_center } => {
                stats.splits += 1;
                let split = subset.first + index;
                trace!(
                    "splitting points {}..={} at {}",
                    subset.first,
                    subset.last,
                    split
                );
                pending.push(Subset {
                    first: split,
                    last: subset.last,
                    left: -to_center,
                    right: subset.right,
                });
                pending.push(Subset {
                    first: subset.first,
                    last: split,
                    left: subset.left,
                    right: to_center,
                });
            }
        }
    }

    debug!(
        "fitted {} point(s) with {} segment(s), {:?}",
        n,
        spline.len(),
        stats
    );
    (spline, stats)
}

/// Unit vector pointing from `b` towards `a`.
fn compute_tangent<T: Float>(a: Vector2<T>, b: Vector2<T>) -> Vector2<T> {
    (a - b).normalize()
}

/// Index range `first..=last` into the deduplicated points together with the
/// tangents constraining its end segments.
#[derive(Debug, Clone, Copy)]
struct Subset<T> {
    first: usize,
    last: usize,
    left: Vector2<T>,
    right: Vector2<T>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SubsetFit<T> {
    Accepted(CubicBezier<T>),
    /// Split at `index` (relative to the subset). `to_center` is the tangent
    /// of the left half at the split point, the right half leaves it in the
    /// opposite direction.
    Split { index: usize, to_center: Vector2<T> },
}

fn fit_subset<T>(
    points: &[Vector2<T>],
    left: Vector2<T>,
    right: Vector2<T>,
    max_error: T,
    options: &FitOptions<T>,
    stats: &mut FitStats,
) -> SubsetFit<T>
where
    T: Float + Default,
{
    if points.len() == 2 {
        let dist = (points[0] - points[1]).length() / cast::<T>(3.0);
        return SubsetFit::Accepted(CubicBezier::new(
            points[0],
            points[0] + left.scale(dist),
            points[1] + right.scale(dist),
            points[1],
        ));
    }

    let u = chord_length_parameterize(points);
    let mut bezier = generate_bezier(points, &u, left, right);
    let mut worst = compute_max_error(points, &bezier, &u);

    if worst.squared_error < max_error {
        return SubsetFit::Accepted(bezier);
    }

    // If the error is not too large, try reparameterization and iteration
    if worst.squared_error < max_error * max_error {
        let mut u_prime = u.clone();
        let mut previous: MaxDeviation<T> = worst;
        for iteration in 0..options.max_iterations {
            u_prime = reparameterize(&bezier, points, &u_prime);
            bezier = generate_bezier(points, &u_prime, left, right);
            let reference = match options.error_reference {
                ErrorReference::Initial => &u,
                ErrorReference::Refined => &u_prime,
            };
            worst = compute_max_error(points, &bezier, reference);

            if worst.squared_error < max_error {
                trace!("accepted after {} reparameterization pass(es)", iteration + 1);
                stats.refined += 1;
                return SubsetFit::Accepted(bezier);
            }
            if worst.index == previous.index
                && options.is_stalled(worst.squared_error / previous.squared_error)
            {
                trace!("reparameterization stalled after {} pass(es)", iteration + 1);
                stats.stalled += 1;
                break;
            }
            previous = worst;
        }
    }

    // Both neighbours of the split point have to exist
    let index = worst.index.clamp(1, points.len() - 2);
    SubsetFit::Split {
        index,
        to_center: center_tangent(points, index),
    }
}

/// Tangent at an inner split point, parallel to the chord between its two
/// neighbours. Coinciding neighbours fall back to the perpendicular of the
/// incoming edge.
fn center_tangent<T: Float>(points: &[Vector2<T>], index: usize) -> Vector2<T> {
    let mut center = points[index - 1] - points[index + 1];
    if center.is_zero() {
        center = (points[index - 1] - points[index]).perp();
    }
    center.normalize()
}
