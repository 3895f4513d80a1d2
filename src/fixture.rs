//! Recorded fit cases and their verification.
//!
//! A fixture file holds a list of fit calls together with the spline they are
//! expected to return:
//!
//! ```json
//! { "fit": [ { "args": [[[0, 0], [10, 0]], 1.0],
//!              "returns": [[[0, 0], [3.333, 0], [6.667, 0], [10, 0]]] } ] }
//! ```
//!
//! Running a fixture classifies the call as passed, failed (wrong result) or
//! errored (the fit function panicked).

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;

use super::{CubicBezier, FixtureError, NativeFloat, Spline, Vector2};

/// Absolute per-component tolerance when comparing control points.
pub const COMPARE_EPSILON: NativeFloat = 1e-4;

type RawPoint = [NativeFloat; 2];

#[derive(Debug, Deserialize)]
struct RawFixtureSet {
    fit: Vec<RawFixture>,
}

#[derive(Debug, Deserialize)]
struct RawFixture {
    args: (Vec<RawPoint>, NativeFloat),
    returns: Vec<[RawPoint; 4]>,
}

/// One recorded fit call.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub points: Vec<Vector2<NativeFloat>>,
    pub max_error: NativeFloat,
    pub expected: Vec<CubicBezier<NativeFloat>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureOutcome {
    Passed,
    /// The fit returned but differs from the expectation.
    Failed(Vec<String>),
    /// The fit panicked, carrying the panic message.
    Errored(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureResult {
    pub outcome: FixtureOutcome,
    pub elapsed: Duration,
}

impl FixtureResult {
    pub fn passed(&self) -> bool {
        self.outcome == FixtureOutcome::Passed
    }

    pub fn errored(&self) -> bool {
        matches!(self.outcome, FixtureOutcome::Errored(_))
    }
}

impl Fixture {
    /// Lists every difference between `actual` and the expected spline.
    /// A length mismatch is reported as a single issue.
    pub fn compare(&self, actual: &[CubicBezier<NativeFloat>]) -> Vec<String> {
        if actual.len() != self.expected.len() {
            return vec![format!(
                "Expected spline of length {}, but got {}",
                self.expected.len(),
                actual.len()
            )];
        }

        actual
            .iter()
            .zip(&self.expected)
            .enumerate()
            .filter(|(_, (a, e))| !beziers_are_same(a, e, COMPARE_EPSILON))
            .map(|(i, (a, e))| {
                format!(
                    "Expected {}th segment to be {}, but got {}",
                    i,
                    describe(e),
                    describe(a)
                )
            })
            .collect()
    }

    /// Calls `fit_fn` with the recorded arguments and checks its result.
    pub fn run<F>(&self, fit_fn: F) -> FixtureResult
    where
        F: Fn(&[Vector2<NativeFloat>], NativeFloat) -> Spline<NativeFloat>,
    {
        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| fit_fn(&self.points, self.max_error)));
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(spline) => {
                let issues = self.compare(&spline);
                if issues.is_empty() {
                    FixtureOutcome::Passed
                } else {
                    FixtureOutcome::Failed(issues)
                }
            }
            Err(payload) => FixtureOutcome::Errored(panic_message(payload.as_ref())),
        };

        FixtureResult { outcome, elapsed }
    }
}

/// An ordered collection of fixtures, usually read from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    fixtures: Vec<Fixture>,
}

impl FixtureSet {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawFixtureSet = serde_json::from_str(json)?;
        let fixtures = raw
            .fit
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Fixture::try_from_raw(index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FixtureSet { fixtures })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Runs every fixture in order.
    pub fn run_all<F>(&self, fit_fn: F) -> Vec<FixtureResult>
    where
        F: Fn(&[Vector2<NativeFloat>], NativeFloat) -> Spline<NativeFloat>,
    {
        self.fixtures.iter().map(|f| f.run(&fit_fn)).collect()
    }
}

impl Fixture {
    fn try_from_raw(index: usize, raw: RawFixture) -> Result<Self, FixtureError> {
        let (points, max_error) = raw.args;
        if max_error < 0.0 {
            return Err(FixtureError::Shape {
                index,
                reason: format!("negative tolerance {}", max_error),
            });
        }

        Ok(Fixture {
            points: points.into_iter().map(Vector2::from).collect(),
            max_error,
            expected: raw
                .returns
                .into_iter()
                .map(|cps| CubicBezier::from(cps.map(Vector2::from)))
                .collect(),
        })
    }
}

fn vectors_are_same(a: Vector2<NativeFloat>, b: Vector2<NativeFloat>, epsilon: NativeFloat) -> bool {
    let d = (a - b).abs();
    d.x < epsilon && d.y < epsilon
}

fn beziers_are_same(a: &CubicBezier<NativeFloat>, b: &CubicBezier<NativeFloat>, epsilon: NativeFloat) -> bool {
    a.control_points()
        .iter()
        .zip(b.control_points().iter())
        .all(|(&p, &q)| vectors_are_same(p, q, epsilon))
}

fn describe(bezier: &CubicBezier<NativeFloat>) -> String {
    let [a, b, c, d] = bezier.control_points();
    format!(
        "[{}, {}], [{}, {}], [{}, {}], [{}, {}]",
        a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
    )
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "fit panicked".to_string()
    }
}
