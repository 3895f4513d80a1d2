extern crate approx;
extern crate bezfit;

use approx::assert_abs_diff_eq;
use bezfit::{fit, fit_with_options, ErrorReference, FitOptions, Spline, Vector2};

fn sine_samples(count: usize) -> Vec<Vector2<f64>> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.2;
            Vector2::new(x, x.sin() * 2.0)
        })
        .collect()
}

fn wavy_samples() -> Vec<Vector2<f64>> {
    (0..80)
        .map(|i| {
            let x = 0.5 * i as f64;
            Vector2::new(x, 20.0 * (0.7 * x).sin() + 3.0 * (2.3 * x).cos())
        })
        .collect()
}

fn assert_anchored(spline: &Spline<f64>, points: &[Vector2<f64>]) {
    assert!(!spline.is_empty());
    assert_eq!(spline.start(), points.first().copied());
    assert_eq!(spline.end(), points.last().copied());
    assert!(spline.is_continuous());
}

#[test]
fn sine_is_anchored_and_continuous() {
    let points = sine_samples(60);
    let spline = fit(&points, 0.01);
    assert_anchored(&spline, &points);
    for bezier in spline.iter().skip(1) {
        assert!(points.contains(&bezier.start()));
    }
}

#[test]
fn looser_tolerance_never_needs_more_segments() {
    let points = sine_samples(60);
    let counts: Vec<usize> = [1e-4, 1e-3, 1e-2, 0.1, 0.5, 1.0]
        .iter()
        .map(|&tolerance| fit(&points, tolerance).len())
        .collect();
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0], "segment counts {:?}", counts);
    }
    assert!(counts[0] > 1);
}

#[test]
fn looser_tolerance_with_reparameterization() {
    // tolerances above one let near misses be refined before splitting
    let points = wavy_samples();
    let counts: Vec<usize> = [0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 10.0, 20.0, 50.0]
        .iter()
        .map(|&tolerance| fit(&points, tolerance).len())
        .collect();
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0], "segment counts {:?}", counts);
    }
}

#[test]
fn two_points_are_joined_by_their_chord() {
    let points = [Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0)];
    let spline = fit(&points, 0.5);
    assert_eq!(spline.len(), 1);
    let bezier = spline[0];
    assert_abs_diff_eq!(bezier.ctrl1().x(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bezier.ctrl1().y(), 1.0 + 4.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bezier.ctrl2().x(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bezier.ctrl2().y(), 5.0 - 4.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn empty_and_single_point_inputs() {
    assert_eq!(fit::<f64>(&[], 0.1), Spline::new());
    assert_eq!(fit(&[Vector2::new(3.0, 4.0)], 0.1), Spline::new());
    let repeated = [Vector2::new(3.0, 4.0); 5];
    assert!(fit(&repeated, 0.1).is_empty());
}

#[test]
fn duplicates_do_not_change_the_result() {
    let points = sine_samples(30);
    let mut doubled = Vec::new();
    for &p in &points {
        doubled.push(p);
        doubled.push(p);
    }
    assert_eq!(fit(&doubled, 0.01), fit(&points, 0.01));
}

#[test]
fn closed_loop_keeps_its_anchors() {
    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(0.0, 10.0),
        Vector2::new(0.0, 0.0),
    ];
    let spline = fit(&points, 0.1);
    assert_anchored(&spline, &points);
    assert!(spline.len() > 1);
}

#[test]
fn refined_error_reference_keeps_invariants() {
    let points = wavy_samples();
    let options = FitOptions::default().with_error_reference(ErrorReference::Refined);
    let spline = fit_with_options(&points, 8.0, &options);
    assert_anchored(&spline, &points);
    assert_ne!(spline, fit(&points, 8.0));
}

#[test]
fn without_reparameterization_invariants_hold() {
    let points = wavy_samples();
    let options = FitOptions::default().with_max_iterations(0);
    let spline = fit_with_options(&points, 3.0, &options);
    assert_anchored(&spline, &points);
    assert!(spline.len() > fit(&points, 3.0).len());
}

#[test]
fn single_precision_points() {
    let points: Vec<Vector2<f32>> = (0..20)
        .map(|i| {
            let x = i as f32 * 0.3;
            Vector2::new(x, x.cos())
        })
        .collect();
    let spline = fit(&points, 0.001f32);
    assert!(!spline.is_empty());
    assert_eq!(spline.start(), Some(points[0]));
    assert_eq!(spline.end(), Some(points[19]));
    assert!(spline.is_continuous());
}

#[test]
fn spline_evaluation_hits_the_ends() {
    let points = sine_samples(40);
    let spline = fit(&points, 0.01);
    let start = spline.eval(0.0).unwrap();
    let end = spline.eval(1.0).unwrap();
    assert_abs_diff_eq!(start.x(), points[0].x(), epsilon = 1e-9);
    assert_abs_diff_eq!(end.x(), points[39].x(), epsilon = 1e-9);
    assert_abs_diff_eq!(end.y(), points[39].y(), epsilon = 1e-9);
    let bounds = spline.bounding_rect().unwrap();
    assert!(spline.iter().all(|b| bounds.contains(b.start()) && bounds.contains(b.end())));
}
