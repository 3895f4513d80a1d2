extern crate plotters;
use plotters::prelude::*;

extern crate bezfit;
use bezfit::{fit, Projection, Rect, Vector2};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a digitized stroke: one and a half sine periods with a flat tail
    let mut points: Vec<Vector2<f64>> = (0..40)
        .map(|i| {
            let x = i as f64 * 0.25;
            Vector2::new(x, (x * 0.9).sin() * 3.0)
        })
        .collect();
    points.extend((1..8).map(|i| Vector2::new(9.75 + i as f64 * 0.5, -1.5)));

    let max_error = 0.05;
    let spline = fit(&points, max_error);
    println!("{} points -> {} segments", points.len(), spline.len());

    // map the input domain into the middle 80% of the image
    let domain = Rect::bounds_of(points.iter().copied()).ok_or("no points")?;
    let (w, h) = (WIDTH as f64, HEIGHT as f64);
    let viewport = Rect::from_xywh(w * 0.1, h * 0.1, w * 0.8, h * 0.8);
    let tx = Projection::new(domain, viewport);
    let px = |v: Vector2<f64>| (v.x().round() as i32, v.y().round() as i32);

    let root = BitMapBackend::new("fitted_spline.png", (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    // render the fitted segments to desired accuracy
    let nsteps: usize = 64;
    for bezier in spline.iter() {
        let bezier = tx.apply_bezier(bezier);
        let graph: Vec<(i32, i32)> = (0..=nsteps)
            .map(|t| px(bezier.eval(t as f64 / nsteps as f64)))
            .collect();
        root.draw(&PathElement::new(graph, BLUE.stroke_width(2)))?;

        // control polygon
        let hull: Vec<(i32, i32)> = bezier.control_points().iter().map(|&p| px(p)).collect();
        root.draw(&PathElement::new(hull, RED.mix(0.3)))?;
    }

    // input points
    for &p in points.iter() {
        let (i, j) = px(tx.apply(p));
        root.draw(&Circle::new((i, j), 4, BLUE.stroke_width(1)))?;
        root.draw(&Circle::new((i, j), 1, BLUE.filled()))?;
    }

    root.present()?;
    Ok(())
}
