//! Lagrange basis functions at the Gauss-Lobatto points, with explicit
//! tick labels.
//!
//! Run with: cargo run --package tikz-renderer --example basis [out.tex]

use mesh_contour::{Point2D, Viewport};
use tikz_renderer::document::PictureOptions;
use tikz_renderer::palette::define_color;
use tikz_renderer::{axes, blue_red, line_plot, AxesOptions, Figure, LineOptions, Transform};

fn main() -> tikz_renderer::Result<()> {
    let output = std::env::args().nth(1).unwrap_or_else(|| "basis_functions.tex".to_string());

    let n = 300;
    let p = 5;
    let xi: Vec<f64> = (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect();
    let knots: Vec<f64> = (0..=p)
        .map(|i| -(std::f64::consts::PI * i as f64 / p as f64).cos())
        .collect();

    let transform = Transform::scaled(0.75, 0.75);
    let viewport = Viewport::new(-1.1, 1.1, -0.35, 1.05)?;

    let mut fig = Figure::new(PictureOptions {
        xdim: 2.75,
        ydim: 2.25,
        xunit: "in".to_string(),
        yunit: "in".to_string(),
        ..Default::default()
    });

    let colors = blue_red(p + 1);
    for (i, &color) in colors.iter().enumerate() {
        let points: Vec<Point2D> = xi
            .iter()
            .map(|&x| {
                let value: f64 = (0..=p)
                    .filter(|&j| j != i)
                    .map(|j| (x - knots[j]) / (knots[i] - knots[j]))
                    .product();
                Point2D::new(x, value)
            })
            .collect();

        // Redefined before every curve
        fig.push(&define_color("customcolor", color));
        fig.push(&line_plot(
            &points,
            &LineOptions {
                line: Some("ultra thick".to_string()),
                color: "customcolor".to_string(),
                viewport: Some(viewport),
                transform,
                ..Default::default()
            },
        )?);
    }

    fig.push(&axes(
        &viewport,
        &AxesOptions {
            xtick_labels: Some(knots.iter().map(|&k| format!("{:.2}", k)).collect()),
            xticks: knots,
            yticks: vec![-0.25, 0.0, 0.5, 1.0],
            tick_frac: 0.01,
            tick_font: "large".to_string(),
            label_font: "LARGE".to_string(),
            xlabel: Some("$\\xi$".to_string()),
            ylabel: Some("$N(\\xi)$".to_string()),
            ylabel_offset: 0.08,
            transform,
            ..Default::default()
        },
    )?);

    std::fs::write(&output, fig.finish())?;
    println!("Wrote {}", output);
    Ok(())
}
