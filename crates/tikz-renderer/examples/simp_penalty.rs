//! SIMP and RAMP penalty curves with the SIMP linearization at a base
//! point, a marker on the base point and a legend.
//!
//! Run with: cargo run --package tikz-renderer --example simp_penalty [out.tex]

use mesh_contour::{Point2D, Viewport};
use tikz_renderer::document::PictureOptions;
use tikz_renderer::{
    axes, legend_entry, line_plot, zip_points, AxesOptions, Figure, LineOptions, Symbol,
};

fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| a + (b - a) * i as f64 / (n - 1) as f64).collect()
}

fn main() -> tikz_renderer::Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "simp_penalty_linearized.tex".to_string());

    let (p, q, x0) = (3.0_f64, 5.0, 0.5);
    let x = linspace(0.0, 1.0, 150);
    let simp: Vec<f64> = x.iter().map(|&v| v.powf(p)).collect();
    let ramp: Vec<f64> = x.iter().map(|&v| v / (1.0 + q * (1.0 - v))).collect();
    let x_lin = linspace(x0 / p, 1.0, 100);
    let y_lin: Vec<f64> = x_lin
        .iter()
        .map(|&v| x0.powf(p) + p * x0.powf(p - 1.0) * (v - x0))
        .collect();

    let viewport = Viewport::new(-0.05, 1.0, 0.0, 1.0)?;
    let line = |color: &str| LineOptions {
        line: Some("ultra thick".to_string()),
        color: color.to_string(),
        viewport: Some(viewport),
        ..Default::default()
    };

    let mut fig = Figure::new(PictureOptions {
        xdim: 2.75,
        ydim: 2.75,
        xunit: "in".to_string(),
        yunit: "in".to_string(),
        ..Default::default()
    });

    // Short marks below the axis at x0 and (1 - 1/p) x0
    let marks = LineOptions {
        viewport: Some(Viewport::new(-0.05, 1.0, -1.0, 1.0)?),
        ..line("black")
    };
    for at in [x0, (1.0 - 1.0 / p) * x0] {
        fig.push(&line_plot(&[Point2D::new(at, -0.01), Point2D::new(at, 0.025)], &marks)?);
    }

    fig.push(&line_plot(&zip_points(&x, &simp), &line("Gray"))?);
    fig.push(&line_plot(&zip_points(&x, &ramp), &line("ForestGreen"))?);
    fig.push(&line_plot(&zip_points(&x_lin, &y_lin), &line("NavyBlue"))?);

    let base_point = LineOptions {
        symbol: Some(Symbol::Circle),
        symbol_size: 0.02,
        ..line("black")
    };
    fig.push(&line_plot(&[Point2D::new(x0, x0.powf(p))], &base_point)?);

    fig.push(&legend_entry(0.15, 0.9, 0.1, "SIMP", "normalsize", &line("Gray"))?);
    fig.push(&legend_entry(0.15, 0.82, 0.1, "RAMP", "normalsize", &line("ForestGreen"))?);
    fig.push(&legend_entry(0.15, 0.74, 0.1, "linearized", "normalsize", &line("NavyBlue"))?);

    fig.push(&axes(
        &viewport,
        &AxesOptions {
            xticks: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            yticks: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            tick_frac: 0.02,
            xlabel_offset: 0.15,
            ylabel_offset: 0.15,
            xlabel: Some("$x$".to_string()),
            ylabel: Some("$w(x)$".to_string()),
            ..Default::default()
        },
    )?);

    std::fs::write(&output, fig.finish())?;
    println!("Wrote {}", output);
    Ok(())
}
