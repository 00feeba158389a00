//! Contour plot of the Rosenbrock function on a structured triangle mesh.
//!
//! Run with: cargo run --package tikz-renderer --example rosenbrock_contour [out.tex]

use mesh_contour::{structured_grid, Viewport};
use tikz_renderer::document::PictureOptions;
use tikz_renderer::{
    axes, blue_red, define_colors, tri_contour_plot, AxesOptions, ContourPlotOptions, Figure,
    LineOptions,
};

fn main() -> tikz_renderer::Result<()> {
    let output = std::env::args().nth(1).unwrap_or_else(|| "rosenbrock_contour.tex".to_string());

    let n = 250;
    let mesh = structured_grid(n, n, (-1.25, 1.25), (-1.25, 1.25))?;
    let values: Vec<f64> = mesh
        .x()
        .iter()
        .zip(mesh.y())
        .map(|(&x, &y)| (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2))
        .collect();

    let levels = [0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0];
    let viewport = Viewport::new(-1.30, 1.30, -1.30, 1.30)?;

    let mut fig = Figure::new(PictureOptions {
        xdim: 2.0,
        ydim: 2.0,
        xunit: "in".to_string(),
        yunit: "in".to_string(),
        ..Default::default()
    });

    let (defs, names) = define_colors("contour", &blue_red(levels.len()));
    fig.push(&defs);

    let opts = ContourPlotOptions {
        line: LineOptions {
            line: Some("ultra thick".to_string()),
            viewport: Some(viewport),
            ..Default::default()
        },
        colors: Some(names),
        ..Default::default()
    };
    fig.push(&tri_contour_plot(&mesh, &values, &levels, &opts)?);

    let ticks = vec![-1.25, -1.0, 0.0, 1.0, 1.25];
    fig.push(&axes(
        &viewport,
        &AxesOptions {
            xticks: ticks.clone(),
            yticks: ticks,
            tick_frac: 0.01,
            tick_font: "large".to_string(),
            label_font: "LARGE".to_string(),
            xlabel: Some("$x_{1}$".to_string()),
            ylabel: Some("$x_{2}$".to_string()),
            ylabel_offset: 0.08,
            ..Default::default()
        },
    )?);

    std::fs::write(&output, fig.finish())?;
    println!("Wrote {}", output);
    Ok(())
}
