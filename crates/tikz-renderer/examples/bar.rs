//! Grouped bar chart with four bars per group.
//!
//! Run with: cargo run --package tikz-renderer --example bar [out.tex]

use mesh_contour::Viewport;
use tikz_renderer::document::PictureOptions;
use tikz_renderer::{
    axes, bar_chart, define_colors, AxesOptions, BarOptions, Figure, Palette, Transform,
};

fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| a + (b - a) * i as f64 / (n - 1) as f64).collect()
}

fn main() -> tikz_renderer::Result<()> {
    let output = std::env::args().nth(1).unwrap_or_else(|| "bar_plot.tex".to_string());

    let n = 10;
    let half_to_one = linspace(0.5, 1.0, n);
    let tenth_to_one = linspace(0.1, 1.0, n);
    let groups: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            vec![
                1.0 / half_to_one[i],
                1.0 / half_to_one[i].powi(2),
                tenth_to_one[i],
                tenth_to_one[i].powi(2),
            ]
        })
        .collect();

    let transform = Transform::scaled(0.25, 0.5);
    let viewport = Viewport::new(0.75, 11.25, -0.1, 2.05)?;

    let mut fig = Figure::new(PictureOptions {
        xdim: 1.75,
        ydim: 2.75,
        xunit: "in".to_string(),
        yunit: "in".to_string(),
        ..Default::default()
    });

    let (defs, names) = define_colors("cust", &Palette::Default.take(4));
    fig.push(&defs);

    fig.push(&bar_chart(
        &groups,
        &viewport,
        &BarOptions {
            colors: names,
            x_sep: 0.0,
            bar_width: Some(0.2),
            bar_offset: 0.05,
            transform,
            ..Default::default()
        },
    ));

    fig.push(&axes(
        &viewport,
        &AxesOptions {
            xticks: vec![1.0, 5.0, 10.0],
            yticks: vec![0.0, 1.0, 2.0],
            tick_frac: 0.01,
            ylabel_offset: 0.08,
            xlabel: None,
            ylabel: None,
            transform,
            ..Default::default()
        },
    )?);

    std::fs::write(&output, fig.finish())?;
    println!("Wrote {}", output);
    Ok(())
}
