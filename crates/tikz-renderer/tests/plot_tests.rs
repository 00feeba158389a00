//! Tests for line plots, markers, axes, bar charts and legend entries.

use mesh_contour::{Point2D, Viewport};
use tikz_renderer::{
    axes, bar_chart, legend_entry, line_plot, zip_points, AxesOptions, AxisStyle, BarOptions,
    LineOptions, RenderError, Symbol, Transform,
};

fn unit() -> Viewport {
    Viewport::new(0.0, 1.0, 0.0, 1.0).unwrap()
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
    coords.iter().map(|&c| Point2D::from(c)).collect()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ============================================================================
// Line plots
// ============================================================================

#[test]
fn test_line_inside_viewport() {
    let opts = LineOptions {
        viewport: Some(unit()),
        ..Default::default()
    };
    let s = line_plot(&pts(&[(0.1, 0.1), (0.5, 0.5)]), &opts).unwrap();
    assert_eq!(s, "\\draw[thick, color=black] (0.100000, 0.100000) -- (0.500000, 0.500000);\n");
}

#[test]
fn test_line_split_into_runs() {
    let opts = LineOptions {
        viewport: Some(unit()),
        color: "NavyBlue".to_string(),
        ..Default::default()
    };
    let line = pts(&[(-1.0, 0.5), (0.5, 0.5), (2.0, 0.5), (0.5, 0.8), (0.2, 0.8)]);
    let s = line_plot(&line, &opts).unwrap();

    assert_eq!(count(&s, "\\draw[thick, color=NavyBlue]"), 2);
    let first = s.lines().next().unwrap();
    assert!(first.contains("(0.000000, 0.500000) -- (0.500000, 0.500000) -- (1.000000, 0.500000);"));
}

#[test]
fn test_line_default_viewport_is_data_bounds() {
    let line = zip_points(&[0.0, 2.0, 4.0], &[1.0, -1.0, 3.0]);
    let s = line_plot(&line, &LineOptions::default()).unwrap();
    assert_eq!(
        s,
        "\\draw[thick, color=black] (0.000000, 1.000000) -- (2.000000, -1.000000) -- (4.000000, 3.000000);\n"
    );
}

#[test]
fn test_line_transform_applied_after_clipping() {
    let opts = LineOptions {
        viewport: Some(unit()),
        transform: Transform {
            xscale: 2.0,
            xbase: 0.5,
            yscale: 10.0,
            ybase: 0.0,
        },
        ..Default::default()
    };
    let s = line_plot(&pts(&[(0.5, 0.0), (1.5, 0.1)]), &opts).unwrap();
    // Clipped at x = 1 (u = 0.5, y = 0.05), then mapped
    assert!(s.contains("(0.000000, 0.000000) -- (1.000000, 0.500000);"));
}

#[test]
fn test_empty_line_is_empty() {
    assert_eq!(line_plot(&[], &LineOptions::default()).unwrap(), "");
}

#[test]
fn test_non_finite_points_skipped() {
    let line = pts(&[(0.0, 0.0), (f64::NAN, 0.5), (1.0, 1.0), (2.0, 1.0)]);
    let s = line_plot(&line, &LineOptions::default()).unwrap();
    assert_eq!(count(&s, "\\draw["), 1);
    assert!(s.contains("(1.000000, 1.000000) -- (2.000000, 1.000000);"));
}

#[test]
fn test_line_touching_corner_draws_nothing() {
    let opts = LineOptions {
        viewport: Some(unit()),
        ..Default::default()
    };
    assert_eq!(line_plot(&pts(&[(0.0, 2.0), (2.0, 0.0)]), &opts).unwrap(), "");

    let s = line_plot(&pts(&[(0.5, 0.5), (1.0, 1.0), (2.0, 2.0)]), &opts).unwrap();
    assert_eq!(s, "\\draw[thick, color=black] (0.500000, 0.500000) -- (1.000000, 1.000000);\n");
}

#[test]
fn test_marker_links_skip_zero_length() {
    let opts = LineOptions {
        viewport: Some(unit()),
        symbol: Some(Symbol::Square),
        ..Default::default()
    };
    let s = line_plot(&pts(&[(0.0, 2.0), (2.0, 0.0)]), &opts).unwrap();
    assert_eq!(s, "");
}

// ============================================================================
// Markers
// ============================================================================

#[test]
fn test_markers_only_inside_viewport() {
    let opts = LineOptions {
        viewport: Some(unit()),
        symbol: Some(Symbol::Circle),
        ..Default::default()
    };
    let s = line_plot(&pts(&[(0.0, 0.0), (0.5, 0.5), (2.0, 2.0)]), &opts).unwrap();

    // Each visible link is its own command
    assert_eq!(count(&s, "\\draw[thick, color=black]"), 2);
    assert!(s.contains("(0.500000, 0.500000) -- (1.000000, 1.000000);"));
    // (2, 2) is outside
    assert_eq!(count(&s, "circle (0.075)"), 2);
    assert!(s.contains("\\draw[thin, color=black, fill=white] (0.500000, 0.500000) circle (0.075);"));
}

#[test]
fn test_markers_without_line() {
    let opts = LineOptions {
        line: None,
        symbol: Some(Symbol::Square),
        symbol_size: 0.2,
        ..Default::default()
    };
    let s = line_plot(&pts(&[(0.0, 0.0), (1.0, 1.0)]), &opts).unwrap();
    assert_eq!(count(&s, " -- "), 0);
    assert_eq!(count(&s, "rectangle"), 2);
    assert!(s.contains("(-0.100000, -0.100000) rectangle (0.100000, 0.100000);"));
}

#[test]
fn test_triangle_and_delta_point_opposite_ways() {
    let mk = |symbol| LineOptions {
        line: None,
        symbol: Some(symbol),
        symbol_size: 1.0,
        ..Default::default()
    };
    let at = pts(&[(0.0, 0.0)]);

    let up = line_plot(&at, &mk(Symbol::Triangle)).unwrap();
    assert!(up.contains("(-0.450000, -0.500000) -- (0.450000, -0.500000) -- (0.000000, 0.500000) -- cycle;"));

    let down = line_plot(&at, &mk(Symbol::Delta)).unwrap();
    assert!(down.contains("(-0.450000, 0.500000) -- (0.450000, 0.500000) -- (0.000000, -0.500000) -- cycle;"));
}

// ============================================================================
// Axes
// ============================================================================

#[test]
fn test_r_style_range_frame() {
    let opts = AxesOptions {
        xticks: vec![0.0, 0.5, 1.0],
        yticks: vec![0.0, 1.0],
        ..Default::default()
    };
    let s = axes(&unit(), &opts).unwrap();

    assert!(s.contains(
        "\\draw[thick, color=gray] (0.000000, -0.050000) -- (0.000000, 0.000000) -- (1.000000, 0.000000) -- (1.000000, -0.050000);"
    ));
    assert!(s.contains(
        "\\draw[thick, color=gray] (-0.050000, 0.000000) -- (0.000000, 0.000000) -- (0.000000, 1.000000) -- (-0.050000, 1.000000);"
    ));
    // Outward tick with %g label
    assert!(s.contains(
        "\\draw[font=\\normalsize, semithick, color=gray, text=black] (0.500000, 0.000000) -- (0.500000, -0.050000) node[below] {0.5};"
    ));
    assert!(s.contains("(0.000000, 1.000000) -- (-0.050000, 1.000000) node[left] {1};"));
}

#[test]
fn test_r_style_needs_two_ticks_for_frame() {
    let opts = AxesOptions {
        xticks: vec![0.5],
        xlabel: None,
        ylabel: None,
        ..Default::default()
    };
    let s = axes(&unit(), &opts).unwrap();
    assert_eq!(count(&s, "\\draw[thick, color=gray]"), 0);
    assert_eq!(count(&s, "node[below]"), 1);
}

#[test]
fn test_classic_axes_inward_ticks() {
    let opts = AxesOptions {
        style: AxisStyle::Classic,
        xticks: vec![0.5],
        ..Default::default()
    };
    let s = axes(&unit(), &opts).unwrap();

    assert!(s.contains("\\draw[thick, color=gray] (0.000000, 0.000000) -- (1.000000, 0.000000);"));
    assert!(s.contains("\\draw[thick, color=gray] (0.000000, 0.000000) -- (0.000000, 1.000000);"));
    assert!(s.contains("(0.500000, 0.050000) -- (0.500000, 0.000000) node[below] {0.5};"));
}

#[test]
fn test_axis_labels_placement() {
    let s = axes(&unit(), &AxesOptions::default()).unwrap();
    assert!(s.contains("\\draw[font=\\Large] (0.500000, -0.100000) node[below] {x};"));
    assert!(s.contains("\\draw[font=\\Large] (-0.150000, 0.500000) node[rotate=90] {y};"));
}

#[test]
fn test_explicit_tick_labels() {
    let opts = AxesOptions {
        xticks: vec![0.0, 1.0],
        xtick_labels: Some(vec!["low".to_string(), "high".to_string()]),
        ..Default::default()
    };
    let s = axes(&unit(), &opts).unwrap();
    assert!(s.contains("node[below] {low};"));
    assert!(s.contains("node[below] {high};"));
}

#[test]
fn test_tick_length_uses_smaller_side() {
    let v = Viewport::new(0.0, 10.0, 0.0, 1.0).unwrap();
    let opts = AxesOptions {
        xticks: vec![0.0, 10.0],
        tick_frac: 0.1,
        ..Default::default()
    };
    let s = axes(&v, &opts).unwrap();
    assert!(s.contains("(0.000000, -0.100000) -- (0.000000, 0.000000)"));
}

#[test]
fn test_mismatched_y_tick_labels() {
    let opts = AxesOptions {
        yticks: vec![0.0],
        ytick_labels: Some(vec![]),
        ..Default::default()
    };
    assert!(matches!(axes(&unit(), &opts), Err(RenderError::InvalidInput(_))));
}

// ============================================================================
// Bar charts
// ============================================================================

#[test]
fn test_bars_clamped_and_skipped() {
    let v = Viewport::new(0.75, 2.25, 0.0, 2.0).unwrap();
    let opts = BarOptions {
        colors: vec!["cust0".to_string(), "cust1".to_string()],
        x_sep: 0.0,
        ..Default::default()
    };
    let groups = vec![vec![5.0, -1.0], vec![1.0, 0.0]];
    let s = bar_chart(&groups, &v, &opts);

    // Negative and zero bars do not rise above ymin
    assert_eq!(s.lines().count(), 2);
    assert!(s.contains("\\draw[thick, color=cust0, fill=cust0, fill opacity=0.3] (1.025000, 0.000000) rectangle (1.475000, 2.000000);"));
    assert!(s.contains("(2.025000, 0.000000) rectangle (2.250000, 1.000000);"));
}

#[test]
fn test_bar_width_and_offset() {
    let v = Viewport::new(0.0, 5.0, 0.0, 5.0).unwrap();
    let opts = BarOptions {
        bar_width: Some(0.2),
        bar_offset: 0.05,
        ..Default::default()
    };
    let s = bar_chart(&[vec![1.0, 2.0]], &v, &opts);
    assert!(s.contains("(1.060000, 0.000000) rectangle (1.240000, 1.000000);"));
    assert!(s.contains("(1.260000, 0.000000) rectangle (1.440000, 2.000000);"));
    // No colors given
    assert_eq!(count(&s, "color=black"), 2);
}

#[test]
fn test_bar_transform() {
    let v = Viewport::new(0.0, 5.0, 0.0, 5.0).unwrap();
    let opts = BarOptions {
        bar_width: Some(0.5),
        transform: Transform::scaled(0.25, 0.5),
        ..Default::default()
    };
    let s = bar_chart(&[vec![4.0]], &v, &opts);
    assert!(s.contains("(0.256250, 0.000000) rectangle (0.368750, 2.000000);"));
}

// ============================================================================
// Legend
// ============================================================================

#[test]
fn test_legend_entry() {
    let opts = LineOptions {
        color: "Red".to_string(),
        viewport: Some(unit()),
        ..Default::default()
    };
    let s = legend_entry(1.0, 2.0, 0.5, "SIMP", "large", &opts).unwrap();
    assert_eq!(
        s,
        "\\draw[thick, color=Red] (0.750000, 2.000000) -- (1.250000, 2.000000);\n\
         \\draw[font=\\large] (1.375000, 2.000000) node[right] {SIMP};\n"
    );
}

#[test]
fn test_legend_entry_with_marker() {
    let opts = LineOptions {
        symbol: Some(Symbol::Diamond),
        ..Default::default()
    };
    let s = legend_entry(0.0, 0.0, 1.0, "data", "small", &opts).unwrap();
    assert_eq!(count(&s, "cycle;"), 2);
    assert!(s.ends_with("node[right] {data};\n"));
}
