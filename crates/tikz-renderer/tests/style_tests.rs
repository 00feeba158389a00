//! Tests for plot style loading, palettes and document assembly.

use std::io::Write;

use tikz_renderer::{
    blue_red, define_colors, tableau20, AxisStyle, Palette, PlotStyle, RenderError, Rgb,
};

// ============================================================================
// Style loading
// ============================================================================

#[test]
fn test_style_from_json() {
    let json = r#"{
        "picture": {"xdim": 2.75, "ydim": 2.25, "xunit": "in", "yunit": "in"},
        "font_package": "helvet",
        "line": "ultra thick",
        "palette": "tableau20",
        "transform": {"xscale": 0.75, "yscale": 0.75},
        "viewport": {"xmin": -1.1, "xmax": 1.1, "ymin": -0.35, "ymax": 1.05},
        "axes": {
            "style": "classic",
            "tick_frac": 0.01,
            "yticks": [-0.25, 0, 0.5, 1.0],
            "xlabel": "$\\xi$",
            "ylabel": null
        }
    }"#;
    let style = PlotStyle::from_json(json).unwrap();

    assert_eq!(style.picture.xdim, 2.75);
    assert_eq!(style.picture.xunit, "in");
    assert!(style.picture.use_sf);
    assert_eq!(style.palette, Palette::Tableau20);
    assert_eq!(style.transform.xscale, 0.75);
    assert_eq!(style.transform.xbase, 0.0);
    assert_eq!(style.viewport.unwrap().ymin(), -0.35);
    assert_eq!(style.axes.style, AxisStyle::Classic);
    assert_eq!(style.axes.xlabel.as_deref(), Some("$\\xi$"));
    assert_eq!(style.axes.ylabel, None);
    // Untouched axis fields keep their defaults
    assert_eq!(style.axes.axis_color, "gray");
}

#[test]
fn test_style_propagates_transform_and_viewport() {
    let style = PlotStyle::from_json(
        r#"{"transform": {"xscale": 0.25, "yscale": 0.5},
            "viewport": {"xmin": 0.75, "xmax": 11.25, "ymin": -0.1, "ymax": 2.05}}"#,
    )
    .unwrap();

    let line = style.line_options("cust0");
    assert_eq!(line.color, "cust0");
    assert_eq!(line.line.as_deref(), Some("thick"));
    assert_eq!(line.transform, style.transform);
    assert_eq!(line.viewport, style.viewport);

    assert_eq!(style.axes_options().transform.xscale, 0.25);
}

#[test]
fn test_style_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"palette": "germany", "line": "semithick"}}"#).unwrap();

    let style = PlotStyle::from_file(file.path()).unwrap();
    assert_eq!(style.palette, Palette::Germany);
    assert_eq!(style.line, "semithick");
}

#[test]
fn test_style_errors() {
    assert!(matches!(
        PlotStyle::from_file("/nonexistent/style.json"),
        Err(RenderError::Io(_))
    ));
    assert!(matches!(PlotStyle::from_json("{ not json"), Err(RenderError::Json(_))));
    assert!(matches!(
        PlotStyle::from_json(r#"{"palette": "plaid"}"#),
        Err(RenderError::Json(_))
    ));
    assert!(matches!(
        PlotStyle::from_json(r#"{"picture": {"xdim": -1}}"#),
        Err(RenderError::InvalidStyle(_))
    ));
    // Inverted viewport fails during deserialization
    assert!(matches!(
        PlotStyle::from_json(r#"{"viewport": {"xmin": 1, "xmax": 0, "ymin": 0, "ymax": 1}}"#),
        Err(RenderError::Json(_))
    ));
}

#[test]
fn test_style_figure() {
    let style = PlotStyle::from_json(
        r#"{"picture": {"xdim": 2.0, "ydim": 2.0, "xunit": "in", "yunit": "in", "use_sf": false},
            "font_package": null}"#,
    )
    .unwrap();
    let tex = style.figure().finish();

    assert!(tex.contains("\\begin{tikzpicture}[x=2.000000in, y=2.000000in]\n"));
    assert!(!tex.contains("\\sffamily"));
    assert!(!tex.contains("helvet"));
}

// ============================================================================
// Palettes
// ============================================================================

#[test]
fn test_tableau20() {
    let colors = tableau20();
    assert_eq!(colors.len(), 20);
    assert_eq!(colors[0], Rgb::new(31, 119, 180));
    assert_eq!(colors[19], Rgb::new(158, 218, 229));
}

#[test]
fn test_blue_red_ramp() {
    let colors = blue_red(13);
    assert_eq!(colors.len(), 13);
    assert_eq!(colors[0], Rgb::new(25, 42, 86));
    assert_eq!(colors[12], Rgb::new(194, 54, 22));
    // Lower half stops at u = 0.375, upper half starts past 0.625
    assert_eq!(colors[6], Rgb::new(197, 201, 212));
    assert_eq!(colors[7], Rgb::new(232, 179, 167));
}

#[test]
fn test_blue_red_small_counts() {
    assert!(blue_red(0).is_empty());
    assert_eq!(blue_red(1), vec![Rgb::new(25, 42, 86)]);
    assert_eq!(blue_red(2), vec![Rgb::new(25, 42, 86), Rgb::new(194, 54, 22)]);
}

#[test]
fn test_named_palettes_cycle() {
    let colors = Palette::Germany.take(6);
    assert_eq!(colors.len(), 6);
    assert_eq!(colors[0], colors[4]);
    assert_eq!(colors[0], Rgb::new(0x2d, 0x40, 0x59));

    assert_eq!(Palette::Default.colors().len(), 10);
    assert_eq!(Palette::BlueRed.take(5), blue_red(5));
}

#[test]
fn test_define_colors() {
    let (tex, names) = define_colors("cust", &[Rgb::new(0, 184, 148), Rgb::new(0, 206, 201)]);
    assert_eq!(names, vec!["cust0", "cust1"]);
    assert_eq!(
        tex,
        "\\definecolor{cust0}{RGB}{0,184,148}\n\\definecolor{cust1}{RGB}{0,206,201}\n"
    );
}
