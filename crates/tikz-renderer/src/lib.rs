//! TikZ output for 2D plots.
//!
//! Every function returns a string of TikZ commands in drawing
//! coordinates; a [`Figure`] wraps them into a standalone LaTeX document.
//!
//! Implements:
//! - Clipped line plots with point markers
//! - Range-frame and classic axes
//! - Grouped bar charts and legend entries
//! - Contour plots on triangle and quad meshes (via `mesh-contour`)
//! - Palettes and JSON plot styles

pub mod axes;
pub mod bar;
pub mod contour_plot;
pub mod document;
pub mod error;
pub mod format;
pub mod legend;
pub mod palette;
pub mod plot;
pub mod style;
pub mod transform;

pub use axes::{axes, AxesOptions, AxisStyle};
pub use bar::{bar_chart, BarOptions};
pub use contour_plot::{level_colors, quad_contour_plot, tri_contour_plot, ContourPlotOptions};
pub use document::{Figure, PictureOptions};
pub use error::{RenderError, Result};
pub use legend::legend_entry;
pub use palette::{blue_red, define_colors, hex_to_rgb, tableau20, Palette, Rgb};
pub use plot::{line_plot, zip_points, LineOptions, Symbol};
pub use style::PlotStyle;
pub use transform::Transform;
