//! Plot style configuration loaded from JSON.

use std::path::Path;

use mesh_contour::Viewport;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axes::AxesOptions;
use crate::document::{Figure, PictureOptions, DEFAULT_FONT_PACKAGE};
use crate::error::{RenderError, Result};
use crate::palette::{Palette, Rgb};
use crate::plot::LineOptions;
use crate::transform::Transform;

/// Figure-wide style: picture size, fonts, palette, scaling and axes.
///
/// Every field is optional in JSON; missing fields take the defaults below.
///
/// ```
/// use tikz_renderer::style::PlotStyle;
///
/// let style = PlotStyle::from_json(r#"{
///     "picture": {"xdim": 2.0, "ydim": 2.0, "xunit": "in", "yunit": "in"},
///     "line": "ultra thick",
///     "palette": "blue-red",
///     "axes": {"tick_frac": 0.01, "xticks": [-1, 0, 1]}
/// }"#)?;
/// assert_eq!(style.colors(13).len(), 13);
/// # Ok::<(), tikz_renderer::RenderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub picture: PictureOptions,
    /// LaTeX font package; `null` loads none.
    pub font_package: Option<String>,
    /// Line width keyword for data lines.
    pub line: String,
    pub palette: Palette,
    pub transform: Transform,
    /// Clip box in data coordinates; data bounds when absent.
    pub viewport: Option<Viewport>,
    pub axes: AxesOptions,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            picture: PictureOptions::default(),
            font_package: Some(DEFAULT_FONT_PACKAGE.to_string()),
            line: "thick".to_string(),
            palette: Palette::Default,
            transform: Transform::identity(),
            viewport: None,
            axes: AxesOptions::default(),
        }
    }
}

impl PlotStyle {
    /// Load a style from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let style = Self::from_json(&content)?;
        debug!(path = %path.display(), "Loaded plot style");
        Ok(style)
    }

    /// Reject sizes and scales that cannot produce a drawable picture.
    pub fn validate(&self) -> Result<()> {
        let p = &self.picture;
        if !(p.xdim.is_finite() && p.xdim > 0.0 && p.ydim.is_finite() && p.ydim > 0.0) {
            return Err(RenderError::invalid_style(format!(
                "picture dimensions must be positive, got {} x {}",
                p.xdim, p.ydim
            )));
        }
        let t = &self.transform;
        if [t.xscale, t.yscale, t.xbase, t.ybase].iter().any(|v| !v.is_finite()) || t.xscale == 0.0 || t.yscale == 0.0 {
            return Err(RenderError::invalid_style(format!(
                "transform must be finite with non-zero scales, got {:?}",
                t
            )));
        }
        if !self.axes.tick_frac.is_finite() || self.axes.tick_frac < 0.0 {
            return Err(RenderError::invalid_style(format!(
                "tick_frac must be non-negative, got {}",
                self.axes.tick_frac
            )));
        }
        Ok(())
    }

    /// `n` palette colors.
    pub fn colors(&self, n: usize) -> Vec<Rgb> {
        self.palette.take(n)
    }

    /// Line options in this style with the given color.
    pub fn line_options(&self, color: &str) -> LineOptions {
        LineOptions {
            line: Some(self.line.clone()),
            color: color.to_string(),
            viewport: self.viewport,
            transform: self.transform,
            ..LineOptions::default()
        }
    }

    /// Axis options sharing this style's transform.
    pub fn axes_options(&self) -> AxesOptions {
        AxesOptions {
            transform: self.transform,
            ..self.axes.clone()
        }
    }

    /// An empty figure with this style's picture size and font.
    pub fn figure(&self) -> Figure {
        Figure::new(self.picture.clone()).with_font_package(self.font_package.clone())
    }
}
