//! Standalone LaTeX document scaffolding around a `tikzpicture`.
//!
//! Output uses the `preview` package so the compiled PDF is cropped to the
//! picture with a 5pt border.

use serde::{Deserialize, Serialize};

/// Font package loaded by default.
pub const DEFAULT_FONT_PACKAGE: &str = "helvet";

/// Size of one data unit in the picture, plus font family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureOptions {
    pub xdim: f64,
    pub ydim: f64,
    pub xunit: String,
    pub yunit: String,
    /// Switch the picture to sans-serif.
    pub use_sf: bool,
}

impl Default for PictureOptions {
    fn default() -> Self {
        Self {
            xdim: 1.0,
            ydim: 1.0,
            xunit: "cm".to_string(),
            yunit: "cm".to_string(),
            use_sf: true,
        }
    }
}

/// Preamble up to (not including) `\begin{document}`.
pub fn header(font_package: Option<&str>) -> String {
    let mut s = String::new();
    s.push_str("\\documentclass{article}\n");
    s.push_str("\\usepackage[usenames,dvipsnames]{xcolor}\n");
    s.push_str("\\usepackage{tikz}\n");
    s.push_str("\\usepackage[active,tightpage]{preview}\n");
    s.push_str("\\usepackage{amsmath}\n");
    if let Some(package) = font_package {
        s.push_str(&format!("\\usepackage{{{}}}\n", package));
    }
    s.push_str("\\usepackage{sfmath}\n");
    s.push_str("\\PreviewEnvironment{tikzpicture}\n");
    s.push_str("\\setlength\\PreviewBorder{5pt}\n");
    s
}

/// `\begin{tikzpicture}` with unit vectors, optionally followed by
/// `\sffamily`.
pub fn begin_picture(opts: &PictureOptions) -> String {
    let mut s = format!(
        "\\begin{{tikzpicture}}[x={:.6}{}, y={:.6}{}]\n",
        opts.xdim, opts.xunit, opts.ydim, opts.yunit
    );
    if opts.use_sf {
        s.push_str("\\sffamily\n");
    }
    s
}

pub fn end_picture() -> String {
    "\\end{tikzpicture}\n".to_string()
}

/// Opens the document and figure, then the picture.
pub fn begin_document(opts: &PictureOptions) -> String {
    let mut s = String::new();
    s.push_str("\\begin{document}\n");
    s.push_str("\\begin{figure}[h]\n");
    s.push_str(&begin_picture(opts));
    s
}

/// Closes the picture, figure and document.
pub fn end_document() -> String {
    let mut s = end_picture();
    s.push_str("\\end{figure}\n");
    s.push_str("\\end{document}\n");
    s
}

/// Accumulates drawing commands for a single standalone figure.
///
/// ```
/// use tikz_renderer::document::{Figure, PictureOptions};
///
/// let mut fig = Figure::new(PictureOptions::default());
/// fig.push("\\draw (0, 0) -- (1, 1);\n");
/// let tex = fig.finish();
/// assert!(tex.starts_with("\\documentclass{article}"));
/// assert!(tex.ends_with("\\end{document}\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    picture: PictureOptions,
    font_package: Option<String>,
    body: String,
}

impl Figure {
    pub fn new(picture: PictureOptions) -> Self {
        Self {
            picture,
            font_package: Some(DEFAULT_FONT_PACKAGE.to_string()),
            body: String::new(),
        }
    }

    /// Replace the font package; `None` loads no font package.
    pub fn with_font_package(mut self, package: Option<String>) -> Self {
        self.font_package = package;
        self
    }

    pub fn push(&mut self, tex: &str) {
        self.body.push_str(tex);
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The complete document.
    pub fn finish(self) -> String {
        let mut s = header(self.font_package.as_deref());
        s.push_str(&begin_document(&self.picture));
        s.push_str(&self.body);
        s.push_str(&end_document());
        s
    }
}
