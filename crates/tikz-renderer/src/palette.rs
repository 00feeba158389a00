//! Color palettes and `\definecolor` emission.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Parse a six digit hex color, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgb { r, g, b })
}

/// `\definecolor{name}{RGB}{r,g,b}` line.
pub fn define_color(name: &str, color: Rgb) -> String {
    format!("\\definecolor{{{}}}{{RGB}}{{{}}}\n", name, color)
}

/// Tableau's 20 category colors.
pub fn tableau20() -> Vec<Rgb> {
    [
        (31, 119, 180),
        (174, 199, 232),
        (255, 127, 14),
        (255, 187, 120),
        (44, 160, 44),
        (152, 223, 138),
        (214, 39, 40),
        (255, 152, 150),
        (148, 103, 189),
        (197, 176, 213),
        (140, 86, 75),
        (196, 156, 148),
        (227, 119, 194),
        (247, 182, 210),
        (127, 127, 127),
        (199, 199, 199),
        (188, 189, 34),
        (219, 219, 141),
        (23, 190, 207),
        (158, 218, 229),
    ]
    .into_iter()
    .map(Rgb::from)
    .collect()
}

const BLUE: Rgb = Rgb::new(0x19, 0x2a, 0x56);
const RED: Rgb = Rgb::new(0xc2, 0x36, 0x16);

/// `n` colors running from dark blue through white to dark red.
///
/// The lower half of the ramp covers `u` in `[0, 0.375]`, the upper half
/// `[0.625, 1]`, so the near-white middle is skipped and neighbours on
/// either side stay distinguishable.
pub fn blue_red(n: usize) -> Vec<Rgb> {
    let denom = n.saturating_sub(1).max(1) as f64;

    (0..n)
        .map(|i| {
            let frac = i as f64 / denom;
            let u = if (i as f64) < n as f64 / 2.0 {
                0.75 * frac
            } else {
                0.25 + 0.75 * frac
            };

            let (w_blue, w_red, w_white) = if u > 0.5 {
                (0.0, 2.0 * (u - 0.5), 1.0 - 2.0 * (u - 0.5))
            } else {
                (1.0 - 2.0 * u, 0.0, 2.0 * u)
            };

            let mix = |b: u8, r: u8, w: u8| -> u8 {
                let v = w_blue * b as f64 + w_red * r as f64 + w_white * w as f64;
                v.min(255.0) as u8
            };

            Rgb {
                r: mix(BLUE.r, RED.r, Rgb::WHITE.r),
                g: mix(BLUE.g, RED.g, Rgb::WHITE.g),
                b: mix(BLUE.b, RED.b, Rgb::WHITE.b),
            }
        })
        .collect()
}

/// Named palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    Tableau20,
    BlueGreen,
    OrangeGreen,
    Germany,
    /// Diverging ramp, sized to the number of colors requested.
    BlueRed,
    #[default]
    Default,
}

impl Palette {
    /// Look a palette up by name. Unknown names fall back to
    /// [`Palette::Default`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "tableau20" => Palette::Tableau20,
            "blue-green" => Palette::BlueGreen,
            "orange-green" => Palette::OrangeGreen,
            "germany" => Palette::Germany,
            "blue-red" => Palette::BlueRed,
            "default" => Palette::Default,
            other => {
                warn!(name = other, "Unknown palette, using default");
                Palette::Default
            }
        }
    }

    /// The palette's base colors.
    pub fn colors(self) -> Vec<Rgb> {
        let hex: &[&str] = match self {
            Palette::Tableau20 => return tableau20(),
            Palette::BlueRed => return blue_red(2),
            Palette::BlueGreen => &["48466d", "3d84a8", "46cdcf", "abedd8"],
            Palette::OrangeGreen => &["ffba5a", "c0ffb3", "52de97", "2c7873"],
            Palette::Germany => &["2d4059", "ea5455", "f07b3f", "ffd460"],
            Palette::Default => &[
                "00b894", "00cec9", "0984e3", "6c5ce7", "b2bec3", "fdcb6e", "e17055", "d63031",
                "e84393", "2d3436",
            ],
        };
        hex.iter().filter_map(|h| hex_to_rgb(h)).collect()
    }

    /// Exactly `n` colors: the ramp for [`Palette::BlueRed`], otherwise the
    /// base colors repeated cyclically.
    pub fn take(self, n: usize) -> Vec<Rgb> {
        if self == Palette::BlueRed {
            return blue_red(n);
        }
        let base = self.colors();
        base.iter().copied().cycle().take(n).collect()
    }
}

/// Emit `\definecolor` lines named `{prefix}{index}` for every color and
/// return the TeX source together with the names.
pub fn define_colors(prefix: &str, colors: &[Rgb]) -> (String, Vec<String>) {
    let mut tex = String::new();
    let mut names = Vec::with_capacity(colors.len());
    for (index, &color) in colors.iter().enumerate() {
        let name = format!("{}{}", prefix, index);
        tex.push_str(&define_color(&name, color));
        names.push(name);
    }
    (tex, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("00ff00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(hex_to_rgb("c23616"), Some(Rgb::new(194, 54, 22)));
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("fff"), None);
    }

    #[test]
    fn test_define_color() {
        assert_eq!(
            define_color("contour0", Rgb::new(25, 42, 86)),
            "\\definecolor{contour0}{RGB}{25,42,86}\n"
        );
    }

    #[test]
    fn test_unknown_palette_falls_back() {
        assert_eq!(Palette::from_name("no-such-palette"), Palette::Default);
        assert_eq!(Palette::from_name("germany"), Palette::Germany);
    }
}
