//! Colors and draw styles attached to primitive commands.

use easel_math::{consts, Fixed};
use serde::{Deserialize, Serialize};

use crate::RenderError;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA color.
///
/// Integer channels keep color handling float-free, so a color contributes
/// the same four bytes to a frame digest on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white: #FFFFFF.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black: #000000.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque red: #FF0000.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green: #00FF00.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue: #0000FF.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Color from explicit channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// The same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Color {
        Color {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

// ---------------------------------------------------------------------------
// Stroke and Style
// ---------------------------------------------------------------------------

/// Dash pattern for stroked lines: `on` units drawn, then `off` units
/// skipped, repeating along the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashPattern {
    /// Length of each drawn segment, in screen units.
    pub on: Fixed,
    /// Length of each gap, in screen units.
    pub off: Fixed,
}

impl DashPattern {
    /// Validated constructor. Both segment lengths must be strictly
    /// positive; a zero-length `on` would draw nothing and a zero-length
    /// `off` is a solid line pretending to be dashed.
    pub fn new(on: Fixed, off: Fixed) -> Result<DashPattern, RenderError> {
        if on <= consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "dash.on",
                requirement: "strictly positive",
                value: on.to_string(),
            });
        }
        if off <= consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "dash.off",
                requirement: "strictly positive",
                value: off.to_string(),
            });
        }
        Ok(DashPattern { on, off })
    }
}

/// Stroke appearance: color, screen-space width, optional dash pattern.
///
/// Widths are in screen units and are never scaled by camera zoom, so
/// outlines keep a stable pixel weight at any magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: Fixed,
    pub dash: Option<DashPattern>,
}

impl Stroke {
    /// Solid (undashed) stroke.
    pub const fn solid(color: Color, width: Fixed) -> Stroke {
        Stroke {
            color,
            width,
            dash: None,
        }
    }
}

/// Fill and outline style for closed shapes.
///
/// Either part may be absent. A style with neither fill nor stroke is legal
/// and draws nothing; backends may elide such commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Outline-only style with a solid stroke.
    pub const fn stroke(color: Color, width: Fixed) -> Style {
        Style {
            fill: None,
            stroke: Some(Stroke::solid(color, width)),
        }
    }

    /// Fill-only style.
    pub const fn fill(color: Color) -> Style {
        Style {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Filled shape with a solid outline.
    pub const fn fill_and_stroke(fill: Color, stroke: Color, width: Fixed) -> Style {
        Style {
            fill: Some(fill),
            stroke: Some(Stroke::solid(stroke, width)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use easel_math::from_int;

    #[test]
    fn with_alpha_preserves_rgb() {
        let translucent = Color::rgb(10, 20, 30).with_alpha(128);
        assert_eq!(translucent, Color::rgba(10, 20, 30, 128));
        assert_eq!(Color::WHITE.a, 255);
        assert_eq!(Color::TRANSPARENT.a, 0);
    }

    #[test]
    fn dash_pattern_rejects_non_positive_segments() {
        assert!(DashPattern::new(consts::ONE, consts::ONE).is_ok());
        assert!(matches!(
            DashPattern::new(consts::ZERO, consts::ONE),
            Err(RenderError::InvalidConfiguration { field: "dash.on", .. })
        ));
        assert!(matches!(
            DashPattern::new(consts::ONE, -consts::ONE),
            Err(RenderError::InvalidConfiguration { field: "dash.off", .. })
        ));
    }

    #[test]
    fn style_constructors_populate_expected_parts() {
        let outline = Style::stroke(Color::RED, from_int(2));
        assert_eq!(outline.fill, None);
        assert_eq!(outline.stroke, Some(Stroke::solid(Color::RED, from_int(2))));

        let solid = Style::fill(Color::BLUE);
        assert_eq!(solid.fill, Some(Color::BLUE));
        assert_eq!(solid.stroke, None);

        let both = Style::fill_and_stroke(Color::BLUE, Color::WHITE, consts::ONE);
        assert!(both.fill.is_some() && both.stroke.is_some());

        assert_eq!(Style::default(), Style { fill: None, stroke: None });
    }

    #[test]
    fn serde_round_trip() {
        let style = Style {
            fill: Some(Color::rgba(1, 2, 3, 4)),
            stroke: Some(Stroke {
                color: Color::GREEN,
                width: from_int(3),
                dash: Some(DashPattern::new(consts::ONE, consts::HALF).unwrap()),
            }),
        };
        let json = serde_json::to_string(&style).unwrap();
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
