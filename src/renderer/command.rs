//! Backend-neutral 2D draw commands

use glam::Vec2;

/// RGBA color (alpha 0-1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Team and field palette
pub mod palette {
    use super::Color;

    pub const TURF: Color = Color::rgb(0x0e, 0x5a, 0x2f);
    pub const HOME_BLUE: Color = Color::rgb(0x00, 0x33, 0x8d);
    pub const HOME_RED: Color = Color::rgb(0xc6, 0x0c, 0x30);
    pub const GOLD: Color = Color::rgb(0xf2, 0xc9, 0x4c);
    pub const DEFENDER: Color = Color::rgb(0xc8, 0x10, 0x2e);
    pub const ICE: Color = Color::rgb(0x7d, 0xd3, 0xfc);
    pub const SHADOW_BLACK: Color = Color::rgb(0x0b, 0x0b, 0x0b);
    pub const JERSEY_BLACK: Color = Color::rgb(0x11, 0x11, 0x11);
    pub const INK: Color = Color::rgb(0x1b, 0x1b, 0x1b);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
}

/// One drawing operation. Text is always centered on `pos`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    /// Arc outline from `start` to `end` radians (clockwise on screen)
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: Color,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_output() {
        assert_eq!(palette::HOME_BLUE.to_css(), "#00338d");
        assert_eq!(
            Color::rgba(255, 255, 255, 0.25).to_css(),
            "rgba(255, 255, 255, 0.250)"
        );
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(palette::WHITE.with_alpha(2.0).a, 1.0);
        assert_eq!(palette::WHITE.with_alpha(-1.0).a, 0.0);
    }
}
