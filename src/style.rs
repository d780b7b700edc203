//! Colors and text styles attached to drawing commands.
//!
//! These types carry just the styling the report needs (face, size and fill color) and stay
//! independent of the PDF backend, so recorded drawing commands can be compared in tests.

use crate::fonts::StandardFont;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Color {
    /// Pure black, used for body text and grid lines.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Gray `#808080`, used for the table header background.
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    /// Whitesmoke `#F5F5F5`, used for the table header text.
    pub const WHITESMOKE: Color = Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);

    /// Creates a color from its components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let channel = |value: u8| f64::from(value) / 255.0;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for printpdf::Color {
    fn from(color: Color) -> Self {
        printpdf::Color::Rgb(printpdf::Rgb::new(color.r, color.g, color.b, None))
    }
}

/// Font face, size and color for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyle {
    font: StandardFont,
    font_size: u8,
    color: Color,
}

impl TextStyle {
    /// Creates a black style in the given face and size.
    pub fn new(font: StandardFont, font_size: u8) -> Self {
        Self {
            font,
            font_size,
            color: Color::BLACK,
        }
    }

    /// Returns the font face.
    pub fn font(&self) -> StandardFont {
        self.font
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns the fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the fill color and returns the updated style.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Convenience shorthand that switches to the bold face.
    pub fn bold(mut self) -> Self {
        self.font = StandardFont::HelveticaBold;
        self
    }

    /// Rendered width of `text` in points under this style.
    pub fn width_of(&self, text: &str) -> f64 {
        self.font.string_width(text, f64::from(self.font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, TextStyle};
    use crate::fonts::StandardFont;

    #[test]
    fn new_style_is_black() {
        let style = TextStyle::new(StandardFont::Helvetica, 12);
        assert_eq!(style.color(), Color::BLACK);
        assert_eq!(style.font_size(), 12);
    }

    #[test]
    fn bold_switches_face_only() {
        let style = TextStyle::new(StandardFont::Helvetica, 12)
            .with_color(Color::GRAY)
            .bold();
        assert_eq!(style.font(), StandardFont::HelveticaBold);
        assert_eq!(style.color(), Color::GRAY);
        assert_eq!(style.font_size(), 12);
    }

    #[test]
    fn named_colors_match_their_hex_values() {
        assert_eq!(Color::GRAY, Color::from_rgb8(0x80, 0x80, 0x80));
        assert_eq!(Color::WHITESMOKE, Color::from_rgb8(0xF5, 0xF5, 0xF5));
        assert!((Color::WHITESMOKE.g - 0.96).abs() > 1e-4);
        assert_eq!(Color::from_rgb8(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_rgb8(255, 255, 255), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn width_scales_with_size() {
        let small = TextStyle::new(StandardFont::Helvetica, 6).width_of("Width");
        let large = TextStyle::new(StandardFont::Helvetica, 12).width_of("Width");
        assert!((large - 2.0 * small).abs() < 1e-9);
    }
}
