//! Drawing targets for the report layout.
//!
//! A [`Surface`] accepts absolute-position drawing commands in PDF points, with the origin in the
//! bottom-left corner of the page. [`PdfSurface`] turns them into a PDF document, [`Recorder`]
//! keeps them as a display list.

mod pdf;
mod recording;

pub use pdf::PdfSurface;
pub use recording::Recorder;

use std::fmt;

use crate::error::ReportError;
use crate::style::{Color, TextStyle};

/// A point on the page in PDF points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset from the left page edge.
    pub x: f64,
    /// Vertical offset from the bottom page edge.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub origin: Point,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its bottom-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Corner points in counter-clockwise order starting at the origin.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The run starts at x.
    #[default]
    Start,
    /// The run is centered on x.
    Center,
}

/// A single drawing operation issued against a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Text whose baseline starts at `position`.
    Text {
        /// The text to draw.
        text: String,
        /// Face, size and color.
        style: TextStyle,
        /// Baseline start.
        position: Point,
    },
    /// A filled rectangle without an outline.
    FillRect {
        /// The area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A straight stroked line.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in points.
        width: f64,
        /// Stroke color.
        color: Color,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text {
                text,
                style,
                position,
            } => write!(
                f,
                "text  ({:.2}, {:.2}) {} {}pt {:?}",
                position.x,
                position.y,
                style.font().postscript_name(),
                style.font_size(),
                text
            ),
            Self::FillRect { rect, .. } => write!(
                f,
                "fill  ({:.2}, {:.2}) {:.2} x {:.2}",
                rect.origin.x, rect.origin.y, rect.width, rect.height
            ),
            Self::Line { from, to, width, .. } => write!(
                f,
                "line  ({:.2}, {:.2}) -> ({:.2}, {:.2}) w={}",
                from.x, from.y, to.x, to.y, width
            ),
        }
    }
}

/// A drawing target that serializes itself exactly once.
pub trait Surface {
    /// What the surface produces when finished.
    type Output;

    /// Executes a drawing command.
    fn draw(&mut self, command: DrawCommand) -> Result<(), ReportError>;

    /// Flushes the page and returns the finished output. Consumes the surface, so no command can
    /// follow it.
    fn finish(self) -> Result<Self::Output, ReportError>;

    /// Draws `text` with its baseline at `position`, anchored as requested.
    fn draw_text(
        &mut self,
        text: &str,
        style: TextStyle,
        position: Point,
        anchor: TextAnchor,
    ) -> Result<(), ReportError> {
        let position = match anchor {
            TextAnchor::Start => position,
            TextAnchor::Center => Point::new(position.x - style.width_of(text) / 2.0, position.y),
        };
        self.draw(DrawCommand::Text {
            text: text.to_owned(),
            style,
            position,
        })
    }

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), ReportError> {
        self.draw(DrawCommand::FillRect { rect, color })
    }

    /// Strokes a straight line.
    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> Result<(), ReportError> {
        self.draw(DrawCommand::Line {
            from,
            to,
            width,
            color,
        })
    }
}
