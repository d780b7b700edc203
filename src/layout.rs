//! Absolute-position page layout for the measurement report.
//!
//! [`ReportLayout`] owns a [`Surface`] and a vertical write cursor. Each call places its content
//! relative to the cursor and forwards drawing commands to the surface; [`ReportLayout::save`]
//! consumes the layout, so nothing can be drawn after the page has been written.

use log::debug;

use crate::elements::{TableElement, TablePlacement};
use crate::error::ReportError;
use crate::fonts::StandardFont;
use crate::model::MeasurementTable;
use crate::style::TextStyle;
use crate::surface::{Point, Surface, TextAnchor};

/// US Letter width in points.
pub const LETTER_WIDTH: f64 = 612.0;
/// US Letter height in points.
pub const LETTER_HEIGHT: f64 = 792.0;

/// Distance between the top margin and the title baseline.
pub const TITLE_OFFSET: f64 = 30.0;
/// Font size of the report title.
pub const TITLE_FONT_SIZE: u8 = 28;
/// Base step the cursor moves down for every info line.
pub const INFO_LINE_STEP: f64 = 30.0;
/// Font size of info lines.
pub const INFO_FONT_SIZE: u8 = 12;
/// Fixed drop applied when placing the table below the info block.
pub const TABLE_DROP: f64 = 120.0;

/// Page size and margins in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// X coordinate of left-aligned text.
    pub left_margin: f64,
    /// Starting cursor position, measured from the bottom edge.
    pub top_margin: f64,
}

impl PageGeometry {
    /// US Letter with the report margins.
    pub const fn letter() -> Self {
        Self {
            width: LETTER_WIDTH,
            height: LETTER_HEIGHT,
            left_margin: 50.0,
            top_margin: 750.0,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// The vertical write head, decreasing as content is added top to bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCursor {
    y: f64,
}

impl LayoutCursor {
    /// Places the cursor at the top margin of `geometry`.
    pub fn at_top(geometry: &PageGeometry) -> Self {
        Self {
            y: geometry.top_margin,
        }
    }

    /// Current vertical position.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Moves the cursor down by `distance` and returns the new position.
    pub fn advance(&mut self, distance: f64) -> f64 {
        self.y -= distance;
        self.y
    }
}

/// Vertical position of a table's bottom edge given the cursor and the table height.
///
/// The arithmetic is kept exactly as the report has always placed its table, including the
/// half-gap term that re-centers the table in the space left below the info block.
pub fn table_y_position(top_margin: f64, cursor_y: f64, table_height: f64) -> f64 {
    cursor_y - table_height - TABLE_DROP - ((top_margin - cursor_y) - table_height) / 2.0
}

/// Lays report content out on a single page.
pub struct ReportLayout<S: Surface> {
    surface: S,
    geometry: PageGeometry,
    cursor: LayoutCursor,
}

impl<S: Surface> ReportLayout<S> {
    /// Creates a layout on US Letter with the cursor at the top margin.
    pub fn new(surface: S) -> Self {
        Self::with_geometry(surface, PageGeometry::letter())
    }

    /// Creates a layout with custom page geometry.
    pub fn with_geometry(surface: S, geometry: PageGeometry) -> Self {
        Self {
            surface,
            geometry,
            cursor: LayoutCursor::at_top(&geometry),
        }
    }

    /// Returns the page geometry.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Returns the current cursor.
    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    /// Writes the title centered on the page, just below the top margin.
    ///
    /// The cursor does not move.
    pub fn write_title(&mut self, text: &str) -> Result<(), ReportError> {
        let style = TextStyle::new(StandardFont::HelveticaBold, TITLE_FONT_SIZE);
        let x = (self.geometry.width - style.width_of(text)) / 2.0;
        let y = self.geometry.top_margin - TITLE_OFFSET;
        self.surface
            .draw_text(text, style, Point::new(x, y), TextAnchor::Start)
    }

    /// Moves the cursor down by the line step plus `extra_gap` and writes `text` at the left
    /// margin.
    pub fn write_info_line(&mut self, text: &str, extra_gap: f64) -> Result<(), ReportError> {
        let y = self.cursor.advance(INFO_LINE_STEP + extra_gap);
        debug!("info line at y={y}: {text}");
        let style = TextStyle::new(StandardFont::Helvetica, INFO_FONT_SIZE);
        self.surface.draw_text(
            text,
            style,
            Point::new(self.geometry.left_margin, y),
            TextAnchor::Start,
        )
    }

    /// Draws `table` horizontally centered below the info block.
    pub fn draw_table(&mut self, table: &MeasurementTable) -> Result<TablePlacement, ReportError> {
        let element = TableElement::from_table(table);
        let (width, height) = element.wrap();

        let x = (self.geometry.width - width) / 2.0;
        let y = table_y_position(self.geometry.top_margin, self.cursor.y(), height);
        debug!("table {width:.2} x {height:.2} placed at ({x:.2}, {y:.2})");

        element.draw_on(&mut self.surface, x, y)
    }

    /// Finishes the page and returns the surface output.
    pub fn save(self) -> Result<S::Output, ReportError> {
        self.surface.finish()
    }
}
