//! Composite elements drawn from surface primitives.
//!
//! [`TableElement`] is the measurement grid: it sizes its columns and rows from the cell text,
//! then paints header background, cell text and grid lines onto any [`Surface`].

use crate::error::ReportError;
use crate::fonts::StandardFont;
use crate::model::MeasurementTable;
use crate::style::{Color, TextStyle};
use crate::surface::{Point, Rect, Surface, TextAnchor};

const DEFAULT_FONT_SIZE: u8 = 12;
const DEFAULT_LEADING: f64 = 14.0;
const DEFAULT_HORIZONTAL_PADDING: f64 = 6.0;
const DEFAULT_VERTICAL_PADDING: f64 = 3.0;
const DEFAULT_HEADER_BOTTOM_PADDING: f64 = 12.0;
const DEFAULT_GRID_WIDTH: f64 = 1.0;

/// Visual settings for a [`TableElement`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStyle {
    /// Font size of every cell.
    pub font_size: u8,
    /// Line advance inside a cell.
    pub leading: f64,
    /// Left and right cell padding.
    pub horizontal_padding: f64,
    /// Top padding of every cell and bottom padding of body cells.
    pub vertical_padding: f64,
    /// Bottom padding of header cells.
    pub header_bottom_padding: f64,
    /// Header row fill.
    pub header_background: Color,
    /// Header row text color.
    pub header_text: Color,
    /// Body text color.
    pub body_text: Color,
    /// Stroke width of the grid and outer box.
    pub grid_width: f64,
    /// Stroke color of the grid and outer box.
    pub grid_color: Color,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            leading: DEFAULT_LEADING,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING,
            vertical_padding: DEFAULT_VERTICAL_PADDING,
            header_bottom_padding: DEFAULT_HEADER_BOTTOM_PADDING,
            header_background: Color::GRAY,
            header_text: Color::WHITESMOKE,
            body_text: Color::BLACK,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_color: Color::BLACK,
        }
    }
}

/// Final position and measurements of a drawn table.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePlacement {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Width of every column, index column first.
    pub column_widths: Vec<f64>,
    /// Height of every row, header first.
    pub row_heights: Vec<f64>,
}

/// A grid of text cells whose first row is a styled header.
pub struct TableElement {
    cells: Vec<Vec<String>>,
    style: TableStyle,
}

impl TableElement {
    /// Creates a table from raw rows. The first row is treated as the header.
    pub fn new(cells: Vec<Vec<String>>) -> Self {
        Self {
            cells,
            style: TableStyle::default(),
        }
    }

    /// Creates the grid for a measurement table.
    pub fn from_table(table: &MeasurementTable) -> Self {
        Self::new(table.grid())
    }

    /// Returns the style used for drawing.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Replaces the style and returns the updated element.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    fn text_style(&self, row: usize) -> TextStyle {
        let base = TextStyle::new(StandardFont::Helvetica, self.style.font_size);
        if row == 0 {
            base.bold().with_color(self.style.header_text)
        } else {
            base.with_color(self.style.body_text)
        }
    }

    fn bottom_padding(&self, row: usize) -> f64 {
        if row == 0 {
            self.style.header_bottom_padding
        } else {
            self.style.vertical_padding
        }
    }

    /// Width of every column: the widest cell text plus horizontal padding on both sides.
    pub fn column_widths(&self) -> Vec<f64> {
        let columns = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        let padding = 2.0 * self.style.horizontal_padding;

        (0..columns)
            .map(|column| {
                self.cells
                    .iter()
                    .enumerate()
                    .filter_map(|(row, cells)| {
                        cells
                            .get(column)
                            .map(|text| self.text_style(row).width_of(text))
                    })
                    .fold(0.0, f64::max)
                    + padding
            })
            .collect()
    }

    /// Height of every row: one line of leading plus top and bottom padding.
    pub fn row_heights(&self) -> Vec<f64> {
        (0..self.cells.len())
            .map(|row| self.style.leading + self.style.vertical_padding + self.bottom_padding(row))
            .collect()
    }

    /// Computes the bounding box as `(width, height)`.
    pub fn wrap(&self) -> (f64, f64) {
        (
            self.column_widths().iter().sum(),
            self.row_heights().iter().sum(),
        )
    }

    /// Draws the table with its bottom-left corner at `(x, y)`.
    pub fn draw_on<S: Surface>(
        &self,
        surface: &mut S,
        x: f64,
        y: f64,
    ) -> Result<TablePlacement, ReportError> {
        let column_widths = self.column_widths();
        let row_heights = self.row_heights();
        let width: f64 = column_widths.iter().sum();
        let height: f64 = row_heights.iter().sum();

        let column_edges = edges(x, &column_widths, 1.0);
        let row_edges = edges(y + height, &row_heights, -1.0);

        if let (Some(header_height), Some(header_top)) = (row_heights.first(), row_edges.first()) {
            surface.fill_rect(
                Rect::new(x, header_top - header_height, width, *header_height),
                self.style.header_background,
            )?;
        }

        let font_size = f64::from(self.style.font_size);
        for (row, cells) in self.cells.iter().enumerate() {
            let row_bottom = row_edges[row + 1];
            let baseline = row_bottom + self.bottom_padding(row) + self.style.leading - font_size;
            let text_style = self.text_style(row);

            for (column, text) in cells.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                let centre = column_edges[column] + column_widths[column] / 2.0;
                surface.draw_text(
                    text,
                    text_style,
                    Point::new(centre, baseline),
                    TextAnchor::Center,
                )?;
            }
        }

        let top = y + height;
        for row_edge in &row_edges {
            surface.stroke_line(
                Point::new(x, *row_edge),
                Point::new(x + width, *row_edge),
                self.style.grid_width,
                self.style.grid_color,
            )?;
        }
        for column_edge in &column_edges {
            surface.stroke_line(
                Point::new(*column_edge, y),
                Point::new(*column_edge, top),
                self.style.grid_width,
                self.style.grid_color,
            )?;
        }

        Ok(TablePlacement {
            x,
            y,
            width,
            height,
            column_widths,
            row_heights,
        })
    }
}

// Running edge positions starting at `start`; `direction` is +1 rightwards or -1 downwards.
fn edges(start: f64, sizes: &[f64], direction: f64) -> Vec<f64> {
    let mut position = start;
    let mut edges = Vec::with_capacity(sizes.len() + 1);
    edges.push(position);
    for size in sizes {
        position += direction * size;
        edges.push(position);
    }
    edges
}
