use std::collections::HashMap;
use std::io::BufWriter;

use log::debug;
use printpdf::{IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::{DrawCommand, Point, Surface};
use crate::error::ReportError;
use crate::fonts::StandardFont;
use crate::layout::PageGeometry;

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;
const LAYER_NAME: &str = "Report";

fn mm_from_pt(value: f64) -> Mm {
    Mm(value * MM_PER_INCH / POINTS_PER_INCH)
}

fn printpdf_point(point: Point) -> printpdf::Point {
    printpdf::Point::new(mm_from_pt(point.x), mm_from_pt(point.y))
}

/// A single-page PDF document rendered with the standard Helvetica faces.
pub struct PdfSurface {
    document: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: HashMap<StandardFont, IndirectFontRef>,
}

impl PdfSurface {
    /// Creates a document with one page of the given geometry.
    pub fn new(title: &str, geometry: &PageGeometry) -> Result<Self, ReportError> {
        let (document, page, layer) = PdfDocument::new(
            title,
            mm_from_pt(geometry.width),
            mm_from_pt(geometry.height),
            LAYER_NAME,
        );
        let layer = document.get_page(page).get_layer(layer);

        let mut fonts = HashMap::new();
        for font in StandardFont::ALL {
            let reference = document.add_builtin_font(font.builtin())?;
            fonts.insert(font, reference);
        }

        Ok(Self {
            document,
            layer,
            fonts,
        })
    }

    fn font(&self, font: StandardFont) -> Result<&IndirectFontRef, ReportError> {
        self.fonts
            .get(&font)
            .ok_or(ReportError::FontNotRegistered(font.postscript_name()))
    }
}

impl Surface for PdfSurface {
    type Output = Vec<u8>;

    fn draw(&mut self, command: DrawCommand) -> Result<(), ReportError> {
        match command {
            DrawCommand::Text {
                text,
                style,
                position,
            } => {
                let font = self.font(style.font())?;
                self.layer.set_fill_color(style.color().into());
                self.layer.use_text(
                    text,
                    style.font_size().into(),
                    mm_from_pt(position.x),
                    mm_from_pt(position.y),
                    font,
                );
            }
            DrawCommand::FillRect { rect, color } => {
                self.layer.set_fill_color(color.into());
                self.layer.add_shape(Line {
                    points: rect
                        .corners()
                        .iter()
                        .map(|corner| (printpdf_point(*corner), false))
                        .collect(),
                    is_closed: true,
                    has_fill: true,
                    has_stroke: false,
                    is_clipping_path: false,
                });
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                self.layer.set_outline_color(color.into());
                self.layer.set_outline_thickness(width);
                self.layer.add_shape(Line {
                    points: vec![(printpdf_point(from), false), (printpdf_point(to), false)],
                    is_closed: false,
                    has_fill: false,
                    has_stroke: true,
                    is_clipping_path: false,
                });
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        let Self {
            document,
            layer,
            fonts,
        } = self;
        drop(layer);
        drop(fonts);

        let mut writer = BufWriter::new(Vec::new());
        document.save(&mut writer)?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        debug!("serialized PDF document ({} bytes)", bytes.len());
        Ok(bytes)
    }
}
