//! Report configuration and composition.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::info;

use crate::error::ReportError;
use crate::layout::{PageGeometry, ReportLayout};
use crate::model::MeasurementSession;
use crate::surface::{DrawCommand, PdfSurface, Recorder, Surface};

/// File the report is written to unless configured otherwise.
pub const DEFAULT_OUTPUT_FILE: &str = "spechtlab_pdf.pdf";
/// Title printed at the top of the page unless configured otherwise.
pub const DEFAULT_TITLE: &str = "SPECHTLAB";
/// `chrono` format of the report date, e.g. `19-10-2026`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Gap added before the first info line to clear the title.
const FIRST_INFO_GAP: f64 = 40.0;
/// Gap added before every following info line.
const INFO_GAP: f64 = 10.0;

/// Parses a `DD-MM-YYYY` report date.
pub fn parse_report_date(input: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        ReportError::InvalidDate {
            input: input.to_owned(),
            source,
        }
    })
}

/// Builder for [`ReportConfig`] values pre-configured with the report defaults.
#[derive(Default)]
pub struct ReportBuilder {
    title: Option<String>,
    date: Option<NaiveDate>,
    output: Option<PathBuf>,
    geometry: Option<PageGeometry>,
}

impl ReportBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixes the report date instead of using today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the output file path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Resolves every unset option to its default.
    pub fn build(self) -> ReportConfig {
        ReportConfig {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            output: self
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            geometry: self.geometry.unwrap_or_default(),
        }
    }
}

/// Fully resolved report settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    title: String,
    date: NaiveDate,
    output: PathBuf,
    geometry: PageGeometry,
}

/// Summary of a report written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenReport {
    /// Where the PDF was written.
    pub path: PathBuf,
    /// Size of the PDF in bytes.
    pub bytes: usize,
}

impl ReportConfig {
    /// Returns the page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the report date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the output file path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the page geometry.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// The metadata lines below the title, each with the extra gap placed before it.
    pub fn info_lines(&self, session: &MeasurementSession) -> Vec<(String, f64)> {
        vec![
            (
                format!("Report Date: {}", self.date.format(DATE_FORMAT)),
                FIRST_INFO_GAP,
            ),
            (format!("Measured Object: {}", session.object()), INFO_GAP),
            (
                format!("Measured Value: {}", session.value_summary()),
                INFO_GAP,
            ),
            (
                format!("Number of Measurements: {}", session.measurement_count()),
                INFO_GAP,
            ),
        ]
    }

    /// Lays the report out on `surface` and returns the finished output.
    ///
    /// The table shape is checked before anything is drawn.
    pub fn compose<S: Surface>(
        &self,
        session: &MeasurementSession,
        surface: S,
    ) -> Result<S::Output, ReportError> {
        let table = session.table()?;

        let mut layout = ReportLayout::with_geometry(surface, self.geometry);
        layout.write_title(&self.title)?;
        for (line, gap) in self.info_lines(session) {
            layout.write_info_line(&line, gap)?;
        }
        layout.draw_table(&table)?;
        layout.save()
    }

    /// Renders the report to PDF bytes.
    pub fn render_pdf(&self, session: &MeasurementSession) -> Result<Vec<u8>, ReportError> {
        let surface = PdfSurface::new(&self.title, &self.geometry)?;
        self.compose(session, surface)
    }

    /// Renders the report and writes it to the configured output path.
    pub fn write_pdf(&self, session: &MeasurementSession) -> Result<WrittenReport, ReportError> {
        let bytes = self.render_pdf(session)?;
        fs::write(&self.output, &bytes)?;
        info!(
            "wrote {} ({} bytes)",
            self.output.display(),
            bytes.len()
        );
        Ok(WrittenReport {
            path: self.output.clone(),
            bytes: bytes.len(),
        })
    }

    /// Lays the report out without producing a PDF and returns the display list.
    pub fn dry_run(&self, session: &MeasurementSession) -> Result<Vec<DrawCommand>, ReportError> {
        self.compose(session, Recorder::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_report_date, ReportBuilder, DEFAULT_OUTPUT_FILE, DEFAULT_TITLE};
    use crate::error::ReportError;
    use crate::model::MeasurementSession;
    use crate::surface::DrawCommand;
    use chrono::NaiveDate;
    use std::path::Path;

    fn beam() -> MeasurementSession {
        MeasurementSession::new("Beam", "Length,Width")
            .with_measurement_count(1)
            .with_values(["2.5", "0.4"])
    }

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn defaults_match_the_classic_report() {
        let config = ReportBuilder::new().build();
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.output(), Path::new(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.geometry().top_margin, 750.0);
    }

    #[test]
    fn parses_day_first_dates() {
        assert_eq!(parse_report_date("19-10-2026").unwrap(), fixed_date());
        assert!(matches!(
            parse_report_date("2026-10-19"),
            Err(ReportError::InvalidDate { .. })
        ));
    }

    #[test]
    fn info_lines_follow_the_report_order() {
        let config = ReportBuilder::new().with_date(fixed_date()).build();
        let lines = config.info_lines(&beam());
        assert_eq!(
            lines,
            vec![
                ("Report Date: 19-10-2026".to_owned(), 40.0),
                ("Measured Object: Beam".to_owned(), 10.0),
                ("Measured Value: Length, Width".to_owned(), 10.0),
                ("Number of Measurements: 1".to_owned(), 10.0),
            ]
        );
    }

    #[test]
    fn dry_run_places_info_lines_down_the_page() {
        let config = ReportBuilder::new().with_date(fixed_date()).build();
        let commands = config.dry_run(&beam()).unwrap();

        let info_ys: Vec<f64> = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, position, .. } if position.x == 50.0 => {
                    assert!(!text.is_empty());
                    Some(position.y)
                }
                _ => None,
            })
            .collect();
        assert_eq!(info_ys, vec![680.0, 640.0, 600.0, 560.0]);
    }

    #[test]
    fn shape_errors_stop_before_drawing() {
        let session = MeasurementSession::new("Beam", "Length,Width")
            .with_measurement_count(2)
            .with_values(["1"]);
        let config = ReportBuilder::new().build();
        assert!(matches!(
            config.dry_run(&session),
            Err(ReportError::TableShape { .. })
        ));
    }
}
