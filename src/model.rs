//! Data structures describing the measurements captured for a report.
//!
//! The types in this module know nothing about pages or fonts. A [`MeasurementSession`] holds
//! the raw answers gathered from the prompts, and a [`MeasurementTable`] reshapes the flat list
//! of readings into the grid that ends up on the page.

use crate::error::ReportError;

/// Separator between measured value names.
pub const FIELD_SEPARATOR: char = ',';

/// Returns the number of comma separated fields in `spec`.
///
/// Splitting is literal, so an empty string still counts as one empty field.
pub fn count_fields(spec: &str) -> usize {
    spec.split(FIELD_SEPARATOR).count()
}

/// Splits a comma separated list of value names, keeping each name verbatim.
pub fn split_fields(spec: &str) -> Vec<String> {
    spec.split(FIELD_SEPARATOR).map(str::to_owned).collect()
}

/// Row-major grid of measurement readings with a header row and an index column.
///
/// The value at flat index `i * columns + j` belongs to measurement `i`, column `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementTable {
    rows: usize,
    columns: usize,
    values: Vec<String>,
    headers: Vec<String>,
}

impl MeasurementTable {
    /// Creates a table, rejecting value or header lists that do not fit `rows x columns`.
    pub fn new<V, H>(
        rows: usize,
        columns: usize,
        values: impl IntoIterator<Item = V>,
        headers: impl IntoIterator<Item = H>,
    ) -> Result<Self, ReportError>
    where
        V: ToString,
        H: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();

        let expected = rows * columns;
        if values.len() != expected {
            return Err(ReportError::TableShape {
                rows,
                columns,
                expected,
                actual: values.len(),
            });
        }
        if headers.len() != columns {
            return Err(ReportError::HeaderCount {
                columns,
                headers: headers.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            values,
            headers,
        })
    }

    /// Returns the number of measurement rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of value columns, excluding the index column.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the column labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the readings of measurement `row`.
    pub fn row_values(&self, row: usize) -> &[String] {
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    /// Builds the cell grid drawn on the page.
    ///
    /// The first row is an empty corner cell followed by the headers; every following row starts
    /// with its 1-based measurement number.
    pub fn grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows + 1);

        let mut header = Vec::with_capacity(self.columns + 1);
        header.push(String::new());
        header.extend(self.headers.iter().cloned());
        grid.push(header);

        for row in 0..self.rows {
            let mut cells = Vec::with_capacity(self.columns + 1);
            cells.push((row + 1).to_string());
            cells.extend(self.row_values(row).iter().cloned());
            grid.push(cells);
        }

        grid
    }
}

/// Answers collected from one interactive session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementSession {
    object: String,
    value_names: Vec<String>,
    measurement_count: usize,
    values: Vec<String>,
}

impl MeasurementSession {
    /// Creates a session for `object` with the comma separated value names in `value_spec`.
    pub fn new(object: impl Into<String>, value_spec: &str) -> Self {
        Self {
            object: object.into(),
            value_names: split_fields(value_spec),
            ..Self::default()
        }
    }

    /// Returns the measured object.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the measured value names in entry order.
    pub fn value_names(&self) -> &[String] {
        &self.value_names
    }

    /// Returns the number of measurements.
    pub fn measurement_count(&self) -> usize {
        self.measurement_count
    }

    /// Returns the flat list of readings in entry order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Sets the measurement count and returns the updated session.
    pub fn with_measurement_count(mut self, count: usize) -> Self {
        self.measurement_count = count;
        self
    }

    /// Appends a reading.
    pub fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Extends the session with multiple readings and returns the updated instance.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Value names joined for display, e.g. `Length, Width`.
    pub fn value_summary(&self) -> String {
        self.value_names.join(", ")
    }

    /// Reshapes the collected readings into a table.
    pub fn table(&self) -> Result<MeasurementTable, ReportError> {
        MeasurementTable::new(
            self.measurement_count,
            self.value_names.len(),
            self.values.iter(),
            self.value_names.iter().cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{count_fields, split_fields, MeasurementSession, MeasurementTable};
    use crate::error::ReportError;

    #[test]
    fn empty_spec_counts_as_one_field() {
        assert_eq!(count_fields(""), 1);
    }

    #[test]
    fn counts_comma_separated_fields() {
        assert_eq!(count_fields("a,b,c"), 3);
        assert_eq!(count_fields("a"), 1);
        assert_eq!(count_fields("a,"), 2);
    }

    #[test]
    fn split_keeps_whitespace() {
        assert_eq!(split_fields("Length, Width"), vec!["Length", " Width"]);
    }

    #[test]
    fn grid_adds_header_and_index_column() {
        let table = MeasurementTable::new(2, 2, [1, 2, 3, 4], ["w", "h"]).unwrap();
        assert_eq!(
            table.grid(),
            vec![
                vec!["", "w", "h"],
                vec!["1", "1", "2"],
                vec!["2", "3", "4"],
            ]
        );
    }

    #[test]
    fn zero_rows_leaves_only_the_header() {
        let table = MeasurementTable::new(0, 1, Vec::<String>::new(), ["x"]).unwrap();
        assert_eq!(table.grid(), vec![vec!["", "x"]]);
    }

    #[test]
    fn rejects_short_value_list() {
        let err = MeasurementTable::new(2, 2, [1, 2, 3], ["w", "h"]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::TableShape {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_mismatched_headers() {
        let err = MeasurementTable::new(1, 2, [1, 2], ["w"]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::HeaderCount {
                columns: 2,
                headers: 1
            }
        ));
    }

    #[test]
    fn session_builds_table_from_answers() {
        let session = MeasurementSession::new("Beam", "Length,Width")
            .with_measurement_count(1)
            .with_values(["2.5", "0.4"]);

        assert_eq!(session.value_summary(), "Length, Width");
        let table = session.table().unwrap();
        assert_eq!(table.rows(), 1);
        assert_eq!(table.row_values(0), ["2.5", "0.4"]);
    }
}
