//! Error types shared by the report pipeline.

use std::io;

use thiserror::Error;

/// Errors raised while collecting measurements or rendering the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading prompts or writing the output file failed.
    #[error("I/O failure")]
    Io(#[from] io::Error),

    /// The PDF backend rejected an operation.
    #[error("PDF rendering failed")]
    Pdf(#[from] printpdf::Error),

    /// A text run referenced a face the document never registered.
    #[error("font {0} was not registered with the document")]
    FontNotRegistered(&'static str),

    /// The flat value list does not fill the requested grid.
    #[error("table expects {rows} x {columns} = {expected} values but {actual} were supplied")]
    TableShape {
        /// Number of measurement rows.
        rows: usize,
        /// Number of value columns.
        columns: usize,
        /// `rows * columns`.
        expected: usize,
        /// Length of the supplied value list.
        actual: usize,
    },

    /// The column header list does not match the column count.
    #[error("table has {columns} columns but {headers} headers were supplied")]
    HeaderCount {
        /// Number of value columns.
        columns: usize,
        /// Number of supplied headers.
        headers: usize,
    },

    /// Standard input ended before all prompts were answered.
    #[error("input ended while waiting for: {prompt}")]
    InputClosed {
        /// The prompt that was left unanswered.
        prompt: String,
    },

    /// A report date could not be parsed as `DD-MM-YYYY`.
    #[error("invalid report date '{input}', expected DD-MM-YYYY")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// Reasons a measurement count answer is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CountParseError {
    /// The answer was empty after trimming.
    #[error("no number was entered")]
    Empty,
    /// The answer was not a non-negative integer.
    #[error("'{0}' is not a whole number of measurements")]
    NotANumber(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::ReportError;

    #[test]
    fn pdf_errors_keep_their_source() {
        let backend = printpdf::Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        let err = ReportError::from(backend);

        assert_eq!(err.to_string(), "PDF rendering failed");
        let source = err.source().expect("backend error as source");
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn missing_font_names_the_face() {
        let err = ReportError::FontNotRegistered("Helvetica-Bold");
        assert_eq!(
            err.to_string(),
            "font Helvetica-Bold was not registered with the document"
        );
    }
}
