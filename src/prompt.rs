//! Line-oriented prompts that collect a [`MeasurementSession`].
//!
//! The [`Prompter`] works over any buffered reader and writer, so the binary drives it with
//! stdin and stdout while tests feed it scripted answers.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::error::{CountParseError, ReportError};
use crate::model::MeasurementSession;

/// Prompt for the measured object.
pub const OBJECT_PROMPT: &str = "Please enter the measured object: ";
/// Prompt for the comma separated value names.
pub const VALUES_PROMPT: &str = "Please enter the measured value (write, separated by commas): ";
/// Prompt for the number of measurements.
pub const COUNT_PROMPT: &str = "Enter the number of measurements to be taken: ";
/// Printed after an answer to [`COUNT_PROMPT`] is rejected.
pub const COUNT_RETRY_MESSAGE: &str = "Please enter a valid numeric value.";

/// Parses a measurement count, accepting surrounding whitespace and an optional `+` sign.
pub fn parse_measurement_count(input: &str) -> Result<usize, CountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CountParseError::Empty);
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| CountParseError::NotANumber(trimmed.to_owned()))
}

/// Prompt text for one reading.
pub fn value_prompt(name: &str, measurement: usize) -> String {
    format!("Enter value for {name} in measurement {measurement}: ")
}

/// Asks questions on `output` and reads one answer per line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream, e.g. to inspect a transcript in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ReportError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ReportError::InputClosed {
                prompt: prompt.trim_end().to_owned(),
            });
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Asks for a measurement count until a valid one is entered.
    pub fn ask_count(&mut self, prompt: &str) -> Result<usize, ReportError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_measurement_count(&answer) {
                Ok(count) => return Ok(count),
                Err(err) => {
                    warn!("rejected measurement count: {err}");
                    writeln!(self.output, "{COUNT_RETRY_MESSAGE}")?;
                }
            }
        }
    }

    /// Runs the full question sequence and returns the collected answers.
    ///
    /// Readings are requested measurement by measurement, each in value-name order.
    pub fn collect_session(&mut self) -> Result<MeasurementSession, ReportError> {
        let object = self.ask(OBJECT_PROMPT)?;
        let value_spec = self.ask(VALUES_PROMPT)?;
        let count = self.ask_count(COUNT_PROMPT)?;

        let mut session =
            MeasurementSession::new(object, &value_spec).with_measurement_count(count);
        let names = session.value_names().to_vec();
        debug!("collecting {} x {} readings", count, names.len());

        for measurement in 1..=count {
            for name in &names {
                let value = self.ask(&value_prompt(name, measurement))?;
                session.push_value(value);
            }
        }

        Ok(session)
    }
}
