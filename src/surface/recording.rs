use log::trace;

use super::{DrawCommand, Surface};
use crate::error::ReportError;

/// A surface that keeps every command as a display list.
///
/// Used for dry runs and for asserting layouts in tests.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for Recorder {
    type Output = Vec<DrawCommand>;

    fn draw(&mut self, command: DrawCommand) -> Result<(), ReportError> {
        trace!("recording {}", command);
        self.commands.push(command);
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        Ok(self.commands)
    }
}
