//! Core entry point for the spechtlab_report crate.
//!
//! Measurements are collected with [`prompt::Prompter`], shaped by [`model`], positioned by
//! [`layout::ReportLayout`] and drawn onto a [`surface::Surface`].

pub mod builder;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod prompt;
pub mod style;
pub mod surface;

pub use builder::{ReportBuilder, ReportConfig};
pub use error::ReportError;
pub use model::{count_fields, MeasurementSession, MeasurementTable};
