//! jaxbify-logging - Tracing setup for the jaxbify tools
//!
//! This crate provides:
//! - [`init_logging`] to install a console subscriber at a [`LogLevel`]
//! - [`CaptureLayer`] tracing layer that records events into a [`LogSink`]
//! - [`LogRecord`] captured events, for asserting on what a run logged

mod layer;
mod sink;

pub use jaxbify_core::LogLevel;
pub use layer::{CaptureLayer, init_logging, level_filter};
pub use sink::{LogRecord, LogSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CaptureLayer, LogLevel, LogRecord, LogSink, init_logging};
}
