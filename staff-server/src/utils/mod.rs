//! Utility Module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - request validation and sanitizing

pub mod logger;
pub mod validation;

pub use logger::init_logger_with_file;
