//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting, configuration and
//! formatting helpers used by the commands.

pub mod logger;
pub mod config;
mod progress;
pub(crate) mod format_utils;
pub(crate) mod axis_parser;
pub(crate) mod image_utils;

pub use progress::ProgressTracker;
