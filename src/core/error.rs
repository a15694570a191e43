//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, table::ParseCsvError};

/// User-facing validation failures of the histogram step.
///
/// None of these are fatal: the chart builders turn each one into a
/// message chart instead of a histogram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistogramError {
    #[error("Please choose a number column")]
    NoColumnSelected,
    #[error("Column `{0}` does not exist")]
    ColumnNotFound(String),
    #[error("Column `{0}` is not a number column")]
    NonNumericColumn(String),
    #[error("Please choose a number column with at least two distinct values")]
    InsufficientData,
    #[error("Values span from {low} to {high}, which is too wide to bin")]
    UnboundedSpan { low: f64, high: f64 },
    #[error("Values from {low} to {high} are too close together to bin")]
    UnresolvableSpan { low: f64, high: f64 },
}

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("bin count must be at least 1")]
    NoBins,
}

/// Saved parameter sets that cannot be read back.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("parameters must be a JSON object")]
    NotAnObject,
    #[error("invalid parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] ParseCsvError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}
