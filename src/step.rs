//! The histogram step: pick the column, validate, sanitize, bin.

use crate::{
    core::{
        bounds::nice_range, error::HistogramError, params::Params, sanitize::sanitize,
        table::Column,
    },
    render::binner::Histogram,
};

/// Everything a chart builder needs from one successful step.
#[derive(Clone, Debug, PartialEq)]
pub struct BinnedColumn {
    pub column: String,
    pub title: String,
    pub histogram: Histogram,
    /// Values that survived sanitization.
    pub sample_len: usize,
}

/// Run the step on `column`, the table column named by `params.column`
/// (`None` when the table has no such column).
pub fn bin_column(column: Option<&Column>, params: &Params) -> Result<BinnedColumn, HistogramError> {
    if params.column.is_empty() {
        return Err(HistogramError::NoColumnSelected);
    }
    let column = column.ok_or_else(|| HistogramError::ColumnNotFound(params.column.clone()))?;
    if params.strict && !column.is_numeric() {
        return Err(HistogramError::NonNumericColumn(column.name.clone()));
    }

    let bins = params.bin_count();
    let sample = sanitize(&column.cells, params.policy());

    let (low, high) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if sample.is_empty() || low == high {
        return Err(HistogramError::InsufficientData);
    }
    if !(high - low).is_finite() {
        return Err(HistogramError::UnboundedSpan { low, high });
    }
    if !((high - low) / bins as f64).is_normal() {
        return Err(HistogramError::UnresolvableSpan { low, high });
    }

    // snapping outward can still run past f64::MAX
    let range = nice_range(&sample, bins);
    if !range.is_bounded() {
        return Err(HistogramError::UnboundedSpan { low, high });
    }
    let histogram = Histogram::over(&sample, &range);
    log::info!(
        "binned {} values of `{}` into {} bins",
        sample.len(),
        column.name,
        histogram.bin_count()
    );

    Ok(BinnedColumn {
        column: column.name.clone(),
        title: params.display_title(),
        histogram,
        sample_len: sample.len(),
    })
}
