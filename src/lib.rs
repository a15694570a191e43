//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;
pub mod step;

pub use crate::core::{
    bounds::{Increment, NiceRange, compute_range, nice_range, tick_increment},
    color::{Color, ColorError},
    config::{PlotConfig, PlotConfigBuilder},
    error::{ConfigError, GraphError, HistogramError, ParamsError},
    params::{MissingPolicy, Params, migrate_params},
    sanitize::{Cell, Policy, sanitize},
    table::{Column, Table},
};

pub use render::{ChartStyle, Histogram, Renderer, chart_spec, histogram, message_spec};
pub use step::{BinnedColumn, bin_column};

/// Run the histogram step on `table` and build its Vega-Lite chart.
///
/// Returns the user-facing error message (empty on success) and the chart
/// spec, which is the error placeholder whenever the message isn't empty.
#[must_use]
pub fn render_step(table: &Table, params: &Params) -> (String, serde_json::Value) {
    let outcome = bin_column(table.column(&params.column), params);
    if let Err(e) = &outcome {
        log::warn!("histogram step: {e}");
    }
    render::spec_for(&outcome, &ChartStyle::default())
}
