//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod params;
pub mod rng;
pub mod sanitize;
pub mod table;

// re-export frequently-used items for convenience
pub use bounds::{Increment, NiceRange, compute_range, nice_range, tick_increment};
pub use color::{Color, ColorError, colorize};
pub use config::{PlotConfig, PlotConfigBuilder};
pub use constants::{DEFAULT_BINS, MAX_BINS, MIN_BINS};
pub use error::{ConfigError, GraphError, HistogramError, ParamsError};
pub use params::{MissingPolicy, Params, ParamsVersion, migrate_params};
pub use sanitize::{Cell, Policy, sanitize};
pub use table::{Column, Table};
