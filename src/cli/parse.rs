use clap::{Args, Parser, Subcommand};

use crate::core::constants::DEFAULT_BINS;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "nice-histogram",
    about = "Histograms with round bin edges, as Vega-Lite or terminal braille"
)]
pub struct Cli {
    /// Log stage timings and binning decisions
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a histogram of one CSV column in the terminal
    Plot(PlotArgs),
    /// Print the Vega-Lite spec for one CSV column
    Spec(SpecArgs),
    /// Upgrade a saved parameter file to the current version
    Migrate(MigrateArgs),
    /// Histogram of a normally distributed sample
    Demo(DemoArgs),
}

/// Step parameters shared by `plot` and `spec`.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Column to bin
    #[arg(short, long)]
    pub column: Option<String>,

    /// Requested bin count (clamped to 2..=500; may be adjusted for round edges)
    #[arg(short, long)]
    pub bins: Option<i64>,

    /// Chart title (default "Histogram of <column>")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Replace missing / non-numeric values with this number instead of dropping them
    #[arg(long, allow_hyphen_values = true)]
    pub replace_missing: Option<f64>,

    /// Refuse columns that contain text
    #[arg(long)]
    pub strict: bool,

    /// Saved parameter set (JSON, any version); flags override its fields
    #[arg(long, value_name = "JSON")]
    pub params: Option<String>,
}

/// `nice-histogram plot …`
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Optional subtitle (default: bin and value counts)
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Bar color (name or `#RRGGBB`)
    #[arg(long, default_value = "orange")]
    pub color: String,
}

/// `nice-histogram spec …`
#[derive(Args, Debug)]
pub struct SpecArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// `nice-histogram migrate …`
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Saved parameter file (use `-` for stdin)
    #[arg(value_name = "JSON", default_value = "-")]
    pub file: String,
}

/// `nice-histogram demo …`
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 5000)]
    pub samples: usize,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub mu: f64,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    #[arg(long, default_value_t = DEFAULT_BINS as i64)]
    pub bins: i64,
    /// Fixed seed for a repeatable sample
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value = "orange")]
    pub color: String,
}
