pub mod binner;
pub mod braille;
pub mod frame;
pub mod vegalite;

pub use binner::{BinRecord, Histogram, histogram};
pub use braille::{BarPlot, preprocess_to_bars};
pub use frame::Renderer;
pub use vegalite::{ChartStyle, chart_spec, message_spec, spec_for};
