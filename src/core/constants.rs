//! A collection of constants.

/// Fewest bins a step may request
pub const MIN_BINS: usize = 2;
/// Most bins a step may request
pub const MAX_BINS: usize = 500;
/// Bin count used when nothing else is configured
pub const DEFAULT_BINS: usize = 20;

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted bars
pub const LABEL_GUTTER: usize = 1;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Edge labels are printed with up to this many decimals.
///
/// 0.30000000000000004 becomes 0.3
pub const DECIMAL_PRECISION: usize = 6;

/// Default bar colour, shared by the terminal and Vega-Lite outputs.
pub const BAR_COLOR_HEX: &str = "#FBAA6D";
