//! Histogram bars to a UTF-8 braille grid, zero intermediate buffers.
//!
//! ### Workflow
//! 1. `preprocess_to_bars` maps bin counts to bar heights in dots, one
//!    entry per *half* column.  Every bin owns an equal share of the half
//!    columns; when there are more bins than half columns, neighbours share
//!    one and the taller bar wins.
//! 2. `encode_bars_into_frame` fills a caller-supplied buffer laid out
//!    row-major with exactly three bytes per character cell.  Every braille
//!    scalar U+2800..U+28FF encodes to the fixed pattern
//!    `E2 A0+((mask>>6)&3) 80|mask&0x3F`, so bytes are written directly.
//!
//! Bars always grow from the bottom, so a cell's half column is one of five
//! states: 0 to 4 dots filled from below.

use crate::core::{
    config::PlotConfig,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
    error::{ConfigError, GraphError},
};
use crate::render::binner::Histogram;

/// Bar height in dots for every half column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarPlot {
    pub heights: Vec<usize>,
}

// --- Pre-Computed Masks ---

/// Left half column, `k` dots lit from the bottom: ⠀ ⡀ ⡄ ⡆ ⡇
const LEFT_FILL: [u8; 5] = [0x00, 0x40, 0x44, 0x46, 0x47];
/// Right half column, `k` dots lit from the bottom: ⠀ ⢀ ⢠ ⢰ ⢸
const RIGHT_FILL: [u8; 5] = [0x00, 0x80, 0xA0, 0xB0, 0xB8];

pub fn preprocess_to_bars(h: &Histogram, config: &PlotConfig) -> Result<BarPlot, GraphError> {
    let bins = h.counts.len();
    if bins == 0 {
        return Err(ConfigError::NoBins.into());
    }

    let columns = config.x_chars * HR;
    let vert_px = config.y_chars * VR;
    let tallest = h.max_count();

    // count → dots, never flattening a non-empty bin to nothing
    let scale = |count: usize| -> usize {
        if count == 0 || tallest == 0 {
            0
        } else {
            let r = count as f64 / tallest as f64 * vert_px as f64;
            (r.round() as usize).clamp(1, vert_px)
        }
    };

    let heights = (0..columns)
        .map(|col| {
            let lo = col * bins / columns;
            let hi = ((col + 1) * bins / columns).max(lo + 1).min(bins);
            h.counts[lo..hi].iter().copied().map(scale).max().unwrap_or(0)
        })
        .collect();

    Ok(BarPlot { heights })
}

/// Encode `plot` straight into `buf`, which is the full frame buffer.
///
/// * `offset` -- byte index of the first braille cell (row 0, col 0)
/// * `row_stride` -- bytes between successive graph rows in `buf`
pub fn encode_bars_into_frame(
    buf: &mut [u8],
    offset: usize,
    row_stride: usize,
    plot: &BarPlot,
    x_chars: usize,
    y_chars: usize,
) {
    debug_assert!(
        buf.len() >= offset + row_stride * y_chars,
        "frame buffer too small"
    );

    let lit = |half: usize, floor: usize| -> usize {
        plot.heights
            .get(half)
            .map_or(0, |&h| h.saturating_sub(floor).min(VR))
    };

    for row in 0..y_chars {
        // dots below this row
        let floor = (y_chars - 1 - row) * VR;
        let row_base = offset + row * row_stride;

        for col in 0..x_chars {
            let mask = LEFT_FILL[lit(col * 2, floor)] | RIGHT_FILL[lit(col * 2 + 1, floor)];
            // https://en.wikipedia.org/wiki/Braille_Patterns
            let cell = row_base + col * 3;
            buf[cell] = 0xE2;
            buf[cell + 1] = 0xA0 | ((mask >> 6) & 0x03);
            buf[cell + 2] = 0x80 | (mask & 0x3F);
        }
    }
}
