//! Boxed braille histogram frame:
//! - titled top border, subtitle in the bottom border
//! - count labels (`max` on the top row, `0` on the bottom row)
//! - edge axis with the first and last bin edge under the bars
//!
//! The frame is built in one byte buffer and written with a single
//! `write_all`, so it can target stdout or any other `Write`.

use std::io::{Write, stdout};

use crate::{
    core::{
        color::{Color, RESET, colorize},
        config::PlotConfig,
        constants::{
            BORDER_WIDTH, DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
        },
        error::GraphError,
    },
    render::{
        binner::Histogram,
        braille::{encode_bars_into_frame, preprocess_to_bars},
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

const V_B: &[u8] = V.as_bytes();

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &Color) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Bin edge as short text: `0.30000000000000004` → `0.3`, `-0` → `0`.
#[must_use]
pub fn format_edge(v: f64) -> String {
    let s = format!("{:.*}", DECIMAL_PRECISION, v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

/// `text` padded to `width` columns inside a pair of side borders.
fn push_boxed_line(buf: &mut String, text: &str, width: usize) {
    buf.push_str(V);
    buf.push_str(text);
    buf.push_str(&" ".repeat(width.saturating_sub(text.chars().count())));
    buf.push_str(V);
    buf.push('\n');
}

/// Renders one histogram per call.
#[derive(Default)]
pub struct Renderer {
    frame: Vec<u8>,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the whole frame into `self.frame`.
    fn fill_frame(&mut self, cfg: &PlotConfig, hist: &Histogram) -> Result<(), GraphError> {
        if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
            return Err(GraphError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: MIN_GRAPH_HEIGHT,
                got_w: cfg.x_chars,
                got_h: cfg.y_chars,
            });
        }
        let bars = preprocess_to_bars(hist, cfg)?;

        let high_label = hist.max_count().to_string();
        let low_label = "0";
        let label_width = high_label.len();
        let inner = cfg.x_chars + label_width + LABEL_GUTTER;
        let line_len = inner + BORDER_WIDTH;

        self.frame.clear();

        // --- top ---
        let mut top = String::new();
        top.push_str(TL);
        push_centered(&mut top, &cfg.title, line_len - BORDER_WIDTH, &cfg.color);
        top.push_str(TR);
        top.push('\n');
        push_boxed_line(&mut top, "", inner);
        self.frame.extend_from_slice(top.as_bytes());

        // --- bars ---
        let color_seq = cfg.color.ansi();
        let braille_bytes = cfg.x_chars * 3; // 3 bytes per glyph
        let prefix = V_B.len() + label_width + LABEL_GUTTER + color_seq.len();
        let row_bytes = prefix + braille_bytes + RESET.len() + V_B.len();
        let stride = row_bytes + 1; // include '\n'
        let graph_start = self.frame.len();
        self.frame.resize(graph_start + stride * cfg.y_chars, b' ');

        for r in 0..cfg.y_chars {
            let base = graph_start + r * stride;
            self.frame[base..base + V_B.len()].copy_from_slice(V_B);

            let label = match r {
                0 => Some(high_label.as_str()),
                r if r + 1 == cfg.y_chars => Some(low_label),
                _ => None,
            };
            if let Some(label) = label {
                let off = base + V_B.len() + label_width - label.len();
                self.frame[off..off + label.len()].copy_from_slice(label.as_bytes());
            }

            let col_start = base + prefix - color_seq.len();
            self.frame[col_start..col_start + color_seq.len()]
                .copy_from_slice(color_seq.as_bytes());

            let reset_start = base + prefix + braille_bytes;
            self.frame[reset_start..reset_start + RESET.len()].copy_from_slice(RESET.as_bytes());
            let border = reset_start + RESET.len();
            self.frame[border..border + V_B.len()].copy_from_slice(V_B);
            self.frame[base + row_bytes] = b'\n';
        }

        encode_bars_into_frame(
            &mut self.frame,
            graph_start + prefix,
            stride,
            &bars,
            cfg.x_chars,
            cfg.y_chars,
        );

        // --- axis + bottom ---
        let mut bot = String::new();
        let gap = " ".repeat(label_width + LABEL_GUTTER);
        let first = hist.edges.first().map_or_else(String::new, |&e| format_edge(e));
        let last = hist.edges.last().map_or_else(String::new, |&e| format_edge(e));
        let axis = if first.len() + last.len() < cfg.x_chars {
            let pad = cfg.x_chars - first.len() - last.len();
            format!("{gap}{first}{}{last}", " ".repeat(pad))
        } else {
            format!("{gap}{first}")
        };
        push_boxed_line(&mut bot, &axis, inner);

        if let Some(label) = &cfg.x_label {
            let len = label.chars().count();
            let pad = label_width + LABEL_GUTTER + cfg.x_chars.saturating_sub(len) / 2;
            push_boxed_line(&mut bot, &format!("{}{label}", " ".repeat(pad)), inner);
        }

        bot.push_str(BL);
        if let Some(sub) = &cfg.subtitle {
            push_centered(&mut bot, sub, line_len - BORDER_WIDTH, &cfg.color);
        } else {
            bot.push_str(&H.repeat(line_len - BORDER_WIDTH));
        }
        bot.push_str(BR);
        bot.push('\n');
        self.frame.extend_from_slice(bot.as_bytes());

        Ok(())
    }

    /// Render into any writer.
    pub fn render_to<W: Write>(
        &mut self,
        out: &mut W,
        config: &PlotConfig,
        hist: &Histogram,
    ) -> Result<(), GraphError> {
        self.fill_frame(config, hist)?;
        out.write_all(&self.frame)?;
        out.flush()?;
        Ok(())
    }

    /// Main render entry.
    pub fn render(&mut self, config: &PlotConfig, hist: &Histogram) -> Result<(), GraphError> {
        let mut term = stdout().lock();
        self.render_to(&mut term, config, hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist() -> Histogram {
        Histogram {
            counts: vec![3, 1],
            edges: vec![0.0, 0.5, 1.0],
        }
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(format_edge(0.1 + 0.2), "0.3");
        assert_eq!(format_edge(13000.0), "13000");
        assert_eq!(format_edge(-0.0), "0");
        assert_eq!(format_edge(-2.5), "-2.5");
    }

    #[test]
    fn frame_has_every_part() {
        let cfg = PlotConfig::builder(MIN_GRAPH_WIDTH, MIN_GRAPH_HEIGHT)
            .title("Ages")
            .subtitle("2 bins")
            .x_label("age")
            .build()
            .unwrap();
        let mut out = Vec::new();
        Renderer::new().render_to(&mut out, &cfg, &hist()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // top border, spacer, bars, axis, x label, bottom border
        assert_eq!(lines.len(), 2 + MIN_GRAPH_HEIGHT + 3);
        assert!(lines[0].starts_with(TL) && lines[0].contains("Ages"));
        assert!(lines[2].starts_with("│3 "));
        assert!(lines[1 + MIN_GRAPH_HEIGHT].starts_with("│0 "));
        let axis = lines[2 + MIN_GRAPH_HEIGHT];
        assert!(axis.starts_with("│  0") && axis.trim_end_matches(V).trim_end().ends_with('1'));
        assert!(lines[3 + MIN_GRAPH_HEIGHT].contains("age"));
        assert!(lines.last().unwrap().contains("2 bins"));
    }

    #[test]
    fn rejects_tiny_graphs() {
        let cfg = PlotConfig::builder(3, 3).build().unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            Renderer::new().render_to(&mut out, &cfg, &hist()),
            Err(GraphError::GraphTooSmall { .. })
        ));
        assert!(out.is_empty());
    }
}
