//! Vega-Lite v4 JSON for a binned column.
//!
//! A successful step becomes a pre-binned bar chart: one `{min, max, n}`
//! record per bin, `x`/`x2` spanning each bin and the bin edges pinned as
//! the axis values.  Any validation failure becomes an empty chart whose
//! title asks the user to fix the step instead.

use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    core::{color::Color, error::HistogramError},
    render::binner::BinRecord,
    step::BinnedColumn,
};

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v4.0.json";
const FONT: &str = "Nunito Sans, Helvetica, sans-serif";
const TEXT_COLOR: &str = "#383838";
const ERROR_TITLE: &str = "Please correct the error in this step's data or parameters";

/// Presentation knobs that aren't step parameters.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub bar_color: Color,
    pub y_title: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::default(),
            y_title: "Frequency".to_owned(),
        }
    }
}

/// Inline data row.
#[derive(Serialize)]
struct Record {
    min: f64,
    max: f64,
    n: usize,
}

impl From<BinRecord> for Record {
    fn from(r: BinRecord) -> Self {
        Self {
            min: r.min,
            max: r.max,
            n: r.n,
        }
    }
}

/// Bar chart of one binned column.
#[must_use]
pub fn chart_spec(binned: &BinnedColumn, style: &ChartStyle) -> Value {
    let hist = &binned.histogram;
    let records: Vec<Record> = hist.records().map(Record::from).collect();

    json!({
        "$schema": SCHEMA,
        "title": {
            "text": binned.title,
            "offset": 15,
            "color": TEXT_COLOR,
            "font": FONT,
            "fontSize": 20,
            "fontWeight": "normal"
        },
        "data": { "values": records },
        "mark": "bar",
        "encoding": {
            "x": {
                "field": "min",
                "bin": "binned",
                "type": "quantitative",
                "scale": { "zero": false },
                "axis": {
                    "title": binned.column,
                    "grid": false,
                    "tickCount": hist.edges.len(),
                    "values": hist.edges,
                    "tickSize": 3,
                    "titlePadding": 20
                }
            },
            "x2": { "field": "max", "type": "quantitative" },
            "y": {
                "field": "n",
                "type": "quantitative",
                "axis": {
                    "title": style.y_title,
                    "domain": false,
                    "titlePadding": 20
                }
            },
            "color": { "value": style.bar_color.hex() }
        }
    })
}

/// Placeholder chart shown while the step has an error.
#[must_use]
pub fn message_spec() -> Value {
    json!({
        "title": {
            "text": ERROR_TITLE,
            "offset": 15,
            "color": TEXT_COLOR,
            "font": FONT,
            "fontSize": 15,
            "fontWeight": "normal",
            "anchor": "middle"
        },
        "mark": "point",
        "config": { "style": { "cell": { "stroke": "transparent" } } }
    })
}

/// `(message, spec)` for a step outcome; the message is empty on success.
#[must_use]
pub fn spec_for(outcome: &Result<BinnedColumn, HistogramError>, style: &ChartStyle) -> (String, Value) {
    match outcome {
        Ok(binned) => (String::new(), chart_spec(binned, style)),
        Err(e) => (e.to_string(), message_spec()),
    }
}
