//! Step parameters as the host pipeline stores them, plus the upgrade path
//! for parameter sets saved by older versions.
//!
//! | version | fields |
//! |---|---|
//! | v0 | `column`, `n_buckets` |
//! | v1 | v0 + `title` |
//! | v2 | v1 + `missing_policy`, `replace_missing_with` |

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Number, Value};

use crate::core::{
    constants::{DEFAULT_BINS, MAX_BINS, MIN_BINS},
    error::ParamsError,
    sanitize::Policy,
};

/// How missing values are handled, in saved form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    #[default]
    Drop,
    Replace,
}

/// Parameters of one histogram step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Empty means "no column selected".
    pub column: String,
    /// As requested by the user; see [`Params::bin_count`].  Saved floats
    /// are truncated.
    #[serde(deserialize_with = "truncated_int")]
    pub n_buckets: i64,
    /// Empty means "Histogram of {column}".
    pub title: String,
    pub missing_policy: MissingPolicy,
    pub replace_missing_with: f64,
    /// Refuse columns that aren't number-typed.
    pub strict: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            column: String::new(),
            n_buckets: DEFAULT_BINS as i64,
            title: String::new(),
            missing_policy: MissingPolicy::Drop,
            replace_missing_with: 0.0,
            strict: false,
        }
    }
}

impl Params {
    #[must_use]
    pub fn for_column(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    /// Requested bin count clamped to `[MIN_BINS, MAX_BINS]`.
    #[inline]
    #[must_use]
    pub fn bin_count(&self) -> usize {
        clamp_bin_count(self.n_buckets)
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> Policy {
        match self.missing_policy {
            MissingPolicy::Drop => Policy::Drop,
            MissingPolicy::Replace => Policy::Replace(self.replace_missing_with),
        }
    }

    /// Title shown above the chart.
    #[must_use]
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            format!("Histogram of {}", self.column)
        } else {
            self.title.clone()
        }
    }

    /// Upgrade a saved parameter set to the current version and read it.
    pub fn from_saved(saved: Value) -> Result<Self, ParamsError> {
        let Value::Object(map) = saved else {
            return Err(ParamsError::NotAnObject);
        };
        Ok(serde_json::from_value(Value::Object(migrate_params(map)))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Self::from_saved(serde_json::from_str(json)?)
    }
}

/// Any JSON number, truncated toward zero and saturated to `i64`.
#[allow(clippy::cast_possible_truncation)]
fn truncated_int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let n = Number::deserialize(d)?;
    n.as_i64()
        .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
        .ok_or_else(|| D::Error::custom(format!("bin count {n} is not a number")))
}

/// `max(MIN_BINS, min(MAX_BINS, n))`.
#[inline]
#[must_use]
pub fn clamp_bin_count(n: i64) -> usize {
    n.clamp(MIN_BINS as i64, MAX_BINS as i64) as usize
}

// --- Migration ---

/// Saved parameter layouts, oldest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamsVersion {
    V0,
    V1,
    V2,
}

impl ParamsVersion {
    pub const CURRENT: Self = Self::V2;

    /// Newest layout whose fields are all present.
    #[must_use]
    pub fn detect(params: &Map<String, Value>) -> Self {
        if !params.contains_key("title") {
            Self::V0
        } else if !params.contains_key("missing_policy")
            || !params.contains_key("replace_missing_with")
        {
            Self::V1
        } else {
            Self::V2
        }
    }
}

/// v0 → v1: add an empty title.
fn v0_to_v1(mut params: Map<String, Value>) -> Map<String, Value> {
    params
        .entry("title")
        .or_insert_with(|| Value::String(String::new()));
    params
}

/// v1 → v2: missing values are dropped, as they always were.
fn v1_to_v2(mut params: Map<String, Value>) -> Map<String, Value> {
    params
        .entry("missing_policy")
        .or_insert_with(|| Value::String("drop".into()));
    params
        .entry("replace_missing_with")
        .or_insert_with(|| Value::from(0.0));
    params
}

/// Bring a saved parameter set up to [`ParamsVersion::CURRENT`].
///
/// Upgrades only add absent fields, so running this on current parameters
/// is a no-op.
#[must_use]
pub fn migrate_params(mut params: Map<String, Value>) -> Map<String, Value> {
    let from = ParamsVersion::detect(&params);
    if from < ParamsVersion::V1 {
        params = v0_to_v1(params);
    }
    if from < ParamsVersion::V2 {
        params = v1_to_v2(params);
    }
    if from != ParamsVersion::CURRENT {
        log::debug!("migrated params from {from:?} to {:?}", ParamsVersion::CURRENT);
    }
    params
}
