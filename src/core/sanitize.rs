//! Raw cells to a finite numeric sample.
//!
//! The sanitizer never fails.  Whatever cannot be read as a finite number
//! (text that does not parse, empty cells, NaN, ±∞) is treated as missing
//! and then either dropped or replaced, depending on [`Policy`].

/// One cell of a host column.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for Cell {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Cell {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

/// What happens to missing values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Policy {
    /// Remove them from the sample.
    #[default]
    Drop,
    /// Put this value in their place.
    Replace(f64),
}

// --- Helpers ---

/// Replace every U+2212 MINUS SIGN (`E2 88 92`) with an ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

/// Parse trimmed text as a float.  `None` when it isn't one.
///
/// Non-finite spellings (`NaN`, `inf`) do parse; it is up to the caller to
/// decide what to do with them.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut bytes = trimmed.as_bytes().to_vec();
    normalize_unicode_minus(&mut bytes);
    lexical_core::parse::<f64>(&bytes).ok()
}

/// A cell's finite numeric value, if it has one.
#[inline]
#[must_use]
pub fn coerce(cell: &Cell) -> Option<f64> {
    let v = match cell {
        Cell::Number(v) => *v,
        Cell::Text(s) => parse_number(s)?,
        Cell::Missing => return None,
    };
    v.is_finite().then_some(v)
}

/// Build the numeric sample for one column.
///
/// A non-finite replacement value would break the sample's finiteness, so
/// under `Policy::Replace(NaN | ±∞)` missing entries are dropped instead.
#[must_use]
pub fn sanitize(column: &[Cell], policy: Policy) -> Vec<f64> {
    let fill = match policy {
        Policy::Replace(v) if v.is_finite() => Some(v),
        Policy::Replace(v) => {
            log::warn!("replacement value {v} is not finite; dropping missing values instead");
            None
        }
        Policy::Drop => None,
    };

    let sample: Vec<f64> = column
        .iter()
        .filter_map(|cell| coerce(cell).or(fill))
        .collect();

    log::debug!(
        "sanitized {} cells into {} values ({:?})",
        column.len(),
        sample.len(),
        policy
    );
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[f64]) -> Vec<Cell> {
        values.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn drop_removes_non_finite() {
        let col = cells(&[1.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN]);
        assert_eq!(sanitize(&col, Policy::Drop), vec![1.0]);
    }

    #[test]
    fn replace_fills_non_finite() {
        let col = cells(&[1.0, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(sanitize(&col, Policy::Replace(2.0)), vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn finite_values_pass_through() {
        let col = cells(&[1.0, 2.0, 3.0]);
        assert_eq!(sanitize(&col, Policy::Replace(1.0)), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn text_is_parsed() {
        let col: Vec<Cell> = ["1", " 2 ", "3"].into_iter().map(Cell::from).collect();
        assert_eq!(sanitize(&col, Policy::Drop), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_is_replaced() {
        let col = vec![Cell::Number(1.0), Cell::Number(2.0), Cell::from(None::<f64>)];
        assert_eq!(sanitize(&col, Policy::Replace(3.0)), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn unparseable_text_is_missing() {
        let col = vec![Cell::Number(1.0), Cell::Number(2.0), Cell::from("notanumber")];
        assert_eq!(sanitize(&col, Policy::Replace(3.0)), vec![1.0, 2.0, 3.0]);
        assert_eq!(sanitize(&col, Policy::Drop), vec![1.0, 2.0]);
    }

    #[test]
    fn text_infinity_is_dropped() {
        let col: Vec<Cell> = ["inf", "NaN", "-4.5"].into_iter().map(Cell::from).collect();
        assert_eq!(sanitize(&col, Policy::Drop), vec![-4.5]);
    }

    #[test]
    fn unicode_minus() {
        assert_eq!(parse_number("\u{2212}12.5"), Some(-12.5));
        assert_eq!(coerce(&Cell::from("\u{2212}3")), Some(-3.0));
    }

    #[test]
    fn nothing_valid_gives_empty_sample() {
        let col = vec![Cell::Missing, Cell::from(""), Cell::from("abc")];
        assert!(sanitize(&col, Policy::Drop).is_empty());
    }

    #[test]
    fn non_finite_replacement_drops() {
        let col = vec![Cell::Number(1.0), Cell::Missing];
        assert_eq!(sanitize(&col, Policy::Replace(f64::NAN)), vec![1.0]);
    }
}
