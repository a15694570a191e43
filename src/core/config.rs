//! Terminal plot configuration + fluent builder.

use crate::core::{color::Color, error::ConfigError};

/// Immutable parameters handed to the terminal renderer.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub x_chars: usize,
    pub y_chars: usize,
    pub color: Color,
    /// Label for the edge axis (usually the column name).
    pub x_label: Option<String>,
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> PlotConfigBuilder {
        PlotConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct PlotConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    color: Option<Color>,
    x_label: Option<String>,
}

impl PlotConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            color: None,
            x_label: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn x_label(mut self, l: impl Into<String>) -> Self {
        self.x_label = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        if self.x_chars == 0 {
            return Err(ConfigError::MissingField("x_chars"));
        }
        if self.y_chars == 0 {
            return Err(ConfigError::MissingField("y_chars"));
        }
        Ok(PlotConfig {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            color: self.color.unwrap_or_default(),
            x_label: self.x_label,
        })
    }
}
