// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable layout configuration: column count and gutter size.

use core::fmt;

/// Error returned when a [`MasonryConfig`] cannot produce finite geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The column count was zero.
    ///
    /// A zero column count would divide the viewport width by zero and
    /// propagate non-finite coordinates into every item.
    NoColumns,
    /// The gutter was negative, NaN, or infinite.
    InvalidGutter(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "masonry layout needs at least one column"),
            Self::InvalidGutter(gutter) => write!(
                f,
                "masonry gutter must be finite and non-negative, got {gutter}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Column count and gutter size for a [`Masonry`](crate::Masonry) layout.
///
/// The gutter is inserted between adjacent columns, above every item, and
/// once more below the last item of each column.
///
/// The default is two columns with a gutter of `10.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasonryConfig {
    /// Number of equal-width columns.
    pub columns: usize,
    /// Spacing between columns and between stacked items, in layout units.
    pub gutter: f64,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            gutter: 10.0,
        }
    }
}

impl MasonryConfig {
    /// Creates a configuration with the given column count and gutter.
    #[must_use]
    pub const fn new(columns: usize, gutter: f64) -> Self {
        Self { columns, gutter }
    }

    /// Returns a copy with a different column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Returns a copy with a different gutter.
    #[must_use]
    pub const fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Checks that this configuration yields finite column geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(ConfigError::InvalidGutter(self.gutter));
        }
        Ok(())
    }

    /// Width shared by every column for a viewport of `viewport_width`.
    ///
    /// `(viewport_width - gutter * (columns - 1)) / columns`. A viewport
    /// narrower than the inner gutters gives a negative width; it is not
    /// clamped.
    #[must_use]
    pub fn column_width_for(&self, viewport_width: f64) -> f64 {
        let columns = self.columns as f64;
        (viewport_width - self.gutter * (columns - 1.0)) / columns
    }

    /// Horizontal offset of the left edge of `column` for a given column width.
    #[must_use]
    pub fn column_left(&self, column: usize, column_width: f64) -> f64 {
        let column = column as f64;
        column_width * column + self.gutter * column
    }
}
