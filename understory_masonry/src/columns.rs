// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-column accumulated heights.

use alloc::vec;
use alloc::vec::Vec;

/// Accumulated height of each column, leftmost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ColumnHeights {
    heights: Vec<f64>,
}

impl ColumnHeights {
    /// `columns` empty columns.
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            heights: vec![0.0; columns],
        }
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.heights
    }

    /// Index and height of the shortest column.
    ///
    /// Ties go to the lowest index: the scan only moves on a strictly
    /// smaller height. Returns `None` when there are no columns.
    pub(crate) fn shortest(&self) -> Option<(usize, f64)> {
        self.heights
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (column, height)| match best {
                Some((_, best_height)) if height < best_height => Some((column, height)),
                Some(_) => best,
                None => Some((column, height)),
            })
    }

    pub(crate) fn set(&mut self, column: usize, height: f64) {
        self.heights[column] = height;
    }

    /// Adds `amount` to every column.
    pub(crate) fn pad(&mut self, amount: f64) {
        for height in &mut self.heights {
            *height += amount;
        }
    }

    /// Height of the tallest column, or `0.0` with no columns.
    pub(crate) fn max(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}
