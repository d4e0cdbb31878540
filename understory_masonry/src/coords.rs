// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute item placement and the windowed visibility test.

use kurbo::Rect;

/// Absolute placement of one item within the masonry content area.
///
/// All values share the units of the viewport dimensions passed to
/// [`Masonry::compute_full_coords`](crate::Masonry::compute_full_coords).
/// Placement is absolute: `top` and `left` are measured from the origin of
/// the scrollable content, independent of any document flow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coords {
    /// Distance from the top of the content to the top of the item.
    pub top: f64,
    /// Distance from the left of the content to the left of the item.
    pub left: f64,
    /// Item width; always the column width of the layout that placed it.
    pub width: f64,
    /// Item height as reported by the item policy.
    pub height: f64,
}

impl Coords {
    /// Creates a placement record.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge, `top + height`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge, `left + width`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns the placement as a [`Rect`] in content coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// Returns `true` if this item overlaps the vertical window
    /// `scroll_offset..scroll_offset + viewport_height`.
    ///
    /// The window is extended upward by the item's own height, so an item
    /// is visible iff
    /// `top > scroll_offset - height && top < scroll_offset + viewport_height`.
    /// Both bounds are exclusive: an item whose bottom edge touches the
    /// window's top, or whose top edge touches the window's bottom, is not
    /// visible.
    #[must_use]
    pub fn is_visible(&self, scroll_offset: f64, viewport_height: f64) -> bool {
        is_visible(self.top, self.height, scroll_offset, viewport_height)
    }
}

impl From<Coords> for Rect {
    fn from(coords: Coords) -> Self {
        coords.rect()
    }
}

#[inline]
pub(crate) fn is_visible(top: f64, height: f64, scroll_offset: f64, viewport_height: f64) -> bool {
    top > scroll_offset - height && top < scroll_offset + viewport_height
}
