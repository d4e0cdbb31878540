// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The masonry layout engine and its retained layout state.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use hashbrown::{Equivalent, HashMap};

use crate::columns::ColumnHeights;
use crate::config::{ConfigError, MasonryConfig};
use crate::coords::Coords;
use crate::policy::{ItemKey, ItemPolicy};

/// Whether a [`Masonry`] has run a full layout yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// No full layout has run; there are no coordinates.
    #[default]
    Uninitialized,
    /// Coordinates and column heights reflect the most recent full layout.
    LaidOut,
}

/// Masonry layout engine with windowed visibility.
///
/// A `Masonry` places items of uniform width and variable height into
/// equal-width columns, always appending to the shortest column, and keeps
/// the resulting coordinates so that visibility can be re-tested cheaply on
/// every scroll.
///
/// The engine holds three pieces of state, all replaced wholesale by
/// [`compute_full_coords`](Self::compute_full_coords):
///
/// - a map from item key to [`Coords`],
/// - the accumulated height of each column (including the trailing gutter),
/// - the column width.
///
/// [`compute_visible_items`](Self::compute_visible_items) only reads that
/// state. Items that were not part of the most recent full layout have no
/// coordinates and are never reported visible; hosts that add or remove
/// items must run a new full layout.
///
/// ```rust
/// use understory_masonry::{FnPolicy, Masonry, MasonryConfig};
///
/// // (key, height) pairs.
/// let items = [("a", 50.0), ("b", 30.0), ("c", 40.0)];
/// let policy = FnPolicy::new(
///     |item: &(&'static str, f64)| Some(item.0),
///     |item: &(&'static str, f64), _column_width: f64| item.1,
/// );
/// let mut masonry = Masonry::new(MasonryConfig::new(2, 10.0), policy).unwrap();
///
/// let visible = masonry.compute_full_coords(&items, 0.0, 1_000.0, 210.0);
/// assert_eq!(visible.len(), 3);
/// assert_eq!(masonry.column_width(), 100.0);
/// assert_eq!(masonry.total_height(), 100.0);
///
/// let c = masonry.coords("c").unwrap();
/// assert_eq!((c.top, c.left), (50.0, 110.0));
///
/// // Scrolling only re-tests stored coordinates.
/// let visible = masonry.compute_visible_items(&items, 60.0, 20.0);
/// assert_eq!(visible, [&items[2]]);
/// ```
pub struct Masonry<T, P: ItemPolicy<T>> {
    config: MasonryConfig,
    policy: P,
    coords: HashMap<P::Key, Coords>,
    columns: ColumnHeights,
    column_width: f64,
    state: LayoutState,
    _items: PhantomData<fn(&T)>,
}

impl<T, P: ItemPolicy<T>> fmt::Debug for Masonry<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Masonry")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("column_width", &self.column_width)
            .field("column_heights", &self.columns.as_slice())
            .field("len", &self.coords.len())
            .finish_non_exhaustive()
    }
}

impl<T, P: ItemPolicy<T>> Masonry<T, P> {
    /// Creates an engine with no layout state.
    ///
    /// Returns an error if `config` has no columns or an invalid gutter.
    pub fn new(config: MasonryConfig, policy: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            policy,
            coords: HashMap::new(),
            columns: ColumnHeights::default(),
            column_width: 0.0,
            state: LayoutState::Uninitialized,
            _items: PhantomData,
        })
    }

    /// Returns the configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Returns the item policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns whether a full layout has run.
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Lays out every item from scratch and returns the visible ones.
    ///
    /// Items are processed strictly in order. Each item with a key goes to
    /// the shortest column (lowest index on ties), `gutter` below that
    /// column's current bottom. Items without a key, or with a blank key,
    /// are skipped and take no space.
    ///
    /// The returned items are those overlapping
    /// `scroll_offset..scroll_offset + viewport_height` (see
    /// [`Coords::is_visible`]), in input order.
    ///
    /// All previous coordinates are discarded. If two items share a key the
    /// later one's coordinates win, though both occupy a column slot.
    pub fn compute_full_coords<'a>(
        &mut self,
        items: &'a [T],
        scroll_offset: f64,
        viewport_height: f64,
        viewport_width: f64,
    ) -> Vec<&'a T> {
        let gutter = self.config.gutter;
        let column_width = self.config.column_width_for(viewport_width);
        let mut columns = ColumnHeights::new(self.config.columns);
        let mut coords = HashMap::with_capacity(items.len());
        let mut visible = Vec::new();
        let mut skipped = 0_usize;

        for item in items {
            let Some(key) = self.live_key(item) else {
                log::trace!("masonry: skipping item without a key");
                skipped += 1;
                continue;
            };
            // `config` was validated, so there is always a column.
            let Some((column, column_height)) = columns.shortest() else {
                break;
            };
            let height = self.policy.measure_height(item, column_width);
            let top = column_height + gutter;
            let placed = Coords::new(
                top,
                self.config.column_left(column, column_width),
                column_width,
                height,
            );
            if placed.is_visible(scroll_offset, viewport_height) {
                visible.push(item);
            }
            coords.insert(key, placed);
            columns.set(column, top + height);
        }
        columns.pad(gutter);

        log::debug!(
            "masonry: laid out {} of {} items ({} skipped), {} visible, column width {}, total height {}",
            coords.len(),
            items.len(),
            skipped,
            visible.len(),
            column_width,
            columns.max(),
        );

        self.coords = coords;
        self.columns = columns;
        self.column_width = column_width;
        self.state = LayoutState::LaidOut;
        visible
    }

    /// Returns the items visible at `scroll_offset`, using the coordinates
    /// from the most recent full layout.
    ///
    /// No placement work happens here. Items without a key, or whose key
    /// has no coordinates yet, are left out. Before the first full layout
    /// this always returns an empty list.
    #[must_use]
    pub fn compute_visible_items<'a>(
        &self,
        items: &'a [T],
        scroll_offset: f64,
        viewport_height: f64,
    ) -> Vec<&'a T> {
        let mut visible = Vec::new();
        self.visible_items_into(items, scroll_offset, viewport_height, &mut visible);
        visible
    }

    /// Like [`compute_visible_items`](Self::compute_visible_items), but
    /// clears and refills `out` so a scroll handler can reuse one buffer.
    pub fn visible_items_into<'a>(
        &self,
        items: &'a [T],
        scroll_offset: f64,
        viewport_height: f64,
        out: &mut Vec<&'a T>,
    ) {
        out.clear();
        out.extend(items.iter().filter(|item| {
            self.coords_of(item)
                .is_some_and(|coords| coords.is_visible(scroll_offset, viewport_height))
        }));
        log::trace!(
            "masonry: {} of {} items visible at offset {}",
            out.len(),
            items.len(),
            scroll_offset,
        );
    }

    /// Returns the coordinates stored for `key`, if any.
    #[must_use]
    pub fn coords<Q>(&self, key: &Q) -> Option<Coords>
    where
        Q: Hash + Equivalent<P::Key> + ?Sized,
    {
        self.coords.get(key).copied()
    }

    /// Returns the coordinates stored for `item`'s key, if any.
    #[must_use]
    pub fn coords_of(&self, item: &T) -> Option<Coords> {
        let key = self.live_key(item)?;
        self.coords.get(&key).copied()
    }

    /// Pairs each item with its coordinates, dropping items that have none.
    ///
    /// This is the shape a renderer consumes: feed it the result of
    /// [`compute_visible_items`](Self::compute_visible_items) and position
    /// each item absolutely.
    pub fn placements<'a, I>(&self, items: I) -> impl Iterator<Item = (&'a T, Coords)>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items
            .into_iter()
            .filter_map(move |item| self.coords_of(item).map(|coords| (item, coords)))
    }

    /// Height of the tallest column, including the trailing gutter.
    ///
    /// Size a spacer with this so the scroll range covers every item, not
    /// only the mounted ones. Returns `0.0` before the first full layout.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.columns.max()
    }

    /// Accumulated height of each column after the most recent full layout,
    /// leftmost first, including the trailing gutter.
    ///
    /// Empty before the first full layout; afterwards its length always
    /// equals the configured column count.
    #[must_use]
    pub fn column_heights(&self) -> &[f64] {
        self.columns.as_slice()
    }

    /// Column width used by the most recent full layout.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Number of keys with coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if no item has coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    fn live_key(&self, item: &T) -> Option<P::Key> {
        self.policy.key(item).filter(|key| !ItemKey::is_blank(key))
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutState, Masonry};
    use crate::{ConfigError, FnPolicy, ItemPolicy, MasonryConfig};
    use alloc::vec::Vec;

    type Item = (Option<&'static str>, f64);

    fn policy() -> impl ItemPolicy<Item, Key = &'static str> {
        FnPolicy::new(|item: &Item| item.0, |item: &Item, _width: f64| item.1)
    }

    fn keys(items: &[&Item]) -> Vec<&'static str> {
        items.iter().filter_map(|item| item.0).collect()
    }

    #[test]
    fn new_rejects_zero_columns() {
        let err = Masonry::<Item, _>::new(MasonryConfig::new(0, 10.0), policy()).unwrap_err();
        assert_eq!(err, ConfigError::NoColumns);
    }

    #[test]
    fn uninitialized_engine_has_no_state() {
        let masonry = Masonry::<Item, _>::new(MasonryConfig::default(), policy()).unwrap();
        let items: [Item; 1] = [(Some("a"), 10.0)];
        assert_eq!(masonry.state(), LayoutState::Uninitialized);
        assert!(masonry.is_empty());
        assert!(masonry.column_heights().is_empty());
        assert_eq!(masonry.total_height(), 0.0);
        assert_eq!(masonry.coords("a"), None);
        assert!(masonry.compute_visible_items(&items, 0.0, 100.0).is_empty());
    }

    #[test]
    fn items_without_keys_take_no_space() {
        let items: [Item; 3] = [(Some("a"), 50.0), (None, 500.0), (Some(""), 500.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(1, 10.0), policy()).unwrap();
        let visible = masonry.compute_full_coords(&items, 0.0, 1_000.0, 100.0);

        assert_eq!(keys(&visible), ["a"]);
        assert_eq!(masonry.len(), 1);
        assert_eq!(masonry.coords(""), None);
        assert_eq!(masonry.column_heights(), &[70.0]);
    }

    #[test]
    fn visible_items_skip_keys_missing_from_layout() {
        let laid_out: [Item; 2] = [(Some("a"), 50.0), (Some("b"), 50.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(2, 10.0), policy()).unwrap();
        masonry.compute_full_coords(&laid_out, 0.0, 100.0, 210.0);

        // "c" arrived after the layout.
        let grown: [Item; 3] = [(Some("a"), 50.0), (Some("b"), 50.0), (Some("c"), 50.0)];
        let visible = masonry.compute_visible_items(&grown, 0.0, 100.0);
        assert_eq!(keys(&visible), ["a", "b"]);
    }

    #[test]
    fn full_layout_replaces_previous_coordinates() {
        let first: [Item; 2] = [(Some("a"), 50.0), (Some("b"), 50.0)];
        let second: [Item; 1] = [(Some("c"), 20.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(2, 10.0), policy()).unwrap();

        masonry.compute_full_coords(&first, 0.0, 100.0, 210.0);
        assert_eq!(masonry.len(), 2);

        masonry.compute_full_coords(&second, 0.0, 100.0, 410.0);
        assert_eq!(masonry.len(), 1);
        assert_eq!(masonry.coords("a"), None);
        assert_eq!(masonry.column_width(), 200.0);
        assert_eq!(masonry.column_heights(), &[40.0, 10.0]);
        assert_eq!(masonry.state(), LayoutState::LaidOut);
    }

    #[test]
    fn duplicate_keys_keep_the_last_placement() {
        let items: [Item; 2] = [(Some("a"), 50.0), (Some("a"), 30.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(2, 10.0), policy()).unwrap();
        masonry.compute_full_coords(&items, 0.0, 100.0, 210.0);

        assert_eq!(masonry.len(), 1);
        let coords = masonry.coords("a").unwrap();
        assert_eq!((coords.left, coords.height), (110.0, 30.0));
        assert_eq!(masonry.column_heights(), &[70.0, 50.0]);
    }

    #[test]
    fn visible_items_into_reuses_the_buffer() {
        let items: [Item; 2] = [(Some("a"), 50.0), (Some("b"), 50.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(1, 10.0), policy()).unwrap();
        masonry.compute_full_coords(&items, 0.0, 1_000.0, 100.0);

        let mut out = Vec::new();
        masonry.visible_items_into(&items, 0.0, 1_000.0, &mut out);
        assert_eq!(out.len(), 2);

        // a: 10..60, b: 70..120.
        masonry.visible_items_into(&items, 65.0, 10.0, &mut out);
        assert_eq!(keys(&out), ["b"]);
    }

    #[test]
    fn placements_pair_items_with_coordinates() {
        let items: [Item; 2] = [(Some("a"), 50.0), (Some("b"), 30.0)];
        let mut masonry = Masonry::<Item, _>::new(MasonryConfig::new(2, 10.0), policy()).unwrap();
        let visible = masonry.compute_full_coords(&items, 0.0, 100.0, 210.0);

        let placed: Vec<_> = masonry
            .placements(visible.iter().copied())
            .map(|(item, coords)| (item.0, coords.left))
            .collect();
        assert_eq!(placed, [(Some("a"), 0.0), (Some("b"), 110.0)]);

        // Items without coordinates are dropped.
        let stranger: Item = (Some("z"), 10.0);
        assert_eq!(masonry.placements([&stranger]).count(), 0);
    }
}
