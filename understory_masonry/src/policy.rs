// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied item identity and height measurement.
//!
//! The layout engine never looks inside items. Everything it needs comes
//! from an [`ItemPolicy`]: a stable key for each item, and the item's height
//! once the column width is known.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::hash::Hash;

/// Key identifying an item across layouts.
///
/// Keys index the coordinate map, so they must be unique within one item
/// sequence. A key that [`is_blank`](ItemKey::is_blank) is treated like a
/// missing key: the item is skipped by layout and visibility filtering.
pub trait ItemKey: Clone + Eq + Hash {
    /// Returns `true` if this key should be treated as absent.
    ///
    /// String-like keys are blank when empty. The default never is.
    fn is_blank(&self) -> bool {
        false
    }
}

macro_rules! impl_str_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ItemKey for $ty {
                fn is_blank(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

macro_rules! impl_int_key {
    ($($ty:ty),* $(,)?) => {
        $(impl ItemKey for $ty {})*
    };
}

impl_str_key!(String, &str, Box<str>, Rc<str>, Arc<str>);
impl_int_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Identity and measurement policy for items of type `T`.
///
/// Implementations should be pure: the same item and column width must give
/// the same key and height, otherwise repeated layouts are not idempotent.
pub trait ItemPolicy<T> {
    /// Key type used to index the coordinate map.
    type Key: ItemKey;

    /// Returns the key for `item`, or `None` to leave the item out of the
    /// layout entirely.
    fn key(&self, item: &T) -> Option<Self::Key>;

    /// Returns the height `item` occupies when laid out `column_width` wide.
    fn measure_height(&self, item: &T, column_width: f64) -> f64;
}

impl<T, P: ItemPolicy<T> + ?Sized> ItemPolicy<T> for &P {
    type Key = P::Key;

    fn key(&self, item: &T) -> Option<Self::Key> {
        (**self).key(item)
    }

    fn measure_height(&self, item: &T, column_width: f64) -> f64 {
        (**self).measure_height(item, column_width)
    }
}

/// An [`ItemPolicy`] built from two closures.
///
/// ```rust
/// use understory_masonry::{FnPolicy, ItemPolicy};
///
/// struct Photo {
///     src: &'static str,
///     width: f64,
///     height: f64,
/// }
///
/// let policy = FnPolicy::new(
///     |photo: &Photo| Some(photo.src),
///     |photo: &Photo, column_width: f64| {
///         understory_masonry::aspect_height(photo.width, photo.height, column_width)
///     },
/// );
///
/// let photo = Photo { src: "cat.jpg", width: 400.0, height: 300.0 };
/// assert_eq!(policy.key(&photo), Some("cat.jpg"));
/// assert_eq!(policy.measure_height(&photo, 200.0), 150.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnPolicy<K, H> {
    key: K,
    height: H,
}

impl<K, H> FnPolicy<K, H> {
    /// Wraps a key function and a height function.
    #[must_use]
    pub const fn new(key: K, height: H) -> Self {
        Self { key, height }
    }
}

impl<K, H> fmt::Debug for FnPolicy<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}

impl<T, Id, K, H> ItemPolicy<T> for FnPolicy<K, H>
where
    Id: ItemKey,
    K: Fn(&T) -> Option<Id>,
    H: Fn(&T, f64) -> f64,
{
    type Key = Id;

    fn key(&self, item: &T) -> Option<Id> {
        (self.key)(item)
    }

    fn measure_height(&self, item: &T, column_width: f64) -> f64 {
        (self.height)(item, column_width)
    }
}

/// Scales an item of intrinsic size `width` x `height` to `column_width`,
/// preserving its aspect ratio.
///
/// Returns `0.0` when the intrinsic width is zero, negative, or not finite,
/// so unmeasured media collapses instead of poisoning column heights.
#[must_use]
pub fn aspect_height(width: f64, height: f64, column_width: f64) -> f64 {
    if !(width.is_finite() && width > 0.0) {
        return 0.0;
    }
    column_width * (height / width)
}
