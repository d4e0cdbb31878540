// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_masonry --heading-base-level=0

//! Understory Masonry: balanced multi-column layout with windowed visibility.
//!
//! This crate computes absolute positions for items arranged in a masonry
//! grid (equal-width columns, variable-height items, each item appended to
//! the currently shortest column) and answers which items intersect a
//! vertical viewport, so a host UI can mount only those.
//!
//! The core concepts are:
//!
//! - [`MasonryConfig`]: column count and gutter size, validated once.
//! - [`ItemPolicy`]: the two things the engine needs from the host about
//!   each item: a key ([`ItemKey`]) and a height for a given column width.
//!   [`FnPolicy`] builds one from closures.
//! - [`Masonry`]: the engine. [`Masonry::compute_full_coords`] places every
//!   item and stores the resulting [`Coords`];
//!   [`Masonry::compute_visible_items`] re-tests only those stored
//!   coordinates against a new scroll offset and is meant to run on every
//!   scroll notification.
//!
//! This crate deliberately does **not** know about widgets, DOM nodes, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the item data.
//! - Measuring the scroll container (width, height, scroll offset).
//! - Calling [`Masonry::compute_full_coords`] after mount or when the item
//!   set or viewport width changes, and [`Masonry::compute_visible_items`]
//!   on scroll.
//! - Positioning each visible item absolutely at its [`Coords`], and sizing
//!   a spacer to [`Masonry::total_height`] so the scroll range covers the
//!   items that are not mounted.
//!
//! ## Minimal example
//!
//! A photo wall, four columns, heights derived from each photo's aspect
//! ratio:
//!
//! ```rust
//! use understory_masonry::{FnPolicy, Masonry, MasonryConfig, aspect_height};
//!
//! struct Photo {
//!     src: String,
//!     width: f64,
//!     height: f64,
//! }
//!
//! let photos: Vec<Photo> = (0..100)
//!     .map(|i| Photo {
//!         src: format!("cat-{i}.jpg"),
//!         width: 400.0,
//!         height: 200.0 + f64::from(i % 5) * 50.0,
//!     })
//!     .collect();
//!
//! let policy = FnPolicy::new(
//!     |photo: &Photo| Some(photo.src.clone()),
//!     |photo: &Photo, column_width: f64| aspect_height(photo.width, photo.height, column_width),
//! );
//! let mut masonry = Masonry::new(MasonryConfig::new(4, 10.0), policy).unwrap();
//!
//! // After mount: full layout of an 830x600 scroller at the top.
//! let visible = masonry.compute_full_coords(&photos, 0.0, 600.0, 830.0);
//! assert!(!visible.is_empty() && visible.len() < photos.len());
//! assert_eq!(masonry.column_width(), 200.0);
//!
//! // On scroll: cheap re-filter against the stored coordinates.
//! let visible = masonry.compute_visible_items(&photos, 1_500.0, 600.0);
//! for (photo, coords) in masonry.placements(visible) {
//!     // Host frameworks would mount `photo` at `coords.rect()` here.
//!     assert!(coords.is_visible(1_500.0, 600.0));
//!     assert!(!photo.src.is_empty());
//! }
//!
//! // Spacer height keeping the scrollbar honest.
//! assert!(masonry.total_height() > 1_500.0);
//! ```
//!
//! All coordinates are `f64` in a caller-chosen unit (typically logical
//! pixels); [`Coords::rect`] converts to a [`kurbo::Rect`].
//!
//! ## Logging
//!
//! Full layouts emit a `debug` record through the [`log`] facade, and
//! skipped items and scroll re-filters emit `trace` records. No logger is
//! installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod columns;
mod config;
mod coords;
mod masonry;
mod policy;

pub use config::{ConfigError, MasonryConfig};
pub use coords::Coords;
pub use masonry::{LayoutState, Masonry};
pub use policy::{FnPolicy, ItemKey, ItemPolicy, aspect_height};
