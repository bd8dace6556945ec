//! A lazily measured position index for virtual lists.
//!
//! Virtual lists only mount the items inside the viewport, but they still need to know where
//! every item sits along the scroll axis. When item sizes are expensive to compute (or unknown
//! until rendered), measuring all of them up front defeats the purpose. [`PositionIndex`]
//! measures on demand instead:
//!
//! - a size getter is called at most once per index, in increasing index order,
//! - measured items form a contiguous prefix with exact offsets,
//! - unmeasured items count as an estimated size towards the total extent,
//! - offset → index lookups binary-search the prefix and exponentially probe past it.
//!
//! It is UI-agnostic. The surrounding layer provides the scroll offset, container size and item
//! sizes, and maps the returned `(offset, size)` pairs onto its own layout axis.
//!
//! ```
//! use position_index::{Align, PositionIndex, SizeList};
//!
//! let sizes = SizeList(vec![10.0, 20.0, 10.0, 30.0, 10.0]);
//! let mut index = PositionIndex::new(5, sizes, 10.0).unwrap();
//! assert_eq!(index.total_size(), 50.0);
//!
//! let range = index.visible_range(0.0, 25.0, 0).unwrap().unwrap();
//! assert_eq!((range.start, range.stop), (0, 1));
//!
//! let offset = index.updated_offset_for_index(Align::Start, 25.0, 0.0, 3).unwrap();
//! assert_eq!(offset, 40.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod position_index;
mod size_getter;
mod types;


pub use error::{PositionIndexError, Result};
pub use options::PositionIndexOptions;
pub use position_index::PositionIndex;
pub use size_getter::{FixedSize, SizeGetter, SizeList};
pub use types::{Align, RenderedWindow, SizeAndPosition, VisibleRange};
