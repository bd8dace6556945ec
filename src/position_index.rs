use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::{
    Align, PositionIndexError, PositionIndexOptions, RenderedWindow, Result, SizeAndPosition,
    SizeGetter, VisibleRange,
};

/// A lazily measured position index over `item_count` items.
///
/// Item sizes are unknown until a query needs them. The index then asks its [`SizeGetter`] for
/// them, one by one in increasing index order, and caches `(offset, size)` for every measured
/// item. The cache is always a contiguous prefix `0..=last_measured_index`:
///
/// - `offset(0) == 0` and `offset(i) == offset(i - 1) + size(i - 1)` for every cached `i > 0`.
/// - Each item is measured at most once until [`Self::reset_item`] (or a shrinking
///   [`Self::reconfigure`]) drops it from the prefix.
/// - Items past the prefix contribute `estimated_item_size` to [`Self::total_size`] and are never
///   measured unless a query reaches them.
///
/// Queries that may extend the prefix take `&mut self`. The index holds no UI state: the caller
/// maps offsets onto its layout axis and decides what to mount.
#[derive(Clone)]
pub struct PositionIndex<G> {
    size_getter: G,
    item_count: usize,
    estimated_item_size: f64,
    measured: Vec<SizeAndPosition>,
}

impl<G: SizeGetter> PositionIndex<G> {
    /// Creates an empty index. Nothing is measured until a query needs it.
    pub fn new(item_count: usize, size_getter: G, estimated_item_size: f64) -> Result<Self> {
        check_estimated_size(estimated_item_size)?;
        pdebug!(item_count, estimated_item_size, "PositionIndex::new");
        Ok(Self {
            size_getter,
            item_count,
            estimated_item_size,
            measured: Vec::new(),
        })
    }

    /// Creates an empty index from `options`; see [`Self::new`].
    pub fn from_options(options: PositionIndexOptions, size_getter: G) -> Result<Self> {
        Self::new(
            options.item_count,
            size_getter,
            options.estimated_item_size,
        )
    }

    pub fn options(&self) -> PositionIndexOptions {
        PositionIndexOptions {
            item_count: self.item_count,
            estimated_item_size: self.estimated_item_size,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.estimated_item_size
    }

    /// Returns the highest measured index, or `None` when nothing is measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.measured.len().checked_sub(1)
    }

    /// Number of measured items (the length of the measured prefix).
    pub fn measured_len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        index < self.measured.len()
    }

    pub fn size_getter(&self) -> &G {
        &self.size_getter
    }

    /// Mutable access to the size getter.
    ///
    /// Changing what the getter reports for an already measured index has no effect until that
    /// index is invalidated with [`Self::reset_item`].
    pub fn size_getter_mut(&mut self) -> &mut G {
        &mut self.size_getter
    }

    /// Replaces the size getter and drops every measurement.
    pub fn set_size_getter(&mut self, size_getter: G) {
        pdebug!(dropped = self.measured.len(), "set_size_getter");
        self.size_getter = size_getter;
        self.measured.clear();
    }

    /// Updates the item count and the estimated item size.
    ///
    /// Measurements are kept. When `item_count` shrinks below the measured prefix, the prefix is
    /// truncated to the new count right away.
    pub fn reconfigure(&mut self, item_count: usize, estimated_item_size: f64) -> Result<()> {
        check_estimated_size(estimated_item_size)?;
        pdebug!(
            item_count,
            estimated_item_size,
            measured = self.measured.len(),
            "reconfigure"
        );
        self.item_count = item_count;
        self.estimated_item_size = estimated_item_size;
        self.measured.truncate(item_count);
        Ok(())
    }

    pub fn reconfigure_with(&mut self, options: PositionIndexOptions) -> Result<()> {
        self.reconfigure(options.item_count, options.estimated_item_size)
    }

    /// Releases the measurement cache.
    ///
    /// The index stays usable: later queries measure again from index 0.
    pub fn destroy(&mut self) {
        pdebug!(measured = self.measured.len(), "destroy");
        self.measured = Vec::new();
    }

    /// Invalidates `index` and every index after it.
    ///
    /// The next query touching any of them calls the size getter again.
    pub fn reset_item(&mut self, index: usize) {
        if index < self.measured.len() {
            pdebug!(index, dropped = self.measured.len() - index, "reset_item");
            self.measured.truncate(index);
        }
    }

    /// Returns the size and offset of `index`, measuring every item up to it first if needed.
    pub fn size_and_position_for_index(&mut self, index: usize) -> Result<SizeAndPosition> {
        if index >= self.item_count {
            pwarn!(index, item_count = self.item_count, "index out of range");
            return Err(PositionIndexError::IndexOutOfRange {
                index,
                item_count: self.item_count,
            });
        }

        if let Some(&datum) = self.measured.get(index) {
            return Ok(datum);
        }

        self.measure_through(index)?;
        Ok(self.measured[index])
    }

    /// Returns the last measured item, or a zero size at offset 0 when nothing is measured.
    pub fn size_and_position_of_last_measured_item(&self) -> SizeAndPosition {
        self.measured.last().copied().unwrap_or_default()
    }

    /// Total scrollable extent: measured sizes where known, `estimated_item_size` elsewhere.
    ///
    /// Not monotonic: a measured size may be smaller than the estimate it replaces.
    pub fn total_size(&self) -> f64 {
        let unmeasured = self.item_count.saturating_sub(self.measured.len());
        self.size_and_position_of_last_measured_item().end()
            + unmeasured as f64 * self.estimated_item_size
    }

    /// Returns the inclusive range of items covering `[offset, offset + container_size)`, widened
    /// by `buffer` items on each side and clamped to `0..item_count`.
    ///
    /// Returns `None` when the total extent is 0 (e.g. an empty list).
    pub fn visible_range(
        &mut self,
        offset: f64,
        container_size: f64,
        buffer: usize,
    ) -> Result<Option<VisibleRange>> {
        if self.total_size() == 0.0 {
            return Ok(None);
        }

        let max_offset = offset + container_size;
        let mut start = self.find_nearest_item(offset)?;
        let mut end = self.size_and_position_for_index(start)?.end();
        let mut stop = start;

        let last_index = self.item_count - 1;
        while end < max_offset && stop < last_index {
            stop += 1;
            end += self.size_and_position_for_index(stop)?.size;
        }

        start = start.saturating_sub(buffer);
        stop = stop.saturating_add(buffer).min(last_index);
        ptrace!(start, stop, offset, container_size, "visible_range");

        Ok(Some(VisibleRange { start, stop }))
    }

    /// Same as [`Self::visible_range`], bundled with the total extent and the scroll offset.
    pub fn rendered_window(
        &mut self,
        offset: f64,
        container_size: f64,
        buffer: usize,
    ) -> Result<Option<RenderedWindow>> {
        let Some(range) = self.visible_range(offset, container_size, buffer)? else {
            return Ok(None);
        };
        Ok(Some(RenderedWindow {
            start: range.start,
            stop: range.stop,
            total: self.total_size(),
            offset,
        }))
    }

    /// Computes the scroll offset that brings `target_index` into view under `align`.
    ///
    /// The result is clamped to `[0, total_size - container_size]`, with 0 winning when the list
    /// is shorter than the container. Returns 0 for a non-positive `container_size`.
    pub fn updated_offset_for_index(
        &mut self,
        align: Align,
        container_size: f64,
        current_offset: f64,
        target_index: usize,
    ) -> Result<f64> {
        if container_size <= 0.0 {
            return Ok(0.0);
        }

        let datum = self.size_and_position_for_index(target_index)?;
        let max_offset = datum.offset;
        let min_offset = max_offset - container_size + datum.size;

        let ideal_offset = match align {
            Align::End => min_offset,
            Align::Center => max_offset - (container_size - datum.size) / 2.0,
            Align::Start => max_offset,
            Align::Auto => current_offset.min(max_offset).max(min_offset),
        };

        let total_size = self.total_size();
        Ok((total_size - container_size).min(ideal_offset).max(0.0))
    }

    /// Returns the index of the item containing `offset`: the greatest index whose offset is
    /// `<= offset`. Negative offsets are treated as 0.
    ///
    /// Inside the measured prefix this is a binary search. Past it, the prefix is extended with
    /// an exponential search first, so scrolling far ahead measures `O(log distance)` probes
    /// instead of scanning linearly.
    pub fn find_nearest_item(&mut self, offset: f64) -> Result<usize> {
        if offset.is_nan() {
            pwarn!(offset, "invalid offset");
            return Err(PositionIndexError::InvalidOffset { offset });
        }
        if self.item_count == 0 {
            return Err(PositionIndexError::IndexOutOfRange {
                index: 0,
                item_count: 0,
            });
        }

        let offset = offset.max(0.0);
        let last_measured_index = self.measured.len().saturating_sub(1);

        if self.size_and_position_of_last_measured_item().offset >= offset {
            self.binary_search(0, last_measured_index, offset)
        } else {
            self.exponential_search(last_measured_index, offset)
        }
    }

    /// Visits every item of `range` in order, measuring as needed.
    pub fn for_each_item_in(
        &mut self,
        range: VisibleRange,
        mut f: impl FnMut(usize, SizeAndPosition),
    ) -> Result<()> {
        for index in range.indices() {
            let datum = self.size_and_position_for_index(index)?;
            f(index, datum);
        }
        Ok(())
    }

    /// Collects the items of `range` into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_item_in`]; reuse `out` across
    /// frames to avoid reallocating.
    pub fn collect_items_in(
        &mut self,
        range: VisibleRange,
        out: &mut Vec<(usize, SizeAndPosition)>,
    ) -> Result<()> {
        out.clear();
        self.for_each_item_in(range, |index, datum| out.push((index, datum)))
    }

    fn measure_through(&mut self, index: usize) -> Result<()> {
        let from = self.measured.len();
        let mut offset = self.size_and_position_of_last_measured_item().end();
        ptrace!(from, to = index, "extending measured prefix");

        for i in from..=index {
            let size = match self.size_getter.size(i) {
                Some(size) if size.is_finite() => size,
                size => {
                    pwarn!(index = i, ?size, "invalid size returned by size getter");
                    return Err(PositionIndexError::InvalidSize { index: i, size });
                }
            };
            if size < 0.0 {
                pwarn!(index = i, size, "negative item size");
            }

            self.measured.push(SizeAndPosition { size, offset });
            offset += size;
        }
        Ok(())
    }

    fn binary_search(&mut self, mut low: usize, mut high: usize, offset: f64) -> Result<usize> {
        while low <= high {
            let middle = low + (high - low) / 2;
            let current = self.size_and_position_for_index(middle)?.offset;

            match current.partial_cmp(&offset) {
                Some(Ordering::Equal) => return Ok(middle),
                Some(Ordering::Less) => low = middle + 1,
                _ => {
                    if middle == 0 {
                        break;
                    }
                    high = middle - 1;
                }
            }
        }

        Ok(low.saturating_sub(1))
    }

    fn exponential_search(&mut self, mut index: usize, offset: f64) -> Result<usize> {
        let item_count = self.item_count;
        let mut interval = 1usize;

        while index < item_count && self.size_and_position_for_index(index)?.offset < offset {
            index = index.saturating_add(interval);
            interval = interval.saturating_mul(2);
        }

        let high = index.min(item_count - 1);
        self.binary_search((index / 2).min(high), high, offset)
    }
}

impl<G> fmt::Debug for PositionIndex<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionIndex")
            .field("item_count", &self.item_count)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("last_measured_index", &self.measured.len().checked_sub(1))
            .finish_non_exhaustive()
    }
}

fn check_estimated_size(size: f64) -> Result<()> {
    if size.is_finite() {
        return Ok(());
    }
    pwarn!(size, "invalid estimated item size");
    Err(PositionIndexError::InvalidEstimatedSize { size })
}
