use core::fmt;
use core::ops::RangeInclusive;

/// Where a target item should land inside the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// The item's start lines up with the viewport's start.
    Start,
    /// The item is centered in the viewport.
    Center,
    /// The item's end lines up with the viewport's end.
    End,
    /// Scroll as little as possible to make the item fully visible.
    #[default]
    Auto,
}

/// The measured geometry of one item along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeAndPosition {
    /// Size in the scroll axis.
    pub size: f64,
    /// Start offset in the scroll axis: the sum of all preceding sizes.
    pub offset: f64,
}

impl SizeAndPosition {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// An inclusive range of item indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    /// First index of the range.
    pub start: usize,
    /// Last index of the range (inclusive).
    pub stop: usize,
}

impl VisibleRange {
    /// Number of items in the range (never zero: a range always holds `start`).
    pub fn count(&self) -> usize {
        self.stop - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.stop
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.stop
    }
}

/// A summary of one rendered frame: the window of indices to mount, the total extent used to
/// size the scroll container, and the scroll offset the window was computed for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedWindow {
    pub start: usize,
    pub stop: usize,
    pub total: f64,
    pub offset: f64,
}

impl RenderedWindow {
    pub fn range(&self) -> VisibleRange {
        VisibleRange {
            start: self.start,
            stop: self.stop,
        }
    }
}

impl fmt::Display for RenderedWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start:{} stop:{} total:{} offset:{}",
            self.start, self.stop, self.total, self.offset
        )
    }
}
