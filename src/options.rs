/// The mutable scalars of a [`crate::PositionIndex`].
///
/// The size getter is not part of the options: it is owned by the index and swapped with
/// [`crate::PositionIndex::set_size_getter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionIndexOptions {
    /// Number of addressable items, `0..item_count`.
    pub item_count: usize,
    /// Size used for the extent of every item that has not been measured yet.
    pub estimated_item_size: f64,
}

impl PositionIndexOptions {
    pub fn new(item_count: usize, estimated_item_size: f64) -> Self {
        Self {
            item_count,
            estimated_item_size,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }
}
