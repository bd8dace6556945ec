/// Reports the size of an item along the scroll axis.
///
/// [`crate::PositionIndex`] calls this at most once per index between invalidations, in
/// increasing index order, and only for indices a query actually needs. Returning `None` (or a
/// non-finite value) makes the query that triggered the measurement fail with
/// [`crate::PositionIndexError::InvalidSize`].
///
/// The result must be deterministic for a given configuration. If the size of an item can
/// change, call [`crate::PositionIndex::reset_item`] so it gets measured again.
///
/// Closures `FnMut(usize) -> f64` (boxed or not) implement this trait, so most callers never
/// name it.
pub trait SizeGetter {
    fn size(&mut self, index: usize) -> Option<f64>;
}

impl<F> SizeGetter for F
where
    F: FnMut(usize) -> f64,
{
    fn size(&mut self, index: usize) -> Option<f64> {
        Some(self(index))
    }
}

/// Every item has the same size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSize(pub f64);

impl SizeGetter for FixedSize {
    fn size(&mut self, _index: usize) -> Option<f64> {
        Some(self.0)
    }
}

/// Per-index sizes read from a slice (or anything that derefs to one).
///
/// Indices past the end of the slice report a missing size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeList<T>(pub T);

impl<T: AsRef<[f64]>> SizeGetter for SizeList<T> {
    fn size(&mut self, index: usize) -> Option<f64> {
        self.0.as_ref().get(index).copied()
    }
}
