use core::fmt;

/// Errors reported by [`crate::PositionIndex`].
///
/// Every variant describes a caller bug (bad configuration or a broken size function). The
/// failing call has no partial result; nothing inside the index retries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionIndexError {
    /// An index argument was outside `0..item_count`.
    IndexOutOfRange { index: usize, item_count: usize },
    /// The size getter returned a missing or non-finite size.
    InvalidSize { index: usize, size: Option<f64> },
    /// A NaN offset was passed to a search.
    InvalidOffset { offset: f64 },
    /// The estimated item size is not a finite number.
    InvalidEstimatedSize { size: f64 },
}

impl fmt::Display for PositionIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfRange { index, item_count } => write!(
                f,
                "requested index {index} is outside of range 0..{item_count}"
            ),
            Self::InvalidSize {
                index,
                size: Some(size),
            } => write!(f, "invalid size returned for index {index} of value {size}"),
            Self::InvalidSize { index, size: None } => {
                write!(f, "no size returned for index {index}")
            }
            Self::InvalidOffset { offset } => write!(f, "invalid offset {offset} specified"),
            Self::InvalidEstimatedSize { size } => {
                write!(f, "invalid estimated item size {size}")
            }
        }
    }
}

impl core::error::Error for PositionIndexError {}

pub type Result<T, E = PositionIndexError> = core::result::Result<T, E>;
