use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Error returned when an index falls outside the valid range of a [`StringList`] operation.
///
/// Carries the rejected index alongside the list's length at the time of the call, so the
/// message can state both.
///
/// [`StringList`]: crate::StringList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for list with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// Error returned when an element is requested from a list with no elements, where every
/// index is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot index into an empty list!")
    }
}

impl Error for EmptyList {}

/// The union of the index errors a [`StringList`] operation can signal.
///
/// Operations whose valid range is `0..len` report [`EmptyList`] when called on a list with
/// no elements; every other rejected index is an [`IndexOutOfRange`].
///
/// [`StringList`]: crate::StringList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum OutOfRange {
    IndexOutOfRange(IndexOutOfRange),
    EmptyList(EmptyList),
}

impl OutOfRange {
    /// Selects the variant for an operation over `0..len`: any index is invalid for an empty
    /// list, so `len == 0` is reported as [`EmptyList`].
    pub(crate) fn new(index: usize, len: usize) -> OutOfRange {
        if len == 0 {
            EmptyList.into()
        } else {
            IndexOutOfRange { index, len }.into()
        }
    }
}
