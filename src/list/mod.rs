//! A module containing [`StringList`] and associated types.
//!
//! The iterator types cover the three receiver forms: [`Iter`] and [`IterMut`] borrow the list,
//! while [`IntoIter`] consumes it and yields owned values. Failures are reported through the
//! [`OutOfRange`] union and the two errors it wraps.
//!
//! [`StringList`] is also re-exported at the crate root.

mod error;
mod iter;
mod node;
mod string_list;

pub use error::*;
pub use iter::*;
pub(crate) use node::*;
pub use string_list::*;
