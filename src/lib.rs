//! A singly linked list specialized for owning [`String`] values.
//!
//! # Purpose
//! [`StringList`] keeps its elements in a chain of heap nodes, each owning one string and the
//! link to its successor. Only the head link and a running count are stored, so positional
//! operations walk the chain from the front. The type is a self-contained container: no
//! threads, and no I/O surface beyond [`StringList::print`].
//!
//! # Error Handling
//! Every index-taking operation is offered in two forms: a `try_` method returning a strongly
//! typed [`Result`], and a convenience wrapper that panics with the same message the error
//! would display. Errors are plain structs implementing [`Error`](std::error::Error), unioned
//! into [`OutOfRange`] for static dispatch rather than boxed dynamic errors. An invalid index
//! is always caught before any part of the list is modified.
//!
//! # Dependencies
//! The error union's conversion and display plumbing is derived with `derive_more`, which
//! removes the need for some very repetitive trait implementations. Everything else is `std`.
#![forbid(unsafe_code)]

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod list;

pub(crate) mod util;

#[doc(inline)]
pub use list::{EmptyList, IndexOutOfRange, OutOfRange, StringList};
