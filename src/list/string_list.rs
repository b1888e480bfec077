use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{IndexOutOfRange, Iter, IterMut, Link, Node, OutOfRange};
use crate::util::result::ResultExtension;

/// An ordered, mutable sequence of [`String`] values held in a singly linked chain of owned
/// nodes.
///
/// The list stores a single link to the head of the chain alongside its element count, so any
/// operation that needs a later position walks the chain to reach it. Every index-taking
/// operation comes in two forms: a `try_` method returning a strongly typed [`Result`], and a
/// convenience wrapper that panics with the error's own message on a failure.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the StringList.
/// - `m`: The number of items in the second StringList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `append` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` / `pop` | `O(i)` |
/// | `assign` | `O(i)` |
/// | `index_of` / `contains` | `O(n)` |
/// | `extend_from` | `O(n+m)` |
///
/// `append` is `O(n)` rather than `O(1)` because only the head link is stored; reaching the
/// tail means following every link before it.
pub struct StringList {
    pub(crate) head: Link,
    pub(crate) len: usize,
}

impl StringList {
    /// Creates a new StringList with no elements.
    ///
    /// # Examples
    /// ```
    /// # use strlist::StringList;
    /// let list = StringList::new();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub const fn new() -> StringList {
        StringList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the StringList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the StringList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    /// Returns a reference to the last element in the list, if it exists. Walks the whole chain
    /// to reach it.
    pub fn back(&self) -> Option<&str> {
        let mut node = self.head.as_deref()?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Some(&node.value)
    }

    /// Adds the provided value as the new last element of the list.
    ///
    /// # Examples
    /// ```
    /// # use strlist::StringList;
    /// let mut list = StringList::new();
    /// list.append("a");
    /// list.append("b");
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1), "b");
    /// ```
    pub fn append(&mut self, value: impl Into<String>) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Node::link(value.into(), None);
        self.len += 1;
    }

    /// Inserts the provided value at `index`, shifting the elements at and after it one
    /// position towards the back. An `index` equal to the list's length is valid and appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the StringList.
    pub fn insert(&mut self, index: usize, value: impl Into<String>) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] on a failure rather than
    /// panicking. An `index` equal to the list's length is valid and appends.
    pub fn try_insert(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), IndexOutOfRange> {
        let len = self.len;
        let Some(slot) = self.link_mut(index) else {
            return Err(IndexOutOfRange { index, len });
        };
        let next = slot.take();
        *slot = Node::link(value.into(), next);
        self.len += 1;
        Ok(())
    }

    /// Removes and drops the element at `index`, shifting the elements after it one position
    /// towards the front.
    ///
    /// # Panics
    /// Panics if `index` is out of range of the StringList.
    pub fn remove(&mut self, index: usize) {
        self.try_remove(index).throw()
    }

    /// Removes and drops the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<(), OutOfRange> {
        self.try_pop(index)?;
        Ok(())
    }

    /// Removes the element at `index` and returns it, transferring ownership of the value to
    /// the caller.
    ///
    /// # Panics
    /// Panics if `index` is out of range of the StringList.
    pub fn pop(&mut self, index: usize) -> String {
        self.try_pop(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_pop(&mut self, index: usize) -> Result<String, OutOfRange> {
        let len = self.len;
        let Some(slot) = self.link_mut(index) else {
            return Err(OutOfRange::new(index, len));
        };
        // The slot one past the tail exists but holds no node, so taking from it changes
        // nothing and the list is untouched on this failure path too.
        let Some(node) = slot.take() else {
            return Err(OutOfRange::new(index, len));
        };
        *slot = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of range of the StringList.
    ///
    /// # Examples
    /// ```
    /// # use strlist::StringList;
    /// let list: StringList = ["a", "b"].into_iter().collect();
    /// assert_eq!(list.get(0), "a");
    /// assert!(list.try_get(9).is_err());
    /// ```
    pub fn get(&self, index: usize) -> &str {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&str, OutOfRange> {
        Ok(&self.checked_node(index)?.value)
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of range of the StringList.
    pub fn get_mut(&mut self, index: usize) -> &mut String {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut String, OutOfRange> {
        Ok(&mut self.checked_node_mut(index)?.value)
    }

    /// Replaces the element at `index` with the provided value, dropping the previous value.
    ///
    /// # Panics
    /// Panics if `index` is out of range of the StringList.
    pub fn assign(&mut self, index: usize, value: impl Into<String>) {
        self.try_assign(index, value).throw()
    }

    /// Replaces the element at `index` with the provided value, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_assign(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), OutOfRange> {
        *self.try_get_mut(index)? = value.into();
        Ok(())
    }

    /// Returns the position of the first element equal to `value`, or [`None`] if there is no
    /// match. Comparison is byte-exact.
    ///
    /// # Examples
    /// ```
    /// # use strlist::StringList;
    /// let list: StringList = ["a", "b", "b"].into_iter().collect();
    /// assert_eq!(list.index_of("b"), Some(1));
    /// assert_eq!(list.index_of("c"), None);
    /// ```
    pub fn index_of(&self, value: &str) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == value { return Some(index); }
        }
        None
    }

    /// Returns true if any element of the list is equal to `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    /// Appends a copy of every element of `other` to the end of self, in order. Existing
    /// elements are kept, and the two lists share no nodes afterwards.
    ///
    /// # Examples
    /// ```
    /// # use strlist::StringList;
    /// let mut words: StringList = ["hello"].into_iter().collect();
    /// let more: StringList = ["old", "friend"].into_iter().collect();
    /// words.extend_from(&more);
    /// assert_eq!(words.to_string(), "[ hello old friend ]");
    /// assert_eq!(more.len(), 2);
    /// ```
    pub fn extend_from(&mut self, other: &StringList) {
        self.extend(other.iter());
    }

    /// Removes and drops every element of the list, leaving it empty but immediately reusable.
    /// Clearing an empty list is a no-op.
    pub fn clear(&mut self) {
        // Unlink front to back so that no Box drop recurses into the rest of the chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    /// Writes the list's [`Display`] rendering and a trailing newline to stdout.
    ///
    /// The rendering wraps the space-separated elements in brackets: a list holding `a` and `b`
    /// prints as `[ a b ]`, and an empty list prints as `[ ]`.
    pub fn print(&self) {
        println!("{self}");
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl StringList {
    /// Walks to the node holding the element at `index`. The chain running out before `index`
    /// is reached doubles as the bounds check for every element access.
    fn node(&self, index: usize) -> Option<&Node> {
        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr?.next.as_deref();
        }
        curr
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next.as_deref_mut();
        }
        curr
    }

    /// Walks to the link pointing at position `index`, landing on the [`Link`] slot itself so
    /// that callers can splice. The slot one past the last node exists and is empty, so every
    /// `index` in `0..=len` lands on a slot.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot.as_mut()?.next;
        }
        Some(slot)
    }

    fn checked_node(&self, index: usize) -> Result<&Node, OutOfRange> {
        let len = self.len;
        match self.node(index) {
            Some(node) => Ok(node),
            None => Err(OutOfRange::new(index, len)),
        }
    }

    fn checked_node_mut(&mut self, index: usize) -> Result<&mut Node, OutOfRange> {
        let len = self.len;
        match self.node_mut(index) {
            Some(node) => Ok(node),
            None => Err(OutOfRange::new(index, len)),
        }
    }
}

impl Index<usize> for StringList {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.checked_node(index).throw().value
    }
}

impl IndexMut<usize> for StringList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.checked_node_mut(index).throw().value
    }
}

impl<S: Into<String>> Extend<S> for StringList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        // Walk to the tail once, then keep the cursor on the freshly written node's next link.
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for value in iter {
            let node = slot.insert(Box::new(Node::new(value.into(), None)));
            self.len += 1;
            slot = &mut node.next;
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = StringList::new();
        list.extend(iter);
        list
    }
}

impl Default for StringList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for StringList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for StringList {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        self.iter().eq(other.iter())
    }
}

impl Eq for StringList {}

impl Hash for StringList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl Debug for StringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Adapter so the chain renders as a list inside the struct-style output.
        struct Contents<'a>(&'a StringList);

        impl Debug for Contents<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("StringList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}

/// Renders the bracketed diagnostic form: `[ a b ]` for the elements `a` and `b`, `[ ]` when
/// empty.
impl Display for StringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "{value} ")?;
        }
        write!(f, "]")
    }
}
