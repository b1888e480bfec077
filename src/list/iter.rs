use std::iter::FusedIterator;

use super::{Node, StringList};

// None of these iterators run back to front: a singly linked chain has no back links, so a
// DoubleEndedIterator would cost a full walk per step.

impl IntoIterator for StringList {
    type Item = String;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the elements of a [`StringList`].
pub struct IntoIter {
    // No separate cursor needed when the iterator can hold the list and pop its front.
    pub(crate) list: StringList,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop(0).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a> IntoIterator for &'a mut StringList {
    type Item = &'a mut String;

    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            node: self.head.as_deref_mut(),
        }
    }
}

/// A mutable borrowed iterator over the elements of a [`StringList`].
pub struct IterMut<'a> {
    // The walk consumes the borrowed chain as it goes; len counts the items left to yield.
    pub(crate) node: Option<&'a mut Node>,
    pub(crate) len: usize,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut String;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node.take()?;
        self.node = node.next.as_deref_mut();
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl FusedIterator for IterMut<'_> {}

impl ExactSizeIterator for IterMut<'_> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a str;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            node: self.head.as_deref(),
        }
    }
}

/// A borrowed iterator over the elements of a [`StringList`].
pub struct Iter<'a> {
    pub(crate) node: Option<&'a Node>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl FusedIterator for Iter<'_> {}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.len
    }
}
