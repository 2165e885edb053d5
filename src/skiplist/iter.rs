use std::iter::FusedIterator;

use super::node::{NodeArena, NodeId};

/// Итератор по узлам списка в прямом порядке.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

/// Итератор по узлам списка в обратном порядке.
pub struct ReverseIter<'a, T> {
    arena: &'a NodeArena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        arena: &'a NodeArena<T>,
        start: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            current: start,
            remaining,
        }
    }
}

impl<'a, T> ReverseIter<'a, T> {
    pub(crate) fn new(
        arena: &'a NodeArena<T>,
        start: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            current: start,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.arena[self.current?];

        self.current = node.levels[0].forward;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for ReverseIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.arena[self.current?];

        self.current = node.backward;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for ReverseIter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for ReverseIter<'_, T> {}
