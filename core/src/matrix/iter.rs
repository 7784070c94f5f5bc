//! Iterators over the non-default cells of a matrix.

use std::collections::hash_map;
use std::iter::FusedIterator;

use super::SparseMatrix;
use crate::dim::{Dim, MultiDim};
use crate::pos::Pos;

/// Iterator over the positions and values of non-default cells in a matrix.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, D: Dim> {
    inner: hash_map::Iter<'a, Pos<D>, T>,
}
impl<'a, T, D: Dim> Iter<'a, T, D> {
    #[inline]
    pub(super) fn new(inner: hash_map::Iter<'a, Pos<D>, T>) -> Self {
        Self { inner }
    }
}
impl<'a, T, D: Dim> Iterator for Iter<'a, T, D> {
    type Item = (&'a Pos<D>, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T, D: Dim> ExactSizeIterator for Iter<'_, T, D> {}
impl<T, D: Dim> FusedIterator for Iter<'_, T, D> {}

/// Owning iterator over the positions and values of non-default cells in a
/// matrix.
#[derive(Debug)]
pub struct IntoIter<T, D: Dim> {
    inner: hash_map::IntoIter<Pos<D>, T>,
}
impl<T, D: Dim> Iterator for IntoIter<T, D> {
    type Item = (Pos<D>, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T, D: Dim> ExactSizeIterator for IntoIter<T, D> {}
impl<T, D: Dim> FusedIterator for IntoIter<T, D> {}

impl<'a, T: PartialEq, D: MultiDim> IntoIterator for &'a SparseMatrix<T, D> {
    type Item = (&'a Pos<D>, &'a T);
    type IntoIter = Iter<'a, T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, D: MultiDim> IntoIterator for SparseMatrix<T, D> {
    type Item = (Pos<D>, T);
    type IntoIter = IntoIter<T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.cells.into_iter(),
        }
    }
}
