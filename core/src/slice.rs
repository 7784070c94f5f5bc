//! Partially-indexed views into a matrix.
//!
//! Indexing a `D`-dimensional matrix one axis at a time produces a chain of
//! `Slice`s, each fixing one more axis than the last, until the final axis
//! produces a `Cell`. How many axes are left is tracked in the type of the
//! slice (`Last`, `More<Last>`, `More<More<Last>>`, etc.), so there is no
//! runtime counter and indexing past the last axis does not compile.

use std::fmt;
use std::marker::PhantomData;

use crate::cell::Cell;
use crate::dim::Dim;
use crate::pos::Pos;

/// Type-level count of axes that have not been indexed yet.
pub trait Remaining: 'static + private::Sealed {
    /// Number of axes left to index, including the next one.
    const LEFT: usize;
}

/// Only the last axis remains; indexing it produces a `Cell`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Last;

/// More than one axis remains; indexing produces a `Slice` with one axis
/// fewer, `R`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct More<R: Remaining>(PhantomData<R>);

impl Remaining for Last {
    const LEFT: usize = 1;
}
impl<R: Remaining> Remaining for More<R> {
    const LEFT: usize = R::LEFT + 1;
}

mod private {
    use super::*;

    pub trait Sealed {}
    impl Sealed for Last {}
    impl<R: Remaining> Sealed for More<R> {}
}

/// View into a matrix with some leading axes fixed.
///
/// `M` is either `&SparseMatrix` (read-only) or `&mut SparseMatrix`
/// (writable). A slice owns nothing and is meant to be indexed immediately;
/// the borrow it holds keeps the matrix from being mutated, moved, or dropped
/// in the meantime.
pub struct Slice<M, D: Dim, R: Remaining> {
    matrix: M,
    /// Coordinate with the leading `D::NDIM - R::LEFT` components set; the
    /// rest are zero.
    prefix: Pos<D>,
    _remaining: PhantomData<R>,
}

impl<M, D: Dim, R: Remaining> fmt::Debug for Slice<M, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("prefix", &self.prefix())
            .field("remaining", &R::LEFT)
            .finish()
    }
}

impl<M, D: Dim, R: Remaining> Slice<M, D, R> {
    /// Index of the component that the next call to `at()` fills in.
    const NEXT_AXIS: usize = D::NDIM - R::LEFT;

    #[inline]
    pub(crate) fn new(matrix: M, prefix: Pos<D>) -> Self {
        Self {
            matrix,
            prefix,
            _remaining: PhantomData,
        }
    }

    /// Returns the components fixed so far.
    #[inline]
    pub fn prefix(&self) -> &[isize] {
        &self.prefix.components()[..Self::NEXT_AXIS]
    }
    /// Returns the number of axes that still need to be indexed.
    #[inline]
    pub fn remaining(&self) -> usize {
        R::LEFT
    }

    /// Fixes the next axis, returning the matrix handle and the extended
    /// prefix.
    #[inline]
    fn push(self, index: isize) -> (M, Pos<D>) {
        let mut prefix = self.prefix;
        prefix.0.as_mut()[Self::NEXT_AXIS] = index;
        (self.matrix, prefix)
    }
}

impl<M, D: Dim, R: Remaining> Slice<M, D, More<R>> {
    /// Fixes the next axis, returning a lower-dimensional slice.
    #[inline]
    pub fn at(self, index: isize) -> Slice<M, D, R> {
        let (matrix, prefix) = self.push(index);
        Slice::new(matrix, prefix)
    }
}

impl<M, D: Dim> Slice<M, D, Last> {
    /// Fixes the last axis, returning a reference to a single cell.
    #[inline]
    pub fn at(self, index: isize) -> Cell<M, D> {
        let (matrix, pos) = self.push(index);
        Cell::new(matrix, pos)
    }
}
