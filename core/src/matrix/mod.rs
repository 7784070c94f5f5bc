//! Sparse N-dimensional matrices.
//!
//! A matrix conceptually holds a value at every integer coordinate, but only
//! stores the cells whose value differs from its default. Writing the default
//! value to a cell removes it from storage, so `len()` is always the number of
//! non-default cells.

use log::{debug, trace};
use seahash::SeaHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

mod iter;

pub use iter::{IntoIter, Iter};

use crate::cell::Cell;
use crate::dim::*;
use crate::pos::Pos;
use crate::slice::Slice;

type CellMap<D, T> = HashMap<Pos<D>, T, BuildHasherDefault<SeaHasher>>;

/// Sparse `D`-dimensional matrix of values of type `T`.
///
/// Every cell that has not been set holds the default value, which is fixed
/// when the matrix is created. Cells can be accessed directly by position
/// (`get()`, `set()`, `clear()`) or one axis at a time (`at()`, `at_mut()`).
///
/// Iteration visits only cells with non-default values, in an unspecified
/// order that is stable until the matrix is next modified. The borrow checker
/// rules out modifying a matrix while iterating over it.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, D: MultiDim = Dim2D> {
    /// Value of every cell not in `cells`.
    default: T,
    /// Cells with non-default values.
    cells: CellMap<D, T>,
}

impl<T: PartialEq + Default, D: MultiDim> Default for SparseMatrix<T, D> {
    /// Creates an empty matrix whose default value is `T::default()`.
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, D: MultiDim> PartialEq for SparseMatrix<T, D> {
    /// Returns true if both matrices have the same default value and the same
    /// non-default cells.
    fn eq(&self, other: &Self) -> bool {
        self.default == other.default && self.cells == other.cells
    }
}
impl<T: Eq, D: MultiDim> Eq for SparseMatrix<T, D> {}

impl<T: PartialEq, D: MultiDim> SparseMatrix<T, D> {
    /// Creates an empty matrix with the given default value.
    #[inline]
    pub fn new(default: T) -> Self {
        Self::with_capacity(default, 0)
    }
    /// Creates an empty matrix with the given default value and room for at
    /// least `capacity` non-default cells.
    #[inline]
    pub fn with_capacity(default: T, capacity: usize) -> Self {
        Self {
            default,
            cells: CellMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the value of every cell that has not been set.
    #[doc(alias = "get_default")]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }
    /// Returns the number of cells with non-default values.
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Returns true if every cell holds the default value.
    #[doc(alias = "empty")]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Returns true if the cell at `pos` holds a non-default value.
    #[inline]
    pub fn contains(&self, pos: impl Into<Pos<D>>) -> bool {
        self.cells.contains_key(&pos.into())
    }

    /// Returns the value of the cell at `pos`.
    #[inline]
    pub fn get(&self, pos: impl Into<Pos<D>>) -> &T {
        self.cells.get(&pos.into()).unwrap_or(&self.default)
    }
    /// Sets the value of the cell at `pos`. If `value` is the default value,
    /// the cell is removed from storage instead.
    pub fn set(&mut self, pos: impl Into<Pos<D>>, value: T) {
        let pos = pos.into();
        if value == self.default {
            if self.cells.remove(&pos).is_some() {
                trace!("Wrote default value to {}; cell removed", pos);
            }
        } else {
            self.cells.insert(pos, value);
        }
    }
    /// Resets the cell at `pos` to the default value, returning its previous
    /// value if it had a non-default one.
    #[inline]
    pub fn clear(&mut self, pos: impl Into<Pos<D>>) -> Option<T> {
        self.cells.remove(&pos.into())
    }
    /// Copies the value of the cell at `src` into the cell at `dest`.
    pub fn copy_cell(&mut self, src: impl Into<Pos<D>>, dest: impl Into<Pos<D>>)
    where
        T: Clone,
    {
        let value = self.get(src).clone();
        self.set(dest, value);
    }
    /// Resets every cell to the default value.
    pub fn reset(&mut self) {
        debug!("Resetting sparse matrix with {} cells", self.cells.len());
        self.cells.clear();
    }

    /// Returns an iterator over the positions and values of all cells with
    /// non-default values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::new(self.cells.iter())
    }

    /// Returns a read-only view of the matrix with the first axis fixed.
    #[inline]
    pub fn at(&self, index: isize) -> Slice<&Self, D, D::Rest> {
        Slice::new(self, Self::first_axis(index))
    }
    /// Returns a writable view of the matrix with the first axis fixed.
    #[inline]
    pub fn at_mut(&mut self, index: isize) -> Slice<&mut Self, D, D::Rest> {
        Slice::new(self, Self::first_axis(index))
    }
    /// Returns a read-only reference to the cell at `pos`.
    #[inline]
    pub fn cell(&self, pos: impl Into<Pos<D>>) -> Cell<&Self, D> {
        Cell::new(self, pos.into())
    }
    /// Returns a writable reference to the cell at `pos`.
    #[inline]
    pub fn cell_mut(&mut self, pos: impl Into<Pos<D>>) -> Cell<&mut Self, D> {
        Cell::new(self, pos.into())
    }

    fn first_axis(index: isize) -> Pos<D> {
        Pos::from_components(&[index])
    }
}

impl<T: PartialEq, D: MultiDim, P: Into<Pos<D>>> Extend<(P, T)> for SparseMatrix<T, D> {
    /// Sets each cell in turn, so later writes to the same position win and
    /// default values remove cells.
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (pos, value) in iter {
            self.set(pos, value);
        }
    }
}
