//! References to single cells of a matrix.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::dim::{Dim, MultiDim};
use crate::matrix::SparseMatrix;
use crate::pos::Pos;

/// Reference to one cell of a matrix, produced by indexing the last axis of a
/// `Slice` or by `SparseMatrix::cell()`.
///
/// `M` is either `&SparseMatrix` (read-only) or `&mut SparseMatrix`
/// (writable). The value is never cached: every read and write looks the
/// position up in the matrix again, and writing the matrix's default value
/// removes the cell from storage.
///
/// A `Cell` dereferences to the cell's current value, so it compares and
/// formats like one.
///
/// ```
/// # use ndmatrix_core::prelude::*;
/// let mut m = SparseMatrix::<i32>::new(-1);
/// m.at_mut(100).at(100).set(314).set(0).set(217);
/// assert!(m.at(100).at(100) == 217);
/// assert_eq!(1, m.len());
/// ```
pub struct Cell<M, D: Dim> {
    matrix: M,
    pos: Pos<D>,
}

impl<M, D: Dim> Cell<M, D> {
    #[inline]
    pub(crate) fn new(matrix: M, pos: Pos<D>) -> Self {
        Self { matrix, pos }
    }

    /// Returns the position of the cell.
    #[inline]
    pub fn pos(&self) -> &Pos<D> {
        &self.pos
    }
}

impl<M, T, D> Cell<M, D>
where
    M: Deref<Target = SparseMatrix<T, D>>,
    T: PartialEq,
    D: MultiDim,
{
    /// Returns a reference to the current value of the cell, which is the
    /// matrix's default value if the cell has not been set.
    #[inline]
    pub fn get(&self) -> &T {
        self.matrix.get(self.pos)
    }
    /// Returns a copy of the current value of the cell.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.get().clone()
    }
    /// Returns true if the cell holds the matrix's default value.
    #[inline]
    pub fn is_default(&self) -> bool {
        !self.matrix.contains(self.pos)
    }
}

impl<M, T, D> Cell<M, D>
where
    M: DerefMut<Target = SparseMatrix<T, D>>,
    T: PartialEq,
    D: MultiDim,
{
    /// Sets the value of the cell. Setting the default value removes the cell
    /// from storage.
    ///
    /// Returns the cell itself so that writes can be chained; each write
    /// replaces the previous one.
    #[inline]
    pub fn set(&mut self, value: T) -> &mut Self {
        self.matrix.set(self.pos, value);
        self
    }
    /// Resets the cell to the matrix's default value.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.matrix.clear(self.pos);
        self
    }
    /// Sets the value of the cell to the current value of another cell, which
    /// may belong to a different matrix.
    ///
    /// The value is copied out of `other` before writing, so the two cells
    /// stay independent afterwards.
    #[inline]
    pub fn assign<M2>(&mut self, other: &Cell<M2, D>) -> &mut Self
    where
        M2: Deref<Target = SparseMatrix<T, D>>,
        T: Clone,
    {
        let value = other.value();
        self.set(value)
    }
    /// Sets the value of the cell by applying `f` to its current value.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> &mut Self {
        let value = f(self.get());
        self.set(value)
    }
}

impl<M, T, D> Deref for Cell<M, D>
where
    M: Deref<Target = SparseMatrix<T, D>>,
    T: PartialEq,
    D: MultiDim,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<M, T, D> PartialEq<T> for Cell<M, D>
where
    M: Deref<Target = SparseMatrix<T, D>>,
    T: PartialEq,
    D: MultiDim,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.get() == other
    }
}

impl<M, T, D> fmt::Debug for Cell<M, D>
where
    M: Deref<Target = SparseMatrix<T, D>>,
    T: PartialEq + fmt::Debug,
    D: MultiDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("pos", &self.pos)
            .field("value", self.get())
            .finish()
    }
}

impl<M, T, D> fmt::Display for Cell<M, D>
where
    M: Deref<Target = SparseMatrix<T, D>>,
    T: PartialEq + fmt::Display,
    D: MultiDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_cell_read_does_not_insert() {
        let m = SparseMatrix::<i32>::new(-1);
        let cell = m.cell([5, 5]);
        assert!(cell == -1);
        assert!(cell.is_default());
        assert_eq!(-1, *cell);
        assert!(m.is_empty());
    }

    #[test]
    fn test_cell_chained_set_converges() {
        let mut m = SparseMatrix::<i32>::new(-1);
        m.at_mut(1).at(1).set(5).set(-1);
        assert!(m.is_empty());
        m.at_mut(1).at(1).set(-1).set(5);
        assert_eq!(1, m.len());
        assert_eq!(&5, m.get([1, 1]));
        m.at_mut(1).at(1).clear().set(6).clear();
        assert!(m.is_empty());
    }

    #[test]
    fn test_cell_compare_by_value() {
        let mut m1 = SparseMatrix::<i32>::new(0);
        let mut m2 = SparseMatrix::<i32>::new(7);
        m1.set([1, 1], 5);
        m2.set([2, 2], 5);
        assert!(*m1.at(1).at(1) == *m2.at(2).at(2));
        assert!(*m1.at(0).at(0) != *m2.at(0).at(0));
        assert!(m1.at(1).at(1) != 4);
    }

    #[test]
    fn test_cell_update() {
        let mut m = SparseMatrix::<u32>::default();
        for _ in 0..3 {
            m.at_mut(2).at(3).update(|n| n + 1);
        }
        assert_eq!(&3, m.get([2, 3]));
        m.cell_mut([2, 3]).update(|_| 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_cell_format() {
        let mut m = SparseMatrix::<i32>::new(0);
        m.set([3, -4], 12);
        assert_eq!("12", m.at(3).at(-4).to_string());
        assert_eq!(
            "Cell { pos: Pos([3, -4]), value: 12 }",
            format!("{:?}", m.cell([3, -4])),
        );
    }
}
