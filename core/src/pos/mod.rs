//! N-dimensional integer coordinates.
//!
//! A `Pos` identifies one cell of a matrix. Components are signed, so negative
//! coordinates are ordinary keys just like positive ones.

use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};

mod convert;

use crate::axis::Axis;
use crate::dim::*;

/// `D`-dimensional coordinate with `isize` components.
///
/// Equality and hashing are structural. Every component is fed to the hasher
/// in axis order, so coordinates that differ only by a permutation of their
/// components hash differently.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos<D: Dim>(pub D::Array);

/// 2D coordinate.
pub type Pos2D = Pos<Dim2D>;
/// 3D coordinate.
pub type Pos3D = Pos<Dim3D>;
/// 4D coordinate.
pub type Pos4D = Pos<Dim4D>;
/// 5D coordinate.
pub type Pos5D = Pos<Dim5D>;
/// 6D coordinate.
pub type Pos6D = Pos<Dim6D>;

impl<D: Dim> fmt::Display for Pos<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components().iter().join(", "))
    }
}

// Implement indexing using `Axis`.
impl<D: Dim> Index<Axis> for Pos<D> {
    type Output = isize;
    fn index(&self, axis: Axis) -> &isize {
        &self.0.as_ref()[axis as usize]
    }
}
impl<D: Dim> IndexMut<Axis> for Pos<D> {
    fn index_mut(&mut self, axis: Axis) -> &mut isize {
        &mut self.0.as_mut()[axis as usize]
    }
}

impl<D: Dim> Pos<D> {
    /// Creates a coordinate from an array of components.
    #[inline]
    pub fn new(components: D::Array) -> Self {
        Self(components)
    }
    /// Creates a coordinate consisting of all zeros.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    /// Creates a coordinate from a list of components, ignoring any extra
    /// components and filling any missing ones with zero.
    ///
    /// Use `Pos::try_from()` to reject lists of the wrong length instead.
    pub fn from_components(components: &[isize]) -> Self {
        let mut ret = Self::origin();
        for (dst, &src) in ret.0.as_mut().iter_mut().zip(components) {
            *dst = src;
        }
        ret
    }
    /// Creates a coordinate by evaluating `generator` for each axis.
    pub fn from_fn(mut generator: impl FnMut(Axis) -> isize) -> Self {
        let mut ret = Self::origin();
        for &ax in D::axes() {
            ret[ax] = generator(ax);
        }
        ret
    }
    /// Creates a coordinate using `value` for all components.
    pub fn repeat(value: isize) -> Self {
        Self::from_fn(|_| value)
    }

    /// Returns the components of the coordinate in axis order.
    #[inline]
    pub fn components(&self) -> &[isize] {
        self.0.as_ref()
    }
    /// Returns the number of dimensions of the coordinate.
    #[inline]
    pub fn ndim(&self) -> usize {
        D::NDIM
    }
    /// Returns true if the coordinate is all zeros, or false otherwise.
    pub fn is_origin(&self) -> bool {
        *self == Self::origin()
    }
}

impl<D: MultiDim> Pos<D> {
    /// Creates a coordinate from a lower-dimensional one plus one trailing
    /// component.
    pub fn extend(lower: &Pos<D::Lower>, last: isize) -> Self {
        let mut ret = Self::from_components(lower.components());
        ret.0.as_mut()[D::NDIM - 1] = last;
        ret
    }
}
