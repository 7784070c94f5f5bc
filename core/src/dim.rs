//! Dimensionality trait, which provides a number of dimensions.
//!
//! Dimensionality is a type parameter rather than a runtime value, so that a
//! coordinate is a plain fixed-size array and so that indexing a matrix one
//! axis at a time knows statically when it has reached the last axis.

use std::fmt;
use std::hash::Hash;

use crate::axis::{ndim_axes, Axis};
use crate::slice::{Last, More, Remaining};

/// Dimensionality of a coordinate.
///
/// This trait is only implemented for the six structs `Dim1D`, `Dim2D`,
/// `Dim3D`, `Dim4D`, `Dim5D`, and `Dim6D`. (NDMatrix does not and will not
/// support more than six dimensions.)
pub trait Dim:
    'static + fmt::Debug + Default + Copy + Eq + Hash + Send + Sync + private::Sealed
{
    /// Number of dimensions.
    const NDIM: usize;

    /// Array type used for coordinates.
    type Array: fmt::Debug
        + Default
        + Copy
        + Eq
        + Hash
        + Send
        + Sync
        + AsRef<[isize]>
        + AsMut<[isize]>;

    /// Returns an array of the axes of this many dimensions.
    fn axes() -> &'static [Axis] {
        ndim_axes(Self::NDIM)
    }

    /// Returns true if this dimensionality includes the given axis.
    fn contains(axis: Axis) -> bool {
        (axis as usize) < Self::NDIM
    }
}

/// Dimensionality with at least two axes, which is required for a matrix.
///
/// A one-dimensional matrix would resolve to a cell after the very first
/// index, which is not supported.
pub trait MultiDim: Dim {
    /// Dimensionality with one axis fewer.
    type Lower: Dim;
    /// Axes left to supply after indexing the first one.
    type Rest: Remaining;
}

/// 1 dimension.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim1D;
/// 2 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim2D;
/// 3 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim3D;
/// 4 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim4D;
/// 5 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim5D;
/// 6 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim6D;

impl Dim for Dim1D {
    const NDIM: usize = 1;
    type Array = [isize; 1];
}
impl Dim for Dim2D {
    const NDIM: usize = 2;
    type Array = [isize; 2];
}
impl Dim for Dim3D {
    const NDIM: usize = 3;
    type Array = [isize; 3];
}
impl Dim for Dim4D {
    const NDIM: usize = 4;
    type Array = [isize; 4];
}
impl Dim for Dim5D {
    const NDIM: usize = 5;
    type Array = [isize; 5];
}
impl Dim for Dim6D {
    const NDIM: usize = 6;
    type Array = [isize; 6];
}

impl MultiDim for Dim2D {
    type Lower = Dim1D;
    type Rest = Last;
}
impl MultiDim for Dim3D {
    type Lower = Dim2D;
    type Rest = More<Last>;
}
impl MultiDim for Dim4D {
    type Lower = Dim3D;
    type Rest = More<More<Last>>;
}
impl MultiDim for Dim5D {
    type Lower = Dim4D;
    type Rest = More<More<More<Last>>>;
}
impl MultiDim for Dim6D {
    type Lower = Dim5D;
    type Rest = More<More<More<More<Last>>>>;
}

// Make `Dim` a "sealed trait."
// https://rust-lang.github.io/api-guidelines/future-proofing.html#c-sealed
mod private {
    use super::*;

    pub trait Sealed {}
    impl Sealed for Dim1D {}
    impl Sealed for Dim2D {}
    impl Sealed for Dim3D {}
    impl Sealed for Dim4D {}
    impl Sealed for Dim5D {}
    impl Sealed for Dim6D {}
}
