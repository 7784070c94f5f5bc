//! Conversions into `Pos`.

use std::convert::TryFrom;

use super::Pos;
use crate::dim::*;
use crate::errors::{NdMatrixError, NdMatrixResult};

impl From<[isize; 1]> for Pos<Dim1D> {
    #[inline]
    fn from(components: [isize; 1]) -> Self {
        Self(components)
    }
}
impl From<[isize; 2]> for Pos<Dim2D> {
    #[inline]
    fn from(components: [isize; 2]) -> Self {
        Self(components)
    }
}
impl From<[isize; 3]> for Pos<Dim3D> {
    #[inline]
    fn from(components: [isize; 3]) -> Self {
        Self(components)
    }
}
impl From<[isize; 4]> for Pos<Dim4D> {
    #[inline]
    fn from(components: [isize; 4]) -> Self {
        Self(components)
    }
}
impl From<[isize; 5]> for Pos<Dim5D> {
    #[inline]
    fn from(components: [isize; 5]) -> Self {
        Self(components)
    }
}
impl From<[isize; 6]> for Pos<Dim6D> {
    #[inline]
    fn from(components: [isize; 6]) -> Self {
        Self(components)
    }
}

impl<D: Dim> TryFrom<&[isize]> for Pos<D> {
    type Error = NdMatrixError;

    /// Creates a coordinate from a list of components, which must have
    /// exactly `D::NDIM` elements.
    fn try_from(components: &[isize]) -> NdMatrixResult<Self> {
        if components.len() == D::NDIM {
            Ok(Self::from_components(components))
        } else {
            Err(NdMatrixError::DimensionMismatch {
                expected: D::NDIM,
                got: components.len(),
            })
        }
    }
}
