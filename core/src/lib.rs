//! Sparse N-dimensional matrices.
//!
//! A `SparseMatrix` is addressed by signed integer coordinates along two to
//! six axes. Every cell holds the matrix's default value until it is set to
//! something else, and only cells holding other values take up memory.
//!
//! Cells can be reached directly by position or by indexing one axis at a
//! time:
//!
//! ```
//! use ndmatrix_core::prelude::*;
//!
//! let mut m = SparseMatrix::<i32, Dim3D>::new(0);
//! m.at_mut(1).at(0).at(0).set(100);
//! m.set([1, 1, 1], 200);
//!
//! assert!(m.at(1).at(0).at(0) == 100);
//! assert_eq!(&200, m.get([1, 1, 1]));
//! assert_eq!(&0, m.get([0, 1, 0]));
//! assert_eq!(2, m.len());
//!
//! // Writing the default value removes the cell.
//! m.at_mut(1).at(1).at(1).set(0);
//! assert_eq!(1, m.len());
//! ```
//!
//! A matrix has no internal synchronization. Sharing one between threads for
//! writing requires an external lock around each read-modify-write sequence.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod axis;
pub mod cell;
mod dim;
mod errors;
pub mod matrix;
pub mod pos;
pub mod slice;

pub use axis::Axis;
pub use dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D, MultiDim};
pub use errors::{NdMatrixError, NdMatrixResult};

pub mod traits {
    //! Traits needed to use NDMatrix generically.

    pub use crate::dim::{Dim, MultiDim};
    pub use crate::slice::Remaining;
}

pub mod prelude {
    //! Commonly used types and traits.

    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::cell::Cell;
    pub use crate::dim::{Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
    pub use crate::errors::{NdMatrixError, NdMatrixResult};
    pub use crate::matrix::SparseMatrix;
    pub use crate::pos::{Pos, Pos2D, Pos3D, Pos4D, Pos5D, Pos6D};
    pub use crate::slice::{Last, More, Slice};
}

#[cfg(test)]
mod tests;
