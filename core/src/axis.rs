//! Enumeration of axes.
//!
//! These name the components of a `Pos`, in the order they are supplied when
//! indexing a matrix one axis at a time.

use std::convert::TryFrom;
use std::fmt;

pub use Axis::*;

/// Enumeration of the six axes supported by NDMatrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (first index).
    X = 0,
    /// Y axis (second index).
    Y = 1,
    /// Z axis (third index).
    Z = 2,
    /// W axis (4th dimension).
    W = 3,
    /// U axis (5th dimension).
    U = 4,
    /// V axis (6th dimension).
    V = 5,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<usize> for Axis {
    type Error = usize;

    /// Returns the axis at the given index, or the index itself if there is
    /// no such axis.
    #[inline]
    fn try_from(index: usize) -> Result<Self, usize> {
        AXES.get(index).copied().ok_or(index)
    }
}

impl Axis {
    /// Returns the name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::W => "W",
            Axis::U => "U",
            Axis::V => "V",
        }
    }

    /// Returns the position of this axis in a coordinate.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y, Axis::Z, Axis::W, Axis::U, Axis::V];

/// Returns a list of axes up to some number of dimensions.
#[inline]
pub fn ndim_axes(ndim: usize) -> &'static [Axis] {
    &AXES[..ndim]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_iter() {
        assert_eq!(vec![Axis::X, Axis::Y, Axis::Z, Axis::W], ndim_axes(4))
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Ok(Axis::Z), Axis::try_from(2));
        assert_eq!(Err(6), Axis::try_from(6));
        for (i, &ax) in AXES.iter().enumerate() {
            assert_eq!(i, ax.index());
        }
    }
}
