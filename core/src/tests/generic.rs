//! Tests that exercise matrices through generic dimensionality.

use crate::prelude::*;

/// Writes `value` at the all-`n` coordinate for `n` in `0..count` and checks
/// that every other coordinate on a neighboring line stays at the default.
fn check_main_diagonal<D: MultiDim>(count: isize) {
    let mut m = SparseMatrix::<isize, D>::new(-1);
    for n in 0..count {
        m.set(Pos::<D>::repeat(n), n);
    }
    assert_eq!(count as usize, m.len());
    for n in 0..count {
        assert_eq!(&n, m.get(Pos::<D>::repeat(n)));
        let mut off = Pos::<D>::repeat(n);
        off[Axis::X] += 1;
        assert_eq!(&-1, m.get(off));
    }
    for (pos, value) in &m {
        assert!(pos.components().iter().all(|c| c == value));
    }
}

/// Checks that a coordinate built axis by axis lands on the same cell as one
/// built all at once.
fn check_extend_matches_direct<D: MultiDim>() {
    let mut m = SparseMatrix::<u8, D>::new(0);
    let lower = Pos::<D::Lower>::from_fn(|ax| ax as isize + 1);
    let pos = Pos::<D>::extend(&lower, -7);
    m.cell_mut(pos).set(3);
    let direct = Pos::<D>::from_fn(|ax| {
        if ax as usize == D::NDIM - 1 {
            -7
        } else {
            ax as isize + 1
        }
    });
    assert!(m.cell(direct) == 3);
    assert_eq!(1, m.len());
}

#[test]
fn test_generic_dims() {
    check_main_diagonal::<Dim2D>(20);
    check_main_diagonal::<Dim3D>(20);
    check_main_diagonal::<Dim4D>(20);
    check_main_diagonal::<Dim5D>(20);
    check_main_diagonal::<Dim6D>(20);

    check_extend_matches_direct::<Dim2D>();
    check_extend_matches_direct::<Dim3D>();
    check_extend_matches_direct::<Dim4D>();
    check_extend_matches_direct::<Dim5D>();
    check_extend_matches_direct::<Dim6D>();
}
