//! Demo of a sparse 2D matrix: fills in both diagonals of a square, prints
//! its interior, and lists every non-default cell.

#![warn(missing_docs)]

use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::{debug, info};

use ndmatrix_core::prelude::*;

mod config;

use config::DemoConfig;

fn main() -> Result<()> {
    simple_logger::init().map_err(|e| anyhow!("Unable to initialize logger: {}", e))?;
    info!("Starting NDMatrix demo v{} ...", env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    debug!("Using {:?}", config);

    let m = make_diagonals(&config);
    for line in render_interior(&m, config.size) {
        println!("{}", line);
    }
    println!("{}", m.len());
    for (pos, value) in m.iter().sorted_by_key(|(pos, _)| (pos[Axis::X], pos[Axis::Y])) {
        println!("value '{}' at {}, {}", value, pos[Axis::X], pos[Axis::Y]);
    }

    info!("Done");
    Ok(())
}

/// Sets `m[i][i] = i` and `m[i][size-1-i] = size-1-i` for every `i` in the
/// square.
fn make_diagonals(config: &DemoConfig) -> SparseMatrix<i32> {
    let mut m: SparseMatrix<i32> =
        SparseMatrix::with_capacity(config.default, 2 * config.size as usize);
    let last = config.size - 1;
    for i in 0..config.size {
        m.at_mut(i).at(i).set(i as i32);
        m.at_mut(i).at(last - i).set((last - i) as i32);
    }
    debug!("Wrote {} non-default cells", m.len());
    m
}

/// Returns one line per row of the square, excluding its border.
fn render_interior(m: &SparseMatrix<i32>, size: isize) -> Vec<String> {
    (1..size - 1)
        .map(|y| (1..size - 1).map(|x| m.at(x).at(y).to_string()).join(" "))
        .collect()
}
