//! **mazepath-core** — grid and cell model for the mazepath pathfinding
//! visualizer.
//!
//! This crate provides the data layer the search algorithms in
//! `mazepath-algos` operate on: geometry primitives, the cell state
//! machine, and a shared-buffer [`Grid`] whose clones are views of the
//! same storage (so a redraw callback observes in-place mutation).

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use geom::{Point, Range};
pub use grid::Grid;
