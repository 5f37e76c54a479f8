//! Animated search and maze generation over a [`mazepath_core::Grid`].
//!
//! This crate provides the algorithm layer of the visualizer:
//!
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **A\*** Manhattan-guided shortest-path search ([`AStar`])
//! - **Greedy best-first** heuristic-only search ([`GreedyBestFirst`])
//! - **Breadth-first** unweighted shortest-path search ([`BreadthFirst`])
//! - **Depth-first** unweighted search ([`DepthFirst`])
//! - **Recursive backtracker** maze carving ([`RecursiveBacktracker`])
//!
//! All searches run through a shared [`SearchEngine`] that owns the grid
//! handle, the predecessor map, and the animation pacing, and they expose
//! a common [`Strategy`] interface. [`run_with_bomb`] chains two searches
//! through a mandatory waypoint and paints the combined corridor.
//!
//! | Algorithm | Weighted | Shortest path |
//! |---|---|---|
//! | [`Dijkstra`] | yes | guaranteed |
//! | [`AStar`] | yes | guaranteed |
//! | [`GreedyBestFirst`] | no | not guaranteed |
//! | [`BreadthFirst`] | no | guaranteed |
//! | [`DepthFirst`] | no | not guaranteed |

mod astar;
mod bfs;
mod bomb;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod greedy;
mod maze;
mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use bomb::run_with_bomb;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use engine::{AbortHook, DrawHook, SearchEngine, UNREACHABLE};
pub use greedy::GreedyBestFirst;
pub use maze::RecursiveBacktracker;
pub use traits::{Algorithm, Strategy};
