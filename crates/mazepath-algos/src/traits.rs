//! The strategy contract and the algorithm selector.

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::engine::SearchEngine;
use crate::greedy::GreedyBestFirst;

/// One interchangeable search strategy over the shared [`SearchEngine`].
///
/// All implementations run the same finite-state loop:
/// seeded → expanding → found or exhausted. Exhausting the container
/// without reaching the end is a normal negative result, never an error.
pub trait Strategy {
    /// Insert the start cell into the strategy's container with its
    /// initial priority, and set up initial bookkeeping.
    fn seed_open_set(&mut self);

    /// Relax each qualifying neighbor of a freshly-popped cell.
    fn relax_neighbors(&mut self, current: mazepath_core::Point);

    /// Run to completion. Returns `true` iff the end cell was reached;
    /// grid cells are marked in place and the redraw hook fires zero or
    /// more times along the way (never in auto-compute mode).
    fn execute(&mut self) -> bool;

    /// The engine driving this run, for reading accumulated state such as
    /// the bomb path.
    fn engine(&self) -> &SearchEngine;

    /// Trivial flag-check hook the orchestrator consults after a failed
    /// run before showing its "no path" message.
    fn no_path(&self) -> bool {
        true
    }
}

/// Selector for the five pathfinding strategies, mirroring the
/// visualizer's dropdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    GreedyBestFirst,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    /// Every selectable algorithm, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's",
            Algorithm::AStar => "A* Search",
            Algorithm::GreedyBestFirst => "Greedy Best-First",
            Algorithm::BreadthFirst => "Breadth-First",
            Algorithm::DepthFirst => "Depth-First",
        }
    }

    /// Whether the strategy guarantees a shortest path on a uniform grid.
    pub const fn shortest_path_guaranteed(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::AStar | Algorithm::BreadthFirst
        )
    }

    /// Construct a fresh strategy instance over `engine`.
    pub fn strategy(self, engine: SearchEngine) -> Box<dyn Strategy> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra::new(engine)),
            Algorithm::AStar => Box::new(AStar::new(engine)),
            Algorithm::GreedyBestFirst => Box::new(GreedyBestFirst::new(engine)),
            Algorithm::BreadthFirst => Box::new(BreadthFirst::new(engine)),
            Algorithm::DepthFirst => Box::new(DepthFirst::new(engine)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DrawHook;
    use mazepath_core::{CellState, Grid, Point};

    #[test]
    fn guarantees_match_the_theory() {
        assert!(Algorithm::Dijkstra.shortest_path_guaranteed());
        assert!(Algorithm::AStar.shortest_path_guaranteed());
        assert!(Algorithm::BreadthFirst.shortest_path_guaranteed());
        assert!(!Algorithm::GreedyBestFirst.shortest_path_guaranteed());
        assert!(!Algorithm::DepthFirst.shortest_path_guaranteed());
    }

    /// Every strategy reports success on a fully open grid and leaves the
    /// `no_path` hook returning its constant `true`.
    #[test]
    fn all_strategies_succeed_on_open_grid() {
        for algo in Algorithm::ALL {
            let g = Grid::new(5, 5, 16);
            let start = Point::new(0, 0);
            let end = Point::new(4, 4);
            g.set_state(start, CellState::Start);
            g.set_state(end, CellState::End);

            let engine = SearchEngine::new(DrawHook::noop(), g.clone(), start, end, 0, true);
            let mut strategy = algo.strategy(engine);
            assert!(strategy.execute(), "{algo} failed on an open grid");
            assert!(strategy.no_path());
        }
    }

    /// A fully enclosed end cell defeats every strategy; the negative
    /// result is a plain `false` and nothing inside the enclosure is
    /// ever marked.
    #[test]
    fn all_strategies_fail_on_enclosed_end() {
        for algo in Algorithm::ALL {
            let g = Grid::new(5, 5, 16);
            let start = Point::new(0, 0);
            let end = Point::new(4, 4);
            g.set_state(start, CellState::Start);
            g.set_state(end, CellState::End);
            g.set_state(Point::new(3, 4), CellState::Wall);
            g.set_state(Point::new(3, 3), CellState::Wall);
            g.set_state(Point::new(4, 3), CellState::Wall);

            let engine = SearchEngine::new(DrawHook::noop(), g.clone(), start, end, 0, true);
            let mut strategy = algo.strategy(engine);
            assert!(!strategy.execute(), "{algo} found a path into an enclosure");
            assert_eq!(g.count(CellState::Path), 0);
            assert_eq!(g.state(end), CellState::End);
        }
    }

    /// Walls are never traversed or repainted by any strategy.
    #[test]
    fn walls_survive_every_strategy() {
        for algo in Algorithm::ALL {
            let g = Grid::new(5, 5, 16);
            let start = Point::new(0, 0);
            let end = Point::new(4, 0);
            g.set_state(start, CellState::Start);
            g.set_state(end, CellState::End);
            let walls = [
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(2, 3),
            ];
            for w in walls {
                g.set_state(w, CellState::Wall);
            }

            let engine = SearchEngine::new(DrawHook::noop(), g.clone(), start, end, 0, true);
            let mut strategy = algo.strategy(engine);
            assert!(strategy.execute(), "{algo} failed through the gap");
            for w in walls {
                assert_eq!(g.state(w), CellState::Wall, "{algo} touched a wall");
            }
            // The only route passes through the gap below the wall.
            assert_eq!(g.state(Point::new(2, 4)), CellState::Path);
        }
    }
}
