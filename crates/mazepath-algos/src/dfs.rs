//! Depth-first search — unweighted, shortest path NOT guaranteed.

use mazepath_core::{CellState, Point};

use crate::engine::SearchEngine;
use crate::traits::Strategy;

/// LIFO exploration: identical relaxation to breadth-first, but the stack
/// dives as deep as possible before backtracking, so the painted path can
/// be much longer than the optimum. That behavior is preserved, not fixed.
pub struct DepthFirst {
    engine: SearchEngine,
    stack: Vec<Point>,
}

impl DepthFirst {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            stack: Vec::new(),
        }
    }
}

impl Strategy for DepthFirst {
    fn seed_open_set(&mut self) {
        let start = self.engine.start();
        self.engine.grid().set_visited(start, true);
        self.stack.push(start);
    }

    fn relax_neighbors(&mut self, current: Point) {
        let mut nbuf = std::mem::take(&mut self.engine.nbuf);
        nbuf.clear();
        self.engine.grid().unvisited_neighbors(current, &mut nbuf);

        for &nb in nbuf.iter() {
            if self.engine.grid().state(nb) == CellState::Wall {
                continue;
            }
            self.engine.step_delay();

            self.engine.grid().set_visited(nb, true);
            self.engine.came_from.insert(nb, current);
            self.stack.push(nb);
            self.engine.set_open(nb);
        }

        self.engine.nbuf = nbuf;
    }

    fn execute(&mut self) -> bool {
        self.seed_open_set();

        while let Some(current) = self.stack.pop() {
            self.engine.check_abort();

            if current == self.engine.end() {
                self.engine.complete_path();
                return true;
            }

            self.relax_neighbors(current);
            self.engine.redraw();
            self.engine.finalize_visited(current);
        }
        false
    }

    fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}
