//! Breadth-first search — unweighted, shortest path guaranteed.

use std::collections::VecDeque;

use mazepath_core::{CellState, Point};

use crate::engine::SearchEngine;
use crate::traits::Strategy;

/// FIFO exploration over the visited ledger.
///
/// Cells are marked visited at discovery time, not at dequeue time, so
/// the same cell is never requeued. That ordering is what makes the first
/// arrival at any cell also the shortest, and it must not be changed to
/// finalization-time marking.
pub struct BreadthFirst {
    engine: SearchEngine,
    queue: VecDeque<Point>,
}

impl BreadthFirst {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            queue: VecDeque::new(),
        }
    }
}

impl Strategy for BreadthFirst {
    fn seed_open_set(&mut self) {
        let start = self.engine.start();
        self.engine.grid().set_visited(start, true);
        self.queue.push_back(start);
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
            self.queue.push_back(nb);
            self.engine.set_open(nb);
        }

        self.engine.nbuf = nbuf;
    }

    fn execute(&mut self) -> bool {
        self.seed_open_set();

        while let Some(current) = self.queue.pop_front() {
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
