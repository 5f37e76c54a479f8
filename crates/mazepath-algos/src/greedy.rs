//! Greedy best-first search — heuristic only, shortest path NOT guaranteed.

use std::collections::BinaryHeap;

use mazepath_core::{CellState, Point};

use crate::distance::manhattan;
use crate::engine::{OpenItem, SearchEngine};
use crate::traits::Strategy;

/// Best-first search keyed purely by the Manhattan estimate to the end,
/// ignoring accumulated cost. Cells are marked visited the moment they
/// are pushed and never reconsidered, so obstacles that mislead the
/// heuristic can produce a longer-than-optimal path. That is the point of
/// this strategy, not a defect.
pub struct GreedyBestFirst {
    engine: SearchEngine,
    open: BinaryHeap<OpenItem>,
    seq: u64,
}

impl GreedyBestFirst {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            open: BinaryHeap::new(),
            seq: 0,
        }
    }

    fn push(&mut self, key: i32, pos: Point) {
        self.open.push(OpenItem {
            key,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }
}

impl Strategy for GreedyBestFirst {
    fn seed_open_set(&mut self) {
        let start = self.engine.start();
        let end = self.engine.end();
        let h = manhattan(start, end);
        self.push(h, start);
    }

    fn relax_neighbors(&mut self, current: Point) {
        let end = self.engine.end();
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
            let h = manhattan(nb, end);
            self.push(h, nb);
            self.engine.set_open(nb);
        }

        self.engine.nbuf = nbuf;
    }

    fn execute(&mut self) -> bool {
        self.seed_open_set();

        while let Some(item) = self.open.pop() {
            self.engine.check_abort();
            let current = item.pos;
            self.engine.grid().set_visited(current, true);

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
