//! Dijkstra's algorithm — weighted, shortest path guaranteed.

use std::collections::BinaryHeap;

use mazepath_core::{CellState, Point};

use crate::engine::{OpenItem, SearchEngine, UNREACHABLE};
use crate::traits::Strategy;

/// Uniform-cost search over a min-heap keyed by cumulative distance.
///
/// Stale heap entries (whose popped distance exceeds the recorded best)
/// are skipped rather than reprocessed.
pub struct Dijkstra {
    engine: SearchEngine,
    open: BinaryHeap<OpenItem>,
    dist: Vec<i32>,
    seq: u64,
}

impl Dijkstra {
    pub fn new(engine: SearchEngine) -> Self {
        let len = engine.len();
        Self {
            engine,
            open: BinaryHeap::new(),
            dist: vec![UNREACHABLE; len],
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

impl Strategy for Dijkstra {
    fn seed_open_set(&mut self) {
        let start = self.engine.start();
        let si = self.engine.idx(start);
        self.dist[si] = 0;
        self.push(0, start);
    }

    fn relax_neighbors(&mut self, current: Point) {
        let base = self.dist[self.engine.idx(current)];
        let mut nbuf = std::mem::take(&mut self.engine.nbuf);
        nbuf.clear();
        self.engine.grid().neighbors(current, &mut nbuf);

        for &nb in nbuf.iter() {
            if self.engine.grid().state(nb) == CellState::Wall {
                continue;
            }
            self.engine.step_delay();

            let nd = base + 1;
            let ni = self.engine.idx(nb);
            if nd < self.dist[ni] {
                self.engine.came_from.insert(nb, current);
                self.dist[ni] = nd;
                self.push(nd, nb);
                self.engine.set_open(nb);
            }
        }

        self.engine.nbuf = nbuf;
    }

    fn execute(&mut self) -> bool {
        self.seed_open_set();

        while let Some(item) = self.open.pop() {
            self.engine.check_abort();
            let current = item.pos;

            if current == self.engine.end() {
                self.engine.complete_path();
                return true;
            }

            // A shorter distance was recorded after this entry was pushed.
            if item.key > self.dist[self.engine.idx(current)] {
                continue;
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
