//! A* search — weighted, heuristic-guided, shortest path guaranteed.

use std::collections::{BinaryHeap, HashSet};

use mazepath_core::{CellState, Point};

use crate::distance::manhattan;
use crate::engine::{OpenItem, SearchEngine, UNREACHABLE};
use crate::traits::Strategy;

/// Best-first search keyed by `f = g + h`, where `g` is the cost from the
/// start and `h` the Manhattan estimate to the end.
///
/// Ties on `f` are broken by insertion order (the heap's monotonic
/// sequence counter), so equal-priority cells pop FIFO and the output is
/// reproducible. A membership ledger prevents pushing a cell that is
/// already enqueued.
pub struct AStar {
    engine: SearchEngine,
    open: BinaryHeap<OpenItem>,
    in_open: HashSet<Point>,
    g_score: Vec<i32>,
    f_score: Vec<i32>,
    seq: u64,
}

impl AStar {
    pub fn new(engine: SearchEngine) -> Self {
        let len = engine.len();
        Self {
            engine,
            open: BinaryHeap::new(),
            in_open: HashSet::new(),
            g_score: vec![UNREACHABLE; len],
            f_score: vec![UNREACHABLE; len],
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
        self.in_open.insert(pos);
    }
}

impl Strategy for AStar {
    fn seed_open_set(&mut self) {
        let start = self.engine.start();
        let end = self.engine.end();
        let si = self.engine.idx(start);
        self.g_score[si] = 0;
        self.f_score[si] = manhattan(start, end);
        let f = self.f_score[si];
        self.push(f, start);
    }

    fn relax_neighbors(&mut self, current: Point) {
        let end = self.engine.end();
        let base = self.g_score[self.engine.idx(current)];
        let mut nbuf = std::mem::take(&mut self.engine.nbuf);
        nbuf.clear();
        self.engine.grid().neighbors(current, &mut nbuf);

        for &nb in nbuf.iter() {
            if self.engine.grid().state(nb) == CellState::Wall {
                continue;
            }
            self.engine.step_delay();

            let tentative_g = base + 1;
            let ni = self.engine.idx(nb);
            if tentative_g < self.g_score[ni] {
                self.engine.came_from.insert(nb, current);
                self.g_score[ni] = tentative_g;
                self.f_score[ni] = tentative_g + manhattan(nb, end);

                if !self.in_open.contains(&nb) {
                    let f = self.f_score[ni];
                    self.push(f, nb);
                    self.engine.set_open(nb);
                }
            }
        }

        self.engine.nbuf = nbuf;
    }

    fn execute(&mut self) -> bool {
        self.seed_open_set();

        while let Some(item) = self.open.pop() {
            self.engine.check_abort();
            let current = item.pos;
            self.in_open.remove(&current);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::Dijkstra;
    use crate::engine::DrawHook;
    use mazepath_core::{Cell, Grid};

    fn marked(g: &Grid) -> usize {
        g.iter()
            .filter(|(_, c)| c.is_search_marking())
            .count()
    }

    fn walled_grid() -> (Grid, Point, Point) {
        let g = Grid::new(6, 6, 16);
        let start = Point::new(0, 0);
        let end = Point::new(5, 5);
        g.set_state(start, CellState::Start);
        g.set_state(end, CellState::End);
        for y in 1..5 {
            g.set_state(Point::new(3, y), CellState::Wall);
        }
        (g, start, end)
    }

    #[test]
    fn shortest_path_matches_dijkstra() {
        let (g1, start, end) = walled_grid();
        let engine = SearchEngine::new(DrawHook::noop(), g1.clone(), start, end, 0, true);
        assert!(AStar::new(engine).execute());

        let (g2, start, end) = walled_grid();
        let engine = SearchEngine::new(DrawHook::noop(), g2.clone(), start, end, 0, true);
        assert!(Dijkstra::new(engine).execute());

        assert_eq!(g1.count(CellState::Path), g2.count(CellState::Path));
    }

    #[test]
    fn visits_no_more_cells_than_dijkstra() {
        let g1 = Grid::new(5, 5, 16);
        g1.set_state(Point::new(0, 0), CellState::Start);
        g1.set_state(Point::new(4, 4), CellState::End);
        let engine =
            SearchEngine::new(DrawHook::noop(), g1.clone(), Point::new(0, 0), Point::new(4, 4), 0, true);
        assert!(AStar::new(engine).execute());

        let g2 = Grid::new(5, 5, 16);
        g2.set_state(Point::new(0, 0), CellState::Start);
        g2.set_state(Point::new(4, 4), CellState::End);
        let engine =
            SearchEngine::new(DrawHook::noop(), g2.clone(), Point::new(0, 0), Point::new(4, 4), 0, true);
        assert!(Dijkstra::new(engine).execute());

        assert!(marked(&g1) <= marked(&g2));
    }

    #[test]
    fn deterministic_across_runs() {
        // FIFO tie-breaking keeps the traversal reproducible.
        let snapshot = |g: &Grid| -> Vec<(Point, Cell)> { g.iter().collect() };

        let (g1, start, end) = walled_grid();
        let engine = SearchEngine::new(DrawHook::noop(), g1.clone(), start, end, 0, true);
        assert!(AStar::new(engine).execute());

        let (g2, start, end) = walled_grid();
        let engine = SearchEngine::new(DrawHook::noop(), g2.clone(), start, end, 0, true);
        assert!(AStar::new(engine).execute());

        assert_eq!(snapshot(&g1), snapshot(&g2));
    }

    #[test]
    fn unreachable_end_returns_false() {
        let g = Grid::new(4, 4, 16);
        let start = Point::new(0, 0);
        let end = Point::new(3, 3);
        g.set_state(start, CellState::Start);
        g.set_state(end, CellState::End);
        g.set_state(Point::new(2, 3), CellState::Wall);
        g.set_state(Point::new(3, 2), CellState::Wall);

        let engine = SearchEngine::new(DrawHook::noop(), g.clone(), start, end, 0, true);
        assert!(!AStar::new(engine).execute());
    }
}
