//! The bomb (waypoint) two-leg search.

use mazepath_core::{Grid, Point};

use crate::engine::{DrawHook, SearchEngine};
use crate::traits::Algorithm;

/// Run `algorithm` through a mandatory waypoint: start → bomb, then
/// bomb → end, as two sequential sub-searches over fresh engines.
///
/// The legs are never concurrent — the second depends on the visited
/// ledger being cleared after the first completes. Each leg records its
/// own backward-accumulated segment; the segments are concatenated
/// end-leg first and painted once as a single corridor.
///
/// Returns `true` iff both legs succeeded.
pub fn run_with_bomb(
    algorithm: Algorithm,
    draw: DrawHook,
    grid: Grid,
    start: Point,
    bomb: Point,
    end: Point,
    speed_ms: u64,
    auto_compute: bool,
) -> bool {
    let mut first = algorithm.strategy(SearchEngine::new(
        draw.clone(),
        grid.clone(),
        start,
        bomb,
        speed_ms,
        auto_compute,
    ));
    if !first.execute() {
        log::debug!("{algorithm}: start leg exhausted before the bomb");
        return false;
    }

    // Second leg needs a clean ledger; the first leg's markings stay.
    grid.clear_visited();

    let mut second = algorithm.strategy(SearchEngine::new(
        draw.clone(),
        grid.clone(),
        bomb,
        end,
        speed_ms,
        auto_compute,
    ));
    if !second.execute() {
        log::debug!("{algorithm}: bomb leg exhausted before the end");
        return false;
    }

    // Both segments were recorded backward, so end-leg first yields one
    // chain from the end all the way back to the start.
    let mut full_path = second.engine().bomb_path().to_vec();
    full_path.extend_from_slice(first.engine().bomb_path());

    let painter = SearchEngine::new(draw, grid, start, end, speed_ms, auto_compute);
    painter.paint_bomb_path(&full_path);
    true
}
