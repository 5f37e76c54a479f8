//! Distance heuristics.

use mazepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-directional uniform-cost grid this never overestimates the true
/// step count, which is what makes it an admissible heuristic for A* and
/// a sound guide for greedy best-first search.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
