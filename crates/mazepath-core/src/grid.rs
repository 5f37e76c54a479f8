//! The [`Grid`] type — a 2D grid of [`Cell`]s with shared-buffer semantics.
//!
//! A `Grid` is a *view* onto shared backing storage: cloning yields another
//! view of the **same** cells. This is what lets a redraw callback observe
//! the in-place mutations a running search strategy makes, without the two
//! holding references into each other.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::{Cell, CellState};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Cell>,
    width: usize,
}

impl GridBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * self.width + (p.x as usize)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Cell`]s behind shared storage.
///
/// Dimensions are fixed at construction. [`clear`](Grid::clear) rebuilds
/// the whole buffer rather than resetting cells one by one.
#[derive(Debug, Clone)]
pub struct Grid {
    buffer: Rc<RefCell<GridBuffer>>,
    bounds: Range,
    cell_size: i32,
}

impl Grid {
    /// Create a new grid of the given dimensions, all cells empty.
    ///
    /// `cell_size` is the square side length in pixels, kept only for
    /// geometry mapping via [`cell_rect`](Grid::cell_rect); it has no
    /// effect on traversal.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer::new(w as usize, h as usize))),
            bounds: Range::new(0, 0, w, h),
            cell_size,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Pixel rectangle `(x, y, side)` of the cell at `p`, for renderers.
    #[inline]
    pub fn cell_rect(&self, p: Point) -> (i32, i32, i32) {
        (p.x * self.cell_size, p.y * self.cell_size, self.cell_size)
    }

    /// Read the cell at `p`. Returns `None` if `p` is out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        let buf = self.buffer.borrow();
        let i = buf.index(p);
        Some(buf.cells[i])
    }

    /// State tag at `p`. Out-of-bounds reads as `Empty`.
    #[inline]
    pub fn state(&self, p: Point) -> CellState {
        self.at(p).map(|c| c.state).unwrap_or_default()
    }

    /// Set the state tag at `p`. No-op if out of bounds.
    pub fn set_state(&self, p: Point, state: CellState) {
        if !self.bounds.contains(p) {
            return;
        }
        let mut buf = self.buffer.borrow_mut();
        let i = buf.index(p);
        buf.cells[i].state = state;
    }

    /// Set the visited ledger flag at `p`. No-op if out of bounds.
    pub fn set_visited(&self, p: Point, visited: bool) {
        if !self.bounds.contains(p) {
            return;
        }
        let mut buf = self.buffer.borrow_mut();
        let i = buf.index(p);
        buf.cells[i].visited = visited;
    }

    /// Whether the visited ledger flag is set at `p`.
    pub fn visited(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.visited)
    }

    /// Return the cell at `p` to `Empty`/unvisited. No-op if out of bounds.
    pub fn reset(&self, p: Point) {
        if !self.bounds.contains(p) {
            return;
        }
        let mut buf = self.buffer.borrow_mut();
        let i = buf.index(p);
        buf.cells[i].reset();
    }

    // -----------------------------------------------------------------------
    // Neighbor enumeration
    // -----------------------------------------------------------------------

    /// Append the up-to-4 cardinal neighbors of `p` into `buf`,
    /// grid-edge clipped, **regardless of wall or visited state**.
    ///
    /// Used by the weighted strategies, which filter walls during
    /// relaxation rather than during adjacency computation. The caller
    /// clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Append the cardinal neighbors of `p` whose visited flag is unset.
    ///
    /// Used by the unweighted strategies, which mark `visited` the moment
    /// a cell is discovered, so the same cell is never requeued.
    pub fn unvisited_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let inner = self.buffer.borrow();
        for n in p.neighbors_4() {
            if self.bounds.contains(n) && !inner.cells[inner.index(n)].visited {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Bulk operations
    // -----------------------------------------------------------------------

    /// Discard every cell and allocate a fresh all-empty buffer.
    ///
    /// This is a wholesale rebuild, not a per-cell reset; existing views
    /// of this grid all observe the new buffer.
    pub fn clear(&self) {
        let mut buf = self.buffer.borrow_mut();
        let w = buf.width;
        let h = if w == 0 { 0 } else { buf.cells.len() / w };
        *buf = GridBuffer::new(w, h);
    }

    /// Reset every cell to `Empty`/unvisited, in place.
    pub fn reset_all(&self) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            c.reset();
        }
    }

    /// Reset only `Wall` cells back to `Empty`.
    pub fn clear_walls(&self) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            if c.is_wall() {
                c.reset();
            }
        }
    }

    /// Clear the visited ledger everywhere, leaving state tags alone.
    ///
    /// The bomb two-leg search runs this between legs: the second leg
    /// needs a clean ledger, while the first leg's closed markings stay
    /// visible.
    pub fn clear_visited(&self) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            c.visited = false;
        }
    }

    /// Erase the traces of a search run: every `Open`, `Closed`,
    /// `BombClosed` and `Path` marking returns to `Empty`, and the visited
    /// ledger is cleared everywhere. Placement states survive.
    ///
    /// This is the full reset run before starting a new search over the
    /// same placements; between bomb legs only
    /// [`clear_visited`](Grid::clear_visited) runs.
    pub fn clear_search(&self) {
        let mut buf = self.buffer.borrow_mut();
        for c in buf.cells.iter_mut() {
            if c.is_search_marking() {
                c.state = CellState::Empty;
            }
            c.visited = false;
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Count cells whose state equals `state`.
    pub fn count(&self, state: CellState) -> usize {
        let buf = self.buffer.borrow();
        buf.cells.iter().filter(|c| c.state == state).count()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.at(p)?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_at() {
        let g = Grid::new(4, 3, 16);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::default()));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, 3)), None);
    }

    #[test]
    fn set_state_and_shared_views() {
        let g = Grid::new(4, 3, 16);
        let view = g.clone();
        g.set_state(Point::new(2, 1), CellState::Wall);
        assert_eq!(view.state(Point::new(2, 1)), CellState::Wall);
    }

    #[test]
    fn cell_rect_maps_pixels() {
        let g = Grid::new(4, 3, 20);
        assert_eq!(g.cell_rect(Point::new(2, 1)), (40, 20, 20));
    }

    #[test]
    fn neighbors_clipped_at_edges() {
        let g = Grid::new(3, 3, 16);
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        buf.sort();
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);

        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
        for n in &buf {
            assert!(g.contains(*n));
        }
    }

    #[test]
    fn neighbors_ignore_walls() {
        // Walls are filtered during relaxation, not discovery.
        let g = Grid::new(3, 3, 16);
        g.set_state(Point::new(1, 0), CellState::Wall);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert!(buf.contains(&Point::new(1, 0)));
    }

    #[test]
    fn unvisited_neighbors_filter() {
        let g = Grid::new(3, 3, 16);
        g.set_visited(Point::new(1, 0), true);
        let mut buf = Vec::new();
        g.unvisited_neighbors(Point::new(1, 1), &mut buf);
        assert!(!buf.contains(&Point::new(1, 0)));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn clear_rebuilds_wholesale() {
        let g = Grid::new(4, 3, 16);
        g.set_state(Point::new(1, 1), CellState::Wall);
        g.set_visited(Point::new(2, 2), true);
        g.clear();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        for (_, c) in g.iter() {
            assert_eq!(c, Cell::default());
        }
    }

    #[test]
    fn reset_all_is_idempotent() {
        let g = Grid::new(4, 3, 16);
        g.set_state(Point::new(1, 1), CellState::Path);
        g.reset_all();
        let snapshot: Vec<_> = g.iter().collect();
        g.reset_all();
        let again: Vec<_> = g.iter().collect();
        assert_eq!(snapshot, again);
        assert!(again.iter().all(|(_, c)| *c == Cell::default()));
    }

    #[test]
    fn clear_walls_leaves_other_states() {
        let g = Grid::new(4, 3, 16);
        g.set_state(Point::new(0, 0), CellState::Start);
        g.set_state(Point::new(1, 0), CellState::Wall);
        g.set_state(Point::new(2, 0), CellState::Path);
        g.clear_walls();
        assert_eq!(g.state(Point::new(0, 0)), CellState::Start);
        assert_eq!(g.state(Point::new(1, 0)), CellState::Empty);
        assert_eq!(g.state(Point::new(2, 0)), CellState::Path);
    }

    #[test]
    fn clear_visited_leaves_states() {
        let g = Grid::new(4, 3, 16);
        g.set_state(Point::new(2, 0), CellState::Closed);
        g.set_visited(Point::new(2, 0), true);
        g.set_visited(Point::new(1, 1), true);
        g.clear_visited();
        assert_eq!(g.state(Point::new(2, 0)), CellState::Closed);
        assert!(!g.visited(Point::new(2, 0)));
        assert!(!g.visited(Point::new(1, 1)));
    }

    #[test]
    fn clear_search_keeps_placements() {
        let g = Grid::new(4, 3, 16);
        g.set_state(Point::new(0, 0), CellState::Start);
        g.set_state(Point::new(3, 2), CellState::End);
        g.set_state(Point::new(1, 0), CellState::Bomb);
        g.set_state(Point::new(2, 0), CellState::Closed);
        g.set_state(Point::new(2, 1), CellState::Open);
        g.set_state(Point::new(2, 2), CellState::Path);
        g.set_visited(Point::new(2, 0), true);
        g.clear_search();
        assert_eq!(g.state(Point::new(0, 0)), CellState::Start);
        assert_eq!(g.state(Point::new(3, 2)), CellState::End);
        assert_eq!(g.state(Point::new(1, 0)), CellState::Bomb);
        assert_eq!(g.state(Point::new(2, 0)), CellState::Empty);
        assert_eq!(g.state(Point::new(2, 1)), CellState::Empty);
        assert_eq!(g.state(Point::new(2, 2)), CellState::Empty);
        assert!(!g.visited(Point::new(2, 0)));
    }
}
