//! The shared search engine: per-run state and the helpers every strategy
//! uses (pacing, path reconstruction, bomb segments, finalization).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use mazepath_core::{CellState, Grid, Point};

/// Sentinel meaning "unreached" in the weighted strategies' cost maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

/// Redraw callback invoked after each visualization step.
///
/// Cheap to clone; every clone invokes the same closure, so both legs of a
/// bomb search (and the final paint pass) share one hook.
#[derive(Clone)]
pub struct DrawHook(Rc<RefCell<dyn FnMut()>>);

impl DrawHook {
    /// Wrap a closure. The closure typically reads a shared [`Grid`] view
    /// and repaints it.
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self(Rc::new(RefCell::new(f)))
    }

    /// A hook that does nothing, for silent runs.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    fn call(&self) {
        (self.0.borrow_mut())();
    }
}

/// External abort signal, polled once per dequeued cell.
#[derive(Clone)]
pub struct AbortHook(Rc<dyn Fn() -> bool>);

impl AbortHook {
    pub fn new(f: impl Fn() -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    fn signaled(&self) -> bool {
        (self.0)()
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Per-run state shared by all strategies.
///
/// Constructed fresh for every `execute()` call; nothing leaks between
/// independent runs. The two legs of a bomb search use two engines, and
/// only their accumulated [`bomb_path`](SearchEngine::bomb_path) lists are
/// concatenated externally.
pub struct SearchEngine {
    pub(crate) draw: DrawHook,
    pub(crate) grid: Grid,
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) speed_ms: u64,
    pub(crate) auto_compute: bool,
    pub(crate) came_from: HashMap<Point, Point>,
    pub(crate) bomb_path: Vec<Point>,
    pub(crate) abort: Option<AbortHook>,
    /// Scratch buffer for neighbor queries, reused across expansions.
    pub(crate) nbuf: Vec<Point>,
}

impl SearchEngine {
    /// Create a fresh engine for one run.
    ///
    /// `auto_compute` suppresses both the step delay and the per-step
    /// redraw: the algorithm still computes identically, only silently.
    pub fn new(
        draw: DrawHook,
        grid: Grid,
        start: Point,
        end: Point,
        speed_ms: u64,
        auto_compute: bool,
    ) -> Self {
        Self {
            draw,
            grid,
            start,
            end,
            speed_ms,
            auto_compute,
            came_from: HashMap::new(),
            bomb_path: Vec::new(),
            abort: None,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Install an external abort signal, polled once per dequeue.
    pub fn with_abort(mut self, hook: AbortHook) -> Self {
        self.abort = Some(hook);
        self
    }

    /// The grid view this run mutates.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// This run's start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// This run's end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cells accumulated by [`record_bomb_segment`](Self::record_bomb_segment),
    /// in backward (end-to-start) order.
    #[inline]
    pub fn bomb_path(&self) -> &[Point] {
        &self.bomb_path
    }

    /// Flat index of `p`, for the strategies' cost arrays.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        debug_assert!(self.grid.contains(p), "point {p} outside grid");
        (p.y * self.grid.width() + p.x) as usize
    }

    /// Number of cells in the grid.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.grid.bounds().len()
    }

    // -----------------------------------------------------------------------
    // Pacing and cancellation
    // -----------------------------------------------------------------------

    /// Blocking pause between visualization steps. A no-op in
    /// auto-compute mode; never affects algorithm state.
    pub fn step_delay(&self) {
        if !self.auto_compute && self.speed_ms > 0 {
            thread::sleep(Duration::from_millis(self.speed_ms));
        }
    }

    /// Invoke the redraw callback, unless in auto-compute mode.
    pub fn redraw(&self) {
        if !self.auto_compute {
            self.draw.call();
        }
    }

    /// Poll the abort signal; terminates the process on observation.
    ///
    /// There is no partial-result delivery: the host is shutting down, so
    /// no cleanup of half-mutated grid state is attempted.
    pub fn check_abort(&self) {
        if let Some(hook) = &self.abort {
            if hook.signaled() {
                log::debug!("abort signal observed mid-run, exiting");
                std::process::exit(0);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Cell marking
    // -----------------------------------------------------------------------

    /// Whether the cell at `p` is the bomb waypoint. The state tag is the
    /// single source of truth here.
    #[inline]
    pub fn is_bomb(&self, p: Point) -> bool {
        self.grid.state(p) == CellState::Bomb
    }

    /// Mark a discovered cell as part of the open set. Placement markers
    /// (`Start`, `End`, `Bomb`) are never overwritten: the second leg of a
    /// bomb search rediscovers the global start cell, and it must still
    /// read as `Start` when the combined path is painted.
    pub fn set_open(&self, p: Point) {
        if p == self.end {
            return;
        }
        match self.grid.state(p) {
            CellState::Start | CellState::End | CellState::Bomb => {}
            _ => self.grid.set_state(p, CellState::Open),
        }
    }

    /// Mark a fully-expanded cell as closed.
    ///
    /// The run's own start cell is left alone and the end marker is never
    /// overwritten. When this run's start is the bomb (the bomb-to-end
    /// leg), cells are marked `BombClosed` instead so the two legs stay
    /// visually distinguishable.
    pub fn finalize_visited(&self, p: Point) {
        if p == self.start || self.grid.state(p) == CellState::End {
            return;
        }
        if self.is_bomb(self.start) {
            if self.grid.state(p) != CellState::Start {
                self.grid.set_state(p, CellState::BombClosed);
            }
        } else {
            self.grid.set_state(p, CellState::Closed);
        }
    }

    // -----------------------------------------------------------------------
    // Path reconstruction
    // -----------------------------------------------------------------------

    /// Walk predecessors backward from the run's end, painting each
    /// walked-to cell `Path` with per-cell pacing so the path animates.
    ///
    /// The walk stops at the first cell without a predecessor, which is
    /// the start cell — it does get painted here, so callers repaint the
    /// start marker afterwards ([`complete_path`](Self::complete_path)
    /// does). The end cell itself is never painted.
    pub fn reconstruct_path(&self) {
        let mut current = self.end;
        while let Some(&prev) = self.came_from.get(&current) {
            current = prev;
            self.grid.set_state(current, CellState::Path);
            if !self.auto_compute {
                self.step_delay();
                self.draw.call();
            }
        }
    }

    /// Same backward walk as [`reconstruct_path`](Self::reconstruct_path),
    /// but appends the predecessors to the running bomb path instead of
    /// painting. Used when a waypoint splits the search into two legs.
    pub fn record_bomb_segment(&mut self, mut current: Point) {
        while let Some(&prev) = self.came_from.get(&current) {
            current = prev;
            self.bomb_path.push(current);
        }
    }

    /// Paint a combined two-leg path. Start, end and bomb markers are
    /// skipped so they stay visible.
    pub fn paint_bomb_path(&self, full_path: &[Point]) {
        for &p in full_path {
            match self.grid.state(p) {
                CellState::Start | CellState::End | CellState::Bomb => {}
                _ => {
                    self.grid.set_state(p, CellState::Path);
                    if !self.auto_compute {
                        self.step_delay();
                        self.draw.call();
                    }
                }
            }
        }
    }

    /// Finish a successful run: record a bomb segment if either endpoint
    /// of *this run* is the bomb, else reconstruct and repaint the start
    /// marker the reconstruction walked over.
    pub fn complete_path(&mut self) {
        if self.is_bomb(self.start) || self.is_bomb(self.end) {
            self.record_bomb_segment(self.end);
        } else {
            self.reconstruct_path();
            self.grid.set_state(self.start, CellState::Start);
        }
    }
}

// ---------------------------------------------------------------------------
// Open-set entry for the heap strategies
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(key, seq)`, reversed so `BinaryHeap` (a
/// max-heap) pops the smallest key first, FIFO among equal keys.
///
/// The monotonically increasing `seq` is what keeps equal-priority pops
/// deterministic — A* in particular depends on FIFO order among equal
/// f-scores for reproducible paths.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenItem {
    pub(crate) key: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl Ord for OpenItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
