//! The [`Cell`] type — one grid square with a state tag and a visited flag.

/// The mutually-exclusive visual/traversal state of a cell.
///
/// Placement states (`Start`, `End`, `Wall`, `Bomb`) are set by the
/// orchestrator; traversal states (`Open`, `Closed`, `BombClosed`, `Path`)
/// are painted by the running search strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Untouched square.
    #[default]
    Empty,
    /// Search origin.
    Start,
    /// Search target.
    End,
    /// Blocking square; never traversed.
    Wall,
    /// Mandatory waypoint. The only state rendered with a glyph rather
    /// than a plain fill, so it is never ambiguous with any other state.
    Bomb,
    /// In the open set (discovered, not yet finalized).
    Open,
    /// Finalized by the search.
    Closed,
    /// Finalized during the bomb-to-end leg of a waypoint search.
    BombClosed,
    /// On the reconstructed path.
    Path,
}

impl CellState {
    /// Presentation hint for renderers. Only the bomb carries a glyph;
    /// every other state is a plain fill.
    pub const fn glyph(self) -> Option<char> {
        match self {
            CellState::Bomb => Some('💣'),
            _ => None,
        }
    }
}

/// One grid square.
///
/// The `visited` ledger is separate from the state tag: the unweighted
/// strategies (Greedy/BFS/DFS) mark it the instant a cell is discovered,
/// while the weighted ones (Dijkstra/A*) never touch it and instead allow
/// repeated relaxation until a cell is finalized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub state: CellState,
    pub visited: bool,
}

impl Cell {
    /// Create a cell in the given state, unvisited.
    #[inline]
    pub const fn new(state: CellState) -> Self {
        Self {
            state,
            visited: false,
        }
    }

    /// Return the cell to `Empty`/unvisited, whatever it held before.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self.state, CellState::Wall)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self.state, CellState::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self.state, CellState::End)
    }

    #[inline]
    pub const fn is_bomb(self) -> bool {
        matches!(self.state, CellState::Bomb)
    }

    /// Whether the state was painted by a search run (as opposed to being
    /// placed by the user or empty).
    #[inline]
    pub const fn is_search_marking(self) -> bool {
        matches!(
            self.state,
            CellState::Open | CellState::Closed | CellState::BombClosed | CellState::Path
        )
    }
}
