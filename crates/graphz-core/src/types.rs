use std::fmt;

use serde::{Deserialize, Serialize};

/// Visitation status of a vertex.
///
/// Traversals give the variants their meaning: BFS, DFS and component repair
/// use `Unvisited -> InProgress -> Done`, the bipartite check uses
/// `Unvisited -> MarkA | MarkB` and flags the first clash with `Conflict`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// Not yet discovered.
    #[default]
    Unvisited,
    /// Discovered, neighbours still being examined.
    InProgress,
    /// Fully explored.
    Done,
    /// First side of a two-colouring.
    MarkA,
    /// Second side of a two-colouring.
    MarkB,
    /// Vertex whose mark clashes with a neighbour.
    Conflict,
}

impl Color {
    /// Returns the other side of a two-colouring, or `None` for non-mark colours.
    pub fn opposite_mark(self) -> Option<Color> {
        match self {
            Color::MarkA => Some(Color::MarkB),
            Color::MarkB => Some(Color::MarkA),
            _ => None,
        }
    }

    /// Returns `true` for [`Color::MarkA`] and [`Color::MarkB`].
    pub fn is_mark(self) -> bool {
        self.opposite_mark().is_some()
    }

    /// Stable lower-case label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Color::Unvisited => "unvisited",
            Color::InProgress => "in-progress",
            Color::Done => "done",
            Color::MarkA => "mark-a",
            Color::MarkB => "mark-b",
            Color::Conflict => "conflict",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Caller-owned screen coordinate of a vertex. The core never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Creates a position from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
