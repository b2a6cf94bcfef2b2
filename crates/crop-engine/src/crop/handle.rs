//! Crop handles and the edges they move

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Vec2};

/// Interactive region of the crop rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    /// Rectangle interior, moves without resizing
    Center,
}

/// Set of rectangle edges a handle moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Edges {
    const fn of(left: bool, top: bool, right: bool, bottom: bool) -> Self {
        Self { left, top, right, bottom }
    }
}

/// Edges moved by each handle, indexed by [`Handle::index`]
const HANDLE_EDGES: [Edges; 9] = [
    Edges::of(true, true, false, false),  // TopLeft
    Edges::of(false, true, true, false),  // TopRight
    Edges::of(true, false, false, true),  // BottomLeft
    Edges::of(false, false, true, true),  // BottomRight
    Edges::of(false, true, false, false), // Top
    Edges::of(false, false, false, true), // Bottom
    Edges::of(true, false, false, false), // Left
    Edges::of(false, false, true, false), // Right
    Edges::of(true, true, true, true),    // Center
];

impl Handle {
    /// Resize handles in hit-test priority order: corners, then edge midpoints
    pub const RESIZE_HANDLES: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Handle::TopLeft => 0,
            Handle::TopRight => 1,
            Handle::BottomLeft => 2,
            Handle::BottomRight => 3,
            Handle::Top => 4,
            Handle::Bottom => 5,
            Handle::Left => 6,
            Handle::Right => 7,
            Handle::Center => 8,
        }
    }

    /// Edges this handle moves
    #[inline]
    pub fn edges(self) -> Edges {
        HANDLE_EDGES[self.index()]
    }

    /// Check if this handle resizes (everything except [`Handle::Center`])
    #[inline]
    pub fn is_resize(self) -> bool {
        self != Handle::Center
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::TopLeft | Handle::TopRight | Handle::BottomLeft | Handle::BottomRight
        )
    }

    /// Where the handle glyph sits on `rect`
    ///
    /// Uses the edge table: an axis whose edges are both or neither moved
    /// anchors at the midpoint.
    pub fn anchor(self, rect: &Rect) -> Vec2 {
        let edges = self.edges();
        let center = rect.center();
        let x = match (edges.left, edges.right) {
            (true, false) => rect.left,
            (false, true) => rect.right,
            _ => center.x,
        };
        let y = match (edges.top, edges.bottom) {
            (true, false) => rect.top,
            (false, true) => rect.bottom,
            _ => center.y,
        };
        Vec2::new(x, y)
    }

    /// CSS cursor name for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::Center => "move",
            Handle::Top | Handle::Bottom => "ns-resize",
            Handle::Left | Handle::Right => "ew-resize",
            Handle::TopRight | Handle::BottomLeft => "nesw-resize",
            Handle::TopLeft | Handle::BottomRight => "nwse-resize",
        }
    }
}
