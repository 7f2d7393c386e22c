//! Geometry value types shared by the registry and the query engine.
//!
//! All coordinates live in the global desktop coordinate space: one 2-D
//! plane in which every output occupies an axis-aligned rectangle.
//! Origins are signed (outputs left of or above the primary output have
//! negative coordinates); dimensions are unsigned and always non-zero once
//! a rectangle has entered the registry.

/// A position in global desktop coordinates, typically the pointer location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: the usable pixel area of one output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels, > 0 inside the registry.
    pub width: u32,
    /// Height in pixels, > 0 inside the registry.
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns `true` if `position` lies within the rectangle, using
    /// half-open bounds on both axes: `x in [self.x, self.x + width)` and
    /// likewise for y.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.right()
            && position.y >= self.y
            && position.y < self.bottom()
    }
}

/// One of the four cardinal directions used by the navigation queries.
///
/// A closed enumeration: every directional function matches on it
/// exhaustively, so an unhandled direction is a compile-time error rather
/// than a runtime fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order useful for edge scans.
    pub const ALL: [Direction; 4] =
        [Direction::Top, Direction::Left, Direction::Bottom, Direction::Right];
}
