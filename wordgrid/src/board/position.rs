use std::ops::{Add, Sub};

/// The coordinates of a cell in the board's unbounded grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Horizontal position of the cell. Increases rightward.
    pub x: i32,
    /// Vertical position of the cell. Increases downward.
    pub y: i32,
}

impl Position {
    /// Unit step along the horizontal axis.
    pub const RIGHT: Position = Position { x: 1, y: 0 };
    /// Unit step along the vertical axis.
    pub const DOWN: Position = Position { x: 0, y: 1 };

    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}
