/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit vector (dx, dy) for this direction. y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Two directions are opposite when their vectors cancel out
    pub fn is_opposite(self, other: Direction) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax + bx == 0 && ay + by == 0
    }
}

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Top-left pixel corner of this cell
    pub fn origin(self, cell_size: f32) -> (f32, f32) {
        (self.x as f32 * cell_size, self.y as f32 * cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(10, 10);
        assert_eq!(cell.step(Direction::Right), Cell::new(11, 10));
        assert_eq!(cell.step(Direction::Left), Cell::new(9, 10));
        assert_eq!(cell.step(Direction::Up), Cell::new(10, 9));
        assert_eq!(cell.step(Direction::Down), Cell::new(10, 11));
    }

    #[test]
    fn test_cell_origin() {
        assert_eq!(Cell::new(3, 2).origin(20.0), (60.0, 40.0));
    }
}
