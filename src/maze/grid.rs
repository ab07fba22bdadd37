use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::GenerationError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<Vec2> for Position {
    fn from(point: Vec2) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
        }
    }
}

/// The four axis-aligned headings a corridor can run in. There is deliberately
/// no way to reverse a heading: the carver only ever continues straight or
/// turns 90 degrees, and retreats by popping its stack instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn perpendicular_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn perpendicular_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// A rectangular field of cells stored as a flat row-major buffer. Everything
/// outside the bounds classifies as `Wall`, so callers never special-case the
/// perimeter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GenerationError> {
        if width <= 0 || height <= 0 {
            return Err(GenerationError::InvalidArgument { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Wall; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            Cell::Wall
        } else {
            self.cells[y as usize * self.width as usize + x as usize]
        }
    }

    pub fn cell_at_position(&self, position: Position) -> Cell {
        self.cell_at(position.x, position.y)
    }

    // Only the carver writes cells; the grid is read-only once carved.
    // Callers keep `position` in bounds.
    pub(crate) fn set_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.y as usize * self.width as usize + position.x as usize] = cell;
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(4, 3).unwrap();

        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(grid.cell_at(x, y), Cell::Wall);
            }
        }
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GenerationError::InvalidArgument { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::new(5, -1),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn out_of_bounds_classifies_as_wall() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_cell(Position::new(0, 0), Cell::Empty);

        assert_eq!(grid.cell_at(-1, 0), Cell::Wall);
        assert_eq!(grid.cell_at(0, -1), Cell::Wall);
        assert_eq!(grid.cell_at(2, 0), Cell::Wall);
        assert_eq!(grid.cell_at(0, 2), Cell::Wall);
        assert_eq!(grid.cell_at(i32::MIN, i32::MAX), Cell::Wall);
        assert_eq!(grid.cell_at(0, 0), Cell::Empty);
    }

    #[test]
    fn cell_counts_past_i32_max_still_allocate_and_index() {
        // 65536 * 32768 cells: a valid size whose product does not fit in i32.
        let grid = Grid::new(65_536, 32_768).unwrap();

        assert_eq!(grid.width(), 65_536);
        assert_eq!(grid.height(), 32_768);
        assert_eq!(grid.cell_at(0, 0), Cell::Wall);
        assert_eq!(grid.cell_at(65_535, 32_767), Cell::Wall);
    }

    #[test]
    fn set_cell_round_trips() {
        let mut grid = Grid::new(3, 3).unwrap();
        let position = Position::new(2, 1);

        grid.set_cell(position, Cell::Empty);
        assert_eq!(grid.cell_at_position(position), Cell::Empty);

        grid.set_cell(position, Cell::Wall);
        assert_eq!(grid.cell_at_position(position), Cell::Wall);
    }

    #[test]
    fn continuous_points_floor_onto_positions() {
        assert_eq!(Position::from(Vec2::new(0.0, 0.0)), Position::new(0, 0));
        assert_eq!(Position::from(Vec2::new(1.9, 2.1)), Position::new(1, 2));
        assert_eq!(Position::from(Vec2::new(-0.5, 1.7)), Position::new(-1, 1));
    }

    #[test]
    fn perpendiculars_never_reverse_or_repeat_the_heading() {
        for direction in Direction::iter() {
            let left = direction.perpendicular_left();
            let right = direction.perpendicular_right();

            assert_ne!(left, direction);
            assert_ne!(right, direction);
            assert_ne!(left, right);

            let (dx, dy) = direction.delta();
            let (lx, ly) = left.delta();
            assert_eq!(dx * lx + dy * ly, 0, "left turn should be perpendicular");
        }
    }

    #[test]
    fn turning_left_then_right_restores_the_heading() {
        for direction in Direction::iter() {
            assert_eq!(
                direction.perpendicular_left().perpendicular_right(),
                direction
            );
            // Two turns the same way are the reverse, whichever way you turn.
            assert_eq!(
                direction.perpendicular_left().perpendicular_left(),
                direction.perpendicular_right().perpendicular_right()
            );
        }
    }
}
