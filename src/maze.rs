mod carver;
mod grid;
mod placer;

use std::fmt;

use glam::Vec2;
use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};

pub use grid::{Cell, Direction, Grid, Position};

/// A fully generated maze: the carved grid plus the points of interest the
/// rest of the game reads once per session. Immutable after generation;
/// discarded and regenerated when a new session starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    start: Position,
    finish: Position,
    checkpoints: Vec<Position>,
    spaces: Vec<Position>,
}

/// Generates a maze: carve corridors into an all-wall grid, then place the
/// finish and `checkpoint_count` checkpoints on distinct empty cells.
///
/// The random source is threaded through carving and placement, so two calls
/// with equally seeded sources and equal parameters produce identical mazes.
pub fn generate_maze(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    checkpoint_count: usize,
) -> Result<Maze, GenerationError> {
    let mut grid = Grid::new(width, height)?;

    let start = carver::carve(&mut grid, rng);
    let (finish, checkpoints) = placer::place(&grid, start, checkpoint_count, rng)?;

    let mut spaces = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.cell_at(x, y) == Cell::Empty {
                spaces.push(Position::new(x, y));
            }
        }
    }

    Ok(Maze {
        grid,
        start,
        finish,
        checkpoints,
        spaces,
    })
}

impl Maze {
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn finish(&self) -> Position {
        self.finish
    }

    pub fn checkpoints(&self) -> &[Position] {
        &self.checkpoints
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        self.grid.cell_at(x, y)
    }

    /// Collision query for movement code: classifies the cell under a
    /// continuous point by flooring both coordinates. Outside the grid is
    /// wall, so a prospective position is walkable iff this returns `Empty`.
    pub fn cell_at_point(&self, point: Vec2) -> Cell {
        self.grid.cell_at_position(Position::from(point))
    }

    /// Every carved cell, in row-major order.
    pub fn empty_positions(&self) -> &[Position] {
        &self.spaces
    }

    /// A uniformly random carved cell. Ghosts respawn here when they drift out
    /// of the maze.
    pub fn random_empty_position(&self, rng: &mut impl Rng) -> Position {
        *self
            .spaces
            .choose(rng)
            .expect("a carved maze always has at least one empty cell")
    }
}

// Top row last: the grid's y axis points up, so row `height - 1` prints first.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let position = Position::new(x, y);
                let glyph = if position == self.start {
                    "S ".to_string()
                } else if position == self.finish {
                    "F ".to_string()
                } else if let Some(index) = self.checkpoints.iter().position(|&c| c == position) {
                    format!("{} ", index % 10)
                } else if self.grid.cell_at_position(position) == Cell::Empty {
                    "  ".to_string()
                } else {
                    "██".to_string()
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A maze needs at least one cell in each dimension.
    InvalidArgument { width: i32, height: i32 },
    /// The placement retry budget ran out: the maze has too few empty cells
    /// for the requested number of distinct objectives.
    Infeasible { attempts: u32 },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidArgument { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            GenerationError::Infeasible { attempts } => {
                write!(
                    f,
                    "could not place all objectives on distinct empty cells after {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}
