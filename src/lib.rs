pub mod maze;

pub use maze::{Cell, Direction, GenerationError, Grid, Maze, Position, generate_maze};
