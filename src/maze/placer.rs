use rand::Rng;

use super::GenerationError;
use super::grid::{Cell, Grid, Position};

// Rejection sampling budget per placed objective, scaled with the grid area.
// Empty cells are a strict majority of any well-carved maze, so honest inputs
// settle in a handful of tries; exhausting the budget means the caller asked
// for more distinct objectives than the maze can hold.
const RETRIES_PER_CELL: u32 = 16;

/// Picks the finish cell and `checkpoint_count` checkpoint cells from the
/// carved maze. All picks are empty cells, pairwise distinct, and distinct
/// from the start. Checkpoints keep their placement order: a checkpoint's
/// index is its identity (the front end colors each one by index).
pub(crate) fn place(
    grid: &Grid,
    start: Position,
    checkpoint_count: usize,
    rng: &mut impl Rng,
) -> Result<(Position, Vec<Position>), GenerationError> {
    let mut checkpoints = Vec::with_capacity(checkpoint_count);

    for _ in 0..checkpoint_count {
        let checkpoint = sample_free_cell(grid, rng, |candidate| {
            candidate != start && !checkpoints.contains(&candidate)
        })?;
        checkpoints.push(checkpoint);
    }

    let finish = sample_free_cell(grid, rng, |candidate| {
        candidate != start && !checkpoints.contains(&candidate)
    })?;

    Ok((finish, checkpoints))
}

fn sample_free_cell(
    grid: &Grid,
    rng: &mut impl Rng,
    is_free: impl Fn(Position) -> bool,
) -> Result<Position, GenerationError> {
    let attempts = (grid.width() as u32)
        .saturating_mul(grid.height() as u32)
        .saturating_mul(RETRIES_PER_CELL);

    for _ in 0..attempts {
        let candidate = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );

        if grid.cell_at_position(candidate) == Cell::Empty && is_free(candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::Infeasible { attempts })
}
