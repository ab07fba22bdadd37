use rand::Rng;

use super::grid::{Cell, Direction, Grid, Position};

/// How many forward steps to attempt from one cell before conceding and
/// backtracking to the previous cell on the stack.
const MAX_MOVEMENT_TRIES: u32 = 15;

// Each attempt rolls in (-TURN_ROLL_WINDOW, +TURN_ROLL_WINDOW); the low tail
// turns the heading left, the high tail right. With a threshold of 100 out of
// 200 that works out as a quarter chance of each turn and an even chance of
// carrying straight on.
const TURN_ROLL_WINDOW: i32 = 200;
const TURN_THRESHOLD: i32 = 100;

/// Chance, per accepted step, of carving into already-explored territory and
/// so closing a loop instead of growing a strict tree.
const LOOP_CHANCE_PER_MILLE: u32 = 10;

/// Carves a connected maze of one-cell-wide corridors into an all-wall grid
/// with a randomized self-avoiding walk, backtracking through an explicit
/// stack whenever the walk boxes itself in. Returns the cell the walk started
/// from, which is where the player spawns.
///
/// Every carved cell is reachable from the start: cells only ever become empty
/// by being stepped onto from the current position, and the current position
/// only ever moves forward one cell or retreats to a previously carved one.
pub(crate) fn carve(grid: &mut Grid, rng: &mut impl Rng) -> Position {
    let start = Position::new(
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );

    let mut stack = vec![start];
    let mut position = start;
    let mut direction = Direction::North;

    while !stack.is_empty() {
        grid.set_cell(position, Cell::Empty);

        let mut stepped = false;
        for _ in 0..MAX_MOVEMENT_TRIES {
            let roll = rng.random_range(-TURN_ROLL_WINDOW..TURN_ROLL_WINDOW);
            if roll < -TURN_THRESHOLD {
                direction = direction.perpendicular_left();
            } else if roll >= TURN_THRESHOLD {
                direction = direction.perpendicular_right();
            }

            if let Some(next) = try_step(grid, position, direction, rng) {
                position = next;
                stepped = true;
                break;
            }
        }

        if stepped {
            stack.push(position);
        } else if let Some(previous) = stack.pop() {
            position = previous;
        }
    }

    start
}

// A step is valid if the next cell and both its flanks are still wall, so the
// new corridor can't fuse with a parallel one, and, unless the loop roll says
// otherwise, the same holds one cell further out, so the corridor won't
// immediately dead-end against explored territory.
fn try_step(
    grid: &Grid,
    position: Position,
    direction: Direction,
    rng: &mut impl Rng,
) -> Option<Position> {
    let next = position.step(direction);
    if !grid.contains(next) {
        return None;
    }

    let left = direction.perpendicular_left();
    let right = direction.perpendicular_right();

    if !is_untouched(grid, next, left, right) {
        return None;
    }

    let closes_loop = rng.random_range(0..1000) < LOOP_CHANCE_PER_MILLE;
    let next_next = next.step(direction);

    if closes_loop || is_untouched(grid, next_next, left, right) {
        Some(next)
    } else {
        None
    }
}

fn is_untouched(grid: &Grid, position: Position, left: Direction, right: Direction) -> bool {
    grid.cell_at_position(position) == Cell::Wall
        && grid.cell_at_position(position.step(left)) == Cell::Wall
        && grid.cell_at_position(position.step(right)) == Cell::Wall
}
