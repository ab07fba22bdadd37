use std::{env, process};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labyrinth::generate_maze;

// Prints a freshly generated maze to the terminal: walls as solid blocks,
// S for the start, F for the finish, digits for checkpoints.
//
// Usage: labyrinth [width] [height] [checkpoints] [seed]
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let width = parse_arg(&args, 0, 30);
    let height = parse_arg(&args, 1, 30);
    let checkpoints = parse_arg(&args, 2, 4);
    if checkpoints < 0 {
        eprintln!("Error: checkpoint count cannot be negative.");
        process::exit(1);
    }
    let seed = match args.get(3) {
        Some(raw) => match raw.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Error: seed must be an unsigned integer, got '{}'.", raw);
                process::exit(1);
            }
        },
        None => rand::rng().random(),
    };

    let mut rng = StdRng::seed_from_u64(seed);

    match generate_maze(&mut rng, width, height, checkpoints as usize) {
        Ok(maze) => {
            println!("{}", maze);
            println!(
                "{}x{} maze, seed {}, start {:?}, finish {:?}, {} checkpoint(s).",
                maze.width(),
                maze.height(),
                seed,
                (maze.start().x, maze.start().y),
                (maze.finish().x, maze.finish().y),
                maze.checkpoints().len()
            );
        }
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    }
}

fn parse_arg(args: &[String], index: usize, default: i32) -> i32 {
    match args.get(index) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: expected an integer argument, got '{}'.", raw);
                eprintln!("Usage: labyrinth [width] [height] [checkpoints] [seed]");
                process::exit(1);
            }
        },
        None => default,
    }
}
