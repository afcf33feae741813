//! Example demonstrating a scripted puzzle round.
//!
//! This example shows how to:
//! - Build a `TileLayout` for an image and screen width
//! - Shuffle a puzzle from a reproducible `ShuffleSeed`
//! - Solve it swap by swap while tracking the streak score
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_puzzle
//! ```
//!
//! Replay a specific shuffle:
//!
//! ```sh
//! cargo run --example play_puzzle -- --seed \
//!     1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Change the grid shape:
//!
//! ```sh
//! cargo run --example play_puzzle -- --rows 4 --cols 5
//! ```

use std::process;

use clap::Parser;
use tessella_core::{GridSize, Size, TileLayout};
use tessella_engine::{Piece, Puzzle, Scoreboard, ShuffleSeed, placement_streak};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid rows.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    rows: usize,

    /// Grid columns.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    cols: usize,

    /// Shuffle seed as 64 hex characters. Random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<ShuffleSeed>,

    /// Source image width in pixels.
    #[arg(long, value_name = "PX", default_value_t = 1920.0)]
    image_width: f64,

    /// Source image height in pixels.
    #[arg(long, value_name = "PX", default_value_t = 1080.0)]
    image_height: f64,

    /// Screen width the canvas is fitted to.
    #[arg(long, value_name = "PX", default_value_t = 1280.0)]
    screen_width: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match GridSize::try_new(args.rows, args.cols) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let image = Size::new(args.image_width, args.image_height);
    let layout = match TileLayout::for_screen(image, args.screen_width, grid) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let seed = args.seed.unwrap_or_else(ShuffleSeed::random);
    println!("seed: {seed}");
    println!(
        "canvas: {}x{} ({} tiles of {}x{})",
        layout.canvas().width,
        layout.canvas().height,
        grid.len(),
        layout.tile().width,
        layout.tile().height,
    );

    let mut puzzle = Puzzle::new(layout);
    if let Err(err) = puzzle.shuffle(&mut seed.rng()) {
        eprintln!("{err}");
        process::exit(1);
    }
    print_arrangement(&puzzle);

    // Solve by sending the first misplaced piece home, scoring each swap
    // the way the game does.
    let mut board = Scoreboard::new();
    let mut moves = 0_u32;
    while !puzzle.is_solved() {
        let misplaced = puzzle
            .pieces()
            .iter()
            .find(|piece| !piece.is_home())
            .expect("unsolved puzzle has a misplaced piece");
        let (from, to) = (misplaced.current_index(), misplaced.original_index());
        puzzle.swap(from, to).expect("both slots are occupied");
        moves += 1;

        let first = puzzle.piece(from).expect("slot is occupied");
        let second = puzzle.piece(to).expect("slot is occupied");
        board.update(placement_streak(first, second));
        println!(
            "swap {from} <-> {to}: streak {streak}",
            streak = board.streak()
        );
    }

    println!("solved in {moves} swaps, final streak {}", board.streak());
}

fn print_arrangement(puzzle: &Puzzle) {
    let grid = puzzle.grid();
    println!("scrambled arrangement (original index per slot):");
    for row in 0..grid.rows() {
        let line: Vec<String> = (0..grid.cols())
            .map(|col| {
                let slot = grid.cols() * row + col;
                puzzle
                    .piece(slot)
                    .map_or_else(|| "-".to_owned(), |p: &Piece| p.original_index().to_string())
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}
