use std::error::Error;

mod app;
mod config;
mod game;
mod io;
mod ui;
pub use config::{
    CELL_W, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WORDS, EMPTY_CELL, MAX_RANDOM_ATTEMPTS,
};
pub use game::{Direction, Grid, GridError, PlacedWord, RemoveStatus};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
