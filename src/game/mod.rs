pub mod grid;
pub mod word;

pub use grid::{Grid, GridError, RemoveStatus};
pub use word::{Direction, PlacedWord};
