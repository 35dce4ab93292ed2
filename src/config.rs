// Shared puzzle/UI constants.
pub const DEFAULT_ROWS: usize = 12;
pub const DEFAULT_COLS: usize = 12;
// Random placement gives up on a word after this many (anchor, direction) draws.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
// Marker left behind when a removed word's letter is cleared.
pub const EMPTY_CELL: char = '*';
pub const CELL_W: usize = 2; // render each grid cell as letter + spacer
// Fallback list used when no word file is given on the command line.
pub const DEFAULT_WORDS: &[&str] = &[
    "puzzle", "letter", "anchor", "search", "random", "corner", "margin", "riddle",
];
