/// Orientation of a placed word. The puzzle only embeds words left-to-right,
/// top-to-bottom, or along the main diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    // Fixed order: systematic placement tries these in sequence.
    pub const ALL: [Direction; 3] = [Direction::Horizontal, Direction::Vertical, Direction::Diagonal];

    /// (row step, col step) per letter.
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    /// Maps a user-typed direction character ('h'/'v'/'d', either case) to a
    /// direction; anything else is unrecognized.
    pub fn from_char(ch: char) -> Option<Direction> {
        match ch.to_ascii_lowercase() {
            'h' => Some(Direction::Horizontal),
            'v' => Some(Direction::Vertical),
            'd' => Some(Direction::Diagonal),
            _ => None,
        }
    }
}

/// One word embedded in the grid: its text (kept lowercase), the anchor cell
/// of its first letter, and its direction. Immutable once created; the grid
/// removes records by structural equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    text: String,
    row: usize,
    col: usize,
    direction: Direction,
}

impl PlacedWord {
    pub(crate) fn new(text: &str, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            text: text.to_ascii_lowercase(),
            row,
            col,
            direction,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cells this word covers, with the letter it contributes to each,
    /// recomputed from anchor + direction.
    pub fn cells(&self) -> Vec<(usize, usize, char)> {
        let (dr, dc) = self.direction.step();
        self.text
            .chars()
            .enumerate()
            .map(|(i, ch)| (self.row + i * dr, self.col + i * dc, ch))
            .collect()
    }

    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.cells().iter().any(|&(r, c, _)| r == row && c == col)
    }
}
