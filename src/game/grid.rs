use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::game::{Direction, PlacedWord};
use crate::{EMPTY_CELL, MAX_RANDOM_ATTEMPTS};

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Outcome of a removal attempt. Message formatting is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveStatus {
    Removed,
    NotFound,
}

/// The word-search grid: a row-major letter buffer, a parallel occupancy
/// mask marking cells that belong to at least one placed word, and the
/// placed words in placement order.
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    letters: Vec<char>,
    occupied: Vec<bool>,
    words: Vec<PlacedWord>,
    rng: StdRng,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Builds a grid with a caller-supplied RNG so placement is reproducible
    /// under a fixed seed. Every cell starts as a random filler letter with
    /// no word covering it.
    pub fn with_rng(rows: usize, cols: usize, mut rng: StdRng) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let letters = (0..rows * cols)
            .map(|_| (b'A' + rng.gen_range(0..26)) as char)
            .collect();
        Ok(Self {
            rows,
            cols,
            letters,
            occupied: vec![false; rows * cols],
            words: Vec::new(),
            rng,
        })
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn letter(&self, row: usize, col: usize) -> char {
        self.letters[self.idx(row, col)]
    }

    pub fn occupied(&self, row: usize, col: usize) -> bool {
        self.occupied[self.idx(row, col)]
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Embeds each word at a random feasible spot, falling back to a
    /// systematic scan for words the random attempts could not fit. Returns
    /// the words (lowercased) that fit nowhere in the grid; those are left
    /// out entirely.
    pub fn place_words<S: AsRef<str>>(&mut self, list: &[S]) -> Vec<String> {
        let mut deferred = Vec::new();
        for raw in list {
            let word = raw.as_ref().to_ascii_lowercase();
            if !self.place_random(&word) {
                deferred.push(word);
            }
        }
        let mut unplaced = Vec::new();
        for word in deferred {
            if !self.place_systematic(&word) {
                unplaced.push(word);
            }
        }
        unplaced
    }

    fn place_random(&mut self, word: &str) -> bool {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let row = self.rng.gen_range(0..self.rows);
            let col = self.rng.gen_range(0..self.cols);
            let direction = *Direction::ALL
                .choose(&mut self.rng)
                .unwrap_or(&Direction::Horizontal);
            if self.can_place(word, row, col, direction) {
                self.commit(word, row, col, direction);
                return true;
            }
        }
        false
    }

    // Deterministic fallback: row-major anchors, directions in fixed order.
    // Succeeds whenever any feasible placement exists.
    fn place_systematic(&mut self, word: &str) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                for direction in Direction::ALL {
                    if self.can_place(word, row, col, direction) {
                        self.commit(word, row, col, direction);
                        return true;
                    }
                }
            }
        }
        false
    }

    /// A placement is feasible when every letter lands in bounds and any
    /// already-occupied cell it crosses holds the same letter. Overlapping a
    /// placed word on an agreeing letter is how crossings share cells.
    fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let (dr, dc) = direction.step();
        for (i, ch) in word.chars().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            if r >= self.rows || c >= self.cols {
                return false;
            }
            let idx = self.idx(r, c);
            if self.occupied[idx] && self.letters[idx].to_ascii_lowercase() != ch {
                return false;
            }
        }
        true
    }

    fn commit(&mut self, word: &str, row: usize, col: usize, direction: Direction) {
        let (dr, dc) = direction.step();
        for (i, ch) in word.chars().enumerate() {
            let idx = self.idx(row + i * dr, col + i * dc);
            self.letters[idx] = ch.to_ascii_uppercase();
            self.occupied[idx] = true;
        }
        self.words.push(PlacedWord::new(word, row, col, direction));
    }

    /// Removes `word` from the grid, taking the direction as the character
    /// the user typed. The record must be present for the typed direction
    /// and its text must still read back from the live grid; otherwise
    /// nothing is touched. Cleared cells drop to the empty marker unless
    /// another placed word still covers them.
    pub fn remove_word(&mut self, word: &PlacedWord, direction: char) -> RemoveStatus {
        let Some(direction) = Direction::from_char(direction) else {
            return RemoveStatus::NotFound;
        };
        let target = PlacedWord::new(word.text(), word.row(), word.col(), direction);
        let Some(pos) = self.words.iter().position(|w| *w == target) else {
            return RemoveStatus::NotFound;
        };
        if !self.matches_grid(&target) {
            return RemoveStatus::NotFound;
        }
        for (r, c, _) in target.cells() {
            let shared = self
                .words
                .iter()
                .enumerate()
                .any(|(i, other)| i != pos && other.covers(r, c));
            if !shared {
                let idx = self.idx(r, c);
                self.letters[idx] = EMPTY_CELL;
                self.occupied[idx] = false;
            }
        }
        self.words.remove(pos);
        RemoveStatus::Removed
    }

    // Re-derives the word's cells from its anchor/direction and checks each
    // against the live buffer rather than trusting the record.
    fn matches_grid(&self, word: &PlacedWord) -> bool {
        for (r, c, ch) in word.cells() {
            if r >= self.rows || c >= self.cols {
                return false;
            }
            if self.letters[self.idx(r, c)].to_ascii_lowercase() != ch {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    /// Header of column letter-labels, then each row prefixed with a
    /// zero-padded row number, letters space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            let label = char::from_u32('a' as u32 + col as u32).unwrap_or('?');
            write!(f, "{label} ")?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{row:02} ")?;
            for col in 0..self.cols {
                write!(f, "{} ", self.letter(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(rows: usize, cols: usize) -> Grid {
        Grid::with_rng(rows, cols, StdRng::seed_from_u64(7)).unwrap()
    }

    // The occupancy mask must mirror the placed-word records exactly.
    fn assert_occupancy_consistent(grid: &Grid) {
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let covered = grid.words().iter().any(|w| w.covers(row, col));
                assert_eq!(
                    grid.occupied(row, col),
                    covered,
                    "occupancy mismatch at ({row}, {col})"
                );
            }
        }
    }

    fn snapshot(grid: &Grid) -> (Vec<char>, Vec<bool>, Vec<PlacedWord>) {
        let mut letters = Vec::new();
        let mut occupied = Vec::new();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                letters.push(grid.letter(row, col));
                occupied.push(grid.occupied(row, col));
            }
        }
        (letters, occupied, grid.words().to_vec())
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(Grid::new(5, 0), Err(GridError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_fresh_grid_is_random_fill_unoccupied() {
        let grid = seeded(4, 6);
        for row in 0..4 {
            for col in 0..6 {
                assert!(grid.letter(row, col).is_ascii_uppercase());
                assert!(!grid.occupied(row, col));
            }
        }
        assert!(grid.words().is_empty());
    }

    #[test]
    fn test_place_single_word() {
        let mut grid = seeded(5, 5);
        let unplaced = grid.place_words(&["cat"]);
        assert!(unplaced.is_empty());

        let record = grid
            .words()
            .iter()
            .find(|w| w.text() == "cat")
            .expect("cat should be placed")
            .clone();
        for (r, c, ch) in record.cells() {
            assert_eq!(grid.letter(r, c), ch.to_ascii_uppercase());
            assert!(grid.occupied(r, c));
        }
        assert_eq!(record.cells().len(), 3);
        assert_occupancy_consistent(&grid);
    }

    #[test]
    fn test_placement_lowercases_text_and_uppercases_grid() {
        let mut grid = seeded(6, 6);
        assert!(grid.place_words(&["CaT"]).is_empty());
        let record = &grid.words()[0];
        assert_eq!(record.text(), "cat");
        let (r, c, _) = record.cells()[0];
        assert_eq!(grid.letter(r, c), 'C');
    }

    #[test]
    fn test_systematic_fallback_places_tight_fit() {
        // Length-7 word in a 7x3 grid: only vertical placement fits, and the
        // odds of 100 random draws all missing it are irrelevant because the
        // systematic scan must pick it up.
        let mut grid = seeded(7, 3);
        let unplaced = grid.place_words(&["letters"]);
        assert!(unplaced.is_empty());
        assert_eq!(grid.words().len(), 1);
        assert_eq!(grid.words()[0].direction(), Direction::Vertical);
        assert_occupancy_consistent(&grid);
    }

    #[test]
    fn test_word_too_long_reported_unplaced() {
        let mut grid = seeded(3, 3);
        let unplaced = grid.place_words(&["elephant"]);
        assert_eq!(unplaced, vec!["elephant".to_string()]);
        assert!(grid.words().is_empty());
        assert_occupancy_consistent(&grid);
    }

    #[test]
    fn test_overlapping_letters_always_agree() {
        let mut grid = seeded(8, 8);
        grid.place_words(&["crate", "trace", "react", "cater", "caret"]);
        assert_occupancy_consistent(&grid);
        let words = grid.words().to_vec();
        for (i, a) in words.iter().enumerate() {
            for b in words.iter().skip(i + 1) {
                for (r, c, ch) in a.cells() {
                    if b.covers(r, c) {
                        let other = b
                            .cells()
                            .into_iter()
                            .find(|&(br, bc, _)| br == r && bc == c)
                            .unwrap();
                        assert_eq!(ch, other.2, "conflicting letters at ({r}, {c})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_remove_clears_cells_and_record() {
        let mut grid = seeded(5, 5);
        grid.commit("cat", 1, 1, Direction::Horizontal);
        let record = grid.words()[0].clone();

        assert_eq!(grid.remove_word(&record, 'h'), RemoveStatus::Removed);
        assert!(grid.words().is_empty());
        for (r, c, _) in record.cells() {
            assert_eq!(grid.letter(r, c), EMPTY_CELL);
            assert!(!grid.occupied(r, c));
        }
        assert_occupancy_consistent(&grid);
    }

    #[test]
    fn test_remove_preserves_crossing_word() {
        // "cat" horizontal at (0,0) and "tag" vertical at (0,2) share the 't'.
        let mut grid = seeded(5, 5);
        grid.commit("cat", 0, 0, Direction::Horizontal);
        grid.commit("tag", 0, 2, Direction::Vertical);
        let cat = grid.words()[0].clone();
        let tag = grid.words()[1].clone();

        assert_eq!(grid.remove_word(&cat, 'h'), RemoveStatus::Removed);
        assert_eq!(grid.letter(0, 0), EMPTY_CELL);
        assert_eq!(grid.letter(0, 1), EMPTY_CELL);
        // Shared cell still belongs to "tag".
        assert_eq!(grid.letter(0, 2), 'T');
        assert!(grid.occupied(0, 2));
        assert_occupancy_consistent(&grid);

        assert_eq!(grid.remove_word(&tag, 'v'), RemoveStatus::Removed);
        assert_eq!(grid.letter(0, 2), EMPTY_CELL);
        assert!(!grid.occupied(0, 2));
        assert_occupancy_consistent(&grid);
    }

    #[test]
    fn test_remove_wrong_direction_char_is_not_found() {
        let mut grid = seeded(5, 5);
        grid.commit("cat", 1, 1, Direction::Horizontal);
        let record = grid.words()[0].clone();
        let before = snapshot(&grid);

        assert_eq!(grid.remove_word(&record, 'v'), RemoveStatus::NotFound);
        assert_eq!(grid.remove_word(&record, 'x'), RemoveStatus::NotFound);
        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn test_remove_absent_record_is_not_found() {
        let mut grid = seeded(5, 5);
        grid.commit("cat", 1, 1, Direction::Horizontal);
        let before = snapshot(&grid);

        let ghost = PlacedWord::new("dog", 0, 0, Direction::Horizontal);
        assert_eq!(grid.remove_word(&ghost, 'h'), RemoveStatus::NotFound);
        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn test_remove_accepts_uppercase_direction_char() {
        let mut grid = seeded(5, 5);
        grid.commit("dog", 2, 0, Direction::Diagonal);
        let record = grid.words()[0].clone();
        assert_eq!(grid.remove_word(&record, 'D'), RemoveStatus::Removed);
        assert!(grid.words().is_empty());
    }

    #[test]
    fn test_render_round_trips_letter_buffer() {
        let grid = seeded(3, 5);
        let rendered = grid.to_string();
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("   a b c d e "));
        for (row, line) in lines.enumerate() {
            assert_eq!(&line[..3], format!("{row:02} "));
            let letters: Vec<char> = line[3..]
                .split_whitespace()
                .map(|s| s.chars().next().unwrap())
                .collect();
            let stored: Vec<char> = (0..grid.cols).map(|col| grid.letter(row, col)).collect();
            assert_eq!(letters, stored);
        }
        assert_eq!(rendered.lines().count(), grid.rows + 1);
    }
}
