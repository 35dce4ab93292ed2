use std::fs;
use std::io;
use std::path::Path;

/// Reads a word list, one word per line. Lines that are not purely
/// alphabetic (blank lines, comments, stray punctuation) are skipped, and
/// words are lowercased for the grid.
pub fn load_words(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().all(|ch| ch.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_words_filters_non_words() {
        let path = std::env::temp_dir().join("word-hunt-load-words-test.txt");
        fs::write(&path, "Cat\n\ndog42\n  TAG  \n# comment\nbird\n").unwrap();
        let words = load_words(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words, vec!["cat", "tag", "bird"]);
    }

    #[test]
    fn test_load_words_missing_file_errors() {
        assert!(load_words(Path::new("/nonexistent/words.txt")).is_err());
    }
}
