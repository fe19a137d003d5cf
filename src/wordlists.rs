//! Word list loading
//!
//! Vocabulary files hold one word per line. Lines keep their file order,
//! trailing whitespace is stripped, and no deduplication is performed —
//! duplicate entries are the caller's responsibility.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, skipping blank and unparseable lines
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use infordle::wordlists::load_from_file;
///
/// let words = load_from_file("data/hidden_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("infordle_words_{}_{name}", std::process::id()))
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cr4ne", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_strips_trailing_whitespace_and_keeps_order() {
        let path = temp_path("list.txt");
        fs::write(&path, "chimp  \ncatch\n\npatch\t\nmatch\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["chimp", "catch", "patch", "match"]);
    }

    #[test]
    fn load_preserves_duplicates() {
        let path = temp_path("dups.txt");
        fs::write(&path, "catch\ncatch\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("/nonexistent/infordle_words.txt").is_err());
    }
}
