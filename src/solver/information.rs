//! Expected information per scoring word
//!
//! Derives Shannon entropy from a pattern frequency table: for a bucket of
//! size k out of N possible words, the pattern occurs with probability
//! P = k/N and contributes P·log2(1/P) bits. A word whose buckets split the
//! possible set evenly into many singletons carries the most information; a
//! word producing one pattern for every possible word carries none.

use super::PatternFrequencyTable;
use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// Expected information (bits) per scoring word
#[derive(Debug, Clone, Default)]
pub struct InformationTable {
    scores: FxHashMap<Word, f64>,
}

impl InformationTable {
    /// Compute expected information for every scoring word in `frequencies`
    ///
    /// `possible_count` is the size of the possible-word set the frequency
    /// table was built against. Bucket sizes are accumulated in sorted order
    /// so repeated runs produce bit-identical floats.
    ///
    /// # Errors
    /// Returns [`Error::DivisionUndefined`] if `possible_count` is zero.
    pub fn build(frequencies: &PatternFrequencyTable, possible_count: usize) -> Result<Self> {
        if possible_count == 0 {
            return Err(Error::DivisionUndefined);
        }
        let total = possible_count as f64;

        let mut scores = FxHashMap::default();
        for (word, buckets) in frequencies.as_map() {
            let mut sizes: Vec<usize> = buckets.values().map(FxHashSet::len).collect();
            sizes.sort_unstable();

            let bits: f64 = sizes
                .iter()
                .map(|&k| {
                    let p = k as f64 / total;
                    p * (1.0 / p).log2()
                })
                .sum();
            scores.insert(word.clone(), bits);
        }

        Ok(Self { scores })
    }

    /// The scoring word with the most expected information
    ///
    /// Ties break deterministically: information descending, then
    /// lexicographically smallest word.
    #[must_use]
    pub fn best_guess(&self) -> Option<(&Word, f64)> {
        self.scores
            .iter()
            .max_by(|(word_a, bits_a), (word_b, bits_b)| {
                bits_a.total_cmp(bits_b).then_with(|| word_b.cmp(word_a))
            })
            .map(|(word, &bits)| (word, bits))
    }

    /// Expected information for one word, if present
    #[must_use]
    pub fn score(&self, word: &Word) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Remove a word so it can never be selected again
    pub fn remove(&mut self, word: &Word) -> Option<f64> {
        self.scores.remove(word)
    }

    /// Number of scored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no words are scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over (word, bits) entries
    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.scores.iter().map(|(word, &bits)| (word, bits))
    }

    pub(crate) fn as_map(&self) -> &FxHashMap<Word, f64> {
        &self.scores
    }

    pub(crate) fn from_map(scores: FxHashMap<Word, f64>) -> Self {
        Self { scores }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn score_of(table: &InformationTable, text: &str) -> f64 {
        table.score(&Word::new(text).unwrap()).unwrap()
    }

    #[test]
    fn all_different_vocabulary() {
        // Each word splits 4 possibilities into buckets of 1 and 3:
        // 1/4·log2(4) + 3/4·log2(4/3) = 0.8112781244591327 bits
        let vocab = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &vocab).unwrap();
        let info = InformationTable::build(&frequencies, vocab.len()).unwrap();

        for word in &vocab {
            let bits = info.score(word).unwrap();
            assert!((bits - 0.811_278_124_459_132_7).abs() < EPSILON);
        }
    }

    #[test]
    fn clear_winner_vocabulary() {
        // "abcd" splits all 5 words into singletons: log2(5) bits. The
        // single-letter words split 1/3/1: 1.3709505944546687 bits.
        let vocab = words(&["abcd", "aaaa", "bbbb", "cccc", "dddd"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &vocab).unwrap();
        let info = InformationTable::build(&frequencies, vocab.len()).unwrap();

        assert!((score_of(&info, "abcd") - 2.321_928_094_887_362).abs() < EPSILON);
        for text in ["aaaa", "bbbb", "cccc", "dddd"] {
            assert!((score_of(&info, text) - 1.370_950_594_454_668_7).abs() < EPSILON);
        }

        let (best, bits) = info.best_guess().unwrap();
        assert_eq!(best.text(), "abcd");
        assert!((bits - 2.321_928_094_887_362).abs() < EPSILON);
    }

    #[test]
    fn possible_count_decoupled_from_table() {
        // Frequencies restricted to a two-word subset, probabilities still
        // taken over the full five-word vocabulary
        let vocab = words(&["abcd", "aaaa", "bbbb", "cccc", "dddd"]);
        let subset = words(&["aaaa", "bbbb"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &subset).unwrap();
        let info = InformationTable::build(&frequencies, vocab.len()).unwrap();

        for text in ["abcd", "aaaa", "bbbb"] {
            assert!((score_of(&info, text) - 0.928_771_237_954_944_9).abs() < EPSILON);
        }
        for text in ["cccc", "dddd"] {
            assert!((score_of(&info, text) - 0.528_771_237_954_945).abs() < EPSILON);
        }
    }

    #[test]
    fn zero_possible_count_fails() {
        let vocab = words(&["chimp"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &vocab).unwrap();
        let result = InformationTable::build(&frequencies, 0);
        assert!(matches!(result, Err(Error::DivisionUndefined)));
    }

    #[test]
    fn entropy_non_negative_and_zero_iff_single_bucket() {
        // "zzzzz" produces the same all-absent pattern for every possible
        // word: exactly one bucket, zero bits
        let scoring = words(&["zzzzz", "chimp"]);
        let possible = words(&["catch", "patch", "match"]);
        let frequencies = PatternFrequencyTable::build(&scoring, &possible).unwrap();
        let info = InformationTable::build(&frequencies, possible.len()).unwrap();

        for (_, bits) in info.iter() {
            assert!(bits >= 0.0);
        }
        assert!(score_of(&info, "zzzzz").abs() < EPSILON);
        assert!(score_of(&info, "chimp") > 0.0);
    }

    #[test]
    fn tie_break_is_lexicographic() {
        // All four words carry identical information; the smallest word wins
        let vocab = words(&["dddd", "cccc", "bbbb", "aaaa"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &vocab).unwrap();
        let info = InformationTable::build(&frequencies, vocab.len()).unwrap();

        let (best, _) = info.best_guess().unwrap();
        assert_eq!(best.text(), "aaaa");
    }

    #[test]
    fn remove_excludes_from_selection() {
        let vocab = words(&["abcd", "aaaa", "bbbb", "cccc", "dddd"]);
        let frequencies = PatternFrequencyTable::build(&vocab, &vocab).unwrap();
        let mut info = InformationTable::build(&frequencies, vocab.len()).unwrap();

        info.remove(&Word::new("abcd").unwrap());
        let (best, _) = info.best_guess().unwrap();
        assert_ne!(best.text(), "abcd");
        assert_eq!(info.len(), 4);
    }

    #[test]
    fn best_guess_empty_table() {
        let info = InformationTable::default();
        assert!(info.best_guess().is_none());
    }
}
