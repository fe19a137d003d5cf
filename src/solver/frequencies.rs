//! Pattern frequency tables
//!
//! For every scoring word, groups the possible words by the feedback pattern
//! they would produce if that scoring word were guessed against them. For a
//! fixed scoring word the buckets partition the possible set exactly: every
//! possible word lands in exactly one bucket, and the bucket union equals
//! the possible set.

use crate::core::{Pattern, Word};
use crate::error::Result;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Buckets of possible words per (scoring word, pattern)
#[derive(Debug, Clone, Default)]
pub struct PatternFrequencyTable {
    table: FxHashMap<Word, FxHashMap<Pattern, FxHashSet<Word>>>,
}

impl PatternFrequencyTable {
    /// Build the table for `scoring_words` against `possible_words`
    ///
    /// Cost is O(|scoring| × |possible| × L); scoring words are processed in
    /// parallel. The result is a pure function of the inputs — iteration
    /// order never affects the mapping.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::LengthMismatch`] if the two word sets
    /// mix lengths.
    pub fn build(scoring_words: &[Word], possible_words: &[Word]) -> Result<Self> {
        let table = scoring_words
            .par_iter()
            .map(|guess| {
                let mut buckets: FxHashMap<Pattern, FxHashSet<Word>> = FxHashMap::default();
                for other in possible_words {
                    let pattern = Pattern::assess(guess, other)?;
                    buckets.entry(pattern).or_default().insert(other.clone());
                }
                Ok((guess.clone(), buckets))
            })
            .collect::<Result<FxHashMap<_, _>>>()?;

        Ok(Self { table })
    }

    /// The bucket of possible words producing `pattern` for `guess`
    #[must_use]
    pub fn bucket(&self, guess: &Word, pattern: &Pattern) -> Option<&FxHashSet<Word>> {
        self.table.get(guess)?.get(pattern)
    }

    /// All pattern buckets for one scoring word
    #[must_use]
    pub fn patterns(&self, guess: &Word) -> Option<&FxHashMap<Pattern, FxHashSet<Word>>> {
        self.table.get(guess)
    }

    /// Iterate over the scoring words in the table
    pub fn scoring_words(&self) -> impl Iterator<Item = &Word> {
        self.table.keys()
    }

    /// Number of scoring words in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if the table holds no scoring words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn as_map(&self) -> &FxHashMap<Word, FxHashMap<Pattern, FxHashSet<Word>>> {
        &self.table
    }

    pub(crate) fn from_map(table: FxHashMap<Word, FxHashMap<Pattern, FxHashSet<Word>>>) -> Self {
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn bucket_of(table: &PatternFrequencyTable, guess: &str, pattern: &str) -> FxHashSet<Word> {
        table
            .bucket(&Word::new(guess).unwrap(), &pattern.parse().unwrap())
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn all_different_vocabulary() {
        // No word shares a letter with any other: each scoring word splits
        // the set into itself (all correct) and everything else (all absent)
        let vocab = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let table = PatternFrequencyTable::build(&vocab, &vocab).unwrap();

        for guess in &vocab {
            let buckets = table.patterns(guess).unwrap();
            assert_eq!(buckets.len(), 2);

            let own = table
                .bucket(guess, &Pattern::all_correct(5))
                .expect("self bucket");
            assert_eq!(own.len(), 1);
            assert!(own.contains(guess));

            let rest = table
                .bucket(guess, &"-----".parse().unwrap())
                .expect("rest bucket");
            assert_eq!(rest.len(), 3);
            assert!(!rest.contains(guess));
        }
    }

    #[test]
    fn clear_winner_vocabulary() {
        // "abcd" discriminates every word into its own singleton bucket
        let vocab = words(&["abcd", "aaaa", "bbbb", "cccc", "dddd"]);
        let table = PatternFrequencyTable::build(&vocab, &vocab).unwrap();

        let abcd = Word::new("abcd").unwrap();
        let buckets = table.patterns(&abcd).unwrap();
        assert_eq!(buckets.len(), 5);
        for bucket in buckets.values() {
            assert_eq!(bucket.len(), 1);
        }

        assert_eq!(bucket_of(&table, "abcd", "g---"), words(&["aaaa"]).into_iter().collect());
        assert_eq!(bucket_of(&table, "abcd", "-g--"), words(&["bbbb"]).into_iter().collect());
        assert_eq!(bucket_of(&table, "abcd", "--g-"), words(&["cccc"]).into_iter().collect());
        assert_eq!(bucket_of(&table, "abcd", "---g"), words(&["dddd"]).into_iter().collect());

        // The single-letter words split three ways
        let aaaa = Word::new("aaaa").unwrap();
        assert_eq!(table.patterns(&aaaa).unwrap().len(), 3);
        assert_eq!(bucket_of(&table, "aaaa", "----").len(), 3);
        assert_eq!(bucket_of(&table, "aaaa", "g---"), words(&["abcd"]).into_iter().collect());
    }

    #[test]
    fn buckets_partition_possible_set() {
        let scoring = words(&["chimp", "catch", "patch", "match", "hatch"]);
        let possible = words(&["catch", "patch", "match", "hatch"]);
        let table = PatternFrequencyTable::build(&scoring, &possible).unwrap();

        for guess in &scoring {
            let buckets = table.patterns(guess).unwrap();

            let mut seen: FxHashSet<Word> = FxHashSet::default();
            let mut total = 0;
            for bucket in buckets.values() {
                total += bucket.len();
                for word in bucket {
                    // Disjointness: no word in two buckets
                    assert!(seen.insert(word.clone()), "{word} appears twice");
                }
            }

            // Union equals the possible set
            assert_eq!(total, possible.len());
            assert_eq!(seen, possible.iter().cloned().collect());
        }
    }

    #[test]
    fn build_independent_of_possible_order() {
        let scoring = words(&["catch", "patch"]);
        let forward = words(&["catch", "patch", "match", "hatch"]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = PatternFrequencyTable::build(&scoring, &forward).unwrap();
        let b = PatternFrequencyTable::build(&scoring, &backward).unwrap();

        for guess in &scoring {
            assert_eq!(a.patterns(guess), b.patterns(guess));
        }
    }

    #[test]
    fn build_rejects_mixed_lengths() {
        let scoring = words(&["chimp"]);
        let possible = words(&["abcd"]);
        assert!(PatternFrequencyTable::build(&scoring, &possible).is_err());
    }

    #[test]
    fn empty_inputs() {
        let table = PatternFrequencyTable::build(&[], &[]).unwrap();
        assert!(table.is_empty());

        let scoring = words(&["chimp"]);
        let table = PatternFrequencyTable::build(&scoring, &[]).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.patterns(&scoring[0]).unwrap().is_empty());
    }
}
