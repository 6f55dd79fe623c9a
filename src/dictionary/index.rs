//! Length-bucketed word index
//!
//! Words are deduplicated globally, grouped by character length, and each
//! bucket sorted lexicographically so candidate enumeration order is
//! deterministic. The index is immutable after [`Dictionary::build`] and safe
//! to share by reference across concurrent solver runs.
//!
//! Queries are flat bucket scans, O(bucket size x length) per lookup.
//! Dictionary sizes are bounded (tens of thousands of entries), so nothing
//! fancier is warranted; a per-position index could be added behind the same
//! contract for much larger word lists.

use std::collections::{HashMap, HashSet};

use crate::dictionary::pattern::Pattern;
use crate::io::error::Result;

/// Immutable word index bucketed by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: HashMap<usize, Vec<String>>,
}

/// Summary counts over the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Total unique words across all buckets
    pub total_words: usize,
    /// Number of distinct word lengths
    pub bucket_count: usize,
    /// Shortest word length present, if any
    pub min_length: Option<usize>,
    /// Longest word length present, if any
    pub max_length: Option<usize>,
}

impl Dictionary {
    /// Build an index from raw word lists
    ///
    /// Each word is trimmed and uppercased, then kept only if non-empty and
    /// purely alphabetic. Duplicates across all sources collapse to one
    /// entry. Each length bucket is sorted lexicographically.
    pub fn build<I>(sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        for source in sources {
            for raw in source {
                let word = raw.as_ref().trim().to_ascii_uppercase();
                if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
                    seen.insert(word);
                }
            }
        }

        let mut buckets: HashMap<usize, Vec<String>> = HashMap::new();
        for word in seen {
            buckets.entry(word.len()).or_default().push(word);
        }
        for bucket in buckets.values_mut() {
            bucket.sort_unstable();
        }

        Self { buckets }
    }

    /// Pattern-match query over a raw pattern string
    ///
    /// A pattern containing no `'?'` is returned as its own single-element
    /// match without consulting the index. Otherwise every word in the length
    /// bucket whose letters agree with the pattern's fixed positions is
    /// returned in bucket (sorted) order. No matches is an empty vec, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FillError::InvalidPattern`] if the pattern is empty
    /// or contains characters outside letters and `'?'`.
    pub fn lookup(&self, raw_pattern: &str) -> Result<Vec<String>> {
        let pattern = Pattern::parse(raw_pattern)?;
        Ok(self.matching_words(&pattern))
    }

    /// Pattern-match query over a validated pattern
    ///
    /// Total function: every valid pattern yields a (possibly empty) ordered
    /// word sequence.
    pub fn matching_words(&self, pattern: &Pattern) -> Vec<String> {
        if pattern.is_complete() {
            return vec![pattern.as_str().to_string()];
        }

        self.buckets.get(&pattern.len()).map_or_else(Vec::new, |bucket| {
            bucket
                .iter()
                .filter(|word| pattern.matches_word(word))
                .cloned()
                .collect()
        })
    }

    /// Whether the uppercased word is a member of its length bucket
    pub fn is_valid(&self, word: &str) -> bool {
        let normalized = word.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return false;
        }
        self.buckets
            .get(&normalized.len())
            .is_some_and(|bucket| bucket.binary_search(&normalized).is_ok())
    }

    /// All words of one length, in sorted order
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Summary counts over the index
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            total_words: self.buckets.values().map(Vec::len).sum(),
            bucket_count: self.buckets.len(),
            min_length: self.buckets.keys().min().copied(),
            max_length: self.buckets.keys().max().copied(),
        }
    }
}
