use std::collections::hash_map::{self, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::token::{Tokenizer, WhitespaceTokenizer};

/// Occurrence count per distinct token.
///
/// `total()` always equals the sum of all counts, i.e. the number of tokens
/// the table was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Tally `tokens` in a single pass.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total = 0u64;
        for token in tokens {
            let token = token.as_ref();
            // Only allocate a key on first occurrence.
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_owned(), 1);
                }
            }
            total += 1;
        }
        Self { counts, total }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Entries sorted by token.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Up to `n` entries with the highest counts; ties are ordered by token.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Tokenize `text` on whitespace and count the tokens.
pub fn count_words(text: &str) -> FrequencyTable {
    FrequencyTable::from_tokens(WhitespaceTokenizer.tokenize(text))
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(token, count)| (token.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serialized as a single JSON object with keys in sorted order so that
// equal tables always produce identical bytes.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, count) in self.sorted() {
            map.serialize_entry(token, &count)?;
        }
        map.end()
    }
}
