//! Intent Normalizer — reduces a keyword phrase to an order-independent,
//! city-independent key.
//!
//! "house painter castle rock" and "castle rock house painter" both become
//! `house painter`. A phrase that is nothing but a city yields the empty key,
//! which callers must treat as "not a service phrase".

use std::fmt;

/// Lowercases and splits a phrase on anything that is not alphanumeric.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical intent key: the sorted, city-stripped tokens of a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedIntent {
    tokens: Vec<String>,
}

impl NormalizedIntent {
    /// True when nothing but city tokens (or nothing at all) was in the phrase.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn key(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for NormalizedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Result of scanning a phrase against the known-city set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseScan {
    /// Tokens left after removing every city occurrence, in phrase order.
    pub remaining: Vec<String>,
    /// Indices into `KnownCities::names` in order of appearance.
    pub cities: Vec<usize>,
}

/// The known-city set for one report run, pre-tokenized for greedy matching.
#[derive(Debug, Clone, Default)]
pub struct KnownCities {
    names: Vec<String>,
    /// (city index, city tokens), longest token sequence first.
    patterns: Vec<(usize, Vec<String>)>,
}

impl KnownCities {
    pub fn new<S: AsRef<str>>(cities: &[S]) -> Self {
        let names: Vec<String> = cities
            .iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let mut patterns: Vec<(usize, Vec<String>)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (i, tokenize(name)))
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect();

        // Stable: equal-length cities keep their listed order.
        patterns.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        Self { names, patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Removes every city occurrence from the phrase. At each position the
    /// longest matching city wins, so "castle rock" is consumed whole before
    /// a single-token city named "rock" could match.
    pub fn scan(&self, phrase: &str) -> PhraseScan {
        let tokens = tokenize(phrase);
        let mut remaining = Vec::with_capacity(tokens.len());
        let mut cities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let hit = self.patterns.iter().find(|(_, pattern)| {
                tokens.len() - i >= pattern.len() && tokens[i..i + pattern.len()] == pattern[..]
            });

            match hit {
                Some((index, pattern)) => {
                    cities.push(*index);
                    i += pattern.len();
                }
                None => {
                    remaining.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        PhraseScan { remaining, cities }
    }

    /// First known city mentioned in the phrase, using the configured spelling.
    pub fn find_city(&self, phrase: &str) -> Option<&str> {
        self.scan(phrase)
            .cities
            .first()
            .map(|&i| self.names[i].as_str())
    }
}

/// Computes the intent key for `phrase` against `known_cities`.
pub fn normalize(phrase: &str, known_cities: &KnownCities) -> NormalizedIntent {
    let mut tokens = known_cities.scan(phrase).remaining;
    tokens.sort();
    NormalizedIntent { tokens }
}
