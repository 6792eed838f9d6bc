//! Abbreviation, sentence-starter and collocation lookup tables
//!
//! All tables are immutable once built and are matched case-insensitively.
//! Entries are validated when inserted through [`AbbreviationSet::from_entries`],
//! [`StarterSet::from_entries`] or [`CollocationSet::from_pairs`], so a
//! malformed configuration is rejected before any text is segmented.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Abbreviations recognised when the caller supplies none
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "vs", "etc",
];

/// Words that end an abbreviated sentence when they follow it
pub const DEFAULT_SENTENCE_STARTERS: &[&str] = &[
    "The", "He", "She", "It", "They", "We", "You", "This", "That", "These", "Those", "There",
    "But", "However", "Then", "What", "When", "Why", "How",
];

static ABBREVIATION_PATTERN: OnceLock<Regex> = OnceLock::new();
static STARTER_PATTERN: OnceLock<Regex> = OnceLock::new();
static COLLOCATION_LEFT_PATTERN: OnceLock<Regex> = OnceLock::new();
static COLLOCATION_RIGHT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn abbreviation_pattern() -> &'static Regex {
    ABBREVIATION_PATTERN.get_or_init(|| {
        Regex::new(r"^\p{L}+(\.\p{L}+)*\.?$").expect("abbreviation pattern is a valid regex")
    })
}

fn starter_pattern() -> &'static Regex {
    STARTER_PATTERN
        .get_or_init(|| Regex::new(r"^\p{L}+$").expect("starter pattern is a valid regex"))
}

fn collocation_left_pattern() -> &'static Regex {
    COLLOCATION_LEFT_PATTERN.get_or_init(|| {
        Regex::new(r"^[\p{L}\p{N}]+(\.[\p{L}\p{N}]+)*\.?$")
            .expect("collocation pattern is a valid regex")
    })
}

fn collocation_right_pattern() -> &'static Regex {
    COLLOCATION_RIGHT_PATTERN.get_or_init(|| {
        Regex::new(r"^[\p{L}\p{N}]+$").expect("collocation pattern is a valid regex")
    })
}

/// Case-insensitive abbreviation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Build a table from caller-supplied entries.
    ///
    /// A trailing `.` is accepted and ignored ("etc." and "etc" are the same
    /// entry). Empty entries, entries with whitespace, and entries that are
    /// not letters separated by single dots are rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(entries)?;
        Ok(set)
    }

    /// Add more entries, validating each one
    pub fn extend<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref();
            if entry.trim().is_empty() {
                return Err(CoreError::Configuration(
                    "abbreviation entries must not be empty".to_string(),
                ));
            }
            if !abbreviation_pattern().is_match(entry) {
                return Err(CoreError::Configuration(format!(
                    "invalid abbreviation '{entry}': expected letters separated by single dots"
                )));
            }
            self.entries.insert(normalize(entry.trim_end_matches('.')));
        }
        Ok(())
    }

    /// Whether `word` (without its final dot) is a known abbreviation
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim_end_matches('.');
        !word.is_empty() && self.entries.contains(&normalize(word))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AbbreviationSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|entry| normalize(entry))
                .collect(),
        }
    }
}

/// Whether `word` looks like initials: single letters joined by dots
/// ("U.S", "e.g"), or one capital letter on its own ("J").
pub fn is_initialism(word: &str) -> bool {
    let mut segments = 0;
    let mut single_upper = false;
    for segment in word.split('.') {
        let mut chars = segment.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => {
                segments += 1;
                single_upper = c.is_uppercase();
            }
            _ => return false,
        }
    }
    segments >= 2 || (segments == 1 && single_upper)
}

/// Case-insensitive set of sentence-starting words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterSet {
    entries: HashSet<String>,
}

impl StarterSet {
    /// Create an empty set: abbreviations then never end a sentence
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Build a set from caller-supplied words
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for entry in entries {
            let entry = entry.as_ref();
            if !starter_pattern().is_match(entry) {
                return Err(CoreError::Configuration(format!(
                    "invalid sentence starter '{entry}': expected a single word"
                )));
            }
            set.entries.insert(normalize(entry));
        }
        Ok(set)
    }

    /// Whether `word` is a capitalised sentence starter
    pub fn is_starter(&self, word: &str) -> bool {
        if !word.chars().next().is_some_and(char::is_uppercase) {
            return false;
        }
        self.entries.contains(&normalize(word))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StarterSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SENTENCE_STARTERS
                .iter()
                .map(|word| normalize(word))
                .collect(),
        }
    }
}

/// Word pairs that a single period between them never splits
/// ("Sept. 11", "Fig. 3").
///
/// The left word is matched without its final dot, so `("Sept", "11")` and
/// `("Sept.", "11")` are the same entry. Empty by default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollocationSet {
    pairs: HashMap<String, HashSet<String>>,
}

impl CollocationSet {
    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from caller-supplied `(left, right)` pairs
    pub fn from_pairs<I, L, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, R)>,
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let mut set = Self::empty();
        for (left, right) in pairs {
            set.insert(left.as_ref(), right.as_ref())?;
        }
        Ok(set)
    }

    /// Add one pair, validating both words
    pub fn insert(&mut self, left: &str, right: &str) -> Result<()> {
        if !collocation_left_pattern().is_match(left) || !collocation_right_pattern().is_match(right)
        {
            return Err(CoreError::Configuration(format!(
                "invalid collocation ('{left}', '{right}'): expected two words"
            )));
        }
        self.pairs
            .entry(normalize(left.trim_end_matches('.')))
            .or_default()
            .insert(normalize(right));
        Ok(())
    }

    /// Whether a period between `left` and `right` is not a sentence end
    pub fn contains(&self, left: &str, right: &str) -> bool {
        let left = left.trim_end_matches('.');
        if left.is_empty() || right.is_empty() {
            return false;
        }
        self.pairs
            .get(&normalize(left))
            .is_some_and(|rights| rights.contains(&normalize(right)))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.values().map(HashSet::len).sum()
    }

    /// Whether the set has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase()
}
