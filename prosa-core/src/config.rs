//! Segmentation policy
//!
//! [`SegmenterConfig`] is an immutable value passed explicitly into every
//! segmentation call. There is no global or shared mutable policy state.

use crate::abbreviation::{AbbreviationSet, CollocationSet, StarterSet};
use crate::error::Result;

/// Default configuration constants
pub mod defaults {
    /// Characters after a terminator run searched for closing quotes
    pub const QUOTE_LOOKAHEAD: usize = 2;

    /// Whether indented lines start new paragraphs
    pub const PARAGRAPH_ON_INDENT: bool = false;
}

/// Policy used by the sentence detector and paragraph splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    pub(crate) abbreviations: AbbreviationSet,
    pub(crate) sentence_starters: StarterSet,
    pub(crate) collocations: CollocationSet,
    pub(crate) quote_lookahead: usize,
    pub(crate) paragraph_on_indent: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            abbreviations: AbbreviationSet::default(),
            sentence_starters: StarterSet::default(),
            collocations: CollocationSet::default(),
            quote_lookahead: defaults::QUOTE_LOOKAHEAD,
            paragraph_on_indent: defaults::PARAGRAPH_ON_INDENT,
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Known abbreviations
    pub fn abbreviations(&self) -> &AbbreviationSet {
        &self.abbreviations
    }

    /// Words that end an abbreviated sentence
    pub fn sentence_starters(&self) -> &StarterSet {
        &self.sentence_starters
    }

    /// Word pairs a period never splits
    pub fn collocations(&self) -> &CollocationSet {
        &self.collocations
    }

    /// Lookahead window for closing quotes after a terminator
    pub fn quote_lookahead(&self) -> usize {
        self.quote_lookahead
    }

    /// Whether indented lines start new paragraphs
    pub fn paragraph_on_indent(&self) -> bool {
        self.paragraph_on_indent
    }
}

/// Fluent builder for [`SegmenterConfig`].
///
/// Entry lists are validated in [`build`](SegmenterConfigBuilder::build).
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    abbreviations: Option<Vec<String>>,
    extra_abbreviations: Vec<String>,
    sentence_starters: Option<Vec<String>>,
    collocations: Vec<(String, String)>,
    quote_lookahead: Option<usize>,
    paragraph_on_indent: Option<bool>,
}

impl SegmenterConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default abbreviation set
    pub fn abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbreviations = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add abbreviations on top of the default (or replaced) set
    pub fn extra_abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_abbreviations
            .extend(entries.into_iter().map(Into::into));
        self
    }

    /// Replace the default sentence starters
    pub fn sentence_starters<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sentence_starters = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add `(left, right)` word pairs that a period never splits
    pub fn collocations<I, L, R>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        self.collocations.extend(
            pairs
                .into_iter()
                .map(|(left, right)| (left.into(), right.into())),
        );
        self
    }

    /// Set the closing-quote lookahead window
    pub fn quote_lookahead(mut self, chars: usize) -> Self {
        self.quote_lookahead = Some(chars);
        self
    }

    /// Treat indented lines as paragraph starts
    pub fn paragraph_on_indent(mut self, enabled: bool) -> Self {
        self.paragraph_on_indent = Some(enabled);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut config = SegmenterConfig::default();

        if let Some(entries) = self.abbreviations {
            config.abbreviations = AbbreviationSet::from_entries(entries)?;
        }
        config.abbreviations.extend(self.extra_abbreviations)?;

        if let Some(entries) = self.sentence_starters {
            config.sentence_starters = StarterSet::from_entries(entries)?;
        }

        config.collocations = CollocationSet::from_pairs(self.collocations)?;

        if let Some(chars) = self.quote_lookahead {
            config.quote_lookahead = chars;
        }

        if let Some(enabled) = self.paragraph_on_indent {
            config.paragraph_on_indent = enabled;
        }

        Ok(config)
    }
}
