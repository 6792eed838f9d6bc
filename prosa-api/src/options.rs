//! Segmentation options
//!
//! [`Options`] is the caller-facing record behind `segment(text, options)`.
//! It can be built in code through [`OptionsBuilder`] or loaded from TOML:
//!
//! ```toml
//! extra_abbreviations = ["approx", "Fig"]
//! collocations = [["Sept", "11"]]
//! quote_lookahead = 3
//! execution_mode = "parallel"
//! threads = 4
//! ```
//!
//! Every field is optional; unknown keys are rejected.

use crate::error::Result;
use prosa_core::{config::defaults, SegmenterConfig};
use prosa_engine::{EngineConfig, ExecutionMode};

#[cfg(feature = "serde")]
use crate::error::ApiError;
#[cfg(feature = "serde")]
use std::path::Path;

/// Execution mode as written in option files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Segment on the calling thread
    Sequential,
    /// Fan paragraphs out to a worker pool
    Parallel,
    /// Decide per document
    #[default]
    Adaptive,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Parallel => ExecutionMode::Parallel,
            Mode::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

/// Options for one or more segmentation calls
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Options {
    /// Replaces the default abbreviation set when present
    pub abbreviations: Option<Vec<String>>,
    /// Added on top of the (default or replaced) abbreviation set
    pub extra_abbreviations: Vec<String>,
    /// Replaces the default sentence-starter list when present
    pub sentence_starters: Option<Vec<String>>,
    /// `(left, right)` word pairs a single period never splits
    pub collocations: Vec<(String, String)>,
    /// Characters after a terminator searched for closing quotes/brackets
    pub quote_lookahead: usize,
    /// Treat indented lines as paragraph starts
    pub paragraph_on_indent: bool,
    /// How paragraphs are scheduled
    pub execution_mode: Mode,
    /// Worker threads for parallel execution (None = one per CPU)
    pub threads: Option<usize>,
    /// Minimum document size in bytes before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            abbreviations: None,
            extra_abbreviations: Vec::new(),
            sentence_starters: None,
            collocations: Vec::new(),
            quote_lookahead: defaults::QUOTE_LOOKAHEAD,
            paragraph_on_indent: defaults::PARAGRAPH_ON_INDENT,
            execution_mode: Mode::default(),
            threads: engine.threads,
            parallel_threshold: engine.parallel_threshold,
        }
    }
}

impl Options {
    /// Create a builder starting from the defaults
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Parse options from a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML options file
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ApiError::Toml(err) => {
                ApiError::Configuration(format!("{}: {err}", path.display()))
            }
            other => other,
        })
    }

    /// Validate and convert into the core segmentation policy
    pub fn segmenter_config(&self) -> Result<SegmenterConfig> {
        let mut builder = SegmenterConfig::builder()
            .extra_abbreviations(self.extra_abbreviations.iter().cloned())
            .collocations(self.collocations.iter().cloned())
            .quote_lookahead(self.quote_lookahead)
            .paragraph_on_indent(self.paragraph_on_indent);

        if let Some(entries) = &self.abbreviations {
            builder = builder.abbreviations(entries.iter().cloned());
        }
        if let Some(entries) = &self.sentence_starters {
            builder = builder.sentence_starters(entries.iter().cloned());
        }

        Ok(builder.build()?)
    }

    /// Validate and convert into engine settings
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig {
            execution_mode: self.execution_mode.into(),
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Fluent builder for [`Options`]
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Replace the abbreviation set
    pub fn abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.abbreviations = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add abbreviations to the set
    pub fn extra_abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .extra_abbreviations
            .extend(entries.into_iter().map(Into::into));
        self
    }

    /// Replace the sentence-starter list
    pub fn sentence_starters<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.sentence_starters = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add word pairs a period never splits
    pub fn collocations<I, L, R>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        self.options.collocations.extend(
            pairs
                .into_iter()
                .map(|(left, right)| (left.into(), right.into())),
        );
        self
    }

    /// Set the closing-quote lookahead window
    pub fn quote_lookahead(mut self, chars: usize) -> Self {
        self.options.quote_lookahead = chars;
        self
    }

    /// Treat indented lines as paragraph starts
    pub fn paragraph_on_indent(mut self, enabled: bool) -> Self {
        self.options.paragraph_on_indent = enabled;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: Mode) -> Self {
        self.options.execution_mode = mode;
        self
    }

    /// Set the worker thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.options.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.options.parallel_threshold = bytes;
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<Options> {
        self.options.segmenter_config()?;
        self.options.engine_config()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_defaults_match_core() {
        let options = Options::default();
        assert_eq!(options.quote_lookahead, 2);
        assert_eq!(options.segmenter_config().unwrap(), SegmenterConfig::default());
        assert_eq!(options.engine_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_builder_validates_entries() {
        let err = Options::builder()
            .extra_abbreviations([""])
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));

        let err = Options::builder()
            .collocations([("Fig", "two words")])
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));

        let err = Options::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_replace_and_extend() {
        let options = Options::builder()
            .abbreviations(["Gen"])
            .extra_abbreviations(["Col"])
            .build()
            .unwrap();
        let config = options.segmenter_config().unwrap();
        assert!(config.abbreviations().contains("Gen"));
        assert!(config.abbreviations().contains("col."));
        assert!(!config.abbreviations().contains("Dr"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_str() {
        let options = Options::from_toml_str(
            r#"
            extra_abbreviations = ["approx"]
            collocations = [["Sept", "11"]]
            quote_lookahead = 3
            execution_mode = "sequential"
            "#,
        )
        .unwrap();

        assert_eq!(options.extra_abbreviations, vec!["approx".to_string()]);
        assert_eq!(options.quote_lookahead, 3);
        assert_eq!(options.execution_mode, Mode::Sequential);
        assert_eq!(options.abbreviations, None);
        assert_eq!(
            options.collocations,
            vec![("Sept".to_string(), "11".to_string())]
        );
        assert!(options
            .segmenter_config()
            .unwrap()
            .collocations()
            .contains("sept", "11"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_key_rejected() {
        let err = Options::from_toml_str("lookahead = 3").unwrap_err();
        assert!(matches!(err, ApiError::Toml(_)));
    }
}
