//! Sentence boundary detection
//!
//! The detector walks one paragraph at a time and looks at every run of
//! terminators (`.`, `!`, `?`, `…`). A run becomes a sentence end unless one
//! of these holds:
//!
//! - the run is glued to a following letter or digit ("3.14", "U.S");
//! - it is a single period between the two words of a configured
//!   collocation ("Sept. 11");
//! - it is a single period after an abbreviation or an initialism, and the
//!   next word is not a known sentence starter (a capitalised word after the
//!   pronoun "I" does not need to be one);
//! - it is an ellipsis and the next word is not capitalised;
//! - the next word starts with a lowercase letter.
//!
//! Closing quotes and brackets that follow the run within the configured
//! lookahead window belong to the sentence that just ended. A terminator
//! inside an open quotation is therefore a soft boundary: the cut moves past
//! the close mark when one follows closely, otherwise it lands right after
//! the terminator.
//!
//! The cut points partition the paragraph with no gaps and no overlaps; the
//! reported sentence spans are those partitions minus surrounding whitespace.

use crate::abbreviation::is_initialism;
use crate::classifier::{classify, is_closing_bracket, is_opening_bracket, quote_mark, PunctClass};
use crate::config::SegmenterConfig;
use crate::quote::{QuoteEvent, QuoteTracker};
use crate::scanner::{ScannedChar, Scanner};
use crate::types::{SentenceSegment, Span};

/// Shape of a terminator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    /// A lone `.`
    Period,
    /// Three or more dots, or `…`, not followed by `!`/`?`
    Ellipsis,
    /// Anything ending in `!` or `?`, and `..`
    Hard,
}

impl RunKind {
    fn of(run: &[ScannedChar]) -> Self {
        let dots = run.iter().filter(|c| c.ch == '.').count();
        let has_ellipsis_char = run.iter().any(|c| c.ch == '…');
        match run.last().map(|c| c.ch) {
            Some('!') | Some('?') => RunKind::Hard,
            _ if has_ellipsis_char || dots >= 3 => RunKind::Ellipsis,
            _ if run.len() == 1 => RunKind::Period,
            _ => RunKind::Hard,
        }
    }
}

/// First word after a candidate boundary
#[derive(Debug, Clone, Copy)]
struct NextWord<'a> {
    first: char,
    word: &'a str,
}

impl NextWord<'_> {
    fn starts_lowercase(&self) -> bool {
        self.first.is_lowercase()
    }

    fn starts_uppercase(&self) -> bool {
        self.first.is_uppercase()
    }
}

#[inline]
fn is_terminator_char(ch: char) -> bool {
    matches!(
        classify(ch),
        PunctClass::SentenceTerminator(_) | PunctClass::Ellipsis
    )
}

/// Paragraph-level sentence boundary detector
#[derive(Debug, Clone, Copy)]
pub struct SentenceDetector<'c> {
    config: &'c SegmenterConfig,
}

impl<'c> SentenceDetector<'c> {
    /// Create a detector bound to a configuration
    pub fn new(config: &'c SegmenterConfig) -> Self {
        Self { config }
    }

    /// Detect the sentences of one paragraph.
    ///
    /// Spans are relative to `text`. Whitespace-only input yields nothing.
    pub fn detect(&self, text: &str) -> Vec<SentenceSegment> {
        let (cuts, quoted) = self.scan(text);
        let mut segments = Vec::with_capacity(cuts.len());
        let mut start = 0;
        for (cut, is_quoted) in cuts.into_iter().zip(quoted) {
            let span = Span::new(start, cut).trim(text);
            if !span.is_empty() {
                segments.push(SentenceSegment { span, is_quoted });
            }
            start = cut;
        }
        segments
    }

    /// Cut offsets that partition `text` into sentences.
    ///
    /// The last cut is always `text.len()` unless `text` is empty, so
    /// consecutive cuts cover the paragraph exactly.
    pub fn boundaries(&self, text: &str) -> Vec<usize> {
        self.scan(text).0
    }

    fn scan(&self, text: &str) -> (Vec<usize>, Vec<bool>) {
        let chars = Scanner::new(text).collect_chars();
        let n = chars.len();
        let mut cuts = Vec::new();
        let mut quoted = Vec::new();
        let mut quotes = QuoteTracker::new();
        let mut sentence_quoted: Option<bool> = None;

        let ch_at = |i: usize| chars.get(i).map(|c| c.ch);
        let prev_of = |i: usize| i.checked_sub(1).map(|p| chars[p].ch);

        let mut i = 0;
        while i < n {
            let current = chars[i];
            if current.is_whitespace() {
                i += 1;
                continue;
            }

            if sentence_quoted.is_none() && current.ch.is_alphanumeric() {
                sentence_quoted = Some(quotes.is_open());
            }

            if quote_mark(current.ch).is_some() {
                quotes.observe(prev_of(i), current.ch, ch_at(i + 1));
                i += 1;
                continue;
            }

            if !is_terminator_char(current.ch) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut run_end = i;
            while run_end < n && is_terminator_char(chars[run_end].ch) {
                run_end += 1;
            }

            // Glued to the next word: decimals, domains, inner initialism dots
            if ch_at(run_end).is_some_and(char::is_alphanumeric) {
                i = run_end;
                continue;
            }

            let mut probe = quotes.clone();
            let absorbed_end = self.absorb_closers(&chars, run_end, &mut probe);
            let next = next_word(text, &chars, absorbed_end);
            let kind = RunKind::of(&chars[run_start..run_end]);

            if self.is_boundary(kind, text, &chars, run_start, next) {
                quotes = probe;
                let cut = chars[absorbed_end - 1].end();
                cuts.push(cut);
                quoted.push(sentence_quoted.take().unwrap_or(false));
                i = absorbed_end;
            } else {
                i = run_end;
            }
        }

        if cuts.last().copied().unwrap_or(0) < text.len() {
            cuts.push(text.len());
            quoted.push(sentence_quoted.unwrap_or(false));
        }

        (cuts, quoted)
    }

    /// Consume closing quotes and brackets within the lookahead window.
    ///
    /// Returns the index one past the last absorbed character. `probe` sees
    /// the quotation state as it would be after the absorption.
    fn absorb_closers(
        &self,
        chars: &[ScannedChar],
        from: usize,
        probe: &mut QuoteTracker,
    ) -> usize {
        let limit = from
            .saturating_add(self.config.quote_lookahead)
            .min(chars.len());
        let mut k = from;
        while k < limit {
            let c = chars[k];
            let prev = k.checked_sub(1).map(|p| chars[p].ch);
            let next = chars.get(k + 1).map(|n| n.ch);

            if quote_mark(c.ch).is_some() {
                let mut attempt = probe.clone();
                match attempt.observe(prev, c.ch, next) {
                    QuoteEvent::Closed(_) => {
                        *probe = attempt;
                        k += 1;
                        continue;
                    }
                    _ => break,
                }
            }

            if is_closing_bracket(c.ch) {
                k += 1;
                continue;
            }
            break;
        }
        k
    }

    fn is_boundary(
        &self,
        kind: RunKind,
        text: &str,
        chars: &[ScannedChar],
        run_start: usize,
        next: Option<NextWord<'_>>,
    ) -> bool {
        // End of the paragraph always closes the sentence
        let Some(next) = next else {
            return true;
        };

        match kind {
            RunKind::Ellipsis => next.starts_uppercase(),
            RunKind::Hard => !next.starts_lowercase(),
            RunKind::Period => {
                let before = word_before(text, chars, run_start);
                if self.config.collocations.contains(before, next.word) {
                    false
                } else if self.is_abbreviated(before, next) {
                    self.config.sentence_starters.is_starter(next.word)
                } else {
                    !next.starts_lowercase()
                }
            }
        }
    }

    fn is_abbreviated(&self, word: &str, next: NextWord<'_>) -> bool {
        if word.is_empty() {
            return false;
        }
        // The pronoun "I" before a capitalised word ends the sentence
        if word == "I" && next.starts_uppercase() {
            return false;
        }
        self.config.abbreviations.contains(word) || is_initialism(word)
    }
}

/// The dotted word ending right before the period at `period` ("U.S", "Dr",
/// "11"), without leading dots.
fn word_before<'t>(text: &'t str, chars: &[ScannedChar], period: usize) -> &'t str {
    let mut start = period;
    while start > 0 {
        let c = chars[start - 1].ch;
        if c.is_alphanumeric() || c == '.' {
            start -= 1;
        } else {
            break;
        }
    }
    if start == period {
        return "";
    }
    text[chars[start].offset..chars[period].offset].trim_start_matches('.')
}

/// Find the first word after `from`, skipping whitespace, quotes, brackets
/// and dashes.
fn next_word<'t>(text: &'t str, chars: &[ScannedChar], from: usize) -> Option<NextWord<'t>> {
    let mut k = from;
    while k < chars.len() {
        let ch = chars[k].ch;
        let skippable = ch == ' '
            || ch == '\n'
            || quote_mark(ch).is_some()
            || is_opening_bracket(ch)
            || is_closing_bracket(ch)
            || matches!(classify(ch), PunctClass::Dash(_));
        if !skippable {
            break;
        }
        k += 1;
    }

    let first = chars.get(k)?;
    let mut end = k;
    while end < chars.len() && chars[end].ch.is_alphanumeric() {
        end += 1;
    }
    let word = if end > k {
        &text[first.offset..chars[end - 1].end()]
    } else {
        ""
    };

    Some(NextWord {
        first: first.ch,
        word,
    })
}

/// Detect sentences in `text` with `config`.
pub fn detect_sentences(text: &str, config: &SegmenterConfig) -> Vec<SentenceSegment> {
    SentenceDetector::new(config).detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        let config = SegmenterConfig::default();
        detect_sentences(text, &config)
            .into_iter()
            .map(|s| s.span.slice(text))
            .collect()
    }

    #[test]
    fn test_simple_sentences() {
        assert_eq!(
            sentences("Hello world. This is a test."),
            vec!["Hello world.", "This is a test."]
        );
    }

    #[test]
    fn test_unterminated_tail() {
        assert_eq!(
            sentences("First one. And then"),
            vec!["First one.", "And then"]
        );
    }

    #[test]
    fn test_initialism_not_split() {
        assert_eq!(
            sentences("I live in the U.S. now."),
            vec!["I live in the U.S. now."]
        );
    }

    #[test]
    fn test_abbreviation_followed_by_starter_splits() {
        assert_eq!(
            sentences("We toured the U.S. The trip was long."),
            vec!["We toured the U.S.", "The trip was long."]
        );
        assert_eq!(sentences("Ask Dr. Smith."), vec!["Ask Dr. Smith."]);
    }

    #[test]
    fn test_pronoun_i_ends_sentence() {
        assert_eq!(
            sentences("So did I. Nobody else did."),
            vec!["So did I.", "Nobody else did."]
        );
        assert_eq!(sentences("Ask J. Smith."), vec!["Ask J. Smith."]);
    }

    #[test]
    fn test_collocation_never_splits() {
        let config = SegmenterConfig::builder()
            .collocations([("Sept", "11"), ("Fig", "B")])
            .build()
            .unwrap();
        let text = "It was Sept. 11 again. See Fig. B for details.";
        let found: Vec<_> = detect_sentences(text, &config)
            .into_iter()
            .map(|s| s.span.slice(text))
            .collect();
        assert_eq!(found, vec!["It was Sept. 11 again.", "See Fig. B for details."]);

        assert_eq!(
            sentences("It was Sept. 11 again."),
            vec!["It was Sept.", "11 again."]
        );
    }

    #[test]
    fn test_quoted_terminator_deferred() {
        let config = SegmenterConfig::default();
        let text = "She said, \"Stop.\" He left.";
        let found = detect_sentences(text, &config);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].span.slice(text), "She said, \"Stop.\"");
        assert_eq!(found[1].span.slice(text), "He left.");
        assert!(!found[0].is_quoted);
    }

    #[test]
    fn test_quote_close_then_lowercase_continues() {
        assert_eq!(
            sentences("“Stop!” she shouted. Nobody moved."),
            vec!["“Stop!” she shouted.", "Nobody moved."]
        );
    }

    #[test]
    fn test_quoted_sentence_flag() {
        let config = SegmenterConfig::default();
        let text = "\"Go now.\" Then silence.";
        let found = detect_sentences(text, &config);
        assert_eq!(found.len(), 2);
        assert!(found[0].is_quoted);
        assert!(!found[1].is_quoted);
    }

    #[test]
    fn test_zero_lookahead_cuts_before_close_quote() {
        let config = SegmenterConfig::builder().quote_lookahead(0).build().unwrap();
        let text = "She said, \"Stop.\" He left.";
        let found: Vec<_> = detect_sentences(text, &config)
            .into_iter()
            .map(|s| s.span.slice(text))
            .collect();
        assert_eq!(found, vec!["She said, \"Stop.", "\" He left."]);
    }

    #[test]
    fn test_unbounded_lookahead() {
        let config = SegmenterConfig::builder()
            .quote_lookahead(usize::MAX)
            .build()
            .unwrap();
        let text = "She said, \"Stop.\" He left.";
        let found: Vec<_> = detect_sentences(text, &config)
            .into_iter()
            .map(|s| s.span.slice(text))
            .collect();
        assert_eq!(found, vec!["She said, \"Stop.\"", "He left."]);
    }

    #[test]
    fn test_ellipsis_continuation_by_case() {
        assert_eq!(sentences("Wait... really?"), vec!["Wait... really?"]);
        assert_eq!(
            sentences("I waited… Nobody came."),
            vec!["I waited…", "Nobody came."]
        );
    }

    #[test]
    fn test_glued_terminators() {
        assert_eq!(
            sentences("Pi is 3.14 or so. See example.com for more."),
            vec!["Pi is 3.14 or so.", "See example.com for more."]
        );
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(
            sentences("Really?! Yes. Fine..."),
            vec!["Really?!", "Yes.", "Fine..."]
        );
    }

    #[test]
    fn test_closing_bracket_absorbed() {
        assert_eq!(
            sentences("(It was late.) We left."),
            vec!["(It was late.)", "We left."]
        );
    }

    #[test]
    fn test_boundaries_partition_text() {
        let config = SegmenterConfig::default();
        let text = "One.  Two!  Three?  ";
        let cuts = SentenceDetector::new(&config).boundaries(text);
        assert_eq!(cuts.last().copied(), Some(text.len()));
        assert!(cuts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(cuts, vec![4, 10, 17, 20]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(sentences("").is_empty());
        assert!(sentences("   ").is_empty());
    }
}
