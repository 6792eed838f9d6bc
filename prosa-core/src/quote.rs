//! Quotation nesting tracker
//!
//! Depth is tracked per quotation family ([`QuoteMark`]). A close mark pops
//! the innermost open quotation of its family and anything opened inside it,
//! so a forgotten inner close does not leak depth past the outer close.

use crate::classifier::{quote_mark, resolve_quote, QuoteMark, QuoteSide};
use smallvec::SmallVec;

/// What a character did to the quotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteEvent {
    /// Not a quotation mark here (letters, apostrophes, other punctuation)
    None,
    /// Opened a quotation
    Opened(QuoteMark),
    /// Closed a quotation
    Closed(QuoteMark),
    /// A close mark with nothing of its family open
    Stray,
}

/// Stack of currently open quotations
#[derive(Debug, Clone, Default)]
pub struct QuoteTracker {
    stack: SmallVec<[QuoteMark; 4]>,
}

impl QuoteTracker {
    /// Create a tracker with nothing open
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nesting depth
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether any quotation is open
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Feed one character with its neighbours and update the nesting state.
    pub fn observe(
        &mut self,
        prev: Option<char>,
        ch: char,
        next: Option<char>,
    ) -> QuoteEvent {
        let Some((mark, _style)) = quote_mark(ch) else {
            return QuoteEvent::None;
        };

        match resolve_quote(prev, ch, next) {
            None => QuoteEvent::None,
            Some(QuoteSide::Open) => {
                self.stack.push(mark);
                QuoteEvent::Opened(mark)
            }
            Some(QuoteSide::Close) | Some(QuoteSide::Either) => {
                match self.stack.iter().rposition(|&q| q == mark) {
                    Some(index) => {
                        self.stack.truncate(index);
                        QuoteEvent::Closed(mark)
                    }
                    // "James' car": a lone single close is a possessive
                    None if mark == QuoteMark::Single => QuoteEvent::None,
                    None => QuoteEvent::Stray,
                }
            }
        }
    }
}
