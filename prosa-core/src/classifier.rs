//! Punctuation classification
//!
//! [`classify`] is a pure function of one codepoint. Typographic marks map to
//! the same roles as their ASCII counterparts: `“ ”` behave like `"`, `‘ ’`
//! like `'`, and `—`/`–` are dashes just like `-`.
//!
//! Straight quotes carry no direction of their own, so they classify as
//! [`QuoteSide::Either`]; [`resolve_quote`] picks a side from the
//! neighbouring characters.

/// Which side of a quotation a mark sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    /// Opening mark
    Open,
    /// Closing mark
    Close,
    /// Symmetric straight mark, side decided from context
    Either,
}

/// Typographic style of a quotation mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    /// ASCII `"` and `'`
    Straight,
    /// `“ ” ‘ ’`
    Curly,
}

/// Quotation family; nesting depth is tracked per family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteMark {
    /// `"` `“` `”`
    Double,
    /// `'` `‘` `’`
    Single,
}

/// Dash flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashKind {
    /// `-` and the Unicode hyphens
    Hyphen,
    /// `–`
    EnDash,
    /// `—` and the horizontal bar
    EmDash,
}

/// Punctuation role of a codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctClass {
    /// Not a punctuation mark this engine gives a role to
    None,
    /// `.` `!` `?`
    SentenceTerminator(char),
    /// Quotation mark
    Quote {
        /// Opening, closing or symmetric
        side: QuoteSide,
        /// Straight or curly
        style: QuoteStyle,
        /// Double or single family
        mark: QuoteMark,
    },
    /// Hyphen or dash
    Dash(DashKind),
    /// `'` or `’`; may also close a single quotation, see [`resolve_quote`]
    Apostrophe,
    /// `…`
    Ellipsis,
}

impl PunctClass {
    /// Whether this is a sentence terminator
    #[inline]
    pub fn is_terminator(&self) -> bool {
        matches!(self, PunctClass::SentenceTerminator(_))
    }

    /// Whether this is any quotation mark (apostrophes excluded)
    #[inline]
    pub fn is_quote(&self) -> bool {
        matches!(self, PunctClass::Quote { .. })
    }

    /// Whether this dash may join two words into one token
    #[inline]
    pub fn is_joining_dash(&self) -> bool {
        matches!(
            self,
            PunctClass::Dash(DashKind::Hyphen) | PunctClass::Dash(DashKind::EnDash)
        )
    }
}

/// Classify a single codepoint.
pub fn classify(ch: char) -> PunctClass {
    match ch {
        '.' | '!' | '?' => PunctClass::SentenceTerminator(ch),
        '…' => PunctClass::Ellipsis,
        '"' => PunctClass::Quote {
            side: QuoteSide::Either,
            style: QuoteStyle::Straight,
            mark: QuoteMark::Double,
        },
        '“' => PunctClass::Quote {
            side: QuoteSide::Open,
            style: QuoteStyle::Curly,
            mark: QuoteMark::Double,
        },
        '”' => PunctClass::Quote {
            side: QuoteSide::Close,
            style: QuoteStyle::Curly,
            mark: QuoteMark::Double,
        },
        '‘' => PunctClass::Quote {
            side: QuoteSide::Open,
            style: QuoteStyle::Curly,
            mark: QuoteMark::Single,
        },
        '\'' | '’' => PunctClass::Apostrophe,
        '-' | '\u{2010}' | '\u{2011}' => PunctClass::Dash(DashKind::Hyphen),
        '–' => PunctClass::Dash(DashKind::EnDash),
        '—' | '\u{2015}' => PunctClass::Dash(DashKind::EmDash),
        _ => PunctClass::None,
    }
}

/// Closing brackets absorbed into a sentence after its terminator
#[inline]
pub fn is_closing_bracket(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Opening brackets skipped when looking for the next word
#[inline]
pub fn is_opening_bracket(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// The quotation family and style of a mark that can act as a quote.
///
/// Apostrophe characters count here because they double as single quotes.
pub fn quote_mark(ch: char) -> Option<(QuoteMark, QuoteStyle)> {
    match ch {
        '"' => Some((QuoteMark::Double, QuoteStyle::Straight)),
        '“' | '”' => Some((QuoteMark::Double, QuoteStyle::Curly)),
        '\'' => Some((QuoteMark::Single, QuoteStyle::Straight)),
        '‘' | '’' => Some((QuoteMark::Single, QuoteStyle::Curly)),
        _ => None,
    }
}

/// Decide what a potential quotation mark does at its position.
///
/// Returns `None` when the mark is an apostrophe inside a word ("don't") or
/// an elision before a digit ("'90s"), otherwise the side it plays.
pub fn resolve_quote(prev: Option<char>, ch: char, next: Option<char>) -> Option<QuoteSide> {
    let prev_is_letter = prev.is_some_and(char::is_alphanumeric);
    let next_is_letter = next.is_some_and(char::is_alphabetic);

    match classify(ch) {
        PunctClass::Quote {
            side: QuoteSide::Open,
            ..
        } => Some(QuoteSide::Open),
        PunctClass::Quote {
            side: QuoteSide::Close,
            ..
        } => Some(QuoteSide::Close),
        PunctClass::Quote {
            side: QuoteSide::Either,
            ..
        } => Some(side_from_context(prev, next)),
        PunctClass::Apostrophe => {
            if prev_is_letter && next_is_letter {
                return None;
            }
            if next.is_some_and(|c| c.is_numeric()) && !prev_is_letter {
                return None;
            }
            match side_from_context(prev, next) {
                // A right mark in opening position is an elision ("’tis")
                QuoteSide::Open if ch == '’' => None,
                side => Some(side),
            }
        }
        _ => None,
    }
}

fn side_from_context(prev: Option<char>, next: Option<char>) -> QuoteSide {
    let opens_after = |c: char| {
        c.is_whitespace()
            || is_opening_bracket(c)
            || matches!(classify(c), PunctClass::Dash(_))
            || matches!(
                classify(c),
                PunctClass::Quote {
                    side: QuoteSide::Open,
                    ..
                }
            )
    };

    match prev {
        None => QuoteSide::Open,
        Some(c) if opens_after(c) => {
            if next.map_or(true, char::is_whitespace) {
                QuoteSide::Close
            } else {
                QuoteSide::Open
            }
        }
        Some(_) => QuoteSide::Close,
    }
}
