//! Sentence tokenizer
//!
//! Splits a sentence into [`Token`]s on whitespace and punctuation, with a
//! few merge rules:
//!
//! - letters joined by a hyphen or en dash with no space form one
//!   [`TokenKind::Hyphenated`] token ("second-choice");
//! - letters joined by an apostrophe form one [`TokenKind::Contraction`]
//!   ("don't", "waiter’s"); hyphenation wins when a word has both;
//! - digits with at most one internal `,` or `.` form one
//!   [`TokenKind::Number`];
//! - three or more dots form one ellipsis token;
//! - every other non-space, non-letter character is its own
//!   [`TokenKind::Punctuation`] token.
//!
//! A token never ends inside a grapheme cluster: combining marks stay with
//! the letter they decorate, so decomposed "cafe\u{301}" is one word.

use crate::classifier::{classify, PunctClass};
use crate::scanner::{cluster_continuations, ScannedChar, Scanner};
use crate::types::{Span, Token, TokenKind};

/// Stateless tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text`; token spans are shifted by `base`.
    pub fn tokenize(&self, text: &str, base: usize) -> Vec<Token> {
        let chars = Scanner::new(text).collect_chars();
        let continues = cluster_continuations(text, &chars);
        let mut tokens = Vec::with_capacity(chars.len() / 4 + 1);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                i += 1;
                continue;
            }

            let (mut end, kind) = if c.ch.is_alphabetic() {
                scan_word(&chars, &continues, i)
            } else if c.ch.is_numeric() {
                (scan_number(&chars, i), TokenKind::Number)
            } else if c.ch == '.' {
                (scan_dots(&chars, i), TokenKind::Punctuation)
            } else {
                (i + 1, TokenKind::Punctuation)
            };
            while continues.get(end).copied().unwrap_or(false) {
                end += 1;
            }

            let span = Span::new(c.offset, chars[end - 1].end()).offset(base);
            tokens.push(Token::new(span, kind));
            i = end;
        }

        tokens
    }
}

fn is_letter_at(chars: &[ScannedChar], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.ch.is_alphabetic())
}

fn scan_word(chars: &[ScannedChar], continues: &[bool], start: usize) -> (usize, TokenKind) {
    let mut end = start;
    let mut hyphenated = false;
    let mut contracted = false;

    loop {
        while is_letter_at(chars, end) || continues.get(end).copied().unwrap_or(false) {
            end += 1;
        }

        let Some(joint) = chars.get(end) else {
            break;
        };
        if !is_letter_at(chars, end + 1) {
            break;
        }

        match classify(joint.ch) {
            class if class.is_joining_dash() => hyphenated = true,
            PunctClass::Apostrophe => contracted = true,
            _ => break,
        }
        end += 1;
    }

    let kind = if hyphenated {
        TokenKind::Hyphenated
    } else if contracted {
        TokenKind::Contraction
    } else {
        TokenKind::Word
    };
    (end, kind)
}

fn scan_number(chars: &[ScannedChar], start: usize) -> usize {
    let is_digit_at = |i: usize| chars.get(i).is_some_and(|c| c.ch.is_numeric());

    let mut end = start;
    let mut separator_used = false;
    loop {
        while is_digit_at(end) {
            end += 1;
        }
        let separator = chars.get(end).is_some_and(|c| c.ch == ',' || c.ch == '.');
        if separator && !separator_used && is_digit_at(end + 1) {
            separator_used = true;
            end += 1;
            continue;
        }
        break;
    }
    end
}

fn scan_dots(chars: &[ScannedChar], start: usize) -> usize {
    let mut end = start;
    while chars.get(end).is_some_and(|c| c.ch == '.') {
        end += 1;
    }
    if end - start >= 3 {
        end
    } else {
        start + 1
    }
}

/// Tokenize `text` with offsets relative to it.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text, 0)
}
