//! Structural properties that hold for any input

use prosa_core::{segment_paragraph, split_paragraphs, SegmenterConfig, SentenceDetector};
use proptest::prelude::*;

fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[A-Za-z0-9 .,;:!?'"()\n…“”‘’—-]{0,200}"#).unwrap()
}

fn non_space_bytes(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}

proptest! {
    #[test]
    fn prop_boundaries_partition_paragraph(text in prose()) {
        let config = SegmenterConfig::default();
        let cuts = SentenceDetector::new(&config).boundaries(&text);

        if text.is_empty() {
            prop_assert!(cuts.is_empty());
        } else {
            prop_assert_eq!(cuts.last().copied(), Some(text.len()));
        }
        for pair in cuts.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for cut in &cuts {
            prop_assert!(text.is_char_boundary(*cut));
        }
    }

    #[test]
    fn prop_sentences_cover_all_content(text in prose()) {
        let config = SegmenterConfig::default();
        let mut covered = 0;
        let mut last_end = 0;

        for paragraph in split_paragraphs(&text, &config) {
            prop_assert!(paragraph.start >= last_end);
            let segmented = segment_paragraph(&text, paragraph, &config);
            for sentence in &segmented.sentences {
                let span = sentence.segment.span;
                prop_assert!(span.start >= last_end);
                prop_assert!(!span.is_empty());
                prop_assert!(paragraph.start <= span.start && span.end <= paragraph.end);
                covered += non_space_bytes(span.slice(&text));
                last_end = span.end;
            }
        }

        prop_assert_eq!(covered, non_space_bytes(&text));
    }

    #[test]
    fn prop_tokens_are_monotonic_and_complete(text in prose()) {
        let config = SegmenterConfig::default();
        let mut previous_end = 0;

        for paragraph in split_paragraphs(&text, &config) {
            for sentence in segment_paragraph(&text, paragraph, &config).sentences {
                let span = sentence.segment.span;
                let mut token_bytes = 0;
                for token in &sentence.tokens {
                    prop_assert!(token.span.start >= previous_end);
                    prop_assert!(span.start <= token.span.start && token.span.end <= span.end);
                    prop_assert!(!token.span.is_empty());
                    token_bytes += token.span.len();
                    previous_end = token.span.end;
                }
                prop_assert_eq!(token_bytes, non_space_bytes(span.slice(&text)));
            }
        }
    }
}
