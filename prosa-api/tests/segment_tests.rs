//! Error taxonomy and option handling at the API boundary

use prosa_api::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_invalid_utf8() {
    let err = segment(b"Fine so far. \xC3\x28 broken", &Options::default()).unwrap_err();
    assert!(matches!(err, ApiError::Encoding { position: 13 }));
}

#[test]
fn test_irregular_input_is_not_an_error() {
    let inputs: [&[u8]; 6] = [
        b"",
        b"No terminator at all",
        b"Unbalanced \"quote. Still fine.",
        b"Doubled!! Punctuation?? Here..",
        b"\xE2\x80\x9D Stray close quote.",
        b"(((Brackets",
    ];
    for input in inputs {
        let doc = segment(input, &Options::default());
        assert!(doc.is_ok(), "Failed for input: {:?}", String::from_utf8_lossy(input));
    }
}

#[test]
fn test_empty_abbreviation_rejected_before_segmenting() {
    let options = Options {
        extra_abbreviations: vec![String::new()],
        ..Options::default()
    };
    let err = segment(b"Dr. Who.", &options).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[test]
fn test_custom_abbreviations_change_boundaries() {
    let text = b"Measure approx. Ten units.";
    let default = segment(text, &Options::default()).unwrap();
    assert_eq!(default.sentence_count(), 2);

    let options = Options::builder()
        .extra_abbreviations(["approx"])
        .build()
        .unwrap();
    let custom = segment(text, &options).unwrap();
    assert_eq!(custom.sentence_count(), 1);
}

#[test]
fn test_quote_lookahead_option() {
    let text = b"She said, \"Stop.\" He left.";
    let options = Options::builder().quote_lookahead(0).build().unwrap();
    let doc = segment(text, &options).unwrap();
    let first = doc.sentences().next().unwrap();
    assert_eq!(first.text(), "She said, \"Stop.");

    let options = Options::builder().quote_lookahead(usize::MAX).build().unwrap();
    let doc = segment(text, &options).unwrap();
    let first = doc.sentences().next().unwrap();
    assert_eq!(first.text(), "She said, \"Stop.\"");
}

#[test]
fn test_collocations_option() {
    let text = b"Meet on Sept. 11 at noon.";
    assert_eq!(segment(text, &Options::default()).unwrap().sentence_count(), 2);

    let options = Options::builder()
        .collocations([("Sept", "11")])
        .build()
        .unwrap();
    assert_eq!(segment(text, &options).unwrap().sentence_count(), 1);
}

#[test]
fn test_cancellation() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = segment_with_cancel(b"One.\n\nTwo.", &Options::default(), &cancel).unwrap_err();
    assert!(matches!(err, ApiError::Cancelled { completed: 0 }));
}

#[test]
fn test_processor_reuse_and_file_input() {
    let processor = DocumentProcessor::new(&Options::default()).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "First file sentence. Second one.").unwrap();

    let from_file = processor.segment_file(file.path()).unwrap();
    let from_bytes = processor
        .segment(b"First file sentence. Second one.")
        .unwrap();
    assert_eq!(from_file, from_bytes);
    assert_eq!(from_file.sentence_count(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let processor = DocumentProcessor::new(&Options::default()).unwrap();
    let err = processor
        .segment_file("/definitely/not/here/essay.txt")
        .unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[cfg(feature = "serde")]
mod option_files {
    use super::*;

    #[test]
    fn test_options_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
abbreviations = ["Gen", "Col"]
sentence_starters = []
quote_lookahead = 1
paragraph_on_indent = true
execution_mode = "sequential"
"#
        )
        .unwrap();

        let options = Options::from_toml_file(file.path()).unwrap();
        assert_eq!(
            options.abbreviations,
            Some(vec!["Gen".to_string(), "Col".to_string()])
        );
        assert_eq!(options.sentence_starters, Some(Vec::new()));
        assert_eq!(options.execution_mode, Mode::Sequential);

        let doc = segment(b"Gen. Smith spoke.\n  Col. Ames replied.", &options).unwrap();
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "quote_lookahead = \"two\"").unwrap();

        let err = Options::from_toml_file(file.path()).unwrap_err();
        match err {
            ApiError::Configuration(message) => {
                assert!(message.contains(&file.path().display().to_string()))
            }
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_abbreviation_in_file() {
        let options = Options::from_toml_str(r#"extra_abbreviations = ["two words"]"#).unwrap();
        let err = segment(b"Text.", &options).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
