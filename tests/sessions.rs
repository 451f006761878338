use std::{fs, path::Path};

use boundread::{
    error::ReadError,
    kind::numeric::NumericKind,
    read_number,
    reader::source::Tokens,
};
use walkdir::WalkDir;

/// One scripted read: a kind, the tokens typed, and the expected outcome.
struct Session {
    kind:   NumericKind,
    input:  Vec<String>,
    expect: Result<String, String>,
}

#[test]
fn recorded_sessions_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let session = parse_session(path);
        count += 1;

        let mut input: Tokens = session.input.iter().map(String::as_str).collect();
        let mut output: Vec<String> = Vec::new();
        let result = read_number("> ", &mut input, &mut output, session.kind);

        match (&session.expect, result) {
            (Ok(expected), Ok(number)) => {
                assert_eq!(&number.to_string(), expected, "session {path:?}");
                assert_eq!(number.kind(), session.kind, "session {path:?}");
            },
            (Err(expected), Err(e)) => {
                assert_eq!(error_tag(&e), expected, "session {path:?}: {e}");
            },
            (expected, got) => panic!("session {path:?}: expected {expected:?}, got {got:?}"),
        }
    }

    assert!(count > 0, "No sessions found in tests/sessions");
}

fn parse_session(path: &Path) -> Session {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    let mut kind = None;
    let mut input = Vec::new();
    let mut expect = None;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')) {
        let (key, value) = line.split_once(':')
                               .unwrap_or_else(|| panic!("{path:?}: malformed line {line:?}"));
        let value = value.trim();
        match key.trim() {
            "kind" => kind = Some(value.parse().unwrap_or_else(|e| panic!("{path:?}: {e}"))),
            "input" => input.extend(value.split_whitespace().map(str::to_string)),
            "expect" => expect = Some(Ok(value.to_string())),
            "expect-error" => expect = Some(Err(value.to_string())),
            other => panic!("{path:?}: unknown key {other:?}"),
        }
    }

    Session { kind: kind.unwrap_or_else(|| panic!("{path:?}: missing kind")),
              input,
              expect: expect.unwrap_or_else(|| panic!("{path:?}: missing expectation")) }
}

const fn error_tag(e: &ReadError) -> &'static str {
    match e {
        ReadError::DescriptorInvalid(_) => "descriptor",
        ReadError::SourceExhausted(_) => "exhausted",
        ReadError::TruncationFailed { .. } => "truncation",
    }
}
