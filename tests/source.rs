use std::io::{self, BufReader, Cursor, Read};

use boundread::{
    error::{ReadError, SourceError},
    reader::{
        core::{BoundedNumberReader, ReaderConfig},
        sink::{OutputSink, WriteSink},
        source::{InputSource, TokenReader},
    },
};

/// Fails every read.
struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

#[test]
fn token_reader_splits_lines_on_whitespace() {
    let mut source = TokenReader::new(Cursor::new("  12 \t abc\n\n\n-3.5e2\r\n  last"));

    let mut seen = Vec::new();
    loop {
        match source.next_token() {
            Ok(token) => seen.push(token),
            Err(SourceError::EndOfInput) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(seen, vec!["12", "abc", "-3.5e2", "last"]);
}

#[test]
fn token_reader_keeps_reporting_end_of_input() {
    let mut source = TokenReader::new(Cursor::new(""));
    assert!(matches!(source.next_token(), Err(SourceError::EndOfInput)));
    assert!(matches!(source.next_token(), Err(SourceError::EndOfInput)));
}

#[test]
fn read_failures_surface_as_exhaustion() {
    let mut source = TokenReader::new(BufReader::new(Broken));
    let mut output: Vec<String> = Vec::new();

    let err = BoundedNumberReader::default().read_as::<i32>("> ", &mut source, &mut output)
                                            .unwrap_err();

    assert!(matches!(err, ReadError::SourceExhausted(SourceError::Io(_))));
    assert!(err.to_string().contains("device unplugged"));
}

#[test]
fn reader_consumes_only_what_it_needs() {
    let mut source = TokenReader::new(Cursor::new("x 5 6\n7\n"));
    let mut output: Vec<String> = Vec::new();

    let first: u8 = BoundedNumberReader::default().read_as("> ", &mut source, &mut output)
                                                  .unwrap();
    let second: u8 = BoundedNumberReader::default().read_as("> ", &mut source, &mut output)
                                                   .unwrap();

    assert_eq!((first, second), (5, 6));
    assert_eq!(source.next_token().unwrap(), "7");
}

#[test]
fn invalid_utf8_is_rejected_as_a_token_not_the_stream() {
    let mut source = TokenReader::new(Cursor::new(&b"\xff\xfe garbage\n4\xff2\n42\n"[..]));
    let mut output: Vec<String> = Vec::new();
    let reader = BoundedNumberReader::new(ReaderConfig::default().with_echo_rejections(true));

    let value: i32 = reader.read_as("> ", &mut source, &mut output).unwrap();

    assert_eq!(value, 42);
    assert_eq!(output[2], "\"\u{fffd}\u{fffd}\" is not a decimal number");
    assert!(matches!(source.next_token(), Err(SourceError::EndOfInput)));
}

#[test]
fn write_sink_keeps_prompts_on_one_line() {
    let mut sink = WriteSink::new(Vec::new());
    sink.write_line("min: 0\tmax: 255");
    sink.write_prompt("Enter a u8: ");
    sink.write_prompt("Enter a u8: ");

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "min: 0\tmax: 255\nEnter a u8: Enter a u8: ");
}

#[test]
fn transcript_records_prompts_as_lines() {
    let mut transcript: Vec<String> = Vec::new();
    transcript.write_prompt("> ");
    transcript.write_line("done");
    assert_eq!(transcript, vec!["> ", "done"]);
}
