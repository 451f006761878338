use std::io::Write;

use log::warn;

/// Destination for prompts and diagnostics.
///
/// Writing never fails from the reader's point of view; a sink that can fail
/// deals with the failure itself.
pub trait OutputSink {
    /// Writes one line of text.
    fn write_line(&mut self, text: &str);

    /// Writes a prompt. Interactive sinks keep the cursor on the same line.
    fn write_prompt(&mut self, text: &str) {
        self.write_line(text);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }

    fn write_prompt(&mut self, text: &str) {
        (**self).write_prompt(text);
    }
}

/// Collects every line, prompts included, as a transcript.
impl OutputSink for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Writes to any `io::Write`, such as stdout or a file.
///
/// Prompts are written without a trailing newline and flushed immediately.
/// I/O failures are logged and otherwise ignored.
pub struct WriteSink<W> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            warn!("could not write line to output: {e}");
        }
    }

    fn write_prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            warn!("could not write prompt to output: {e}");
        }
    }
}
