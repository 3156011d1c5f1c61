//! Output sink crate: line-oriented text output for formatted values
//!
//! The formatter stays pure; hosts hand it results and an explicit sink.
//! Sinks only write lines in call order; they apply no formatting policy.

pub use numfmt_core::{FormatOptions, FormattedValue};

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Line-oriented text consumer. Each call writes `text` followed by a
/// line terminator.
pub trait OutputSink {
    fn write_line(&mut self, text: &str) -> SinkResult<()>;

    fn flush(&mut self) -> SinkResult<()> {
        Ok(())
    }
}

/// Sink over any `io::Write`, e.g. stdout
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    inner: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        StreamSink { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        StreamSink::new(io::stdout())
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn write_line(&mut self, text: &str) -> SinkResult<()> {
        writeln!(self.inner, "{}", text)?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Sink that keeps every line in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with `\n`, trailing terminator included
    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, text: &str) -> SinkResult<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}

/// Write a formatted value as its own line
pub fn emit<S: OutputSink + ?Sized>(sink: &mut S, value: &FormattedValue) -> SinkResult<()> {
    sink.write_line(&value.text)
}

/// Write `label` immediately followed by the formatted value
pub fn emit_labelled<S: OutputSink + ?Sized>(
    sink: &mut S,
    label: &str,
    value: &FormattedValue,
) -> SinkResult<()> {
    tracing::trace!(label, text = %value.text, "emit");
    sink.write_line(&format!("{}{}", label, value.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use numfmt_core::{Base, NumberFormatter};

    #[test]
    fn stream_sink_terminates_lines() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write_line("Go through!").expect("write failed");
        sink.write_line("").expect("write failed");
        assert_eq!(sink.into_inner(), b"Go through!\n\n".to_vec());
    }

    #[test]
    fn memory_sink_keeps_call_order() {
        let mut sink = MemorySink::new();
        let opts = FormatOptions::with_base(Base::Hexadecimal);
        for v in [10, 11, 12] {
            let out = NumberFormatter::format(v, &opts).expect("format failed");
            emit(&mut sink, &out).expect("emit failed");
        }
        assert_eq!(sink.lines(), ["a", "b", "c"]);
        assert_eq!(sink.contents(), "a\nb\nc\n");
    }

    #[test]
    fn labelled_lines_concatenate() {
        let mut sink = MemorySink::new();
        let out = NumberFormatter::format(65, &FormatOptions::new().as_character(true))
            .expect("format failed");
        emit_labelled(&mut sink, "value: ", &out).expect("emit failed");
        assert_eq!(sink.lines(), ["value: A"]);
    }

    #[test]
    fn io_failure_surfaces_as_sink_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut sink = StreamSink::new(Broken);
        let err = sink.write_line("x").expect_err("write should fail");
        assert!(matches!(err, SinkError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
