//! Output sinks.
//!
//! A sink receives each rendered term. Drivers never print directly, so the
//! same driver can write to stdout, collect into memory, or throw the term
//! away after it has been computed.

use std::hint::black_box;
use std::io::{self, Write};

/// Accepts a rendered term and returns nothing.
pub trait Sink {
    fn emit(&mut self, term: &str);
}

impl<F> Sink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, term: &str) {
        self(term);
    }
}

/// Swallows every term.
///
/// The term is routed through [`black_box`] so the work of producing it
/// cannot be elided by the optimizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Sink for Discard {
    #[inline]
    fn emit(&mut self, term: &str) {
        black_box(term);
    }
}

/// Writes each term on its own line.
///
/// `emit` cannot fail, so the first I/O error is latched and every later term
/// is dropped. Call [`LineWriter::finish`] to surface it.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Writes a line that is not a term (the timing line, for instance).
    pub fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{line}") {
            self.error = Some(e);
        }
    }

    /// Flushes and returns the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Sink for LineWriter<W> {
    fn emit(&mut self, term: &str) {
        self.write_line(term);
    }
}

/// Keeps every term in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collect {
    terms: Vec<String>,
}

impl Collect {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }
}

impl Sink for Collect {
    fn emit(&mut self, term: &str) {
        self.terms.push(term.to_owned());
    }
}

/// Counts terms without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counting {
    count: u64,
}

impl Counting {
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Sink for Counting {
    fn emit(&mut self, term: &str) {
        black_box(term);
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that fails every write after the first `ok_writes`.
    #[derive(Debug)]
    struct FailAfter {
        ok_writes: usize,
        written: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.ok_writes == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.ok_writes -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_writer_terminates_each_term() {
        let mut sink = LineWriter::new(Vec::new());
        sink.emit("Fizz");
        sink.emit("4");
        sink.write_line("1.5µs");

        let out = sink.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Fizz\n4\n1.5µs\n");
    }

    #[test]
    fn line_writer_latches_first_error() {
        let mut sink = LineWriter::new(FailAfter {
            ok_writes: 0,
            written: Vec::new(),
        });
        sink.emit("1");
        sink.emit("2");

        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn line_writer_drops_terms_after_error() {
        let mut sink = LineWriter::new(FailAfter {
            ok_writes: 1,
            written: Vec::new(),
        });
        sink.emit("1");
        sink.emit("2");
        sink.emit("3");

        assert!(sink.error.is_some());
        assert!(sink.writer.written.starts_with(b"1"));
        assert!(!sink.writer.written.contains(&b'2'));
        assert!(!sink.writer.written.contains(&b'3'));
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |term: &str| seen.push(term.len());
            sink.emit("FizzBuzz");
            sink.emit("7");
        }
        assert_eq!(seen, vec![8, 1]);
    }

    #[test]
    fn counting_counts() {
        let mut sink = Counting::default();
        for _ in 0..3 {
            sink.emit("x");
        }
        assert_eq!(sink.count(), 3);
    }
}
