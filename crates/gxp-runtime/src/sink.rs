/*
 * sink.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Output sinks for rendered template text.
//!
//! A [`Sink`] is an append-only text destination. Generated template code
//! writes every fragment it produces through this trait, so the same template
//! can render into an in-memory buffer, a byte stream, or a [`fmt::Formatter`]
//! without knowing which.
//!
//! Sinks never escape, normalize, or reject content. Escaping belongs to the
//! rendering unit that calls the sink (see [`crate::escape`]).

use std::fmt;
use std::io;

use crate::error::{GxpError, GxpResult};

/// An append-only destination for rendered text.
///
/// All three append operations have the same observable effect: the
/// argument's characters are appended, in order, to the sink's output.
/// None of them can fail. Sinks backed by fallible destinations latch the
/// first failure and report it when drained (see [`IoSink::finish`]).
pub trait Sink {
    /// Append a single character.
    fn append_char(&mut self, c: char);

    /// Append runtime text.
    fn append_str(&mut self, s: &str);

    /// Append fixed text known at compile time.
    ///
    /// Generated templates emit their literal markup through this method.
    /// Destinations that can hold on to `'static` data may override it.
    fn append_literal(&mut self, s: &'static str) {
        self.append_str(s);
    }

    /// Append formatted text.
    ///
    /// Avoids an intermediate allocation when `args` is a plain literal.
    fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(s) => self.append_str(s),
            None => self.append_str(&args.to_string()),
        }
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn append_char(&mut self, c: char) {
        (**self).append_char(c);
    }

    fn append_str(&mut self, s: &str) {
        (**self).append_str(s);
    }

    fn append_literal(&mut self, s: &'static str) {
        (**self).append_literal(s);
    }

    fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).append_fmt(args);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append_char(&mut self, c: char) {
        (**self).append_char(c);
    }

    fn append_str(&mut self, s: &str) {
        (**self).append_str(s);
    }

    fn append_literal(&mut self, s: &'static str) {
        (**self).append_literal(s);
    }

    fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).append_fmt(args);
    }
}

/// Sink that appends onto a caller-owned `String`.
///
/// The sink borrows the buffer; it never copies or takes ownership of it.
/// The borrow ends when the sink is dropped, at which point the caller has
/// the buffer back with everything that was appended.
#[derive(Debug)]
pub struct StringSink<'a> {
    buf: &'a mut String,
}

impl<'a> StringSink<'a> {
    /// Create a sink over `buf`. Existing contents are kept.
    pub fn new(buf: &'a mut String) -> Self {
        Self { buf }
    }
}

impl Sink for StringSink<'_> {
    fn append_char(&mut self, c: char) {
        self.buf.push(c);
    }

    fn append_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }
}

/// Sink over a byte stream.
///
/// Text is written as UTF-8. The first I/O error is latched: later appends
/// are dropped, and [`IoSink::finish`] returns the error.
pub struct IoSink<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Create a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// The latched I/O error, if any append has failed.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Flush the writer and hand it back, or report the latched error.
    pub fn finish(mut self) -> GxpResult<W> {
        if let Some(err) = self.error.take() {
            return Err(GxpError::Io(err));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(bytes) {
            tracing::warn!(error = %err, "output stream failed; dropping remaining output");
            self.error = Some(err);
        }
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.write_bytes(c.encode_utf8(&mut utf8).as_bytes());
    }

    fn append_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

/// Sink over a [`fmt::Formatter`], used to implement `Display` adapters.
///
/// Latches the first [`fmt::Error`] the same way [`IoSink`] does.
pub struct FmtSink<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl<'a, 'b> FmtSink<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, result: Ok(()) }
    }

    /// The formatting result after all appends.
    pub fn finish(self) -> fmt::Result {
        self.result
    }
}

impl Sink for FmtSink<'_, '_> {
    fn append_char(&mut self, c: char) {
        if self.result.is_ok() {
            self.result = fmt::Write::write_char(self.f, c);
        }
    }

    fn append_str(&mut self, s: &str) {
        if self.result.is_ok() {
            self.result = self.f.write_str(s);
        }
    }
}
