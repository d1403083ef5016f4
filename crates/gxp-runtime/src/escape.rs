/*
 * escape.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Escaping for content kinds.
//!
//! An [`Escaper`] decides which characters must be rewritten for a given
//! output vocabulary and how. [`EscapingSink`] composes an escaper with any
//! other sink, so content of one kind can be streamed into output of another
//! without an intermediate buffer.

use crate::context::{Charset, GxpContext};
use crate::sink::Sink;

/// Rewrites characters that are unsafe in some output vocabulary.
pub trait Escaper {
    /// Check whether `c` must be rewritten.
    fn needs_escape(&self, c: char) -> bool;

    /// Write the escaped form of `c`. Only called when
    /// [`needs_escape`](Escaper::needs_escape) returned true.
    fn write_escape(&self, c: char, out: &mut dyn Sink);

    /// Write `s` to `out`, escaping as needed.
    ///
    /// Runs of characters that need no escaping are forwarded in a single
    /// `append_str` call.
    fn escape_str(&self, s: &str, out: &mut dyn Sink) {
        let mut run_start = 0;
        for (i, c) in s.char_indices() {
            if self.needs_escape(c) {
                if run_start < i {
                    out.append_str(&s[run_start..i]);
                }
                self.write_escape(c, out);
                run_start = i + c.len_utf8();
            }
        }
        if run_start < s.len() {
            out.append_str(&s[run_start..]);
        }
    }

    /// Write `c` to `out`, escaping as needed.
    fn escape_char(&self, c: char, out: &mut dyn Sink) {
        if self.needs_escape(c) {
            self.write_escape(c, out);
        } else {
            out.append_char(c);
        }
    }
}

/// Sink that escapes everything appended to it before forwarding.
pub struct EscapingSink<'a, E: Escaper> {
    inner: &'a mut dyn Sink,
    escaper: E,
}

impl<'a, E: Escaper> EscapingSink<'a, E> {
    pub fn new(inner: &'a mut dyn Sink, escaper: E) -> Self {
        Self { inner, escaper }
    }
}

impl<E: Escaper> Sink for EscapingSink<'_, E> {
    fn append_char(&mut self, c: char) {
        self.escaper.escape_char(c, self.inner);
    }

    fn append_str(&mut self, s: &str) {
        self.escaper.escape_str(s, self.inner);
    }
}

/// Escaper that rewrites nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEscaper;

impl Escaper for NullEscaper {
    fn needs_escape(&self, _c: char) -> bool {
        false
    }

    fn write_escape(&self, c: char, out: &mut dyn Sink) {
        out.append_char(c);
    }
}

/// Escaper for HTML and XML text and attribute values.
///
/// Characters the target charset cannot encode become numeric character
/// references.
#[derive(Debug, Clone, Copy)]
pub struct MarkupEscaper {
    charset: Charset,
}

impl MarkupEscaper {
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    /// Escaper for the charset of `ctx`.
    pub fn for_context(ctx: &GxpContext) -> Self {
        Self::new(ctx.charset())
    }
}

impl Escaper for MarkupEscaper {
    fn needs_escape(&self, c: char) -> bool {
        matches!(c, '&' | '<' | '>' | '"' | '\'') || !self.charset.can_encode(c)
    }

    fn write_escape(&self, c: char, out: &mut dyn Sink) {
        match c {
            '&' => out.append_literal("&amp;"),
            '<' => out.append_literal("&lt;"),
            '>' => out.append_literal("&gt;"),
            '"' => out.append_literal("&quot;"),
            '\'' => out.append_literal("&#39;"),
            _ => out.append_fmt(format_args!("&#{};", c as u32)),
        }
    }
}

/// Escaper for the body of a double- or single-quoted JavaScript string.
///
/// Markup-significant characters are hex-escaped so the literal is also safe
/// inside HTML attributes and `<script>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavascriptEscaper;

impl Escaper for JavascriptEscaper {
    fn needs_escape(&self, c: char) -> bool {
        matches!(
            c,
            '"' | '\'' | '<' | '>' | '&' | '=' | '\\' | '\u{2028}' | '\u{2029}'
        ) || c.is_control()
    }

    fn write_escape(&self, c: char, out: &mut dyn Sink) {
        match c {
            '\\' => out.append_literal("\\\\"),
            '\n' => out.append_literal("\\n"),
            '\r' => out.append_literal("\\r"),
            '\t' => out.append_literal("\\t"),
            '\u{8}' => out.append_literal("\\b"),
            '\u{c}' => out.append_literal("\\f"),
            c if (c as u32) < 0x100 => out.append_fmt(format_args!("\\x{:02x}", c as u32)),
            c => out.append_fmt(format_args!("\\u{:04x}", c as u32)),
        }
    }
}

/// Escaper for the body of a quoted CSS string.
///
/// `<` is hex-escaped so a string cannot close an enclosing `<style>`
/// element.
///
/// Hex escapes carry a trailing space so they cannot swallow a following hex
/// digit or whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssStringEscaper;

impl Escaper for CssStringEscaper {
    fn needs_escape(&self, c: char) -> bool {
        matches!(c, '\\' | '\n' | '\'' | '"' | '<')
    }

    fn write_escape(&self, c: char, out: &mut dyn Sink) {
        match c {
            '\\' => out.append_literal("\\\\"),
            '\n' => out.append_literal("\\a "),
            '<' => out.append_literal("\\3c "),
            '\'' => out.append_literal("\\'"),
            _ => out.append_literal("\\\""),
        }
    }
}
