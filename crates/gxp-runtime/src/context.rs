/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Implicit rendering context.
//!
//! A [`GxpContext`] carries the ambient parameters every template receives
//! without declaring them: the locale, whether markup is emitted with XML
//! syntax, and the charset output is escaped into.
//!
//! The context is immutable once built. It is passed by reference as the last
//! argument of every render call, so any number of nested or concurrent
//! renders can share one instance.

use serde::{Deserialize, Serialize};

use crate::closure::Closure;
use crate::sink::StringSink;

/// Character set that rendered output will be encoded into.
///
/// Markup escapers emit numeric character references for characters the
/// charset cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    #[default]
    UsAscii,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
    #[serde(rename = "utf-8")]
    Utf8,
}

impl Charset {
    /// Check whether `c` can be written in this charset unescaped.
    pub fn can_encode(self, c: char) -> bool {
        match self {
            Charset::UsAscii => c.is_ascii(),
            Charset::Iso8859_1 => (c as u32) < 0x100,
            Charset::Utf8 => true,
        }
    }

    /// The IANA name of this charset.
    pub fn name(self) -> &'static str {
        match self {
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf8 => "UTF-8",
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// Ambient parameters implicitly passed to every template.
///
/// The context can be deserialized from host configuration:
///
/// ```ignore
/// let ctx: GxpContext = serde_json::from_str(
///     r#"{ "locale": "fr-CA", "use-xml-syntax": true, "charset": "utf-8" }"#,
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GxpContext {
    #[serde(default = "default_locale")]
    locale: String,

    #[serde(default)]
    use_xml_syntax: bool,

    #[serde(default)]
    charset: Charset,
}

impl GxpContext {
    /// Create a context emitting SGML-style markup in US-ASCII.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            use_xml_syntax: false,
            charset: Charset::UsAscii,
        }
    }

    /// Create a context emitting XML-style markup in US-ASCII.
    pub fn xml(locale: impl Into<String>) -> Self {
        Self::new(locale).with_xml_syntax(true)
    }

    /// Return a copy of this context with XML syntax switched on or off.
    pub fn with_xml_syntax(mut self, use_xml_syntax: bool) -> Self {
        self.use_xml_syntax = use_xml_syntax;
        self
    }

    /// Return a copy of this context escaping into `charset`.
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// The locale tag templates localize into (e.g. `"en-US"`).
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether markup must be strict XML (self-closing void elements,
    /// valued boolean attributes) rather than SGML.
    pub fn is_using_xml_syntax(&self) -> bool {
        self.use_xml_syntax
    }

    /// The charset output is escaped into.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Render `closure` in this context into a new string.
    pub fn get_string(&self, closure: &dyn Closure) -> String {
        let mut buf = String::new();
        closure.write(&mut StringSink::new(&mut buf), self);
        tracing::trace!(
            len = buf.len(),
            charset = self.charset.name(),
            "materialized closure"
        );
        buf
    }

    /// Check whether `closure` is absent or renders only whitespace.
    pub fn is_empty_or_whitespace(&self, closure: Option<&dyn Closure>) -> bool {
        match closure {
            Some(closure) => self.get_string(closure).chars().all(char::is_whitespace),
            None => true,
        }
    }
}

impl Default for GxpContext {
    fn default() -> Self {
        Self::new(default_locale())
    }
}
