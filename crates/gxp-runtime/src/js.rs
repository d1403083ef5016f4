/*
 * js.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Closures for `text/javascript`.
//!
//! Strings appended into script output become quoted string literals whose
//! contents are hex-escaped, so the result is also safe inside HTML event
//! handler attributes once markup-escaped.

use crate::append::Append;
use crate::closure::{GxpClosure, TypedClosure};
use crate::context::GxpContext;
use crate::kind::Javascript;
use crate::sink::Sink;

pub type JavascriptClosure = TypedClosure<Javascript>;

/// Emit `value` into script output.
pub fn append<T: Append<Javascript> + ?Sized>(out: &mut dyn Sink, ctx: &GxpContext, value: &T) {
    value.append(out, ctx);
}

pub fn empty() -> JavascriptClosure {
    JavascriptClosure::empty()
}

/// A closure emitting `js` as literal script source.
pub fn from_javascript(js: impl Into<String>) -> JavascriptClosure {
    JavascriptClosure::wrap(GxpClosure::from_string(js))
}

/// A closure emitting `text` as a quoted string literal.
pub fn string_literal(text: impl Into<String>) -> JavascriptClosure {
    let text = text.into();
    JavascriptClosure::new(move |out: &mut dyn Sink, _: &GxpContext| {
        crate::append::write_javascript_string(&text, out);
    })
}

pub fn concat(closures: impl IntoIterator<Item = JavascriptClosure>) -> JavascriptClosure {
    JavascriptClosure::concat(closures)
}
