/*
 * rss.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Closures for `application/rss+xml`.
//!
//! RSS carries HTML as escaped text, so the only way to embed an HTML closure
//! is [`from_html_closure`], which escapes everything it renders.

use crate::append::Append;
use crate::closure::{Closure, GxpClosure, TypedClosure};
use crate::context::GxpContext;
use crate::escape::{EscapingSink, MarkupEscaper};
use crate::html::HtmlClosure;
use crate::kind::Rss;
use crate::sink::Sink;

pub type RssClosure = TypedClosure<Rss>;

/// Emit `value` into RSS output.
pub fn append<T: Append<Rss> + ?Sized>(out: &mut dyn Sink, ctx: &GxpContext, value: &T) {
    value.append(out, ctx);
}

pub fn empty() -> RssClosure {
    RssClosure::empty()
}

/// A closure emitting `rss` as-is.
pub fn from_rss(rss: impl Into<String>) -> RssClosure {
    RssClosure::wrap(GxpClosure::from_string(rss))
}

pub fn concat(closures: impl IntoIterator<Item = RssClosure>) -> RssClosure {
    RssClosure::concat(closures)
}

/// Embed HTML in RSS as escaped text.
pub fn from_html_closure(closure: HtmlClosure) -> RssClosure {
    RssClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        let mut escaped = EscapingSink::new(out, MarkupEscaper::for_context(ctx));
        closure.write(&mut escaped, ctx);
    })
}
