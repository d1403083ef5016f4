/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Closures for `text/html`.
//!
//! Besides the usual constructors, this module owns the named conversions
//! that bring other kinds into HTML: plain text is escaped, script and style
//! content is wrapped in its element.

use crate::append::Append;
use crate::closure::{Closure, GxpClosure, TypedClosure};
use crate::context::GxpContext;
use crate::css::CssClosure;
use crate::escape::{EscapingSink, Escaper, MarkupEscaper};
use crate::js::JavascriptClosure;
use crate::kind::Html;
use crate::localizable::Localizable;
use crate::sink::Sink;
use crate::text::PlaintextClosure;

pub type HtmlClosure = TypedClosure<Html>;

/// Emit `value` into HTML output.
pub fn append<T: Append<Html> + ?Sized>(out: &mut dyn Sink, ctx: &GxpContext, value: &T) {
    value.append(out, ctx);
}

/// A closure that renders nothing.
pub fn empty() -> HtmlClosure {
    HtmlClosure::empty()
}

/// A closure emitting `html` as-is. The caller vouches that it is
/// well-formed markup.
pub fn from_html(html: impl Into<String>) -> HtmlClosure {
    HtmlClosure::wrap(GxpClosure::from_string(html))
}

/// A closure emitting the HTML-escaped form of `text`.
///
/// Compiled templates escape on their own; this is for hand-written callers.
pub fn from_plaintext(text: impl Into<String>) -> HtmlClosure {
    let text = text.into();
    HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        MarkupEscaper::for_context(ctx).escape_str(&text, out);
    })
}

/// A closure emitting `value`, localized and HTML-escaped.
pub fn from_localizable(value: impl Localizable + 'static) -> HtmlClosure {
    HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        MarkupEscaper::for_context(ctx).escape_str(&value.to_localized_string(ctx.locale()), out);
    })
}

/// A closure rendering each of `closures` in order.
pub fn concat(closures: impl IntoIterator<Item = HtmlClosure>) -> HtmlClosure {
    HtmlClosure::concat(closures)
}

/// Embed plain text in HTML, escaping everything it renders.
pub fn from_plaintext_closure(closure: PlaintextClosure) -> HtmlClosure {
    markup_escaped(closure.into_untyped())
}

/// Embed a script in HTML as a `<script>` element.
pub fn script(closure: JavascriptClosure) -> HtmlClosure {
    HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        out.append_literal("<script type=\"text/javascript\">\n");
        closure.write(out, ctx);
        out.append_literal("\n</script>");
    })
}

/// Embed a script in an HTML attribute value (e.g. `onclick`), escaping
/// everything it renders.
///
/// The caller writes the surrounding `name="` and `"`.
pub fn javascript_attr(closure: JavascriptClosure) -> HtmlClosure {
    markup_escaped(closure.into_untyped())
}

/// Embed a stylesheet in HTML as a `<style>` element.
pub fn style(closure: CssClosure) -> HtmlClosure {
    HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        out.append_literal("<style type=\"text/css\">\n");
        closure.write(out, ctx);
        out.append_literal("\n</style>");
    })
}

fn markup_escaped(closure: GxpClosure) -> HtmlClosure {
    HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        let mut escaped = EscapingSink::new(out, MarkupEscaper::for_context(ctx));
        closure.write(&mut escaped, ctx);
    })
}
