/*
 * closure.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Bound rendering units.
//!
//! A closure is a template with all of its declared parameters already
//! supplied. Only the output sink and the implicit context are left open, so
//! a closure can be handed around and rendered later, any number of times.
//!
//! - [`Closure`] is the rendering interface. Any
//!   `Fn(&mut dyn Sink, &GxpContext) + Send + Sync` implements it.
//! - [`GxpClosure`] is a shareable, kind-agnostic closure.
//! - [`TypedClosure`] tags a closure with a [`ContentKind`] so it can only be
//!   embedded where that kind is expected.
//!
//! # Example
//!
//! ```
//! use gxp_runtime::{GxpContext, HtmlClosure, Sink};
//!
//! fn greeting(name: String) -> HtmlClosure {
//!     HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
//!         out.append_literal("<b>");
//!         gxp_runtime::html::append(out, ctx, name.as_str());
//!         out.append_literal("</b>");
//!     })
//! }
//!
//! let ctx = GxpContext::default();
//! assert_eq!(ctx.get_string(&greeting("A&B".into())), "<b>A&amp;B</b>");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::GxpContext;
use crate::escape::Escaper;
use crate::kind::ContentKind;
use crate::localizable::Localizable;
use crate::sink::{FmtSink, Sink, StringSink};

/// A template with all explicit parameters bound.
///
/// Rendering must not retain `out` or `ctx` past the call, and must not
/// change the closure's own state: rendering twice into two fresh sinks with
/// the same context yields identical output.
pub trait Closure: Send + Sync {
    /// Render into `out`.
    fn write(&self, out: &mut dyn Sink, ctx: &GxpContext);

    /// Render onto the end of `buf`.
    ///
    /// Equivalent to wrapping `buf` in a [`StringSink`] and calling
    /// [`write`](Closure::write).
    fn write_to_string(&self, buf: &mut String, ctx: &GxpContext) {
        self.write(&mut StringSink::new(buf), ctx);
    }
}

impl<F> Closure for F
where
    F: Fn(&mut dyn Sink, &GxpContext) + Send + Sync,
{
    fn write(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        self(out, ctx)
    }
}

/// `Display` adapter rendering a closure in a fixed context.
pub struct Rendered<'a> {
    closure: &'a dyn Closure,
    ctx: &'a GxpContext,
}

impl<'a> Rendered<'a> {
    pub fn new(closure: &'a dyn Closure, ctx: &'a GxpContext) -> Self {
        Self { closure, ctx }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        self.closure.write(&mut sink, self.ctx);
        sink.finish()
    }
}

/// A shareable closure of no particular content kind.
///
/// Cloning is cheap; clones render the same bound template.
#[derive(Clone)]
pub struct GxpClosure(Arc<dyn Closure>);

impl GxpClosure {
    pub fn new(closure: impl Closure + 'static) -> Self {
        GxpClosure(Arc::new(closure))
    }

    /// A closure that renders nothing.
    pub fn empty() -> Self {
        Self::new(|_: &mut dyn Sink, _: &GxpContext| {})
    }

    /// A closure that emits `text` verbatim.
    pub fn from_static(text: &'static str) -> Self {
        Self::new(move |out: &mut dyn Sink, _: &GxpContext| out.append_literal(text))
    }

    /// A closure that emits `text` verbatim.
    pub fn from_string(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |out: &mut dyn Sink, _: &GxpContext| out.append_str(&text))
    }

    /// A closure that emits `text` through `escaper`.
    pub fn from_escaped<E>(text: impl Into<String>, escaper: E) -> Self
    where
        E: Escaper + Send + Sync + 'static,
    {
        let text = text.into();
        Self::new(move |out: &mut dyn Sink, _: &GxpContext| escaper.escape_str(&text, out))
    }

    /// A closure that emits `value` localized into the render context's
    /// locale, through `escaper`.
    pub fn from_localizable<L, E>(value: L, escaper: E) -> Self
    where
        L: Localizable + 'static,
        E: Escaper + Send + Sync + 'static,
    {
        Self::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
            escaper.escape_str(&value.to_localized_string(ctx.locale()), out)
        })
    }

    /// A closure that renders each of `closures` in order.
    ///
    /// The sequence is collected up front.
    pub fn concat(closures: impl IntoIterator<Item = GxpClosure>) -> Self {
        let closures: Vec<GxpClosure> = closures.into_iter().collect();
        Self::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
            for closure in &closures {
                closure.write(out, ctx);
            }
        })
    }

    /// Render into a `Display` adapter.
    pub fn display<'a>(&'a self, ctx: &'a GxpContext) -> Rendered<'a> {
        Rendered::new(self, ctx)
    }
}

impl Closure for GxpClosure {
    fn write(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        self.0.write(out, ctx);
    }
}

impl fmt::Debug for GxpClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GxpClosure").finish_non_exhaustive()
    }
}

/// A closure tagged with the content kind it produces.
///
/// Functions that embed a closure into output of kind `K` accept only
/// `TypedClosure<K>`, so mixing kinds is caught at compile time:
///
/// ```compile_fail
/// use gxp_runtime::{html, js, GxpContext, StringSink};
///
/// let script = js::from_javascript("alert(1)");
/// let mut buf = String::new();
/// // A script closure cannot be appended where HTML is expected.
/// html::append(&mut StringSink::new(&mut buf), &GxpContext::default(), &script);
/// ```
///
/// Converting between kinds goes through named functions such as
/// [`crate::html::script`].
pub struct TypedClosure<K: ContentKind> {
    inner: GxpClosure,
    kind: PhantomData<fn() -> K>,
}

impl<K: ContentKind> TypedClosure<K> {
    /// Tag `closure` as producing content of kind `K`.
    ///
    /// This is the constructor used by compiled templates. The caller
    /// vouches that `closure` emits well-formed, correctly escaped `K`.
    pub fn new(closure: impl Closure + 'static) -> Self {
        Self::wrap(GxpClosure::new(closure))
    }

    pub(crate) fn wrap(inner: GxpClosure) -> Self {
        Self {
            inner,
            kind: PhantomData,
        }
    }

    /// A closure that renders nothing.
    pub fn empty() -> Self {
        Self::wrap(GxpClosure::empty())
    }

    /// A closure that renders each of `closures` in order.
    pub fn concat(closures: impl IntoIterator<Item = TypedClosure<K>>) -> Self {
        Self::wrap(GxpClosure::concat(
            closures.into_iter().map(TypedClosure::into_untyped),
        ))
    }

    /// Drop the kind tag.
    pub fn into_untyped(self) -> GxpClosure {
        self.inner
    }

    pub fn as_untyped(&self) -> &GxpClosure {
        &self.inner
    }

    /// Render into a `Display` adapter.
    pub fn display<'a>(&'a self, ctx: &'a GxpContext) -> Rendered<'a> {
        Rendered::new(self, ctx)
    }
}

impl<K: ContentKind> Closure for TypedClosure<K> {
    fn write(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        self.inner.write(out, ctx);
    }
}

impl<K: ContentKind> Clone for TypedClosure<K> {
    fn clone(&self) -> Self {
        Self::wrap(self.inner.clone())
    }
}

impl<K: ContentKind> Default for TypedClosure<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: ContentKind> fmt::Debug for TypedClosure<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedClosure")
            .field("kind", &K::NAME)
            .finish_non_exhaustive()
    }
}

impl<K: ContentKind> From<TypedClosure<K>> for GxpClosure {
    fn from(closure: TypedClosure<K>) -> Self {
        closure.into_untyped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::MarkupEscaper;
    use crate::context::Charset;
    use crate::kind::Html;

    fn render(closure: &dyn Closure, ctx: &GxpContext) -> String {
        let mut buf = String::new();
        closure.write(&mut StringSink::new(&mut buf), ctx);
        buf
    }

    #[test]
    fn test_fn_is_closure() {
        let ctx = GxpContext::default();
        let hello = |out: &mut dyn Sink, _: &GxpContext| out.append_literal("hello, world!");
        assert_eq!(render(&hello, &ctx), "hello, world!");
    }

    #[test]
    fn test_write_to_string_matches_write() {
        let ctx = GxpContext::xml("en");
        let closure = GxpClosure::new(|out: &mut dyn Sink, ctx: &GxpContext| {
            out.append_str(if ctx.is_using_xml_syntax() { "<br />" } else { "<br>" });
        });

        let mut via_buffer = String::new();
        closure.write_to_string(&mut via_buffer, &ctx);
        assert_eq!(via_buffer, render(&closure, &ctx));
    }

    #[test]
    fn test_write_to_string_appends() {
        let ctx = GxpContext::default();
        let mut buf = String::from("a");
        GxpClosure::from_static("b").write_to_string(&mut buf, &ctx);
        GxpClosure::from_static("c").write_to_string(&mut buf, &ctx);
        assert_eq!(buf, "abc");
    }

    #[test]
    fn test_empty_renders_nothing() {
        let ctx = GxpContext::default();
        assert_eq!(render(&GxpClosure::empty(), &ctx), "");
        assert_eq!(render(&TypedClosure::<Html>::empty(), &ctx), "");
    }

    #[test]
    fn test_from_escaped() {
        let ctx = GxpContext::default();
        let closure = GxpClosure::from_escaped("a<b", MarkupEscaper::new(Charset::UsAscii));
        assert_eq!(render(&closure, &ctx), "a&lt;b");
    }

    #[test]
    fn test_from_localizable_uses_context_locale() {
        struct Greeting;
        impl Localizable for Greeting {
            fn to_localized_string(&self, locale: &str) -> String {
                match locale {
                    "fr" => "bonjour & salut".to_string(),
                    _ => "hello & hi".to_string(),
                }
            }
        }

        let closure =
            GxpClosure::from_localizable(Greeting, MarkupEscaper::new(Charset::UsAscii));
        assert_eq!(render(&closure, &GxpContext::new("fr")), "bonjour &amp; salut");
        assert_eq!(render(&closure, &GxpContext::new("en")), "hello &amp; hi");
    }

    #[test]
    fn test_concat_renders_in_order() {
        let ctx = GxpContext::default();
        let closure = GxpClosure::concat(vec![
            GxpClosure::from_static("one "),
            GxpClosure::from_string("two "),
            GxpClosure::from_static("three"),
        ]);
        assert_eq!(render(&closure, &ctx), "one two three");
        assert_eq!(render(&GxpClosure::concat(Vec::new()), &ctx), "");
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let ctx = GxpContext::default();
        let closure = GxpClosure::from_string("same");
        assert_eq!(render(&closure, &ctx), render(&closure, &ctx));
    }

    #[test]
    fn test_display_adapter() {
        let ctx = GxpContext::default();
        let closure = TypedClosure::<Html>::new(|out: &mut dyn Sink, _: &GxpContext| {
            out.append_literal("<i>");
            out.append_char('x');
            out.append_literal("</i>");
        });
        assert_eq!(format!("[{}]", closure.display(&ctx)), "[<i>x</i>]");
        assert_eq!(closure.as_untyped().display(&ctx).to_string(), "<i>x</i>");
    }

    #[test]
    fn test_typed_closure_round_trips_through_untyped() {
        let ctx = GxpContext::default();
        let typed = TypedClosure::<Html>::new(GxpClosure::from_static("x"));
        let untyped: GxpClosure = typed.clone().into();
        assert_eq!(render(&untyped, &ctx), render(&typed, &ctx));
        assert_eq!(format!("{:?}", typed), "TypedClosure { kind: \"html\", .. }");
    }
}
