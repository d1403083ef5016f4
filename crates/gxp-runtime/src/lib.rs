/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Runtime support for compiled GXP templates.
//!
//! Code generated by the GXP template compiler depends on three abstractions
//! defined here:
//!
//! - [`Sink`]: where rendered text goes. [`StringSink`] appends to a
//!   caller-owned `String`; [`IoSink`] and [`FmtSink`] adapt byte streams and
//!   formatters.
//! - [`GxpContext`]: ambient parameters (locale, XML vs SGML syntax, output
//!   charset) passed implicitly to every template.
//! - [`Closure`]: a template with its explicit parameters bound, rendered
//!   later against a sink and a context. [`TypedClosure`] tags a closure with
//!   a [`ContentKind`] so that HTML, RSS, plain text, JavaScript and CSS
//!   cannot be mixed by accident.
//!
//! # Architecture
//!
//! Rendering is synchronous and total. Nothing here allocates global state;
//! a context and any number of closures can be shared across threads, while
//! each render pass owns its sink.
//!
//! Values are emitted through the [`Append`] trait, parameterized by the
//! content kind of the surrounding output. Each kind has a module with its
//! closure alias, constructors, and the named conversions that embed other
//! kinds ([`html::script`], [`html::style`], [`html::from_plaintext_closure`],
//! [`rss::from_html_closure`]).
//!
//! # Example
//!
//! ```
//! use gxp_runtime::{html, GxpContext, HtmlClosure, Sink};
//!
//! fn img(src: String) -> HtmlClosure {
//!     HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
//!         out.append_literal("<img src=\"");
//!         html::append(out, ctx, src.as_str());
//!         out.append_char('"');
//!         out.append_literal(if ctx.is_using_xml_syntax() { " />" } else { ">" });
//!     })
//! }
//!
//! let closure = img("a.gif".to_string());
//! assert_eq!(GxpContext::new("en").get_string(&closure), "<img src=\"a.gif\">");
//! assert_eq!(GxpContext::xml("en").get_string(&closure), "<img src=\"a.gif\" />");
//! ```

pub mod append;
pub mod attr_bundle;
pub mod closure;
pub mod context;
pub mod css;
pub mod error;
pub mod escape;
pub mod html;
pub mod js;
pub mod kind;
pub mod localizable;
pub mod rss;
pub mod sink;
pub mod template;
pub mod text;

// Re-export main types at crate root
pub use append::Append;
pub use attr_bundle::{AttrBundle, AttrBundleBuilder};
pub use closure::{Closure, GxpClosure, Rendered, TypedClosure};
pub use context::{Charset, GxpContext};
pub use css::{Color, CssClosure, CssUrl};
pub use error::{GxpError, GxpResult};
pub use escape::{
    CssStringEscaper, Escaper, EscapingSink, JavascriptEscaper, MarkupEscaper, NullEscaper,
};
pub use html::HtmlClosure;
pub use js::JavascriptClosure;
pub use kind::{ContentKind, Css, Html, Javascript, MarkupKind, Plaintext, Rss};
pub use localizable::Localizable;
pub use rss::RssClosure;
pub use sink::{FmtSink, IoSink, Sink, StringSink};
pub use template::GxpTemplate;
pub use text::PlaintextClosure;
