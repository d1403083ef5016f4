/*
 * append.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Typed appenders.
//!
//! Compiled templates emit every dynamic value through [`Append`], with the
//! content kind of the surrounding output as the type parameter. The impl
//! chosen for a value decides how it is escaped or quoted for that kind. A
//! value with no impl for the kind cannot be emitted there at all; for
//! closures this is how cross-kind embedding is ruled out.
//!
//! | Kind | numbers | `bool` | `char`/strings | closures |
//! |---|---|---|---|---|
//! | markup | verbatim | none | markup-escaped | same kind only |
//! | plaintext | verbatim | none | verbatim | `PlaintextClosure` |
//! | javascript | literal | literal | quoted literal | `JavascriptClosure` |
//! | css | literal | none | quoted string | `CssClosure` |

use crate::closure::{Closure, TypedClosure};
use crate::context::GxpContext;
use crate::escape::{CssStringEscaper, Escaper, JavascriptEscaper, MarkupEscaper};
use crate::kind::{ContentKind, Css, Javascript, MarkupKind, Plaintext};
use crate::localizable::Localizable;
use crate::sink::Sink;

/// A value that can be emitted into output of kind `K`.
pub trait Append<K: ContentKind> {
    fn append(&self, out: &mut dyn Sink, ctx: &GxpContext);
}

/// Emit `value` into output of kind `K`.
pub fn append<K, T>(out: &mut dyn Sink, ctx: &GxpContext, value: &T)
where
    K: ContentKind,
    T: Append<K> + ?Sized,
{
    value.append(out, ctx);
}

macro_rules! append_verbatim {
    (@impl [$($generics:tt)*] $kind:ty, $t:ty) => {
        impl<$($generics)*> Append<$kind> for $t {
            fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
                out.append_fmt(format_args!("{}", self));
            }
        }
    };
    ($generics:tt $kind:ty => $($t:ty),+ $(,)?) => {
        $( append_verbatim!(@impl $generics $kind, $t); )+
    };
}

macro_rules! append_escaped_text {
    ([$($generics:tt)*] $kind:ty, |$ctx:ident| $escaper:expr) => {
        impl<$($generics)*> Append<$kind> for char {
            fn append(&self, out: &mut dyn Sink, $ctx: &GxpContext) {
                $escaper.escape_char(*self, out);
            }
        }

        impl<$($generics)*> Append<$kind> for str {
            fn append(&self, out: &mut dyn Sink, $ctx: &GxpContext) {
                $escaper.escape_str(self, out);
            }
        }

        impl<$($generics)*> Append<$kind> for String {
            fn append(&self, out: &mut dyn Sink, $ctx: &GxpContext) {
                $escaper.escape_str(self, out);
            }
        }

        impl<$($generics)*> Append<$kind> for dyn Localizable {
            fn append(&self, out: &mut dyn Sink, $ctx: &GxpContext) {
                $escaper.escape_str(&self.to_localized_string($ctx.locale()), out);
            }
        }
    };
}

// Closures are only emitted into their own kind.
impl<K: ContentKind> Append<K> for TypedClosure<K> {
    fn append(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        self.write(out, ctx);
    }
}

// ============================================================================
// Markup
// ============================================================================

// No bool: "true"/"false" has no neutral markup representation.
append_verbatim!([K: MarkupKind] K =>
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

append_escaped_text!([K: MarkupKind] K, |ctx| MarkupEscaper::for_context(ctx));

// ============================================================================
// Plain text
// ============================================================================

append_verbatim!([] Plaintext =>
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    char, str, String);

impl Append<Plaintext> for dyn Localizable {
    fn append(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        out.append_str(&self.to_localized_string(ctx.locale()));
    }
}

// ============================================================================
// JavaScript
// ============================================================================

append_verbatim!([] Javascript =>
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

/// Write `s` as a double-quoted JavaScript string literal.
pub(crate) fn write_javascript_string(s: &str, out: &mut dyn Sink) {
    out.append_char('"');
    JavascriptEscaper.escape_str(s, out);
    out.append_char('"');
}

fn write_javascript_number(value: f64, out: &mut dyn Sink) {
    if value.is_nan() {
        out.append_literal("NaN");
    } else if value.is_infinite() {
        out.append_literal(if value > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        out.append_fmt(format_args!("{}", value));
    }
}

impl Append<Javascript> for f64 {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_javascript_number(*self, out);
    }
}

impl Append<Javascript> for f32 {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_javascript_number(f64::from(*self), out);
    }
}

impl Append<Javascript> for char {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        let mut utf8 = [0u8; 4];
        write_javascript_string(self.encode_utf8(&mut utf8), out);
    }
}

impl Append<Javascript> for str {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_javascript_string(self, out);
    }
}

impl Append<Javascript> for String {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_javascript_string(self, out);
    }
}

impl Append<Javascript> for dyn Localizable {
    fn append(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        write_javascript_string(&self.to_localized_string(ctx.locale()), out);
    }
}

/// JSON values are emitted as JSON literals.
impl Append<Javascript> for serde_json::Value {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        out.append_str(&self.to_string());
    }
}

// ============================================================================
// CSS
// ============================================================================

append_verbatim!([] Css =>
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Write `s` as a double-quoted CSS string.
fn write_css_string(s: &str, out: &mut dyn Sink) {
    out.append_char('"');
    CssStringEscaper.escape_str(s, out);
    out.append_char('"');
}

impl Append<Css> for str {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_css_string(self, out);
    }
}

impl Append<Css> for String {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        write_css_string(self, out);
    }
}
