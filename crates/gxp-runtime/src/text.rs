/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Closures for `text/plain`.

use crate::append::Append;
use crate::closure::{GxpClosure, TypedClosure};
use crate::context::GxpContext;
use crate::kind::Plaintext;
use crate::localizable::Localizable;
use crate::sink::Sink;

pub type PlaintextClosure = TypedClosure<Plaintext>;

/// Emit `value` into plain-text output.
pub fn append<T: Append<Plaintext> + ?Sized>(out: &mut dyn Sink, ctx: &GxpContext, value: &T) {
    value.append(out, ctx);
}

pub fn empty() -> PlaintextClosure {
    PlaintextClosure::empty()
}

/// A closure emitting `text` as-is.
pub fn from_plaintext(text: impl Into<String>) -> PlaintextClosure {
    PlaintextClosure::wrap(GxpClosure::from_string(text))
}

/// A closure emitting `value` localized into the render locale.
pub fn from_localizable(value: impl Localizable + 'static) -> PlaintextClosure {
    PlaintextClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
        out.append_str(&value.to_localized_string(ctx.locale()));
    })
}

pub fn concat(closures: impl IntoIterator<Item = PlaintextClosure>) -> PlaintextClosure {
    PlaintextClosure::concat(closures)
}
