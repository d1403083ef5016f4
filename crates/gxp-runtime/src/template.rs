/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Common marker for compiled templates.
//!
//! Every template type the GXP compiler generates implements [`GxpTemplate`].
//! The trait has no methods. Generated types provide two associated
//! functions of their own, with the template's declared parameters in place
//! of `...`:
//!
//! ```ignore
//! impl HelloGxp {
//!     pub fn write(out: &mut dyn Sink, ctx: &GxpContext, ...);
//!     pub fn get_closure(...) -> TypedClosure<Self::Kind>;
//! }
//! ```

use crate::kind::ContentKind;

/// Marker implemented by every compiled template.
pub trait GxpTemplate {
    /// The content kind the template produces.
    type Kind: ContentKind;
}
