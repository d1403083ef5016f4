/*
 * kind.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Content kinds.
//!
//! Every typed closure is tagged with one of a closed set of zero-sized
//! marker types. Embedding functions are generic over the tag, so embedding
//! a closure of the wrong kind is a type error. Moving content between kinds
//! always goes through a named conversion function in the target kind's
//! module (e.g. [`crate::html::script`]).

mod sealed {
    pub trait Sealed {}
}

/// A category of output vocabulary.
///
/// This trait is sealed; the set of kinds is fixed by this crate.
pub trait ContentKind: sealed::Sealed + Send + Sync + 'static {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// MIME type of documents of this kind.
    const MIME_TYPE: &'static str;
}

/// Content kinds in the XML/SGML markup family.
///
/// Markup kinds share escaping rules and attribute bundles, and are the only
/// kinds whose output depends on [`GxpContext::is_using_xml_syntax`].
///
/// [`GxpContext::is_using_xml_syntax`]: crate::GxpContext::is_using_xml_syntax
pub trait MarkupKind: ContentKind {}

macro_rules! content_kinds {
    ($($(#[$meta:meta])* $kind:ident => $name:literal, $mime:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $kind;

            impl sealed::Sealed for $kind {}

            impl ContentKind for $kind {
                const NAME: &'static str = $name;
                const MIME_TYPE: &'static str = $mime;
            }
        )*
    };
}

content_kinds! {
    /// HTML markup.
    Html => "html", "text/html";
    /// RSS feed markup.
    Rss => "rss", "application/rss+xml";
    /// Unescaped plain text.
    Plaintext => "plaintext", "text/plain";
    /// JavaScript source.
    Javascript => "javascript", "text/javascript";
    /// CSS source.
    Css => "css", "text/css";
}

impl MarkupKind for Html {}
impl MarkupKind for Rss {}
