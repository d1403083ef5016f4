/*
 * attr_bundle.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Attribute bundles.
//!
//! A bundle carries a set of markup attributes from one template to another,
//! so a caller can pass e.g. `class` and `title` through to an element it
//! does not render itself. Valued attributes are closures of the bundle's
//! markup kind. Boolean attributes are rendered per the context's syntax:
//! ` ismap` for SGML, ` ismap="ismap"` for XML.

use indexmap::{IndexMap, IndexSet};

use crate::append::Append;
use crate::closure::{Closure, TypedClosure};
use crate::context::GxpContext;
use crate::kind::MarkupKind;
use crate::sink::Sink;

/// An immutable set of attributes for markup of kind `K`.
///
/// Attributes are written in insertion order, valued attributes first.
pub struct AttrBundle<K: MarkupKind> {
    attrs: IndexMap<String, TypedClosure<K>>,
    boolean_attrs: IndexSet<String>,
}

impl<K: MarkupKind> AttrBundle<K> {
    /// Check whether the bundle has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.boolean_attrs.is_empty()
    }

    /// Look up a valued attribute.
    pub fn get(&self, name: &str) -> Option<&TypedClosure<K>> {
        self.attrs.get(name)
    }

    /// Check whether a boolean attribute is set.
    pub fn has_boolean(&self, name: &str) -> bool {
        self.boolean_attrs.contains(name)
    }

    /// Write every attribute, each preceded by a space.
    pub fn write(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        for (name, value) in &self.attrs {
            out.append_char(' ');
            out.append_str(name);
            out.append_literal("=\"");
            value.write(out, ctx);
            out.append_char('"');
        }
        for name in &self.boolean_attrs {
            out.append_char(' ');
            out.append_str(name);
            if ctx.is_using_xml_syntax() {
                out.append_literal("=\"");
                out.append_str(name);
                out.append_char('"');
            }
        }
    }
}

impl<K: MarkupKind> Clone for AttrBundle<K> {
    fn clone(&self) -> Self {
        Self {
            attrs: self.attrs.clone(),
            boolean_attrs: self.boolean_attrs.clone(),
        }
    }
}

impl<K: MarkupKind> Default for AttrBundle<K> {
    fn default() -> Self {
        Self {
            attrs: IndexMap::new(),
            boolean_attrs: IndexSet::new(),
        }
    }
}

impl<K: MarkupKind> std::fmt::Debug for AttrBundle<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttrBundle")
            .field("attrs", &self.attrs.keys().collect::<Vec<_>>())
            .field("boolean_attrs", &self.boolean_attrs)
            .finish()
    }
}

impl<K: MarkupKind> Append<K> for AttrBundle<K> {
    fn append(&self, out: &mut dyn Sink, ctx: &GxpContext) {
        self.write(out, ctx);
    }
}

/// Builder for [`AttrBundle`].
///
/// A builder created with [`with_include`](AttrBundleBuilder::with_include)
/// only accepts the listed attributes from bundles merged with
/// [`add_bundle`](AttrBundleBuilder::add_bundle). Attributes set directly are
/// always accepted.
pub struct AttrBundleBuilder<K: MarkupKind> {
    include: Option<IndexSet<String>>,
    attrs: IndexMap<String, TypedClosure<K>>,
    boolean_attrs: IndexSet<String>,
}

impl<K: MarkupKind> AttrBundleBuilder<K> {
    /// Create a builder accepting every attribute from added bundles.
    pub fn new() -> Self {
        Self {
            include: None,
            attrs: IndexMap::new(),
            boolean_attrs: IndexSet::new(),
        }
    }

    /// Create a builder accepting only `names` from added bundles.
    pub fn with_include<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            include: Some(names.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }

    /// Set a valued attribute, replacing any previous value.
    pub fn attr(&mut self, name: impl Into<String>, value: TypedClosure<K>) -> &mut Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Set a valued attribute if `cond` holds.
    pub fn attr_if(
        &mut self,
        name: impl Into<String>,
        cond: bool,
        value: TypedClosure<K>,
    ) -> &mut Self {
        if cond {
            self.attr(name, value);
        }
        self
    }

    /// Set a boolean attribute if `include` holds.
    pub fn boolean_attr(&mut self, name: impl Into<String>, include: bool) -> &mut Self {
        if include {
            self.boolean_attrs.insert(name.into());
        }
        self
    }

    /// Set a boolean attribute if both `cond` and `include` hold.
    pub fn boolean_attr_if(
        &mut self,
        name: impl Into<String>,
        cond: bool,
        include: bool,
    ) -> &mut Self {
        if cond {
            self.boolean_attr(name, include);
        }
        self
    }

    /// Merge the attributes of `bundle`, filtered by the include list.
    pub fn add_bundle(&mut self, bundle: &AttrBundle<K>) -> &mut Self {
        for (name, value) in &bundle.attrs {
            if self.accepts(name) {
                self.attrs.insert(name.clone(), value.clone());
            }
        }
        for name in &bundle.boolean_attrs {
            if self.accepts(name) {
                self.boolean_attrs.insert(name.clone());
            }
        }
        self
    }

    /// Take the accumulated attributes, leaving the builder empty.
    ///
    /// The include list is kept, so the builder can be reused.
    pub fn build(&mut self) -> AttrBundle<K> {
        AttrBundle {
            attrs: std::mem::take(&mut self.attrs),
            boolean_attrs: std::mem::take(&mut self.boolean_attrs),
        }
    }

    fn accepts(&self, name: &str) -> bool {
        self.include
            .as_ref()
            .is_none_or(|include| include.contains(name))
    }
}

impl<K: MarkupKind> Default for AttrBundleBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
