/*
 * localizable.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Values that render differently per locale.

use std::borrow::Cow;

/// A value with a locale-dependent text form.
///
/// Templates localize values into [`GxpContext::locale`] at render time.
///
/// [`GxpContext::locale`]: crate::GxpContext::locale
pub trait Localizable: Send + Sync {
    fn to_localized_string(&self, locale: &str) -> String;
}

impl Localizable for str {
    fn to_localized_string(&self, _locale: &str) -> String {
        self.to_string()
    }
}

impl Localizable for String {
    fn to_localized_string(&self, _locale: &str) -> String {
        self.clone()
    }
}

impl Localizable for Cow<'_, str> {
    fn to_localized_string(&self, _locale: &str) -> String {
        self.to_string()
    }
}

impl<L: Localizable + ?Sized> Localizable for &L {
    fn to_localized_string(&self, locale: &str) -> String {
        (**self).to_localized_string(locale)
    }
}
