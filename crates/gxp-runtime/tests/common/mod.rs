/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Shared harness for functional tests.
 */

#![allow(dead_code)]

pub mod templates;

use gxp_runtime::{GxpContext, Sink, StringSink};
use pretty_assertions::assert_eq;

/// One output buffer plus the two contexts every functional test renders
/// with.
pub struct FunctionalTestCase {
    out: String,
    gxp_context: GxpContext,
    xml_gxp_context: GxpContext,
}

impl FunctionalTestCase {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            gxp_context: GxpContext::default(),
            xml_gxp_context: GxpContext::xml("en"),
        }
    }

    pub fn gxp_context(&self) -> &GxpContext {
        &self.gxp_context
    }

    pub fn xml_gxp_context(&self) -> &GxpContext {
        &self.xml_gxp_context
    }

    /// Render into the buffer with the standard (SGML) context.
    pub fn write_with(&mut self, render: impl FnOnce(&mut dyn Sink, &GxpContext)) {
        render(&mut StringSink::new(&mut self.out), &self.gxp_context);
    }

    /// Render into the buffer with the XML context.
    pub fn write_xml_with(&mut self, render: impl FnOnce(&mut dyn Sink, &GxpContext)) {
        render(&mut StringSink::new(&mut self.out), &self.xml_gxp_context);
    }

    /// Compare the buffer with `expected` exactly, then clear it.
    #[track_caller]
    pub fn assert_output_equals(&mut self, expected: &str) {
        assert_eq!(self.out, expected);
        self.out.clear();
    }
}

impl Default for FunctionalTestCase {
    fn default() -> Self {
        Self::new()
    }
}
