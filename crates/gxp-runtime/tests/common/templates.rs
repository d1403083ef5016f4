/*
 * templates.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Hand-written equivalents of the code the GXP compiler generates for the
 * functional test templates.
 */

use gxp_runtime::attr_bundle::AttrBundleBuilder;
use gxp_runtime::{GxpContext, GxpTemplate, Html, HtmlClosure, Sink, html, js};

pub const HTML_STRICT_DOCTYPE: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
                                       \"http://www.w3.org/TR/html4/strict.dtd\">";

pub const XHTML_STRICT_DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
                                        \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">";

/// End of a void element: `>` or ` />`.
fn void_end(ctx: &GxpContext) -> &'static str {
    if ctx.is_using_xml_syntax() { " />" } else { ">" }
}

/// Doctype and opening `<html>` tag for a strict document.
fn write_strict_prologue(out: &mut dyn Sink, ctx: &GxpContext) {
    if ctx.is_using_xml_syntax() {
        out.append_literal("<?xml version=\"1.0\" ?>\n");
        out.append_literal(XHTML_STRICT_DOCTYPE);
        out.append_literal("<html xmlns=\"http://www.w3.org/1999/xhtml\">");
    } else {
        out.append_literal(HTML_STRICT_DOCTYPE);
        out.append_literal("<html>");
    }
}

pub struct HelloGxp;

impl GxpTemplate for HelloGxp {
    type Kind = Html;
}

impl HelloGxp {
    pub fn write(out: &mut dyn Sink, _ctx: &GxpContext) {
        out.append_literal("hello, world!");
    }

    pub fn get_closure() -> HtmlClosure {
        HtmlClosure::new(|out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx))
    }
}

pub struct DoctypeGxp;

impl GxpTemplate for DoctypeGxp {
    type Kind = Html;
}

impl DoctypeGxp {
    pub fn write(out: &mut dyn Sink, ctx: &GxpContext) {
        write_strict_prologue(out, ctx);
        out.append_literal("</html>");
    }

    pub fn get_closure() -> HtmlClosure {
        HtmlClosure::new(|out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx))
    }
}

pub struct SomeTagsGxp;

impl GxpTemplate for SomeTagsGxp {
    type Kind = Html;
}

impl SomeTagsGxp {
    pub fn write(out: &mut dyn Sink, ctx: &GxpContext) {
        out.append_literal("foo <b>bar</b> <img src=\"baz.gif\" alt=\"baz\"");
        out.append_literal(void_end(ctx));
    }

    pub fn get_closure() -> HtmlClosure {
        HtmlClosure::new(|out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx))
    }
}

pub struct IfBasicGxp;

impl GxpTemplate for IfBasicGxp {
    type Kind = Html;
}

impl IfBasicGxp {
    pub fn write(out: &mut dyn Sink, _ctx: &GxpContext, x: i32) {
        if x < 5 {
            out.append_literal("That number is less than 5.");
        }
    }

    pub fn get_closure(x: i32) -> HtmlClosure {
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx, x))
    }
}

pub struct IfElseGxp;

impl GxpTemplate for IfElseGxp {
    type Kind = Html;
}

impl IfElseGxp {
    pub fn write(out: &mut dyn Sink, _ctx: &GxpContext, x: i32) {
        out.append_literal("That number is\n");
        if x < 5 {
            out.append_literal("less than");
        } else {
            out.append_literal("greater than or equal to");
        }
        out.append_literal("\n5.");
    }

    pub fn get_closure(x: i32) -> HtmlClosure {
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx, x))
    }
}

pub struct IfElseIfGxp;

impl GxpTemplate for IfElseIfGxp {
    type Kind = Html;
}

impl IfElseIfGxp {
    pub fn write(out: &mut dyn Sink, _ctx: &GxpContext, x: i32) {
        out.append_literal("That number is\n");
        if x < 5 {
            out.append_literal("less than");
        } else if x == 5 {
            out.append_literal("equal to");
        } else {
            out.append_literal("greater than or equal to");
        }
        out.append_literal("\n5.");
    }

    pub fn get_closure(x: i32) -> HtmlClosure {
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx, x))
    }
}

pub struct CondGxp;

impl GxpTemplate for CondGxp {
    type Kind = Html;
}

impl CondGxp {
    pub fn write(out: &mut dyn Sink, _ctx: &GxpContext, x: i32) {
        out.append_literal("That number is\n");
        out.append_literal(match x {
            x if x < 5 => "less than",
            5 => "equal to",
            _ => "greater than or equal to",
        });
        out.append_literal("\n5.");
    }

    pub fn get_closure(x: i32) -> HtmlClosure {
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx, x))
    }
}

pub struct SgmlXmlDifferencesGxp;

impl GxpTemplate for SgmlXmlDifferencesGxp {
    type Kind = Html;
}

impl SgmlXmlDifferencesGxp {
    pub fn write(out: &mut dyn Sink, ctx: &GxpContext) {
        let img_attrs = AttrBundleBuilder::<Html>::new()
            .attr("alt", html::from_plaintext("hello, world!"))
            .boolean_attr("ismap", true)
            .build();

        write_strict_prologue(out, ctx);
        out.append_literal("<div id=\"snarf\"><img");
        html::append(out, ctx, &img_attrs);
        out.append_literal(void_end(ctx));
        out.append_literal("\n<br");
        out.append_literal(void_end(ctx));
        out.append_literal("</div>\nfoo <br");
        out.append_literal(void_end(ctx));
        out.append_literal(" bar <br");
        out.append_literal(void_end(ctx));
        out.append_literal(" baz</html>");
    }

    pub fn get_closure() -> HtmlClosure {
        HtmlClosure::new(|out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx))
    }
}

pub struct JavascriptAttrGxp;

impl GxpTemplate for JavascriptAttrGxp {
    type Kind = Html;
}

impl JavascriptAttrGxp {
    pub fn write(out: &mut dyn Sink, ctx: &GxpContext, s: &str, n: i32) {
        let onclick = js::concat([
            js::from_javascript("alert("),
            js::string_literal(s),
            js::from_javascript(");"),
        ]);

        out.append_literal("<div onclick=\"");
        html::append(out, ctx, &html::javascript_attr(onclick));
        out.append_literal("\">");
        html::append(out, ctx, &n);
        out.append_literal("</div>");
    }

    pub fn get_closure(s: impl Into<String>, n: i32) -> HtmlClosure {
        let s = s.into();
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| Self::write(out, ctx, &s, n))
    }
}

/// Wraps caller-supplied content in a `<div>`, the way a layout template
/// takes an `HtmlClosure` parameter.
pub struct WrapperGxp;

impl GxpTemplate for WrapperGxp {
    type Kind = Html;
}

impl WrapperGxp {
    pub fn write(out: &mut dyn Sink, ctx: &GxpContext, title: &str, body: &HtmlClosure) {
        out.append_literal("<div title=\"");
        html::append(out, ctx, title);
        out.append_literal("\">");
        html::append(out, ctx, body);
        out.append_literal("<hr");
        out.append_literal(void_end(ctx));
        out.append_literal("</div>");
    }

    pub fn get_closure(title: impl Into<String>, body: HtmlClosure) -> HtmlClosure {
        let title = title.into();
        HtmlClosure::new(move |out: &mut dyn Sink, ctx: &GxpContext| {
            Self::write(out, ctx, &title, &body)
        })
    }
}
