/*
 * css.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Closures for `text/css`.

use std::fmt;
use std::str::FromStr;

use crate::append::Append;
use crate::closure::{GxpClosure, TypedClosure};
use crate::context::GxpContext;
use crate::error::{GxpError, GxpResult};
use crate::kind::Css;
use crate::sink::{FmtSink, Sink};

pub type CssClosure = TypedClosure<Css>;

/// Emit `value` into CSS output.
pub fn append<T: Append<Css> + ?Sized>(out: &mut dyn Sink, ctx: &GxpContext, value: &T) {
    value.append(out, ctx);
}

pub fn empty() -> CssClosure {
    CssClosure::empty()
}

/// A closure emitting `css` as literal CSS.
pub fn from_css(css: impl Into<String>) -> CssClosure {
    CssClosure::wrap(GxpClosure::from_string(css))
}

pub fn concat(closures: impl IntoIterator<Item = CssClosure>) -> CssClosure {
    CssClosure::concat(closures)
}

/// A URL to be emitted as a CSS `url("...")` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssUrl(String);

impl CssUrl {
    pub fn new(url: impl Into<String>) -> Self {
        CssUrl(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Append<Css> for CssUrl {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        out.append_literal("url(\"");
        for c in self.0.chars() {
            if c == '<' {
                out.append_literal("\\3c ");
                continue;
            }
            if matches!(
                c,
                '\n' | '\r' | '\t' | '\'' | '"' | '\\' | ' ' | '(' | ')' | ','
            ) {
                out.append_char('\\');
            }
            out.append_char(c);
        }
        out.append_literal("\")");
    }
}

// ============================================================================
// Colors
// ============================================================================

/// An RGB color, written as a CSS hex color.
///
/// Colors whose components are all of the form `0xNN` with equal nybbles are
/// written in the three-digit form (`#f0c`), all others in the six-digit
/// form (`#ff00c8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const FUCHSIA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const INDIGO: Color = Color::rgb(75, 0, 130);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const VIOLET: Color = Color::rgb(238, 130, 238);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    const KEYWORDS: [(&'static str, Color); 20] = [
        ("aqua", Color::AQUA),
        ("black", Color::BLACK),
        ("blue", Color::BLUE),
        ("fuchsia", Color::FUCHSIA),
        ("gray", Color::GRAY),
        ("green", Color::GREEN),
        ("grey", Color::GREY),
        ("indigo", Color::INDIGO),
        ("lime", Color::LIME),
        ("maroon", Color::MAROON),
        ("navy", Color::NAVY),
        ("olive", Color::OLIVE),
        ("orange", Color::ORANGE),
        ("purple", Color::PURPLE),
        ("red", Color::RED),
        ("silver", Color::SILVER),
        ("teal", Color::TEAL),
        ("violet", Color::VIOLET),
        ("white", Color::WHITE),
        ("yellow", Color::YELLOW),
    ];

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from integer components.
    ///
    /// Fails with [`GxpError::InvalidColorComponent`] if any component is
    /// outside `0..=255`.
    pub fn try_rgb(red: i32, green: i32, blue: i32) -> GxpResult<Self> {
        fn component(value: i32) -> GxpResult<u8> {
            u8::try_from(value).map_err(|_| GxpError::InvalidColorComponent(value))
        }
        Ok(Self::rgb(component(red)?, component(green)?, component(blue)?))
    }

    /// Build a color from the low 24 bits of `rgb` (`0xRRGGBB`).
    pub fn from_24_bit_rgb(rgb: u32) -> Self {
        let [_, red, green, blue] = rgb.to_be_bytes();
        Self::rgb(red, green, blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    fn write(self, out: &mut dyn Sink) {
        let components = [self.red, self.green, self.blue];
        out.append_char('#');
        if components.iter().all(|c| c % 0x11 == 0) {
            for c in components {
                out.append_fmt(format_args!("{:x}", c & 0xf));
            }
        } else {
            for c in components {
                out.append_fmt(format_args!("{:02x}", c));
            }
        }
    }
}

/// Parses `#rgb`, `#rrggbb` (hex digits in either case), or one of the
/// named colors in lowercase.
impl FromStr for Color {
    type Err = GxpError;

    fn from_str(s: &str) -> GxpResult<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if let Some(hex) = hex {
            match (hex.len(), u32::from_str_radix(hex, 16)) {
                (3, Ok(value)) => {
                    let nybble = |shift: u32| ((value >> shift) & 0xf) as u8 * 0x11;
                    return Ok(Self::rgb(nybble(8), nybble(4), nybble(0)));
                }
                (6, Ok(value)) => return Ok(Self::from_24_bit_rgb(value)),
                _ => {}
            }
        }
        Self::KEYWORDS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, color)| color)
            .ok_or_else(|| GxpError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        self.write(&mut sink);
        sink.finish()
    }
}

impl Append<Css> for Color {
    fn append(&self, out: &mut dyn Sink, _ctx: &GxpContext) {
        self.write(out);
    }
}

impl From<Color> for CssClosure {
    fn from(color: Color) -> Self {
        CssClosure::new(move |out: &mut dyn Sink, _: &GxpContext| color.write(out))
    }
}
