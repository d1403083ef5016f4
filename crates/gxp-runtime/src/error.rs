/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types.
//!
//! Rendering itself never fails. Errors surface when a sink over a fallible
//! destination is drained after the render pass, or when a typed value such
//! as a [`crate::css::Color`] is built from invalid input.

use thiserror::Error;

/// Errors reported by fallible sinks and value constructors.
#[derive(Debug, Error)]
pub enum GxpError {
    /// The output stream failed while rendering or flushing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is not a valid color component; must be in range [0, 255]")]
    InvalidColorComponent(i32),

    #[error("can't parse {0:?} as a CSS color")]
    InvalidColor(String),
}

/// Result type for fallible operations in this crate.
pub type GxpResult<T> = Result<T, GxpError>;
