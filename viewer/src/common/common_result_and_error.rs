// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use thiserror::Error;

/// Type alias to make it easy to work with [`miette::Result`] and
/// [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// Works hand in hand w/ [`PreviewError`] and any other type of error. The
/// render pipeline itself is infallible by design (it degrades instead of
/// failing); this alias is used at the edges that do IO and decoding (the
/// `hv` binary, settings and exchange loading).
pub type CommonResult<T> = miette::Result<T>;

/// Errors that can occur at the edges of the preview pipeline: loading
/// settings, decoding an exchange, writing the rendered document. The
/// pipeline stages themselves never produce these; they degrade per input
/// instead (see the crate docs).
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The settings JSON could not be deserialized into
    /// [`crate::Settings`].
    #[error("failed to parse settings JSON: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    /// The exchange JSON could not be deserialized into
    /// [`crate::Exchange`].
    #[error("failed to parse exchange JSON: {0}")]
    InvalidExchange(#[source] serde_json::Error),

    /// Reading input or writing the rendered document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
