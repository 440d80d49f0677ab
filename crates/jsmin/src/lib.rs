//! A single-pass JavaScript minifier in the tradition of `JSMin`.
//!
//! The minifier removes comments and insignificant whitespace while copying
//! string and regular expression literals verbatim and keeping every line
//! break that automatic semicolon insertion could depend on. It does not
//! parse the program, rename identifiers or otherwise transform it.
//!
//! ```rust
//! let min = jsmin::minify("function   foo ( )  {\n  return   1;\n}").unwrap();
//! assert_eq!(min, "\nfunction foo(){return 1;}");
//! ```
//!
//! Malformed input fails the whole call; there is no partial output:
//!
//! ```rust
//! use jsmin::ErrorKind;
//!
//! let err = jsmin::minify("var s = \"abc").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnterminatedString);
//! assert_eq!(err.to_string(), "unterminated string literal at 1:9");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod comments;
mod engine;
mod error;
mod options;
mod source;


use alloc::{string::String, vec::Vec};

use bstr::{ByteSlice, ByteVec};

use crate::engine::Minifier;
pub use crate::{
    error::{ErrorKind, MinifyError},
    options::MinifyOptions,
};

/// Minifies UTF-8 source text.
///
/// The result is always valid UTF-8: non-ASCII characters are never dropped
/// or split. It may begin with a single line break; see
/// [`MinifyOptions::trim`].
///
/// # Errors
///
/// Returns a [`MinifyError`] if a block comment, string literal or regular
/// expression literal is never terminated.
pub fn minify(source: &str) -> Result<String, MinifyError> {
    minify_with(source, MinifyOptions::default())
}

/// Minifies UTF-8 source text, then applies the post-processing selected in
/// `options`.
///
/// # Errors
///
/// Returns a [`MinifyError`] if a block comment, string literal or regular
/// expression literal is never terminated.
pub fn minify_with(source: &str, options: MinifyOptions) -> Result<String, MinifyError> {
    let out = minify_bytes_with(source.as_bytes(), options)?;
    // Only ASCII bytes are ever removed or rewritten, so this never replaces
    // anything.
    Ok(out.into_string_lossy())
}

/// Minifies source given as raw narrow characters, such as Latin-1 text or
/// input that is not valid UTF-8.
///
/// Every byte above `0x7E` is treated as part of an identifier.
///
/// # Errors
///
/// Returns a [`MinifyError`] if a block comment, string literal or regular
/// expression literal is never terminated.
pub fn minify_bytes(source: &[u8]) -> Result<Vec<u8>, MinifyError> {
    minify_bytes_with(source, MinifyOptions::default())
}

/// Byte-oriented counterpart of [`minify_with`].
///
/// # Errors
///
/// Returns a [`MinifyError`] if a block comment, string literal or regular
/// expression literal is never terminated.
pub fn minify_bytes_with(source: &[u8], options: MinifyOptions) -> Result<Vec<u8>, MinifyError> {
    let mut out = Minifier::new(source, options).run().inspect_err(|err| {
        log::debug!("minify failed after reading {} bytes: {err}", source.len());
    })?;
    if options.trim {
        out = trim_ascii_whitespace(&out).to_vec();
    }
    log::trace!("minified {} bytes into {}", source.len(), out.len());
    Ok(out)
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    bytes.trim_with(|c| c.is_ascii_whitespace())
}
