use thiserror::Error;

/// A malformed construct that makes the input impossible to minify.
///
/// Every kind is fatal: the call that produced it returns no output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A `/*` comment reached end of input before its closing `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A string literal reached a line break or end of input before its
    /// closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A regular expression literal reached a line break or end of input
    /// before its closing `/`.
    #[error("unterminated regular expression literal")]
    UnterminatedRegex,
}

/// Error returned by [`minify`](crate::minify) and friends.
///
/// `line` and `column` are 1-based and point at the opening `/*`, quote or
/// `/` of the construct that was never closed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at {line}:{column}")]
pub struct MinifyError {
    pub(crate) kind: ErrorKind,
    /// Line of the unterminated construct, starting at 1.
    pub line: usize,
    /// Column of the unterminated construct in characters, starting at 1.
    pub column: usize,
}

impl MinifyError {
    /// What was left unterminated.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
