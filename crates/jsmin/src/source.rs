//! Character source: raw input bytes with one byte of lookahead.
//!
//! Normalization happens on read, so every consumer (the comment stripper and
//! the literal copy loops alike) sees the same character stream:
//! - `\r\n` and a lone `\r` read as a single `\n`,
//! - every other byte below `0x20` reads as a space,
//! - everything else, including all bytes above `0x7E`, reads unchanged.
//!
//! Lookahead is an index into the borrowed input, so `peek()` never consumes
//! and there is nothing to push back.

use bstr::ByteSlice;

use crate::error::{ErrorKind, MinifyError};

#[derive(Debug, Clone)]
pub(crate) struct Source<'src> {
    bytes: &'src [u8],
    offset: usize,
}

impl<'src> Source<'src> {
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.read_at(self.offset).map(|(c, _)| c)
    }

    /// Normalized character at `offset` and the number of raw bytes it spans.
    #[inline]
    fn read_at(&self, offset: usize) -> Option<(u8, usize)> {
        let c = *self.bytes.get(offset)?;
        Some(match c {
            b'\r' if self.bytes.get(offset + 1) == Some(&b'\n') => (b'\n', 2),
            b'\r' => (b'\n', 1),
            b'\n' => (b'\n', 1),
            c if c < b' ' => (b' ', 1),
            c => (c, 1),
        })
    }

    /// 1-based line and column of `offset` in the raw input.
    ///
    /// Only runs on the error path, so it rescans the prefix instead of
    /// tracking positions on every read.
    pub(crate) fn line_col(&self, offset: usize) -> (usize, usize) {
        let before = &self.bytes[..offset.min(self.bytes.len())];
        let mut line = 1;
        let mut line_start = 0;
        for (i, &c) in before.iter().enumerate() {
            let terminates = match c {
                b'\n' => true,
                b'\r' => before.get(i + 1) != Some(&b'\n'),
                _ => false,
            };
            if terminates {
                line += 1;
                line_start = i + 1;
            }
        }
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    pub(crate) fn error_at(&self, kind: ErrorKind, offset: usize) -> MinifyError {
        let (line, column) = self.line_col(offset);
        MinifyError { kind, line, column }
    }
}

impl Iterator for Source<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let (c, len) = self.read_at(self.offset)?;
        self.offset += len;
        Some(c)
    }
}
