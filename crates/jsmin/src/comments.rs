//! Comment stripper layered over [`Source`].

use crate::{
    error::{ErrorKind, MinifyError},
    source::Source,
};

/// Yields significant characters: the normalized source with `//` and
/// `/* */` comments removed.
///
/// A block comment reads as a single space and a line comment as the line
/// break (or end of input) that ends it. A `/` that does not open a comment
/// is returned as-is; deciding between division and regex is left to the
/// caller.
#[derive(Debug, Clone)]
pub(crate) struct CommentStripper<'src> {
    source: Source<'src>,
}

impl<'src> CommentStripper<'src> {
    pub(crate) fn new(source: Source<'src>) -> Self {
        Self { source }
    }

    /// The underlying source, for literal copies that must bypass comment
    /// handling.
    pub(crate) fn raw(&mut self) -> &mut Source<'src> {
        &mut self.source
    }

    pub(crate) fn source(&self) -> &Source<'src> {
        &self.source
    }

    pub(crate) fn next_significant(&mut self) -> Result<Option<u8>, MinifyError> {
        let start = self.source.offset();
        let c = self.source.next();
        if c != Some(b'/') {
            return Ok(c);
        }
        match self.source.peek() {
            Some(b'/') => Ok(self.skip_line_comment()),
            Some(b'*') => {
                self.source.next();
                self.skip_block_comment(start)?;
                Ok(Some(b' '))
            }
            _ => Ok(c),
        }
    }

    fn skip_line_comment(&mut self) -> Option<u8> {
        loop {
            match self.source.next() {
                end @ (Some(b'\n') | None) => return end,
                Some(_) => {}
            }
        }
    }

    fn skip_block_comment(&mut self, start: usize) -> Result<(), MinifyError> {
        loop {
            match self.source.next() {
                Some(b'*') if self.source.peek() == Some(b'/') => {
                    self.source.next();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(self.source.error_at(ErrorKind::UnterminatedComment, start));
                }
            }
        }
    }
}
