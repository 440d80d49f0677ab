//! Emission engine: the two-character lookahead state machine.
//!
//! Overview
//! - `current` is the character waiting to be written (or dropped) and
//!   `ahead` the next significant character from the [`CommentStripper`].
//! - In [`Mode::Normal`] every iteration asks [`step::dispatch`] what to do
//!   with the pair: emit `current`, drop it, or keep it and skip `ahead`.
//!   Emitting and dropping both advance: `current` takes `ahead`'s value and
//!   a new `ahead` is pulled.
//! - Advancing onto a quote enters [`Mode::InString`]; pulling a `/` while
//!   `current` is an operator, opening bracket or line break enters
//!   [`Mode::InRegex`]. Literal modes read raw characters (no comment
//!   stripping) and copy each one to the output until the terminator.
//!
//! Invariants
//! - `current` is `None` only once the whole input has been consumed.
//! - In a literal mode `ahead` is stale; it is refilled when the mode ends.
//! - The closing quote of a string is not written by the literal copy: it
//!   becomes `current` and goes through the normal dispatch like any other
//!   character, which always emits it. The closing `/` of a regex is handled
//!   the same way.

mod step;


use alloc::vec::Vec;

use step::{Action, LiteralStep, dispatch, literal_step, opens_regex};

use crate::{
    comments::CommentStripper,
    error::{ErrorKind, MinifyError},
    options::MinifyOptions,
    source::Source,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    /// Inside a string literal opened by `quote` at byte offset `start`.
    InString { quote: u8, start: usize },
    /// Inside a regex literal whose opening `/` is at byte offset `start`.
    InRegex { start: usize },
}

pub(crate) struct Minifier<'src> {
    chars: CommentStripper<'src>,
    out: Vec<u8>,
    mode: Mode,
    current: Option<u8>,
    ahead: Option<u8>,
    /// Byte offset where `ahead` starts in the raw input.
    ahead_at: usize,
    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl<'src> Minifier<'src> {
    #[cfg_attr(not(any(test, feature = "fuzzing")), allow(unused_variables))]
    pub(crate) fn new(input: &'src [u8], options: MinifyOptions) -> Self {
        Self {
            chars: CommentStripper::new(Source::new(input)),
            out: Vec::with_capacity(input.len()),
            mode: Mode::Normal,
            // Starting from a line break treats leading whitespace and a
            // leading regex like anything that follows a line break.
            current: Some(b'\n'),
            ahead: None,
            ahead_at: 0,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }

    /// Consumes the whole input and returns the minified bytes.
    pub(crate) fn run(mut self) -> Result<Vec<u8>, MinifyError> {
        self.pull_ahead()?;
        loop {
            match self.mode {
                Mode::Normal => {
                    let Some(current) = self.current else {
                        break;
                    };
                    match dispatch(current, self.ahead) {
                        Action::Emit => {
                            self.out.push(current);
                            self.advance()?;
                        }
                        Action::Drop => self.advance()?,
                        Action::SkipAhead => self.pull_ahead()?,
                    }
                }
                Mode::InString { quote, start } => {
                    self.copy_literal_char(quote, ErrorKind::UnterminatedString, start)?;
                }
                Mode::InRegex { start } => {
                    self.copy_literal_char(b'/', ErrorKind::UnterminatedRegex, start)?;
                }
            }
        }
        Ok(self.out)
    }

    fn advance(&mut self) -> Result<(), MinifyError> {
        self.current = self.ahead;
        match self.current {
            Some(quote @ (b'\'' | b'"')) => {
                self.out.push(quote);
                self.mode = Mode::InString {
                    quote,
                    start: self.ahead_at,
                };
                Ok(())
            }
            _ => self.pull_ahead(),
        }
    }

    /// Refills `ahead`, switching to [`Mode::InRegex`] when the new `ahead`
    /// is a `/` in a position where an expression may begin.
    fn pull_ahead(&mut self) -> Result<(), MinifyError> {
        self.ahead_at = self.chars.source().offset();
        self.ahead = self.chars.next_significant().map_err(|err| self.fail(err))?;
        if self.ahead == Some(b'/') {
            if let Some(current) = self.current.filter(|&c| opens_regex(c)) {
                self.out.push(current);
                self.out.push(b'/');
                self.mode = Mode::InRegex {
                    start: self.ahead_at,
                };
            }
        }
        Ok(())
    }

    fn copy_literal_char(
        &mut self,
        terminator: u8,
        unterminated: ErrorKind,
        start: usize,
    ) -> Result<(), MinifyError> {
        match literal_step(terminator, self.chars.raw().next()) {
            LiteralStep::Copy(c) => self.out.push(c),
            LiteralStep::Escape => {
                self.out.push(b'\\');
                let Some(escaped) = self.chars.raw().next() else {
                    return Err(self.error(unterminated, start));
                };
                self.out.push(escaped);
            }
            LiteralStep::Close => {
                self.mode = Mode::Normal;
                self.current = Some(terminator);
                self.pull_ahead()?;
            }
            LiteralStep::Unterminated => return Err(self.error(unterminated, start)),
        }
        Ok(())
    }

    fn error(&self, kind: ErrorKind, offset: usize) -> MinifyError {
        self.fail(self.chars.source().error_at(kind, offset))
    }

    #[cfg_attr(not(any(test, feature = "fuzzing")), allow(clippy::unused_self))]
    fn fail(&self, err: MinifyError) -> MinifyError {
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.panic_on_error, "{err}");
        err
    }
}
