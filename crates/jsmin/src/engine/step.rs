//! Pure decision functions of the emission engine.
//!
//! Nothing here touches input or output; the engine feeds the current
//! lookahead pair (or the next raw literal character) in and acts on the
//! answer.

/// What to do with the lookahead pair `(current, ahead)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Write `current`, then advance.
    Emit,
    /// Discard `current`, then advance.
    Drop,
    /// Keep `current` and replace `ahead` with the next significant
    /// character.
    SkipAhead,
}

/// Outcome of reading one raw character inside a string or regex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralStep {
    /// Ordinary literal content.
    Copy(u8),
    /// A backslash; it and the following character are copied verbatim.
    Escape,
    /// The unescaped terminator.
    Close,
    /// A line break or end of input before the terminator.
    Unterminated,
}

/// Letters, digits, `_`, `$`, `\` and every byte above `0x7E`.
///
/// Bytes above `0x7E` cover all non-ASCII identifier characters (and, by
/// accident, non-ASCII punctuation) without decoding anything.
#[inline]
pub(crate) fn is_word_char(c: Option<u8>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'$' | b'\\') || c > 126)
}

/// Characters after which a `/` starts a regex literal rather than a
/// division.
#[inline]
pub(crate) fn opens_regex(c: u8) -> bool {
    matches!(
        c,
        b'(' | b',' | b'=' | b':' | b'[' | b'!' | b'&' | b'|' | b'?' | b'{' | b'}' | b';' | b'\n'
    )
}

/// A line break before one of these may end a statement, so it is kept.
#[inline]
fn starts_after_newline(c: u8) -> bool {
    matches!(c, b'{' | b'[' | b'(' | b'+' | b'-')
}

/// A line break after one of these may end a statement, so it is kept.
#[inline]
fn ends_before_newline(c: u8) -> bool {
    matches!(c, b'}' | b']' | b')' | b'+' | b'-' | b'"' | b'\'')
}

pub(crate) fn dispatch(current: u8, ahead: Option<u8>) -> Action {
    match current {
        b' ' => {
            if is_word_char(ahead) {
                Action::Emit
            } else {
                Action::Drop
            }
        }
        b'\n' => match ahead {
            Some(b) if starts_after_newline(b) => Action::Emit,
            Some(b' ') => Action::SkipAhead,
            b if is_word_char(b) => Action::Emit,
            _ => Action::Drop,
        },
        a => match ahead {
            Some(b' ') => {
                if is_word_char(Some(a)) {
                    Action::Emit
                } else {
                    Action::SkipAhead
                }
            }
            Some(b'\n') => {
                if ends_before_newline(a) || is_word_char(Some(a)) {
                    Action::Emit
                } else {
                    Action::SkipAhead
                }
            }
            _ => Action::Emit,
        },
    }
}

pub(crate) fn literal_step(terminator: u8, c: Option<u8>) -> LiteralStep {
    match c {
        None | Some(b'\n') => LiteralStep::Unterminated,
        Some(c) if c == terminator => LiteralStep::Close,
        Some(b'\\') => LiteralStep::Escape,
        Some(c) => LiteralStep::Copy(c),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b'a', true)]
    #[case(b'Z', true)]
    #[case(b'7', true)]
    #[case(b'_', true)]
    #[case(b'$', true)]
    #[case(b'\\', true)]
    #[case(0x7f, true)]
    #[case(0xc3, true)]
    #[case(b'~', false)]
    #[case(b' ', false)]
    #[case(b'\n', false)]
    #[case(b'/', false)]
    #[case(b'"', false)]
    fn word_chars(#[case] c: u8, #[case] expected: bool) {
        assert_eq!(is_word_char(Some(c)), expected);
    }

    #[test]
    fn end_of_input_is_not_a_word_char() {
        assert!(!is_word_char(None));
    }

    #[rstest]
    #[case(b' ', Some(b'x'), Action::Emit)]
    #[case(b' ', Some(b'('), Action::Drop)]
    #[case(b' ', Some(b' '), Action::Drop)]
    #[case(b' ', None, Action::Drop)]
    #[case(b'\n', Some(b'{'), Action::Emit)]
    #[case(b'\n', Some(b'['), Action::Emit)]
    #[case(b'\n', Some(b'('), Action::Emit)]
    #[case(b'\n', Some(b'+'), Action::Emit)]
    #[case(b'\n', Some(b'-'), Action::Emit)]
    #[case(b'\n', Some(b' '), Action::SkipAhead)]
    #[case(b'\n', Some(b'r'), Action::Emit)]
    #[case(b'\n', Some(b'\n'), Action::Drop)]
    #[case(b'\n', Some(b'}'), Action::Drop)]
    #[case(b'\n', Some(b'"'), Action::Drop)]
    #[case(b'\n', None, Action::Drop)]
    #[case(b'x', Some(b' '), Action::Emit)]
    #[case(b';', Some(b' '), Action::SkipAhead)]
    #[case(b'}', Some(b'\n'), Action::Emit)]
    #[case(b')', Some(b'\n'), Action::Emit)]
    #[case(b'"', Some(b'\n'), Action::Emit)]
    #[case(b'\'', Some(b'\n'), Action::Emit)]
    #[case(b'x', Some(b'\n'), Action::Emit)]
    #[case(b'{', Some(b'\n'), Action::SkipAhead)]
    #[case(b';', Some(b'\n'), Action::SkipAhead)]
    #[case(b'=', Some(b'x'), Action::Emit)]
    #[case(b';', None, Action::Emit)]
    fn dispatch_table(#[case] current: u8, #[case] ahead: Option<u8>, #[case] expected: Action) {
        assert_eq!(dispatch(current, ahead), expected);
    }

    #[rstest]
    #[case(b'"', Some(b'"'), LiteralStep::Close)]
    #[case(b'"', Some(b'\''), LiteralStep::Copy(b'\''))]
    #[case(b'/', Some(b'/'), LiteralStep::Close)]
    #[case(b'/', Some(b'\\'), LiteralStep::Escape)]
    #[case(b'\'', Some(b'\n'), LiteralStep::Unterminated)]
    #[case(b'\'', None, LiteralStep::Unterminated)]
    #[case(b'/', Some(b'*'), LiteralStep::Copy(b'*'))]
    fn literal_steps(#[case] terminator: u8, #[case] c: Option<u8>, #[case] expected: LiteralStep) {
        assert_eq!(literal_step(terminator, c), expected);
    }

    #[test]
    fn regex_openers() {
        for c in b"(,=:[!&|?{};\n" {
            assert!(opens_regex(*c), "{}", *c as char);
        }
        for c in b")]x1 +-*/\"'" {
            assert!(!opens_regex(*c), "{}", *c as char);
        }
    }
}
