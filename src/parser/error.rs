use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::cursor::Cursor;

/// Lookahead at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    End,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        match c {
            Some(c) => Found::Char(c),
            None => Found::End,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{}'", c),
            Found::End => f.write_str("end of input"),
        }
    }
}

/// Structural error aborting a parse.
///
/// `position` is 1-based and counts characters, so it is one more than the
/// number of characters consumed before the failure. `span` is the byte
/// range to label when rendering the error against the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("unexpected symbol {found} at position {position}")]
    #[diagnostic(code(redeggs::parse::unexpected_symbol))]
    UnexpectedSymbol {
        found: Found,
        position: usize,
        #[label("unexpected here")]
        span: SourceSpan,
    },

    #[error("expected closing '{expected}' but found {found} at position {position}")]
    #[diagnostic(code(redeggs::parse::unclosed))]
    Unclosed {
        expected: char,
        found: Found,
        position: usize,
        #[label("missing closing delimiter")]
        span: SourceSpan,
    },

    #[error("empty character class at position {position}")]
    #[diagnostic(
        code(redeggs::parse::empty_class),
        help("a bracket expression needs at least one character or range")
    )]
    EmptyClass {
        position: usize,
        #[label("class body ends here")]
        span: SourceSpan,
    },

    #[error("invalid range '{lo}-{hi}' at position {position}")]
    #[diagnostic(
        code(redeggs::parse::invalid_range),
        help("the lower bound of a range must not exceed the upper bound")
    )]
    InvalidRange {
        lo: char,
        hi: char,
        position: usize,
        #[label("descending range")]
        span: SourceSpan,
    },

    #[error("group nesting exceeds the limit of {limit} at position {position}")]
    #[diagnostic(code(redeggs::parse::nest_too_deep))]
    NestTooDeep {
        limit: u32,
        position: usize,
        #[label("too deeply nested")]
        span: SourceSpan,
    },
}

impl ParseError {
    pub(crate) fn unexpected(cursor: &Cursor<'_>) -> Self {
        ParseError::UnexpectedSymbol {
            found: cursor.peek().into(),
            position: cursor.position(),
            span: cursor.span(),
        }
    }

    pub(crate) fn unclosed(cursor: &Cursor<'_>, expected: char) -> Self {
        ParseError::Unclosed {
            expected,
            found: cursor.peek().into(),
            position: cursor.position(),
            span: cursor.span(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedSymbol { position, .. }
            | ParseError::Unclosed { position, .. }
            | ParseError::EmptyClass { position, .. }
            | ParseError::InvalidRange { position, .. }
            | ParseError::NestTooDeep { position, .. } => *position,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            ParseError::UnexpectedSymbol { span, .. }
            | ParseError::Unclosed { span, .. }
            | ParseError::EmptyClass { span, .. }
            | ParseError::InvalidRange { span, .. }
            | ParseError::NestTooDeep { span, .. } => *span,
        }
    }
}
