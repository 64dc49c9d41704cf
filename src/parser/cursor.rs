use miette::SourceSpan;

/// Remaining input of one parse.
///
/// End of input is reported as `None`, so every character of the pattern,
/// `$` included, stays available as ordinary input.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
    consumed: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            rest: input,
            consumed: 0,
            offset: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        self.consumed += 1;
        self.offset += c.len_utf8();
        Some(c)
    }

    pub fn next_if_eq(&mut self, expected: char) -> Option<char> {
        match self.peek() {
            Some(c) if c == expected => self.consume(),
            _ => None,
        }
    }

    /// 1-based position of the lookahead.
    pub fn position(&self) -> usize {
        self.consumed + 1
    }

    /// Byte offset of the lookahead.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Span covering the lookahead, empty at end of input.
    pub fn span(&self) -> SourceSpan {
        let len = self.peek().map_or(0, char::len_utf8);
        (self.offset, len).into()
    }
}
