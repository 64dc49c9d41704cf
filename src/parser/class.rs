use super::cursor::Cursor;
use super::error::ParseError;
use super::parser::is_literal;
use crate::symbol::SymbolFactory;

/// One entry of a bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassItem {
    Char(char),        // a
    Range(char, char), // a - z
}

impl ClassItem {
    /// Inclusive range, `None` when `lo > hi`.
    pub fn range(lo: char, hi: char) -> Option<Self> {
        (lo <= hi).then_some(ClassItem::Range(lo, hi))
    }

    pub fn bounds(&self) -> (char, char) {
        match *self {
            ClassItem::Char(c) => (c, c),
            ClassItem::Range(lo, hi) => (lo, hi),
        }
    }
}

/// Everything a bracket expression says about the characters it matches.
///
/// Items keep their source order and there is always at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSpec {
    negated: bool,
    items: Vec<ClassItem>,
}

impl ClassSpec {
    /// Returns `None` for an empty item list.
    pub fn new(negated: bool, items: Vec<ClassItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(ClassSpec { negated, items })
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ClassItem> {
        self.items
    }
}

/// Parses a bracket expression whose `[` has already been consumed, up to
/// and including the closing `]`.
pub(crate) fn parse_class<F: SymbolFactory>(
    cursor: &mut Cursor<'_>,
    factory: &F,
) -> Result<F::Symbol, ParseError> {
    let negated = parse_negation(cursor);
    let spec = parse_class_body(cursor, negated)?;
    let symbol = factory.class(spec);

    match cursor.next_if_eq(']') {
        Some(_) => Ok(symbol),
        None => Err(ParseError::unclosed(cursor, ']')),
    }
}

fn parse_negation(cursor: &mut Cursor<'_>) -> bool {
    cursor.next_if_eq('^').is_some()
}

fn parse_class_body(cursor: &mut Cursor<'_>, negated: bool) -> Result<ClassSpec, ParseError> {
    let mut items = Vec::new();
    while let Some(c) = cursor.peek().filter(|c| is_literal(*c)) {
        items.push(parse_class_item(cursor, c)?);
    }

    ClassSpec::new(negated, items).ok_or_else(|| ParseError::EmptyClass {
        position: cursor.position(),
        span: cursor.span(),
    })
}

fn parse_class_item(cursor: &mut Cursor<'_>, lo: char) -> Result<ClassItem, ParseError> {
    let start = cursor.offset();
    cursor.consume();

    if cursor.next_if_eq('-').is_none() {
        return Ok(ClassItem::Char(lo));
    }

    let hi = match cursor.peek() {
        Some(c) if is_literal(c) => c,
        _ => return Err(ParseError::unexpected(cursor)),
    };

    let item = ClassItem::range(lo, hi).ok_or_else(|| ParseError::InvalidRange {
        lo,
        hi,
        position: cursor.position(),
        span: (start, cursor.offset() + hi.len_utf8() - start).into(),
    })?;
    cursor.consume();

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_descending_bounds() {
        assert_eq!(ClassItem::range('a', 'z'), Some(ClassItem::Range('a', 'z')));
        assert_eq!(ClassItem::range('z', 'z'), Some(ClassItem::Range('z', 'z')));
        assert_eq!(ClassItem::range('z', 'a'), None);
    }

    #[test]
    fn item_bounds() {
        assert_eq!(ClassItem::Char('x').bounds(), ('x', 'x'));
        assert_eq!(ClassItem::Range('a', 'c').bounds(), ('a', 'c'));
    }

    #[test]
    fn spec_requires_items() {
        assert_eq!(ClassSpec::new(true, vec![]), None);

        let spec = ClassSpec::new(true, vec![ClassItem::Char('a')]).unwrap();
        assert!(spec.is_negated());
        assert_eq!(spec.items(), &[ClassItem::Char('a')]);
    }
}
