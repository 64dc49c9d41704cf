use std::fmt;

use crate::parser::{ClassItem, ClassSpec};

/// Builds the symbols stored in [`Ast::Literal`](crate::Ast::Literal) nodes.
///
/// The parser calls `literal` once per plain character and `class` once per
/// bracket expression. It stores the returned handles and never inspects them.
pub trait SymbolFactory {
    type Symbol;

    fn literal(&self, c: char) -> Self::Symbol;

    fn class(&self, spec: ClassSpec) -> Self::Symbol;
}

impl<T: SymbolFactory + ?Sized> SymbolFactory for &T {
    type Symbol = T::Symbol;

    fn literal(&self, c: char) -> Self::Symbol {
        (**self).literal(c)
    }

    fn class(&self, spec: ClassSpec) -> Self::Symbol {
        (**self).class(spec)
    }
}

/// A set of characters: sorted, non-overlapping inclusive ranges, optionally
/// complemented.
///
/// Two classes describing the same ranges compare equal regardless of how
/// their bracket expressions were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    pub fn single(c: char) -> Self {
        CharClass {
            negated: false,
            ranges: vec![(c, c)],
        }
    }

    pub fn from_spec(spec: ClassSpec) -> Self {
        let negated = spec.is_negated();
        let ranges = spec.into_items().iter().map(ClassItem::bounds).collect();

        CharClass {
            negated,
            ranges: normalize(ranges),
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn contains(&self, c: char) -> bool {
        let included = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        included != self.negated
    }
}

fn normalize(mut ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    ranges.retain(|(lo, hi)| lo <= hi);
    ranges.sort_unstable();

    let mut merged: Vec<(char, char)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if (lo as u32) <= (last.1 as u32).saturating_add(1) => {
                last.1 = last.1.max(hi);
            }
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

// Renders the bracket expression the grammar would parse back into an equal
// class. A range starting with '-' goes first, where it cannot be taken as
// the tail of a preceding range.
impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (false, [(lo, hi)]) = (self.negated, self.ranges.as_slice()) {
            if lo == hi {
                return write!(f, "{}", lo);
            }
        }

        f.write_str("[")?;
        if self.negated {
            f.write_str("^")?;
        }

        let (dashed, others): (Vec<_>, Vec<_>) =
            self.ranges.iter().partition(|(lo, _)| *lo == '-');
        for (lo, hi) in dashed.into_iter().chain(others) {
            if lo == hi {
                write!(f, "{}", lo)?;
            } else {
                write!(f, "{}-{}", lo, hi)?;
            }
        }

        f.write_str("]")
    }
}

/// The default [`SymbolFactory`], producing [`CharClass`] symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClassFactory;

impl SymbolFactory for CharClassFactory {
    type Symbol = CharClass;

    fn literal(&self, c: char) -> CharClass {
        CharClass::single(c)
    }

    fn class(&self, spec: ClassSpec) -> CharClass {
        CharClass::from_spec(spec)
    }
}
