// syntax (like BNF)
//
// root       = 'ε' | '∅' | regex
// regex      = concat ( '|' concat ) *
// concat     = kleene +
// kleene     = base '*' ?
// base       = '(' regex ')' | '[' class ']' | char
// class      = '^' ? class-item +
// class-item = char ( '-' char ) ?
//
// `char` is any character except the reserved `( ) [ ] | * ^`.
// Alternation and concatenation nest to the right.

pub mod ast;
mod class;
mod cursor;
mod error;
mod parser;

pub use ast::Ast;
pub use class::{ClassItem, ClassSpec};
pub use error::{Found, ParseError};
pub use parser::{Parser, ParserConfig};

use crate::symbol::{CharClass, CharClassFactory};

/// Parses `pattern` with the default configuration and [`CharClass`] symbols.
///
/// ```
/// use redeggs::{parse, Ast, CharClass};
///
/// let ast = parse("a*").unwrap();
/// assert_eq!(ast, Ast::star(Ast::literal(CharClass::single('a'))));
/// ```
pub fn parse(pattern: &str) -> Result<Ast<CharClass>, ParseError> {
    Parser::new(CharClassFactory).parse(pattern)
}
