mod parser;
mod symbol;

pub use parser::ast::{EMPTY_SET, EMPTY_WORD};
pub use parser::{parse, Ast, ClassItem, ClassSpec, Found, ParseError, Parser, ParserConfig};
pub use symbol::{CharClass, CharClassFactory, SymbolFactory};
