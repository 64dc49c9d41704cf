use super::ast::{Ast, EMPTY_SET, EMPTY_WORD};
use super::class::parse_class;
use super::cursor::Cursor;
use super::error::ParseError;
use crate::symbol::SymbolFactory;

const RESERVED_CHARS: [char; 7] = [
    '|', // union
    '*', // star
    '^', // class negation
    '(', ')', // group brackets
    '[', ']', // class brackets
];

pub(crate) fn is_literal(c: char) -> bool {
    !RESERVED_CHARS.contains(&c)
}

fn starts_term(c: char) -> bool {
    is_literal(c) || c == '(' || c == '['
}

/// Tunables of a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    nest_limit: u32,
}

impl ParserConfig {
    pub const DEFAULT_NEST_LIMIT: u32 = 250;

    /// Maximum number of groups that may be open at once. Deeper patterns
    /// fail with [`ParseError::NestTooDeep`].
    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            nest_limit: Self::DEFAULT_NEST_LIMIT,
        }
    }
}

/// Recursive-descent regular expression parser.
///
/// Symbols for literals and bracket expressions are built by the injected
/// [`SymbolFactory`]. A parser holds no per-parse state, so one instance can
/// serve any number of parses.
#[derive(Debug, Clone, Default)]
pub struct Parser<F> {
    factory: F,
    config: ParserConfig,
}

impl<F: SymbolFactory> Parser<F> {
    pub fn new(factory: F) -> Self {
        Parser::with_config(factory, ParserConfig::default())
    }

    pub fn with_config(factory: F, config: ParserConfig) -> Self {
        Parser { factory, config }
    }

    pub fn parse(&self, pattern: &str) -> Result<Ast<F::Symbol>, ParseError> {
        match pattern {
            EMPTY_WORD => return Ok(Ast::EmptyWord),
            EMPTY_SET => return Ok(Ast::EmptySet),
            _ => {}
        }

        let mut state = State {
            factory: &self.factory,
            config: &self.config,
            cursor: Cursor::new(pattern),
            depth: 0,
        };

        let ast = state.parse_regex()?;
        match state.cursor.peek() {
            None => Ok(ast),
            Some(_) => Err(ParseError::unexpected(&state.cursor)),
        }
    }
}

struct State<'p, 'a, F> {
    factory: &'p F,
    config: &'p ParserConfig,
    cursor: Cursor<'a>,
    depth: u32,
}

impl<F: SymbolFactory> State<'_, '_, F> {
    fn parse_regex(&mut self) -> Result<Ast<F::Symbol>, ParseError> {
        match self.cursor.peek() {
            Some(c) if starts_term(c) => {
                let concat = self.parse_concat()?;
                self.parse_union(concat)
            }
            _ => Err(ParseError::unexpected(&self.cursor)),
        }
    }

    fn parse_union(&mut self, left: Ast<F::Symbol>) -> Result<Ast<F::Symbol>, ParseError> {
        let mut rest = Vec::new();
        loop {
            match self.cursor.peek() {
                Some('|') => {
                    self.cursor.consume();
                    rest.push(self.parse_concat()?);
                }
                None | Some(')') => return Ok(fold_right(left, rest, Ast::alt)),
                Some(_) => return Err(ParseError::unexpected(&self.cursor)),
            }
        }
    }

    fn parse_concat(&mut self) -> Result<Ast<F::Symbol>, ParseError> {
        match self.cursor.peek() {
            Some(c) if starts_term(c) => {
                let kleene = self.parse_kleene()?;
                self.parse_suffix(kleene)
            }
            _ => Err(ParseError::unexpected(&self.cursor)),
        }
    }

    fn parse_suffix(&mut self, left: Ast<F::Symbol>) -> Result<Ast<F::Symbol>, ParseError> {
        let mut rest = Vec::new();
        loop {
            match self.cursor.peek() {
                Some(c) if starts_term(c) => rest.push(self.parse_kleene()?),
                None | Some(')') | Some('|') => return Ok(fold_right(left, rest, Ast::concat)),
                Some(_) => return Err(ParseError::unexpected(&self.cursor)),
            }
        }
    }

    fn parse_kleene(&mut self) -> Result<Ast<F::Symbol>, ParseError> {
        let base = self.parse_base()?;
        self.parse_star(base)
    }

    fn parse_star(&mut self, base: Ast<F::Symbol>) -> Result<Ast<F::Symbol>, ParseError> {
        match self.cursor.peek() {
            Some('*') => {
                self.cursor.consume();
                Ok(Ast::star(base))
            }
            Some(c) if starts_term(c) || c == ')' || c == '|' => Ok(base),
            None => Ok(base),
            Some(_) => Err(ParseError::unexpected(&self.cursor)),
        }
    }

    fn parse_base(&mut self) -> Result<Ast<F::Symbol>, ParseError> {
        match self.cursor.peek() {
            Some('(') => self.parse_group(),
            Some('[') => {
                self.cursor.consume(); // consume '['
                let symbol = parse_class(&mut self.cursor, self.factory)?;
                Ok(Ast::literal(symbol))
            }
            Some(c) if is_literal(c) => {
                self.cursor.consume();
                Ok(Ast::literal(self.factory.literal(c)))
            }
            _ => Err(ParseError::unexpected(&self.cursor)),
        }
    }

    fn parse_group(&mut self) -> Result<Ast<F::Symbol>, ParseError> {
        if self.depth >= self.config.nest_limit {
            return Err(ParseError::NestTooDeep {
                limit: self.config.nest_limit,
                position: self.cursor.position(),
                span: self.cursor.span(),
            });
        }
        self.cursor.consume(); // consume '('

        self.depth += 1;
        let ast = self.parse_regex()?;
        self.depth -= 1;

        match self.cursor.next_if_eq(')') {
            Some(_) => Ok(ast),
            None => Err(ParseError::unclosed(&self.cursor, ')')),
        }
    }
}

/// `a (b (c d))`: joins `first` and `rest` so that the last operand is the
/// innermost right child.
fn fold_right<S>(first: Ast<S>, rest: Vec<Ast<S>>, join: fn(Ast<S>, Ast<S>) -> Ast<S>) -> Ast<S> {
    let mut rest = rest.into_iter().rev();
    match rest.next() {
        None => first,
        Some(last) => {
            let tail = rest.fold(last, |acc, ast| join(ast, acc));
            join(first, tail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_chars_are_not_literals() {
        for c in RESERVED_CHARS {
            assert!(!is_literal(c), "{}", c);
        }
        for c in ['a', '$', '-', 'ε', '∅', '.', '\\', ' '] {
            assert!(is_literal(c), "{}", c);
        }
    }

    #[test]
    fn fold_right_nests_to_the_right() {
        let lit = |n: u8| Ast::<u8>::Literal(n);

        assert_eq!(fold_right(lit(1), vec![], Ast::concat), lit(1));
        assert_eq!(
            fold_right(lit(1), vec![lit(2), lit(3)], Ast::concat),
            Ast::concat(lit(1), Ast::concat(lit(2), lit(3)))
        );
    }

    #[test]
    fn config_builder() {
        let config = ParserConfig::default();
        assert_eq!(config.nest_limit, ParserConfig::DEFAULT_NEST_LIMIT);
        assert_eq!(config.nest_limit(3).nest_limit, 3);
    }
}
