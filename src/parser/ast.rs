use std::fmt;
use std::mem;

use crate::symbol::CharClass;

/// Whole-pattern marker for the language containing only the empty word.
pub const EMPTY_WORD: &str = "ε";
/// Whole-pattern marker for the empty language.
pub const EMPTY_SET: &str = "∅";

/// Syntax tree of a regular expression.
///
/// `S` is the symbol handle produced by the [`SymbolFactory`](crate::SymbolFactory)
/// the parser was built with. The parser never looks inside it.
///
/// A flat pattern of `n` operands nests `n` levels deep, so dropping,
/// comparing and formatting walk the tree with a heap stack instead of
/// recursing.
pub enum Ast<S = CharClass> {
    EmptyWord,
    EmptySet,
    Literal(S),
    Concatenation(Box<Ast<S>>, Box<Ast<S>>),
    Alternation(Box<Ast<S>>, Box<Ast<S>>),
    Star(Box<Ast<S>>),
}

impl<S> Ast<S> {
    pub fn literal(symbol: S) -> Self {
        Ast::Literal(symbol)
    }

    pub fn concat(left: Ast<S>, right: Ast<S>) -> Self {
        Ast::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn alt(left: Ast<S>, right: Ast<S>) -> Self {
        Ast::Alternation(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Ast<S>) -> Self {
        Ast::Star(Box::new(inner))
    }

    /// Height of the tree; terminals have depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((ast, depth)) = stack.pop() {
            max = max.max(depth);
            match ast {
                Ast::EmptyWord | Ast::EmptySet | Ast::Literal(_) => {}
                Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                    stack.push((&**l, depth + 1));
                    stack.push((&**r, depth + 1));
                }
                Ast::Star(inner) => stack.push((&**inner, depth + 1)),
            }
        }
        max
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(ast) = stack.pop() {
            size += 1;
            match ast {
                Ast::EmptyWord | Ast::EmptySet | Ast::Literal(_) => {}
                Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                    stack.push(l);
                    stack.push(r);
                }
                Ast::Star(inner) => stack.push(inner),
            }
        }
        size
    }

    /// Moves the children out of `self`, leaving terminals behind.
    fn take_children(&mut self, stack: &mut Vec<Ast<S>>) {
        match self {
            Ast::EmptyWord | Ast::EmptySet | Ast::Literal(_) => {}
            Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                stack.push(mem::replace(&mut **l, Ast::EmptySet));
                stack.push(mem::replace(&mut **r, Ast::EmptySet));
            }
            Ast::Star(inner) => stack.push(mem::replace(&mut **inner, Ast::EmptySet)),
        }
    }
}

impl<S> Drop for Ast<S> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut ast) = stack.pop() {
            ast.take_children(&mut stack);
        }
    }
}

impl<S: PartialEq> PartialEq for Ast<S> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Ast::EmptyWord, Ast::EmptyWord) | (Ast::EmptySet, Ast::EmptySet) => {}
                (Ast::Literal(a), Ast::Literal(b)) if a == b => {}
                (Ast::Concatenation(a1, a2), Ast::Concatenation(b1, b2))
                | (Ast::Alternation(a1, a2), Ast::Alternation(b1, b2)) => {
                    stack.push((&**a1, &**b1));
                    stack.push((&**a2, &**b2));
                }
                (Ast::Star(a), Ast::Star(b)) => stack.push((&**a, &**b)),
                _ => return false,
            }
        }
        true
    }
}

impl<S: Eq> Eq for Ast<S> {}

enum Step<'a, S> {
    Visit(&'a Ast<S>),
    Group(&'a Ast<S>),
    Text(&'static str),
}

// Single-line form of the derived layout, e.g.
// `Concatenation(Literal('a'), Star(Literal('b')))`.
impl<S: fmt::Debug> fmt::Debug for Ast<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Step::Visit(self)];
        while let Some(step) = stack.pop() {
            let ast = match step {
                Step::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Step::Visit(ast) | Step::Group(ast) => ast,
            };
            match ast {
                Ast::EmptyWord => f.write_str("EmptyWord")?,
                Ast::EmptySet => f.write_str("EmptySet")?,
                Ast::Literal(symbol) => write!(f, "Literal({:?})", symbol)?,
                Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                    f.write_str(match ast {
                        Ast::Concatenation(..) => "Concatenation(",
                        _ => "Alternation(",
                    })?;
                    stack.push(Step::Text(")"));
                    stack.push(Step::Visit(r));
                    stack.push(Step::Text(", "));
                    stack.push(Step::Visit(l));
                }
                Ast::Star(inner) => {
                    f.write_str("Star(")?;
                    stack.push(Step::Text(")"));
                    stack.push(Step::Visit(inner));
                }
            }
        }
        Ok(())
    }
}

// Parentheses are only emitted where the right-folding grammar would
// otherwise build a different tree.
impl<S: fmt::Display> fmt::Display for Ast<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A whole pattern spelled like a marker would parse as the marker.
        if let Ast::Literal(symbol) = self {
            let text = symbol.to_string();
            if text == EMPTY_WORD || text == EMPTY_SET {
                return write!(f, "({})", text);
            }
            return f.write_str(&text);
        }

        let mut stack = vec![Step::Visit(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Group(ast) => {
                    f.write_str("(")?;
                    stack.push(Step::Text(")"));
                    stack.push(Step::Visit(ast));
                }
                Step::Visit(ast) => match ast {
                    Ast::EmptyWord => f.write_str(EMPTY_WORD)?,
                    Ast::EmptySet => f.write_str(EMPTY_SET)?,
                    Ast::Literal(symbol) => write!(f, "{}", symbol)?,
                    Ast::Alternation(l, r) => {
                        stack.push(Step::Visit(r));
                        stack.push(Step::Text("|"));
                        stack.push(operand(l, matches!(**l, Ast::Alternation(..))));
                    }
                    Ast::Concatenation(l, r) => {
                        stack.push(operand(r, matches!(**r, Ast::Alternation(..))));
                        stack.push(operand(
                            l,
                            matches!(**l, Ast::Alternation(..) | Ast::Concatenation(..)),
                        ));
                    }
                    Ast::Star(inner) => {
                        stack.push(Step::Text("*"));
                        stack.push(operand(inner, !matches!(**inner, Ast::Literal(_))));
                    }
                },
            }
        }
        Ok(())
    }
}

fn operand<S>(ast: &Ast<S>, parenthesize: bool) -> Step<'_, S> {
    if parenthesize {
        Step::Group(ast)
    } else {
        Step::Visit(ast)
    }
}
