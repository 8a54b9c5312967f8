//! Builds a [Proposition] from the text of a single sentence.
//!
//! Binding strength, strongest first: parenthesised groups, `~`, `&`, `||`,
//! `=>`, `<=>`. Each stage consumes the operands next to its operators and
//! leaves the combined node in the operator's place, so weaker stages see
//! it as a single operand. Binary operators of the same strength associate
//! to the left.

pub mod token;

use crate::{calculus::Proposition, misc::log::targets};
use alloc::vec::Vec;
use core::{error::Error, fmt::Display, mem};
use token::{tokenize, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// No tokens at all, e.g. an empty sentence or `()`.
    Empty,
    /// An operator without an operand on the side it needs one.
    MissingOperand(&'static str),
    UnmatchedParenthesis,
    /// Two operands with no operator between them, e.g. `a b`.
    MissingOperator,
    /// The tokenizer could not consume the whole input.
    Tokenize,
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "sentence is empty"),
            Self::MissingOperand(op) => write!(f, "operator `{}` is missing an operand", op),
            Self::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
            Self::MissingOperator => write!(f, "operands without an operator between them"),
            Self::Tokenize => write!(f, "sentence could not be tokenized"),
        }
    }
}

impl Error for SyntaxError {}

#[derive(Debug)]
enum Slot {
    Operator(Token<'static>),
    Operand(Proposition),
    Used,
}

impl Slot {
    fn is_used(&self) -> bool {
        matches!(self, Slot::Used)
    }
}

pub fn parse(text: &str) -> Result<Proposition, SyntaxError> {
    let tokens = tokenize(text).map_err(|_| SyntaxError::Tokenize)?;
    log::trace!(target: targets::PARSER, "{} tokens in `{}`", tokens.len(), text.trim());
    build(&tokens)
}

fn build(tokens: &[Token<'_>]) -> Result<Proposition, SyntaxError> {
    // A single symbol needs no staging.
    match tokens {
        [] => return Err(SyntaxError::Empty),
        [Token::Symbol(name)] => return Ok(Proposition::symbol(name)),
        _ => {}
    }

    let mut slots = group(tokens)?;

    negations(&mut slots)?;
    for operator in [Token::And, Token::Or, Token::Implies, Token::BiConditional] {
        binary(&mut slots, operator)?;
    }

    let mut remaining = slots.into_iter().filter(|s| !s.is_used());
    match (remaining.next(), remaining.next()) {
        (Some(Slot::Operand(root)), None) => Ok(root),
        (None, _) => Err(SyntaxError::Empty),
        _ => Err(SyntaxError::MissingOperator),
    }
}

/// Turns symbols and parenthesised groups into operands.
fn group(tokens: &[Token<'_>]) -> Result<Vec<Slot>, SyntaxError> {
    let mut slots = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            Token::LeftParen => {
                let close = matching_paren(tokens, i)?;
                slots.push(Slot::Operand(build(&tokens[i + 1..close])?));
                i = close;
            }
            Token::RightParen => return Err(SyntaxError::UnmatchedParenthesis),
            Token::Symbol(name) => slots.push(Slot::Operand(Proposition::symbol(name))),
            Token::Not => slots.push(Slot::Operator(Token::Not)),
            Token::And => slots.push(Slot::Operator(Token::And)),
            Token::Or => slots.push(Slot::Operator(Token::Or)),
            Token::Implies => slots.push(Slot::Operator(Token::Implies)),
            Token::BiConditional => slots.push(Slot::Operator(Token::BiConditional)),
        }
        i += 1;
    }

    Ok(slots)
}

fn matching_paren(tokens: &[Token<'_>], open: usize) -> Result<usize, SyntaxError> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(SyntaxError::UnmatchedParenthesis)
}

fn take_operand(
    slots: &mut [Slot],
    index: Option<usize>,
    operator: Token<'static>,
) -> Result<Proposition, SyntaxError> {
    let missing = || {
        // Operators never carry a symbol name, so the text is static.
        SyntaxError::MissingOperand(match operator {
            Token::Not => "~",
            Token::And => "&",
            Token::Or => "||",
            Token::Implies => "=>",
            _ => "<=>",
        })
    };

    match index.map(|i| mem::replace(&mut slots[i], Slot::Used)) {
        Some(Slot::Operand(p)) => Ok(p),
        _ => Err(missing()),
    }
}

fn next_unused(slots: &[Slot], from: usize) -> Option<usize> {
    slots[from + 1..]
        .iter()
        .position(|s| !s.is_used())
        .map(|i| i + from + 1)
}

fn previous_unused(slots: &[Slot], from: usize) -> Option<usize> {
    slots[..from].iter().rposition(|s| !s.is_used())
}

/// Right to left, so that in `~~a` the inner negation is built first.
fn negations(slots: &mut [Slot]) -> Result<(), SyntaxError> {
    for i in (0..slots.len()).rev() {
        if matches!(slots[i], Slot::Operator(Token::Not)) {
            let operand = take_operand(slots, next_unused(slots, i), Token::Not)?;
            slots[i] = Slot::Operand(Proposition::not(operand));
        }
    }
    Ok(())
}

fn binary(slots: &mut [Slot], operator: Token<'static>) -> Result<(), SyntaxError> {
    for i in 0..slots.len() {
        if !matches!(&slots[i], Slot::Operator(op) if *op == operator) {
            continue;
        }

        let left = take_operand(slots, previous_unused(slots, i), operator)?;
        let right = take_operand(slots, next_unused(slots, i), operator)?;

        slots[i] = Slot::Operand(match operator {
            Token::And => Proposition::and(left, right),
            Token::Or => Proposition::or(left, right),
            Token::Implies => Proposition::implies(left, right),
            _ => Proposition::bi_conditional(left, right),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::{Evaluable, Symbol};
    use alloc::collections::BTreeMap;

    use Proposition as P;

    fn s(name: &str) -> P {
        P::symbol(name)
    }

    #[test]
    fn test_single_symbol() {
        assert_eq!(Ok(s("a")), parse("a"));
        assert_eq!(Ok(s("p2")), parse("  p2 "));
    }

    #[test]
    fn test_parentheses_bind_first() {
        let p = parse("(a&b)=>c").unwrap();
        assert_eq!(P::implies(P::and(s("a"), s("b")), s("c")), p);

        let world: BTreeMap<Symbol, bool> = [("a", true), ("b", true), ("c", false)]
            .into_iter()
            .map(|(n, v)| (Symbol::new(n), v))
            .collect();
        assert!(!p.check(&world));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            Ok(P::implies(P::and(s("a"), s("b")), s("c"))),
            parse("a & b => c")
        );
        assert_eq!(
            Ok(P::or(s("a"), P::and(s("b"), s("c")))),
            parse("a || b & c")
        );
        assert_eq!(
            Ok(P::bi_conditional(
                P::implies(s("a"), P::or(s("b"), s("c"))),
                P::not(s("d"))
            )),
            parse("a => b || c <=> ~d")
        );
        assert_eq!(
            Ok(P::and(P::not(s("a")), s("b"))),
            parse("~a & b")
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            Ok(P::and(P::and(s("a"), s("b")), s("c"))),
            parse("a & b & c")
        );
        assert_eq!(
            Ok(P::implies(P::implies(s("a"), s("b")), s("c"))),
            parse("a => b => c")
        );
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(
            Ok(P::and(
                s("a"),
                P::or(P::and(s("b"), s("c")), P::not(s("d")))
            )),
            parse("a & ((b & c) || ~(d))")
        );
        assert_eq!(Ok(s("a")), parse("((a))"));
    }

    #[test]
    fn test_stacked_negation() {
        assert_eq!(Ok(P::not(P::not(s("a")))), parse("~~a"));
        assert_eq!(Ok(P::not(P::and(s("a"), s("b")))), parse("~(a & b)"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(Err(SyntaxError::Empty), parse(""));
        assert_eq!(Err(SyntaxError::Empty), parse("   "));
        assert_eq!(Err(SyntaxError::Empty), parse("a & ()"));
        assert_eq!(Err(SyntaxError::MissingOperand("&")), parse("a &"));
        assert_eq!(Err(SyntaxError::MissingOperand("=>")), parse("=> b"));
        assert_eq!(Err(SyntaxError::MissingOperand("~")), parse("a & ~"));
        assert_eq!(Err(SyntaxError::MissingOperand("&")), parse("a & || b"));
        assert_eq!(Err(SyntaxError::MissingOperand("<=>")), parse("<=>"));
        assert_eq!(Err(SyntaxError::UnmatchedParenthesis), parse("(a & b"));
        assert_eq!(Err(SyntaxError::UnmatchedParenthesis), parse("a & b)"));
        assert_eq!(Err(SyntaxError::UnmatchedParenthesis), parse(")"));
        assert_eq!(Err(SyntaxError::MissingOperator), parse("a b"));
        assert_eq!(Err(SyntaxError::MissingOperator), parse("a ~b"));
    }
}
