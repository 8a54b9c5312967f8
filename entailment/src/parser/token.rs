use alloc::vec::Vec;
use core::fmt::Display;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::satisfy,
    combinator::{all_consuming, map, not, recognize, value},
    multi::{many0, many1_count},
    sequence::{preceded, terminated},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LeftParen,
    RightParen,
    Not,
    And,
    Or,
    Implies,
    BiConditional,
    Symbol(&'a str),
}

impl Token<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Not => "~",
            Self::And => "&",
            Self::Or => "||",
            Self::Implies => "=>",
            Self::BiConditional => "<=>",
            Self::Symbol(name) => name,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn space(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Longest operator first, so `<=>` is never read as `<` followed by `=>`.
fn operator(input: &str) -> IResult<&str, Token<'_>> {
    alt((
        value(Token::BiConditional, tag("<=>")),
        value(Token::Implies, tag("=>")),
        value(Token::Or, tag("||")),
        value(Token::And, tag("&")),
        value(Token::Not, tag("~")),
        value(Token::LeftParen, tag("(")),
        value(Token::RightParen, tag(")")),
    ))(input)
}

/// Maximal run of characters that are neither whitespace nor the start of an operator.
fn symbol(input: &str) -> IResult<&str, Token<'_>> {
    map(
        recognize(many1_count(preceded(
            not(operator),
            satisfy(|c| !c.is_whitespace()),
        ))),
        Token::Symbol,
    )(input)
}

pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, nom::Err<nom::error::Error<&str>>> {
    all_consuming(terminated(
        many0(preceded(space, alt((operator, symbol)))),
        space,
    ))(input)
    .map(|(_, tokens)| tokens)
}
