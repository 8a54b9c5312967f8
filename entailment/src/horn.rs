//! Horn clauses: a body formula implying a single literal.
//!
//! A fact `a` is the clause `T => a`, and `~a` is `T => ~a`.

use crate::{
    calculus::{
        evaluation::{Evaluable, KnowledgeContext, ThreeState},
        Proposition, Symbol,
    },
    knowledge_base::Sentence,
};
use alloc::{rc::Rc, string::String, vec::Vec};
use core::{error::Error, fmt::Display};
use gazebo::dupe::Dupe;
use getset::{CopyGetters, Getters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedHornClause {
    pub sentence: String,
}

impl Display for MalformedHornClause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "`{}` is not a Horn clause: expected a literal or `body => literal`",
            self.sentence
        )
    }
}

impl Error for MalformedHornClause {}

/// A symbol or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters)]
pub struct Literal {
    #[getset(get_copy = "pub")]
    symbol: Symbol,
    /// `false` for a negated symbol.
    #[getset(get_copy = "pub")]
    polarity: bool,
}

impl Literal {
    pub fn new(symbol: Symbol, polarity: bool) -> Self {
        Self { symbol, polarity }
    }

    pub fn from_proposition(proposition: &Proposition) -> Option<Self> {
        match proposition {
            Proposition::Symbol(s) => Some(Self::new(*s, true)),
            Proposition::Not(inner) => match inner.as_ref() {
                Proposition::Symbol(s) => Some(Self::new(*s, false)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.polarity {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "~{}", self.symbol)
        }
    }
}

/// Cheap to clone: the source sentence and the body are shared.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct HornClause {
    #[getset(get = "pub")]
    source: Rc<Sentence>,
    #[getset(get = "pub")]
    body: Rc<Proposition>,
    #[getset(get_copy = "pub")]
    consequent: Literal,
}

impl HornClause {
    pub fn is_fact(&self) -> bool {
        matches!(*self.body, Proposition::True)
    }

    /// The body has been reduced to a constant.
    pub fn is_fully_resolved(&self) -> bool {
        self.body.is_resolved()
    }

    /// A copy whose body is simplified by `context`.
    pub fn resolved(&self, context: &impl KnowledgeContext) -> Self {
        Self {
            source: self.source.dupe(),
            body: self.body.resolve(context),
            consequent: self.consequent,
        }
    }

    /// What the body says about the consequent's symbol.
    ///
    /// A true body proves the literal. A false body proves its opposite,
    /// so `a => b` with `a` false yields `b` false.
    pub fn prove_literal(&self, context: &impl KnowledgeContext) -> (Symbol, ThreeState) {
        let body = self.body.check_solvable(context);
        let state = if self.consequent.polarity {
            body
        } else {
            !body
        };
        (self.consequent.symbol, state)
    }

    /// Symbols the body depends on, first occurrence only.
    pub fn body_symbols(&self) -> Vec<Symbol> {
        let mut symbols = self.body.symbols();
        let mut seen = Vec::with_capacity(symbols.len());
        symbols.retain(|s| {
            if seen.contains(s) {
                false
            } else {
                seen.push(*s);
                true
            }
        });
        symbols
    }
}

impl TryFrom<Sentence> for HornClause {
    type Error = MalformedHornClause;

    fn try_from(sentence: Sentence) -> Result<Self, Self::Error> {
        let proposition = sentence.proposition().dupe();
        let (body, consequent) = match proposition.as_ref() {
            Proposition::Implies(body, consequent) => {
                (body.dupe(), Literal::from_proposition(consequent))
            }
            fact => (
                Rc::new(Proposition::True),
                Literal::from_proposition(fact),
            ),
        };

        match consequent {
            Some(consequent) => Ok(Self {
                source: Rc::new(sentence),
                body,
                consequent,
            }),
            None => Err(MalformedHornClause {
                sentence: sentence.text().clone(),
            }),
        }
    }
}

impl Display for HornClause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} => {}", self.body, self.consequent)
    }
}
