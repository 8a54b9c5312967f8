use crate::{
    calculus::{knowledge::Contradiction, Proposition, Symbol},
    config::Config,
    horn::MalformedHornClause,
    knowledge_base::{InvalidSentence, KnowledgeBase},
    parser::{parse, SyntaxError},
};
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{error::Error, fmt::Display, str::FromStr};

mod chaining;
pub mod backward_chaining;
pub mod forward_chaining;
pub mod truth_table;

pub use backward_chaining::BackwardChaining;
pub use forward_chaining::ForwardChaining;
pub use truth_table::TruthTableSolver;

/// Decides whether told knowledge entails a symbol or a formula.
///
/// Answers are only as current as the last `tell`: a solver is told
/// sentences first and queried afterwards.
pub trait Solver {
    type Error: Error + From<SyntaxError>;

    /// Adds `;`-separated sentences to the knowledge base.
    ///
    /// Either every sentence is accepted or none is.
    fn tell(&mut self, knowledge: &str) -> Result<(), Self::Error>;
    /// Forgets all knowledge and the results of previous queries.
    fn reset(&mut self);
    fn knowledge_base(&self) -> &KnowledgeBase;

    /// Whether the knowledge base entails `symbol`.
    fn solve_and_query(&mut self, symbol: &str) -> Result<bool, Self::Error>;
    /// How much support `symbol` has, without running a new search.
    ///
    /// For a truth table this is the number of models in which the
    /// symbol holds. Chaining solvers answer `1` if the last search
    /// proved the symbol true and `0` otherwise.
    fn query(&self, symbol: &str) -> usize;
    /// Nonzero if the knowledge base entails `formula`.
    fn query_formula(&mut self, formula: &Proposition) -> Result<usize, Self::Error>;
    /// Symbols proven true, in order of first appearance.
    fn proven_symbols(&self) -> Vec<Symbol>;

    /// Parses `formula` and forwards to [Solver::query_formula].
    fn query_using_rule(&mut self, formula: &str) -> Result<usize, Self::Error> {
        let formula = parse(formula)?;
        self.query_formula(&formula)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    InvalidSentence(InvalidSentence),
    Syntax(SyntaxError),
    MalformedHornClause(MalformedHornClause),
    Contradiction(Contradiction),
    UniverseTooLarge { symbols: usize, limit: usize },
}

impl Display for SolverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSentence(e) => write!(f, "invalid sentence {}", e),
            Self::Syntax(e) => write!(f, "invalid query: {}", e),
            Self::MalformedHornClause(e) => write!(f, "{}", e),
            Self::Contradiction(e) => write!(f, "{}", e),
            Self::UniverseTooLarge { symbols, limit } => write!(
                f,
                "truth table over {} symbols exceeds the limit of {}",
                symbols, limit
            ),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSentence(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::MalformedHornClause(e) => Some(e),
            Self::Contradiction(e) => Some(e),
            Self::UniverseTooLarge { .. } => None,
        }
    }
}

impl From<InvalidSentence> for SolverError {
    fn from(value: InvalidSentence) -> Self {
        Self::InvalidSentence(value)
    }
}

impl From<SyntaxError> for SolverError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<MalformedHornClause> for SolverError {
    fn from(value: MalformedHornClause) -> Self {
        Self::MalformedHornClause(value)
    }
}

impl From<Contradiction> for SolverError {
    fn from(value: Contradiction) -> Self {
        Self::Contradiction(value)
    }
}

/// The inference methods, selected by their short names `TT`, `FC` and `BC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    TruthTable,
    ForwardChaining,
    BackwardChaining,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::TruthTable,
        Method::ForwardChaining,
        Method::BackwardChaining,
    ];

    /// Short name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Method::TruthTable => "TT",
            Method::ForwardChaining => "FC",
            Method::BackwardChaining => "BC",
        }
    }

    pub fn solver(self, config: Config) -> Box<dyn Solver<Error = SolverError>> {
        match self {
            Method::TruthTable => Box::new(TruthTableSolver::new(config)),
            Method::ForwardChaining => Box::new(ForwardChaining::new()),
            Method::BackwardChaining => Box::new(BackwardChaining::new()),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown method `{}`, expected TT, FC or BC", self.0)
    }
}

impl Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(Ok(Method::TruthTable), "TT".parse());
        assert_eq!(Ok(Method::ForwardChaining), "fc".parse());
        assert_eq!(Ok(Method::BackwardChaining), " Bc ".parse());
        assert_eq!(
            Err(UnknownMethod("DPLL".into())),
            "DPLL".parse::<Method>()
        );

        for m in Method::ALL {
            assert_eq!(Ok(m), m.name().parse());
        }
    }

    #[test]
    fn test_every_method_builds_a_solver() {
        for m in Method::ALL {
            let mut solver = m.solver(Config::default());
            solver.tell("a; a => b").unwrap();
            assert!(solver.solve_and_query("b").unwrap(), "{}", m);
            assert_eq!(2, solver.knowledge_base().len());
        }
    }

    #[test]
    fn test_query_using_rule_reports_syntax_errors() {
        for m in Method::ALL {
            let mut solver = m.solver(Config::default());
            solver.tell("a").unwrap();
            assert_eq!(
                Err(SolverError::Syntax(SyntaxError::MissingOperand("&"))),
                solver.query_using_rule("a &")
            );
        }
    }
}
