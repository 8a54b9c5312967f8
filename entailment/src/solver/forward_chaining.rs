//! Data-driven inference: fire every clause whose body is decided
//! until the query is decided or nothing new can be derived.

use super::{
    chaining::{fire, verdict, HornKnowledge},
    Solver, SolverError,
};
use crate::{
    calculus::{knowledge::PartialKnowledge, Proposition, Symbol},
    horn::HornClause,
    knowledge_base::KnowledgeBase,
    misc::log::targets,
};
use alloc::vec::Vec;

#[derive(Debug, Clone, Default)]
pub struct ForwardChaining {
    horn: HornKnowledge,
}

impl ForwardChaining {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each clause fires at most once. The query is checked after every
    /// full pass, so a contradiction anywhere in that pass is reported
    /// rather than hidden by an early answer.
    fn search(&self, target: &Proposition) -> Result<(bool, PartialKnowledge), SolverError> {
        let mut knowledge = self.horn.begin_search();
        let mut pending: Vec<Option<HornClause>> =
            self.horn.clauses().iter().cloned().map(Some).collect();
        let mut passes = 0usize;

        loop {
            passes += 1;
            let mut fired = false;

            for slot in pending.iter_mut() {
                let Some(clause) = slot else {
                    continue;
                };
                if fire(clause, &mut knowledge, targets::FORWARD_CHAINING)?.is_some() {
                    *slot = None;
                    fired = true;
                }
            }

            if let Some(entailed) = verdict(target, &knowledge) {
                log::debug!(
                    target: targets::FORWARD_CHAINING,
                    "`{}` decided after {} passes: {}",
                    target,
                    passes,
                    entailed
                );
                return Ok((entailed, knowledge));
            }
            if !fired {
                break;
            }
        }

        log::debug!(
            target: targets::FORWARD_CHAINING,
            "`{}` undecided at fixpoint after {} passes",
            target,
            passes
        );
        Ok((false, knowledge))
    }

    fn entails(&mut self, target: &Proposition) -> Result<bool, SolverError> {
        let outcome = self.search(target);
        self.horn.finish_search(outcome)
    }
}

impl Solver for ForwardChaining {
    type Error = SolverError;

    fn tell(&mut self, knowledge: &str) -> Result<(), Self::Error> {
        self.horn.tell(knowledge)
    }

    fn reset(&mut self) {
        self.horn.reset();
    }

    fn knowledge_base(&self) -> &KnowledgeBase {
        self.horn.knowledge_base()
    }

    fn solve_and_query(&mut self, symbol: &str) -> Result<bool, Self::Error> {
        self.entails(&Proposition::symbol(symbol))
    }

    fn query(&self, symbol: &str) -> usize {
        self.horn.query(symbol)
    }

    fn query_formula(&mut self, formula: &Proposition) -> Result<usize, Self::Error> {
        self.entails(formula).map(usize::from)
    }

    fn proven_symbols(&self) -> Vec<Symbol> {
        self.horn.proven_symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::knowledge::Contradiction;
    use alloc::vec;

    const KB: &str = "p2=> p3; p3 => p1; c => e; b&e => f; f&g => h; p1=>d; p1&p3 => c; a; b; p2;";

    fn told(knowledge: &str) -> ForwardChaining {
        let mut fc = ForwardChaining::new();
        fc.tell(knowledge).unwrap();
        fc
    }

    #[test]
    fn test_entailed_symbols() {
        let mut fc = told(KB);
        for s in ["a", "b", "p2", "p3", "p1", "c", "d", "e", "f"] {
            assert!(fc.solve_and_query(s).unwrap(), "{}", s);
        }
        for s in ["g", "h", "unmentioned"] {
            assert!(!fc.solve_and_query(s).unwrap(), "{}", s);
        }
    }

    #[test]
    fn test_query_reads_last_search() {
        let mut fc = told("a; a => b; b => c");
        assert_eq!(0, fc.query("c"));

        assert!(fc.solve_and_query("c").unwrap());
        assert_eq!(1, fc.query("c"));
        assert_eq!(1, fc.query("a"));
        assert_eq!(0, fc.query("never_seen_anywhere"));
        assert_eq!(
            vec![Symbol::new("a"), Symbol::new("b"), Symbol::new("c")],
            fc.proven_symbols()
        );
    }

    #[test]
    fn test_symbol_proven_false_is_not_entailed() {
        let mut fc = told("~a; a => b");
        assert!(!fc.solve_and_query("a").unwrap());
        // A false body proves the opposite literal.
        assert!(!fc.solve_and_query("b").unwrap());
        assert_eq!(1, fc.query_using_rule("~b").unwrap());
    }

    #[test]
    fn test_formula_queries() {
        let mut fc = told(KB);
        assert_eq!(1, fc.query_using_rule("c & d").unwrap());
        assert_eq!(1, fc.query_using_rule("g || f").unwrap());
        assert_eq!(0, fc.query_using_rule("c & g").unwrap());
        assert_eq!(1, fc.query_using_rule("h => a").unwrap());
    }

    #[test]
    fn test_contradiction() {
        let mut fc = told("a; ~a;");
        assert_eq!(
            Err(SolverError::Contradiction(Contradiction {
                symbol: Symbol::new("a"),
                known: true,
                derived: false
            })),
            fc.solve_and_query("a")
        );
        assert!(fc.proven_symbols().is_empty());
    }

    #[test]
    fn test_terminates_without_progress() {
        let mut fc = told("a => b; b => a");
        assert!(!fc.solve_and_query("a").unwrap());
        assert!(fc.proven_symbols().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut fc = told("a");
        assert!(fc.solve_and_query("a").unwrap());

        fc.reset();
        assert!(fc.knowledge_base().is_empty());
        assert_eq!(0, fc.query("a"));
        assert!(!fc.solve_and_query("a").unwrap());
    }
}
