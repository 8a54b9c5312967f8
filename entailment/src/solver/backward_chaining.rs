//! Goal-driven inference: only clauses that can contribute to the query
//! are pulled in and evaluated.

use super::{
    chaining::{fire, verdict, HornKnowledge},
    Solver, SolverError,
};
use crate::{
    calculus::{evaluation::Evaluable, knowledge::PartialKnowledge, Proposition, Symbol},
    horn::HornClause,
    knowledge_base::KnowledgeBase,
    misc::log::targets,
};
use alloc::{vec, vec::Vec};

#[derive(Debug, Clone, Default)]
pub struct BackwardChaining {
    horn: HornKnowledge,
}

impl BackwardChaining {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alternates two steps until neither makes progress:
    /// pull in every clause whose consequent is a symbol still to be
    /// solved, adding its body symbols to the work-list, then fire the
    /// pulled clauses. The query is checked after each round.
    fn search(&self, target: &Proposition) -> Result<(bool, PartialKnowledge), SolverError> {
        let clauses = self.horn.clauses();
        let mut knowledge = self.horn.begin_search();

        let mut to_solve: Vec<Symbol> = Vec::new();
        push_unique(&mut to_solve, target.symbols());

        let mut pulled = vec![false; clauses.len()];
        let mut active: Vec<HornClause> = Vec::new();
        let mut rounds = 0usize;

        loop {
            rounds += 1;
            let mut progress = false;

            for (i, clause) in clauses.iter().enumerate() {
                if pulled[i] || !to_solve.contains(&clause.consequent().symbol()) {
                    continue;
                }
                log::trace!(
                    target: targets::BACKWARD_CHAINING,
                    "Pulled `{}` for {}",
                    clause.source().text(),
                    clause.consequent().symbol()
                );
                pulled[i] = true;
                progress = true;
                push_unique(&mut to_solve, clause.body_symbols());
                active.push(clause.clone());
            }

            let mut i = 0;
            while i < active.len() {
                match fire(&mut active[i], &mut knowledge, targets::BACKWARD_CHAINING)? {
                    Some(symbol) => {
                        to_solve.retain(|s| *s != symbol);
                        active.swap_remove(i);
                        progress = true;
                    }
                    None => i += 1,
                }
            }

            if let Some(entailed) = verdict(target, &knowledge) {
                log::debug!(
                    target: targets::BACKWARD_CHAINING,
                    "`{}` decided after {} rounds: {}",
                    target,
                    rounds,
                    entailed
                );
                return Ok((entailed, knowledge));
            }
            if !progress {
                break;
            }
        }

        log::debug!(
            target: targets::BACKWARD_CHAINING,
            "`{}` undecided after {} rounds, {} clauses left unfired",
            target,
            rounds,
            active.len()
        );
        Ok((false, knowledge))
    }

    fn entails(&mut self, target: &Proposition) -> Result<bool, SolverError> {
        let outcome = self.search(target);
        self.horn.finish_search(outcome)
    }
}

fn push_unique(to_solve: &mut Vec<Symbol>, symbols: Vec<Symbol>) {
    for s in symbols {
        if !to_solve.contains(&s) {
            to_solve.push(s);
        }
    }
}

impl Solver for BackwardChaining {
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
