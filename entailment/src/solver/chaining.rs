//! State shared by forward and backward chaining.

use crate::{
    calculus::{
        evaluation::{Evaluable, KnowledgeContext},
        knowledge::{Contradiction, PartialKnowledge},
        Proposition, Symbol,
    },
    horn::HornClause,
    knowledge_base::KnowledgeBase,
    solver::SolverError,
};
use alloc::vec::Vec;
use getset::Getters;

/// A knowledge base whose sentences are all Horn clauses,
/// together with what the last search learned from it.
#[derive(Debug, Clone, Default, Getters)]
pub(super) struct HornKnowledge {
    #[getset(get = "pub(super)")]
    knowledge_base: KnowledgeBase,
    #[getset(get = "pub(super)")]
    clauses: Vec<HornClause>,
    last_search: PartialKnowledge,
}

impl HornKnowledge {
    /// Rejects the whole batch if any sentence is not a Horn clause.
    pub(super) fn tell(&mut self, knowledge: &str) -> Result<(), SolverError> {
        let mut knowledge_base = self.knowledge_base.clone();
        let clauses = knowledge_base
            .tell(knowledge)?
            .iter()
            .cloned()
            .map(HornClause::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        self.knowledge_base = knowledge_base;
        self.clauses.extend(clauses);
        self.last_search = PartialKnowledge::default();
        Ok(())
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fresh knowledge for a new search: every symbol unknown.
    pub(super) fn begin_search(&self) -> PartialKnowledge {
        PartialKnowledge::new(self.knowledge_base.universe().iter())
    }

    /// Keeps a finished search for [query](HornKnowledge::query).
    ///
    /// A failed search leaves nothing behind.
    pub(super) fn finish_search<T>(
        &mut self,
        outcome: Result<(T, PartialKnowledge), SolverError>,
    ) -> Result<T, SolverError> {
        match outcome {
            Ok((verdict, knowledge)) => {
                self.last_search = knowledge;
                Ok(verdict)
            }
            Err(e) => {
                self.last_search = PartialKnowledge::default();
                Err(e)
            }
        }
    }

    pub(super) fn query(&self, symbol: &str) -> usize {
        Symbol::get(symbol)
            .filter(|s| self.last_search.state(s).as_bool() == Some(true))
            .map_or(0, |_| 1)
    }

    pub(super) fn proven_symbols(&self) -> Vec<Symbol> {
        self.last_search.known_as(true).collect()
    }
}

/// Resolves `clause` in place and commits its consequent once the body
/// has been decided.
///
/// Returns the committed symbol, or `None` while the body is undecided.
pub(super) fn fire(
    clause: &mut HornClause,
    knowledge: &mut PartialKnowledge,
    log_target: &str,
) -> Result<Option<Symbol>, Contradiction> {
    *clause = clause.resolved(knowledge);
    if !clause.is_fully_resolved() {
        return Ok(None);
    }

    let (symbol, state) = clause.prove_literal(knowledge);
    let Some(value) = state.as_bool() else {
        return Ok(None);
    };

    match knowledge.commit(symbol, value) {
        Ok(_) => {
            log::trace!(target: log_target, "`{}` => {} = {}", clause.source().text(), symbol, value);
            Ok(Some(symbol))
        }
        Err(e) => {
            log::warn!(target: log_target, "`{}` contradicts: {}", clause.source().text(), e);
            Err(e)
        }
    }
}

/// `Some(entailed)` once what is known decides `target`.
pub(super) fn verdict(target: &Proposition, knowledge: &PartialKnowledge) -> Option<bool> {
    target.check_solvable(knowledge).as_bool()
}
