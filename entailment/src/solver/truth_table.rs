//! Entailment by model checking: enumerate every assignment to the
//! symbols of the knowledge base and keep the ones where all told
//! sentences hold.

use super::{Solver, SolverError};
use crate::{
    calculus::{
        evaluation::{Evaluable, EvaluationContext},
        truth_table::{Assignment, TruthTable},
        Proposition, Symbol,
    },
    config::Config,
    knowledge_base::KnowledgeBase,
    misc::log::targets,
};
use alloc::{vec, vec::Vec};

#[derive(Debug, Clone)]
pub struct TruthTableSolver {
    config: Config,
    knowledge_base: KnowledgeBase,
    /// Row numbers of the models of the knowledge base.
    worlds: Vec<usize>,
}

impl TruthTableSolver {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            knowledge_base: KnowledgeBase::default(),
            // The empty knowledge base has the single empty model.
            worlds: vec![0],
        }
    }

    /// Number of models of the knowledge base.
    pub fn worlds(&self) -> usize {
        self.worlds.len()
    }

    fn enumerate(&self, knowledge_base: &KnowledgeBase) -> Result<Vec<usize>, SolverError> {
        let columns = knowledge_base.universe().as_slice();
        let too_large = SolverError::UniverseTooLarge {
            symbols: columns.len(),
            limit: self.config.truth_table_symbol_limit,
        };
        if columns.len() > self.config.truth_table_symbol_limit {
            return Err(too_large);
        }

        let table =
            TruthTable::new(columns, knowledge_base.sentences()).ok_or(too_large)?;
        let size = table.size();
        let worlds = table.only_true_rows().collect::<Vec<_>>();

        log::debug!(
            target: targets::TRUTH_TABLE,
            "{} of {} rows over {} symbols are models",
            worlds.len(),
            size,
            columns.len()
        );
        Ok(worlds)
    }

    fn models(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        let columns = self.knowledge_base.universe().as_slice();
        self.worlds.iter().map(move |&row| Assignment::new(columns, row))
    }

    /// Models in which `formula` holds.
    fn count(&self, formula: &impl Evaluable) -> usize {
        self.models().filter(|m| formula.check(m)).count()
    }
}

impl Default for TruthTableSolver {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Solver for TruthTableSolver {
    type Error = SolverError;

    fn tell(&mut self, knowledge: &str) -> Result<(), Self::Error> {
        let mut knowledge_base = self.knowledge_base.clone();
        knowledge_base.tell(knowledge)?;
        self.worlds = self.enumerate(&knowledge_base)?;
        self.knowledge_base = knowledge_base;
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Entailed when the symbol holds in every model, and there is at
    /// least one model.
    fn solve_and_query(&mut self, symbol: &str) -> Result<bool, Self::Error> {
        let supported = self.query(symbol);
        log::debug!(
            target: targets::TRUTH_TABLE,
            "`{}` holds in {} of {} models",
            symbol,
            supported,
            self.worlds()
        );
        Ok(!self.worlds.is_empty() && supported == self.worlds())
    }

    fn query(&self, symbol: &str) -> usize {
        match Symbol::get(symbol) {
            Some(symbol) => self.models().filter(|m| m.eval(&symbol)).count(),
            None => 0,
        }
    }

    /// The number of models if `formula` holds in all of them, `0` otherwise.
    fn query_formula(&mut self, formula: &Proposition) -> Result<usize, Self::Error> {
        let supported = self.count(formula);
        Ok(if supported == self.worlds() {
            supported
        } else {
            0
        })
    }

    fn proven_symbols(&self) -> Vec<Symbol> {
        if self.worlds.is_empty() {
            return Vec::new();
        }
        self.knowledge_base
            .universe()
            .iter()
            .filter(|s| self.models().all(|m| m.eval(s)))
            .collect()
    }
}
