use crate::calculus::{
    evaluation::{EvaluationContext, KnowledgeContext, ThreeState},
    Symbol,
};

use alloc::{collections::BTreeMap, vec::Vec};
use core::{error::Error, fmt::Display};

/// Two derivations disagree on the value of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    pub symbol: Symbol,
    /// Value held before the conflicting derivation.
    pub known: bool,
    pub derived: bool,
}

impl Display for Contradiction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "knowledge base is contradictory: `{}` is known to be {} but was derived {}",
            self.symbol, self.known, self.derived
        )
    }
}

impl Error for Contradiction {}

/// Three-valued knowledge about every symbol of a universe.
///
/// Starts out [ThreeState::Unknown] everywhere. A symbol can only move
/// from unknown to a known value, never back and never to the opposite value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialKnowledge {
    entries: Vec<(Symbol, ThreeState)>,
    index: BTreeMap<Symbol, usize>,
}

impl PartialKnowledge {
    pub fn new<I: IntoIterator<Item = Symbol>>(universe: I) -> Self {
        let mut knowledge = Self::default();
        universe.into_iter().for_each(|s| {
            knowledge.slot(s);
        });
        knowledge
    }

    fn slot(&mut self, symbol: Symbol) -> usize {
        if let Some(&i) = self.index.get(&symbol) {
            return i;
        }
        self.entries.push((symbol, ThreeState::Unknown));
        let i = self.entries.len() - 1;
        self.index.insert(symbol, i);
        i
    }

    /// Records a derived value.
    ///
    /// Returns `true` if the symbol was unknown until now.
    pub fn commit(&mut self, symbol: Symbol, value: bool) -> Result<bool, Contradiction> {
        let i = self.slot(symbol);
        let entry = &mut self.entries[i].1;
        match entry.as_bool() {
            None => {
                *entry = value.into();
                Ok(true)
            }
            Some(known) if known == value => Ok(false),
            Some(known) => Err(Contradiction {
                symbol,
                known,
                derived: value,
            }),
        }
    }

    /// Symbols and their state in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, ThreeState)> + '_ {
        self.entries.iter().copied()
    }

    /// Symbols known to hold the given value, in universe order.
    pub fn known_as(&self, value: bool) -> impl Iterator<Item = Symbol> + '_ {
        let wanted = ThreeState::from(value);
        self.entries
            .iter()
            .filter(move |(_, state)| *state == wanted)
            .map(|(s, _)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KnowledgeContext for PartialKnowledge {
    fn state(&self, symbol: &Symbol) -> ThreeState {
        self.index
            .get(symbol)
            .map(|&i| self.entries[i].1)
            .unwrap_or_default()
    }
}

impl KnowledgeContext for BTreeMap<Symbol, ThreeState> {
    fn state(&self, symbol: &Symbol) -> ThreeState {
        self.get(symbol).copied().unwrap_or_default()
    }
}

impl EvaluationContext for BTreeMap<Symbol, bool> {
    fn eval(&self, symbol: &Symbol) -> bool {
        self.get(symbol).copied().unwrap_or(false)
    }
}
