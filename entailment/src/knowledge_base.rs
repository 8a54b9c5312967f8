use crate::{
    calculus::{
        evaluation::{Evaluable, EvaluationContext, KnowledgeContext, ThreeState},
        Proposition, Symbol,
    },
    misc::log::targets,
    parser::{parse, SyntaxError},
};
use alloc::{
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::{error::Error, fmt::Display, str::FromStr};
use getset::Getters;
use itertools::Itertools;

/// A sentence that could not be parsed, with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSentence {
    pub sentence: String,
    pub error: SyntaxError,
}

impl Display for InvalidSentence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "`{}`: {}", self.sentence, self.error)
    }
}

impl Error for InvalidSentence {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// A parsed sentence together with its text and the symbols it mentions.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Sentence {
    #[getset(get = "pub")]
    text: String,
    #[getset(get = "pub")]
    proposition: Rc<Proposition>,
    /// Every occurrence, in order of appearance.
    #[getset(get = "pub")]
    symbols: Vec<Symbol>,
}

impl Sentence {
    pub fn parse(text: &str) -> Result<Self, InvalidSentence> {
        let text = text.trim();
        parse(text)
            .map(|proposition| Self::new(text, proposition))
            .map_err(|error| InvalidSentence {
                sentence: text.to_string(),
                error,
            })
    }

    pub fn new(text: &str, proposition: Proposition) -> Self {
        Self {
            text: text.to_string(),
            symbols: proposition.symbols(),
            proposition: Rc::new(proposition),
        }
    }
}

impl FromStr for Sentence {
    type Err = InvalidSentence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Evaluable for Sentence {
    fn check(&self, context: &impl EvaluationContext) -> bool {
        self.proposition.check(context)
    }

    fn check_solvable(&self, context: &impl KnowledgeContext) -> ThreeState {
        self.proposition.check_solvable(context)
    }

    fn symbols(&self) -> Vec<Symbol> {
        self.symbols.clone()
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.proposition)
    }
}

/// Splits `;`-separated knowledge into sentence texts.
///
/// Blank pieces, such as the one after a trailing `;`, are skipped.
pub fn split_sentences(knowledge: &str) -> impl Iterator<Item = &str> {
    knowledge
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Distinct symbols, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolUniverse {
    symbols: Vec<Symbol>,
}

impl SymbolUniverse {
    /// Returns `true` if the symbol was not part of the universe yet.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.symbols.contains(&symbol) {
            false
        } else {
            self.symbols.push(symbol);
            true
        }
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Extend<Symbol> for SymbolUniverse {
    fn extend<T: IntoIterator<Item = Symbol>>(&mut self, iter: T) {
        iter.into_iter().for_each(|s| {
            self.insert(s);
        });
    }
}

/// Told sentences and the universe of symbols they mention.
///
/// Append-only until [cleared](KnowledgeBase::clear).
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct KnowledgeBase {
    #[getset(get = "pub")]
    sentences: Vec<Sentence>,
    #[getset(get = "pub")]
    universe: SymbolUniverse,
}

impl KnowledgeBase {
    /// Parses every sentence of `knowledge` before appending any of them.
    ///
    /// Returns the newly appended sentences.
    pub fn tell(&mut self, knowledge: &str) -> Result<&[Sentence], InvalidSentence> {
        let told = split_sentences(knowledge)
            .map(Sentence::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let first = self.sentences.len();
        for sentence in told {
            self.universe.extend(sentence.symbols().iter().copied());
            self.sentences.push(sentence);
        }

        log::debug!(
            target: targets::KNOWLEDGE_BASE,
            "Told {} sentences, {} symbols known",
            self.sentences.len() - first,
            self.universe.len()
        );

        Ok(&self.sentences[first..])
    }

    pub fn clear(&mut self) {
        self.sentences.clear();
        self.universe = SymbolUniverse::default();
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Display for KnowledgeBase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.sentences.iter().join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_split_sentences() {
        let texts = split_sentences("p2=> p3; p3 => p1;; a ;  ;").collect::<Vec<_>>();
        assert_eq!(vec!["p2=> p3", "p3 => p1", "a"], texts);
    }

    #[test]
    fn test_sentence_records_every_occurrence() {
        let s: Sentence = " a & b => a ".parse().unwrap();

        assert_eq!("a & b => a", s.text());
        assert_eq!(
            &vec![Symbol::new("a"), Symbol::new("b"), Symbol::new("a")],
            s.symbols()
        );
    }

    #[test]
    fn test_tell_builds_universe_in_order() {
        let mut kb = KnowledgeBase::default();
        let told = kb.tell("p2=>p3; p3=>p1; a;").unwrap();
        assert_eq!(3, told.len());

        kb.tell("p1 & a => b").unwrap();

        let names = kb.universe().iter().map(|s| s.name()).collect::<Vec<_>>();
        assert_eq!(vec!["p2", "p3", "p1", "a", "b"], names);
        assert_eq!(4, kb.len());
    }

    #[test]
    fn test_tell_is_all_or_nothing() {
        let mut kb = KnowledgeBase::default();
        kb.tell("a").unwrap();

        let err = kb.tell("b; c &; d").unwrap_err();
        assert_eq!("c &", err.sentence);
        assert_eq!(SyntaxError::MissingOperand("&"), err.error);

        assert_eq!(1, kb.len());
        assert_eq!(1, kb.universe().len());
    }

    #[test]
    fn test_clear() {
        let mut kb = KnowledgeBase::default();
        kb.tell("a; b => c").unwrap();
        kb.clear();

        assert!(kb.is_empty());
        assert!(kb.universe().is_empty());
    }

    #[test]
    fn test_display() {
        let mut kb = KnowledgeBase::default();
        kb.tell("a&b => c; ~d").unwrap();

        assert_eq!("((a & b) => c); ~d", format!("{}", kb));
    }
}
