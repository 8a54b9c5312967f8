use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::{fmt::Display, ops::Deref, ops::Not};

use crate::calculus::Symbol;

/// Truth value under partial knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThreeState {
    True,
    False,
    #[default]
    Unknown,
}

impl ThreeState {
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// `None` while unknown.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for ThreeState {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl Not for ThreeState {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }
}

impl Display for ThreeState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::True => write!(f, "T"),
            Self::False => write!(f, "F"),
            Self::Unknown => write!(f, "?"),
        }
    }
}

/// Total valuation: every symbol is either true or false.
pub trait EvaluationContext {
    /// Symbols the context knows nothing about are false.
    fn eval(&self, symbol: &Symbol) -> bool;
}

/// Partial valuation.
pub trait KnowledgeContext {
    /// Symbols the context knows nothing about are [ThreeState::Unknown].
    fn state(&self, symbol: &Symbol) -> ThreeState;
}

pub trait Evaluable: Clone {
    fn check(&self, context: &impl EvaluationContext) -> bool;
    fn check_solvable(&self, context: &impl KnowledgeContext) -> ThreeState;
    /// Every symbol occurrence, left to right, duplicates included.
    fn symbols(&self) -> Vec<Symbol>;
}

macro_rules! impl_evaluable_for_ref {
    ($type:ty) => {
        impl<T> Evaluable for $type
        where
            T: Evaluable,
        {
            fn check(&self, context: &impl EvaluationContext) -> bool {
                self.deref().check(context)
            }

            fn check_solvable(&self, context: &impl KnowledgeContext) -> ThreeState {
                self.deref().check_solvable(context)
            }

            fn symbols(&self) -> Vec<Symbol> {
                self.deref().symbols()
            }
        }
    };
}

impl_evaluable_for_ref!(Rc<T>);
impl_evaluable_for_ref!(Box<T>);
impl_evaluable_for_ref!(&T);

#[cfg(test)]
mod tests {
    use super::ThreeState as TS;

    #[test]
    fn test_not() {
        assert_eq!(TS::False, !TS::True);
        assert_eq!(TS::True, !TS::False);
        assert_eq!(TS::Unknown, !TS::Unknown);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(TS::True, true.into());
        assert_eq!(TS::False, false.into());
        assert_eq!(Some(true), TS::True.as_bool());
        assert_eq!(None, TS::Unknown.as_bool());
        assert!(!TS::default().is_known());
    }
}
