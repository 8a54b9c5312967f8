use crate::calculus::{
    evaluation::{Evaluable, EvaluationContext, KnowledgeContext, ThreeState},
    Symbol,
};

use alloc::{rc::Rc, vec, vec::Vec};
use core::fmt::Display;
use gazebo::dupe::Dupe;

/// Expression tree of a propositional sentence.
///
/// Children are reference counted so that [Proposition::resolve]
/// can hand back untouched sub-trees instead of copying them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Proposition {
    /// Constant true. `Not(True)` is used as constant false.
    True,
    Symbol(Symbol),
    Not(Rc<Proposition>),
    And(Rc<Proposition>, Rc<Proposition>),
    Or(Rc<Proposition>, Rc<Proposition>),
    /// Antecedent and consequent.
    Implies(Rc<Proposition>, Rc<Proposition>),
    BiConditional(Rc<Proposition>, Rc<Proposition>),
}

impl Proposition {
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Proposition) -> Self {
        Self::Not(Rc::new(operand))
    }

    pub fn and(left: Proposition, right: Proposition) -> Self {
        Self::And(Rc::new(left), Rc::new(right))
    }

    pub fn or(left: Proposition, right: Proposition) -> Self {
        Self::Or(Rc::new(left), Rc::new(right))
    }

    pub fn implies(antecedent: Proposition, consequent: Proposition) -> Self {
        Self::Implies(Rc::new(antecedent), Rc::new(consequent))
    }

    pub fn bi_conditional(left: Proposition, right: Proposition) -> Self {
        Self::BiConditional(Rc::new(left), Rc::new(right))
    }

    /// Constant false, `~T`.
    pub fn falsum() -> Self {
        Self::not(Self::True)
    }

    /// Whether the tree has been reduced to a constant.
    pub fn is_resolved(&self) -> bool {
        match self {
            Self::True => true,
            Self::Not(inner) => matches!(**inner, Self::True),
            _ => false,
        }
    }

    /// Value of a constant node, `None` for anything else.
    fn constant(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::Not(inner) if matches!(**inner, Self::True) => Some(false),
            _ => None,
        }
    }

    fn from_bool(value: bool) -> Rc<Self> {
        Rc::new(if value { Self::True } else { Self::falsum() })
    }

    /// Simplifies the tree using what is already known.
    ///
    /// Known sub-trees collapse to constants and operands that no longer
    /// influence the value of their parent are dropped, so a proven
    /// antecedent `req` turns `req => imp` into `imp`.
    /// The result is a fixpoint: resolving it again with the same
    /// knowledge returns an equal tree.
    pub fn resolve(self: &Rc<Self>, context: &impl KnowledgeContext) -> Rc<Self> {
        match self.as_ref() {
            Self::True => self.dupe(),
            Self::Symbol(symbol) => match context.state(symbol).as_bool() {
                Some(value) => Self::from_bool(value),
                None => self.dupe(),
            },
            Self::Not(inner) => {
                let inner_r = inner.resolve(context);
                match inner_r.constant() {
                    Some(value) => Self::from_bool(!value),
                    None if Rc::ptr_eq(&inner_r, inner) => self.dupe(),
                    None => Rc::new(Self::Not(inner_r)),
                }
            }
            Self::And(left, right) => {
                let (l, r) = (left.resolve(context), right.resolve(context));
                match (l.constant(), r.constant()) {
                    (Some(false), _) | (_, Some(false)) => Self::from_bool(false),
                    (Some(true), Some(true)) => Self::from_bool(true),
                    (Some(true), None) => r,
                    (None, Some(true)) => l,
                    (None, None) => self.rebuild(left, right, l, r, Self::And),
                }
            }
            Self::Or(left, right) => {
                let (l, r) = (left.resolve(context), right.resolve(context));
                match (l.constant(), r.constant()) {
                    (Some(true), _) | (_, Some(true)) => Self::from_bool(true),
                    (Some(false), Some(false)) => Self::from_bool(false),
                    (Some(false), None) => r,
                    (None, Some(false)) => l,
                    (None, None) => self.rebuild(left, right, l, r, Self::Or),
                }
            }
            Self::Implies(antecedent, consequent) => {
                let (a, c) = (antecedent.resolve(context), consequent.resolve(context));
                match (a.constant(), c.constant()) {
                    (Some(false), _) | (_, Some(true)) => Self::from_bool(true),
                    (Some(true), Some(false)) => Self::from_bool(false),
                    (Some(true), None) => c,
                    (None, Some(false)) => Rc::new(Self::Not(a)),
                    (None, None) => self.rebuild(antecedent, consequent, a, c, Self::Implies),
                }
            }
            Self::BiConditional(left, right) => {
                let (l, r) = (left.resolve(context), right.resolve(context));
                match (l.constant(), r.constant()) {
                    (Some(lv), Some(rv)) => Self::from_bool(lv == rv),
                    (Some(true), None) => r,
                    (None, Some(true)) => l,
                    (Some(false), None) => Rc::new(Self::Not(r)),
                    (None, Some(false)) => Rc::new(Self::Not(l)),
                    (None, None) => self.rebuild(left, right, l, r, Self::BiConditional),
                }
            }
        }
    }

    /// Reuses `self` when resolving changed neither child.
    fn rebuild<F>(
        self: &Rc<Self>,
        left: &Rc<Self>,
        right: &Rc<Self>,
        new_left: Rc<Self>,
        new_right: Rc<Self>,
        variant: F,
    ) -> Rc<Self>
    where
        F: FnOnce(Rc<Self>, Rc<Self>) -> Self,
    {
        if Rc::ptr_eq(left, &new_left) && Rc::ptr_eq(right, &new_right) {
            self.dupe()
        } else {
            Rc::new(variant(new_left, new_right))
        }
    }
}

impl Evaluable for Proposition {
    fn check(&self, context: &impl EvaluationContext) -> bool {
        match self {
            Self::True => true,
            Self::Symbol(symbol) => context.eval(symbol),
            Self::Not(inner) => !inner.check(context),
            Self::And(left, right) => left.check(context) && right.check(context),
            Self::Or(left, right) => left.check(context) || right.check(context),
            Self::Implies(antecedent, consequent) => {
                !antecedent.check(context) || consequent.check(context)
            }
            Self::BiConditional(left, right) => left.check(context) == right.check(context),
        }
    }

    fn check_solvable(&self, context: &impl KnowledgeContext) -> ThreeState {
        use ThreeState as TS;

        match self {
            Self::True => TS::True,
            Self::Symbol(symbol) => context.state(symbol),
            Self::Not(inner) => !inner.check_solvable(context),
            Self::And(left, right) => {
                match (left.check_solvable(context), right.check_solvable(context)) {
                    (TS::False, _) | (_, TS::False) => TS::False,
                    (TS::True, TS::True) => TS::True,
                    _ => TS::Unknown,
                }
            }
            Self::Or(left, right) => {
                match (left.check_solvable(context), right.check_solvable(context)) {
                    (TS::True, _) | (_, TS::True) => TS::True,
                    (TS::False, TS::False) => TS::False,
                    _ => TS::Unknown,
                }
            }
            Self::Implies(antecedent, consequent) => match (
                antecedent.check_solvable(context),
                consequent.check_solvable(context),
            ) {
                (TS::False, _) | (_, TS::True) => TS::True,
                (TS::True, TS::False) => TS::False,
                _ => TS::Unknown,
            },
            Self::BiConditional(left, right) => {
                match (left.check_solvable(context), right.check_solvable(context)) {
                    (TS::Unknown, _) | (_, TS::Unknown) => TS::Unknown,
                    (l, r) => (l == r).into(),
                }
            }
        }
    }

    fn symbols(&self) -> Vec<Symbol> {
        match self {
            Self::True => vec![],
            Self::Symbol(symbol) => vec![*symbol],
            Self::Not(inner) => inner.symbols(),
            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Implies(left, right)
            | Self::BiConditional(left, right) => {
                let mut symbols = left.symbols();
                symbols.extend(right.symbols());
                symbols
            }
        }
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::True => write!(f, "T"),
            Self::Symbol(symbol) => write!(f, "{}", symbol),
            Self::Not(inner) => write!(f, "~{}", inner),
            Self::And(left, right) => write!(f, "({} & {})", left, right),
            Self::Or(left, right) => write!(f, "({} || {})", left, right),
            Self::Implies(left, right) => write!(f, "({} => {})", left, right),
            Self::BiConditional(left, right) => write!(f, "({} <=> {})", left, right),
        }
    }
}
