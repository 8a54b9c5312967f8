use crate::{InternerSymbol, INTERNER};
use alloc::string::{String, ToString};
use core::fmt::{Debug, Display};

/// Propositional variable.
///
/// Names are interned, so copying and comparing symbols is cheap.
/// Ordering follows the order in which names were first interned.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(InternerSymbol);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(INTERNER.lock().get_or_intern(name))
    }

    /// Looks up an already interned name without interning it.
    pub fn get(name: &str) -> Option<Self> {
        INTERNER.lock().get(name).map(Self)
    }

    pub fn name(&self) -> String {
        INTERNER
            .lock()
            .resolve(self.0)
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = self.name();
        f.write_str(&name)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_symbol() {
        let a = Symbol::new("interned_a");
        let b = Symbol::new("interned_a");
        let c = Symbol::new("interned_c");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!("interned_a", a.name());
        assert_eq!("interned_c", format!("{}", c));
    }

    #[test]
    fn test_get_does_not_intern() {
        assert_eq!(None, Symbol::get("never_told_to_anyone"));
        let s = Symbol::new("told_once");
        assert_eq!(Some(s), Symbol::get("told_once"));
    }
}
