pub mod evaluation;
pub mod knowledge;
pub mod propositional;
pub mod symbol;
pub mod truth_table;

pub use evaluation::{Evaluable, EvaluationContext, KnowledgeContext, ThreeState};
pub use propositional::Proposition;
pub use symbol::Symbol;
