/*!
Targets for the [log] macros called throughout the crate.

No log implementation is installed by the library.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Tokenizing and building propositions.
    pub const PARSER: &str = "parser";

    /// Sentences told to a [knowledge base](crate::knowledge_base).
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Model enumeration in the [truth table solver](crate::solver::truth_table).
    pub const TRUTH_TABLE: &str = "truth_table";

    /// [Forward chaining](crate::solver::forward_chaining).
    pub const FORWARD_CHAINING: &str = "forward_chaining";

    /// [Backward chaining](crate::solver::backward_chaining).
    pub const BACKWARD_CHAINING: &str = "backward_chaining";
}
