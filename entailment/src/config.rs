/// Configuration shared by every [Method](crate::Method).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The most symbols a truth table will enumerate, i.e. at most
    /// `2^truth_table_symbol_limit` rows.
    pub truth_table_symbol_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truth_table_symbol_limit: 24,
        }
    }
}
