use std::collections::HashMap;

/// Stores variable bindings consulted during evaluation.
///
/// A `SymbolTable` maps variable names to `i64` values. The evaluator only
/// reads from it, so one table can back any number of evaluations, and the
/// same parsed expression can be re-evaluated against different tables.
///
/// ## Example
/// ```
/// use exprim::interpreter::symbol::SymbolTable;
///
/// let mut symbols = SymbolTable::new();
/// symbols.define("x", 3);
///
/// assert_eq!(symbols.get_symbol("x"), Some(3));
/// assert_eq!(symbols.get_symbol("y"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, i64>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: HashMap::new(), }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: i64) {
        self.symbols.insert(name.into(), value);
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Returns
    /// `Some(value)` if the variable is bound, `None` otherwise. Callers in
    /// the evaluator turn `None` into an unknown-variable error.
    #[must_use]
    pub fn get_symbol(&self, name: &str) -> Option<i64> {
        self.symbols.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self { symbols: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(), }
    }
}
