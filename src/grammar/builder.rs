use ahash::RandomState;
use indexmap::IndexMap;

use crate::grammar::{ContextFreeGrammar, ProductionRule, Role, Symbol};

/// The start symbol every expanded grammar uses unless overridden
pub const DEFAULT_ENTRYPOINT: &str = "Goal";

/// The GrammarBuilder accumulates terminals, nonterminals, rules and optional symbols
/// in a single forward pass and returns an expanded [`ContextFreeGrammar`].
///
/// Every symbol gets a [`Role`] the first time it is seen and keeps it for the rest of the pass.
/// Iteration order of all collections is first-seen order, so the result is reproducible.
///
/// Use it like so:
/// ```
/// use cfgx_expand::grammar::{ContextFreeGrammar, Symbol};
///
/// let mut builder = ContextFreeGrammar::builder();
/// builder.terminal("id");
/// let goal = builder.nonterminal("Goal");
/// builder.rule(goal, vec![Symbol::new("id"), Symbol::new("Expr(opt)")]);
/// let grammar = builder.build();
///
/// assert_eq!(grammar.rules().len(), 3);
/// ```
pub struct GrammarBuilder {
    roles: IndexMap<Symbol, Role, RandomState>,
    rules: Vec<ProductionRule>,
    /// Optional symbols mapped to their base
    optionals: IndexMap<Symbol, Symbol, RandomState>,
    entrypoint: Symbol,
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            roles: IndexMap::default(),
            rules: Vec::new(),
            optionals: IndexMap::default(),
            entrypoint: Symbol::new(DEFAULT_ENTRYPOINT),
        }
    }

    /// Assign `role` unless the symbol already has one. Returns the role the symbol ends up with.
    fn classify(&mut self, symbol: &Symbol, role: Role) -> Role {
        if let Some(existing) = self.roles.get(symbol) {
            return *existing;
        }

        log::debug!("Classified '{}' as {:?}", symbol, role);
        self.roles.insert(symbol.clone(), role);
        role
    }

    fn note_optional(&mut self, symbol: &Symbol) {
        if self.optionals.contains_key(symbol) {
            return;
        }

        if let Some(base) = symbol.base() {
            log::debug!("Found optional symbol '{}'", symbol);
            self.optionals.insert(symbol.clone(), base);
        }
    }

    fn symbols_with_role(&self, role: Role) -> Vec<Symbol> {
        self.roles
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(symbol, _)| symbol.clone())
            .collect()
    }
}

impl GrammarBuilder {
    /// Declare a terminal.
    pub fn terminal<S: Into<String>>(&mut self, name: S) -> Symbol {
        let symbol = Symbol::new(name);

        if symbol.name().is_empty() {
            log::warn!("Declared a terminal with an empty name");
        }

        if self.classify(&symbol, Role::Terminal) != Role::Terminal {
            log::warn!("'{}' is already a nonterminal and cannot become a terminal", symbol);
        }

        symbol
    }

    /// Declare a rule header. The returned symbol is the left-hand side for the rules that follow.
    ///
    /// A header that names a declared terminal keeps the terminal role.
    pub fn nonterminal<S: Into<String>>(&mut self, name: S) -> Symbol {
        let symbol = Symbol::new(name);

        if self.classify(&symbol, Role::NonTerminal) == Role::Terminal {
            log::warn!("Header '{}' names a declared terminal; it stays a terminal", symbol);
        }

        self.note_optional(&symbol);
        symbol
    }

    /// Append the rule `lhs -> rhs`. Body symbols that are not terminals become nonterminals.
    pub fn rule(&mut self, lhs: Symbol, rhs: Vec<Symbol>) {
        for symbol in &rhs {
            self.classify(symbol, Role::NonTerminal);
            self.note_optional(symbol);
        }

        self.rules.push(ProductionRule::new(lhs, rhs));
    }

    /// Set the start symbol of the grammar. Defaults to [`DEFAULT_ENTRYPOINT`].
    pub fn entrypoint<S: Into<String>>(mut self, entrypoint: S) -> Self {
        self.entrypoint = Symbol::new(entrypoint);
        self
    }

    /// The role `symbol` has been assigned so far, if any.
    pub fn role(&self, symbol: &Symbol) -> Option<Role> {
        self.roles.get(symbol).copied()
    }

    /// Create the [`ContextFreeGrammar`], appending for every optional symbol `X(opt)`
    /// the rules `X(opt) -> ε` and `X(opt) -> X`.
    ///
    /// The base `X` is not registered as a nonterminal by this step.
    pub fn build(self) -> ContextFreeGrammar {
        let terminals = self.symbols_with_role(Role::Terminal);
        let nonterminals = self.symbols_with_role(Role::NonTerminal);
        let mut rules = self.rules;
        let user_rules = rules.len();

        for (opt, base) in self.optionals {
            rules.push(ProductionRule::new(opt.clone(), Vec::new()));
            rules.push(ProductionRule::new(opt, vec![base]));
        }

        log::info!(
            "Built grammar with {} terminals, {} nonterminals, {} user rules and {} synthesized rules",
            terminals.len(),
            nonterminals.len(),
            user_rules,
            rules.len() - user_rules,
        );

        ContextFreeGrammar::new(terminals, nonterminals, self.entrypoint, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|name| Symbol::new(*name)).collect()
    }

    #[test]
    fn test_example_grammar() {
        let mut builder = ContextFreeGrammar::builder();
        builder.terminal("id");
        let goal = builder.nonterminal("Goal");
        builder.rule(goal, symbols(&["id", "Expr(opt)"]));
        let cfg = builder.build();

        assert_eq!(cfg.terminals(), symbols(&["id"]).as_slice());
        assert_eq!(cfg.nonterminals(), symbols(&["Goal", "Expr(opt)"]).as_slice());
        assert_eq!(cfg.entrypoint().name(), "Goal");

        let lines: Vec<String> = cfg.rules().iter().map(ProductionRule::to_line).collect();
        assert_eq!(lines, vec!["Goal id Expr(opt)", "Expr(opt)", "Expr(opt) Expr"]);
    }

    #[test]
    fn test_terminal_role_is_fixed() {
        let mut builder = ContextFreeGrammar::builder();
        builder.terminal("id");
        let lhs = builder.nonterminal("id");
        builder.rule(lhs, symbols(&["id"]));

        assert_eq!(builder.role(&Symbol::new("id")), Some(Role::Terminal));

        let cfg = builder.build();
        assert_eq!(cfg.terminals(), symbols(&["id"]).as_slice());
        assert!(cfg.nonterminals().is_empty());
        assert_eq!(cfg.rules().len(), 1);
    }

    #[test]
    fn test_nonterminals_deduplicated() {
        let mut builder = ContextFreeGrammar::builder();
        let a = builder.nonterminal("A");
        builder.rule(a.clone(), symbols(&["B", "A"]));
        let b = builder.nonterminal("B");
        builder.rule(b, symbols(&["A"]));
        let a = builder.nonterminal("A");
        builder.rule(a, symbols(&["B"]));
        let cfg = builder.build();

        assert_eq!(cfg.nonterminals(), symbols(&["A", "B"]).as_slice());
        assert_eq!(cfg.rules().len(), 3);
    }

    #[test]
    fn test_optional_synthesized_once() {
        let mut builder = ContextFreeGrammar::builder();
        let a = builder.nonterminal("A");
        builder.rule(a.clone(), symbols(&["X(opt)", "Y(opt)"]));
        builder.rule(a, symbols(&["X(opt)"]));
        let cfg = builder.build();

        let lines: Vec<String> = cfg.rules().iter().map(ProductionRule::to_line).collect();
        assert_eq!(lines, vec!["A X(opt) Y(opt)", "A X(opt)", "X(opt)", "X(opt) X", "Y(opt)", "Y(opt) Y"]);
    }

    #[test]
    fn test_optional_header() {
        let mut builder = ContextFreeGrammar::builder();
        builder.terminal("x");
        let opt = builder.nonterminal("List(opt)");
        builder.rule(opt, symbols(&["x"]));
        let cfg = builder.build();

        let lines: Vec<String> = cfg.rules().iter().map(ProductionRule::to_line).collect();
        assert_eq!(lines, vec!["List(opt) x", "List(opt)", "List(opt) List"]);
        assert!(!cfg.nonterminals().contains(&Symbol::new("List")));
    }

    #[test]
    fn test_custom_entrypoint() {
        let cfg = ContextFreeGrammar::builder().entrypoint("CompilationUnit").build();
        assert_eq!(cfg.entrypoint().name(), "CompilationUnit");
        assert!(cfg.rules().is_empty());
    }
}
