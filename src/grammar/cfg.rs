use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

/// The suffix that marks a symbol as optional, e.g. `Expr(opt)`.
pub const OPT_TAG: &str = "(opt)";

/// The two disjoint roles a symbol can have in a grammar.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Role {
    /// Declared explicitly in the terminal section
    Terminal,
    /// Everything else: headers, undeclared body symbols and optional symbols
    NonTerminal,
}

/// A grammar symbol, identified by its name.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol with the given name.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this symbol as it appears in grammar files.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the name carries the [`OPT_TAG`] suffix.
    pub fn is_optional(&self) -> bool {
        self.0.ends_with(OPT_TAG)
    }

    /// For an optional symbol `X(opt)` this returns `X`.
    pub fn base(&self) -> Option<Symbol> {
        self.0.strip_suffix(OPT_TAG).map(Symbol::new)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single production rule: a head symbol followed by zero or more body symbols.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ProductionRule {
    lhs: Symbol,
    rhs: Vec<Symbol>,
}

impl ProductionRule {
    /// Create a rule `lhs -> rhs`. An empty `rhs` is the empty derivation.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self {
            lhs,
            rhs,
        }
    }

    /// The head of the rule.
    pub fn lhs(&self) -> &Symbol {
        &self.lhs
    }

    /// The body of the rule.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Whether this rule derives the empty string directly.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// All symbols of the rule, head first, joined by single spaces.
    /// This is the line format of a rule in a `.cfg` file.
    pub fn to_line(&self) -> String {
        std::iter::once(&self.lhs).chain(self.rhs.iter()).join(" ")
    }
}

/// A fully explicit context-free grammar as written into a `.cfg` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFreeGrammar {
    terminals: Vec<Symbol>,
    nonterminals: Vec<Symbol>,
    entrypoint: Symbol,
    rules: Vec<ProductionRule>,
}

impl ContextFreeGrammar {
    pub(crate) fn new(terminals: Vec<Symbol>, nonterminals: Vec<Symbol>, entrypoint: Symbol, rules: Vec<ProductionRule>) -> Self {
        Self {
            terminals,
            nonterminals,
            entrypoint,
            rules,
        }
    }

    /// Get a [`GrammarBuilder`](crate::grammar::GrammarBuilder) to assemble a grammar symbol by symbol.
    pub fn builder() -> crate::grammar::GrammarBuilder {
        crate::grammar::GrammarBuilder::new()
    }

    /// Declared terminals, each exactly once.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    /// Nonterminals, each exactly once. Never contains a terminal.
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals
    }

    /// The designated start symbol.
    pub fn entrypoint(&self) -> &Symbol {
        &self.entrypoint
    }

    /// User rules in input order followed by the synthesized optional rules.
    pub fn rules(&self) -> &[ProductionRule] {
        &self.rules
    }
}

impl Display for ProductionRule {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{} ->", self.lhs)?;

        if self.rhs.is_empty() {
            return write!(f, " ε");
        }

        for symbol in &self.rhs {
            write!(f, " {}", symbol)?;
        }

        Ok(())
    }
}

impl Display for ContextFreeGrammar {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Entrypoint: {}", self.entrypoint)?;
        writeln!(f, "Terminals ({}): {}", self.terminals.len(), self.terminals.iter().join(" "))?;
        writeln!(f, "Nonterminals ({}): {}", self.nonterminals.len(), self.nonterminals.iter().join(" "))?;
        writeln!(f, "Rules ({}):", self.rules.len())?;

        for rule in &self.rules {
            writeln!(f, "  {}", rule)?;
        }

        Ok(())
    }
}
