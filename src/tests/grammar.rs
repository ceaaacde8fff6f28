use std::collections::HashSet;
use std::io::BufReader;
use std::fs::File;

use crate::{
    error::GrammarError,
    expand,
    grammar::{ContextFreeGrammar, ProductionRule, Symbol},
    parser::cfg::parse_cfg,
};

fn expand_fixture(name: &str) -> (ContextFreeGrammar, String) {
    let file = File::open(format!("test-data/grammars/{}", name)).unwrap();
    let mut out = Vec::new();
    let grammar = expand(BufReader::new(file), &mut out).unwrap();
    (grammar, String::from_utf8(out).unwrap())
}

fn names(symbols: &[Symbol]) -> Vec<&str> {
    symbols.iter().map(Symbol::name).collect()
}

fn lines(rules: &[ProductionRule]) -> Vec<String> {
    rules.iter().map(ProductionRule::to_line).collect()
}

#[test]
fn test_example() {
    let (grammar, text) = expand_fixture("example.cfgx");

    assert_eq!(names(grammar.terminals()), vec!["id"]);
    assert_eq!(names(grammar.nonterminals()), vec!["Goal", "Expr(opt)"]);
    assert_eq!(grammar.entrypoint().name(), "Goal");
    assert_eq!(lines(grammar.rules()), vec!["Goal id Expr(opt)", "Expr(opt)", "Expr(opt) Expr"]);
    assert_eq!(text, "1\nid\n2\nGoal\nExpr(opt)\nGoal\n3\nGoal id Expr(opt)\nExpr(opt)\nExpr(opt) Expr\n");
}

#[test]
fn test_rules_verbatim_without_optionals() {
    let (grammar, _) = expand_fixture("no-optionals.cfgx");

    assert_eq!(names(grammar.nonterminals()), vec!["Goal", "S", "T"]);
    assert_eq!(lines(grammar.rules()), vec!["Goal S", "S a S b", "S c", "S T"]);
}

#[test]
fn test_optional_expansion_completeness() {
    let (grammar, _) = expand_fixture("statements.cfgx");
    let rules = grammar.rules();

    assert_eq!(grammar.nonterminals().len(), 8);
    assert_eq!(rules.len(), 15);

    let optionals: HashSet<&Symbol> = rules
        .iter()
        .flat_map(|rule| std::iter::once(rule.lhs()).chain(rule.rhs()))
        .filter(|symbol| symbol.is_optional())
        .collect();
    assert_eq!(optionals.len(), 2);

    for opt in optionals {
        let epsilon = rules.iter().filter(|r| r.lhs() == opt && r.is_epsilon()).count();
        let base = opt.base().unwrap();
        let pass_through = rules.iter().filter(|r| r.lhs() == opt && r.rhs() == [base.clone()]).count();

        assert_eq!(epsilon, 1, "{} -> ε", opt);
        assert_eq!(pass_through, 1, "{} -> {}", opt, base);
    }

    // User rules come first, in input order
    assert_eq!(rules[0].to_line(), "Goal Block EOF_TOKEN");
    assert_eq!(rules[10].to_line(), "Primary INT_LITERAL");
    assert!(rules[11..].iter().all(|r| r.lhs().is_optional()));
}

#[test]
fn test_counts_and_disjointness() {
    for fixture in ["example.cfgx", "statements.cfgx", "no-optionals.cfgx"] {
        let (grammar, text) = expand_fixture(fixture);
        let reread = parse_cfg(text.as_bytes()).unwrap();

        // Counts announced in the file match the entries that follow them
        assert_eq!(reread, grammar);
        assert_eq!(text.lines().count(), 3 + grammar.terminals().len() + grammar.nonterminals().len() + 1 + grammar.rules().len());

        let terminals: HashSet<&Symbol> = grammar.terminals().iter().collect();
        assert_eq!(terminals.len(), grammar.terminals().len());
        let nonterminals: HashSet<&Symbol> = grammar.nonterminals().iter().collect();
        assert_eq!(nonterminals.len(), grammar.nonterminals().len());
        assert!(terminals.is_disjoint(&nonterminals));
    }
}

#[test]
fn test_deterministic_output() {
    let (_, first) = expand_fixture("statements.cfgx");
    let (_, second) = expand_fixture("statements.cfgx");
    assert_eq!(first, second);
}

#[test]
fn test_fatal_path_writes_nothing() {
    let file = File::open("test-data/grammars/rule-before-header.cfgx").unwrap();
    let mut out = Vec::new();

    match expand(BufReader::new(file), &mut out) {
        Err(GrammarError::MissingNonTerminalHeader { line, .. }) => assert_eq!(line, 5),
        other => panic!("unexpected result: {:?}", other.map(|g| g.rules().len())),
    }

    assert!(out.is_empty());
}
