use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{
    error::{GrammarError, ParsingError},
    grammar::{ContextFreeGrammar, ProductionRule, Symbol},
    parser::NumberedLines,
};

fn parse_rule(line: &str, number: usize) -> Result<ProductionRule, GrammarError> {
    let mut symbols = line.split_whitespace().map(Symbol::new);

    let lhs = match symbols.next() {
        Some(lhs) => lhs,
        None => return Err(GrammarError::EmptyRule { line: number }),
    };

    Ok(ProductionRule::new(lhs, symbols.collect()))
}

/// Read an expanded grammar in the positional `.cfg` format.
pub(crate) fn parse_cfg<R: BufRead>(reader: R) -> Result<ContextFreeGrammar, GrammarError> {
    let mut lines = NumberedLines::new(reader);

    let count = lines.count("terminal")?;
    let terminals = lines.section("terminal", count)?.into_iter().map(Symbol::new).collect();

    let count = lines.count("nonterminal")?;
    let nonterminals = lines.section("nonterminal", count)?.into_iter().map(Symbol::new).collect();

    let entrypoint = match lines.next_line()? {
        Some(line) => Symbol::new(line),
        None => {
            return Err(GrammarError::TruncatedSection {
                section: "start symbol",
                expected: 1,
                found: 0,
            });
        },
    };

    let count = lines.count("rule")?;
    let first_rule = lines.number() + 1;
    let mut rules = Vec::new();

    for (i, line) in lines.section("rule", count)?.iter().enumerate() {
        rules.push(parse_rule(line, first_rule + i)?);
    }

    Ok(ContextFreeGrammar::new(terminals, nonterminals, entrypoint, rules))
}

/// Read a `.cfg` grammar from disk.
pub(crate) fn parse_cfg_file(path: &Path) -> Result<ContextFreeGrammar, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, e.into()))?;
    parse_cfg(BufReader::new(file)).map_err(|e| ParsingError::new(path, e))
}
