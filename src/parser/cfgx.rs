use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{
    error::{GrammarError, ParsingError},
    grammar::{ContextFreeGrammar, GrammarBuilder, Symbol},
    parser::NumberedLines,
};

/// Lines starting with this character (after trimming) are comments
pub(crate) const COMMENT_PREFIX: char = '#';

/// Lines ending with this character (after trimming) declare a new left-hand side
pub(crate) const HEADER_SUFFIX: char = ':';

/// Where the reader is inside the rule section.
enum State {
    /// No header seen yet; a rule body here is an error
    AwaitingHeader,
    /// Rule bodies belong to this head
    Collecting(Symbol),
}

/// Read a `.cfgx` grammar in a single forward pass and return the populated builder.
pub(crate) fn parse_cfgx<R: BufRead>(reader: R) -> Result<GrammarBuilder, GrammarError> {
    let mut lines = NumberedLines::new(reader);
    let mut builder = ContextFreeGrammar::builder();

    let num_terminals = lines.count("terminal")?;

    for terminal in lines.section("terminal", num_terminals)? {
        builder.terminal(terminal.trim());
    }

    log::debug!("Read {} terminals", num_terminals);

    let mut state = State::AwaitingHeader;

    while let Some(line) = lines.next_line()? {
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if let Some(name) = line.strip_suffix(HEADER_SUFFIX) {
            state = State::Collecting(builder.nonterminal(name));
            continue;
        }

        match &state {
            State::AwaitingHeader => {
                return Err(GrammarError::MissingNonTerminalHeader {
                    line: lines.number(),
                    content: line.to_string(),
                });
            },
            State::Collecting(lhs) => {
                let rhs = line.split_whitespace().map(Symbol::new).collect();
                builder.rule(lhs.clone(), rhs);
            },
        }
    }

    Ok(builder)
}

/// Read a `.cfgx` grammar from disk.
pub(crate) fn parse_cfgx_file(path: &Path) -> Result<GrammarBuilder, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, e.into()))?;
    parse_cfgx(BufReader::new(file)).map_err(|e| ParsingError::new(path, e))
}
