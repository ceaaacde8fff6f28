//! This library expands context-free grammars written in the `.cfgx` shorthand into
//! fully explicit `.cfg` grammars that a parser generator can consume.
//!
//! It consists of
//! - __frontend__: Read grammars. `.cfgx` sources are read into a [`GrammarBuilder`](grammar::GrammarBuilder),
//!   expanded `.cfg` files can be read back with [`load_cfg`].
//! - __grammar__: The builder classifies every symbol as terminal or nonterminal and synthesizes
//!   the rules `X(opt) -> ε` and `X(opt) -> X` for every optional symbol `X(opt)`.
//! - __backend__: Serialize the expanded grammar in the positional `.cfg` format.
//!
//! ## The `.cfgx` format
//! ```text
//! 2            <- number of terminals
//! id           <- one terminal per line
//! PLUS
//! # comment    <- blank lines and lines starting with '#' are ignored
//! Goal:        <- a line ending in ':' starts the rules of a nonterminal
//! Expr
//! Expr:
//! id PLUS-Tail(opt)
//! ```
//!
//! ## Getting Started
//! ```
//! let input = "1\nid\nGoal:\nid Expr(opt)\n";
//! let mut output = Vec::new();
//!
//! let grammar = cfgx_expand::expand(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(grammar.rules().len(), 3);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "1\nid\n2\nGoal\nExpr(opt)\nGoal\n3\nGoal id Expr(opt)\nExpr(opt)\nExpr(opt) Expr\n",
//! );
//! ```

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod backends;
pub mod error;
pub mod grammar;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::{
    backends::cfg::CfgGenerator,
    error::{GrammarError, ParsingError},
    grammar::ContextFreeGrammar,
};

/// Read a `.cfgx` grammar from `input`, expand it and write the `.cfg` result into `output`.
///
/// The whole input is consumed before anything is written, so on error `output` stays untouched.
pub fn expand<R: BufRead, W: Write>(input: R, output: W) -> Result<ContextFreeGrammar, GrammarError> {
    let grammar = parser::cfgx::parse_cfgx(input)?.build();
    CfgGenerator::new().generate(output, &grammar)?;
    Ok(grammar)
}

/// Expand the `.cfgx` file at `input` into the `.cfg` file at `output`.
///
/// `output` is only created once `input` has been read successfully.
pub fn expand_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ContextFreeGrammar, ParsingError> {
    let grammar = parser::cfgx::parse_cfgx_file(input.as_ref())?.build();
    CfgGenerator::new().generate_file(output, &grammar)?;
    Ok(grammar)
}

/// Read an expanded grammar from a `.cfg` file.
pub fn load_cfg<P: AsRef<Path>>(path: P) -> Result<ContextFreeGrammar, ParsingError> {
    parser::cfg::parse_cfg_file(path.as_ref())
}
