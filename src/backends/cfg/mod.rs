//! Write a grammar in the positional `.cfg` format.
//!
//! The format has no field labels, line order and counts are the entire schema:
//! 1. the number of terminals, then one terminal per line
//! 2. the number of nonterminals, then one nonterminal per line
//! 3. the start symbol
//! 4. the number of rules, then one rule per line, head first, symbols separated by single spaces
//!
//! Use it like so:
//! ```
//! use cfgx_expand::{backends::cfg::CfgGenerator, grammar::ContextFreeGrammar};
//!
//! let mut builder = ContextFreeGrammar::builder();
//! let goal = builder.nonterminal("Goal");
//! builder.rule(goal, vec!["Item(opt)".into()]);
//! let grammar = builder.build();
//!
//! let mut out = Vec::new();
//! CfgGenerator::new().generate(&mut out, &grammar).unwrap();
//! assert_eq!(out, b"0\n2\nGoal\nItem(opt)\nGoal\n3\nGoal Item(opt)\nItem(opt)\nItem(opt) Item\n");
//! ```

mod generator;

pub use generator::CfgGenerator;
