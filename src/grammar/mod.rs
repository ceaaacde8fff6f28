//! The grammar model and the builder that expands optional symbols.
//!
//! Inspect an expanded grammar like this:
//! ```
//! use cfgx_expand::grammar::ContextFreeGrammar;
//!
//! let mut builder = ContextFreeGrammar::builder();
//! builder.terminal("id");
//! let goal = builder.nonterminal("Goal");
//! builder.rule(goal, vec!["id".into(), "Expr(opt)".into()]);
//! let grammar = builder.build();
//!
//! for rule in grammar.rules() {
//!     // The left-hand-side (lhs) of a rule is a single symbol
//!     println!("lhs = {}", rule.lhs());
//!
//!     // The right-hand-side (rhs) is a possibly empty sequence of symbols
//!     for symbol in rule.rhs() {
//!         println!("  {} (optional: {})", symbol, symbol.is_optional());
//!     }
//! }
//! ```

mod builder;
mod cfg;

pub use builder::*;
pub use cfg::*;
