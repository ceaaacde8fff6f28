//! Backends that consume an expanded [`ContextFreeGrammar`](crate::grammar::ContextFreeGrammar).
//!
//! - `cfg`: Serialize the grammar in the positional `.cfg` format

pub mod cfg;
