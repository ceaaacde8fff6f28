//! Errors that can appear while reading, expanding and writing grammars.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can appear while processing a grammar stream
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A rule body appeared before any `name:` header
    #[error("line {line}: a nonterminal header was expected before this rule line: '{content}'")]
    MissingNonTerminalHeader {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// The stream ended where a count line was expected
    #[error("the input ended where the number of {section} entries was expected")]
    MissingCount {
        /// Which section the count belongs to
        section: &'static str,
    },

    /// A count line is not a non-negative integer
    #[error("line {line}: expected a non-negative count but found '{content}'")]
    InvalidCount {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// The stream ended in the middle of a counted section
    #[error("the {section} section announced {expected} entries but the input ended after {found}")]
    TruncatedSection {
        /// Which section was cut short
        section: &'static str,
        /// The announced count
        expected: usize,
        /// How many entries were actually present
        found: usize,
    },

    /// A rule line in a `.cfg` file has no head symbol
    #[error("line {line}: a rule must start with its head symbol")]
    EmptyRule {
        /// 1-based line number
        line: usize,
    },

    /// Reading or writing a stream failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A [`GrammarError`] together with the file it happened in
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    #[source]
    source: GrammarError,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>>(path: P, source: GrammarError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying error.
    pub fn kind(&self) -> &GrammarError {
        &self.source
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}
