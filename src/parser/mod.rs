pub(crate) mod cfg;
pub(crate) mod cfgx;

use std::io::BufRead;

use crate::error::GrammarError;

/// Line reader that keeps track of 1-based line numbers for diagnostics.
pub(crate) struct NumberedLines<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    /// The number of the line most recently returned.
    pub(crate) fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>, GrammarError> {
        match self.lines.next() {
            Some(line) => {
                self.number += 1;
                Ok(Some(line?))
            },
            None => Ok(None),
        }
    }

    /// Read a line holding the number of entries of `section`.
    pub(crate) fn count(&mut self, section: &'static str) -> Result<usize, GrammarError> {
        let line = match self.next_line()? {
            Some(line) => line,
            None => return Err(GrammarError::MissingCount { section }),
        };
        let content = line.trim();

        content.parse::<usize>().map_err(|_| GrammarError::InvalidCount {
            line: self.number,
            content: content.to_string(),
        })
    }

    /// Read exactly `expected` lines belonging to `section`.
    pub(crate) fn section(&mut self, section: &'static str, expected: usize) -> Result<Vec<String>, GrammarError> {
        let mut entries = Vec::new();

        while entries.len() < expected {
            match self.next_line()? {
                Some(line) => entries.push(line),
                None => {
                    return Err(GrammarError::TruncatedSection {
                        section,
                        expected,
                        found: entries.len(),
                    });
                },
            }
        }

        Ok(entries)
    }
}
