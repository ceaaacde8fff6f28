use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{GrammarError, ParsingError},
    grammar::{ContextFreeGrammar, Symbol},
};

fn write_section<W: Write>(stream: &mut W, symbols: &[Symbol]) -> std::io::Result<()> {
    writeln!(stream, "{}", symbols.len())?;

    for symbol in symbols {
        writeln!(stream, "{}", symbol)?;
    }

    Ok(())
}

/// This is the main struct of the [`cfg`](crate::backends::cfg) backend that serializes an expanded grammar.
pub struct CfgGenerator {}

impl CfgGenerator {
    /// Create a new CfgGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Write `grammar` into `writer` in `.cfg` format.
    pub fn generate<W: Write>(self, writer: W, grammar: &ContextFreeGrammar) -> Result<(), GrammarError> {
        let mut stream = BufWriter::new(writer);

        write_section(&mut stream, grammar.terminals())?;
        write_section(&mut stream, grammar.nonterminals())?;
        writeln!(&mut stream, "{}", grammar.entrypoint())?;
        writeln!(&mut stream, "{}", grammar.rules().len())?;

        for rule in grammar.rules() {
            writeln!(&mut stream, "{}", rule.to_line())?;
        }

        stream.flush()?;
        Ok(())
    }

    /// Write `grammar` into the file at `path`, replacing its contents.
    pub fn generate_file<P: AsRef<Path>>(self, path: P, grammar: &ContextFreeGrammar) -> Result<(), ParsingError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ParsingError::new(path, e.into()))?;
        self.generate(file, grammar).map_err(|e| ParsingError::new(path, e))
    }
}
