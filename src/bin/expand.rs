use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(author, version, about = "Expand a .cfgx grammar into an explicit .cfg grammar", long_about = None)]
struct Args {
    /// Path to input .cfgx file
    input_file: PathBuf,

    /// Path to output .cfg file
    output_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let grammar = match cfgx_expand::expand_file(&args.input_file, &args.output_file) {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        },
    };

    println!(
        "Outputting new cfg file with {} terminals, {} nonterminals, and {} rules",
        grammar.terminals().len(),
        grammar.nonterminals().len(),
        grammar.rules().len(),
    );
}
