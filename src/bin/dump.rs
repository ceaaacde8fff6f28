use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print an expanded .cfg grammar in readable form", long_about = None)]
struct Args {
    /// Path to a .cfg file
    grammar: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match cfgx_expand::load_cfg(&args.grammar) {
        Ok(grammar) => print!("{}", grammar),
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        },
    }
}
