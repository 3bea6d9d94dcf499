use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tablang::error::LexError;
use tablang::scanner;

#[derive(Parser, Debug)]
#[command(name = "tablang", about = "A tokenizer and REPL for the tablang filter language")]
struct Cli {
    /// Source file to tokenize (omit for REPL)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn report_lex_errors(errors: Vec<LexError>) -> anyhow::Error {
    let count = errors.len();
    for e in errors {
        eprintln!("{:?}", miette::Report::new(e));
    }
    anyhow::anyhow!("{count} invalid lexeme(s)")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(ref path) = cli.file else {
        return tablang::repl::run_repl();
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;
    let tokens = scanner::scan(&source);

    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&tokens).context("serialize tokens to JSON")?;
            println!("{json}");
        }
        _ => {
            for token in &tokens {
                println!("{token}");
            }
        }
    }

    let errors = scanner::lex_errors(&path.display().to_string(), &source, &tokens);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(report_lex_errors(errors))
    }
}
