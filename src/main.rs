use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use clap::{Parser, error::ErrorKind};
use matlang::{Error, Lexer, RunOptions, run_with};

/// matlang runs small matrix-oriented scripts: it checks the whole program
/// for type and shape errors, then interprets it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream instead of running the program.
    #[arg(short, long)]
    tokens: bool,

    /// Stop after type checking.
    #[arg(short, long)]
    check: bool,

    /// Do not print the variables left in memory when the program ends.
    #[arg(long)]
    no_dump: bool,

    /// The script to run.
    file: PathBuf,
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| {
                                format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                        path.display())
                            })
}

fn print_tokens(source: &str) {
    for item in Lexer::new(source) {
        match item {
            Ok((token, line)) => println!("{line} {token}"),
            Err(error) => eprintln!("{error}"),
        }
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
                                    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                                        e.exit();
                                    }
                                    eprint!("{e}");
                                    process::exit(1);
                                });

    let source = read_source(&args.file).unwrap_or_else(|e| {
                                             eprintln!("{e:#}");
                                             process::exit(1);
                                         });

    if args.tokens {
        print_tokens(&source);
        return;
    }

    let options = RunOptions { dump_memory: !args.no_dump,
                               check_only:  args.check, };

    match run_with(&source, &options, std::io::stdout()) {
        Ok(_) => {},
        Err(Error::Check { .. }) => process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
