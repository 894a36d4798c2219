use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use polyrun::{
    interpreter::config::{Config, DEFAULT_MAX_DEPTH},
    report, run,
};

/// polyrun checks and runs programs written in a small polynomial
/// definition language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to run. Reads standard input when omitted.
    file: Option<PathBuf>,

    /// Deepest nesting of parentheses and polynomial calls allowed.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log more details to standard error; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                                                  eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                            path.display());
                                                  std::process::exit(1);
                                              }),
        None => {
            let mut source = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read standard input: {e}");
                std::process::exit(1);
            }
            source
        },
    };

    let config = Config::default().with_max_depth(args.max_depth);
    let mut stdout = io::stdout().lock();
    let result = run(&source, &config, &mut stdout);

    let mut status = match result {
        Ok(()) => 0,
        Err(e) => {
            if let Err(write_error) = report(&e, &mut stdout, &mut io::stderr()) {
                log::error!("Failed to report error: {write_error}");
            }
            1
        },
    };

    if let Err(e) = stdout.flush() {
        eprintln!("Failed to write output: {e}");
        status = 1;
    }
    std::process::exit(status);
}
