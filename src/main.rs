use bstsort::{CaseMode, Config};
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::process;

/// Sorts the lines of a file and prints each distinct line with its number of occurrences.
#[derive(Debug, Parser)]
#[clap(name = "bstsort", version)]
struct Args {
    /// Compare lines case-sensitively (by default lines are lowercased first).
    #[clap(short = 'c')]
    case_sensitive: bool,

    /// Write the counts to this file instead of standard output.
    #[clap(short = 'o', value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// File to read lines from.
    #[clap(value_name = "INPUT_FILE")]
    input: PathBuf,
}
impl Args {
    fn into_config(self) -> Config {
        let case = if self.case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        };
        let config = Config::new(self.input).case(case);
        match self.output {
            Some(output) => config.output(output),
            None => config,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };
    let config = args.into_config();
    debug!("{:?}", config);

    if let Err(e) = bstsort::run(&config) {
        debug!("{}", e);
        eprintln!("bstsort: {}", e.message());
        process::exit(1);
    }
}
