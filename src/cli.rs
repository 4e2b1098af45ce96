// src/cli.rs
use std::time::Duration;

use thiserror::Error;

use crate::{
    config::options::{AppOptions, Collision},
    core::net::{FetchError, HttpTransport},
    display::{DisplaySink, NoticeKind},
    runner,
};

const HELP: &str = "\
Usage: cli <URL> [options]

Fetch one product listing, print it, and save <name>.csv and <name>.pdf.

Options:
  -o, --out <DIR>      Output directory (default: current directory)
      --timeout <SECS> Page request timeout (default: 10)
      --dedupe         Never overwrite; add \" (2)\", \" (3)\", ... to the name
      --no-csv         Skip the CSV file
      --no-pdf         Skip the PDF file
  -v, --verbose        Debug logging (also on stderr)
  -h, --help           Show this help";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Could not set up the HTTP client: {0}")]
    Client(#[from] FetchError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Params),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Params {
    pub url: String,
    pub options: AppOptions,
    pub verbose: bool,
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut verbose = false;
    let mut url: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --out"))?;
                options.export.set_out_dir(&v);
            }
            "--timeout" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --timeout"))?;
                let secs: u64 = v
                    .parse()
                    .map_err(|_| usage(&format!("Invalid timeout: {v}")))?;
                if secs == 0 {
                    return Err(usage("Timeout must be at least 1 second"));
                }
                options.fetch.page_timeout = Duration::from_secs(secs);
            }
            "--dedupe" => options.export.collision = Collision::Dedupe,
            "--no-csv" => options.export.csv = false,
            "--no-pdf" => options.export.pdf = false,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => return Err(usage(&format!("Unknown arg: {flag}"))),
            _ if url.is_some() => return Err(usage("Only one URL per run")),
            _ => url = Some(a.clone()),
        }
    }

    // An empty URL is the runner's job to report, same as in the GUI.
    Ok(Command::Run(Params { url: url.unwrap_or_default(), options, verbose }))
}

fn usage(msg: &str) -> CliError {
    CliError::Usage(format!("{msg}\n\n{HELP}"))
}

/// Entry point for the `cli` binary. `Ok(false)` means the run itself failed
/// (already reported on the terminal).
pub fn run() -> Result<bool, CliError> {
    let params = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            return Ok(true);
        }
        Command::Run(p) => p,
    };

    crate::log::init(params.verbose, params.verbose);

    let transport = HttpTransport::new(&params.options.fetch)?;
    let mut console = ConsoleDisplay;
    Ok(runner::run(&params.url, &transport, &mut console, &params.options).is_ok())
}

/// Terminal sink: record on stdout, notices on stderr (info on stdout).
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_summary(&mut self, text: &str) {
        println!("{text}");
    }
    fn show_details(&mut self, lines: &[String]) {
        for line in lines {
            println!("  {line}");
        }
    }
    fn show_image(&mut self, bytes: Option<&[u8]>) {
        if let Some(b) = bytes {
            println!("Image: {} bytes", b.len());
        }
    }
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info => println!("{message}"),
            _ => eprintln!("{}: {message}", kind.title()),
        }
    }
}
