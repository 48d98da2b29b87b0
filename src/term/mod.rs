extern crate ansi_term;

use crate::build::{Builder, Event, Options, Toolchain};
use ansi_term::Style;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Translate a mini-language program to C, build it, and run it.
#[derive(Parser, Debug)]
#[command(name = "etro", version)]
pub struct Cli {
    /// Source file, one command per line
    pub source: PathBuf,

    /// Keep generated sources and the executable
    #[arg(long, visible_alias = "no-delete")]
    pub keep_intermediates: bool,

    /// Write debug placeholder files after a successful build
    #[arg(long = "debug-artifacts", visible_alias = "debug")]
    pub emit_debug_artifacts: bool,

    /// Build only, do not run the executable
    #[arg(long, visible_alias = "no-run")]
    pub skip_run: bool,

    /// C compiler to invoke
    #[arg(long, env = "ETRO_CC", value_name = "PROGRAM")]
    pub cc: Option<String>,

    /// More log output; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            keep_intermediates: self.keep_intermediates,
            emit_debug_artifacts: self.emit_debug_artifacts,
            skip_run: self.skip_run,
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        match &self.cc {
            Some(cc) => Toolchain::new(cc.as_str()),
            None => Toolchain::default(),
        }
    }
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let builder = Builder::new(cli.options(), cli.toolchain());
    match builder.build(&cli.source, report) {
        Ok(outcome) => ExitCode::from(u8::try_from(outcome.exit_code()).unwrap_or(1)),
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn report(event: Event) {
    match event {
        Event::Compiling(command) => println!("Compiling with: {}", command),
        Event::CompileFailed(diagnostics) => {
            println!("{}", Style::new().bold().paint("Compilation failed."));
            eprint!("{}", diagnostics);
        }
        Event::Compiled => println!("Compilation succeeded."),
        Event::DebugArtifacts => println!("Debug tools generated."),
        Event::SkipRun => println!("Skipping the run, --skip-run given."),
        Event::Running(binary) => println!("Running {}:\n", binary.display()),
        Event::Interrupted => {
            println!("\n{}", Style::new().bold().paint("Execution interrupted by user."))
        }
    }
}
