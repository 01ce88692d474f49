//! LS-8 simulator CLI.
//!
//! This binary is the command-line entry point to the simulator. It performs:
//! 1. **Run:** Load a program text file and execute it until `HLT`, printing program output
//!    to stdout.
//! 2. **Disassemble:** List a program image as LS-8 assembly.
//!
//! Diagnostics, traces, and statistics go to stderr. The exit status is 0 when the program
//! halts and 1 on any failure.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ls8_core::Simulator;
use ls8_core::common::SimError;
use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::soc::StdoutConsole;

/// Filter used with `--trace` or `general.trace_instructions`.
const TRACE_FILTER: &str = "warn,ls8_core=trace";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit instruction set simulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one byte per line written in binary; anything after the first token on a line is a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --stats programs/mult.ls8\n  ls8 disasm programs/call.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program until it halts.
    Run(RunArgs),

    /// Print a program as assembly.
    Disasm {
        /// Program text file.
        program: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program text file.
    program: PathBuf,

    /// Trace every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics to stderr when the run ends.
    #[arg(long)]
    stats: bool,

    /// Fail once this many instructions have executed.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// JSON configuration file; command-line flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` is honoured unless instruction tracing was requested.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new(TRACE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Reports a failure on stderr and returns the failure status.
fn fail(e: impl Display) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::FAILURE
}

/// Runs a program to completion.
///
/// Configuration comes from `--config` when given, then individual flags override it. On a
/// runtime failure the machine state is dumped to stderr before exiting with status 1.
fn cmd_run(args: &RunArgs) -> ExitCode {
    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => return fail(e),
        },
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }

    init_tracing(config.general.trace_instructions);
    debug!(
        program = %args.program.display(),
        config = ?args.config,
        max_steps = ?config.general.max_steps,
        "starting run"
    );

    let image = match loader::load_program(&args.program) {
        Ok(image) => image,
        Err(e) => return fail(SimError::from(e)),
    };
    let mut sim = match Simulator::with_program(&config, StdoutConsole::new(), &image) {
        Ok(sim) => sim,
        Err(e) => return fail(e),
    };

    let result = sim.run();
    if args.stats {
        sim.cpu.stats.print();
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = fail(&e);
            if !matches!(e, SimError::Output(_)) {
                sim.cpu.dump_state();
            }
            code
        }
    }
}

/// Prints a linear-sweep listing of a program.
fn cmd_disasm(program: &Path) -> ExitCode {
    let image = match loader::load_program(program) {
        Ok(image) => image,
        Err(e) => return fail(SimError::from(e)),
    };
    for line in disasm::listing(&image) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
