//! Illi interpreter CLI.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use illi_diagnostic::emitter::{ColorMode, TerminalEmitter};
use illic::cli::{parse_args, Command};
use illic::{exit_code, explain, init_tracing, run_prompt, run_script, Session};

fn main() -> ExitCode {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(exit_code::USAGE);
        }
    };

    match options.command {
        Command::Repl => run_repl(options.color),
        Command::Script(path) => run_file(&path, options.color),
        Command::Explain(code) => explain_code(&code),
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("Illi {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn stderr_emitter(color: ColorMode) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(color, io::stderr().is_terminal())
}

fn run_file(path: &Path, color: ColorMode) -> ExitCode {
    let mut session = Session::new(stderr_emitter(color));
    match run_script(&mut session, path) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("File not found: {} ({err})", path.display());
            ExitCode::from(exit_code::NO_INPUT)
        }
    }
}

fn run_repl(color: ColorMode) -> ExitCode {
    let mut session = Session::new(stderr_emitter(color));
    match run_prompt(&mut session, io::stdin().lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code::IO_ERR)
        }
    }
}

fn explain_code(code: &str) -> ExitCode {
    if let Some(text) = explain(code) {
        println!("{text}");
        ExitCode::SUCCESS
    } else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1002");
        ExitCode::from(exit_code::USAGE)
    }
}

fn print_usage() {
    println!("Illi interpreter");
    println!();
    println!("Usage: illi [options] [script]");
    println!();
    println!("With no script, starts an interactive prompt.");
    println!();
    println!("Options:");
    println!("  --color=<mode>     Diagnostic colors: auto, always, never");
    println!("  --explain <code>   Explain an error code (e.g., E1002)");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Environment:");
    println!("  ILLI_LOG           Tracing filter (falls back to RUST_LOG)");
}
