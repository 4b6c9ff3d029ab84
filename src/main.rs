//! The Monkey language CLI: a REPL when run with no arguments, or a
//! one-shot file interpreter when given a source file.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;

use monkey::object::{Environment, Value};

/// Command-line interface for the Monkey interpreter.
#[derive(ClapParser)]
#[command(name = "monkey")]
#[command(about = "A tree-walking interpreter for the Monkey language", long_about = None)]
struct Cli {
    /// Source file to run. With no file, starts an interactive REPL.
    file: Option<String>,
}

/// Host-level failures that prevent the interpreter from running at all
/// (distinct from a guest-language `Value::Error`, which is a normal,
/// in-band result).
#[derive(Debug)]
enum CliError {
    CouldNotOpen { path: String, os_code: i32 },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CouldNotOpen { path, .. } => write!(f, "Could not open {}!", path),
        }
    }
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::CouldNotOpen { os_code, .. } => (*os_code).clamp(1, 255) as u8,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_file(path: &str) -> Result<(), CliError> {
    let source = fs::read_to_string(path).map_err(|e| CliError::CouldNotOpen {
        path: path.to_string(),
        os_code: e.raw_os_error().unwrap_or(1),
    })?;

    let env = Environment::new();
    match monkey::eval_source(&source, &env) {
        Ok(value) => print_result(&value),
        Err(errors) => print_parse_errors(&errors),
    }

    Ok(())
}

fn run_repl() {
    const PROMPT: &str = ">> ";
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim_end_matches('\n');
        if line.trim() == "exit()" {
            break;
        }

        match monkey::eval_source(line, &env) {
            Ok(value) => print_result(&value),
            Err(errors) => print_parse_errors(&errors),
        }
    }
}

fn print_result(value: &Value) {
    if !matches!(value, Value::Null) {
        println!("{}", value);
    }
}

fn print_parse_errors(errors: &[String]) {
    for error in errors {
        eprintln!("\t{}", error);
    }
}
