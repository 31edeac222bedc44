/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/main.rs
 * Purpose:  The tox command line front end (repl, file, tokens, ast).
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the TOX programming language project.
 * 
 * TOX is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use tox::{parse, run_source, scan, DiagnosticLog, DiagnosticPrinter, Interpreter, Outcome, Reporter, Stdout};

/// Exit status for lexical or syntax errors.
const EXIT_STATIC_ERROR: u8 = 65;
/// Exit status for runtime errors.
const EXIT_RUNTIME_ERROR: u8 = 70;
/// Exit status when the input could not be read.
const EXIT_IO_ERROR: u8 = 74;

const PROMPT: &str = "λ >  ";

/// TOX - a small tree-walking interpreter
#[derive(Parser, Debug)]
#[command(name = "tox", version)]
#[command(about = "Run TOX programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive session
    Repl,

    /// Run a source file
    File {
        path: PathBuf,
    },

    /// Print the token stream of a source file as JSON
    Tokens {
        path: PathBuf,
    },

    /// Print the parsed statements of a source file as JSON
    Ast {
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // TOX_LOG controls the level, warnings and above by default.
    let filter = EnvFilter::try_from_env("TOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Repl => repl(),
        Command::File { path } => run_file(&path),
        Command::Tokens { path } => dump_tokens(&path),
        Command::Ast { path } => dump_ast(&path),
    }
}

fn read_source(path: &Path) -> Result<String, ExitCode> {
    fs::read_to_string(path).map_err(|err| {
        eprintln!("Could not read '{}': {}", path.display(), err);
        ExitCode::from(EXIT_IO_ERROR)
    })
}

fn run_file(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut printer = DiagnosticPrinter::new(path.display().to_string(), source.as_str());
    let mut interpreter = Interpreter::new(Stdout);

    match run_source(&source, &mut interpreter, &mut printer) {
        Outcome::Ok => ExitCode::SUCCESS,
        Outcome::StaticError => ExitCode::from(EXIT_STATIC_ERROR),
        Outcome::RuntimeError => ExitCode::from(EXIT_RUNTIME_ERROR),
    }
}

/// One interpreter for the whole session, so definitions persist between
/// lines. Errors are printed and the session carries on.
fn repl() -> ExitCode {
    let mut interpreter = Interpreter::new(Stdout);
    let mut printer = DiagnosticPrinter::new("<repl>", "");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("{}", err);
                break;
            }
            None => break,
        };

        if line.trim() == "exit" {
            break;
        }

        printer.reset(line.as_str());
        run_source(&line, &mut interpreter, &mut printer);
    }

    println!("Exiting Tox REPL!");
    ExitCode::SUCCESS
}

fn dump_tokens(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut printer = DiagnosticPrinter::new(path.display().to_string(), source.as_str());
    let tokens = scan(&source, &mut printer);
    print_json(&tokens);

    if printer.had_error {
        ExitCode::from(EXIT_STATIC_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

fn dump_ast(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut log = DiagnosticLog::new();
    let program = parse(scan(&source, &mut log), &mut log);

    if log.had_error() {
        let mut printer = DiagnosticPrinter::new(path.display().to_string(), source.as_str());
        for error in &log.static_errors {
            printer.static_error(error);
        }
        return ExitCode::from(EXIT_STATIC_ERROR);
    }

    print_json(&program);
    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Could not serialize: {}", err),
    }
}
