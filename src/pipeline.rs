/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/pipeline.rs
 * Purpose:  scan, parse and interpret in one call.
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

use tracing::info;

use crate::diagnostics::Reporter;
use crate::error::{RuntimeError, StaticError};
use crate::interpreter::Interpreter;
use crate::lexer::scan;
use crate::parser::parse;

/// How a single `run_source` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran to completion (or hit a top-level `return`).
    Ok,

    /// Lexical or syntax errors were reported; nothing was executed.
    StaticError,

    /// Execution started and was aborted by a runtime error.
    RuntimeError,
}

/// Scans, parses and, when both phases were clean, interprets `source`.
///
/// Every diagnostic goes to `reporter`. Only errors reported during this
/// call count toward the outcome, so a REPL can reuse one reporter.
#[tracing::instrument(level = "info", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, interpreter: &mut Interpreter, reporter: &mut dyn Reporter) -> Outcome {
    let mut counting = Counting::new(reporter);

    let tokens = scan(source, &mut counting);
    let program = parse(tokens, &mut counting);

    if counting.static_errors > 0 {
        info!(errors = counting.static_errors, "static errors, not executing");
        return Outcome::StaticError;
    }

    match interpreter.interpret(&program, &mut counting) {
        Ok(()) => Outcome::Ok,
        Err(_) => Outcome::RuntimeError,
    }
}

/// Forwards to an inner reporter while counting static errors.
struct Counting<'r> {
    inner: &'r mut dyn Reporter,
    static_errors: usize,
}

impl<'r> Counting<'r> {
    fn new(inner: &'r mut dyn Reporter) -> Self {
        Self { inner, static_errors: 0 }
    }
}

impl Reporter for Counting<'_> {
    fn static_error(&mut self, error: &StaticError) {
        self.static_errors += 1;
        self.inner.static_error(error);
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.inner.runtime_error(error);
    }
}
