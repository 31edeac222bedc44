/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/diagnostics.rs
 * Purpose:  Reporter sink, in-memory log and stderr printer.
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

use tracing::debug;

use crate::error::{RuntimeError, StaticError};
use crate::span::Span;

/// The diagnostics sink the pipeline reports into.
///
/// The lexer and parser call [`Reporter::static_error`] once per problem and
/// keep going. The interpreter calls [`Reporter::runtime_error`] once and then
/// abandons the current `interpret` call.
pub trait Reporter {
    fn static_error(&mut self, error: &StaticError);
    fn runtime_error(&mut self, error: &RuntimeError);
}

/// Collects every reported error in memory.
///
/// Used by tests and anywhere the caller wants to inspect diagnostics
/// rather than print them.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticLog {
    pub static_errors: Vec<StaticError>,
    pub runtime_errors: Vec<RuntimeError>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.static_errors.is_empty()
    }

    pub fn had_runtime_error(&self) -> bool {
        !self.runtime_errors.is_empty()
    }

    /// Every diagnostic rendered in report order, static errors first.
    pub fn messages(&self) -> Vec<String> {
        self.static_errors
            .iter()
            .map(|e| e.to_string())
            .chain(self.runtime_errors.iter().map(|e| e.to_string()))
            .collect()
    }
}

impl Reporter for DiagnosticLog {
    fn static_error(&mut self, error: &StaticError) {
        self.static_errors.push(error.clone());
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.runtime_errors.push(error.clone());
    }
}

/// Responsible for rendering human-friendly diagnostics to stderr.
///
/// This printer:
/// - Prints the canonical one-line form (`[line N] Error at 'x': ...`)
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// It also remembers whether any error was printed so the front end can
/// decide whether to execute and which exit code to use.
pub struct DiagnosticPrinter {
    /// Full source code being interpreted.
    source: String,

    /// Name of the source (a file path, or `<repl>`).
    file_name: String,

    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Swaps in the next chunk of source (one REPL line) and clears the
    /// static error flag. The runtime flag is sticky.
    pub fn reset(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.had_error = false;
    }

    /// Renders the source excerpt under a diagnostic header.
    ///
    /// ```text
    ///   --> main.tox:12
    ///    |
    ///  12 | let x = 5 + true
    ///    |         ^
    /// ```
    pub fn render_excerpt(&self, span: Span, help: Option<&str>) -> String {
        let Span { line, column } = span;

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!("  --> {}:{}\n   |\n{:>3} | {}\n", self.file_name, line, line, src_line);
        out.push_str(&format!("   | {}^", " ".repeat(column)));

        if let Some(help) = help {
            out.push_str(&format!("\nhelp: {}", help));
        }

        out
    }
}

impl Reporter for DiagnosticPrinter {
    fn static_error(&mut self, error: &StaticError) {
        debug!(code = error.code, line = error.line(), "static error");
        eprintln!("{}", error);
        eprintln!("{}", self.render_excerpt(error.span, error.help.as_deref()));
        self.had_error = true;
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        debug!(code = error.code, line = error.line(), "runtime error");
        eprintln!("{}", error);
        eprintln!("{}", self.render_excerpt(error.token.span, error.help.as_deref()));
        self.had_runtime_error = true;
    }
}
