/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/lib.rs
 * Purpose:  Library root and public re-exports.
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

//! TOX: lexer, parser and tree-walking interpreter for a small
//! dynamically typed, C-like scripting language.
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Interpreter
//! ```
//!
//! Diagnostics flow through an injected [`Reporter`]; `log` output through an
//! injected [`OutputSink`].

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod globals;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod span;
pub mod stack;
pub mod value;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use diagnostics::{DiagnosticLog, DiagnosticPrinter, Reporter};
pub use error::{RuntimeError, StaticError};
pub use interpreter::calls::{Callable, NativeFunction, UserFunction};
pub use interpreter::{Interpreter, MAX_CALL_DEPTH};
pub use lexer::{scan, Literal, Token, TokenKind};
pub use output::{CapturedOutput, OutputSink, Stdout};
pub use parser::{parse, MAX_NESTING};
pub use pipeline::{run_source, Outcome};
pub use span::Span;
pub use value::Value;
