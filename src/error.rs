/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/error.rs
 * Purpose:  Static and runtime error types.
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

use std::fmt;

use thiserror::Error;

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Where a static error points, rendered between `Error` and the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Lexical errors carry no token, only a line.
    Unknown,
    /// The offending token was end-of-input.
    AtEnd,
    /// The offending token's lexeme.
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => Ok(()),
            Location::AtEnd => write!(f, " at end"),
            Location::At(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A lexical or syntax error.
///
/// These are recoverable: the lexer skips the offending input and the parser
/// synchronizes to the next statement boundary, so one pass may produce many.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {line}] Error{location}: {message}", line = .span.line)]
pub struct StaticError {
    /// Stable error code (`E_LEX`, `E_SYNTAX`)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    pub location: Location,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl StaticError {
    /// Lexical error (unexpected character, unterminated literal or comment)
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            code: "E_LEX",
            message: message.into(),
            location: Location::Unknown,
            span,
            help: None,
        }
    }

    /// Syntax error reported against the token the parser stopped at.
    pub fn syntax(token: &Token, message: impl Into<String>) -> Self {
        let location = if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::At(token.lexeme.clone())
        };

        Self {
            code: "E_SYNTAX",
            message: message.into(),
            location,
            span: token.span,
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// An error raised while evaluating a program.
///
/// Runtime errors abort the current `interpret` call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}\n[line {line}]", line = .token.span.line)]
pub struct RuntimeError {
    /// Stable error code (`E_TYPE`, `E_REFERENCE`, ...)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// The token the error is reported against.
    pub token: Token,

    /// Optional note / help text
    pub help: Option<String>,
}

impl RuntimeError {
    /// Generic constructor
    pub fn new(code: &'static str, token: &Token, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            token: token.clone(),
            help: None,
        }
    }

    /// Type error (invalid operand types)
    pub fn type_error(token: &Token, message: impl Into<String>) -> Self {
        Self::new("E_TYPE", token, message)
    }

    /// Reference error (undefined variable)
    pub fn reference_error(token: &Token, message: impl Into<String>) -> Self {
        Self::new("E_REFERENCE", token, message)
    }

    /// Calling something that is not callable
    pub fn call_error(token: &Token, message: impl Into<String>) -> Self {
        Self::new("E_CALL", token, message)
    }

    /// Wrong number of arguments
    pub fn arity_error(token: &Token, expected: usize, got: usize) -> Self {
        Self::new(
            "E_ARITY",
            token,
            format!("Expected {} arguments but got {}.", expected, got),
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn line(&self) -> usize {
        self.token.line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, lexeme: &str, line: usize) -> Token {
        Token::new(kind, lexeme, None, Span::new(line, 0))
    }

    #[test]
    fn syntax_error_points_at_lexeme() {
        let err = StaticError::syntax(&token(TokenKind::Identifier, "foo", 3), "Expect ';' after value.");
        assert_eq!(err.to_string(), "[line 3] Error at 'foo': Expect ';' after value.");
    }

    #[test]
    fn syntax_error_at_end_of_input() {
        let err = StaticError::syntax(&token(TokenKind::Eof, "", 7), "Expect expression.");
        assert_eq!(err.to_string(), "[line 7] Error at end: Expect expression.");
    }

    #[test]
    fn lexical_error_has_no_location() {
        let err = StaticError::lexical("Unexpected character.", Span::new(2, 4));
        assert_eq!(err.to_string(), "[line 2] Error: Unexpected character.");
    }

    #[test]
    fn runtime_error_puts_line_after_message() {
        let err = RuntimeError::arity_error(&token(TokenKind::RightParen, ")", 5), 2, 1);
        assert_eq!(err.to_string(), "Expected 2 arguments but got 1.\n[line 5]");
        assert_eq!(err.code, "E_ARITY");
    }
}
