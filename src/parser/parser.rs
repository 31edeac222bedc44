/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/parser.rs
 * Purpose:  Parser state, entry point and error recovery.
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

use tracing::{debug, trace};

use crate::ast::Stmt;
use crate::diagnostics::Reporter;
use crate::error::StaticError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use crate::stack::ensure_sufficient_stack;

/// Upper bound on call arguments and function parameters.
pub const MAX_ARITY: usize = 255;

/// How deeply statements and expressions may nest inside one another.
pub const MAX_NESTING: usize = 255;

/// Result of a grammar rule. An `Err` unwinds to the enclosing
/// `declaration`, which reports it and synchronizes.
pub type ParseResult<T> = Result<T, StaticError>;

/// The core TOX recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The diagnostics sink syntax errors are reported into
///
/// The actual grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'r> {
    /// Complete list of tokens to be parsed. Always ends in `Eof`.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    pub(crate) reporter: &'r mut dyn Reporter,

    /// Current statement/expression nesting.
    depth: usize,
}

/// Public entry point for the TOX parsing phase.
///
/// Returns every top-level statement that parsed successfully. Statements
/// containing syntax errors are reported through `reporter` and left out,
/// and parsing resumes at the next statement boundary so one pass surfaces
/// as many independent errors as possible.
///
/// # TOX Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: Vec<Token>, reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, reporter);
    let statements = parser.parse();
    debug!(count = statements.len(), "parsed statements");
    statements
}

impl<'r> Parser<'r> {
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut dyn Reporter) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let span = tokens.last().map(|t| t.span).unwrap_or(Span::new(1, 0));
            tokens.push(Token::new(TokenKind::Eof, "", None, span));
        }

        Self {
            tokens,
            current: 0,
            reporter,
            depth: 0,
        }
    }

    /// Parses the entire token stream into a list of top-level statements.
    ///
    /// This is the **main driver** of the recursive-descent parser. It
    /// consumes declarations until the `Eof` token is reached.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }

        stmts
    }

    /// declaration → fnDecl | letDecl | statement
    ///
    /// The recovery point of the grammar: a failed declaration is reported
    /// once, the parser synchronizes, and no node is produced.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(TokenKind::Fn) {
            self.function()
        } else if self.match_kind(TokenKind::Let) {
            self.let_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.reporter.static_error(&error);
                self.synchronize();
                None
            }
        }
    }

    /// Runs a recursive grammar rule one nesting level deeper.
    ///
    /// Past `MAX_NESTING` levels the rule fails with `Too much nesting.`
    /// and the enclosing declaration recovers as for any syntax error.
    pub(crate) fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(StaticError::syntax(self.peek(), "Too much nesting.")
                .with_help(format!("at most {} levels are allowed", MAX_NESTING)));
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| rule(self));
        self.depth -= 1;
        result
    }

    /// Reports a syntax error without unwinding. Used for limits that do
    /// not leave the parser confused about where it is.
    pub(crate) fn report(&mut self, error: StaticError) {
        self.reporter.static_error(&error);
    }

    /// Panic-mode recovery.
    ///
    /// Discards tokens until just after a `;` or just before a token that
    /// starts a statement.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }

            match self.peek().kind {
                TokenKind::Let
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Log
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::Fn => break,
                _ => {}
            }

            self.advance();
        }

        trace!(at = %self.peek(), line = self.peek().line(), "synchronized");
    }
}
