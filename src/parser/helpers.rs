/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/helpers.rs
 * Purpose:  Token cursor helpers for the parser.
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

use crate::error::StaticError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};

impl Parser<'_> {
    /// Matches a token kind and consumes it if present.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is any of `kinds`.
    ///
    /// Used by the binary-operator levels, each of which owns a small set
    /// of operators.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.match_kind(kind))
    }

    /// Checks the current token's kind without consuming it.
    ///
    /// Always `false` at end of input, even for `TokenKind::Eof`.
    pub fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    /// Consumes a required token or fails with a syntax error at the
    /// current token.
    pub fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let error = StaticError::syntax(self.peek(), message);

        // Point at where the `;` belongs rather than only at what followed.
        if kind == TokenKind::Semicolon && self.current > 0 {
            let after = self.previous().lexeme.clone();
            return Err(error.with_help(format!("add ';' after '{}'", after)));
        }

        Err(error)
    }

    /// Advances one token forward, never past `Eof`.
    pub fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the previously consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}
