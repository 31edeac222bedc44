/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/lexer/lexer.rs
 * Purpose:  Source text to token stream.
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

use crate::diagnostics::Reporter;
use crate::error::StaticError;
use crate::lexer::keywords::keyword;
use crate::lexer::token::{Literal, Token, TokenKind};
use crate::span::Span;

/// Converts source text into tokens, terminated by a single `Eof` token.
///
/// Lexical errors are reported through `reporter` and the offending input is
/// skipped, so the returned stream is always complete and well terminated.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut lexer = Lexer::new(source, reporter);
    lexer.scan_tokens();
    debug!(count = lexer.tokens.len(), "scanned tokens");
    lexer.tokens
}

pub struct Lexer<'r> {
    chars: Vec<char>,

    /// Offset of the first character of the lexeme being scanned.
    start: usize,

    current: usize,
    line: usize,

    /// Offset of the first character of the current line.
    line_start: usize,

    pub tokens: Vec<Token>,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Lexer<'r> {
    /// Creates a new TOX lexer instance from raw source code.
    ///
    /// The cursor starts at offset `0` on line `1` with an empty token
    /// buffer.
    pub fn new(source: &str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
            reporter,
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Ignores whitespace and comments, then appends the terminating
    /// `TokenKind::Eof` marker. Results are written into `self.tokens`.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.start = self.current;
        let span = self.span();
        self.tokens.push(Token::new(TokenKind::Eof, "", None, span));
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// Two-character operators are matched longest-first, so `!=` wins over
    /// `!` and `//` starts a comment rather than producing a `/`.
    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') { TokenKind::GreaterEqual } else { TokenKind::Greater };
                self.add_token(kind);
            }

            // Single-line comment, block comment, or division
            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),

            c if is_alpha(c) => self.identifier(),

            _ => self.error("Unexpected character."),
        }
    }

    /// Parses a `"`-delimited string literal.
    ///
    /// Strings may span lines. There is no escape processing; the literal is
    /// the raw text between the quotes. An unterminated string is reported
    /// at the line scanning stopped on and produces no token.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.advance();
                self.newline();
            } else {
                self.advance();
            }
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return;
        }

        self.advance(); // closing quote

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal(TokenKind::String, Some(Literal::String(value)));
    }

    /// Parses an integer or decimal numeric literal.
    ///
    /// A `.` only belongs to the number when a digit follows it, so `1.`
    /// scans as `1` then `.`.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => self.error("Invalid number literal."),
        }
    }

    /// Parses an identifier or keyword token.
    ///
    /// Reads the maximal run of alphanumeric and underscore characters, then
    /// classifies it against the keyword table.
    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let kind = keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Skips a block comment delimited by `/* ... */`.
    ///
    /// Newlines inside the comment still advance the line counter.
    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }

            if self.advance() == '\n' {
                self.newline();
            }
        }

        self.error("Unterminated multiline comment.");
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.span());
        trace!(token = %token.describe(), line = token.line(), "token");
        self.tokens.push(token);
    }

    fn error(&mut self, message: &str) {
        let error = StaticError::lexical(message, Span::new(self.line, self.column_of(self.start)));
        self.reporter.static_error(&error);
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    /// Location of the lexeme start. Multi-line strings report the line
    /// they end on, matching the line counter at emit time.
    fn span(&self) -> Span {
        Span::new(self.line, self.column_of(self.start))
    }

    fn column_of(&self, offset: usize) -> usize {
        offset.saturating_sub(self.line_start)
    }

    /// Records that the character just consumed was a newline.
    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    /// Conditionally consumes the next character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances the lexer cursor by one character.
    ///
    /// Caller must ensure EOF has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at EOF.
    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticLog;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut log = DiagnosticLog::new();
        let tokens = scan(source, &mut log);
        assert!(!log.had_error(), "unexpected errors: {:?}", log.messages());
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn two_character_operators_win_over_single() {
        use TokenKind::*;
        assert_eq!(
            kinds("! != = == < <= > >="),
            vec![Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual, Eof]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        use TokenKind::*;
        assert_eq!(
            kinds("let fn_name = fn; log nil and or this do _x1"),
            vec![Let, Identifier, Equal, Fn, Semicolon, Log, Nil, And, Or, This, Do, Identifier, Eof]
        );
    }

    #[test]
    fn number_literals_decode_as_floats() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("12 3.25 7.", &mut log);

        assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
        assert_eq!(tokens[1].literal, Some(Literal::Number(3.25)));
        assert_eq!(tokens[2].literal, Some(Literal::Number(7.0)));
        assert_eq!(tokens[3].kind, TokenKind::Dot);
    }

    #[test]
    fn string_literal_spans_lines() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("\"a\nb\" x", &mut log);

        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"a\nb\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".to_string())));
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn comments_are_skipped_and_count_lines() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("// one\n/* two\nthree */ x / y", &mut log);

        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["x", "/", "y", ""]);
        assert_eq!(tokens[0].line(), 3);
        assert_eq!(tokens[0].span.column, 9);
    }

    #[test]
    fn unexpected_characters_are_reported_and_skipped() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("let @ x # = 1;", &mut log);

        assert_eq!(log.static_errors.len(), 2);
        assert_eq!(log.messages()[0], "[line 1] Error: Unexpected character.");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn unterminated_string_reports_last_line() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("log \"abc\ndef", &mut log);

        assert_eq!(log.messages(), vec!["[line 2] Error: Unterminated string.".to_string()]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn unterminated_block_comment_is_reported() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("x /* never\nclosed", &mut log);

        assert_eq!(log.messages(), vec!["[line 2] Error: Unterminated multiline comment.".to_string()]);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn eof_token_carries_final_line() {
        let mut log = DiagnosticLog::new();
        let tokens = scan("a\nb\n", &mut log);
        assert_eq!(tokens.last().map(|t| t.line()), Some(3));
    }
}
