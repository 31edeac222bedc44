/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/lexer/token.rs
 * Purpose:  Token kinds, literals and tokens.
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

use serde::Serialize;

use crate::span::Span;

/// Represents the **category of a lexical token** in the TOX language.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// code should be interpreted by the parser.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character punctuation.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Else,
    False,
    Fn,
    For,
    If,
    Nil,
    Or,
    Log,
    Return,
    This,
    True,
    Let,
    While,
    Do,

    /// End-of-input marker.
    ///
    /// Always appended as the **final token** during lexing and used by the
    /// parser to determine when input has been fully consumed.
    Eof,
}

impl TokenKind {
    /// Upper-case name used by [`Token::describe`], e.g. `LEFT_PAREN`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fn => "FN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Log => "LOG",
            TokenKind::Return => "RETURN",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Let => "LET",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Eof => "EOF",
        }
    }
}

/// A decoded literal value.
///
/// The lexer produces `Number` and `String`; the parser additionally builds
/// `Nil`, `Bool(true)` and `Bool(false)` from their keywords.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => write!(f, "nil"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// Represents a **single lexical token** produced by the TOX lexer.
///
/// # Example Tokens
/// ```text
/// let  →  { kind: Let,        lexeme: "let", literal: None,            line: 1 }
/// age  →  { kind: Identifier, lexeme: "age", literal: None,            line: 1 }
/// 42   →  { kind: Number,     lexeme: "42",  literal: Some(Number(42)), line: 1 }
/// ```
///
/// Tokens are immutable once created and are owned by the token stream
/// handed to the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// The decoded value for string and number literals.
    pub literal: Option<Literal>,

    /// Where the lexeme starts.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            span,
        }
    }

    /// The 1-based line the token appeared on.
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// Renders `KIND lexeme literal`, the form used by token dumps.
    pub fn describe(&self) -> String {
        let literal = self
            .literal
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_default();
        format!("{} {} {}", self.kind.name(), self.lexeme, literal)
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the lexeme is printed so error messages show what the user
    /// wrote rather than the token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
