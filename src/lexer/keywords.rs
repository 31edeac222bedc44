/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/lexer/keywords.rs
 * Purpose:  Reserved word lookup.
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

use crate::lexer::token::TokenKind;

/// Resolves a scanned identifier to its **reserved keyword** kind.
///
/// This function is used exclusively by the lexer during tokenization to
/// distinguish user-defined identifiers from language-defined keywords.
///
/// # Returns
/// - `Some(kind)` if the word is reserved.
/// - `None` if the word should be treated as a normal identifier.
///
/// Keywords are case-sensitive: `Let` is an identifier.
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fn" => TokenKind::Fn,
        "nil" => TokenKind::Nil,
        "log" => TokenKind::Log,
        "return" => TokenKind::Return,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "while" => TokenKind::While,
        "let" => TokenKind::Let,
        "if" => TokenKind::If,
        "do" => TokenKind::Do,
        _ => return None,
    };

    Some(kind)
}
