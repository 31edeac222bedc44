/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/lexer.rs
 * Purpose:  Lexer module root.
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

/// Token model: kinds, literals and the token record itself.
pub mod token;

/// Reserved word table.
pub mod keywords;

/// The scanner turning source text into tokens.
pub mod lexer;

/// Re-export the public scan entry point so callers can use:
/// `crate::lexer::scan(...)`
pub use lexer::scan;
pub use token::{Literal, Token, TokenKind};
