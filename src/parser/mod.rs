/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/mod.rs
 * Purpose:  Parser module root.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens, reporter)` entry point
/// - Declaration-level error recovery
pub mod parser;

/// Statement-level parsing:
/// - fn / let declarations
/// - if / while / for / do / log / return / blocks
pub mod statements;

/// Expression-level parsing:
/// - assignment → or → and → equality → comparison → term → factor → unary → call → primary
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
pub mod helpers;

#[cfg(test)]
mod tests;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Parser, MAX_ARITY, MAX_NESTING};
