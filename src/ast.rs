/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/ast.rs
 * Purpose:  AST module root.
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

/// Expression nodes.
pub mod expr;

/// Statement nodes and function declarations.
pub mod stmt;

/// Prefix-form rendering used by `Display`.
pub mod printer;

pub use expr::Expr;
pub use stmt::{FunctionDecl, Stmt};
