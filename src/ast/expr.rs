/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/ast/expr.rs
 * Purpose:  Expression nodes.
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

use serde::Serialize;

use crate::lexer::token::{Literal, Token};

/// All TOX expressions.
///
/// Each node owns its children exclusively; the tree is never shared and
/// never cyclic. Operator and name tokens are kept so runtime errors can
/// point at the source line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(Literal),

    Grouping(Box<Expr>),

    Unary {
        operator: Token,
        right: Box<Expr>,
    },

    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// `and` / `or`, kept apart from `Binary` because they short-circuit.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    Variable(Token),

    Assign {
        name: Token,
        value: Box<Expr>,
    },

    Call {
        callee: Box<Expr>,
        /// The closing `)`, used as the error location.
        paren: Token,
        arguments: Vec<Expr>,
    },
}
