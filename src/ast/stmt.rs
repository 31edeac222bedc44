/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/ast/stmt.rs
 * Purpose:  Statement nodes and function declarations.
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

use std::rc::Rc;

use serde::Serialize;

use crate::ast::Expr;
use crate::lexer::token::Token;

/// A function declaration.
///
/// Shared behind an `Rc` so every function value created from it can keep
/// the body alive without cloning the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// All executable TOX statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression(Expr),

    /// `log expr;` sends the stringified value to the output sink.
    Log(Expr),

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    Let {
        name: Token,
        initializer: Option<Expr>,
    },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    Function(Rc<FunctionDecl>),

    Return {
        keyword: Token,
        value: Option<Expr>,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}
