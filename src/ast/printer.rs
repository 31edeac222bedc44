/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/ast/printer.rs
 * Purpose:  Prefix-form AST printer.
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

//! Parenthesized prefix rendering of the AST.
//!
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`, which makes precedence and
//! associativity visible at a glance. Used by `Display` for `Expr` and
//! `Stmt`.

use std::fmt;

use crate::ast::{Expr, Stmt};
use crate::lexer::token::Literal;

pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(Literal::String(s)) => format!("\"{}\"", s),
        Expr::Literal(literal) => literal.to_string(),
        Expr::Grouping(inner) => parenthesize("group", [inner.as_ref()]),
        Expr::Unary { operator, right } => parenthesize(&operator.lexeme, [right.as_ref()]),
        Expr::Binary { left, operator, right } | Expr::Logical { left, operator, right } => {
            parenthesize(&operator.lexeme, [left.as_ref(), right.as_ref()])
        }
        Expr::Variable(name) => name.lexeme.clone(),
        Expr::Assign { name, value } => format!("(= {} {})", name.lexeme, print_expr(value)),
        Expr::Call { callee, arguments, .. } => {
            let mut out = format!("(call {}", print_expr(callee));
            for arg in arguments {
                out.push(' ');
                out.push_str(&print_expr(arg));
            }
            out.push(')');
            out
        }
    }
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr) => format!("(; {})", print_expr(expr)),
        Stmt::Log(expr) => format!("(log {})", print_expr(expr)),
        Stmt::Let { name, initializer: Some(init) } => format!("(let {} {})", name.lexeme, print_expr(init)),
        Stmt::Let { name, initializer: None } => format!("(let {})", name.lexeme),
        Stmt::Block(statements) => {
            let mut out = String::from("(block");
            for s in statements {
                out.push(' ');
                out.push_str(&print_stmt(s));
            }
            out.push(')');
            out
        }
        Stmt::If { condition, then_branch, else_branch } => match else_branch {
            Some(else_branch) => format!(
                "(if {} {} {})",
                print_expr(condition),
                print_stmt(then_branch),
                print_stmt(else_branch)
            ),
            None => format!("(if {} {})", print_expr(condition), print_stmt(then_branch)),
        },
        Stmt::While { condition, body } => format!("(while {} {})", print_expr(condition), print_stmt(body)),
        Stmt::Function(decl) => {
            let params: Vec<&str> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
            let mut out = format!("(fn {} ({})", decl.name.lexeme, params.join(" "));
            for s in &decl.body {
                out.push(' ');
                out.push_str(&print_stmt(s));
            }
            out.push(')');
            out
        }
        Stmt::Return { value: Some(value), .. } => format!("(return {})", print_expr(value)),
        Stmt::Return { value: None, .. } => "(return)".to_string(),
    }
}

fn parenthesize<'a>(name: &str, exprs: impl IntoIterator<Item = &'a Expr>) -> String {
    let mut out = format!("({}", name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_expr(self))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_stmt(self))
    }
}
