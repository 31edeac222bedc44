/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/expressions.rs
 * Purpose:  Expression evaluation.
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

use crate::ast::Expr;
use crate::error::RuntimeError;
use crate::interpreter::helpers::{is_truthy, number_operand, number_operands};
use crate::interpreter::Interpreter;
use crate::lexer::token::{Token, TokenKind};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

impl Interpreter {
    /// Evaluates a single TOX expression and returns its runtime value.
    ///
    /// This is the **core expression dispatcher**; every expression in the
    /// language eventually passes through it. Operands are evaluated left
    /// to right.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| self.evaluate_expr(expr))
    }

    fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            // -----------------------------------------------------------------
            // Literals / Grouping / Variables
            // -----------------------------------------------------------------
            Expr::Literal(literal) => Ok(Value::from(literal)),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Variable(name) => self.environment.borrow().get(name),

            // -----------------------------------------------------------------
            // Assignment is an expression yielding the assigned value
            // -----------------------------------------------------------------
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }

            // -----------------------------------------------------------------
            // Unary Operators
            // -----------------------------------------------------------------
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;

                match operator.kind {
                    TokenKind::Minus => Ok(Value::Number(-number_operand(operator, &right)?)),
                    TokenKind::Bang => Ok(Value::Bool(!is_truthy(&right))),
                    _ => Err(unknown_operator(operator)),
                }
            }

            // -----------------------------------------------------------------
            // Binary Operators
            // -----------------------------------------------------------------
            Expr::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                binary(operator, left, right)
            }

            // -----------------------------------------------------------------
            // Short-circuit Logic: returns an operand, not a coerced bool
            // -----------------------------------------------------------------
            Expr::Logical { left, operator, right } => {
                let left = self.evaluate(left)?;

                let short_circuits = match operator.kind {
                    TokenKind::Or => is_truthy(&left),
                    TokenKind::And => !is_truthy(&left),
                    _ => return Err(unknown_operator(operator)),
                };

                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            // -----------------------------------------------------------------
            // Calls
            // -----------------------------------------------------------------
            Expr::Call { callee, paren, arguments } => {
                let callee = self.evaluate(callee)?;

                let arguments = arguments
                    .iter()
                    .map(|argument| self.evaluate(argument))
                    .collect::<Result<Vec<_>, _>>()?;

                self.call_value(callee, paren, arguments)
            }
        }
    }
}

fn binary(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Plus => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
            (left, right) => Err(RuntimeError::type_error(
                operator,
                "Operands must be two numbers or two strings.",
            )
            .with_help(format!("found a {} and a {}", left.type_name(), right.type_name()))),
        },

        // Division by zero follows IEEE semantics.
        TokenKind::Minus => number_operands(operator, &left, &right).map(|(a, b)| Value::Number(a - b)),
        TokenKind::Star => number_operands(operator, &left, &right).map(|(a, b)| Value::Number(a * b)),
        TokenKind::Slash => number_operands(operator, &left, &right).map(|(a, b)| Value::Number(a / b)),

        TokenKind::Greater => number_operands(operator, &left, &right).map(|(a, b)| Value::Bool(a > b)),
        TokenKind::GreaterEqual => number_operands(operator, &left, &right).map(|(a, b)| Value::Bool(a >= b)),
        TokenKind::Less => number_operands(operator, &left, &right).map(|(a, b)| Value::Bool(a < b)),
        TokenKind::LessEqual => number_operands(operator, &left, &right).map(|(a, b)| Value::Bool(a <= b)),

        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),

        _ => Err(unknown_operator(operator)),
    }
}

/// Unreachable for trees built by the parser, but a hand-built tree could
/// carry any token.
fn unknown_operator(operator: &Token) -> RuntimeError {
    RuntimeError::new("E_RUNTIME", operator, format!("Unknown operator '{}'.", operator.lexeme))
}
