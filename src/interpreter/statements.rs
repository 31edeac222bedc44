/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/statements.rs
 * Purpose:  Statement execution and control signals.
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

/*!
 * TOX Statement Executor
 * ----------------------
 *
 * Executes every statement form. Expressions are evaluated by
 * `expressions.rs`, calls are dispatched by `calls.rs`.
 *
 * Each executor returns `Result<ExecSignal, RuntimeError>`:
 *
 *  • `Err`                 → a runtime error, aborts the whole program run
 *  • `Ok(ExecSignal::Return)` → a `return` unwinding to the nearest call
 *  • `Ok(ExecSignal::None)`   → fall through to the next statement
 */

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::ast::Stmt;
use crate::error::RuntimeError;
use crate::interpreter::calls::UserFunction;
use crate::interpreter::environment::Environment;
use crate::interpreter::helpers::is_truthy;
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/* ============================================================================
 * Execution Control Signals
 * ============================================================================
 */

/// Internal control flow signal used by the interpreter.
///
/// Kept apart from `RuntimeError` so a `return` can never be mistaken for
/// a failure. Blocks, `if` and `while` pass a `Return` straight up; only a
/// function call consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecSignal {
    /// Normal fall-through execution.
    None,

    /// Early return from a function.
    Return(Value),
}

impl Interpreter {
    /// Executes a single TOX statement in the current environment.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<ExecSignal, RuntimeError> {
        ensure_sufficient_stack(|| self.execute_stmt(stmt))
    }

    fn execute_stmt(&mut self, stmt: &Stmt) -> Result<ExecSignal, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(ExecSignal::None)
            }

            Stmt::Log(expr) => {
                let value = self.evaluate(expr)?;
                self.output.write_line(&value.to_string());
                Ok(ExecSignal::None)
            }

            Stmt::Let { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                self.environment.borrow_mut().define(name.lexeme.clone(), value);
                Ok(ExecSignal::None)
            }

            Stmt::Block(statements) => {
                let scope = Environment::child_of(&self.environment);
                self.execute_block(statements, scope)
            }

            Stmt::If { condition, then_branch, else_branch } => {
                if is_truthy(&self.evaluate(condition)?) {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(ExecSignal::None)
                }
            }

            Stmt::While { condition, body } => {
                while is_truthy(&self.evaluate(condition)?) {
                    if let ExecSignal::Return(value) = self.execute(body)? {
                        return Ok(ExecSignal::Return(value));
                    }
                }

                Ok(ExecSignal::None)
            }

            // The closure is the scope active right now, so the function
            // can see itself (and later siblings) by name when called.
            Stmt::Function(declaration) => {
                let function = UserFunction::new(declaration.clone(), self.environment.clone());
                trace!(name = %declaration.name, "declare function");
                self.environment
                    .borrow_mut()
                    .define(declaration.name.lexeme.clone(), Value::Callable(Rc::new(function)));
                Ok(ExecSignal::None)
            }

            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                Ok(ExecSignal::Return(value))
            }
        }
    }

    /// Runs `statements` with `environment` as the current scope.
    ///
    /// The previous scope is restored on every exit path: normal
    /// completion, a `return` unwinding through, or a runtime error.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<ExecSignal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> Result<ExecSignal, RuntimeError> {
        for stmt in statements {
            match self.execute(stmt)? {
                ExecSignal::None => {}
                signal => return Ok(signal),
            }
        }

        Ok(ExecSignal::None)
    }
}
