/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/mod.rs
 * Purpose:  Interpreter state and program driver.
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
 * Interpreter Entry & Runtime Bootstrap
 * -------------------------------------
 * The `Interpreter` owns the global scope, the current scope and the output
 * sink. It lives for a whole session, so a REPL keeps one instance and its
 * globals persist from line to line.
 *
 * Evaluation is split across submodules, each adding an `impl Interpreter`
 * block:
 *
 *  - statements.rs  → statement execution and scoped blocks
 *  - expressions.rs → expression evaluation
 *  - calls.rs       → callables and call dispatch
 *  - display.rs     → value formatting for `log`
 */

pub mod calls;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod statements;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::ast::Stmt;
use crate::diagnostics::Reporter;
use crate::error::RuntimeError;
use crate::globals;
use crate::interpreter::calls::NativeFunction;
use crate::interpreter::environment::Environment;
use crate::interpreter::statements::ExecSignal;
use crate::output::OutputSink;
use crate::value::Value;

/// Deepest chain of active calls before a program is stopped with
/// `Stack overflow.`
pub const MAX_CALL_DEPTH: usize = 1024;

pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,

    /// The scope statements currently execute in. Swapped by
    /// `execute_block` and always restored afterward.
    pub(crate) environment: Rc<RefCell<Environment>>,

    pub(crate) output: Box<dyn OutputSink>,

    /// Number of calls currently executing.
    pub(crate) depth: usize,
}

impl Interpreter {
    /// Creates an interpreter writing `log` output to `output`, with the
    /// native functions already installed in the global scope.
    pub fn new(output: impl OutputSink + 'static) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new(None)));
        globals::install(&globals);

        Self {
            environment: globals.clone(),
            globals,
            output: Box::new(output),
            depth: 0,
        }
    }

    pub fn globals(&self) -> Rc<RefCell<Environment>> {
        self.globals.clone()
    }

    /// Adds a host function to the global scope.
    pub fn define_native(
        &mut self,
        name: &'static str,
        arity: usize,
        function: impl Fn(&[Value]) -> Value + 'static,
    ) {
        let native = NativeFunction::new(name, arity, function);
        self.globals
            .borrow_mut()
            .define(name, Value::Callable(Rc::new(native)));
    }

    /// Executes a parsed program in order.
    ///
    /// The first runtime error is reported once to `reporter` and aborts the
    /// rest of the program; output already written stays written. A
    /// top-level `return` quietly stops the program.
    #[tracing::instrument(skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut dyn Reporter) -> Result<(), RuntimeError> {
        for stmt in statements {
            match self.execute(stmt) {
                Ok(ExecSignal::None) => {}
                Ok(ExecSignal::Return(_)) => break,
                Err(error) => {
                    debug!(code = error.code, line = error.line(), "runtime error");
                    reporter.runtime_error(&error);
                    return Err(error);
                }
            }
        }

        Ok(())
    }
}
