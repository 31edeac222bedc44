/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/calls.rs
 * Purpose:  Callables and call dispatch.
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

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ast::FunctionDecl;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::statements::ExecSignal;
use crate::interpreter::{Interpreter, MAX_CALL_DEPTH};
use crate::lexer::token::Token;
use crate::value::Value;

/// Anything a call expression can invoke.
///
/// The interpreter checks the argument count against [`Callable::arity`]
/// before calling, so implementations may assume `arguments.len()` matches.
pub trait Callable: fmt::Display {
    fn arity(&self) -> usize;

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError>;
}

/// A function declared in TOX source, paired with the scope it was
/// declared in.
pub struct UserFunction {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl UserFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Self { declaration, closure }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

impl Callable for UserFunction {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// Runs the body in a fresh scope enclosed by the closure (not by the
    /// caller), with each parameter bound to its argument.
    ///
    /// A `return` anywhere in the body ends the call with its value;
    /// falling off the end yields `nil`.
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let environment = Environment::child_of(&self.closure);

        {
            let mut scope = environment.borrow_mut();
            for (param, argument) in self.declaration.params.iter().zip(arguments) {
                scope.define(param.lexeme.clone(), argument);
            }
        }

        match interpreter.execute_block(&self.declaration.body, environment)? {
            ExecSignal::Return(value) => Ok(value),
            ExecSignal::None => Ok(Value::Nil),
        }
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

/// Host function signature: receives already-evaluated arguments.
pub type NativeFn = dyn Fn(&[Value]) -> Value;

/// A function provided by the host, such as `clock`.
pub struct NativeFunction {
    pub name: &'static str,
    arity: usize,
    function: Box<NativeFn>,
}

impl NativeFunction {
    pub fn new(name: &'static str, arity: usize, function: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name,
            arity,
            function: Box::new(function),
        }
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, _interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        Ok((self.function)(&arguments))
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Interpreter {
    /// Invokes an already-evaluated callee.
    ///
    /// `paren` is the call's closing parenthesis and is where callee and
    /// arity errors are reported.
    pub(crate) fn call_value(
        &mut self,
        callee: Value,
        paren: &Token,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let function = match callee {
            Value::Callable(function) => function,
            other => {
                return Err(RuntimeError::call_error(paren, "Can only call functions.")
                    .with_help(format!("the callee is a {}", other.type_name())));
            }
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError::arity_error(paren, function.arity(), arguments.len()));
        }

        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::new("E_STACK", paren, "Stack overflow.")
                .with_help(format!("more than {} calls were active at once", MAX_CALL_DEPTH)));
        }

        trace!(callee = %function, args = arguments.len(), depth = self.depth, "call");

        self.depth += 1;
        let result = function.call(self, arguments);
        self.depth -= 1;

        result
    }
}
