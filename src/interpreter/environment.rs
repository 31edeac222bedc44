/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/environment.rs
 * Purpose:  Lexical scope chain.
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
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::lexer::token::Token;
use crate::value::Value;

/// One lexical scope: a name → value map plus the enclosing scope.
///
/// Scopes are shared through `Rc<RefCell<_>>` because a closure keeps its
/// defining scope alive after the block that created it has exited.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new(parent: Option<Rc<RefCell<Environment>>>) -> Self {
        Self {
            values: HashMap::new(),
            parent,
        }
    }

    /// A fresh scope enclosed by `parent`, ready to share.
    pub fn child_of(parent: &Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::new(Some(parent.clone()))))
    }

    /// Binds `name` in this scope, replacing any existing binding here.
    /// Redefinition is allowed.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up in this scope, then outward.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => Err(undefined(name)),
        }
    }

    /// Rebinds the nearest existing `name`. Never creates a binding.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(undefined(name)),
        }
    }

    /// Untokenized lookup for host code.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        self.parent.as_ref().and_then(|p| p.borrow().lookup(name))
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::reference_error(name, format!("Undefined variable '{}'.", name.lexeme))
}
