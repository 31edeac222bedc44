/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/value.rs
 * Purpose:  Runtime values and equality.
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

use std::fmt;
use std::rc::Rc;

use crate::interpreter::calls::Callable;
use crate::interpreter::display::value_to_string;
use crate::lexer::token::Literal;

/// TOX runtime value representation.
///
/// This is the core type that flows through the interpreter.
/// Every expression ultimately evaluates to one of these.
#[derive(Clone)]
pub enum Value {
    // Primitive scalars
    Nil,
    Bool(bool),
    Number(f64),
    String(String),

    // User function or host-provided native. Shared: copying a function
    // value never copies its closure.
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// Name of the value's kind, used in error help notes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Callable(_) => "function",
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::String(s.clone()),
        }
    }
}

/// Plain value equality.
///
/// `nil` equals only `nil`, values of different kinds are never equal, and
/// two callables are equal only when they are the same function object.
/// Numbers follow IEEE rules, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Callable(c) => write!(f, "Callable({})", c),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nil_equals_only_nil() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Nil, Value::Number(0.0));
        assert_ne!(Value::String(String::new()), Value::Nil);
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert_ne!(Value::Number(1.0), Value::String("1".to_string()));
        assert_ne!(Value::Bool(true), Value::Number(1.0));
    }

    #[test]
    fn scalars_compare_by_value() {
        assert_eq!(Value::Number(2.5), Value::Number(2.5));
        assert_eq!(Value::String("a".to_string()), Value::String("a".to_string()));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn literals_convert() {
        assert_eq!(Value::from(&Literal::Number(3.0)), Value::Number(3.0));
        assert_eq!(Value::from(&Literal::Nil), Value::Nil);
        assert_eq!(Value::from(&Literal::String("s".into())), Value::String("s".into()));
    }
}
