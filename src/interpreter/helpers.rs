/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/helpers.rs
 * Purpose:  Truthiness and operand checks.
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

use crate::error::RuntimeError;
use crate::lexer::token::Token;
use crate::value::Value;

/// Determines whether a runtime `Value` is considered **truthy** in TOX.
///
/// Only `nil` and `false` are falsy. Everything else, including `0` and the
/// empty string, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Nil => false,
        Value::Bool(b) => *b,
        _ => true,
    }
}

/// Extracts the number from a unary operand or fails at `operator`.
pub fn number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::type_error(operator, "Operand must be a number.")
            .with_help(format!("found a {}", other.type_name()))),
    }
}

/// Extracts both numbers from binary operands or fails at `operator`.
pub fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::type_error(operator, "Operands must be numbers.").with_help(format!(
            "found a {} and a {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_nil_and_false_are_falsy() {
        assert!(!is_truthy(&Value::Nil));
        assert!(!is_truthy(&Value::Bool(false)));
        assert!(is_truthy(&Value::Bool(true)));
        assert!(is_truthy(&Value::Number(0.0)));
        assert!(is_truthy(&Value::String(String::new())));
    }
}
