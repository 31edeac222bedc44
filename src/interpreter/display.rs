/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/interpreter/display.rs
 * Purpose:  Value formatting for log.
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

use crate::value::Value;

/// ============================================================================
/// value_to_string
/// ============================================================================
/// Converts a TOX runtime `Value` into the text `log` prints.
///
/// Examples:
///   - Nil              → "nil"
///   - Number(3.0)      → "3"
///   - Number(2.5)      → "2.5"
///   - String("cat")    → "cat"
///   - user function    → "<fn name>"
///   - native function  → "<native fn>"
/// ============================================================================
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Nil => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Callable(c) => c.to_string(),
    }
}

/// Shortest round-tripping form, with integral values printed without a
/// fractional part and infinities spelled out.
pub fn number_to_string(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // also covers -0
        return "0".to_string();
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(2.5), "2.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1.0 / 0.0), "Infinity");
        assert_eq!(number_to_string(-1.0 / 0.0), "-Infinity");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }

    #[test]
    fn scalars() {
        assert_eq!(value_to_string(&Value::Nil), "nil");
        assert_eq!(value_to_string(&Value::Bool(true)), "true");
        assert_eq!(value_to_string(&Value::String("hi".into())), "hi");
    }
}
