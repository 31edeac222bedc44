/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/globals/clock.rs
 * Purpose:  The clock() native.
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

use chrono::Utc;

use crate::value::Value;

/// `clock()`: wall-clock milliseconds since the Unix epoch.
pub fn clock(_args: &[Value]) -> Value {
    Value::Number(Utc::now().timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_does_not_go_backwards() {
        let (Value::Number(first), Value::Number(second)) = (clock(&[]), clock(&[])) else {
            panic!("clock must return numbers");
        };
        assert!(second >= first);
    }
}
