/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/stack.rs
 * Purpose:  Stack growth for deeply recursive parsing and evaluation.
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

//! Keeps deep recursion off the end of the native stack.
//!
//! The parser and the evaluator recurse once per nesting level of the
//! program. Wrapping each recursive entry point in [`ensure_sufficient_stack`]
//! moves execution onto a freshly allocated segment when the current one is
//! nearly used up, so recursion depth is bounded by the language limits
//! (`MAX_CALL_DEPTH`, `MAX_NESTING`) instead of by the thread's stack size.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}
