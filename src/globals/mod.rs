/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/globals/mod.rs
 * Purpose:  Native function installation.
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

//! Native functions installed into every interpreter's global scope.

pub mod clock;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::interpreter::calls::NativeFunction;
use crate::interpreter::environment::Environment;
use crate::value::Value;

/// Defines every native in `globals`.
pub fn install(globals: &Rc<RefCell<Environment>>) {
    let natives = [NativeFunction::new("clock", 0, clock::clock)];

    let mut scope = globals.borrow_mut();
    for native in natives {
        debug!(name = native.name, "install native");
        scope.define(native.name, Value::Callable(Rc::new(native)));
    }
}
