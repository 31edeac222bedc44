/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/output.rs
 * Purpose:  Output sinks for log statements.
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
use std::io::{self, Write};
use std::rc::Rc;

/// Where `log` statements write.
///
/// Each call receives one already-formatted line without its newline.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);
}

impl<F> OutputSink for F
where
    F: FnMut(&str),
{
    fn write_line(&mut self, text: &str) {
        self(text)
    }
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl OutputSink for Stdout {
    fn write_line(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        // A closed stdout (e.g. `tox file x | head`) must not abort the run.
        let _ = writeln!(out, "{}", text);
    }
}

/// Shared in-memory buffer. Clone it before handing one copy to the
/// interpreter; the other copy reads what was written.
#[derive(Debug, Default, Clone)]
pub struct CapturedOutput(Rc<RefCell<Vec<String>>>);

impl CapturedOutput {
    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl OutputSink for CapturedOutput {
    fn write_line(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captured_clones_share_one_buffer() {
        let reader = CapturedOutput::default();
        let mut writer = reader.clone();

        writer.write_line("a");
        writer.write_line("b");

        assert_eq!(reader.lines(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |text: &str| seen.push(text.to_uppercase());
            sink.write_line("nil");
        }
        assert_eq!(seen, vec!["NIL".to_string()]);
    }
}
