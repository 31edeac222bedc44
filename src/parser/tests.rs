/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/tests.rs
 * Purpose:  Parser unit tests.
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

use pretty_assertions::assert_eq;

use crate::ast::Stmt;
use crate::diagnostics::DiagnosticLog;
use crate::lexer::scan;
use crate::parser::{parse, MAX_NESTING};

fn parse_source(source: &str) -> (Vec<Stmt>, DiagnosticLog) {
    let mut log = DiagnosticLog::new();
    let tokens = scan(source, &mut log);
    let statements = parse(tokens, &mut log);
    (statements, log)
}

/// Parses a program that must be error free and renders every statement.
fn render(source: &str) -> Vec<String> {
    let (statements, log) = parse_source(source);
    assert_eq!(log.messages(), Vec::<String>::new());
    statements.iter().map(|s| s.to_string()).collect()
}

fn render_one(source: &str) -> String {
    let mut rendered = render(source);
    assert_eq!(rendered.len(), 1);
    rendered.remove(0)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render_one("1 + 2 * 3;"), "(; (+ 1 (* 2 3)))");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(render_one("10 - 2 - 3;"), "(; (- (- 10 2) 3))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(render_one("(1 + 2) * 3;"), "(; (* (group (+ 1 2)) 3))");
}

#[test]
fn full_precedence_ladder() {
    assert_eq!(render_one("a or b and c;"), "(; (or a (and b c)))");
    assert_eq!(render_one("1 < 2 == true;"), "(; (== (< 1 2) true))");
    assert_eq!(render_one("!-x;"), "(; (! (- x)))");
    assert_eq!(render_one("-a * b;"), "(; (* (- a) b))");
    assert_eq!(render_one("a == b and c != d;"), "(; (and (== a b) (!= c d)))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(render_one("a = b = 1;"), "(; (= a (= b 1)))");
}

#[test]
fn calls_chain() {
    assert_eq!(render_one("f(1)(2, 3);"), "(; (call (call f 1) 2 3))");
    assert_eq!(render_one("clock();"), "(; (call clock))");
}

#[test]
fn literals() {
    assert_eq!(render_one("log \"hi\";"), "(log \"hi\")");
    assert_eq!(render_one("log nil;"), "(log nil)");
    assert_eq!(render_one("log 2.5;"), "(log 2.5)");
}

#[test]
fn declarations() {
    assert_eq!(render_one("let x;"), "(let x)");
    assert_eq!(render_one("let x = 1;"), "(let x 1)");
    assert_eq!(
        render_one("fn add(a, b) { return a + b; }"),
        "(fn add (a b) (return (+ a b)))"
    );
    assert_eq!(render_one("fn f() { return; }"), "(fn f () (return))");
}

#[test]
fn control_flow() {
    assert_eq!(
        render_one("if (a) log 1; else log 2;"),
        "(if a (log 1) (log 2))"
    );
    assert_eq!(
        render_one("if (a) if (b) log 1; else log 2;"),
        "(if a (if b (log 1) (log 2)))"
    );
    assert_eq!(render_one("while (x) { x = x - 1; }"), "(while x (block (; (= x (- x 1)))))");
    assert_eq!(render_one("do { log 1; }"), "(block (log 1))");
}

#[test]
fn for_desugars_into_while() {
    assert_eq!(
        render_one("for (let i = 0; i < 3; i = i + 1) log i;"),
        "(block (let i 0) (while (< i 3) (block (log i) (; (= i (+ i 1))))))"
    );
    assert_eq!(render_one("for (;;) log 1;"), "(while true (log 1))");
    assert_eq!(
        render_one("for (i = 0; i < 1;) log i;"),
        "(block (; (= i 0)) (while (< i 1) (log i)))"
    );
}

#[test]
fn statement_count_matches_source() {
    let (statements, log) = parse_source("let a = 1; log a; fn f() {} f(); { log 2; }");
    assert!(!log.had_error());
    assert_eq!(statements.len(), 5);
}

#[test]
fn invalid_assignment_target() {
    let (statements, log) = parse_source("1 = 2;\nlog 3;");

    assert_eq!(
        log.messages(),
        vec!["[line 1] Error at '=': Invalid assignment target.".to_string()]
    );
    assert_eq!(statements.len(), 1);
}

#[test]
fn two_malformed_statements_report_two_errors() {
    let (statements, log) = parse_source("let = 1; log ;");

    assert_eq!(
        log.messages(),
        vec![
            "[line 1] Error at '=': Expect variable name.".to_string(),
            "[line 1] Error at ';': Expect expression.".to_string(),
        ]
    );
    assert!(statements.is_empty());
}

#[test]
fn recovery_keeps_valid_neighbours() {
    let (statements, log) = parse_source("log 1;\nlet x 2;\nlog 3;");

    assert_eq!(
        log.messages(),
        vec!["[line 2] Error at '2': Expect ';' after variable declaration.".to_string()]
    );
    let rendered: Vec<String> = statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["(log 1)", "(log 3)"]);
}

#[test]
fn recovery_stops_at_statement_keyword() {
    let (statements, log) = parse_source("log (1 + ;\nif (true) log 2;");

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].to_string(), "(if true (log 2))");
}

#[test]
fn errors_inside_blocks_do_not_drop_the_block() {
    let (statements, log) = parse_source("{ log ; log 1; }");

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].to_string(), "(block (log 1))");
}

#[test]
fn error_at_end_of_input() {
    let (_, log) = parse_source("log 1");
    assert_eq!(
        log.messages(),
        vec!["[line 1] Error at end: Expect ';' after value.".to_string()]
    );
}

#[test]
fn this_is_reserved() {
    let (_, log) = parse_source("log this;");
    assert_eq!(
        log.messages(),
        vec!["[line 1] Error at 'this': Expect expression.".to_string()]
    );
}

#[test]
fn too_many_arguments_is_reported_but_not_fatal() {
    let args = vec!["1"; 256].join(", ");
    let (statements, log) = parse_source(&format!("f({});", args));

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(log.static_errors[0].message, "Can't have more than 255 arguments.");
    assert_eq!(statements.len(), 1);
}

#[test]
fn exactly_255_arguments_is_fine() {
    let args = vec!["1"; 255].join(", ");
    let (statements, log) = parse_source(&format!("f({});", args));

    assert!(!log.had_error());
    assert_eq!(statements.len(), 1);
}

#[test]
fn too_many_parameters_is_reported_but_not_fatal() {
    let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
    let (statements, log) = parse_source(&format!("fn f({}) {{}}", params.join(", ")));

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(log.static_errors[0].message, "Can't have more than 255 parameters.");
    assert_eq!(statements.len(), 1);
}

#[test]
fn missing_eof_is_tolerated() {
    let mut log = DiagnosticLog::new();
    let mut tokens = scan("log 1;", &mut log);
    tokens.pop();

    let statements = parse(tokens, &mut log);
    assert_eq!(statements.len(), 1);
    assert!(!log.had_error());
}

#[test]
fn invalid_assignment_target_carries_help() {
    let (_, log) = parse_source("1 + 2 = 3;");

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(
        log.static_errors[0].help.as_deref(),
        Some("only a variable name can appear left of '='")
    );
}

#[test]
fn missing_semicolon_names_the_previous_token() {
    let (_, log) = parse_source("let a = 1\nlog a;");

    assert_eq!(log.messages(), vec!["[line 2] Error at 'log': Expect ';' after variable declaration.".to_string()]);
    assert_eq!(log.static_errors[0].help.as_deref(), Some("add ';' after '1'"));
}

#[test]
fn deep_grouping_is_reported_not_fatal() {
    let depth = MAX_NESTING + 50;
    let source = format!("log {}1{}; log 2;", "(".repeat(depth), ")".repeat(depth));
    let (statements, log) = parse_source(&source);

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(log.static_errors[0].message, "Too much nesting.");
    assert_eq!(statements.len(), 1);
}

#[test]
fn deep_unary_chain_is_reported() {
    let source = format!("log {}true;", "!".repeat(MAX_NESTING * 4));
    let (statements, log) = parse_source(&source);

    assert_eq!(log.static_errors.len(), 1);
    assert_eq!(log.static_errors[0].message, "Too much nesting.");
    assert!(statements.is_empty());
}

#[test]
fn moderate_nesting_parses() {
    let depth = 100;
    let source = format!("log {}1{};", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(render(&source).len(), 1);
}
