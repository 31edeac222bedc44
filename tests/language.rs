use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tox::{parse, run_source, scan, CapturedOutput, DiagnosticLog, Interpreter, Outcome, Value, MAX_CALL_DEPTH};

struct Session {
    interpreter: Interpreter,
    output: CapturedOutput,
    log: DiagnosticLog,
}

impl Session {
    fn new() -> Self {
        let output = CapturedOutput::default();
        Self {
            interpreter: Interpreter::new(output.clone()),
            output,
            log: DiagnosticLog::new(),
        }
    }

    fn run(&mut self, source: &str) -> Outcome {
        run_source(source, &mut self.interpreter, &mut self.log)
    }

    fn lines(&self) -> Vec<String> {
        self.output.lines()
    }
}

fn output_of(source: &str) -> Vec<String> {
    let mut session = Session::new();
    let outcome = session.run(source);
    assert_eq!(outcome, Outcome::Ok, "diagnostics: {:?}", session.log.messages());
    session.lines()
}

fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}

#[test]
fn arithmetic_respects_precedence_and_grouping() {
    assert_eq!(
        output_of("log 1 + 2 * 3; log (1 + 2) * 3 - 4; log 10 - 4 - 1; log 7 / 2;"),
        lines(&["7", "5", "5", "3.5"])
    );
}

#[test]
fn comparison_and_equality() {
    assert_eq!(
        output_of("log 1 < 2; log 2 <= 1; log \"a\" == \"a\"; log nil == false; log 1 != \"1\"; log !nil;"),
        lines(&["true", "false", "true", "false", "true", "true"])
    );
}

#[test]
fn logical_operators_return_operands_and_short_circuit() {
    let mut session = Session::new();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    session.interpreter.define_native("sideEffect", 0, move |_| {
        counter.set(counter.get() + 1);
        Value::Bool(true)
    });

    let outcome = session.run(
        "log nil or \"fallback\"; log 0 and \"second\"; log false and sideEffect(); log true or sideEffect();",
    );

    assert_eq!(outcome, Outcome::Ok);
    assert_eq!(session.lines(), lines(&["fallback", "second", "false", "true"]));
    assert_eq!(calls.get(), 0);
}

#[test]
fn strings_concatenate() {
    assert_eq!(
        output_of("let greeting = \"hello\"; log greeting + \", \" + \"world\";"),
        lines(&["hello, world"])
    );
}

#[test]
fn log_nil_prints_nil() {
    assert_eq!(output_of("log nil; let x; log x;"), lines(&["nil", "nil"]));
}

#[test]
fn blocks_shadow_and_restore() {
    let source = r#"
        let a = "outer";
        {
            let a = "inner";
            log a;
            {
                a = "assigned";
                log a;
            }
            log a;
        }
        log a;
    "#;

    assert_eq!(output_of(source), lines(&["inner", "assigned", "assigned", "outer"]));
}

#[test]
fn while_and_for_loops() {
    let source = r#"
        let i = 0;
        while (i < 3) { log i; i = i + 1; }
        for (let j = 10; j < 13; j = j + 1) log j;
    "#;

    assert_eq!(output_of(source), lines(&["0", "1", "2", "10", "11", "12"]));
}

#[test]
fn do_block_is_a_scope() {
    assert_eq!(
        output_of("let v = 1; do { let v = 2; log v; } log v;"),
        lines(&["2", "1"])
    );
}

#[test]
fn closures_keep_independent_state() {
    let source = r#"
        fn makeCounter() {
            let count = 0;
            fn increment() {
                count = count + 1;
                return count;
            }
            return increment;
        }

        let first = makeCounter();
        log first();
        log first();

        let second = makeCounter();
        log second();
        log first();
    "#;

    assert_eq!(output_of(source), lines(&["1", "2", "1", "3"]));
}

#[test]
fn closures_capture_the_declaring_scope() {
    let source = r#"
        let name = "global";
        {
            let name = "block";
            fn show() { log name; }
            show();
        }
    "#;

    assert_eq!(output_of(source), lines(&["block"]));
}

#[test]
fn recursion() {
    let source = r#"
        fn fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        log fib(15);
    "#;

    assert_eq!(output_of(source), lines(&["610"]));
}

#[test]
fn return_unwinds_through_loops_and_branches() {
    let source = r#"
        fn firstOver(limit) {
            let i = 0;
            while (true) {
                if (i > limit) {
                    return i;
                }
                i = i + 1;
            }
        }
        log firstOver(4);
    "#;

    assert_eq!(output_of(source), lines(&["5"]));
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(output_of("fn noop() {} log noop();"), lines(&["nil"]));
}

#[test]
fn undefined_variable_halts_but_session_continues() {
    let mut session = Session::new();

    assert_eq!(session.run("log 1; log missing; log 2;"), Outcome::RuntimeError);
    assert_eq!(session.lines(), lines(&["1"]));
    assert_eq!(
        session.log.messages(),
        lines(&["Undefined variable 'missing'.\n[line 1]"])
    );

    assert_eq!(session.run("log 3;"), Outcome::Ok);
    assert_eq!(session.lines(), lines(&["1", "3"]));
}

#[test]
fn assigning_undeclared_variable_fails() {
    let mut session = Session::new();

    assert_eq!(session.run("ghost = 1;"), Outcome::RuntimeError);
    assert_eq!(session.log.runtime_errors[0].message, "Undefined variable 'ghost'.");
}

#[test]
fn calling_a_non_function_fails() {
    let mut session = Session::new();

    assert_eq!(session.run("let x = 1;\nx();"), Outcome::RuntimeError);
    assert_eq!(session.log.messages(), lines(&["Can only call functions.\n[line 2]"]));
}

#[test]
fn arity_mismatch_fails() {
    let mut session = Session::new();

    assert_eq!(session.run("fn pair(a, b) {} pair(1);"), Outcome::RuntimeError);
    assert_eq!(session.log.messages(), lines(&["Expected 2 arguments but got 1.\n[line 1]"]));
}

#[test]
fn type_errors_name_the_operator_line() {
    let mut session = Session::new();

    assert_eq!(session.run("let a = 1;\n\nlog a - \"b\";"), Outcome::RuntimeError);
    assert_eq!(session.log.messages(), lines(&["Operands must be numbers.\n[line 3]"]));
}

#[test]
fn globals_persist_between_runs() {
    let mut session = Session::new();

    assert_eq!(session.run("let total = 40; fn add(n) { total = total + n; }"), Outcome::Ok);
    assert_eq!(session.run("add(2); log total;"), Outcome::Ok);
    assert_eq!(session.lines(), lines(&["42"]));
}

#[test]
fn one_program_runs_the_same_twice() {
    let source = "let s = \"\"; for (let i = 0; i < 5; i = i + 1) s = s + \"x\"; log s; log 1 / 3;";
    let mut log = DiagnosticLog::new();
    let program = parse(scan(source, &mut log), &mut log);
    assert!(!log.had_error());

    let run = |log: &mut DiagnosticLog| {
        let output = CapturedOutput::default();
        let mut interpreter = Interpreter::new(output.clone());
        interpreter.interpret(&program, log).expect("program runs");
        output.lines()
    };

    let first = run(&mut log);
    let second = run(&mut log);

    assert_eq!(first, lines(&["xxxxx", "0.3333333333333333"]));
    assert_eq!(first, second);
}

#[test]
fn deep_recursion_completes() {
    let source = r#"
        fn count(n) {
            if (n > 0) return count(n - 1);
            return 0;
        }
        log count(500);
    "#;

    assert_eq!(output_of(source), lines(&["0"]));
}

#[test]
fn unbounded_recursion_is_a_runtime_error() {
    let mut session = Session::new();

    assert_eq!(session.run("fn f() { f(); }\nf();"), Outcome::RuntimeError);

    let errors = &session.log.runtime_errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E_STACK");
    assert_eq!(errors[0].to_string(), "Stack overflow.\n[line 1]");
}

#[test]
fn call_depth_is_released_after_overflow() {
    let mut session = Session::new();

    assert_eq!(session.run("fn down(n) { return down(n + 1); } down(0);"), Outcome::RuntimeError);
    assert_eq!(
        session.run(&format!(
            "fn deep(n) {{ if (n > 0) return deep(n - 1); return \"bottom\"; }} log deep({});",
            MAX_CALL_DEPTH - 1
        )),
        Outcome::Ok
    );
    assert_eq!(session.lines(), lines(&["bottom"]));
}

#[test]
fn mutual_recursion_hits_the_same_limit() {
    let source = r#"
        fn ping(n) { return pong(n + 1); }
        fn pong(n) { return ping(n + 1); }
        ping(0);
    "#;
    let mut session = Session::new();

    assert_eq!(session.run(source), Outcome::RuntimeError);
    assert_eq!(session.log.runtime_errors[0].message, "Stack overflow.");
}

#[test]
fn static_errors_are_all_reported_and_nothing_runs() {
    let mut session = Session::new();

    let outcome = session.run("log 1;\nlet = 2;\nlog (3;\nlog 4;");

    assert_eq!(outcome, Outcome::StaticError);
    assert!(session.lines().is_empty());
    assert_eq!(
        session.log.messages(),
        lines(&[
            "[line 2] Error at '=': Expect variable name.",
            "[line 3] Error at ';': Expect ')' after expression.",
        ])
    );
}
