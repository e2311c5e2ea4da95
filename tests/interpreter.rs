mod common;

use common::{Output, output_of, run_capturing};
use matlang::{
    Error, Outcome, RunOptions,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
    parse,
};

/// Runs a program directly, without the checker in front of it.
fn interpret(src: &str) -> (Context, Result<Outcome, RuntimeError>, Output) {
    let program = parse(src).unwrap_or_else(|e| panic!("Failed to parse: {e}\n{src}"));
    let out = Output::default();
    let mut context = Context::with_output(out.clone());
    let result = context.interpret(&program);
    (context, result, out)
}

fn runtime_error(src: &str) -> RuntimeError {
    match run_capturing(src, &RunOptions::default()).0 {
        Err(Error::Runtime(error)) => error,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn subscript_assignment_writes_one_element() {
    assert_eq!(output_of("x = zeros(3); x[1] = 5.0; print(x[1]); print(x);"), "5\n[0, 5, 0]\n");
}

#[test]
fn subscript_assignment_in_memory() {
    let (context, result, _) = interpret("x = zeros(3); x[1] = 5;");
    assert_eq!(result.unwrap(), Outcome::Completed);
    let x = context.memory.lookup("x").unwrap();
    assert_eq!(x, &Value::from(vec![Value::Real(0.0), Value::Integer(5), Value::Real(0.0)]));
}

#[test]
fn matrix_element_assignment() {
    assert_eq!(output_of("m = eye(2); m[0, 1] = 3.0; m[1, 1] *= 4.0; print(m);"), "[[1, 3], [0, 4]]\n");
    assert_eq!(output_of("v = [1, 2]; v[0] += 10; print(v);"), "[11, 2]\n");
}

#[test]
fn assignment_copies_arrays() {
    assert_eq!(output_of("a = [1, 2]; b = a; b[0] = 9; print(a, b);"), "[1, 2] [9, 2]\n");
}

#[test]
fn identity_times_identity() {
    let (context, result, _) = interpret("r = eye(2) * eye(2);");
    result.unwrap();
    assert_eq!(context.memory.lookup("r").unwrap().to_string(), "[[1, 0], [0, 1]]");
}

#[test]
fn out_of_bounds_aborts_the_program() {
    let (result, output) = run_capturing("print(0); v = [1, 2, 3]; x = v[3]; print(1);", &RunOptions::default());
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::IndexOutOfBounds { index: 3,
                                                                         size: 3,
                                                                         line: 1,
                                                                         .. }))));
    assert_eq!(output, "0\n");

    assert!(matches!(runtime_error("v = [1, 2]; v[-1] = 0;"), RuntimeError::IndexOutOfBounds { index: -1, .. }));
    assert!(matches!(runtime_error("m = eye(2); x = m[0, 2];"),
                     RuntimeError::IndexOutOfBounds { axis: 1, .. }));
}

#[test]
fn for_range_excludes_the_end() {
    assert_eq!(output_of("for (i = 0:3) print(i);"), "0\n1\n2\n");
    assert_eq!(output_of("for (i = 3:1) print(i);"), "");
}

#[test]
fn for_range_is_evaluated_once() {
    assert_eq!(output_of("n = 3; for (i = 0:n) { n = 10; print(i); } print(n);"), "0\n1\n2\n10\n");
}

#[test]
fn break_and_continue() {
    let src = "for (i = 0:10) {
                   if (i == 2) continue;
                   if (i == 5) break;
                   print(i);
               }";
    assert_eq!(output_of(src), "0\n1\n3\n4\n");

    let src = "i = 0;
               while (i < 10) {
                   i += 1;
                   if (i < 8) continue;
                   print(i);
                   break;
               }";
    assert_eq!(output_of(src), "8\n");
}

#[test]
fn break_leaves_only_the_innermost_loop() {
    let src = "for (i = 0:3) { for (j = 0:3) { if (j == 1) break; print(i, j); } }";
    assert_eq!(output_of(src), "0 0\n1 0\n2 0\n");
}

#[test]
fn loop_iterator_shadows_and_disappears() {
    assert_eq!(output_of("i = 100; for (i = 0:2) x = i; print(i);"), "100\n");

    let (context, result, _) = interpret("for (k = 0:2) { y = k; }");
    result.unwrap();
    assert_eq!(context.memory.lookup("k"), None);
    assert_eq!(context.memory.lookup("y"), None);
}

#[test]
fn blocks_update_outer_variables() {
    assert_eq!(output_of("s = 0; for (i = 1:5) s += i; print(s);"), "10\n");

    let (context, result, _) = interpret("t = 0; if (1 < 2) { t = 1; u = 2; }");
    result.unwrap();
    assert_eq!(context.memory.lookup("t"), Some(&Value::Integer(1)));
    assert_eq!(context.memory.lookup("u"), None);
    assert_eq!(context.memory.depth(), 1);
}

#[test]
fn if_else() {
    assert_eq!(output_of("x = 3; if (x > 5) print(\"big\"); else print(\"small\");"), "small\n");
    assert_eq!(output_of("x = 7; if (x > 5) print(\"big\"); else print(\"small\");"), "big\n");
}

#[test]
fn return_stops_the_program() {
    let (context, result, out) = interpret("x = 1; return x + 1; print(x);");
    assert_eq!(result.unwrap(), Outcome::Returned(Value::Integer(2)));
    assert_eq!(out.text(), "");
    assert_eq!(context.memory.lookup("x"), Some(&Value::Integer(1)));
}

#[test]
fn return_from_inside_a_loop() {
    let (_, result, out) = interpret("for (i = 0:10) { while (1 < 2) { if (i == 3) return i; break; } print(i); }");
    assert_eq!(result.unwrap(), Outcome::Returned(Value::Integer(3)));
    assert_eq!(out.text(), "0\n1\n2\n");
}

#[test]
fn memory_dump_after_completion() {
    let (result, output) = run_capturing("b = 2; a = [1, 2]; c = \"hi\";", &RunOptions::default());
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert_eq!(output, "global {a: [1, 2], b: 2, c: hi}\n");
}

#[test]
fn no_memory_dump_after_return() {
    let (result, output) = run_capturing("x = 1; return x;", &RunOptions::default());
    assert_eq!(result.unwrap(), Outcome::Returned(Value::Integer(1)));
    assert_eq!(output, "");
}

#[test]
fn check_only_does_not_run() {
    let options = RunOptions { dump_memory: true,
                               check_only:  true, };
    let (result, output) = run_capturing("print(1); x = 2;", &options);
    assert_eq!(result.unwrap(), Outcome::Completed);
    assert_eq!(output, "");
}

#[test]
fn checker_errors_stop_before_running() {
    let (result, output) = run_capturing("print(1); x = y; break;", &RunOptions::default());
    assert!(matches!(result, Err(Error::Check { count: 2 })));
    assert_eq!(result.unwrap_err().to_string(), "Found 2 syntax errors.");
    assert_eq!(output, "");
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("x = 1.0 / 0.0;"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("x = 9223372036854775807;\ny = x + 1;"), RuntimeError::Overflow { line: 2 }));
    assert!(matches!(runtime_error("x = 9223372036854775807 * 2;"), RuntimeError::Overflow { .. }));
}

#[test]
fn failures_the_checker_leaves_to_runtime() {
    let (_, result, _) = interpret("break;");
    assert!(matches!(result, Err(RuntimeError::ControlOutsideLoop { .. })));

    let (_, result, _) = interpret("x = y;");
    assert!(matches!(result, Err(RuntimeError::UnknownVariable { .. })));

    let (_, result, _) = interpret("z = zeros(-1);");
    assert!(matches!(result, Err(RuntimeError::NegativeSize { size: -1, .. })));

    let (_, result, _) = interpret("x = [1, 2] + [1, 2, 3];");
    assert!(matches!(result, Err(RuntimeError::ShapeMismatch { .. })));

    let (_, result, _) = interpret("x = [1, 2, 3; 4, 5, 6] * [1, 2];");
    assert!(matches!(result, Err(RuntimeError::ShapeMismatch { .. })));

    let (_, result, _) = interpret("x = 5; x[0] = 1;");
    assert!(matches!(result, Err(RuntimeError::TooManyIndices { .. })));

    let (_, result, _) = interpret("for (i = 4) x = i;");
    assert!(matches!(result, Err(RuntimeError::TypeError { .. })));

    let (_, result, _) = interpret("x = print(1) + 1;");
    assert!(matches!(result, Err(RuntimeError::MissingValue { .. })));
}

#[test]
fn evaluation_beyond_the_static_rules() {
    // The checker rejects these; the evaluator still gives them a meaning.
    let (_, result, out) = interpret("print(1 + 2 * 3); print(2 * [1, 2]); print([1, 2, 3] * [4, 5, 6]);");
    result.unwrap();
    assert_eq!(out.text(), "7\n[2, 4]\n32\n");

    let (_, result, out) = interpret("print([1, 2, 3] > [0, 2, 4]); m = [1, 2; 3, 4]; m *= 2; print(m);");
    result.unwrap();
    assert_eq!(out.text(), "[true, false, false]\n[[2, 4], [6, 8]]\n");
}

#[test]
fn oversized_builtins_fail_cleanly() {
    let (_, result, _) = interpret("z = zeros(9223372036854775807);");
    assert!(matches!(result,
                     Err(RuntimeError::SizeTooLarge { size: 9_223_372_036_854_775_807, .. })));

    let (_, result, _) = interpret("o = ones(4294967296);");
    assert!(matches!(result, Err(RuntimeError::SizeTooLarge { .. })));
    let (_, result, _) = interpret("e = eye(4294967296);");
    assert!(matches!(result, Err(RuntimeError::SizeTooLarge { .. })));

    let error = runtime_error("print(1);\nz = zeros(9223372036854775807);");
    assert_eq!(error.to_string(),
               "Error on line 2: zeros(9223372036854775807) is too large to allocate");
}

#[test]
fn string_literals_evaluate_without_quotes() {
    let (context, result, out) = interpret("s = \"hi there\"; print(s);");
    result.unwrap();
    assert_eq!(out.text(), "hi there\n");
    assert_eq!(context.memory.lookup("s"), Some(&Value::Str("hi there".into())));
}

#[test]
fn numeric_conditions() {
    assert_eq!(output_of("x = 3; while (x) { print(x); x -= 1; }"), "3\n2\n1\n");
}

#[test]
fn negation() {
    assert_eq!(output_of("v = [1, -2]; print(-v, -2.5);"), "[-1, 2] -2.5\n");
}

#[test]
fn sub_arrays_by_fewer_indices() {
    assert_eq!(output_of("m = [1, 2; 3, 4]; print(m[1], m[1, 0]);"), "[3, 4] 3\n");
}
