use matlang::{
    ast::{Builtin, Expr, LiteralValue, Statement, StatementList},
    check,
    error::TypeError,
    interpreter::{
        checker::{
            core::TypeChecker,
            symbol::{BaseType, Symbol, SymbolTable},
        },
        scope::FrameKind,
    },
    parse,
};

fn errors(src: &str) -> Vec<TypeError> {
    let program = parse(src).unwrap_or_else(|e| panic!("Failed to parse: {e}\n{src}"));
    check(&program)
}

fn assert_clean(src: &str) {
    let errors = errors(src);
    assert!(errors.is_empty(), "unexpected diagnostics for {src}: {errors:?}");
}

fn symbol_of(src: &str, name: &str) -> Option<Symbol> {
    let program = parse(src).unwrap();
    let mut checker = TypeChecker::new();
    checker.check(&program);
    checker.symbols().lookup(name).cloned()
}

#[test]
fn incompatible_matrix_product() {
    let errors = errors("a = [1, 2, 3; 4, 5, 6];
                         b = [1, 2, 3, 4, 5; 1, 2, 3, 4, 5; 1, 2, 3, 4, 5; 1, 2, 3, 4, 5];
                         c = a * b;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], TypeError::IncompatibleShapes { left, right, line: 3 }
                     if left.shape == [2, 3] && right.shape == [4, 5]));
}

#[test]
fn matrix_product_shape() {
    let src = "a = [1, 2, 3; 4, 5, 6]; b = [1, 0, 0, 1; 0, 1, 0, 1; 0, 0, 1, 1]; c = a * b;";
    assert_eq!(symbol_of(src, "c"), Some(Symbol::new(BaseType::Int, vec![2, 4])));

    let src = "m = eye(3); v = [1.0, 2.0, 3.0]; w = m * v; d = v' * v;";
    assert_eq!(symbol_of(src, "w"), Some(Symbol::new(BaseType::Float, vec![3, 1])));
    assert_eq!(symbol_of(src, "d"), Some(Symbol::new(BaseType::Float, vec![1, 1])));

    // Two scalars are `(1,)` by `(1,)`, which multiplies to `(1, 1)`.
    assert_eq!(symbol_of("x = 2 * 3;", "x"), Some(Symbol::new(BaseType::Int, vec![1, 1])));
}

#[test]
fn scalar_times_matrix_is_a_shape_error() {
    let errors = errors("m = [1, 2; 3, 4]; p = 2 * m;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], TypeError::IncompatibleShapes { left, right, line: 1 }
                     if left.shape == [1] && right.shape == [2, 2]));

    assert!(matches!(self::errors("v = [1, 2, 3]; d = v * v;")[..], [TypeError::IncompatibleShapes { .. }]));
}

#[test]
fn product_needs_same_base_type() {
    assert!(matches!(errors("m = eye(2); n = [1, 2; 3, 4]; p = m * n;")[..],
                     [TypeError::MismatchedBaseTypes { .. }]));
}

#[test]
fn control_outside_loop() {
    let errors = errors("break;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "Error on line 1: control statement outside of a loop");

    assert_eq!(self::errors("if (1 < 2) continue;").len(), 1);
    assert_clean("x = 1; while (x < 3) { x += 1; if (x == 2) break; }");
    assert_clean("for (i = 0:3) { if (i == 1) continue; }");
}

#[test]
fn unknown_identifier() {
    let errors = errors("y = x + 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "Error on line 1: unknown identifier x");
}

#[test]
fn errors_do_not_cascade() {
    // `x` is unknown; the sum and the comparison built on it report nothing more.
    assert_eq!(errors("print((x + 1) * 2 < 3);").len(), 1);
    assert_eq!(errors("v = [x, 1, 2];").len(), 1);
}

#[test]
fn checking_continues_after_an_error() {
    let errors = errors("a = q;\nb = 1 + 2.0;\nbreak;");
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(errors.len(), 3, "{lines:?}");
    assert!(matches!(errors[1], TypeError::MismatchedOperands { line: 2, .. }));
}

#[test]
fn element_wise_operands_must_match() {
    assert!(matches!(errors("a = [1, 2]; b = [1, 2, 3]; c = a + b;")[..],
                     [TypeError::MismatchedOperands { .. }]));
    assert!(matches!(errors("a = [1, 2] .* [1.0, 2.0];")[..],
                     [TypeError::MismatchedOperands { .. }]));
    assert_clean("a = [1, 2] .+ [3, 4]; b = a .- a; c = b ./ a;");
}

#[test]
fn reassignment_keeps_the_type() {
    assert!(matches!(errors("x = 1; x = 2.5;")[..], [TypeError::AssignmentMismatch { .. }]));
    assert!(matches!(errors("v = [1, 2]; v = [1, 2, 3];")[..], [TypeError::AssignmentMismatch { .. }]));
    assert_clean("x = 1; x = 2; x += 3; x *= 2;");
}

#[test]
fn compound_assignment_compares_both_sides() {
    // The right-hand side must match the target, whatever the operator would
    // produce.
    let errors = errors("m = [1, 2; 3, 4]; m *= 2;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], TypeError::AssignmentMismatch { name, expected, found, .. }
                     if name == "m" && expected.shape == [2, 2] && found.shape == [1]));

    assert!(matches!(self::errors("v = [1, 2]; v += 1;")[..], [TypeError::AssignmentMismatch { .. }]));
    assert_clean("v = [1, 2]; v += [3, 4]; v[0] -= 1;");
}

#[test]
fn compound_assignment_needs_a_defined_target() {
    assert!(matches!(errors("q += 1;")[..], [TypeError::UnknownIdentifier { .. }]));
}

#[test]
fn logical_operators_need_booleans() {
    assert!(matches!(errors("a = 1 and 2;")[..], [TypeError::ExpectedBool { .. }]));
    assert_clean("a = 1 < 2 and 2 < 3; b = a or a; c = a xor b;");
}

#[test]
fn ordering_compares_scalars_of_any_type() {
    assert_clean("a = 1; b = 2.5; c = a < b;");
    assert_eq!(symbol_of("a = 1; b = 2.5; c = a >= b;", "c"), Some(Symbol::scalar(BaseType::Bool)));

    let errors = errors("a = [1, 2]; b = [3, 4]; c = a < b;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], TypeError::ExpectedScalar { found, .. } if found.shape == [2, 1]));

    let src = "a = [1, 2]; b = [3, 4]; if (a < b) { print(a); }";
    assert!(matches!(self::errors(src)[..], [TypeError::ExpectedScalar { .. }]));
}

#[test]
fn equality_keeps_the_left_symbol() {
    assert_eq!(symbol_of("x = 1 == 1;", "x"), Some(Symbol::scalar(BaseType::Int)));
    assert_eq!(symbol_of("v = [1, 2] != [2, 1];", "v"), Some(Symbol::new(BaseType::Int, vec![2, 1])));
    assert!(matches!(errors("a = 1 == 2.0;")[..], [TypeError::MismatchedOperands { .. }]));
}

#[test]
fn division_needs_scalars() {
    assert!(matches!(errors("v = [1.0, 2.0]; w = v / 2.0;")[..], [TypeError::ExpectedScalar { .. }]));
    assert_eq!(symbol_of("x = 4 / 2;", "x"), Some(Symbol::scalar(BaseType::Bool)));
    assert_clean("x = 7 / 2.5;");
}

#[test]
fn ranges_only_in_for_headers() {
    assert!(matches!(errors("r = 1:3;")[..], [TypeError::RangeOutsideFor { .. }]));
    assert!(matches!(errors("for (i = 3) x = i;")[..], [TypeError::ForExpectsRange { .. }]));
    assert!(matches!(errors("for (i = 0:2.5) x = i;")[..], [TypeError::ExpectedIntegerBound { .. }]));
    assert_clean("n = 4; for (i = 0:n) for (j = i:n) x = i + j;");
}

#[test]
fn loop_iterator_is_scoped_to_the_loop() {
    let errors = errors("for (i = 0:3) x = i; y = i; z = x;");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| matches!(e, TypeError::UnknownIdentifier { .. })));
}

#[test]
fn if_bodies_open_a_scope() {
    assert_eq!(errors("if (1 < 2) { t = 1; } else { e = 2; } u = t + e;").len(), 2);
    assert_clean("t = 0; if (1 < 2) { t = 1; } u = t;");
}

#[test]
fn only_the_global_frame_remains() {
    let program = parse("for (i = 0:2) { while (i < 1) { if (i == 0) { x = 1; } } }").unwrap();
    let mut checker = TypeChecker::new();
    assert_eq!(checker.check(&program), 0);
    assert_eq!(checker.symbols().depth(), 1);
}

#[test]
fn builtin_rules() {
    assert!(matches!(errors("n = 3; z = zeros(n);")[..], [TypeError::BuiltinSize { .. }]));
    assert!(matches!(errors("z = zeros(2.0);")[..], [TypeError::BuiltinSize { .. }]));

    // `zeros` checks as square even though it evaluates to a vector.
    assert_eq!(symbol_of("z = zeros(3);", "z"), Some(Symbol::new(BaseType::Float, vec![3, 3])));
    assert_eq!(symbol_of("o = ones(2);", "o"), Some(Symbol::new(BaseType::Float, vec![2, 2])));
    assert_eq!(symbol_of("i = eye(4);", "i"), Some(Symbol::new(BaseType::Float, vec![4, 4])));
}

#[test]
fn builtin_arity_in_a_built_tree() {
    let size = |n| Expr::Literal { value: LiteralValue::Integer(n),
                                   line:  1, };
    let call = Expr::FunctionCall { function:  Builtin::Eye,
                                    arguments: vec![size(2), size(3)],
                                    line:      1, };
    let program = StatementList { statements: vec![Statement::Expression { expr: call, line: 1 }] };

    assert!(matches!(check(&program)[..], [TypeError::BuiltinArity { found: 2, .. }]));
}

#[test]
fn print_has_no_value() {
    assert!(matches!(errors("x = print(1);")[..], [TypeError::VoidValue { .. }]));
    assert_clean("print(1, \"two\", [3.0]);");
}

#[test]
fn literal_consistency() {
    assert!(matches!(errors("v = [1, 2.0];")[..], [TypeError::InconsistentElements { .. }]));
    assert_eq!(symbol_of("v = [1, 2, 3];", "v"), Some(Symbol::new(BaseType::Int, vec![3, 1])));
    assert!(matches!(errors("m = [1, 2; 3];")[..], [TypeError::InconsistentElements { .. }]));
    assert!(matches!(errors("v = [1, 2]; m = [v, 3; 4, 5];")[..], [TypeError::NonScalarMatrixElement { .. }]));
    assert_eq!(symbol_of("v = [];", "v"), Some(Symbol::new(BaseType::Float, vec![0])));
}

#[test]
fn subscripts() {
    assert_clean("z = zeros(3); z[1] = 5.0; m = eye(2); m[0, 1] = 2.0; r = m[1]; r += 1.0;");
    assert_eq!(symbol_of("m = eye(3); r = m[1];", "r"), Some(Symbol::scalar(BaseType::Float)));
    assert_eq!(symbol_of("m = eye(3); e = m[1, 2];", "e"), Some(Symbol::scalar(BaseType::Float)));
    assert_eq!(symbol_of("v = [1, 2]; x = v[0.5];", "x"), Some(Symbol::scalar(BaseType::Int)));

    assert!(matches!(errors("z = zeros(3); z[1] = 5;")[..], [TypeError::AssignmentMismatch { .. }]));
    assert!(matches!(errors("v = [1, 2]; x = v[q];")[..], [TypeError::UnknownIdentifier { .. }]));
    assert!(matches!(errors("x = q[0];")[..], [TypeError::UnknownIdentifier { .. }]));
    assert!(matches!(errors("x = [1, 2]'[0];")[..], [TypeError::InvalidSubscriptTarget { .. }]));
}

#[test]
fn invalid_assignment_target() {
    assert!(matches!(errors("1 = 2;")[..], [TypeError::InvalidAssignmentTarget { line: 1 }]));
}

#[test]
fn transpose_reverses_the_shape() {
    assert_eq!(symbol_of("m = [1, 2, 3; 4, 5, 6]'; ", "m"), Some(Symbol::new(BaseType::Int, vec![3, 2])));
    assert_eq!(symbol_of("v = [1, 2, 3]';", "v"), Some(Symbol::new(BaseType::Int, vec![1, 3])));
}

#[test]
fn error_count_matches_diagnostics() {
    let program = parse("a = b; c = [1] + [1, 2]; break; r = 0:1;").unwrap();
    let mut checker = TypeChecker::new();
    let count = checker.check(&program);
    assert_eq!(count, 4);
    assert_eq!(count, checker.errors().len());
}

#[test]
fn a_frame_refuses_a_second_definition() {
    let mut symbols = SymbolTable::new();
    assert_eq!(symbols.define("x", Symbol::scalar(BaseType::Int)), Ok(()));
    assert_eq!(symbols.define("x", Symbol::scalar(BaseType::Float)),
               Err(Symbol::scalar(BaseType::Float)));

    // A nested frame may bind the same name again.
    symbols.push(FrameKind::For);
    assert_eq!(symbols.define("x", Symbol::scalar(BaseType::Float)), Ok(()));

    let error = TypeError::Redefinition { name: "x".to_string(),
                                          line: 3, };
    assert_eq!(error.to_string(), "Error on line 3: x is already defined in this scope");
}
