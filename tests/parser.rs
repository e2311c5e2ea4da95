use matlang::{
    Error,
    ast::{
        AssignOperator, BinaryOperator, Builtin, Expr, LValue, LiteralValue, Statement, StatementList,
        UnaryOperator,
    },
    error::ParseError,
    parse,
};

fn program(src: &str) -> StatementList {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse: {e}\n{src}"))
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(Error::Parse(error)) => error,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

fn expression(src: &str) -> Expr {
    match program(src).statements.into_iter().next() {
        Some(Statement::Expression { expr, .. }) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn int(value: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(value),
                    line:  1, }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier { name: name.to_string(),
                       line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn unary(op: UnaryOperator, operand: Expr) -> Expr {
    Expr::UnaryOp { op,
                    operand: Box::new(operand),
                    line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expression("1 + 2 * 3;"),
               binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn additive_is_left_associative() {
    assert_eq!(expression("a - b + c;"),
               binary(binary(ident("a"), BinaryOperator::Sub, ident("b")), BinaryOperator::Add, ident("c")));
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(expression("a + 1 < b;"),
               binary(binary(ident("a"), BinaryOperator::Add, int(1)), BinaryOperator::Less, ident("b")));
}

#[test]
fn logical_binds_looser_than_comparison() {
    assert_eq!(expression("a < b and c;"),
               binary(binary(ident("a"), BinaryOperator::Less, ident("b")), BinaryOperator::And, ident("c")));
}

#[test]
fn transpose_binds_tighter_than_negation() {
    assert_eq!(expression("-a';"),
               unary(UnaryOperator::Negate, unary(UnaryOperator::Transpose, ident("a"))));
}

#[test]
fn dotted_operators() {
    assert_eq!(expression("a .* b ./ c;"),
               binary(binary(ident("a"), BinaryOperator::DotMul, ident("b")), BinaryOperator::DotDiv, ident("c")));
}

#[test]
fn range_does_not_chain() {
    assert_eq!(parse_error("for (i = 1:2:3) x = 1;"),
               ParseError::UnexpectedToken { token: "RANGE".to_string(),
                                             line:  1, });
}

#[test]
fn dangling_else_binds_to_inner_if() {
    let list = program("if (a) if (b) x = 1; else x = 2;");
    let Statement::If { block, else_block, .. } = &list.statements[0] else {
        panic!("expected an if statement");
    };
    assert!(else_block.is_none());
    assert!(matches!(&block.statements[0], Statement::If { else_block: Some(_), .. }));
}

#[test]
fn bodies_are_statement_lists() {
    let list = program("while (a) x = 1; while (a) { x = 1; y = 2; } for (i = 0:3) {}");
    let lengths: Vec<usize> = list.statements
                                  .iter()
                                  .map(|statement| match statement {
                                      Statement::While { block, .. } | Statement::For { block, .. } => block.len(),
                                      other => panic!("unexpected statement {other:?}"),
                                  })
                                  .collect();
    assert_eq!(lengths, [1, 2, 0]);
}

#[test]
fn nested_braces_are_lists() {
    let list = program("{ a = 1; { b = 2; } }");
    let Statement::List(outer) = &list.statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(outer.len(), 2);
    assert!(matches!(outer.statements[1], Statement::List(_)));
}

#[test]
fn matrix_literal_forms() {
    for src in ["[1, 2; 3, 4];", "[[1, 2], [3, 4]];"] {
        let Expr::Matrix { rows, .. } = expression(src) else {
            panic!("expected a matrix literal for {src}");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.elements.len() == 2));
        assert_eq!(rows[1].elements, [int(3), int(4)]);
    }
}

#[test]
fn vector_literals() {
    let Expr::Vector(vector) = expression("[1, a, 2.5];") else {
        panic!("expected a vector literal");
    };
    assert_eq!(vector.elements.len(), 3);

    let Expr::Vector(empty) = expression("[];") else {
        panic!("expected an empty vector");
    };
    assert!(empty.elements.is_empty());
}

#[test]
fn subscript_expression() {
    let Expr::BinaryOp { left,
                         op: BinaryOperator::Subscript,
                         right,
                         .. } = expression("m[1, j];")
    else {
        panic!("expected a subscript");
    };
    assert_eq!(*left, ident("m"));
    let Expr::Vector(indices) = *right else {
        panic!("indices must be a vector");
    };
    assert_eq!(indices.elements, [int(1), ident("j")]);
}

#[test]
fn empty_subscript_is_rejected() {
    assert_eq!(parse_error("m[];"),
               ParseError::UnexpectedToken { token: "RBRACKET".to_string(),
                                             line:  1, });
}

#[test]
fn assignment_targets() {
    let list = program("x = 1; m[0] += 2; 1 = x;");

    assert!(matches!(&list.statements[0],
                     Statement::Assign { target: LValue::Identifier { name, .. },
                                         op: AssignOperator::Assign,
                                         .. } if name == "x"));
    assert!(matches!(&list.statements[1],
                     Statement::Assign { target: LValue::Subscript { name, indices, .. },
                                         op: AssignOperator::AddAssign,
                                         .. } if name == "m" && indices.elements.len() == 1));
    assert!(matches!(&list.statements[2],
                     Statement::Assign { target: LValue::Invalid(_),
                                         .. }));
}

#[test]
fn chained_assignment_is_rejected() {
    assert_eq!(parse_error("a = b = 1;"),
               ParseError::UnexpectedToken { token: "ASSIGN".to_string(),
                                             line:  1, });
}

#[test]
fn builtin_calls() {
    let Expr::FunctionCall { function,
                             arguments,
                             .. } = expression("print(1, \"two\", x);")
    else {
        panic!("expected a call");
    };
    assert_eq!(function, Builtin::Print);
    assert_eq!(arguments[1],
               Expr::StringLiteral { value: "\"two\"".to_string(),
                                     line:  1, });

    assert_eq!(expression("zeros(n + 1);"),
               Expr::FunctionCall { function:  Builtin::Zeros,
                                    arguments: vec![binary(ident("n"), BinaryOperator::Add, int(1))],
                                    line:      1, });
}

#[test]
fn sized_builtins_take_exactly_one_argument() {
    assert_eq!(parse_error("eye(1, 2);"),
               ParseError::UnexpectedToken { token: "COMMA".to_string(),
                                             line:  1, });
    assert_eq!(parse_error("ones();"),
               ParseError::UnexpectedToken { token: "RPAR".to_string(),
                                             line:  1, });
    assert_eq!(parse_error("zeros 3;"),
               ParseError::UnexpectedToken { token: "INTEGER".to_string(),
                                             line:  1, });
}

#[test]
fn control_statements() {
    let list = program("while (1) { break; continue; return 3; }");
    let Statement::While { block, .. } = &list.statements[0] else {
        panic!("expected a while loop");
    };
    assert!(matches!(block.statements[..],
                     [Statement::Control { .. }, Statement::Control { .. }, Statement::Return { .. }]));
}

#[test]
fn errors_report_token_kind_and_line() {
    let error = parse_error("x = 1;\ny = );");
    assert_eq!(error.to_string(), "unexpected token RPAR at line 2");
}

#[test]
fn missing_semicolon_at_end_of_file() {
    let error = parse_error("x = 1");
    assert_eq!(error, ParseError::UnexpectedEndOfInput);
    assert_eq!(error.to_string(), "end of file reached");

    assert_eq!(parse_error("if (x) {"), ParseError::UnexpectedEndOfInput);
}

#[test]
fn empty_program() {
    assert!(program("").is_empty());
    assert!(program("# nothing here\n").is_empty());
}

#[test]
fn lines_are_recorded() {
    let list = program("a = 1;\n\nwhile (a < 3)\n  a += 1;");
    assert!(matches!(list.statements[1], Statement::While { line: 3, .. }));
}

#[test]
fn parsing_is_deterministic() {
    let src = "A = [1, 2; 3, 4]; for (i = 0:2) { A[i, i] = 0; } print(A');";
    assert_eq!(program(src), program(src));
}
