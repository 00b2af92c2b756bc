use cxcalc::{
    error::{Diagnostic, Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        session::{Outcome, Session},
        value::{complex::ComplexNumber, core::Value},
    },
    parse_and_evaluate, read_source_line, run_script,
};

const TOLERANCE: f64 = 1e-12;

fn assert_success(src: &str) -> Session {
    let mut session = Session::new();
    for report in run_script(src, &mut session) {
        if let Err(e) = report.result {
            panic!("Line {} of script failed: {e}\n{src}", report.line);
        }
        assert!(report.diagnostics.is_empty(),
                "Line {} raised diagnostics: {:?}",
                report.line,
                report.diagnostics);
    }
    session
}

fn variable(session: &Session, name: &str) -> Value {
    session.environment()
           .get(name)
           .unwrap_or_else(|| panic!("variable '{name}' is not set"))
}

fn complex(real: f64, imaginary: f64) -> Value {
    Value::Complex(ComplexNumber::new(real, imaginary))
}

#[test]
fn assignment_and_basic_arithmetic() {
    let session = assert_success("a = 1 + 2\nb = 7 * 9\nc = 8 - 5\nd = 10 / 4");
    assert_eq!(variable(&session, "a"), Value::Real(3.0));
    assert_eq!(variable(&session, "b"), Value::Real(63.0));
    assert_eq!(variable(&session, "c"), Value::Real(3.0));
    assert_eq!(variable(&session, "d"), Value::Real(2.5));
}

#[test]
fn real_division_matches_float_division() {
    let pairs = [(7.0, 2.0), (1.0, 3.0), (-3.5, 0.25), (10.0, -4.0), (0.0, 9.0), (1e10, 7.0)];

    for (a, b) in pairs {
        let mut env = Environment::new();
        let mut diagnostics = Vec::new();
        let line = format!("x = {a} / {b}");

        assert_eq!(parse_and_evaluate(&line, &mut env, &mut diagnostics), Ok(None));
        assert_eq!(env.get("x"), Some(Value::Real(a / b)), "{line}");
    }
}

#[test]
fn precedence_and_grouping() {
    let session = assert_success("x = 2 + 3 * 4\ny = (2 + 3) * 4\nz = 2 * 3 + 4");
    assert_eq!(variable(&session, "x"), Value::Real(14.0));
    assert_eq!(variable(&session, "y"), Value::Real(20.0));
    assert_eq!(variable(&session, "z"), Value::Real(10.0));
}

#[test]
fn binary_operators_are_left_associative() {
    let session = assert_success("a = 2 - 3 - 4\nb = 8 / 4 / 2\nc = 1 - 2 + 3");
    assert_eq!(variable(&session, "a"), Value::Real(-5.0));
    assert_eq!(variable(&session, "b"), Value::Real(1.0));
    assert_eq!(variable(&session, "c"), Value::Real(2.0));
}

#[test]
fn unary_minus() {
    let session = assert_success("a = -(-5)\nb = - -2\nc = -2 * 3\nd = 4 - -1\ne = -(2 + 3)");
    assert_eq!(variable(&session, "a"), Value::Real(5.0));
    assert_eq!(variable(&session, "b"), Value::Real(2.0));
    assert_eq!(variable(&session, "c"), Value::Real(-6.0));
    assert_eq!(variable(&session, "d"), Value::Real(5.0));
    assert_eq!(variable(&session, "e"), Value::Real(-5.0));
}

#[test]
fn square_roots() {
    let session = assert_success("a = sqrt(16)\nb = sqrt(-4)\nc = sqrt(0)\nd = sqrt(-7+24j)");
    assert_eq!(variable(&session, "a"), Value::Real(4.0));
    assert_eq!(variable(&session, "b"), complex(0.0, 2.0));
    assert_eq!(variable(&session, "c"), Value::Real(0.0));
    assert!(variable(&session, "d").approx_eq(&complex(3.0, 4.0), TOLERANCE));
}

#[test]
fn complex_literals_and_promotion() {
    let session = assert_success(
                                 "a = 3+4j\nb = -1.5-2j\nc = 2 * (1+1j)\nd = (1+1j) - (0+1j)\ne = a + 1",
    );
    assert_eq!(variable(&session, "a"), complex(3.0, 4.0));
    assert_eq!(variable(&session, "b"), complex(-1.5, -2.0));
    assert_eq!(variable(&session, "c"), complex(2.0, 2.0));
    // Complex arithmetic stays complex even when the imaginary part cancels.
    assert_eq!(variable(&session, "d"), complex(1.0, 0.0));
    assert_eq!(variable(&session, "e"), complex(4.0, 4.0));
}

#[test]
fn negating_complex_values() {
    let session = assert_success("a = -(3+4j)\nb = - 1+2j");
    assert_eq!(variable(&session, "a"), complex(-3.0, -4.0));
    assert_eq!(variable(&session, "b"), complex(-1.0, -2.0));
}

#[test]
fn complex_round_trip_through_sqrt() {
    let mut session = assert_success("a = 3+4j");
    let printed = session.execute("print(sqrt(a*a))")
                         .expect("print should succeed");

    let Outcome::Printed(value) = printed else {
        panic!("expected a printed value, got {printed:?}");
    };
    assert!(value.is_complex());
    assert!(value.approx_eq(&variable(&session, "a"), TOLERANCE));
}

#[test]
fn sqrt_keeps_the_small_part_of_lopsided_values() {
    let session = assert_success("a = sqrt(100000000+1j)\nb = sqrt(-100000000+1j)\nc = sqrt(-100000000-1j)");

    assert!(variable(&session, "a").approx_eq(&complex(1e4, 5e-5), 1e-15));
    assert!(variable(&session, "b").approx_eq(&complex(5e-5, 1e4), 1e-15));
    assert!(variable(&session, "c").approx_eq(&complex(5e-5, -1e4), 1e-15));
}

#[test]
fn lopsided_round_trip_through_sqrt() {
    let mut session = assert_success("a = 10000+0.0001j");
    let value = session.execute("print(sqrt(a*a))")
                       .expect("print should succeed")
                       .printed()
                       .expect("print should produce a value");

    let Value::Complex(root) = value else {
        panic!("expected a complex value, got {value:?}");
    };
    assert!((root.real - 1e4).abs() <= 1e-9);
    assert!((root.imaginary - 1e-4).abs() <= 1e-15, "{root}");
}

#[test]
fn quadratic_with_complex_roots() {
    let session = assert_success(
                                 "a = 1\nb = 2\nc = 5\nx = (-b + sqrt((b * b) - 4 * a * c)) / (2 * a)\ny = (-b - sqrt((b * b) - 4 * a * c)) / (2 * a)",
    );
    assert!(variable(&session, "x").approx_eq(&complex(-1.0, 2.0), TOLERANCE));
    assert!(variable(&session, "y").approx_eq(&complex(-1.0, -2.0), TOLERANCE));
}

#[test]
fn undefined_variable_is_zero_and_reported() {
    let mut env = Environment::new();
    let mut diagnostics = Vec::new();

    assert_eq!(parse_and_evaluate("y = x + 1", &mut env, &mut diagnostics), Ok(None));
    assert_eq!(env.get("y"), Some(Value::Real(1.0)));
    assert_eq!(diagnostics,
               vec![Diagnostic::UndefinedVariable { name: "x".to_string() }]);
}

#[test]
fn division_by_zero_is_error_and_leaves_target_unset() {
    let mut env = Environment::new();
    let mut diagnostics = Vec::new();

    assert_eq!(parse_and_evaluate("x = 1 / 0", &mut env, &mut diagnostics),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(env.get("x"), None);

    assert_eq!(parse_and_evaluate("x = (1+2j) / (0+0j)", &mut env, &mut diagnostics),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(parse_and_evaluate("print(1 / (2 - 2))", &mut env, &mut diagnostics),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(env.is_empty());
}

#[test]
fn failed_assignment_keeps_previous_value() {
    let mut session = assert_success("x = 5");
    assert!(session.execute("x = x / 0").is_err());
    assert_eq!(variable(&session, "x"), Value::Real(5.0));
}

#[test]
fn last_write_wins() {
    let session = assert_success("x = 1\nx = x + 1\nx = x * 10");
    assert_eq!(variable(&session, "x"), Value::Real(20.0));
    assert_eq!(session.environment().len(), 1);
}

#[test]
fn print_returns_value_and_assignment_returns_none() {
    let mut env = Environment::new();
    let mut diagnostics = Vec::new();

    assert_eq!(parse_and_evaluate("x = 2", &mut env, &mut diagnostics), Ok(None));
    assert_eq!(parse_and_evaluate("print(x * x)", &mut env, &mut diagnostics),
               Ok(Some(Value::Real(4.0))));
    assert_eq!(parse_and_evaluate("   ", &mut env, &mut diagnostics), Ok(None));
    assert!(diagnostics.is_empty());
}

#[test]
fn bare_expression_is_syntax_error() {
    let mut session = Session::new();
    assert_eq!(session.execute("2 + 3"),
               Err(Error::Parse(ParseError::UnexpectedToken { kind:   "NUM",
                                                              value:  "2".to_string(),
                                                              column: 0, })));
}

#[test]
fn syntax_errors_report_token_or_end_of_input() {
    let mut session = Session::new();

    assert_eq!(session.execute("x = "),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert_eq!(session.execute("print(1"),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert_eq!(session.execute("x = 1 )"),
               Err(Error::Parse(ParseError::UnexpectedToken { kind:   "RPAREN",
                                                              value:  ")".to_string(),
                                                              column: 6, })));
    assert_eq!(session.execute("x = * 2"),
               Err(Error::Parse(ParseError::UnexpectedToken { kind:   "TIMES",
                                                              value:  "*".to_string(),
                                                              column: 4, })));
    assert!(session.environment().is_empty());
}

#[test]
fn errors_do_not_stop_the_session() {
    let mut session = Session::new();
    let reports = run_script("a = 1\nb = (\nc = a / 0\nd = a + 1", &mut session);

    assert!(reports[0].result.is_ok());
    assert!(matches!(reports[1].result, Err(Error::Parse(_))));
    assert!(matches!(reports[2].result, Err(Error::Runtime(_))));
    assert_eq!(reports[3].result,
               Ok(Outcome::Assigned { name:  "d".to_string(),
                                      value: Value::Real(2.0), }));
}

#[test]
fn unknown_characters_are_skipped_and_reported() {
    let mut session = Session::new();
    let outcome = session.execute("x = 1 $ + 2 ?").expect("line should still run");

    assert_eq!(outcome,
               Outcome::Assigned { name:  "x".to_string(),
                                   value: Value::Real(3.0), });

    let diagnostics = session.take_diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(matches!(&diagnostics[0], Diagnostic::Lexical(e) if e.lexeme == "$" && e.column == 6));
    assert!(matches!(&diagnostics[1], Diagnostic::Lexical(e) if e.lexeme == "?"));
    assert!(session.take_diagnostics().is_empty());
}

#[test]
fn lexical_errors_are_reported_even_when_parsing_fails() {
    let mut session = Session::new();
    assert!(session.execute("x = ( # 1").is_err());
    assert_eq!(session.take_diagnostics().len(), 1);
}

#[test]
fn keywords_need_an_exact_match() {
    let session = assert_success("sqrtx = 4\nprinted = sqrtx * 2");
    assert_eq!(variable(&session, "sqrtx"), Value::Real(4.0));
    assert_eq!(variable(&session, "printed"), Value::Real(8.0));

    let mut session = Session::new();
    assert!(session.execute("sqrt = 4").is_err());
    assert!(session.execute("print = 4").is_err());
}

#[test]
fn reevaluation_is_deterministic() {
    let lines = ["x = sqrt(-2) * (1.5-0.5j) / 3", "x = 2 - 3 * 4 / -5", "x = y + 1"];

    for line in lines {
        let mut first_env = Environment::new();
        let mut first_diags = Vec::new();
        let mut second_env = Environment::new();
        let mut second_diags = Vec::new();

        let first = parse_and_evaluate(line, &mut first_env, &mut first_diags);
        let second = parse_and_evaluate(line, &mut second_env, &mut second_diags);

        assert_eq!(first, second);
        assert_eq!(first_env, second_env);
        assert_eq!(first_diags, second_diags);
    }
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.execute("x = 1").unwrap();
    second.execute("y = x").unwrap();

    assert_eq!(second.environment().get("y"), Some(Value::Real(0.0)));
    assert_eq!(second.take_diagnostics().len(), 1);
    assert_eq!(first.environment().get("y"), None);
}

#[test]
fn values_display_like_the_source_syntax() {
    assert_eq!(Value::Real(5.0).to_string(), "5");
    assert_eq!(Value::Real(0.5).to_string(), "0.5");
    assert_eq!(complex(3.0, 4.0).to_string(), "(3+4j)");
    assert_eq!(complex(0.0, -2.0).to_string(), "(0-2j)");
}

#[test]
fn environment_lists_variables_by_name() {
    let session = assert_success("zeta = 2\nalpha = sqrt(-1)\nmid = zeta * 3");
    let entries: Vec<(&str, Value)> = session.environment().iter().collect();

    assert_eq!(entries,
               vec![("alpha", complex(0.0, 1.0)),
                    ("mid", Value::Real(6.0)),
                    ("zeta", Value::Real(2.0))]);
    assert_eq!(entries[1].1.as_real(), Some(6.0));
    assert_eq!(entries[0].1.as_real(), None);
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let mut input = std::io::Cursor::new(b"x = 1\n\xff\nprint(x)\n".to_vec());
    let mut session = Session::new();
    let mut outcomes = Vec::new();

    while let Some(line) = read_source_line(&mut input).expect("reading from memory") {
        outcomes.push(session.execute(&line));
    }

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[1], Err(Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert_eq!(outcomes[2], Ok(Outcome::Printed(Value::Real(1.0))));
    assert!(matches!(session.take_diagnostics().as_slice(), [Diagnostic::Lexical(_)]));
}
