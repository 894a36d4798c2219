use std::{
    fs,
    io::{self, Write},
    path::Path,
    thread,
};

use polyrun::{
    ast::Statement,
    error::{Error, ParseError, RuntimeError, SemanticErrorKind},
    interpreter::{
        config::{Config, DEFAULT_MAX_DEPTH},
        evaluator::execute::execute,
        parser::core::parse_program,
    },
    report, run,
};
use walkdir::WalkDir;

/// Runs `source` and returns what the command line would print on stdout.
fn render(source: &str, config: &Config) -> String {
    let mut out = Vec::new();
    if let Err(e @ (Error::Parse(_) | Error::Semantic(_))) = run(source, config, &mut out) {
        writeln!(out, "{e}").unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn sample_programs_work() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("programs");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "poly"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let actual = render(&source, &Config::default());
        assert_eq!(actual, expected, "program {path:?} printed unexpected output");
    }

    assert!(count > 0, "No sample programs found in programs/");
}

fn assert_output(src: &str, expected: &str) {
    match run_ok(src) {
        Ok(output) => assert_eq!(output, expected, "for program:\n{src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn run_ok(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(src, &Config::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn assert_semantic_error(src: &str, kind: SemanticErrorKind, lines: &[usize]) {
    match run_ok(src) {
        Err(Error::Semantic(e)) => {
            assert_eq!(e.kind, kind);
            assert_eq!(e.lines, lines);
        },
        other => panic!("Expected a semantic error, got {other:?}"),
    }
}

fn assert_syntax_error(src: &str) {
    match run_ok(src) {
        Err(Error::Parse(_)) => {},
        other => panic!("Expected a syntax error, got {other:?}"),
    }
}

#[test]
fn nested_calls_evaluate_inside_out() {
    assert_output("TASKS 2 POLY F = x + 2; EXECUTE INPUT a; b = F(a); OUTPUT b; INPUTS 5",
                  "7\n");
    assert_output("TASKS 2 POLY F = x + 2; EXECUTE b = F(F(3)); OUTPUT b; INPUTS 5",
                  "7\n");
}

#[test]
fn arguments_bind_by_position() {
    assert_output("TASKS 2
                   POLY D(a, b) = a - b;
                   EXECUTE x = D(10, 3); y = D(3, 10); OUTPUT x; OUTPUT y;
                   INPUTS 0",
                  "7\n-7\n");
}

#[test]
fn terms_combine_left_to_right() {
    assert_output("TASKS 2 POLY F = x - x - 2 x + 3 x^2; EXECUTE a = F(2); OUTPUT a; INPUTS 0",
                  "8\n");
    assert_output("TASKS 2 POLY F = 5; EXECUTE a = F(100); OUTPUT a; INPUTS 0",
                  "5\n");
    assert_output("TASKS 2 POLY F = x^0; EXECUTE a = F(0); OUTPUT a; INPUTS 0",
                  "1\n");
}

#[test]
fn arithmetic_wraps_instead_of_overflowing() {
    assert_output("TASKS 2 POLY F = x^64; EXECUTE a = F(2); OUTPUT a; INPUTS 0",
                  "0\n");
    assert_output("TASKS 2 POLY F = x + 1; EXECUTE INPUT a; b = F(a); OUTPUT b; INPUTS 9223372036854775807",
                  "-9223372036854775808\n");
}

#[test]
fn variables_start_at_zero() {
    assert_output("TASKS 2 POLY F = x + 1; EXECUTE b = F(a); OUTPUT b; OUTPUT c; INPUTS 0",
                  "1\n0\n");
}

#[test]
fn degree_is_the_highest_term_degree() {
    let signs = ["+", "-"];
    for first in signs {
        for second in signs {
            let src = format!("TASKS 5 POLY P(x, y) = 4 x^2 y {first} 9 x {second} 0 y^3; \
                               EXECUTE a = P(1, 2); INPUTS 0");
            assert_output(&src, "P: 3\n");
        }
    }
}

#[test]
fn degree_of_products_and_parentheses() {
    assert_output("TASKS 5
                   POLY
                     A = 3;
                     B(x, y) = x y x;
                     C(x, y) = (x y + 1)^2 (y^3 - x);
                     D = ((x^2)^3)^4;
                   EXECUTE a = A(1);
                   INPUTS 0",
                  "A: 0\nB: 3\nC: 7\nD: 24\n");
}

#[test]
fn duplicate_declaration_cites_later_header() {
    assert_semantic_error("TASKS 1\nPOLY\nF(x) = x;\nF(x, y) = x + y;\nEXECUTE\na = F(1);\nINPUTS 1",
                          SemanticErrorKind::DuplicateDeclaration,
                          &[4]);
}

#[test]
fn first_declaration_is_kept() {
    let program = parse_program("TASKS 1\nPOLY\nF(x) = x;\nF(x, y) = x^2 + y;\nEXECUTE\n\
                                 a = F(1);\nb = F(1, 2);\nINPUTS 1",
                                &Config::default()).unwrap();

    let declaration = program.polynomial("F").unwrap();
    assert_eq!(declaration.header.line, 3);
    assert_eq!(declaration.header.parameters, vec!["x"]);
    assert_eq!(declaration.degree, 1);
    assert_eq!(program.polynomials.len(), 1);
    // Arity is checked against the declaration of record.
    assert_eq!(program.diagnostics.lines(SemanticErrorKind::WrongArgumentCount), &[7]);
}

#[test]
fn invalid_monomial_cites_variable_line() {
    assert_semantic_error("TASKS 1\nPOLY\nF(x) = x +\n y;\nEXECUTE\na = F(1);\nINPUTS 1",
                          SemanticErrorKind::InvalidMonomialName,
                          &[4]);
}

#[test]
fn header_without_parameters_takes_x() {
    assert_semantic_error("TASKS 1\nPOLY\nF = y;\nEXECUTE\na = F(1);\nINPUTS 1",
                          SemanticErrorKind::InvalidMonomialName,
                          &[3]);
    assert_semantic_error("TASKS 1\nPOLY\nF = x;\nEXECUTE\na = F(1, 2);\nINPUTS 1",
                          SemanticErrorKind::WrongArgumentCount,
                          &[5]);
}

#[test]
fn semantic_errors_report_in_priority_order() {
    let src = "TASKS 2\nPOLY\nF = x;\nG = y;\nF = x;\nEXECUTE\na = H(1);\nb = F(1, 2);\nINPUTS 1";
    assert_semantic_error(src, SemanticErrorKind::DuplicateDeclaration, &[5]);

    let src = "TASKS 2\nPOLY\nF = x;\nEXECUTE\na = H(1);\nb = F(1, 2);\nINPUTS 1";
    assert_semantic_error(src, SemanticErrorKind::UndefinedPolynomial, &[5]);
}

#[test]
fn semantic_errors_stop_all_tasks() {
    let src = "TASKS 2 5\nPOLY\nF = x;\nEXECUTE\nINPUT a;\nOUTPUT a;\nb = G(a);\nINPUTS 1";
    assert_eq!(render(src, &Config::default()), "Semantic Error Code 3: 7\n");
}

#[test]
fn syntax_error_wins_over_semantic_errors() {
    let src = "TASKS 1\nPOLY\nF = y;\nEXECUTE\na = F(1)\nINPUTS 1";
    assert_eq!(render(src, &Config::default()), "SYNTAX ERROR !!!!!&%!!\n");
}

#[test]
fn malformed_programs_are_syntax_errors() {
    assert_syntax_error("TASKS 7 POLY F = x; EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 0 POLY F = x; EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE a = F(1);");
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE INPUTS 1");
    assert_syntax_error("TASKS 1 POLY EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F() = x; EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE a = F(); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE a = 3; INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = x^y; EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = (x; EXECUTE a = F(1); INPUTS 1");
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE a = F(1); INPUTS 1 extra");
    assert_syntax_error("TASKS 1 POLY F = x * x; EXECUTE a = F(1); INPUTS 1");
}

#[test]
fn lexical_errors_are_syntax_errors() {
    match run_ok("TASKS 1 POLY F = x # 2; EXECUTE a = F(1); INPUTS 1") {
        Err(Error::Parse(ParseError::UnexpectedCharacter { text, line: 1 })) => assert_eq!(text, "#"),
        other => panic!("Expected an unexpected character, got {other:?}"),
    }
    match run_ok("TASKS 1 POLY F = x; EXECUTE a = F(1); INPUTS\n99999999999999999999") {
        Err(Error::Parse(ParseError::LiteralTooLarge { line: 2, .. })) => {},
        other => panic!("Expected a literal error, got {other:?}"),
    }
}

#[test]
fn keywords_are_case_sensitive() {
    // `input` is an identifier, so this is an assignment missing its `=`.
    assert_syntax_error("TASKS 1 POLY F = x; EXECUTE input a; INPUTS 1");
}

#[test]
fn uninitialized_read_cites_assignment() {
    assert_output("TASKS 3\nPOLY\nF = x;\nEXECUTE\nINPUT a;\nb = F(c);\nOUTPUT b;\nINPUTS 1",
                  "Warning Code 1: 6\n");
}

#[test]
fn output_is_not_an_uninitialized_read() {
    assert_output("TASKS 3\nPOLY\nF = x;\nEXECUTE\nOUTPUT a;\nb = F(1);\nOUTPUT b;\nINPUTS 1",
                  "Warning Code 1:\n");
}

#[test]
fn repeated_uninitialized_reads_repeat_the_line() {
    assert_output("TASKS 3\nPOLY\nF(x, y, z) = x;\nEXECUTE\nb = F(c, 1, c);\nINPUTS 1",
                  "Warning Code 1: 5 5\n");
}

#[test]
fn overwritten_assignment_is_useless() {
    assert_output("TASKS 4\nPOLY\nF = x;\nEXECUTE\na = F(1);\na = F(2);\nOUTPUT a;\nINPUTS 1",
                  "Warning Code 2: 5\n");
}

#[test]
fn read_through_nested_call_is_a_use() {
    assert_output("TASKS 4
POLY
  F = x;
  G(x, y) = x + y;
EXECUTE
  a = F(1);
  b = G(2, F(F(a)));
  a = F(3);
  OUTPUT b;
  OUTPUT a;
INPUTS 1",
                  "Warning Code 2:\n");
}

#[test]
fn self_referencing_assignment_uses_previous_value() {
    assert_output("TASKS 4\nPOLY\nF = x + 1;\nEXECUTE\na = F(1);\na = F(a);\nINPUTS 1",
                  "Warning Code 2: 6\n");
}

#[test]
fn tasks_run_in_number_order() {
    assert_output("TASKS 5 4 2 2\nPOLY\nF = x^3;\nEXECUTE\na = F(2);\nOUTPUT a;\nINPUTS 1",
                  "8\nWarning Code 2:\nF: 3\n");
}

#[test]
fn check_and_reserved_tasks_print_nothing() {
    assert_output("TASKS 1 6 POLY F = x; EXECUTE INPUT a; OUTPUT a; INPUTS 4", "");
}

#[test]
fn running_out_of_inputs_keeps_earlier_output() {
    let src = "TASKS 2\nPOLY\nF = x;\nEXECUTE\nINPUT a;\nOUTPUT a;\nINPUT b;\nINPUTS 5";
    let mut out = Vec::new();
    let error = run(src, &Config::default(), &mut out).unwrap_err();

    assert_eq!(String::from_utf8(out).unwrap(), "5\n");
    match error {
        Error::Runtime(RuntimeError::InputExhausted { name, line }) => {
            assert_eq!(name, "b");
            assert_eq!(line, 7);
        },
        other => panic!("Expected input exhaustion, got {other:?}"),
    }
}

#[test]
fn unused_inputs_are_ignored() {
    assert_output("TASKS 2 POLY F = x; EXECUTE INPUT a; OUTPUT a; INPUTS 4 5 6", "4\n");
}

#[test]
fn slots_follow_first_mention_order() {
    let program = parse_program("TASKS 1 POLY F(x, y) = x; EXECUTE INPUT a; b = F(c, a); OUTPUT d; \
                                 c = F(b, F(e, 1)); INPUTS 1",
                                &Config::default()).unwrap();

    let slots: Vec<_> = ["a", "b", "c", "d", "e"].iter()
                                                 .map(|n| program.memory.slot(n))
                                                 .collect();
    assert_eq!(slots, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(program.memory.slot("F"), None);
    assert_eq!(program.memory.slot("x"), None);
}

#[test]
fn statements_keep_source_order_and_lines() {
    let program = parse_program("TASKS 1\nPOLY\nF = x;\nEXECUTE\nINPUT a;\nb =\nF(a);\nOUTPUT b;\n\
                                 INPUTS 1",
                                &Config::default()).unwrap();

    let lines: Vec<_> = program.statements.iter().map(Statement::line).collect();
    assert_eq!(lines, vec![5, 6, 8]);
    let Statement::Assign { call, .. } = &program.statements[1] else {
        panic!("expected an assignment");
    };
    assert_eq!(call.line, 7);
}

#[test]
fn running_twice_gives_identical_output() {
    let src = "TASKS 2 POLY F(x, y) = x^2 - y; EXECUTE INPUT a; INPUT b; c = F(a, b); \
               OUTPUT c; d = F(c, c); OUTPUT d; INPUTS 3 4";
    let first = run_ok(src).unwrap();
    let second = run_ok(src).unwrap();
    assert_eq!(first, "5\n20\n");
    assert_eq!(first, second);

    let config = Config::default();
    let program = parse_program(src, &config).unwrap();
    let mut once = Vec::new();
    let mut twice = Vec::new();
    execute(&program, &config, &mut once).unwrap();
    execute(&program, &config, &mut twice).unwrap();
    assert_eq!(once, twice);
}

fn nested_parentheses(levels: usize) -> String {
    format!("TASKS 2 POLY F = {}x{}; EXECUTE a = F(3); OUTPUT a; INPUTS 1",
            "(".repeat(levels),
            ")".repeat(levels))
}

/// A top-level call of `F = x + 1` with `levels` calls nested in its argument.
fn nested_calls(levels: usize) -> String {
    format!("TASKS 2 POLY F = x + 1; EXECUTE a = {}1{}; OUTPUT a; INPUTS 1",
            "F(".repeat(levels + 1),
            ")".repeat(levels + 1))
}

#[test]
fn nesting_at_the_limit_parses_and_runs() {
    let config = Config::default().with_max_depth(2);
    assert_eq!(render(&nested_parentheses(2), &config), "3\n");
    assert_eq!(render(&nested_calls(2), &config), "4\n");

    let config = Config::default().with_max_depth(0);
    assert_eq!(render(&nested_parentheses(0), &config), "3\n");
    assert_eq!(render(&nested_calls(0), &config), "2\n");
}

#[test]
fn nesting_past_the_limit_is_rejected_while_parsing() {
    let config = Config::default().with_max_depth(2);
    for src in [nested_parentheses(3), nested_calls(3)] {
        match run(&src, &config, &mut Vec::new()) {
            Err(Error::Parse(ParseError::NestingTooDeep { limit: 2, line: 1 })) => {},
            other => panic!("Expected a nesting error, got {other:?}"),
        }
    }
}

#[test]
fn evaluation_counts_calls_and_parentheses_together() {
    let config = Config::default().with_max_depth(1);
    let src = "TASKS 2 5 POLY F = (x); EXECUTE a = F(F(1)); OUTPUT a; INPUTS 1";

    let program = parse_program(src, &config).unwrap();
    assert_eq!(program.polynomial("F").map(|p| p.degree), Some(1));

    let mut out = Vec::new();
    match run(src, &config, &mut out) {
        Err(Error::Runtime(RuntimeError::DepthLimitExceeded { limit: 1, line: 1 })) => {},
        other => panic!("Expected a depth error, got {other:?}"),
    }
    assert!(out.is_empty());

    let src = "TASKS 2 POLY F = (x); EXECUTE a = F(1); b = F(a); OUTPUT b; INPUTS 1";
    assert_eq!(render(src, &config), "1\n");
}

fn check_default_limit() {
    let config = Config::default();
    let limit = DEFAULT_MAX_DEPTH;
    let syntax_error = "SYNTAX ERROR !!!!!&%!!\n";

    assert_eq!(render(&nested_parentheses(limit), &config), "3\n");
    assert_eq!(render(&nested_parentheses(limit + 1), &config), syntax_error);
    assert_eq!(render(&nested_calls(limit), &config), format!("{}\n", limit + 2));
    assert_eq!(render(&nested_calls(limit + 1), &config), syntax_error);
}

#[test]
fn default_depth_limit_fits_a_small_stack() {
    let worker = thread::Builder::new().stack_size(2 << 20)
                                       .spawn(check_default_limit)
                                       .unwrap();
    worker.join().unwrap();
}

#[test]
fn pathological_nesting_fails_cleanly() {
    let depth = 10_000;
    let body = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let src = format!("TASKS 2 POLY F = {body}; EXECUTE a = F(1); OUTPUT a; INPUTS 1");
    assert!(matches!(run(&src, &Config::default(), &mut Vec::new()),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
}

#[test]
fn missing_numbers_are_reported_as_such() {
    for src in ["TASKS POLY F = x; EXECUTE a = F(1); INPUTS 1",
                "TASKS 1 POLY F = x^y; EXECUTE a = F(1); INPUTS 1",
                "TASKS 1 POLY F = x; EXECUTE a = F(1); INPUTS"]
    {
        match run_ok(src) {
            Err(Error::Parse(ParseError::UnexpectedToken { expected, line: 1, .. })) => {
                assert_eq!(expected, "number");
            },
            other => panic!("Expected a missing number, got {other:?}"),
        }
    }
}

/// A sink that rejects every write.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn reports_fall_back_to_stderr() {
    let semantic = run_ok("TASKS 1 POLY F = y; EXECUTE a = F(1); INPUTS 1").unwrap_err();
    let mut err = Vec::new();
    report(&semantic, &mut ClosedPipe, &mut err).unwrap();
    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("Semantic Error Code 2: 1\n"), "{err}");
    assert!(err.contains("Failed to write output"), "{err}");

    let runtime = run_ok("TASKS 2 POLY F = x; EXECUTE INPUT a; INPUT b; INPUTS 1").unwrap_err();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    report(&runtime, &mut out, &mut err).unwrap();
    assert!(out.is_empty());
    assert_eq!(String::from_utf8(err).unwrap(),
               "Error on line 1: No input value left for 'b'.\n");

    assert!(report(&runtime, &mut Vec::new(), &mut ClosedPipe).is_err());
}
