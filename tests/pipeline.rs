use indoc::indoc;

use simplang::interpreter::Environment;
use simplang::parser;
use simplang::syntax::Renderer;
use simplang::value::{Num, Value};

fn int_environment(bindings: &[(&str, i64)]) -> Environment {
    bindings
        .iter()
        .map(|(name, value)| (name.to_string(), Value::Number(Num::Int(*value))))
        .collect()
}

#[test]
fn parses_lowers_and_evaluates_a_chain_of_assignments() {
    let program = parser::parse("x = 1 + 1; y = x + 3; z = y + 5;").expect("parse failed");
    let lowered = program.lower();

    let result = lowered.evaluate(&Environment::new()).expect("evaluate failed");
    assert_eq!(result, int_environment(&[("x", 2), ("y", 5), ("z", 10)]));

    // The program is a pure function of its environment: feeding the
    // result back in reproduces it.
    let again = lowered.evaluate(&result).expect("evaluate failed");
    assert_eq!(again, result);
}

#[test]
fn evaluates_a_loop_program_from_source() {
    let source = indoc! {"
        while (a < 3)
        {
          a = a + 1;
          b = b + a;
        }
    "};
    let lowered = parser::parse(source).expect("parse failed").lower();
    let result = lowered
        .evaluate(&int_environment(&[("a", 0), ("b", 0)]))
        .expect("evaluate failed");
    assert_eq!(result, int_environment(&[("a", 3), ("b", 6)]));
}

#[test]
fn renders_canonically_and_reparses_to_the_same_tree() {
    let source = "flag = true;   while( flag ){ n=n+1;flag = n < 3; }";
    let program = parser::parse(source).expect("parse failed");
    let rendered = program.render(&mut Renderer::new("  "));

    let expected = indoc! {"
        flag = true;
        while (flag)
        {
          n = n + 1;
          flag = n < 3;
        }"};
    assert_eq!(rendered, expected);

    let reparsed = parser::parse(&rendered).expect("re-parse failed");
    assert_eq!(reparsed, program);
}

#[test]
fn generates_python_for_a_lowered_program() {
    let lowered = parser::parse("y = x + 3; z = y + 5;")
        .expect("parse failed")
        .lower();
    assert_eq!(
        lowered.to_python(0),
        "e['y'] = (e['x']) + (3)\ne['z'] = (e['y']) + (5)"
    );
}

#[test]
fn generates_python_with_indented_control_flow() {
    let source = indoc! {"
        if (n < 0)
        {
          sign = -1;
        }
        else
        {
          sign = 1;
        }
    "};
    let lowered = parser::parse(source).expect("parse failed").lower();
    assert_eq!(
        lowered.to_python(0),
        "if (e['n']) < (0):\n    e['sign'] = -1\nelse:\n    e['sign'] = 1"
    );
}
