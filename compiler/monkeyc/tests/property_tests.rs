//! Property-based tests for the front end and evaluator.
//!
//! Random well-formed programs are generated as source text and checked for:
//! 1. Parse-ability: generated programs parse without errors
//! 2. Round-trip: rendering a program and parsing it again yields the same AST
//! 3. Idempotence: render(parse(render(p))) == render(p)
//! 4. Evaluation agrees between the parsed and the re-parsed program
//!
//! Calls are only generated against unbound names, builtins, or inline
//! function literals, so no generated program can recurse.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use monkey_eval::{Environment, Interpreter};
use monkey_parse::parse;
use proptest::prelude::*;

// -- Code Generation Strategies --

/// A binding name. `f` is never bound, so calling it is a runtime error.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]").expect("valid regex")
}

fn int_literal_strategy() -> impl Strategy<Value = String> {
    (0i64..1000).prop_map(|n| n.to_string())
}

fn bool_literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("true".to_string()), Just("false".to_string())]
}

/// A string literal whose content may need escaping.
fn string_literal_strategy() -> impl Strategy<Value = String> {
    let chars = prop::sample::select(vec!['a', 'z', ' ', '"', '\\', '\n', '\t']);
    prop::collection::vec(chars, 0..6).prop_map(|chars| {
        let mut literal = String::from("\"");
        for c in chars {
            match c {
                '"' => literal.push_str("\\\""),
                '\\' => literal.push_str("\\\\"),
                '\n' => literal.push_str("\\n"),
                '\t' => literal.push_str("\\t"),
                c => literal.push(c),
            }
        }
        literal.push('"');
        literal
    })
}

fn simple_expr_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        int_literal_strategy(),
        bool_literal_strategy(),
        string_literal_strategy(),
    ]
}

fn infix_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "<=", ">=", "==", "!="])
}

fn expr_strategy(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        return simple_expr_strategy().boxed();
    }
    let sub = expr_strategy(depth - 1);

    prop_oneof![
        simple_expr_strategy(),
        // Prefix
        (prop::sample::select(vec!["-", "!"]), sub.clone())
            .prop_map(|(op, e)| format!("{}{}", op, e)),
        // Infix, left unparenthesized to exercise precedence
        (sub.clone(), infix_operator_strategy(), sub.clone())
            .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
        // Grouped
        sub.clone().prop_map(|e| format!("({})", e)),
        // If / if-else
        (sub.clone(), sub.clone(), prop::option::of(sub.clone())).prop_map(|(c, t, e)| {
            match e {
                Some(e) => format!("if ({}) {{ {} }} else {{ {} }}", c, t, e),
                None => format!("if ({}) {{ {} }}", c, t),
            }
        }),
        // Array literal
        prop::collection::vec(sub.clone(), 0..4)
            .prop_map(|items| format!("[{}]", items.join(", "))),
        // Index
        (sub.clone(), sub.clone()).prop_map(|(l, i)| format!("({})[{}]", l, i)),
        // Calls against non-recursive callees
        (
            prop::sample::select(vec!["f", "len", "first", "rest", "push"]),
            prop::collection::vec(sub.clone(), 0..3)
        )
            .prop_map(|(callee, args)| format!("{}({})", callee, args.join(", "))),
        (sub.clone(), sub.clone())
            .prop_map(|(body, arg)| format!("fn(x) {{ x; {} }}({})", body, arg)),
        // Function value
        sub.prop_map(|body| format!("fn(x, y) {{ {} }}", body)),
    ]
    .boxed()
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (identifier_strategy(), expr_strategy(3))
            .prop_map(|(name, e)| format!("let {} = {};", name, e)),
        expr_strategy(3).prop_map(|e| format!("return {};", e)),
        expr_strategy(3).prop_map(|e| format!("{};", e)),
    ]
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 1..5).prop_map(|stmts| stmts.join("\n"))
}

// -- Helpers --

fn eval_inspect(program: &monkey_ir::Program) -> String {
    let mut interpreter = Interpreter::builder().max_call_depth(64).build();
    interpreter
        .eval_program(program, &Environment::new())
        .inspect()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Generated programs are syntactically valid.
    #[test]
    fn prop_generated_programs_parse(source in program_strategy()) {
        let output = parse(&source);
        prop_assert!(output.errors.is_empty(), "errors {:?} in {}", output.errors, source);
    }

    /// Rendering re-parses to the same tree, and rendering is stable.
    #[test]
    fn prop_render_round_trip(source in program_strategy()) {
        let first = parse(&source);
        prop_assume!(first.errors.is_empty());

        let rendered = first.program.to_string();
        let second = parse(&rendered);
        prop_assert!(second.errors.is_empty(), "errors {:?} in {}", second.errors, rendered);
        prop_assert_eq!(&second.program, &first.program);
        prop_assert_eq!(second.program.to_string(), rendered);
    }

    /// The re-parsed program evaluates to the same result.
    #[test]
    fn prop_render_preserves_evaluation(source in program_strategy()) {
        let first = parse(&source);
        prop_assume!(first.errors.is_empty());
        let second = parse(&first.program.to_string());

        prop_assert_eq!(eval_inspect(&second.program), eval_inspect(&first.program));
    }

    /// Integer arithmetic matches i64 wrapping arithmetic.
    #[test]
    fn prop_integer_arithmetic(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let source = format!("[{a} + {b}, {a} - {b}, {a} * {b}, {a} < {b}, {a} == {b}]");
        let output = parse(&source);
        prop_assert!(output.errors.is_empty());

        let expected = format!(
            "[{}, {}, {}, {}, {}]",
            a.wrapping_add(b),
            a.wrapping_sub(b),
            a.wrapping_mul(b),
            a < b,
            a == b
        );
        prop_assert_eq!(eval_inspect(&output.program), expected);
    }
}
