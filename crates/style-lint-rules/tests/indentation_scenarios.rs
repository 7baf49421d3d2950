//! Integration test: the indentation engine on parsed Java snippets.
//!
//! Each scenario parses a small source with the Java front end and runs
//! the engine directly, so findings are checked before they are turned
//! into rule violations.

use style_lint_core::SourceParser;
use style_lint_java::JavaParser;
use style_lint_rules::indentation::{check_tree, IndentViolation};
use style_lint_rules::IndentOptions;

fn check(source: &str, options: &IndentOptions) -> Vec<IndentViolation> {
    let tree = JavaParser::new()
        .tab_width(options.tab_width)
        .parse(source)
        .expect("scenario source should parse");
    check_tree(&tree, options)
}

fn messages(violations: &[IndentViolation]) -> Vec<(usize, String)> {
    violations.iter().map(|v| (v.line, v.message())).collect()
}

fn assert_clean(source: &str, options: &IndentOptions) {
    let violations = check(source, options);
    assert!(
        violations.is_empty(),
        "expected no findings, got {:#?}",
        messages(&violations)
    );
}

// ── Block parents and braces ──

const IF_WITH_BRACE_ON_OWN_LINE: &str = "\
class A {
    void f() {
        if (a)
          {
            g();
          }
    }
}
";

#[test]
fn brace_adjustment_accepts_shifted_brace() {
    let options = IndentOptions::new().brace_adjustment(2);
    assert_clean(IF_WITH_BRACE_ON_OWN_LINE, &options);
}

#[test]
fn brace_between_allowed_columns_is_reported() {
    let source = "\
class A {
    void f() {
        if (a)
         {
            g();
        }
    }
}
";
    let options = IndentOptions::new().brace_adjustment(2);
    let violations = check(source, &options);
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'if lcurly' has incorrect indentation level 9, expected level should be one of the following: 8, 10."
                .to_string()
        )]
    );
}

#[test]
fn statement_in_if_body_is_reported_as_child() {
    let source = "\
class A {
    void f() {
        if (true) {
          g();
        }
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(violations.len(), 1, "{:#?}", messages(&violations));
    assert_eq!((violations[0].line, violations[0].column), (4, 10));
    assert_eq!(
        violations[0].message(),
        "'if' child has incorrect indentation level 10, expected level should be 12."
    );
}

#[test]
fn misplaced_do_while_condition() {
    let source = "\
class A {
    void f() {
        do {
            g();
        } while (a);
        do {
            g();
        }
            while (a);
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            9,
            "'do..while while' has incorrect indentation level 12, expected level should be 8."
                .to_string()
        )]
    );
}

fn unbraced_do(body_column: usize) -> String {
    format!(
        "class A {{\n    void f() {{\n        do\n{}g();\n        while (a);\n    }}\n}}\n",
        " ".repeat(body_column)
    )
}

#[test]
fn unbraced_do_body_sits_one_offset_in() {
    assert_clean(&unbraced_do(12), &IndentOptions::default());

    for column in [8, 16] {
        let violations = check(&unbraced_do(column), &IndentOptions::default());
        assert_eq!(
            messages(&violations),
            vec![(
                4,
                format!(
                    "'do..while' child has incorrect indentation level {column}, expected level should be 12."
                )
            )]
        );
    }
}

// ── Switch ──

#[test]
fn case_bodies_follow_case_indent() {
    let source = "\
class A {
    void f(int x) {
        switch (x) {
            case 1:
                g();
                break;
            case 2:
            case 3: {
                g();
                break;
            }
            default:
              g();
        }
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            13,
            "'default' child has incorrect indentation level 14, expected level should be 16."
                .to_string()
        )]
    );
}

#[test]
fn break_must_follow_its_case() {
    let source = "\
class A {
    void f(int x) {
        switch (x) {
            case 4:
            break;
        }
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'case' child has incorrect indentation level 12, expected level should be 16."
                .to_string()
        )]
    );
}

#[test]
fn zero_case_indent_keeps_labels_on_switch_column() {
    let source = "\
class A {
    void f(int x) {
        switch (x) {
        case 1:
            break;
        default:
            g();
        }
    }
}
";
    assert_clean(source, &IndentOptions::new().case_indent(0));
}

const FALLTHROUGH_LABELS: &str = "\
class A {
    void f(int x) {
        switch (x) {
            case 1:
            case 2:
                g();
        }
    }
}
";

#[test]
fn fallthrough_labels_share_a_column() {
    assert_clean(FALLTHROUGH_LABELS, &IndentOptions::default());

    let source = FALLTHROUGH_LABELS.replace("            case 2:", "              case 2:");
    let violations = check(&source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'case' has incorrect indentation level 14, expected level should be 12.".to_string()
        )]
    );
}

fn broken_case_label(value_column: usize) -> String {
    format!(
        "class A {{\n    void f(int x) {{\n        switch (x) {{\n            case\n{}5:\n                g();\n        }}\n    }}\n}}\n",
        " ".repeat(value_column)
    )
}

#[test]
fn wrapped_case_label_continues_from_case() {
    assert_clean(&broken_case_label(16), &IndentOptions::default());

    let violations = check(&broken_case_label(14), &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'5' has incorrect indentation level 14, expected level should be 16.".to_string()
        )]
    );
}

// ── Array initializers ──

#[test]
fn array_closing_brace_may_return_to_declaration() {
    let source = "\
class A {
  int[] a = {
    1,
    2,
  };
}
";
    assert_clean(source, &IndentOptions::new().basic_offset(2).array_init_indent(2));
}

#[test]
fn array_elements_use_array_init_indent() {
    let source = "\
class A {
  int[] a = {
    1,
     2,
  };
}
";
    let options = IndentOptions::new().basic_offset(2).array_init_indent(2);
    let violations = check(source, &options);
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'array initialization' child has incorrect indentation level 5, expected level should be 4."
                .to_string()
        )]
    );
}

// ── Wrapped conditions ──

const WRAPPED_WHILE: &str = "\
class A {
    void f() {
        while (a
                && b) {
            g();
        }
    }
}
";

#[test]
fn wrapped_condition_accepts_deeper_indent() {
    assert_clean(WRAPPED_WHILE, &IndentOptions::default());
}

#[test]
fn strict_condition_requires_exact_wrap() {
    let options = IndentOptions::new().force_strict_condition(true);
    assert_clean(&WRAPPED_WHILE.replace("                &&", "            &&"), &options);

    let violations = check(WRAPPED_WHILE, &options);
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'&&' has incorrect indentation level 16, expected level should be 12.".to_string()
        )]
    );
}

const LCURLY_AT_WRAP_COLUMN: &str = "\
class A {
    void f() {
        while (a &&
                b)
                {
            g();
        }
    }
}
";

#[test]
fn left_brace_may_follow_wrapped_condition() {
    assert_clean(LCURLY_AT_WRAP_COLUMN, &IndentOptions::default());

    let source = LCURLY_AT_WRAP_COLUMN.replace("                {", "              {");
    let violations = check(&source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'while lcurly' has incorrect indentation level 14, expected level should be one of the following: 8, 16."
                .to_string()
        )]
    );
}

#[test]
fn throws_on_its_own_line() {
    let source = "\
class A {
    void f(int a,
            int b)
            throws Exception {
        g();
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'throws' has incorrect indentation level 12, expected level should be 8.".to_string()
        )]
    );
}

const THROWS_LIST: &str = "\
class A {
    void f(int a,
            int n) throws IOException,
            InterruptedException {
        g();
    }
    void h()
        throws IOException,
            InterruptedException {
    }
}
";

#[test]
fn throws_list_wraps_from_the_declaration() {
    assert_clean(THROWS_LIST, &IndentOptions::default());

    let source = THROWS_LIST.replacen("            Interrupted", "      Interrupted", 1);
    let violations = check(&source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'InterruptedException' has incorrect indentation level 6, expected level should be >= 8."
                .to_string()
        )]
    );
}

// ── Member chains and lambdas ──

#[test]
fn aligned_chain_is_accepted() {
    let source = "\
class A {
    void f() {
        builder
            .a()
            .b()
            .c()
            .d()
            .e();
    }
}
";
    assert_clean(source, &IndentOptions::default());
}

#[test]
fn chain_segments_align_with_first_wrapped_one() {
    let source = "\
class A {
    void f() {
        builder
            .a()
            .b()
            .c()
              .d()
            .e();
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            7,
            "'.' has incorrect indentation level 14, expected level should be 12.".to_string()
        )]
    );
}

#[test]
fn lambda_block_body_follows_arrow_line() {
    let source = "\
class A {
    void f() {
        run(() -> {
            g();
        });
        list.forEach(x ->
                g(x));
    }
}
";
    assert_clean(source, &IndentOptions::default());
}

#[test]
fn lambda_expression_body_must_be_wrapped() {
    let source = "\
class A {
    void f() {
        list.forEach(x ->
          g(x));
    }
}
";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            4,
            "'g' has incorrect indentation level 10, expected level should be >= 12.".to_string()
        )]
    );
}

const TRAILING_DOT_CHAIN: &str = "\
class A {
    void f() {
        builder.
            a().
            b();
    }
}
";

#[test]
fn trailing_dot_chain_aligns_segments() {
    assert_clean(TRAILING_DOT_CHAIN, &IndentOptions::default());

    let source = TRAILING_DOT_CHAIN.replace("            b();", "              b();");
    let violations = check(&source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'b' has incorrect indentation level 14, expected level should be 12.".to_string()
        )]
    );
}

const WRAPPED_LAMBDA_PARAMS: &str = "\
class A {
    void f() {
        run((int a,
                int b,
                int c) -> g());
    }
}
";

#[test]
fn wrapped_lambda_parameters_align() {
    assert_clean(WRAPPED_LAMBDA_PARAMS, &IndentOptions::default());

    let source = WRAPPED_LAMBDA_PARAMS.replace("                int c", "                  int c");
    let violations = check(&source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            5,
            "'int' has incorrect indentation level 18, expected level should be 16.".to_string()
        )]
    );
}

fn lambda_on_wrapped_line(rcurly_column: usize) -> String {
    format!(
        "class A {{\n    void f() {{\n        list.forEach(\n                x -> {{\n                    g(x);\n{}}});\n    }}\n}}\n",
        " ".repeat(rcurly_column)
    )
}

#[test]
fn lambda_rcurly_may_return_to_statement_line() {
    assert_clean(&lambda_on_wrapped_line(8), &IndentOptions::default());
    assert_clean(&lambda_on_wrapped_line(16), &IndentOptions::default());

    let violations = check(&lambda_on_wrapped_line(12), &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            6,
            "'lambda rcurly' has incorrect indentation level 12, expected level should be one of the following: 8, 16."
                .to_string()
        )]
    );
}

// ── Top level and tabs ──

#[test]
fn top_level_declarations_start_at_column_zero() {
    let source = "  package demo;\n\nclass A {\n}\n";
    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            1,
            "'package def' has incorrect indentation level 2, expected level should be 0."
                .to_string()
        )]
    );
}

#[test]
fn tabs_expand_with_configured_width() {
    let source = "class A {\n\tint x;\n}\n";
    assert_clean(source, &IndentOptions::new().tab_width(4));

    let violations = check(source, &IndentOptions::default());
    assert_eq!(
        messages(&violations),
        vec![(
            2,
            "'class def' child has incorrect indentation level 8, expected level should be 4."
                .to_string()
        )]
    );
}

#[test]
fn findings_are_stable_across_runs() {
    let options = IndentOptions::new().force_strict_condition(true);
    let first = check(WRAPPED_WHILE, &options);
    let second = check(WRAPPED_WHILE, &options);
    assert_eq!(first, second);
}

#[test]
fn engine_accepts_its_own_layout() {
    let source = include_str!("fixtures/indentation/Clean.java");
    assert_clean(source, &IndentOptions::default());
}
