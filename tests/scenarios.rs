//! End-to-end scenarios: form input through session to rendered output.

use calcbook::config::DisplayConfig;
use calcbook::input::OperandForm;
use calcbook::render::{banner, history_lines};
use calcbook::session::{Calculator, Phase};
use calcbook::shell::Shell;
use std::io::Cursor;

#[test]
fn division_by_zero_leaves_history_empty() {
    let mut calculator = Calculator::new();

    let result = calculator.submit_form(&OperandForm::new("div", "10").with_operand_b("0"));

    let banner = banner(&result);
    assert!(banner.is_error());
    assert_eq!(banner.text, "division by zero not allowed");
    assert_eq!(calculator.history().len(), 0);
}

#[test]
fn addition_is_shown_and_recorded() {
    let mut calculator = Calculator::new();

    let result = calculator.submit_form(&OperandForm::new("add", "2").with_operand_b("3"));

    assert_eq!(banner(&result).text, "Result: 5");
    assert_eq!(
        history_lines(calculator.history()),
        vec!["1. Addition (a + b): a = 2, b = 3 → 5"]
    );
}

#[test]
fn mixed_session_keeps_only_successes() {
    let mut calculator = Calculator::new();
    let forms = [
        OperandForm::new("pow", "2").with_operand_b("10"),
        OperandForm::new("sqrt", "-4"),
        OperandForm::new("log10", "100"),
        OperandForm::new("fact", "2.5"),
        OperandForm::new("fact", "5").with_operand_b("99"),
    ];

    let messages: Vec<String> = forms
        .iter()
        .map(|form| banner(&calculator.submit_form(form)).text)
        .collect();

    assert_eq!(
        messages,
        vec![
            "Result: 1024",
            "square root requires a non-negative number",
            "Result: 2",
            "factorial requires a whole number (no decimals)",
            "Result: 120",
        ]
    );
    assert_eq!(calculator.phase(), Phase::Computed);
    assert_eq!(
        history_lines(calculator.history()),
        vec![
            "1. Factorial (a!): a = 5, b = — → 120",
            "2. Base-10 logarithm (log10 a): a = 100, b = — → 2",
            "3. Power (a ^ b): a = 2, b = 10 → 1024",
        ]
    );
}

#[test]
fn shell_transcript() {
    let display = DisplayConfig {
        prompt: String::new(),
        show_history: false,
    };
    let mut shell = Shell::new(display);
    let mut output = Vec::new();

    shell
        .run(
            Cursor::new("div 10 0\nhistory\nadd 2 3\nhistory\nquit\n"),
            &mut output,
        )
        .unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(
        transcript,
        "division by zero not allowed\n\
         History:\n\
         No operations yet.\n\
         Result: 5\n\
         History:\n\
         1. Addition (a + b): a = 2, b = 3 → 5\n\
         \n"
    );
}
