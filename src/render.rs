//! Text rendering for banners, menus and the history list.

use crate::core::{format_value, Arity, EvaluationResult, HistoryEntry, HistoryLog, Operation};

/// Shown in place of the history list when nothing was recorded yet.
pub const EMPTY_HISTORY: &str = "No operations yet.";

/// Placeholder for the operand B column of unary entries.
const NO_OPERAND: &str = "—";

/// Kind of banner to display after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A rendered result banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Success banners read `Result: {value}`; errors show the message verbatim.
pub fn banner(result: &EvaluationResult) -> Banner {
    match result {
        EvaluationResult::Success { value } => Banner {
            kind: BannerKind::Success,
            text: format!("Result: {}", format_value(*value)),
        },
        EvaluationResult::Failure { message } => Banner {
            kind: BannerKind::Error,
            text: message.clone(),
        },
    }
}

/// One numbered history line, `index` being zero-based.
pub fn history_line(index: usize, entry: &HistoryEntry) -> String {
    let operand_b = entry
        .operand_b()
        .map(format_value)
        .unwrap_or_else(|| NO_OPERAND.to_string());

    format!(
        "{}. {}: a = {}, b = {} → {}",
        index + 1,
        entry.operation_label(),
        format_value(entry.operand_a()),
        operand_b,
        format_value(entry.result()),
    )
}

/// Lines for the visible part of the history, or the empty placeholder.
pub fn history_lines(history: &HistoryLog) -> Vec<String> {
    if history.is_empty() {
        return vec![EMPTY_HISTORY.to_string()];
    }

    history
        .visible()
        .enumerate()
        .map(|(index, entry)| history_line(index, entry))
        .collect()
}

/// The operation selector: key, label and whether operand B is used.
pub fn operation_menu() -> Vec<String> {
    Operation::ALL
        .into_iter()
        .map(|op| {
            let operands = match op.arity() {
                Arity::Unary => "a",
                Arity::Binary => "a b",
            };
            format!("{:<6} {:<28} [{}]", op.key(), op.label(), operands)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_banner_formats_value() {
        let banner = banner(&EvaluationResult::Success { value: 5.0 });
        assert_eq!(banner.text, "Result: 5");
        assert!(!banner.is_error());

        let banner = super::banner(&EvaluationResult::Success { value: 2.5 });
        assert_eq!(banner.text, "Result: 2.5");
    }

    #[test]
    fn error_banner_is_verbatim() {
        let banner = banner(&EvaluationResult::Failure {
            message: "division by zero not allowed".to_string(),
        });
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "division by zero not allowed");
    }

    #[test]
    fn binary_history_line() {
        let entry = HistoryEntry::new(Operation::Add, 2.0, Some(3.0), 5.0);
        assert_eq!(
            history_line(0, &entry),
            "1. Addition (a + b): a = 2, b = 3 → 5"
        );
    }

    #[test]
    fn unary_history_line_uses_dash() {
        let entry = HistoryEntry::new(Operation::SquareRoot, 2.25, None, 1.5);
        assert_eq!(
            history_line(4, &entry),
            "5. Square root (√a): a = 2.25, b = — → 1.5"
        );
    }

    #[test]
    fn empty_history_placeholder() {
        assert_eq!(history_lines(&HistoryLog::new()), vec![EMPTY_HISTORY]);
    }

    #[test]
    fn history_lines_are_numbered_newest_first() {
        let mut history = HistoryLog::new();
        history.record(HistoryEntry::new(Operation::Add, 1.0, Some(1.0), 2.0));
        history.record(HistoryEntry::new(Operation::Factorial, 3.0, None, 6.0));

        assert_eq!(
            history_lines(&history),
            vec![
                "1. Factorial (a!): a = 3, b = — → 6",
                "2. Addition (a + b): a = 1, b = 1 → 2",
            ]
        );
    }

    #[test]
    fn history_lines_stop_at_twenty() {
        let mut history = HistoryLog::new();
        for i in 0..30 {
            let value = f64::from(i);
            history.record(HistoryEntry::new(Operation::Add, value, Some(0.0), value));
        }

        let lines = history_lines(&history);
        assert_eq!(lines.len(), 20);
        assert!(lines[19].starts_with("20. "));
    }

    #[test]
    fn menu_lists_every_operation() {
        let menu = operation_menu();
        assert_eq!(menu.len(), Operation::ALL.len());
        assert!(menu[0].starts_with("add"));
        assert!(menu[7].ends_with("[a]"));
    }
}
