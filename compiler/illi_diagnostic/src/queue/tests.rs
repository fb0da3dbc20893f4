use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorCode, Location};

fn syntax_error(line: u32) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1002, line, "Expect expression.")
        .with_location(Location::AtLexeme(";".into()))
}

#[test]
fn empty_queue_has_no_errors() {
    let queue = DiagnosticQueue::new();
    assert!(!queue.had_error());
    assert!(!queue.had_runtime_error());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn report_sets_flag_and_keeps_order() {
    let mut queue = DiagnosticQueue::new();
    queue.report(syntax_error(2));
    queue.report(Diagnostic::new(ErrorCode::E0002, 1, "Unexpected character."));

    assert!(queue.had_error());
    assert_eq!(
        queue.messages(),
        vec![
            "[line 2] Error at ';': Expect expression.".to_string(),
            "[line 1] Error: Unexpected character.".to_string(),
        ]
    );
}

#[test]
fn reset_clears_flag_but_keeps_history() {
    let mut queue = DiagnosticQueue::new();
    queue.report(syntax_error(1));
    queue.reset_errors();

    assert!(!queue.had_error());
    assert_eq!(queue.error_count(), 1);
}

#[test]
fn runtime_reports_are_separate_from_diagnostics() {
    let mut queue = DiagnosticQueue::new();
    let _guarantee = queue.emit_runtime(4, "/", "Arithmetic division by 0");

    assert!(queue.had_runtime_error());
    assert!(!queue.had_error());
    assert_eq!(
        queue.runtime_errors(),
        &[RuntimeReport {
            line: 4,
            lexeme: "/".into(),
            message: "Arithmetic division by 0".into(),
        }]
    );
}

#[test]
fn flush_drains_everything() {
    let mut queue = DiagnosticQueue::new();
    queue.report(syntax_error(1));
    queue.report_runtime(1, "x", "boom");

    let drained = queue.flush();
    assert_eq!(drained.len(), 1);
    assert!(!queue.had_error());
    assert!(!queue.had_runtime_error());
    assert!(queue.diagnostics().is_empty());
}
