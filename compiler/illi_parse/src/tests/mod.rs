//! Parser tests.
//!
//! - `parser`: precedence, associativity and statement forms
//! - `errors`: diagnostics, error productions and recovery


use illi_diagnostic::DiagnosticQueue;
use illi_ir::Stmt;

use crate::parse;

/// Lex and parse `source`, returning the statements and all diagnostics.
fn parse_source(source: &str) -> (Vec<Stmt>, DiagnosticQueue) {
    let mut queue = DiagnosticQueue::new();
    let tokens = illi_lexer::lex(source, &mut queue);
    let program = parse(&tokens, &mut queue);
    (program, queue)
}

/// Parse error-free `source` and render each statement.
fn render(source: &str) -> Vec<String> {
    let (program, queue) = parse_source(source);
    assert!(
        queue.diagnostics().is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        queue.messages()
    );
    program.iter().map(ToString::to_string).collect()
}

/// Render a single expression statement.
fn render_expr(source: &str) -> String {
    let mut rendered = render(&format!("{source};"));
    assert_eq!(rendered.len(), 1, "expected one statement for {source:?}");
    rendered.remove(0)
}
