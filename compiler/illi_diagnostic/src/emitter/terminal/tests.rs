use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorCode, Location};

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true)
}

fn output(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn syntax_error_renders_where_fragment() {
    let mut emitter = plain();
    emitter.report(
        Diagnostic::new(ErrorCode::E1011, 1, "Missing left-hand operand.")
            .with_location(Location::AtLexeme("+".into())),
    );
    assert!(emitter.had_error());
    assert_eq!(
        output(emitter),
        "[line 1] Error at '+': Missing left-hand operand.\n"
    );
}

#[test]
fn runtime_error_renders_two_lines() {
    let mut emitter = plain();
    emitter.report_runtime(3, "x", "Undefined variable 'x'.");
    assert!(emitter.had_runtime_error());
    assert!(!emitter.had_error());
    assert_eq!(
        output(emitter),
        "[line 3] Error at 'x'\nUndefined variable 'x'.\n"
    );
}

#[test]
fn reset_clears_only_the_syntax_flag() {
    let mut emitter = plain();
    emitter.report(Diagnostic::new(ErrorCode::E0002, 1, "Unexpected character."));
    emitter.report_runtime(1, "-", "Operand must be a number");
    emitter.reset_errors();
    assert!(!emitter.had_error());
    assert!(emitter.had_runtime_error());
}

#[test]
fn colors_wrap_label_and_line() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.report(Diagnostic::new(ErrorCode::E0001, 2, "Unterminated string."));
    let text = output(emitter);
    assert!(text.contains("\x1b[1;31mError\x1b[0m"));
    assert!(text.contains("\x1b[1;34m[line 2]\x1b[0m"));
    assert!(text.ends_with(": Unterminated string.\n"));
}
