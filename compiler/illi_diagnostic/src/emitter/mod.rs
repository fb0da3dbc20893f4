//! Diagnostic emitters.
//!
//! Only a terminal emitter exists today; it renders the classic
//! `[line N] Error at 'x': message` format, optionally coloured.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};
