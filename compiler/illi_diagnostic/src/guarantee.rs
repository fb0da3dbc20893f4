use std::fmt;

/// Proof that at least one error was reported through a sink.
///
/// The field is private, so outside this crate the only way to obtain a
/// value is [`RuntimeErrorSink::emit_runtime`](crate::RuntimeErrorSink::emit_runtime).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
