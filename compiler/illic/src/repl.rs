//! Interactive prompt.

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::{Reporter, Session};

/// Printed once when the prompt starts.
pub const BANNER: &str = "(To exit, press ^D or enter #exit)";

pub const PROMPT: &str = "> ";

/// A line that ends the session (surrounding whitespace ignored).
pub const EXIT_COMMAND: &str = "#exit";

/// Read lines from `input` and run each one in `session` until end of
/// input or [`EXIT_COMMAND`].
///
/// The banner and prompts go to `output`; program output and diagnostics go
/// wherever the session sends them. Errors in a line never end the loop.
pub fn run_prompt<R, I, O>(session: &mut Session<R>, input: I, mut output: O) -> io::Result<()>
where
    R: Reporter,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{BANNER}")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            trace!("end of input");
            break;
        };
        if line.trim() == EXIT_COMMAND {
            break;
        }

        let outcome = session.run_line(&line);
        trace!(?outcome, "line done");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use illi_diagnostic::DiagnosticQueue;
    use illi_eval::buffer_handler;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Run `input` through a fresh prompt; returns (prompt text, program output, queue).
    fn drive(input: &str) -> (String, String, DiagnosticQueue) {
        let mut session = Session::with_print_handler(DiagnosticQueue::new(), buffer_handler());
        let mut prompts = Vec::new();
        run_prompt(&mut session, input.as_bytes(), &mut prompts).unwrap();

        let output = session.interpreter().print_handler().get_output();
        (
            String::from_utf8(prompts).unwrap(),
            output,
            session.into_reporter(),
        )
    }

    #[test]
    fn banner_then_one_prompt_per_line() {
        let (prompts, _, _) = drive("1;\n2;\n");
        assert_eq!(
            prompts,
            "(To exit, press ^D or enter #exit)\n> > > "
        );
    }

    #[test]
    fn exit_command_stops_reading() {
        let (prompts, output, _) = drive("1;\n  #exit  \n2;\n");
        assert_eq!(output, "1\n");
        assert_eq!(prompts.matches(PROMPT).count(), 2);
    }

    #[test]
    fn end_of_input_without_newline() {
        let (_, output, _) = drive("var a = 40;\na + 2;");
        assert_eq!(output, "42\n");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (_, output, queue) = drive("print (;\nprint nope;\nprint \"still here\";\n");
        assert_eq!(output, "still here\n");
        assert_eq!(queue.error_count(), 1);
        assert_eq!(queue.runtime_errors().len(), 1);
    }

    #[test]
    fn empty_lines_are_harmless() {
        let (_, output, queue) = drive("\n\nprint 1;\n");
        assert_eq!(output, "1\n");
        assert_eq!(queue.error_count(), 0);
    }
}
