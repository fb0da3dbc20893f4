//! Command line parsing for the `illi` binary.
//!
//! ```text
//! illi [--color=auto|always|never] [script]
//! illi --explain <CODE>
//! illi --help | --version
//! ```
//!
//! Flags may appear before or after the script path.

use std::path::PathBuf;

use illi_diagnostic::emitter::ColorMode;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// No script: start the interactive prompt.
    Repl,
    /// Run a script file.
    Script(PathBuf),
    /// Describe an error code.
    Explain(String),
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    pub command: Command,
}

/// A command line that cannot be run. Reported with exit status 64.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Usage: illi [script]")]
    TooManyScripts,
    #[error("invalid value '{0}' for --color (expected auto, always or never)")]
    InvalidColor(String),
    #[error("Usage: illi --explain <CODE>")]
    MissingExplainCode,
    #[error("unknown option '{0}'\nUsage: illi [--color=auto|always|never] [script]")]
    UnknownOption(String),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Options, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut color = ColorMode::Auto;
    let mut script: Option<PathBuf> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value)
                .ok_or_else(|| UsageError::InvalidColor(value.to_owned()))?;
        } else if arg == "--explain" {
            let code = args.next().ok_or(UsageError::MissingExplainCode)?;
            return Ok(Options {
                color,
                command: Command::Explain(code),
            });
        } else if arg == "--help" || arg == "-h" {
            return Ok(Options {
                color,
                command: Command::Help,
            });
        } else if arg == "--version" || arg == "-V" {
            return Ok(Options {
                color,
                command: Command::Version,
            });
        } else if arg.starts_with("--") {
            return Err(UsageError::UnknownOption(arg));
        } else if script.is_some() {
            return Err(UsageError::TooManyScripts);
        } else {
            script = Some(PathBuf::from(arg));
        }
    }

    let command = match script {
        Some(path) => Command::Script(path),
        None => Command::Repl,
    };
    Ok(Options { color, command })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Options, UsageError> {
        parse_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn no_arguments_starts_the_repl() {
        assert_eq!(
            parse(&[]),
            Ok(Options {
                color: ColorMode::Auto,
                command: Command::Repl,
            })
        );
    }

    #[test]
    fn single_script() {
        assert_eq!(
            parse(&["main.illi"]).map(|o| o.command),
            Ok(Command::Script(PathBuf::from("main.illi")))
        );
    }

    #[test]
    fn two_scripts_is_a_usage_error() {
        assert_eq!(parse(&["a.illi", "b.illi"]), Err(UsageError::TooManyScripts));
        assert_eq!(
            UsageError::TooManyScripts.to_string(),
            "Usage: illi [script]"
        );
    }

    #[test]
    fn color_flag_in_any_position() {
        let options = parse(&["main.illi", "--color=never"]);
        assert_eq!(
            options,
            Ok(Options {
                color: ColorMode::Never,
                command: Command::Script(PathBuf::from("main.illi")),
            })
        );
        assert_eq!(
            parse(&["--color=always"]).map(|o| o.color),
            Ok(ColorMode::Always)
        );
    }

    #[test]
    fn invalid_color_value() {
        assert_eq!(
            parse(&["--color=sometimes"]),
            Err(UsageError::InvalidColor("sometimes".into()))
        );
    }

    #[test]
    fn explain_takes_the_next_argument() {
        assert_eq!(
            parse(&["--explain", "E1002"]).map(|o| o.command),
            Ok(Command::Explain("E1002".into()))
        );
        assert_eq!(parse(&["--explain"]), Err(UsageError::MissingExplainCode));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["-h"]).map(|o| o.command), Ok(Command::Help));
        assert_eq!(
            parse(&["--version"]).map(|o| o.command),
            Ok(Command::Version)
        );
    }

    #[test]
    fn unknown_option() {
        assert_eq!(
            parse(&["--fast"]),
            Err(UsageError::UnknownOption("--fast".into()))
        );
    }
}
