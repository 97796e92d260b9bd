use anyhow::{Context, Result};
use clap::Parser;
use std::convert::Infallible;
use std::io::{self, Write};
use tracing::warn;

const DEFAULT_MESSAGE: &str = "default test msg";
const DEFAULT_REPEAT: i64 = 5;

/// Prints a test message a configurable number of times.
/// Defaults are shown by `--help`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "feature-flag")]
#[command(about = "Prints a test message a configurable number of times")]
struct Flags {
    /// Enter a string test message
    #[arg(long = "test", default_value = DEFAULT_MESSAGE)]
    test: String,

    /// Enter the number of times the test msg flag should run
    #[arg(
        long = "intflag",
        default_value_t = DEFAULT_REPEAT,
        value_parser = parse_repeat,
        allow_negative_numbers = true
    )]
    intflag: i64,
}

/// Malformed counts fall back to the default instead of failing the parse
fn parse_repeat(value: &str) -> std::result::Result<i64, Infallible> {
    Ok(value.trim().parse().unwrap_or_else(|err| {
        warn!(value, %err, default = DEFAULT_REPEAT, "invalid --intflag value, using default");
        DEFAULT_REPEAT
    }))
}

/// Writes `"{i} {message}"` for each i in 0..intflag
fn echo(flags: &Flags, out: &mut impl Write) -> io::Result<()> {
    for i in 0..flags.intflag {
        writeln!(out, "{} {}", i, flags.test)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Installed first so fallback warnings emitted while parsing are visible
    shop_cli::logging::init(false);

    let flags = Flags::parse();

    let stdout = io::stdout();
    echo(&flags, &mut stdout.lock()).context("failed to write to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn render(args: &[&str]) -> String {
        let flags = Flags::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        echo(&flags, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_defaults_print_five_lines() {
        assert_eq!(
            render(&["feature-flag"]),
            "0 default test msg\n\
             1 default test msg\n\
             2 default test msg\n\
             3 default test msg\n\
             4 default test msg\n"
        );
    }

    #[test]
    fn test_supplied_values() {
        assert_eq!(
            render(&["feature-flag", "--test", "hello", "--intflag", "2"]),
            "0 hello\n1 hello\n"
        );
    }

    #[test]
    fn test_equals_syntax() {
        assert_eq!(render(&["feature-flag", "--intflag=1", "--test=hi there"]), "0 hi there\n");
    }

    #[test]
    fn test_malformed_count_falls_back_to_default() {
        let flags = Flags::try_parse_from(["feature-flag", "--intflag", "lots"]).unwrap();
        assert_eq!(flags.intflag, DEFAULT_REPEAT);
        assert_eq!(render(&["feature-flag", "--intflag", "3.5"]).lines().count(), 5);
    }

    #[test]
    fn test_zero_and_negative_counts_print_nothing() {
        assert_eq!(render(&["feature-flag", "--intflag", "0"]), "");
        assert_eq!(render(&["feature-flag", "--intflag", "-3"]), "");
    }

    #[test]
    fn test_single_dash_long_names_are_unknown() {
        let err = Flags::try_parse_from(["feature-flag", "-intflag", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Flags::try_parse_from(["feature-flag", "-test", "hi"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_lists_defaults_and_descriptions() {
        let err = Flags::try_parse_from(["feature-flag", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let help = err.render().to_string();
        assert!(help.contains("--test"));
        assert!(help.contains("Enter a string test message"));
        assert!(help.contains("default test msg"));
        assert!(help.contains("--intflag"));
        assert!(help.contains("Enter the number of times the test msg flag should run"));
        assert!(help.contains("[default: 5]"));
    }
}
