// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use tailn_core::{DEFAULT_LINE_COUNT, MAX_LINE_LENGTH, TailConfig, TailError};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "tailn")]
#[command(about = "Print the last lines of a file, or of stdin")]
#[command(version)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nReads stdin when no file is given.\nUSAGE:\n  tailn [file path] [options]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: Option<String>,

    #[arg(
        long = "lines",
        short = 'n',
        value_name = "NUM",
        default_value_t = DEFAULT_LINE_COUNT,
        help = "Number of lines to print"
    )]
    pub line_count: usize,

    #[arg(
        long,
        value_name = "NUM",
        default_value_t = MAX_LINE_LENGTH,
        hide = true,
        help = "Longest accepted line, in bytes, not counting the line terminator"
    )]
    pub max_line_length: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `tailn_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

impl CLIArg {
    /// # Errors
    ///
    /// [`TailError::InvalidCapacity`] if the line count is zero.
    pub fn try_to_tail_config(&self) -> Result<TailConfig, TailError> {
        TailConfig::try_new(self.line_count, self.max_line_length)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["tailn"]).unwrap();
        assert_eq!(cli_arg.file_path, None);
        assert_eq!(cli_arg.line_count, 10);
        assert_eq!(cli_arg.max_line_length, 4095);
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.try_to_tail_config().unwrap(), TailConfig::default());
    }

    #[test_case(&["tailn", "-n", "3", "foo.txt"], Some("foo.txt"), 3, false ; "short flag")]
    #[test_case(&["tailn", "--lines", "7", "-l"], None, 7, true ; "long flag w/ logging")]
    #[test_case(&["tailn", "bar.txt", "--enable-logging"], Some("bar.txt"), 10, true ; "file w/ logging")]
    fn test_parse(
        args: &[&str],
        expected_file_path: Option<&str>,
        expected_line_count: usize,
        expected_enable_logging: bool,
    ) {
        let cli_arg = CLIArg::try_parse_from(args).unwrap();
        assert_eq!(cli_arg.file_path.as_deref(), expected_file_path);
        assert_eq!(cli_arg.line_count, expected_line_count);
        assert_eq!(cli_arg.global_options.enable_logging, expected_enable_logging);
    }

    #[test]
    fn test_max_line_length_override() {
        let cli_arg =
            CLIArg::try_parse_from(["tailn", "--max-line-length", "80"]).unwrap();
        assert_eq!(cli_arg.try_to_tail_config().unwrap().max_line_length, 80);
    }

    #[test]
    fn test_zero_lines_is_rejected() {
        let cli_arg = CLIArg::try_parse_from(["tailn", "-n", "0"]).unwrap();
        assert!(matches!(
            cli_arg.try_to_tail_config(),
            Err(TailError::InvalidCapacity { requested: 0 })
        ));
    }

    #[test_case(&["tailn", "-n", "abc"] ; "not a number")]
    #[test_case(&["tailn", "-n", "-3"] ; "negative")]
    #[test_case(&["tailn", "a.txt", "b.txt"] ; "two files")]
    fn test_usage_errors(args: &[&str]) {
        assert!(CLIArg::try_parse_from(args).is_err());
    }
}
