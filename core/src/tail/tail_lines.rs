// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write};

use crate::{BoundedLineBuffer, LineReader, TailConfig, TailError};

/// Summary of one run of [`tail_lines`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TailReport {
    pub lines_read: usize,
    pub lines_written: usize,
    /// Lines that were pushed out of the buffer by newer ones.
    pub lines_evicted: usize,
}

/// Reads every line from `reader`, keeping only the last [`TailConfig::line_count`] of
/// them, then writes those to `writer`, oldest first, byte for byte as they were read
/// (no separators are added, since each line carries its own terminator). The input
/// doesn't have to be UTF-8.
///
/// Nothing is written unless the whole input was read successfully.
///
/// # Errors
///
/// - [`TailError::InvalidCapacity`] if the line count is zero.
/// - [`TailError::LineTooLong`] on the first line that is longer than the maximum.
/// - [`TailError::Allocation`] if the line buffer can't be allocated.
/// - [`TailError::Io`] if reading or writing fails.
///
/// # Examples
///
/// ```
/// use tailn_core::{TailConfig, tail_lines};
///
/// let input = "a\nb\nc\nd\ne\n";
/// let mut output = Vec::new();
/// let config = TailConfig::try_new(3, 4095).unwrap();
///
/// let report = tail_lines(input.as_bytes(), &mut output, &config).unwrap();
///
/// assert_eq!(output, b"c\nd\ne\n");
/// assert_eq!(report.lines_read, 5);
/// assert_eq!(report.lines_evicted, 2);
/// ```
pub fn tail_lines(
    reader: impl BufRead,
    mut writer: impl Write,
    config: &TailConfig,
) -> Result<TailReport, TailError> {
    let mut buffer = BoundedLineBuffer::try_new_with_max_line_length(
        config.line_count,
        config.max_line_length,
    )?;
    let mut report = TailReport::default();

    for line in LineReader::new_with_max_line_length(reader, config.max_line_length) {
        buffer.push_owned(line?).inspect_err(|error| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Rejected input line",
                line_number = report.lines_read + 1,
                error = %error
            );
        })?;
        report.lines_read += 1;
    }
    report.lines_evicted = report.lines_read.saturating_sub(buffer.len());

    for line in buffer.drain_up_to(config.line_count) {
        writer.write_all(&line)?;
        report.lines_written += 1;
    }
    writer.flush()?;

    buffer.destroy();

    tracing::debug!(message = "Finished reading input", report = ?report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn run(input: &str, line_count: usize) -> (String, TailReport) {
        let mut output = Vec::new();
        let config = TailConfig::try_new(line_count, 4095).unwrap();
        let report = tail_lines(input.as_bytes(), &mut output, &config).unwrap();
        (String::from_utf8(output).unwrap(), report)
    }

    #[test_case("a\nb\nc\nd\ne\n", 3, "c\nd\ne\n" ; "keeps the last lines")]
    #[test_case("x\ny\n", 10, "x\ny\n" ; "fewer lines than asked for")]
    #[test_case("a\nb\n", 1, "b\n" ; "one line")]
    #[test_case("", 5, "" ; "empty input")]
    #[test_case("a\nb\nc", 2, "b\nc" ; "last line w/o terminator")]
    #[test_case("a\r\nb\r\n", 1, "b\r\n" ; "carriage returns pass through")]
    fn test_tail_lines_output(input: &str, line_count: usize, expected: &str) {
        let (output, _) = run(input, line_count);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_report() {
        let (_, report) = run("1\n2\n3\n4\n5\n6\n7\n", 3);
        assert_eq!(
            report,
            TailReport {
                lines_read: 7,
                lines_written: 3,
                lines_evicted: 4,
            }
        );

        let (_, report) = run("1\n", 3);
        assert_eq!(
            report,
            TailReport {
                lines_read: 1,
                lines_written: 1,
                lines_evicted: 0,
            }
        );
    }

    #[test]
    fn test_too_long_line_aborts_without_output() {
        let mut output = Vec::new();
        let config = TailConfig {
            line_count: 2,
            max_line_length: 3,
        };
        let result = tail_lines("ok\nnope\nok\n".as_bytes(), &mut output, &config);
        assert!(matches!(
            result,
            Err(TailError::LineTooLong { length: 4, max: 3 })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_non_utf8_input_is_passed_through_verbatim() {
        let mut output = Vec::new();
        let config = TailConfig {
            line_count: 1,
            max_line_length: 4,
        };
        let report = tail_lines(&b"skip\n\xe9t\xe9s\n"[..], &mut output, &config).unwrap();
        assert_eq!(output, b"\xe9t\xe9s\n");
        assert_eq!(report.lines_written, 1);

        let mut input = vec![0xff; 2000];
        input.push(b'\n');
        let mut output = Vec::new();
        tail_lines(&input[..], &mut output, &TailConfig::default()).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_zero_line_count_is_rejected() {
        let mut output = Vec::new();
        let config = TailConfig {
            line_count: 0,
            max_line_length: 10,
        };
        let result = tail_lines("a\n".as_bytes(), &mut output, &config);
        assert!(matches!(
            result,
            Err(TailError::InvalidCapacity { requested: 0 })
        ));
    }

    #[test]
    fn test_write_error_is_reported() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let result = tail_lines("a\n".as_bytes(), BrokenPipe, &TailConfig::default());
        assert!(matches!(result, Err(TailError::Io(error)) if error.kind() == std::io::ErrorKind::BrokenPipe));
    }
}
