// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the line buffer, the line reader, and the read loop.
//!
//! Library functions return [`Result<T, TailError>`] so that callers can match on the
//! kind of failure. Binaries convert into [`CommonResult`] with `?`, which turns the
//! [`TailError`] into a [`miette::Report`] w/ its diagnostic code and help text.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`TailError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Everything that can go wrong while buffering and printing the last lines of an input.
///
/// | Variant               | Cause                                                   |
/// | :-------------------- | :------------------------------------------------------ |
/// | [`Allocation`]        | The slot storage or a line copy could not be allocated  |
/// | [`LineTooLong`]       | An input line is longer than the configured maximum     |
/// | [`InvalidCapacity`]   | The requested number of lines is zero                   |
/// | [`Io`]                | Reading the input or writing the output failed          |
/// | [`FileOpen`]          | The input file could not be opened                      |
///
/// [`Allocation`]: Self::Allocation
/// [`LineTooLong`]: Self::LineTooLong
/// [`InvalidCapacity`]: Self::InvalidCapacity
/// [`Io`]: Self::Io
/// [`FileOpen`]: Self::FileOpen
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TailError {
    #[error("Could not allocate memory for the {what}")]
    #[diagnostic(
        code(tailn::allocation),
        help("The system ran out of memory. Try asking for fewer lines w/ `-n`.")
    )]
    Allocation {
        /// What was being allocated (`"line slots"` or `"line copy"`).
        what: &'static str,
    },

    #[error("Line is too long: {length} bytes, the maximum is {max} bytes")]
    #[diagnostic(
        code(tailn::line_too_long),
        help("Lines are rejected, not truncated. Raise the limit w/ `--max-line-length`.")
    )]
    LineTooLong {
        /// Length of the offending line, not counting its terminator.
        length: usize,
        max: usize,
    },

    #[error("Invalid number of lines: {requested}")]
    #[diagnostic(
        code(tailn::invalid_capacity),
        help("The number of lines must be at least 1")
    )]
    InvalidCapacity { requested: usize },

    #[error("Could not read the input or write the output")]
    #[diagnostic(code(tailn::io))]
    Io(#[from] std::io::Error),

    #[error("Could not open file: '{path}'")]
    #[diagnostic(
        code(tailn::file_open),
        help("Check that the file exists and that you have permission to read it")
    )]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TailError::LineTooLong {
                length: 5000,
                max: 4095
            }
            .to_string(),
            "Line is too long: 5000 bytes, the maximum is 4095 bytes"
        );
        assert_eq!(
            TailError::InvalidCapacity { requested: 0 }.to_string(),
            "Invalid number of lines: 0"
        );
        assert_eq!(
            TailError::Allocation { what: "line copy" }.to_string(),
            "Could not allocate memory for the line copy"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = TailError::InvalidCapacity { requested: 0 }
            .code()
            .map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("tailn::invalid_capacity"));

        let io_error = std::io::Error::other("boom");
        let code = TailError::from(io_error).code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("tailn::io"));
    }

    #[test]
    fn test_converts_into_common_result() {
        fn fails() -> CommonResult<()> {
            let result: Result<(), TailError> =
                Err(TailError::InvalidCapacity { requested: 0 });
            result?;
            Ok(())
        }

        let report = fails().unwrap_err();
        assert!(matches!(
            report.downcast_ref::<TailError>(),
            Some(TailError::InvalidCapacity { requested: 0 })
        ));
    }
}
