use std::io;

/// Errors produced by the pipeline stages.
///
/// Two tiers exist: process-fatal errors end the whole session, while the
/// limit overflows only discard the current line and re-prompt (unless the
/// session runs with [`strict_limits`](crate::ShellConfig::strict_limits),
/// which promotes them to fatal). The tier is queried via [`is_fatal`].
///
/// [`is_fatal`]: ShellError::is_fatal
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The input line grew past the hard buffer cap.
    #[error("input line exceeds {limit} bytes")]
    LineTooLong {
        /// The configured cap, [`reader::LINE_BUF_MAX`](crate::reader::LINE_BUF_MAX).
        limit: usize,
    },
    /// The line split into more tokens than the argument vector may hold.
    #[error("command has more than {limit} arguments")]
    TooManyArguments {
        /// The configured cap, [`lexer::ARGV_MAX`](crate::lexer::ARGV_MAX).
        limit: usize,
    },
    /// Reading from the input stream or writing the prompt failed.
    #[error("stream error: {0}")]
    Io(#[from] io::Error),
    /// The operating system could not create a child process at all.
    ///
    /// Distinct from the named program merely not existing, which is a
    /// command-local failure handled inside [`executor::execute`](crate::executor::execute).
    #[error("could not spawn child process: {0}")]
    Spawn(io::Error),
    /// Querying the child's status failed.
    #[error("failed to query child status: {0}")]
    Wait(io::Error),
}

impl ShellError {
    /// Whether this error must end the session regardless of configuration.
    pub fn is_fatal(&self) -> bool {
        match self {
            ShellError::LineTooLong { .. } | ShellError::TooManyArguments { .. } => false,
            ShellError::Io(_) | ShellError::Spawn(_) | ShellError::Wait(_) => true,
        }
    }
}
