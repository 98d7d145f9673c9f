use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::executor::{self, ChildStatus};
use crate::lexer;
use crate::reader::{LineRead, LineReader};

/// The interactive read-tokenize-execute loop.
///
/// Each iteration writes the prompt, acquires one line, splits it into an
/// argument vector and launches it as a child process, blocking until the
/// child reaches a terminal state. Both the line buffer and the argument
/// vector borrowing from it live exactly one iteration; no state crosses
/// over to the next prompt.
///
/// Example
/// ```
/// use std::io::Cursor;
/// use minish::{Interpreter, ShellConfig};
///
/// let sh = Interpreter::new(ShellConfig::default());
/// let mut out = Vec::new();
/// sh.run_session(Cursor::new(b"true\n".to_vec()), &mut out).unwrap();
/// assert_eq!(out, b"minish> minish> ");
/// ```
pub struct Interpreter {
    config: ShellConfig,
}

impl Interpreter {
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Run an interactive session over the process's standard streams.
    ///
    /// Returns when input reaches end-of-stream, or with a process-fatal
    /// error; command-local failures only print a diagnostic and re-prompt.
    pub fn run(&self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_session(stdin.lock(), stdout.lock())
    }

    /// Drive the prompt loop over arbitrary streams until end-of-input.
    ///
    /// This is the testable core of [`run`](Interpreter::run): the prompt is
    /// written and flushed to `output` before every read, and children still
    /// inherit the real standard streams.
    pub fn run_session<R, W>(&self, input: R, mut output: W) -> Result<(), ShellError>
    where
        R: BufRead,
        W: Write,
    {
        let mut reader = LineReader::new(input);
        loop {
            output.write_all(self.config.prompt.as_bytes())?;
            output.flush()?;

            let (line, end_after) = match reader.read_line() {
                Ok(LineRead::Line(line)) => (line, false),
                Ok(LineRead::LastLine(line)) => (line, true),
                Ok(LineRead::Eof) => return Ok(()),
                Err(err) => {
                    self.recover(err)?;
                    continue;
                }
            };
            debug!(line = %line, "acquired command line");

            if let Err(err) = self.run_line(&line) {
                self.recover(err)?;
            }
            if end_after {
                return Ok(());
            }
        }
    }

    /// Tokenize and execute one line. The argument vector borrows from
    /// `line`; both are released when this returns, on every path.
    fn run_line(&self, line: &str) -> Result<(), ShellError> {
        let args = lexer::tokenize(line)?;
        for (index, token) in args.tokens().iter().enumerate() {
            debug!(index, token, "argument");
        }
        match executor::execute(&args)? {
            ChildStatus::Exited(code) => debug!(code, "command exited"),
            ChildStatus::Signaled(signal) => {
                eprintln!("minish: command terminated by signal {signal}");
            }
            // The wait loop only ever returns terminal states.
            ChildStatus::Stopped(_) => {}
        }
        Ok(())
    }

    /// Swallow recoverable errors with a diagnostic; propagate the rest.
    fn recover(&self, err: ShellError) -> Result<(), ShellError> {
        if err.is_fatal() || self.config.strict_limits {
            return Err(err);
        }
        eprintln!("minish: {err}");
        Ok(())
    }
}
