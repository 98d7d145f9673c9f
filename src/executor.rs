//! Spawning the requested program and decoding how it ended.
//!
//! The child inherits the session's standard streams and is resolved through
//! the ambient `PATH` by the spawn primitive itself. The parent blocks until
//! the child reaches a terminal state; commands run strictly one at a time.

use std::io;
use std::process::{Child, Command};

use tracing::debug;

use crate::error::ShellError;
use crate::lexer::ArgVec;

/// Exit code synthesized when the named program cannot be found.
const EXIT_NOT_FOUND: i32 = 127;
/// Exit code synthesized when the named program is not executable.
const EXIT_NOT_EXECUTABLE: i32 = 126;

/// State of a spawned child as reported by the wait primitive.
///
/// `Exited` and `Signaled` are terminal; `Stopped` is transient and only
/// ever observed inside the wait loop, which resumes blocking until a
/// terminal state arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    /// Ran to completion with an exit code.
    Exited(i32),
    /// Terminated by the given signal.
    Signaled(i32),
    /// Suspended by the given signal without exiting.
    Stopped(i32),
}

impl ChildStatus {
    /// Whether no further status change can occur.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChildStatus::Stopped(_))
    }
}

/// Spawn `args` as a child process and block until it terminates.
///
/// Failures to launch the named program (an empty command, a program that
/// does not exist or is not executable) are command-local: they are
/// reported to stderr and come back as an ordinary non-zero
/// [`ChildStatus::Exited`], leaving the session free to continue. Only
/// OS-level spawn and wait failures escape as errors, and those are fatal
/// to the session.
pub fn execute(args: &ArgVec<'_>) -> Result<ChildStatus, ShellError> {
    let Some(program) = args.program() else {
        eprintln!("minish: empty command name");
        return Ok(ChildStatus::Exited(EXIT_NOT_FOUND));
    };
    let mut child = match Command::new(program).args(args.args()).spawn() {
        Ok(child) => child,
        Err(err) => return launch_failure(program, err),
    };
    debug!(pid = child.id(), program, "spawned child");
    let status = wait_child(&mut child)?;
    debug!(?status, "child reached terminal state");
    Ok(status)
}

/// Classify a spawn error: missing or unrunnable programs are command-local,
/// anything else means the OS could not create a process at all.
fn launch_failure(program: &str, err: io::Error) -> Result<ChildStatus, ShellError> {
    match err.kind() {
        io::ErrorKind::NotFound => {
            eprintln!("minish: {program}: command not found");
            Ok(ChildStatus::Exited(EXIT_NOT_FOUND))
        }
        io::ErrorKind::PermissionDenied => {
            eprintln!("minish: {program}: permission denied");
            Ok(ChildStatus::Exited(EXIT_NOT_EXECUTABLE))
        }
        _ => Err(ShellError::Spawn(err)),
    }
}

/// Block until the child reaches a terminal state.
///
/// Stops are observed explicitly (`WUNTRACED`) so the state machine is
/// visible in the traces, but they do not end the wait: the kernel reports a
/// stop once, so the next `waitpid` simply blocks until the child exits or
/// is killed. There is no busy-polling here.
#[cfg(unix)]
fn wait_child(child: &mut Child) -> Result<ChildStatus, ShellError> {
    use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(child.id() as i32);
    loop {
        let status = waitpid(pid, Some(WaitPidFlag::WUNTRACED))
            .map_err(|errno| ShellError::Wait(errno.into()))?;
        match status {
            WaitStatus::Exited(_, code) => return Ok(ChildStatus::Exited(code)),
            WaitStatus::Signaled(_, signal, _) => {
                return Ok(ChildStatus::Signaled(signal as i32));
            }
            WaitStatus::Stopped(_, signal) => {
                let transient = ChildStatus::Stopped(signal as i32);
                debug!(?transient, "child stopped, resuming wait");
            }
            // Continued/ptrace reports cannot occur with these flags.
            _ => {}
        }
    }
}

#[cfg(not(unix))]
fn wait_child(child: &mut Child) -> Result<ChildStatus, ShellError> {
    let status = child.wait().map_err(ShellError::Wait)?;
    Ok(ChildStatus::Exited(status.code().unwrap_or(-1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn run(line: &str) -> Result<ChildStatus, ShellError> {
        let args = tokenize(line).unwrap();
        execute(&args)
    }

    #[test]
    #[cfg(unix)]
    fn successful_command_exits_zero() {
        assert_eq!(run("true").unwrap(), ChildStatus::Exited(0));
    }

    #[test]
    #[cfg(unix)]
    fn failing_command_reports_its_code() {
        assert_eq!(run("false").unwrap(), ChildStatus::Exited(1));
    }

    #[test]
    #[cfg(unix)]
    fn arbitrary_exit_codes_are_decoded() {
        let mut child = Command::new("sh").args(["-c", "exit 7"]).spawn().unwrap();
        assert_eq!(wait_child(&mut child).unwrap(), ChildStatus::Exited(7));
    }

    #[test]
    fn missing_program_is_command_local() {
        assert_eq!(
            run("not_a_real_binary_xyz").unwrap(),
            ChildStatus::Exited(EXIT_NOT_FOUND)
        );
    }

    #[test]
    fn empty_command_is_command_local() {
        assert_eq!(run("   ").unwrap(), ChildStatus::Exited(EXIT_NOT_FOUND));
    }

    #[test]
    #[cfg(unix)]
    fn killed_child_reports_the_signal() {
        let mut child = Command::new("sh")
            .args(["-c", "kill -9 $$"])
            .spawn()
            .unwrap();
        assert_eq!(wait_child(&mut child).unwrap(), ChildStatus::Signaled(9));
    }

    #[test]
    #[cfg(unix)]
    fn non_executable_file_is_command_local() {
        use std::fs::File;
        use std::io::Write as _;

        let dir = std::env::temp_dir().join(format!("minish_exec_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plain_file");
        File::create(&path)
            .unwrap()
            .write_all(b"not a program")
            .unwrap();

        let path_str = path.to_str().unwrap().to_string();
        let args = tokenize(&path_str).unwrap();
        assert_eq!(
            execute(&args).unwrap(),
            ChildStatus::Exited(EXIT_NOT_EXECUTABLE)
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn stopped_is_the_only_transient_state() {
        assert!(ChildStatus::Exited(0).is_terminal());
        assert!(ChildStatus::Signaled(9).is_terminal());
        assert!(!ChildStatus::Stopped(19).is_terminal());
    }
}
