//! End-to-end sessions driven through in-memory streams.
//!
//! Children spawned here inherit the test harness's standard streams, so the
//! assertions focus on session outcomes and prompt behavior rather than on
//! child output capture.

use std::io::Cursor;

use minish::{Interpreter, ShellConfig, ShellError};

fn run_session(input: &str) -> (Result<(), ShellError>, String) {
    let sh = Interpreter::new(ShellConfig::default());
    let mut out = Vec::new();
    let result = sh.run_session(Cursor::new(input.as_bytes().to_vec()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn prompts(out: &str) -> usize {
    out.matches(minish::config::DEFAULT_PROMPT).count()
}

#[test]
#[cfg(unix)]
fn echo_command_completes_and_reprompts() {
    let (result, out) = run_session("echo hello world\n");
    result.unwrap();
    assert_eq!(prompts(&out), 2);
}

#[test]
fn whitespace_only_line_is_a_local_failure() {
    let (result, out) = run_session("   \n");
    result.unwrap();
    // The empty command name failed locally and the prompt reappeared.
    assert_eq!(prompts(&out), 2);
}

#[test]
fn nonexistent_program_keeps_the_session_alive() {
    let (result, out) = run_session("not_a_real_binary_xyz --flag\ntrue\n");
    result.unwrap();
    assert_eq!(prompts(&out), 3);
}

#[test]
fn eof_without_trailing_newline_ends_cleanly() {
    let (result, _) = run_session("true");
    result.unwrap();
}

#[test]
#[cfg(unix)]
fn exit_codes_do_not_leak_between_commands() {
    // A failing command followed by a succeeding one; neither ends the loop.
    let (result, out) = run_session("false\ntrue\nfalse\n");
    result.unwrap();
    assert_eq!(prompts(&out), 4);
}

#[test]
#[cfg(unix)]
fn signaled_child_is_reported_and_loop_continues() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    // There is no quoting support, so a self-killing command has to be a
    // single token: a throwaway script run by path.
    let dir = std::env::temp_dir().join(format!("minish_session_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let script = dir.join("selfkill.sh");
    fs::write(&script, "#!/bin/sh\nkill -9 $$\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let input = format!("{}\ntrue\n", script.display());
    let (result, out) = run_session(&input);
    let _ = fs::remove_dir_all(dir);

    result.unwrap();
    assert_eq!(prompts(&out), 3);
}
