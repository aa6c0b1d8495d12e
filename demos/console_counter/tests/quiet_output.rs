use pretty_assertions::assert_eq;
use std::process::{Command, Stdio};

fn run_quiet(script: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_console_counter"))
        .args(["--quiet", "--script", script])
        .env("RUST_LOG", "trace")
        .stdin(Stdio::null())
        .output()
        .expect("console_counter should run")
}

#[test]
fn quiet_stdout_is_only_counter_text() {
    let output = run_quiet("+,+,reset");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n1\n2\n0\n");
}

#[test]
fn logs_go_to_stderr() {
    let output = run_quiet("+");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tally::counter"), "stderr was: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr should not be colourised");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n1\n");
}
