use std::{process::Stdio, time::Duration};

use tokio::{io::AsyncWriteExt, process::Command, time::timeout};

const DEADLINE: Duration = Duration::from_secs(20);

struct Session {
    stdout: String,
    stderr: String,
    success: bool,
}

impl Session {
    fn lines(&self) -> Vec<&str> {
        self.stdout.lines().map(str::trim).collect()
    }
}

async fn run_shell(input: &str) -> Session {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eliash"))
        .env_remove("ELIASH_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).await.unwrap();
    drop(stdin);

    let output = timeout(DEADLINE, child.wait_with_output())
        .await
        .expect("shell did not finish in time")
        .unwrap();

    Session {
        stdout: String::from_utf8_lossy(&output.stdout).replace("$ ", ""),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    }
}

#[tokio::test]
async fn pipe_feeds_left_output_to_right() {
    let session = run_shell("echo hello | wc -l\n").await;

    assert_eq!(session.lines(), vec!["1"]);
    assert!(session.success);
}

#[tokio::test]
async fn absolute_program_paths_work() {
    let session = run_shell("/bin/echo hello\n").await;

    assert_eq!(session.lines(), vec!["hello"]);
}

#[tokio::test]
async fn pipeline_terminates_when_reader_exits_early() {
    let session = run_shell("yes | head -n 1\n").await;

    assert_eq!(session.lines(), vec!["y"]);
}

#[tokio::test]
async fn parse_error_is_reported_and_loop_continues() {
    let session = run_shell("echo a | \necho still here\n").await;

    assert!(session.stderr.contains("missing command on right side of pipe"));
    assert_eq!(session.lines(), vec!["still here"]);
    assert!(session.success);
}

#[tokio::test]
async fn unknown_program_fails_only_its_child() {
    let session = run_shell("eliash-test-no-such-program\necho after\n").await;

    assert!(session
        .stderr
        .contains("eliash-test-no-such-program: command not found"));
    assert_eq!(session.lines(), vec!["after"]);
}

#[tokio::test]
async fn cd_changes_directory_for_later_commands() {
    let session = run_shell("cd /\npwd\ncd /eliash-test-nonexistent\npwd\n").await;

    assert!(session.stderr.contains("cd: /eliash-test-nonexistent"));
    assert_eq!(session.lines(), vec!["/", "/"]);
}

#[tokio::test]
async fn chained_pipes_are_rejected() {
    let session = run_shell("echo a | cat | cat\n").await;

    assert!(session.stderr.contains("only one pipe per line"));
    assert!(session.stdout.trim().is_empty());
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let session = run_shell("").await;

    assert!(session.success);
    assert!(session.stdout.is_empty());
}
