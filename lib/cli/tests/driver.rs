use std::{fs, io::Read, path::Path, process::Stdio};

use assert_cmd::{cargo::CommandCargoExt, Command};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn hostcall(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hostcall").unwrap();
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cat_concatenates_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("f1"), "ab")?;
    fs::write(dir.path().join("f2"), "cd")?;

    hostcall(dir.path())
        .args(["cat", "f1", "f2"])
        .assert()
        .success()
        .stdout("abcd");

    Ok(())
}

#[test]
fn cat_stops_at_the_first_unopenable_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("f1"), "ab")?;
    fs::write(dir.path().join("f3"), "ef")?;

    hostcall(dir.path())
        .args(["cat", "f1", "missing", "f3"])
        .assert()
        .code(1)
        .stdout("ab")
        .stderr(predicates::str::contains("missing"))
        .stderr(predicates::str::contains("No such file or directory"));

    Ok(())
}

#[test]
fn cat_of_a_directory_is_a_read_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("sub"))?;

    hostcall(dir.path())
        .args(["cat", "sub"])
        .assert()
        .code(1)
        .stdout("");

    Ok(())
}

#[test]
fn ls_lists_and_repeats() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    for name in ["b.txt", "a.txt"] {
        fs::write(dir.path().join(name), name)?;
    }

    hostcall(dir.path())
        .args(["ls", "."])
        .assert()
        .success()
        .stdout("./a.txt\n./b.txt\n");

    hostcall(dir.path())
        .args(["ls", ".", "repeat"])
        .assert()
        .success()
        .stdout("./a.txt\n./b.txt\n./a.txt\n./b.txt\n");

    Ok(())
}

#[test]
fn ls_reports_non_directories_and_missing_paths() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("plain"), "x")?;

    hostcall(dir.path())
        .args(["ls", "plain"])
        .assert()
        .success()
        .stdout("ENOTDIR\n");

    hostcall(dir.path())
        .args(["ls", "missing"])
        .assert()
        .success()
        .stdout("No such file or directory\n");

    Ok(())
}

#[test]
fn stat_reports_the_four_preopened_descriptors() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let assert = hostcall(dir.path()).arg("stat").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 4);
    assert!(predicate::str::is_match("^stdin isatty: (true|false)$")?.eval(lines[0]));
    // Both output streams are captured by the test harness.
    assert_eq!(
        lines[1..].to_vec(),
        vec!["stdout isatty: false", "stderr isatty: false", "/ isatty: false"]
    );

    Ok(())
}

#[test]
fn poll_sees_pending_input() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    hostcall(dir.path())
        .args(["poll", "1", "0"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("STDIN\n");

    Ok(())
}

#[test]
fn poll_times_out_without_input() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut child = std::process::Command::cargo_bin("hostcall")?
        .arg("--root")
        .arg(dir.path())
        .args(["poll", "0", "100000"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    // Keep our end of stdin open so the child sees no data and no hangup.
    let stdin = child.stdin.take();
    let mut stdout = String::new();
    child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("no stdout"))?
        .read_to_string(&mut stdout)?;
    let status = child.wait()?;
    drop(stdin);

    assert!(status.success());
    assert_eq!(stdout, "NOINPUT\n");

    Ok(())
}

#[test]
fn sleepmillis_reports_ok_and_err() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    hostcall(dir.path())
        .args(["sleepmillis", "10"])
        .assert()
        .success()
        .stdout("OK\n");

    hostcall(dir.path())
        .args(["sleepmillis", "0"])
        .assert()
        .success()
        .stdout("OK\n");

    hostcall(dir.path())
        .args(["sleepmillis", "-5"])
        .assert()
        .success()
        .stdout("ERR\n");

    Ok(())
}

#[test]
fn mutex_counts_every_increment() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    hostcall(dir.path())
        .arg("mutex")
        .assert()
        .success()
        .stdout("50000\n");

    hostcall(dir.path())
        .args(["mutex", "4", "25"])
        .assert()
        .success()
        .stdout("100\n");

    Ok(())
}

#[test]
fn unknown_commands_exit_with_one() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    hostcall(dir.path())
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout("");

    Ok(())
}

#[test]
fn logs_never_reach_stdout() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.txt"), "a")?;

    hostcall(dir.path())
        .env("RUST_LOG", "hostcall=debug")
        .env("NO_COLOR", "1")
        .args(["ls", "."])
        .assert()
        .success()
        .stdout("./a.txt\n")
        .stderr(predicates::str::contains("host environment created"));

    Ok(())
}
