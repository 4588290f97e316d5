use std::{
    io::Write,
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

use hostcall::{syscalls, Errno, HostEnv, Pipe, PollTimeout, STDIN_FILENO};
use pretty_assertions::assert_eq;

/// A session whose stdin is the read end of a host pipe.
#[cfg(unix)]
fn host_stdin_session() -> (HostEnv, std::io::PipeWriter) {
    let (reader, writer) = std::io::pipe().unwrap();
    let env = HostEnv::builder()
        .stdin(Box::new(hostcall::fs::Stdin::from_owned_fd(reader.into())))
        .build()
        .unwrap();
    (env, writer)
}

fn session_with_stdin(stdin: &Pipe) -> HostEnv {
    HostEnv::builder()
        .stdin(Box::new(stdin.clone()))
        .poll_interval(Duration::from_millis(2))
        .build()
        .unwrap()
}

#[test_log::test]
fn zero_timeout_checks_once() {
    let stdin = Pipe::new();
    let env = session_with_stdin(&stdin);

    let start = Instant::now();
    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::ZERO).unwrap();
    assert_eq!(ready, Vec::<u32>::new());
    assert!(start.elapsed() < Duration::from_secs(1));

    stdin.clone().write_all(b"x").unwrap();
    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::ZERO).unwrap();
    assert_eq!(ready, vec![STDIN_FILENO]);
}

#[test]
fn timeout_elapses_without_input() {
    let stdin = Pipe::new();
    let env = session_with_stdin(&stdin);

    let start = Instant::now();
    let ready =
        syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::new(0, 50_000)).unwrap();
    assert!(ready.is_empty());
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[test]
fn input_arriving_mid_wait_wakes_the_poller() {
    let stdin = Pipe::new();
    let env = Arc::new(session_with_stdin(&stdin));

    let mut writer = stdin.clone();
    let feeder = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(30));
        writer.write_all(b"late").unwrap();
    });

    let start = Instant::now();
    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::new(10, 0)).unwrap();
    assert_eq!(ready, vec![STDIN_FILENO]);
    assert!(start.elapsed() < Duration::from_secs(10));
    feeder.join().unwrap();
}

#[test]
fn files_and_directories_are_always_ready() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data"), "d").unwrap();
    let stdin = Pipe::new();
    let env = HostEnv::builder()
        .stdin(Box::new(stdin.clone()))
        .root(dir.path())
        .build()
        .unwrap();

    let file = env.new_open_options().read(true).open("data").unwrap();
    let listing = syscalls::dir_open(&env, Path::new("/")).unwrap();

    let ready = syscalls::poll_readable(
        &env,
        &[listing, STDIN_FILENO, file, listing],
        PollTimeout::ZERO,
    )
    .unwrap();
    assert_eq!(ready, vec![listing, file]);
}

#[test]
fn bad_arguments_fail_before_waiting() {
    let stdin = Pipe::new();
    let env = session_with_stdin(&stdin);

    let err = syscalls::poll_readable(&env, &[STDIN_FILENO, 77], PollTimeout::new(5, 0))
        .unwrap_err();
    assert_eq!(err.errno(), Errno::Badf);

    let err = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::new(0, 1_000_000))
        .unwrap_err();
    assert_eq!(err.errno(), Errno::Inval);
}

#[test]
fn empty_set_waits_out_the_timeout() {
    let stdin = Pipe::new();
    let env = session_with_stdin(&stdin);

    let start = Instant::now();
    let ready = syscalls::poll_readable(&env, &[], PollTimeout::new(0, 20_000)).unwrap();
    assert!(ready.is_empty());
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[cfg(unix)]
#[test_log::test]
fn partially_read_host_input_is_still_ready() {
    let (env, mut writer) = host_stdin_session();
    writer.write_all(b"ab").unwrap();

    let mut byte = [0u8; 1];
    assert_eq!(syscalls::fd_read(&env, STDIN_FILENO, &mut byte), Ok(1));
    assert_eq!(&byte, b"a");

    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::ZERO).unwrap();
    assert_eq!(ready, vec![STDIN_FILENO]);
    assert_eq!(syscalls::fd_read(&env, STDIN_FILENO, &mut byte), Ok(1));
    assert_eq!(&byte, b"b");

    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::ZERO).unwrap();
    assert!(ready.is_empty());
}

#[cfg(unix)]
#[test]
fn readiness_checks_do_not_wait_behind_a_blocked_reader() {
    let (env, mut writer) = host_stdin_session();
    let env = Arc::new(env);

    let reader = {
        let env = env.clone();
        std::thread::spawn(move || {
            let mut buf = [0u8; 4];
            syscalls::fd_read(&env, STDIN_FILENO, &mut buf)
        })
    };
    std::thread::sleep(Duration::from_millis(50));

    let start = Instant::now();
    let ready = syscalls::poll_readable(&env, &[STDIN_FILENO], PollTimeout::ZERO).unwrap();
    assert_eq!(syscalls::fd_isatty(&env, STDIN_FILENO), Ok(false));
    assert!(start.elapsed() < Duration::from_secs(1));
    assert!(ready.is_empty());

    writer.write_all(b"go").unwrap();
    assert_eq!(reader.join().unwrap(), Ok(2));
}
