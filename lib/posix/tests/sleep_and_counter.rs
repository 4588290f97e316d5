use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use hostcall::{syscalls, Errno, HostEnv, Pipe};
use pretty_assertions::assert_eq;

fn session() -> HostEnv {
    HostEnv::builder()
        .stdin(Box::new(Pipe::new()))
        .build()
        .unwrap()
}

#[test_log::test]
fn sleep_waits_at_least_the_requested_time() {
    let env = session();
    let start = Instant::now();
    assert_eq!(syscalls::thread_sleep(&env, 25), Ok(()));
    assert!(start.elapsed() >= Duration::from_millis(25));
}

#[test]
fn zero_sleep_lets_other_threads_run() {
    let env = session();
    let flag = Arc::new(AtomicBool::new(false));

    let other = {
        let flag = flag.clone();
        std::thread::spawn(move || flag.store(true, Ordering::SeqCst))
    };

    let mut rounds = 0;
    while !flag.load(Ordering::SeqCst) {
        assert_eq!(syscalls::thread_sleep(&env, 0), Ok(()));
        rounds += 1;
        assert!(rounds < 100_000, "other thread never got scheduled");
    }
    other.join().unwrap();
}

#[test]
fn negative_sleep_is_invalid() {
    let env = session();
    assert_eq!(
        syscalls::thread_sleep(&env, -1).unwrap_err().errno(),
        Errno::Inval
    );
}

#[test]
fn concurrent_increments_are_serialized() {
    let env = Arc::new(session());

    let workers = (0..50)
        .map(|_| {
            let env = env.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    syscalls::counter_increment(&env).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(syscalls::counter_read(&env), 50_000);
}

#[test]
fn sessions_do_not_share_state() {
    let first = session();
    let second = session();

    syscalls::counter_increment(&first).unwrap();
    syscalls::counter_increment(&first).unwrap();
    assert_eq!(syscalls::counter_read(&first), 2);
    assert_eq!(syscalls::counter_read(&second), 0);

    let dir = tempfile::tempdir().unwrap();
    let fd = syscalls::dir_open(&first, dir.path()).unwrap();
    assert!(second.fs().resolve(fd).is_err());
}
