//! Input readiness over a set of descriptors.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use hostcall_types::{Errno, Fd};

use crate::{
    fs::{FdEntry, Kind},
    runtime::VirtualTaskManagerExt,
    HostEnv, HostResult,
};

/// A select-style timeout: whole seconds plus microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollTimeout {
    pub secs: u64,
    pub micros: u32,
}

impl PollTimeout {
    /// Check once and return immediately.
    pub const ZERO: PollTimeout = PollTimeout { secs: 0, micros: 0 };

    pub const fn new(secs: u64, micros: u32) -> Self {
        Self { secs, micros }
    }

    pub fn to_duration(&self) -> HostResult<Duration> {
        if self.micros >= 1_000_000 {
            return Err(Errno::Inval.into());
        }
        Ok(Duration::new(self.secs, self.micros * 1_000))
    }
}

impl From<Duration> for PollTimeout {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs(), duration.subsec_micros())
    }
}

enum Readiness {
    Ready,
    Pending,
    /// Only the host can tell; ask it through this raw descriptor.
    Host(i32),
}

fn check_ready(entry: &FdEntry) -> HostResult<Readiness> {
    let handle = match &entry.kind {
        // Directories never block a reader.
        Kind::Dir { .. } => return Ok(Readiness::Ready),
        Kind::File { handle } => handle,
    };
    if let Some(available) = handle.bytes_available_read()? {
        return Ok(if available > 0 {
            Readiness::Ready
        } else {
            Readiness::Pending
        });
    }
    Ok(match handle.get_raw_fd() {
        Some(raw_fd) => Readiness::Host(raw_fd),
        None => Readiness::Ready,
    })
}

/// Waits until at least one of `fds` is readable or `timeout` elapses.
///
/// Returns the readable descriptors in the order they were given, or an
/// empty set on timeout. A zero timeout performs exactly one check.
pub(crate) fn poll_readable(
    env: &HostEnv,
    fds: &[Fd],
    timeout: PollTimeout,
) -> HostResult<Vec<Fd>> {
    let timeout = timeout.to_duration()?;
    let deadline = Instant::now().checked_add(timeout);

    let mut targets: Vec<(Fd, Arc<FdEntry>)> = Vec::with_capacity(fds.len());
    for &fd in fds {
        if !targets.iter().any(|(seen, _)| *seen == fd) {
            targets.push((fd, env.fs.resolve(fd)?));
        }
    }

    let mut rounds = 0u64;
    loop {
        rounds += 1;
        let mut ready = Vec::new();
        let mut host = Vec::new();
        for (fd, entry) in &targets {
            match check_ready(entry)? {
                Readiness::Ready => ready.push(*fd),
                Readiness::Pending => {}
                Readiness::Host(raw_fd) => host.push((*fd, raw_fd)),
            }
        }

        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => timeout,
        };

        if ready.is_empty() && host.len() == targets.len() {
            // Everything left is a host descriptor, so the host waits out the
            // whole timeout in one call.
            let ready = if host.is_empty() {
                sleep(env, remaining)?;
                Vec::new()
            } else {
                host_poll(&host, remaining)?
            };
            tracing::trace!(rounds, ready = ready.len(), "poll finished on the host");
            return Ok(ready);
        }

        if !host.is_empty() {
            ready.extend(host_poll(&host, Duration::ZERO)?);
        }
        if !ready.is_empty() || remaining.is_zero() {
            ready.sort_by_key(|fd| targets.iter().position(|(target, _)| target == fd));
            tracing::trace!(rounds, ready = ready.len(), "poll finished");
            return Ok(ready);
        }

        sleep(env, remaining.min(env.poll_interval))?;
    }
}

fn sleep(env: &HostEnv, time: Duration) -> HostResult<()> {
    env.tasks.block_on(env.tasks.sleep_now(time))?;
    Ok(())
}

#[cfg(unix)]
fn host_poll(targets: &[(Fd, i32)], timeout: Duration) -> HostResult<Vec<Fd>> {
    let mut pollfds = targets
        .iter()
        .map(|&(_, raw_fd)| libc::pollfd {
            fd: raw_fd,
            events: libc::POLLIN,
            revents: 0,
        })
        .collect::<Vec<_>>();
    // Round up so that a sub-millisecond timeout still waits.
    let timeout_ms = timeout
        .as_micros()
        .div_ceil(1_000)
        .min(libc::c_int::MAX as u128) as libc::c_int;

    let result = unsafe {
        libc::poll(
            pollfds.as_mut_ptr(),
            pollfds.len() as libc::nfds_t,
            timeout_ms,
        )
    };
    if result < 0 {
        // EINTR surfaces as Errno::Intr; the caller decides whether to retry.
        return Err(std::io::Error::last_os_error().into());
    }

    let mut ready = Vec::new();
    for (&(fd, _), pollfd) in targets.iter().zip(&pollfds) {
        if pollfd.revents & libc::POLLNVAL != 0 {
            return Err(Errno::Badf.into());
        }
        if pollfd.revents & (libc::POLLIN | libc::POLLHUP | libc::POLLERR) != 0 {
            ready.push(fd);
        }
    }
    Ok(ready)
}

// Without poll(2) a host descriptor is assumed readable.
#[cfg(not(unix))]
fn host_poll(targets: &[(Fd, i32)], _timeout: Duration) -> HostResult<Vec<Fd>> {
    Ok(targets.iter().map(|&(fd, _)| fd).collect())
}
