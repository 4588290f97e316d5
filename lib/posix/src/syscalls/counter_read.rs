use super::*;

/// ### `counter_read()`
/// Reads the session's shared counter
pub fn counter_read(env: &HostEnv) -> u64 {
    env.counter.read()
}
