//! Vocabulary shared between the hostcall emulation core and whatever
//! dispatcher decodes guest requests into calls on it.

mod errno;

#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

pub use self::errno::Errno;

/// A guest-visible file descriptor.
pub type Fd = u32;

pub const STDIN_FILENO: Fd = 0;
pub const STDOUT_FILENO: Fd = 1;
pub const STDERR_FILENO: Fd = 2;
/// Descriptor the preopened root directory is bound to, when there is one.
pub const ROOT_FILENO: Fd = 3;

/// The type of a file descriptor or directory entry.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Filetype {
    #[default]
    Unknown,
    CharacterDevice,
    Directory,
    RegularFile,
    SymbolicLink,
}
