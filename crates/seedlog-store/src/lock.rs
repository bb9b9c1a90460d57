use crate::{Error, Result};
use std::fs::File;

/// Holds an exclusive advisory lock on an open file.
///
/// The lock is released when the guard is dropped, so every exit path out
/// of an append (including error paths) unlocks the session log.
pub struct FileLockGuard {
    file: File,
}

impl FileLockGuard {
    /// Acquire an exclusive lock, blocking until it is available.
    pub fn exclusive(file: File) -> Result<Self> {
        lock_exclusive(&file)?;
        Ok(Self { file })
    }
}

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        // Advisory locks are released when the descriptor is closed, but we
        // unlock explicitly so the guard's lifetime is the lock's lifetime.
        let _ = unlock(&self.file);
    }
}

#[cfg(unix)]
fn lock_exclusive(file: &File) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
    if result == 0 {
        Ok(())
    } else {
        Err(Error::Lock(format!(
            "flock failed: {}",
            std::io::Error::last_os_error()
        )))
    }
}

#[cfg(unix)]
fn unlock(file: &File) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_UN) };
    if result == 0 {
        Ok(())
    } else {
        Err(Error::Lock(format!(
            "unlock failed: {}",
            std::io::Error::last_os_error()
        )))
    }
}

// Appends are single short writes through O_APPEND descriptors; without
// advisory locks the kernel still keeps individual writes contiguous.
#[cfg(not(unix))]
fn lock_exclusive(_file: &File) -> Result<()> {
    Ok(())
}

#[cfg(not(unix))]
fn unlock(_file: &File) -> Result<()> {
    Ok(())
}
