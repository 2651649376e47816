//! Pid file utilities for bridge single-instance management
//!
//! The bridge records its pid so a later setup run can find and stop a
//! previous instance before binding its own listener. The file is
//! advisory: a malformed one is treated as absent rather than fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read the pid recorded at `path`
///
/// Returns `Ok(None)` when the file is missing or its content does not
/// parse as a pid. I/O errors other than "not found" are returned.
pub fn read(path: &Path) -> io::Result<Option<u32>> {
    match fs::read_to_string(path) {
        Ok(contents) => match contents.trim().parse::<u32>() {
            Ok(pid) => Ok(Some(pid)),
            Err(_) => {
                tracing::warn!("Ignoring malformed pid file {}", path.display());
                Ok(None)
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Record `pid` at `path`, creating parent directories as needed
pub fn write(path: &Path, pid: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", pid))
}

/// Remove the pid file
///
/// Returns `Ok(())` even if the file doesn't exist.
pub fn remove(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Check if a process with the given pid is still alive
///
/// On Unix, uses kill(pid, 0); on Windows, OpenProcess.
#[cfg(unix)]
pub fn is_alive(pid: u32) -> bool {
    // kill(pid, 0) probes existence without signalling. EPERM means the
    // process exists but belongs to someone else.
    unsafe {
        let result = libc::kill(pid as libc::pid_t, 0);
        if result == 0 {
            return true;
        }
        let err = std::io::Error::last_os_error();
        err.raw_os_error() == Some(libc::EPERM)
    }
}

#[cfg(windows)]
pub fn is_alive(pid: u32) -> bool {
    use windows_sys::Win32::Foundation::CloseHandle;
    use windows_sys::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION};

    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
        if handle.is_null() {
            return false;
        }
        CloseHandle(handle);
        true
    }
}

/// Ask the process with the given pid to terminate
///
/// Unix sends SIGTERM; Windows terminates the process handle. Either way
/// the caller is responsible for waiting until the process actually
/// exits.
#[cfg(unix)]
pub fn terminate(pid: u32) -> io::Result<()> {
    let result = unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) };
    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(windows)]
pub fn terminate(pid: u32) -> io::Result<()> {
    use windows_sys::Win32::Foundation::CloseHandle;
    use windows_sys::Win32::System::Threading::{OpenProcess, TerminateProcess, PROCESS_TERMINATE};

    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, 0, pid);
        if handle.is_null() {
            return Err(io::Error::last_os_error());
        }
        let result = TerminateProcess(handle, 0);
        CloseHandle(handle);
        if result == 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

/// Guard that removes the pid file when dropped
///
/// Keeps the file tied to the lifetime of the instance that wrote it,
/// including on panic.
pub struct PidFileGuard {
    path: PathBuf,
}

impl PidFileGuard {
    /// Write the pid file and return a guard for it
    pub fn new(path: PathBuf, pid: u32) -> io::Result<Self> {
        write(&path, pid)?;
        Ok(Self { path })
    }
}

impl Drop for PidFileGuard {
    fn drop(&mut self) {
        if let Err(e) = remove(&self.path) {
            tracing::warn!("Failed to remove pid file {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_pid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bridge.pid");
        assert!(read(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read_pid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bridge.pid");

        write(&path, 12345).unwrap();
        assert_eq!(read(&path).unwrap(), Some(12345));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/bridge.pid");

        write(&path, 42).unwrap();
        assert_eq!(read(&path).unwrap(), Some(42));
    }

    #[test]
    fn test_malformed_pid_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bridge.pid");

        fs::write(&path, "not a pid").unwrap();
        assert!(read(&path).unwrap().is_none());
    }

    #[test]
    fn test_remove_nonexistent_pid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.pid");
        // Should not error
        remove(&path).unwrap();
    }

    #[test]
    fn test_current_process_is_alive() {
        assert!(is_alive(std::process::id()));
    }

    #[test]
    fn test_invalid_pid_not_alive() {
        // Very high pids are vanishingly unlikely to be real processes
        assert!(!is_alive(999999999));
    }

    #[test]
    fn test_pid_file_guard_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guard.pid");

        {
            let _guard = PidFileGuard::new(path.clone(), 12345).unwrap();
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_terminate_stops_child() {
        use std::process::Command;

        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        let pid = child.id();
        assert!(is_alive(pid));

        terminate(pid).unwrap();
        let status = child.wait().unwrap();
        assert!(!status.success());
    }
}
