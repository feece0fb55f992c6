//! Device access for the process monitor

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

#[cfg(test)]
use mockall::automock;

/// Opaque handle to an opened device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(u64);

impl DeviceHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Trait for the operating system calls the monitor depends on
#[cfg_attr(test, automock)]
pub trait DeviceApi: Send + Sync {
    /// Open an existing device for writing
    fn open(&self, path: &str) -> io::Result<DeviceHandle>;

    /// Write a payload to an opened device, returning the bytes written
    fn write(&self, handle: DeviceHandle, payload: &[u8]) -> io::Result<usize>;

    /// Release an opened device
    fn close(&self, handle: DeviceHandle) -> io::Result<()>;
}

/// Device access through the file system
///
/// Devices are opened like files, without creating them when missing.
#[derive(Debug, Default)]
pub struct FileDevice {
    files: Mutex<HashMap<DeviceHandle, File>>,
    next_handle: AtomicU64,
}

impl FileDevice {
    fn lock_files(&self) -> io::Result<MutexGuard<'_, HashMap<DeviceHandle, File>>> {
        self.files
            .lock()
            .map_err(|_| io::Error::other("device table lock poisoned"))
    }
}

fn invalid_handle(handle: DeviceHandle) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid device handle {}", handle.raw()),
    )
}

impl DeviceApi for FileDevice {
    fn open(&self, path: &str) -> io::Result<DeviceHandle> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let handle = DeviceHandle(self.next_handle.fetch_add(1, Ordering::Relaxed) + 1);
        self.lock_files()?.insert(handle, file);
        Ok(handle)
    }

    fn write(&self, handle: DeviceHandle, payload: &[u8]) -> io::Result<usize> {
        let mut files = self.lock_files()?;
        let file = files.get_mut(&handle).ok_or_else(|| invalid_handle(handle))?;
        file.write_all(payload)?;
        Ok(payload.len())
    }

    fn close(&self, handle: DeviceHandle) -> io::Result<()> {
        self.lock_files()?
            .remove(&handle)
            .map(drop)
            .ok_or_else(|| invalid_handle(handle))
    }
}
