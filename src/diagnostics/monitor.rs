//! Process monitor debug output
//!
//! The process monitor exposes a debug device that accepts UTF-16 text. A
//! `ProcessMonitor` owns one open handle to that device and releases it when
//! closed or dropped, whichever comes first.

use std::fmt;
use std::io;

use thiserror::Error;
use tracing::debug;

use crate::diagnostics::device::{DeviceApi, DeviceHandle, FileDevice};

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to open device {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to device: {0}")]
    Write(#[source] io::Error),

    #[error("Failed to release device: {0}")]
    Close(#[source] io::Error),

    #[error("Device has already been released")]
    Closed,
}

impl MonitorError {
    /// OS error code reported by the device call, if any
    pub fn os_code(&self) -> Option<i32> {
        match self {
            MonitorError::Open { source, .. } => source.raw_os_error(),
            MonitorError::Write(source) | MonitorError::Close(source) => source.raw_os_error(),
            MonitorError::Closed => None,
        }
    }
}

pub struct ProcessMonitor<D: DeviceApi = FileDevice> {
    api: D,
    handle: Option<DeviceHandle>,
}

impl<D: DeviceApi> ProcessMonitor<D> {
    pub fn open(api: D, path: &str) -> Result<Self, MonitorError> {
        let handle = api.open(path).map_err(|source| MonitorError::Open {
            path: path.to_string(),
            source,
        })?;
        debug!("Opened process monitor device {}", path);

        Ok(Self {
            api,
            handle: Some(handle),
        })
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Write one message to the device as UTF-16LE
    pub fn write_message(&self, message: &str) -> Result<(), MonitorError> {
        let handle = self.handle.ok_or(MonitorError::Closed)?;
        let payload: Vec<u8> = message.encode_utf16().flat_map(u16::to_le_bytes).collect();
        self.api
            .write(handle, &payload)
            .map(drop)
            .map_err(MonitorError::Write)
    }

    /// Format and write one message
    pub fn write_fmt_message(&self, args: fmt::Arguments<'_>) -> Result<(), MonitorError> {
        self.write_message(&args.to_string())
    }

    /// Release the device. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<(), MonitorError> {
        match self.handle.take() {
            Some(handle) => self.api.close(handle).map_err(MonitorError::Close),
            None => Ok(()),
        }
    }
}

impl<D: DeviceApi> Drop for ProcessMonitor<D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.api.close(handle);
        }
    }
}
