//! Forward `tracing` output to the process monitor

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::diagnostics::device::{DeviceApi, FileDevice};
use crate::diagnostics::monitor::ProcessMonitor;

/// A `fmt` layer writer that sends every formatted event to a shared
/// `ProcessMonitor`. The device is released when the last clone is dropped.
pub struct MonitorWriter<D: DeviceApi = FileDevice> {
    monitor: Arc<Mutex<ProcessMonitor<D>>>,
}

impl<D: DeviceApi> MonitorWriter<D> {
    pub fn new(monitor: ProcessMonitor<D>) -> Self {
        Self {
            monitor: Arc::new(Mutex::new(monitor)),
        }
    }
}

impl<D: DeviceApi> Clone for MonitorWriter<D> {
    fn clone(&self) -> Self {
        Self {
            monitor: Arc::clone(&self.monitor),
        }
    }
}

impl<D: DeviceApi> io::Write for MonitorWriter<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let message = text.trim_end_matches(['\r', '\n']);
        if message.is_empty() {
            return Ok(buf.len());
        }

        let monitor = self
            .monitor
            .lock()
            .map_err(|_| io::Error::other("process monitor lock poisoned"))?;
        monitor.write_message(message).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a, D: DeviceApi> MakeWriter<'a> for MonitorWriter<D> {
    type Writer = MonitorWriter<D>;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
