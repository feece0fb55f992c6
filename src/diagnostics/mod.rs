//! Diagnostics output to the process monitor
//!
//! - [`device`]: Device API trait and its file system implementation
//! - [`monitor`]: Owns an open device handle and writes messages to it
//! - [`writer`]: Adapter that forwards `tracing` output to a monitor

pub mod device;
pub mod monitor;
pub mod writer;

pub use device::{DeviceApi, DeviceHandle, FileDevice};
pub use monitor::{MonitorError, ProcessMonitor};
pub use writer::MonitorWriter;
