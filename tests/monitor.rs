use std::io::Write;

use tempfile::NamedTempFile;

use semver_stamp::VersionNumber;
use semver_stamp::diagnostics::{FileDevice, MonitorError, MonitorWriter, ProcessMonitor};

fn decode_utf16(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).unwrap()
}

#[test]
fn monitor_writes_messages_to_device() {
    let device = NamedTempFile::new().unwrap();
    let version = VersionNumber::parse("1.0.0-rc.1+build.5").unwrap();

    {
        let monitor =
            ProcessMonitor::open(FileDevice::default(), device.path().to_str().unwrap()).unwrap();
        monitor.write_message("starting;").unwrap();
        monitor
            .write_fmt_message(format_args!("version {}", version))
            .unwrap();
    }

    let content = std::fs::read(device.path()).unwrap();
    assert_eq!(decode_utf16(&content), "starting;version 1.0.0-rc.1+build.5");
}

#[test]
fn monitor_open_fails_for_missing_device() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ProcmonDebugLogger");

    let error = ProcessMonitor::open(FileDevice::default(), path.to_str().unwrap())
        .err()
        .unwrap();

    assert!(matches!(error, MonitorError::Open { .. }));
    assert!(error.to_string().contains("ProcmonDebugLogger"));
}

#[test]
fn closed_monitor_rejects_writes() {
    let device = NamedTempFile::new().unwrap();
    let mut monitor =
        ProcessMonitor::open(FileDevice::default(), device.path().to_str().unwrap()).unwrap();

    monitor.close().unwrap();

    assert!(matches!(
        monitor.write_message("late"),
        Err(MonitorError::Closed)
    ));
    assert!(std::fs::read(device.path()).unwrap().is_empty());
}

#[test]
fn writer_forwards_each_line() {
    let device = NamedTempFile::new().unwrap();
    let monitor =
        ProcessMonitor::open(FileDevice::default(), device.path().to_str().unwrap()).unwrap();
    let mut writer = MonitorWriter::new(monitor);

    writer.write_all(b"first\n").unwrap();
    writer.write_all(b"second\n").unwrap();
    drop(writer);

    let content = std::fs::read(device.path()).unwrap();
    assert_eq!(decode_utf16(&content), "firstsecond");
}
