//! Unit tests for the procfs readers

use hostpulse_application::ports::{CpuCounterSource, LoadAverageSource};
use hostpulse_domain::{CpuCategory, Error};
use hostpulse_infrastructure::adapters::{ProcLoadAverageSource, ProcStatCounterSource};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_reads_aggregate_counters_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stat");
    fs::write(
        &path,
        "cpu  100 0 100 700 5 1 1 0 0 0\ncpu0 50 0 50 350 2 0 0 0 0 0\nctxt 42\n",
    )
    .unwrap();

    let snapshot = ProcStatCounterSource::new(&path).read_snapshot().await.unwrap();

    assert_eq!(snapshot.get(CpuCategory::User), 100);
    assert_eq!(snapshot.get(CpuCategory::Idle), 700);
    assert_eq!(snapshot.get(CpuCategory::Iowait), 5);
}

#[tokio::test]
async fn test_each_read_sees_current_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stat");
    let source = ProcStatCounterSource::new(&path);

    fs::write(&path, "cpu 1 2 3 4\n").unwrap();
    let first = source.read_snapshot().await.unwrap();
    fs::write(&path, "cpu 5 6 7 8\n").unwrap();
    let second = source.read_snapshot().await.unwrap();

    assert_eq!(first.total(), 10);
    assert_eq!(second.total(), 26);
}

#[tokio::test]
async fn test_missing_stat_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let source = ProcStatCounterSource::new(dir.path().join("absent"));

    match source.read_snapshot().await.unwrap_err() {
        Error::Read { path, .. } => assert!(path.ends_with("absent")),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_short_stat_line_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stat");
    fs::write(&path, "cpu 1 2 3\n").unwrap();

    let err = ProcStatCounterSource::new(&path)
        .read_snapshot()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
}

#[tokio::test]
async fn test_reads_one_minute_load_average() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("loadavg");
    fs::write(&path, "0.73 0.51 0.40 1/523 98765\n").unwrap();

    let load = ProcLoadAverageSource::new(&path)
        .read_load_average()
        .await
        .unwrap();

    assert!((load.one_minute() - 0.73).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_missing_loadavg_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = ProcLoadAverageSource::new(dir.path().join("loadavg"))
        .read_load_average()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
}

#[tokio::test]
async fn test_non_utf8_stat_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stat");
    fs::write(&path, b"cpu 1 2 \xff\xfe 4\n").unwrap();

    let err = ProcStatCounterSource::new(&path)
        .read_snapshot()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
}
