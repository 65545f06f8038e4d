//! Unit tests for the CPU fallback chain

use crate::test_utils::{FixedLoadAverage, S1, S2, ScriptedCounterSource};
use hostpulse_application::{CpuFallbackSelector, UtilizationSampler};
use hostpulse_domain::CpuReading;
use std::sync::Arc;

fn selector(
    counters: ScriptedCounterSource,
    load: Arc<FixedLoadAverage>,
) -> CpuFallbackSelector {
    CpuFallbackSelector::new(UtilizationSampler::new(Arc::new(counters)), load)
}

#[tokio::test]
async fn test_utilization_wins_without_reading_load_average() {
    let load = Arc::new(FixedLoadAverage::new(Some("0.50 0.40 0.30 1/100 42")));
    let reading = selector(ScriptedCounterSource::new([S1, S2]), load.clone())
        .select()
        .await;

    assert!(matches!(reading, CpuReading::Utilization(_)));
    assert_eq!(load.reads(), 0);
}

#[tokio::test]
async fn test_invalid_delta_falls_back_to_load_average() {
    let load = Arc::new(FixedLoadAverage::new(Some("0.50 0.40 0.30 1/100 42")));
    let reading = selector(ScriptedCounterSource::new([S1, S1]), load)
        .select()
        .await;

    match reading {
        CpuReading::LoadAverage { load, note } => {
            assert!((load.one_minute() - 0.5).abs() < f64::EPSILON);
            assert!(note.contains("cpu_usage_pct unavailable"));
        }
        other => panic!("expected load average, got {other:?}"),
    }
}

#[tokio::test]
async fn test_permanent_sampler_failure_always_reaches_load_average() {
    let load = Arc::new(FixedLoadAverage::new(Some("2.00 1.00 0.50 3/300 99")));
    let selector = selector(ScriptedCounterSource::failing(), load.clone());

    for attempt in 1..=3 {
        let reading = selector.select().await;
        assert!(
            matches!(reading, CpuReading::LoadAverage { .. }),
            "attempt {attempt} skipped the load average"
        );
        assert_eq!(load.reads(), attempt);
    }
}

#[tokio::test]
async fn test_both_failures_give_unavailable_note() {
    let load = Arc::new(FixedLoadAverage::new(None));
    let reading = selector(ScriptedCounterSource::failing(), load)
        .select()
        .await;

    match reading {
        CpuReading::Unavailable { note } => {
            assert!(note.starts_with("CPU metrics unavailable"));
            assert!(note.contains("/proc/stat"));
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}
