//! Unit tests for the processor counter

use hostpulse_application::ports::ProcessorCounter;
use hostpulse_infrastructure::adapters::SysinfoProcessorCounter;

#[test]
fn test_reports_at_least_one_processor() {
    assert!(SysinfoProcessorCounter::new().logical_processors() >= 1);
}

#[test]
fn test_count_is_stable_between_calls() {
    let counter = SysinfoProcessorCounter::new();
    assert_eq!(counter.logical_processors(), counter.logical_processors());
}
