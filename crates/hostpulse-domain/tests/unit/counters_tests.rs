//! Unit tests for counter snapshot parsing

use hostpulse_domain::{CounterSnapshot, CpuCategory, Error};

const PROC_STAT: &str = "\
cpu  4705 356 584 3699 23 23 0 0 0 0
cpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0
intr 114930548 113199788 3 0 5 263 0 4 [... lots more numbers ...]
ctxt 1990473
btime 1062191376
";

#[test]
fn test_parse_stat_uses_aggregate_line() {
    let snapshot = CounterSnapshot::parse_stat(PROC_STAT).expect("valid stat");
    assert_eq!(
        snapshot.ticks(),
        &[4705, 356, 584, 3699, 23, 23, 0, 0]
    );
}

#[test]
fn test_parse_stat_skips_per_core_lines() {
    let content = "cpu0 1 2 3 4\ncpu 10 20 30 40\n";
    let snapshot = CounterSnapshot::parse_stat(content).expect("valid stat");
    assert_eq!(snapshot.get(CpuCategory::User), 10);
    assert_eq!(snapshot.get(CpuCategory::Idle), 40);
}

#[test]
fn test_parse_stat_without_aggregate_line() {
    let err = CounterSnapshot::parse_stat("cpu0 1 2 3 4\nctxt 5\n").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_exactly_four_fields_zero_fills_the_rest() {
    let snapshot = CounterSnapshot::parse_line("cpu 1 2 3 4").expect("four fields");
    assert_eq!(snapshot.ticks(), &[1, 2, 3, 4, 0, 0, 0, 0]);
    assert_eq!(snapshot.get(CpuCategory::Iowait), 0);
    assert_eq!(snapshot.get(CpuCategory::Steal), 0);
}

#[test]
fn test_fewer_than_four_fields_is_parse_error() {
    for line in ["cpu 1 2 3", "cpu 1", "cpu", ""] {
        let err = CounterSnapshot::parse_line(line).unwrap_err();
        assert!(
            matches!(err, Error::Parse { .. }),
            "expected parse error for {line:?}"
        );
    }
}

#[test]
fn test_negative_or_non_numeric_field_is_parse_error() {
    for line in ["cpu 1 2 -3 4", "cpu 1 2 x 4", "cpu 1 2 3 4 5 6 7 8 nine", "cpu 1.5 2 3 4"] {
        let err = CounterSnapshot::parse_line(line).unwrap_err();
        assert!(
            matches!(err, Error::Parse { .. }),
            "expected parse error for {line:?}"
        );
    }
}

#[test]
fn test_guest_columns_are_dropped() {
    let snapshot = CounterSnapshot::parse_line("cpu 1 2 3 4 5 6 7 8 9 10").expect("ten fields");
    assert_eq!(snapshot.ticks(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(snapshot.total(), 36);
}

#[test]
fn test_idle_includes_iowait() {
    let snapshot = CounterSnapshot::new([10, 0, 10, 70, 5, 1, 1, 3]);
    assert_eq!(snapshot.idle(), 75);
    assert_eq!(snapshot.total(), 100);
}

#[test]
fn test_categories_follow_column_order() {
    for (index, category) in CpuCategory::ALL.iter().enumerate() {
        assert_eq!(category.index(), index);
    }
    assert!(CpuCategory::Idle.is_idle());
    assert!(CpuCategory::Iowait.is_idle());
    assert!(!CpuCategory::Steal.is_idle());
}
