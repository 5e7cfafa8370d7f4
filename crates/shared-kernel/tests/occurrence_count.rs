use usage_trends_shared_kernel::OccurrenceCount;

#[test]
fn sums_and_adds() {
    let total: OccurrenceCount =
        [3u64, 0, 7].into_iter().map(OccurrenceCount::new).sum();
    assert_eq!(total.value(), 10);

    let mut c = OccurrenceCount::zero();
    c += OccurrenceCount::new(2);
    assert_eq!(c, OccurrenceCount::new(2));
    assert!(!c.is_zero());
}

#[test]
fn saturates_at_max() {
    let max = OccurrenceCount::new(u64::MAX);
    assert_eq!(max.saturating_add(OccurrenceCount::new(1)), max);
}

#[test]
fn serializes_transparently() {
    let json = serde_json::to_string(&OccurrenceCount::new(42)).expect("serialize");
    assert_eq!(json, "42");
    let back: OccurrenceCount = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.value(), 42);
}
