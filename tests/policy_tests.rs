use keysort::policy::DEFAULT_INSERTION_THRESHOLD;
use keysort::prelude::*;
use serde::Deserialize;

#[derive(Deserialize)]
struct AppConfig {
    #[serde(default)]
    sort: SortPolicy,
}

#[test]
fn test_default_threshold() {
    let policy = SortPolicy::default();
    assert_eq!(policy.insertion_threshold, DEFAULT_INSERTION_THRESHOLD);
    assert_eq!(policy.select(0), Strategy::Insertion);
    assert_eq!(policy.select(1), Strategy::Insertion);
    assert_eq!(policy.select(999), Strategy::Insertion);
    assert_eq!(policy.select(1000), Strategy::Merge);
    assert_eq!(policy.select(usize::MAX), Strategy::Merge);
}

#[test]
fn test_zero_threshold_always_merges() {
    let policy = SortPolicy::new(0);
    assert_eq!(policy.select(0), Strategy::Merge);

    let mut data: Vec<Key> = vec![3, 1, 2];
    AdaptiveSort::new(policy).sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_policy_from_toml() {
    let config: AppConfig = toml::from_str(
        r#"
        [sort]
        insertion_threshold = 64
        "#,
    )
    .unwrap();
    assert_eq!(config.sort, SortPolicy::new(64));
    assert_eq!(config.sort.select(63), Strategy::Insertion);
    assert_eq!(config.sort.select(64), Strategy::Merge);
}

#[test]
fn test_policy_defaults_when_missing() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert_eq!(config.sort, SortPolicy::default());

    let config: AppConfig = toml::from_str("[sort]\n").unwrap();
    assert_eq!(config.sort, SortPolicy::default());
}

#[test]
fn test_strategy_display() {
    assert_eq!(Strategy::Insertion.to_string(), "insertion");
    assert_eq!(Strategy::Merge.to_string(), "merge");
}
