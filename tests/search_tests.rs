use keysort::prelude::*;
use keysort::{find_record, find_record_mut};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn sorted_unique(rng: &mut StdRng, len: usize) -> Vec<Key> {
    // Strictly increasing with random gaps, so misses can land between keys.
    let mut next = rng.random_range(-50..50);
    (0..len)
        .map(|_| {
            let key = next;
            next += rng.random_range(1..5);
            key
        })
        .collect()
}

#[test]
fn test_find_empty() {
    let data: Vec<Key> = vec![];
    assert_eq!(find(&data, 0), None);
    assert_eq!(find(&data, Key::MIN), None);
}

#[test]
fn test_find_after_sort() {
    let mut data: Vec<(Key, &str)> = vec![(5, "e"), (3, "c"), (1, "a"), (4, "d"), (2, "b")];
    sort(&mut data);

    assert_eq!(find(&data, 4), Some(3));
    assert_eq!(find(&data, 9), None);
    assert_eq!(find(&data, 0), None);
    assert_eq!(find_record(&data, 1), Some(&(1, "a")));
}

#[test]
fn test_fuzz_present_keys() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..200 {
        let len = rng.random_range(1..500);
        let data = sorted_unique(&mut rng, len);

        for (i, &k) in data.iter().enumerate() {
            assert_eq!(find(&data, k), Some(i), "key {} in {:?}", k, data);
        }
    }
}

#[test]
fn test_fuzz_absent_keys() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..200 {
        let len = rng.random_range(0..500);
        let data = sorted_unique(&mut rng, len);

        for _ in 0..50 {
            let k = rng.random_range(-100..2200);
            let expected = data.binary_search(&k).ok();
            assert_eq!(find(&data, k), expected);
        }
    }
}

#[test]
fn test_find_duplicates_hits_some_match() {
    let data: Vec<Key> = vec![1, 2, 2, 2, 3];
    let index = find(&data, 2).expect("key 2 is present");
    assert_eq!(data[index], 2);
}

#[test]
fn test_find_unsorted_does_not_panic() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut data: Vec<Key> = (0..100).collect();
    data.shuffle(&mut rng);

    for k in -5..105 {
        if let Some(i) = find(&data, k) {
            assert_eq!(data[i], k);
        }
    }
}

#[test]
fn test_find_record_mut_updates_payload() {
    let mut data: Vec<(Key, u32)> = vec![(1, 10), (2, 20), (3, 30)];

    if let Some(record) = find_record_mut(&mut data, 2) {
        record.1 += 5;
    }
    assert_eq!(data, vec![(1, 10), (2, 25), (3, 30)]);
    assert!(find_record_mut(&mut data, 4).is_none());
}
