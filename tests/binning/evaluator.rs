// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use entropy_binning::binning::evaluate::{
    evaluate_binning, group_counts, group_counts_from, score_partition, shannon_entropy_bits,
};
use entropy_binning::binning::value::{ValueCounts, count_frequencies};
use entropy_binning::binning::{Partition, PartitionGenerator, Value, ValueRange, apply_binning};
use rstest::*;

use crate::test_helpers::{as_values, generate_random_ints};

#[rstest]
#[case(vec![4, 6], 0.970_950_594_454_668_5)]
#[case(vec![1, 1, 1, 1], 2.0)]
#[case(vec![3, 0, 3], 1.0)]
#[case(vec![5], 0.0)]
#[case(vec![0, 0], 0.0)]
#[case(vec![], 0.0)]
fn entropy_of_counts(#[case] counts: Vec<usize>, #[case] expected: f64) {
    let h = shannon_entropy_bits(&counts);
    assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
    assert!(!h.is_nan());
}

#[test]
fn evaluate_maps_sequence_through_partition() {
    let values = as_values(&[0, 0, 0, 0, 1, 1, 2, 2, 2, 2]);
    let p = Partition::from_groups(&[0..=0, 1..=2]).unwrap();
    assert_eq!(group_counts(&values, &p), vec![4, 6]);
    assert_abs_diff_eq!(
        evaluate_binning(&values, &p),
        0.970_950_594_454_668_5,
        epsilon = 1e-12
    );
}

#[test]
fn missing_values_are_ignored() {
    let values = vec![
        Value::Present(1),
        Value::Missing,
        Value::Present(2),
        Value::Missing,
    ];
    let p = Partition::from_groups(&[1..=1, 2..=2]).unwrap();
    assert_eq!(group_counts(&values, &p), vec![1, 1]);
    assert_abs_diff_eq!(evaluate_binning(&values, &p), 1.0, epsilon = 1e-12);
    assert_eq!(apply_binning(&values, &p), vec![Some(0), None, Some(1), None]);

    let counts = ValueCounts::from_values(&values);
    assert_eq!(counts.total(), 2);
    assert_eq!(counts.distinct(), 2);
}

#[test]
fn value_counts_range_queries() {
    let values = as_values(&[-1, 3, 3, 4, 7, 7, 7]);
    let counts = ValueCounts::from_values(&values);
    assert_eq!(counts.total(), 7);
    assert_eq!(counts.distinct(), 4);
    assert_eq!(counts.count_between(-5, 10), 7);
    assert_eq!(counts.count_between(0, 2), 0);
    assert_eq!(counts.count_between(3, 4), 3);
    assert_eq!(counts.count_between(4, 7), 4);
    assert_eq!(counts.count_between(7, 7), 3);
    assert_eq!(counts.count_between(5, 4), 0);

    let freq = count_frequencies(&values);
    assert_eq!(freq.get(&7), Some(&3));
    assert_eq!(freq.keys().copied().collect::<Vec<_>>(), vec![-1, 3, 4, 7]);
}

#[test]
fn fast_scoring_matches_sequence_scoring() {
    for seed in 0..5u64 {
        let mut values = as_values(&generate_random_ints(300, 0, 9, seed));
        values[seed as usize] = Value::Missing;
        let counts = ValueCounts::from_values(&values);
        let range = ValueRange::from_values(&values).unwrap();
        for nbins in 1..=4 {
            for p in PartitionGenerator::new(range, nbins) {
                assert_eq!(group_counts_from(&counts, &p), group_counts(&values, &p));
                assert_eq!(
                    score_partition(&counts, &p).to_bits(),
                    evaluate_binning(&values, &p).to_bits()
                );
            }
        }
    }
}
