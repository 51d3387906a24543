// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use entropy_binning::BinningError;
use entropy_binning::binning::combinations::binomial;
use entropy_binning::binning::{
    Combinations, Partition, PartitionGenerator, ValueRange, count_partitions,
};
use rstest::*;

#[test]
fn combinations_lexicographic_order() {
    let got: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
    let expected = vec![
        vec![0, 1],
        vec![0, 2],
        vec![0, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
    ];
    assert_eq!(got, expected);
}

#[test]
fn combinations_edge_sizes() {
    let empty_pick: Vec<Vec<usize>> = Combinations::new(3, 0).collect();
    assert_eq!(empty_pick, vec![Vec::<usize>::new()]);

    assert_eq!(Combinations::new(2, 3).count(), 0);
    assert_eq!(Combinations::new(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
    assert_eq!(Combinations::new(0, 0).count(), 1);
}

#[rstest]
#[case(5, 0)]
#[case(5, 1)]
#[case(5, 2)]
#[case(6, 3)]
#[case(9, 4)]
#[case(12, 6)]
fn combinations_count_matches_binomial(#[case] n: usize, #[case] k: usize) {
    let combos = Combinations::new(n, k);
    let expected = combos.total().unwrap();
    assert_eq!(combos.count() as u128, expected);
    assert_eq!(binomial(n as u64, k as u64), Some(expected));
}

#[rstest]
#[case(0, 0, Some(1))]
#[case(10, 3, Some(120))]
#[case(40, 19, Some(131_282_408_400))]
#[case(3, 5, Some(0))]
#[case(200, 100, None)]
fn binomial_values(#[case] n: u64, #[case] k: u64, #[case] expected: Option<u128>) {
    assert_eq!(binomial(n, k), expected);
}

#[test]
fn generator_two_bins_over_three_values() {
    let parts: Vec<String> = PartitionGenerator::new(ValueRange::new(0, 2), 2)
        .map(|p| p.to_string())
        .collect();
    assert_eq!(parts, vec!["{[0], [1..=2]}", "{[0..=1], [2]}"]);
}

#[test]
fn generator_cut_positions_ascending() {
    let parts: Vec<String> = PartitionGenerator::new(ValueRange::new(0, 3), 3)
        .map(|p| p.to_string())
        .collect();
    assert_eq!(
        parts,
        vec![
            "{[0], [1], [2..=3]}",
            "{[0], [1..=2], [3]}",
            "{[0..=1], [2], [3]}",
        ]
    );
}

#[test]
fn generator_empty_when_infeasible() {
    let range = ValueRange::new(1, 2);
    assert_eq!(PartitionGenerator::new(range, 5).count(), 0);
    assert_eq!(PartitionGenerator::new(range, 0).count(), 0);
    assert_eq!(PartitionGenerator::new(range, 5).candidate_count(), Some(0));
}

#[test]
fn every_partition_tiles_the_range() {
    let range = ValueRange::new(-2, 6);
    let generator = PartitionGenerator::new(range, 4);
    let expected = generator.candidate_count().unwrap();
    let mut seen = 0u128;
    for partition in generator {
        seen += 1;
        assert_eq!(partition.nbins(), 4);
        assert_eq!(partition.range(), range);
        let groups: Vec<_> = partition.groups().collect();
        assert_eq!(*groups[0].start(), range.min);
        assert_eq!(*groups[3].end(), range.max);
        for pair in groups.windows(2) {
            assert!(!pair[0].is_empty());
            assert_eq!(pair[0].end() + 1, *pair[1].start());
        }
        for v in range.values() {
            let label = partition.group_of(v).unwrap();
            assert!(partition.group(label).contains(&v));
        }
    }
    assert_eq!(seen, expected);
    assert_eq!(count_partitions(range.len(), 4), Some(expected));
}

#[rstest]
#[case(10, 3, Some(36))]
#[case(1, 1, Some(1))]
#[case(5, 6, Some(0))]
#[case(5, 0, Some(0))]
#[case(201, 101, None)]
fn partition_counts(#[case] len: u128, #[case] nbins: usize, #[case] expected: Option<u128>) {
    assert_eq!(count_partitions(len, nbins), expected);
}

#[test]
fn full_i64_range_length() {
    let range = ValueRange::new(i64::MIN, i64::MAX);
    assert_eq!(range.len(), 1u128 << 64);
    assert_eq!(count_partitions(range.len(), 2), Some(u128::from(u64::MAX)));
    assert_eq!(count_partitions(range.len(), 1), Some(1));
}

#[test]
fn group_lookup() {
    let p = Partition::from_groups(&[0..=1, 2..=2, 3..=7]).unwrap();
    assert_eq!(p.nbins(), 3);
    assert_eq!(p.group_of(-1), None);
    assert_eq!(p.group_of(0), Some(0));
    assert_eq!(p.group_of(1), Some(0));
    assert_eq!(p.group_of(2), Some(1));
    assert_eq!(p.group_of(5), Some(2));
    assert_eq!(p.group_of(7), Some(2));
    assert_eq!(p.group_of(8), None);
    assert_eq!(p.to_string(), "{[0..=1], [2], [3..=7]}");
    assert_eq!(Partition::single(ValueRange::new(0, 7)).group_of(4), Some(0));
}

#[test]
fn from_groups_rejects_malformed_input() {
    assert!(matches!(
        Partition::from_groups(&[]),
        Err(BinningError::InvalidConfig(_))
    ));
    assert!(matches!(
        Partition::from_groups(&[0..=1, 3..=4]),
        Err(BinningError::InvalidConfig(_))
    ));
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = [0..=1, 3..=2];
    assert!(matches!(
        Partition::from_groups(&reversed),
        Err(BinningError::InvalidConfig(_))
    ));
}
