use std::cmp::Ordering;

use rstest::*;

use super::*;
use crate::data_structs::GenomicSet;

fn region(
    chr: &str,
    start: u32,
    end: u32,
    name: &str,
) -> Region {
    Region::new(chr.into(), start, end, name.into())
}

#[rstest]
#[case::inside(region("chr1", 10, 20, "a"), region("chr1", 12, 15, "b"), true)]
#[case::left_touching(region("chr1", 10, 20, "a"), region("chr1", 5, 10, "b"), false)]
#[case::right_touching(region("chr1", 10, 20, "a"), region("chr1", 20, 25, "b"), false)]
#[case::one_base(region("chr1", 10, 20, "a"), region("chr1", 19, 25, "b"), true)]
#[case::other_chr(region("chr1", 10, 20, "a"), region("chr2", 10, 20, "b"), false)]
fn test_overlaps(
    #[case] a: Region,
    #[case] b: Region,
    #[case] expected: bool,
) {
    assert_eq!(a.overlaps(&b), expected);
    assert_eq!(b.overlaps(&a), expected);
}

#[test]
fn test_contains_and_is_contained_in() {
    let outer = region("chr1", 10, 20, "outer");
    let inner = region("chr1", 10, 20, "inner");
    let partial = region("chr1", 15, 21, "partial");

    assert!(outer.contains(&inner));
    assert!(inner.is_contained_in(&outer));
    assert!(!outer.contains(&partial));
    assert!(!partial.is_contained_in(&outer));
    assert!(!outer.contains(&region("chr2", 12, 13, "x")));
}

#[rstest]
#[case(region("chr1", 10, 20, "a"), region("chr1", 25, 30, "b"), 5)]
#[case(region("chr1", 25, 30, "a"), region("chr1", 10, 20, "b"), 5)]
#[case(region("chr1", 10, 20, "a"), region("chr1", 20, 30, "b"), 0)]
#[case(region("chr1", 10, 20, "a"), region("chr1", 15, 30, "b"), 0)]
fn test_distance(
    #[case] a: Region,
    #[case] b: Region,
    #[case] expected: u32,
) {
    assert_eq!(a.distance(&b).unwrap(), expected);
}

#[test]
fn test_distance_across_chromosomes_fails() {
    let a = region("chr1", 10, 20, "a");
    let b = region("chr2", 10, 20, "b");
    assert!(a.distance(&b).is_err());
}

#[test]
fn test_zero_length_region_is_allowed() {
    let r = region("chr1", 14, 14, "empty");
    assert_eq!(r.length(), 0);
}

#[test]
#[should_panic]
fn test_region_rejects_inverted_coordinates() {
    region("chr1", 20, 10, "bad");
}

#[test]
fn test_ordering() {
    let mut regions = vec![
        region("chr2", 1, 5, "c"),
        region("chr1", 30, 40, "b"),
        region("chr1", 10, 20, "a"),
    ];
    regions.sort();
    assert_eq!(
        regions.iter().map(|r| r.name().as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );

    let a = region("chr1", 10, 20, "a");
    let b = region("chr1", 10, 50, "b");
    assert_eq!(start_coordinate_order(&a, &b), Ordering::Equal);
    assert_eq!(a.cmp(&b), Ordering::Less);
}

#[test]
fn test_to_region_renames() {
    let r = region("chr1", 3, 8, "old").to_region("new");
    assert_eq!(r, region("chr1", 3, 8, "new"));
    assert_eq!(r.to_string(), "chr1:3-8");
}

#[fixture]
fn reference() -> IndexedSet<Region> {
    GenomicSet::from_iter([
        region("chr1", 50, 60, "late"),
        region("chr1", 0, 10, "early"),
        region("chr1", 5, 55, "wide"),
        region("chr2", 0, 100, "other"),
    ])
    .into()
}

#[rstest]
fn test_index_returns_set_order(reference: IndexedSet<Region>) {
    let hits = reference.overlapping_names(&region("chr1", 8, 52, "q"));
    assert_eq!(hits, vec!["late", "early", "wide"]);
}

#[rstest]
fn test_index_contained_in(reference: IndexedSet<Region>) {
    let hits = reference
        .contained_in(&region("chr1", 0, 58, "q"))
        .into_iter()
        .map(|r| r.name().clone())
        .collect::<Vec<_>>();
    assert_eq!(hits, vec!["early", "wide"]);
}

#[rstest]
fn test_index_unknown_chromosome(reference: IndexedSet<Region>) {
    assert!(reference.overlapping(&region("chrX", 0, 1000, "q")).is_empty());
}

#[test]
fn test_interval_index_counts() {
    let regions = [region("chr1", 0, 10, "a"), region("chr3", 0, 10, "b")];
    let index: IntervalIndex = regions.iter().collect();
    assert_eq!(index.n_intervals(), 2);
    assert_eq!(index.n_chr(), 2);
    assert_eq!(index.find(&region("chr3", 5, 6, "q")), vec![1]);
}
