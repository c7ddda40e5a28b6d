use itertools::Itertools;
use rstest::*;
use topodombar::annotation::passes::boundary_overlap;
use topodombar::annotation::MAX_BOUNDARY_SIZE;
use topodombar::prelude::*;

mod common;
use common::{
    annotated,
    data_path,
};

#[fixture]
#[once]
fn boundaries() -> GenomicSet<Region> {
    TabFileParser::new(data_path("cohort/boundaries.tab"))
        .parse_regions()
        .unwrap()
}

#[fixture]
fn cohort() -> GenomicSet<AnnotatedCnv> {
    annotated(
        TabFileParser::new(data_path("cohort/cnvs.tab"))
            .parse_cnvs()
            .unwrap(),
    )
}

#[rstest]
fn test_boundary_file_names(boundaries: &GenomicSet<Region>) {
    assert_eq!(boundaries.len(), 30);
    let names = boundaries.names().map(|n| n.as_str()).collect_vec();
    assert_eq!(names.first(), Some(&"ID_1"));
    assert_eq!(names.last(), Some(&"ID_30"));
}

#[rstest]
fn test_boundary_overlap(
    boundaries: &GenomicSet<Region>,
    mut cohort: GenomicSet<AnnotatedCnv>,
) {
    assert_eq!(cohort.len(), 50);
    boundary_overlap(&mut cohort, &IndexedSet::from(boundaries.clone()));

    let disrupting = cohort
        .iter()
        .filter(|cnv| cnv.has_boundary_overlap())
        .collect_vec();
    assert_eq!(disrupting.len(), 34);
    assert_eq!(
        disrupting
            .iter()
            .filter(|cnv| cnv.boundaries.len() == 2)
            .count(),
        6
    );
    assert!(disrupting.iter().all(|cnv| cnv.chr().as_str() == "chr22"));

    let cnv = cohort.get("cohort_2").unwrap();
    assert_eq!(cnv.boundaries, vec![NameStr::from("ID_14")]);
}

#[rstest]
fn test_derived_boundaries_match_file(boundaries: &GenomicSet<Region>) {
    let derived = TabFileParser::new(data_path("cohort/domains.tab"))
        .parse_boundaries_from_domains(MAX_BOUNDARY_SIZE)
        .unwrap();

    assert_eq!(derived.len(), boundaries.len());
    for (derived, given) in derived.iter().zip(boundaries.iter()) {
        assert_eq!(
            (derived.start(), derived.end()),
            (given.start(), given.end())
        );
    }
}

#[rstest]
fn test_derived_boundaries_give_same_overlap(mut cohort: GenomicSet<AnnotatedCnv>) {
    let derived = TabFileParser::new(data_path("cohort/domains.tab"))
        .parse_boundaries_from_domains(MAX_BOUNDARY_SIZE)
        .unwrap();
    boundary_overlap(&mut cohort, &derived.into());

    assert_eq!(
        cohort.iter().filter(|cnv| cnv.has_boundary_overlap()).count(),
        34
    );
    assert_eq!(
        cohort.get("cohort_2").unwrap().boundaries,
        vec![NameStr::from("b_14")]
    );
}

#[rstest]
fn test_small_boundary_limit_drops_boundaries() {
    let derived = TabFileParser::new(data_path("cohort/domains.tab"))
        .parse_boundaries_from_domains(50_000)
        .unwrap();
    assert!(derived.len() < 30);
    assert!(derived.iter().all(|b| b.length() <= 50_000));
}
