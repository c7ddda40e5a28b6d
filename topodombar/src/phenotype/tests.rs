use assert_approx_eq::assert_approx_eq;
use rstest::*;

use super::*;
use crate::toy;

#[fixture]
#[once]
fn data() -> PhenotypeData {
    toy::phenotype_data()
}

#[rstest]
#[case("EP:01", 0.0)]
#[case("EP:02", (8.0f64 / 6.0).ln())]
#[case("EP:03", 4.0f64.ln())]
#[case("EP:04", 2.0f64.ln())]
#[case("EP:06", 0.0)]
#[case("EP:07", 8.0f64.ln())]
#[case("EP:08", (8.0f64 / 5.0).ln())]
fn test_information_content(
    data: &PhenotypeData,
    #[case] term: &str,
    #[case] expected: f64,
) {
    assert_approx_eq!(data.information_content(term), expected, 1e-9);
}

#[rstest]
#[case("EP:03", "EP:03", 4.0f64.ln())]
#[case("EP:03", "EP:04", (8.0f64 / 6.0).ln())]
#[case("EP:06", "EP:07", (8.0f64 / 6.0).ln())]
#[case("EP:03", "EP:08", 0.0)]
#[case("EP:03", "EP:99", 0.0)]
fn test_term_similarity(
    data: &PhenotypeData,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: f64,
) {
    assert_approx_eq!(data.term_similarity(a, b), expected, 1e-9);
    assert_approx_eq!(data.term_similarity(b, a), expected, 1e-9);
}

#[rstest]
#[case("geneA", 4.0f64.ln() + (8.0f64 / 6.0).ln())]
#[case("geneB", (8.0f64 / 6.0).ln())]
#[case("geneC", (8.0f64 / 6.0).ln())]
#[case("geneH", (8.0f64 / 6.0).ln())]
fn test_patient_similarity(
    data: &PhenotypeData,
    #[case] gene: &str,
    #[case] expected: f64,
) {
    let gene_terms = data.gene_phenotypes(gene).unwrap();
    assert_approx_eq!(
        data.similarity(&toy::patient_terms(), gene_terms),
        expected,
        1e-9
    );
}

#[rstest]
fn test_similarity_of_empty_sets(data: &PhenotypeData) {
    let empty = TermSet::new();
    assert_eq!(data.similarity(&empty, &toy::patient_terms()), 0.0);
    assert_eq!(data.similarity(&toy::patient_terms(), &empty), 0.0);
}

#[rstest]
fn test_genes_for_term(data: &PhenotypeData) {
    let mut genes = data
        .genes_for_term("EP:03")
        .into_iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>();
    genes.sort();
    assert_eq!(genes, vec!["geneA", "geneE"]);

    assert_eq!(data.genes_for_term("EP:01").len(), 8);
    assert!(data.genes_for_term("EP:06").is_empty());
}

#[rstest]
fn test_target_genes(data: &PhenotypeData) {
    let targets = toy::target_genes(data);
    let target = TermId::from(toy::TARGET_TERM);

    assert_eq!(targets.len(), 1);
    assert!(targets.targets_for(Some(&target)).contains("geneA"));
    assert!(!targets.targets_for(Some(&target)).contains("geneB"));
    assert!(targets.targets_for(Some(&TermId::from("EP:06"))).is_empty());
    assert!(targets.targets_for(None).is_empty());
}

fn ontology_with_alternatives() -> Ontology {
    Ontology::from_iter([
        Term::new("HP:1".into(), "root".into()),
        Term::new("HP:2".into(), "child".into())
            .with_parents(vec!["HP:1".into()])
            .with_alt_ids(vec!["HP:20".into()]),
        Term::new("HP:3".into(), "old".into())
            .with_obsolete(true)
            .with_replaced_by(Some("HP:20".into())),
        Term::new("HP:4".into(), "gone".into()).with_obsolete(true),
    ])
}

#[rstest]
#[case("HP:2", Some("HP:2"))]
#[case("HP:20", Some("HP:2"))]
#[case("HP:3", Some("HP:2"))]
#[case("HP:4", None)]
#[case("HP:5", None)]
fn test_resolve(
    #[case] input: &str,
    #[case] expected: Option<&str>,
) {
    let ontology = ontology_with_alternatives();
    assert_eq!(
        ontology.resolve(input).as_ref().map(TermId::as_str),
        expected
    );
}

#[test]
fn test_resolve_terminates_on_replacement_cycle() {
    let ontology = Ontology::from_iter([
        Term::new("HP:1".into(), "a".into())
            .with_obsolete(true)
            .with_replaced_by(Some("HP:2".into())),
        Term::new("HP:2".into(), "b".into())
            .with_obsolete(true)
            .with_replaced_by(Some("HP:1".into())),
    ]);
    assert_eq!(ontology.resolve("HP:1"), None);
}

#[test]
fn test_ancestors() {
    let ontology = toy::ontology();
    let mut anc = ontology
        .ancestors("EP:07")
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>();
    anc.sort();
    assert_eq!(anc, vec!["EP:01", "EP:05", "EP:07"]);
    assert!(ontology.is_a("EP:04", "EP:02"));
    assert!(!ontology.is_a("EP:02", "EP:04"));
    assert!(ontology.ancestors("EP:99").is_empty());
}
