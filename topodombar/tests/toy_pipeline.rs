use assert_approx_eq::assert_approx_eq;
use indexmap::IndexMap;
use rstest::*;
use topodombar::io::read_phenotype_data;
use topodombar::prelude::*;

mod common;
use common::{
    annotated,
    data_path,
    labels,
};

const DELETIONS: &[&str] = &["cnv1", "cnv2", "cnv3", "cnv4"];

struct Inputs {
    data:         PhenotypeData,
    domains:      GenomicSet<Region>,
    genes:        GenomicSet<Gene>,
    enhancers:    IndexMap<TermId, GenomicSet<Region>>,
    target_genes: TargetGenes,
}

#[fixture]
#[once]
fn inputs() -> Inputs {
    let data = read_phenotype_data(
        data_path("toy/ontology.obo"),
        data_path("toy/genes_to_phenotype.txt"),
    )
    .unwrap();
    let domains = TabFileParser::new(data_path("toy/domains.tab"))
        .parse_regions()
        .unwrap();
    let genes = TabFileParser::new(data_path("toy/genes.tab"))
        .parse_genes_with_terms(&data)
        .unwrap();
    let enhancers = TabFileParser::new(data_path("toy/target_terms.tab"))
        .parse_target_terms(&data)
        .unwrap()
        .into_iter()
        .map(|t| (t.term, t.enhancers))
        .collect::<IndexMap<_, _>>();
    let terms = TabFileParser::new(data_path("toy/cnvs.tab"))
        .parse_target_term_set(&data)
        .unwrap();
    let target_genes = TargetGenes::from_annotations(&data, terms.iter());

    Inputs {
        data,
        domains,
        genes,
        enhancers,
        target_genes,
    }
}

fn cnvs(data: &PhenotypeData) -> GenomicSet<AnnotatedCnv> {
    annotated(
        TabFileParser::new(data_path("toy/cnvs.tab"))
            .parse_cnvs_with_phenotypes(data)
            .unwrap(),
    )
}

fn run(
    inputs: &Inputs,
    config: AnnotationConfig,
) -> GenomicSet<AnnotatedCnv> {
    let annotation_inputs = AnnotationInputs {
        domains: inputs.domains.clone(),
        genes: inputs.genes.clone(),
        term_enhancers: inputs.enhancers.clone(),
        target_genes: Some(inputs.target_genes.clone()),
        ..Default::default()
    };
    let annotator = Annotator::new(config, annotation_inputs, &inputs.data).unwrap();
    let mut cnvs = cnvs(&inputs.data);
    annotator.run(&mut cnvs);
    cnvs
}

#[rstest]
fn test_inputs(inputs: &Inputs) {
    assert_eq!(inputs.data.n_annotated_genes(), 8);
    assert_eq!(inputs.genes.len(), 4);
    assert_eq!(inputs.enhancers.len(), 1);
    assert_eq!(inputs.target_genes.len(), 2);
    // geneC is annotated with the obsolete EP:09, replaced by EP:08.
    assert_eq!(
        inputs.genes.get("geneC").unwrap().phenotypes(),
        &TermSet::from([TermId::from("EP:08")])
    );

    let cnvs = cnvs(&inputs.data);
    assert_eq!(cnvs.len(), 9);
    let cnv3 = cnvs.get("cnv3").unwrap();
    assert!(cnv3.cnv().phenotypes().contains("EP:03"));
    assert_eq!(
        cnvs.get("dup1").unwrap().cnv().variant(),
        VariantType::Duplication
    );
}

#[rstest]
fn test_domain_mode(inputs: &Inputs) {
    let config = AnnotationConfig::default().with_mechanisms(vec![
        Mechanism::Tdbd,
        Mechanism::NewTdbd,
        Mechanism::TanDupEa,
        Mechanism::InvEa,
    ]);
    let cnvs = run(inputs, config);

    let expected = vec![
        ("cnv1", "TDBD"),
        ("cnv2", "GDE"),
        ("cnv3", "TDBD"),
        ("cnv4", "NoData"),
    ];
    assert_eq!(labels(&cnvs, DELETIONS, Mechanism::Tdbd), expected);
    assert_eq!(labels(&cnvs, DELETIONS, Mechanism::NewTdbd), expected);
    assert_eq!(
        labels(&cnvs, &["dup1", "dup2"], Mechanism::TanDupEa),
        vec![("dup1", "TanDupEA"), ("dup2", "onlyGDE")]
    );
    assert_eq!(
        labels(&cnvs, &["inv1", "inv2", "inv3"], Mechanism::InvEa),
        vec![
            ("inv1", "EnhancerInvEA"),
            ("inv2", "GeneInvEA"),
            ("inv3", "noInvEA"),
        ]
    );
    assert_eq!(
        labels(&cnvs, &["cnv1"], Mechanism::InvEa),
        vec![("cnv1", "NA")]
    );

    let cnv2 = cnvs.get("cnv2").unwrap();
    assert_eq!(cnv2.boundaries, vec![NameStr::from("b_1")]);
    assert_approx_eq!(cnv2.scores.overlap, 4.0f64.ln() + (8.0f64 / 6.0).ln(), 1e-9);
}

#[rstest]
fn test_distance_mode(inputs: &Inputs) {
    let config = AnnotationConfig::default()
        .with_region_mode(RegionMode::Distance)
        .with_region_size(20)
        .with_mechanisms(vec![Mechanism::Ea, Mechanism::EaLowG]);
    let cnvs = run(inputs, config);

    assert_eq!(labels(&cnvs, DELETIONS, Mechanism::Ea), vec![
        ("cnv1", "EA"),
        ("cnv2", "onlyGDE"),
        ("cnv3", "EA"),
        ("cnv4", "NoData"),
    ]);
    assert_eq!(labels(&cnvs, DELETIONS, Mechanism::EaLowG), vec![
        ("cnv1", "EAlowG"),
        ("cnv2", "onlyGDE"),
        ("cnv3", "EAlowG"),
        ("cnv4", "NoData"),
    ]);
}

#[rstest]
fn test_write_results(inputs: &Inputs) {
    let cnvs = run(inputs, AnnotationConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cnvs.annotated.tab");
    write_cnvs(&path, &cnvs).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap().split('\t').collect::<Vec<_>>();
    let mechanisms = Mechanism::ALL.iter().map(|m| m.as_str()).collect::<Vec<_>>();
    assert_eq!(&header[header.len() - mechanisms.len()..], mechanisms.as_slice());

    let cnv1 = lines.next().unwrap().split('\t').collect::<Vec<_>>();
    assert_eq!(&cnv1[..4], ["chr1", "9", "19", "cnv1"]);
    assert_eq!(cnv1[header.len() - mechanisms.len()], "TDBD");
    let column = |name: &str| header.iter().position(|c| *c == name).unwrap();
    let record = cnvs.get("cnv1").unwrap();
    assert_eq!(
        cnv1[column("left_adjacent_region")],
        record.adjacent.left.as_ref().unwrap().to_string()
    );
    assert_eq!(
        cnv1[column("right_adjacent_region")],
        record.adjacent.right.as_ref().unwrap().to_string()
    );
    assert_eq!(lines.count(), 8);
}
