macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod annotate {
    define_strings! {
        CNVS =
            "Path to the CNV file (tab-separated: chr, start, end, name, type, \
            phenotypes, target term). Phenotypes are ';'-separated term IDs.";
        DOMAINS =
            "Path to the topological domain file (tab-separated: chr, start, \
            end, name).";
        GENES =
            "Path to the gene file (tab-separated: chr, start, end, gene ID, \
            strand, symbol). Gene IDs must match the phenotype annotation.";
        OBO =
            "Path to the phenotype ontology in OBO format.";
        ANNOTATIONS =
            "Path to the gene-to-phenotype annotation file (tab-separated: \
            gene ID, symbol, term name, term ID).";
        ENHANCERS =
            "Path to an enhancer file used for all CNVs without a term-specific \
            enhancer set.";
        TARGET_TERMS =
            "Path to a target-term file (tab-separated: term ID, name, enhancer \
            file). Enhancer paths are relative to this file's directory.";
        BOUNDARIES =
            "Path to a boundary file. Boundaries are derived from the domains \
            when omitted.";
        GLOBAL_TERM =
            "Use this term as phenotype and target term of every CNV. The CNV \
            file then only needs chr, start, end and name.";
        MODE =
            "How adjacent regions are defined: up to the ends of the \
            neighbouring domains, or a fixed distance on each side.";
        REGION_SIZE =
            "Size of the adjacent regions in distance mode.";
        MAX_BOUNDARY_SIZE =
            "Largest gap between consecutive domains considered a boundary.";
        MECHANISMS =
            "Mechanisms to classify (TDBD, newTDBD, EA, EAlowG, TanDupEA, \
            InvEA). All of them by default.";
        OUTPUT =
            "Path of the annotated output table.";
    }
}

pub mod boundaries {
    define_strings! {
        DOMAINS =
            "Path to the topological domain file (tab-separated: chr, start, \
            end, name).";
        MAX_BOUNDARY_SIZE =
            "Largest gap between consecutive domains considered a boundary.";
        OUTPUT =
            "Path of the boundary file to write.";
    }
}
