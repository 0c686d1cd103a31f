// Integration tests for the offline cosmics catalog
use dtcalib::catalog::offline_cosmics;
use dtcalib::config::constants;
use dtcalib::params::ParamValue;
use dtcalib::pipeline::ModuleKind;
use std::sync::Arc;

#[test]
fn test_catalog_defines_both_sequences() {
    let registry = offline_cosmics().unwrap();

    let reco = registry.pipeline(constants::RECO_SEQUENCE).unwrap();
    let raw_reco = registry.pipeline(constants::RAW_RECO_SEQUENCE).unwrap();

    assert_eq!(
        reco.labels(),
        vec![
            constants::DT_1D_RECHITS,
            constants::DT_2D_SEGMENTS,
            constants::DT_4D_SEGMENTS
        ]
    );
    assert_eq!(
        raw_reco.labels(),
        vec![
            constants::LEGACY_UNPACKER,
            constants::DT_1D_RECHITS,
            constants::DT_2D_SEGMENTS,
            constants::DT_4D_SEGMENTS
        ]
    );
}

#[test]
fn test_sequences_share_reconstruction_stages() {
    let registry = offline_cosmics().unwrap();

    let reco = registry.pipeline(constants::RECO_SEQUENCE).unwrap();
    let raw_reco = registry.pipeline(constants::RAW_RECO_SEQUENCE).unwrap();

    assert_eq!(reco.len(), 3);
    assert_eq!(raw_reco.len(), 4);
    for (shared, member) in raw_reco.modules()[1..].iter().zip(reco.modules()) {
        assert!(Arc::ptr_eq(shared, member));
    }
}

#[test]
fn test_unpacker_clones_are_independent_instances() {
    let registry = offline_cosmics().unwrap();

    let legacy = registry.module(constants::LEGACY_UNPACKER).unwrap();
    let phase2 = registry.module(constants::PHASE2_UNPACKER).unwrap();

    assert_ne!(legacy.id(), phase2.id());
    assert_eq!(legacy.plugin(), "DTuROSRawToDigi");
    assert_eq!(phase2.plugin(), "DTAB7RawToDigi");

    // Clone fields equal their template defaults
    let legacy_template = registry
        .template(constants::LEGACY_UNPACKER_TEMPLATE)
        .unwrap();
    assert_eq!(legacy.params(), legacy_template.defaults());

    // Each generation keeps its own source field name
    assert_eq!(
        legacy.params().get("inputLabel"),
        Some(&ParamValue::input_tag("rawDataCollector"))
    );
    assert_eq!(
        phase2.params().get("DTAB7InputTag"),
        Some(&ParamValue::input_tag("rawDataCollector"))
    );
}

#[test]
fn test_phase2_unpacker_is_registered_but_unused() {
    let registry = offline_cosmics().unwrap();

    assert!(registry.module(constants::PHASE2_UNPACKER).is_some());
    for pipeline in registry.pipelines() {
        assert!(!pipeline.labels().contains(&constants::PHASE2_UNPACKER));
    }
}

#[test]
fn test_conditions_are_opaque_collaborators() {
    let registry = offline_cosmics().unwrap();

    let global_tag = registry.module(constants::GLOBAL_TAG_LABEL).unwrap();
    assert_eq!(global_tag.kind(), ModuleKind::ConditionsSource);
    assert_eq!(
        global_tag.params().get("connect"),
        Some(&ParamValue::str(constants::CONDITIONS_DB))
    );

    assert!(registry.module("dtGeometry").is_some());
    assert!(registry.module("magneticField").is_some());
    assert_eq!(registry.module("condDB").unwrap().kind(), ModuleKind::Service);
}

#[test]
fn test_catalog_wiring_resolves() {
    let registry = offline_cosmics().unwrap();
    assert!(registry.check(constants::EXTERNAL_SOURCES).is_ok());
}

#[test]
fn test_dump_lists_pipelines_as_label_sequences() {
    let registry = offline_cosmics().unwrap();
    let json = serde_json::to_value(registry.dump()).unwrap();

    let pipelines = json["pipelines"].as_array().unwrap();
    assert_eq!(pipelines.len(), 2);
    assert_eq!(pipelines[0]["name"], constants::RECO_SEQUENCE);
    assert_eq!(pipelines[1]["modules"][0], constants::LEGACY_UNPACKER);
}
