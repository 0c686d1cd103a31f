// Unit tests for PipelineBuilder
use dtcalib::error::ConfigError;
use dtcalib::params::{ParamSet, ParamValue};
use dtcalib::pipeline::{ConfigRegistry, ModuleKind, PipelineBuilder};

fn stage_registry() -> ConfigRegistry {
    let mut registry = ConfigRegistry::new();
    for label in ["digi", "seg1d", "seg2d"] {
        registry
            .register_module(label, "RecoStage", ModuleKind::Producer, ParamSet::new())
            .unwrap();
    }
    registry
}

#[test]
fn test_builder_builds_in_order() {
    let registry = stage_registry();

    let pipeline = PipelineBuilder::new("reco", &registry)
        .add_module("digi")
        .unwrap()
        .add_modules(["seg1d", "seg2d"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(pipeline.name(), "reco");
    assert_eq!(pipeline.labels(), vec!["digi", "seg1d", "seg2d"]);
}

#[test]
fn test_builder_rejects_unknown_module_at_add() {
    let registry = stage_registry();

    let result = PipelineBuilder::new("reco", &registry).add_module("missing");
    assert!(matches!(
        result,
        Err(ConfigError::UnknownModule { label }) if label == "missing"
    ));
}

#[test]
fn test_builder_rejects_empty_pipeline() {
    let registry = stage_registry();

    let result = PipelineBuilder::new("reco", &registry).build();
    assert!(matches!(result, Err(ConfigError::EmptyPipeline { .. })));
}

#[test]
fn test_built_pipeline_shares_registry_modules() {
    let registry = stage_registry();

    let pipeline = PipelineBuilder::new("reco", &registry)
        .add_module("digi")
        .unwrap()
        .build()
        .unwrap();

    let registered = registry.module("digi").unwrap();
    assert!(std::sync::Arc::ptr_eq(pipeline.get(0).unwrap(), registered));
}

#[test]
fn test_built_pipeline_validates_inputs() {
    let mut registry = ConfigRegistry::new();
    registry
        .register_module(
            "unpacker",
            "RawToDigi",
            ModuleKind::Producer,
            ParamSet::new().with("inputLabel", ParamValue::input_tag("rawDataCollector")),
        )
        .unwrap();
    registry
        .register_module(
            "rechits",
            "RecHitProducer",
            ModuleKind::Producer,
            ParamSet::new().with("digiLabel", ParamValue::input_tag("unpacker")),
        )
        .unwrap();

    let pipeline = PipelineBuilder::new("raw_reco", &registry)
        .add_modules(["unpacker", "rechits"])
        .unwrap()
        .build()
        .unwrap();

    assert!(
        pipeline
            .validate_inputs(&["rawDataCollector".to_string()])
            .is_ok()
    );

    // Reversed order: 'rechits' would consume digis that are not there yet
    let reversed = PipelineBuilder::new("backwards", &registry)
        .add_modules(["rechits", "unpacker"])
        .unwrap()
        .build()
        .unwrap();

    let result = reversed.validate_inputs(&["rawDataCollector".to_string()]);
    assert!(matches!(
        result,
        Err(ConfigError::UnresolvedInput { module, .. }) if module == "rechits"
    ));
}
