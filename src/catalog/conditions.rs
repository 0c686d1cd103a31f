use crate::config::constants;
use crate::error::Result;
use crate::params::{ParamSet, ParamValue};
use crate::pipeline::{ConfigRegistry, ModuleKind};
use tracing::debug;

/// Register the opaque conditions collaborators: detector geometry, magnetic
/// field, global tag and the conditions database service.
///
/// None of these take part in event flow; they are looked up by the external
/// engine under their fixed labels.
pub fn register_conditions(registry: &mut ConfigRegistry) -> Result<()> {
    registry.register_module(
        "dtGeometry",
        "DTGeometryESModule",
        ModuleKind::ConditionsSource,
        ParamSet::new()
            .with("applyAlignment", ParamValue::Bool(true))
            .with("alignmentsLabel", ParamValue::str("")),
    )?;

    // Field map selected from the measured current stored in conditions
    registry.register_module(
        "magneticField",
        "VolumeBasedMagneticFieldESProducer",
        ModuleKind::ConditionsSource,
        ParamSet::new()
            .with("valueOverride", ParamValue::Int(-1))
            .with("label", ParamValue::str("")),
    )?;

    // The tag itself is operator-supplied per calibration campaign
    registry.register_module(
        constants::GLOBAL_TAG_LABEL,
        "PoolDBESSource",
        ModuleKind::ConditionsSource,
        ParamSet::new()
            .with("connect", ParamValue::str(constants::CONDITIONS_DB))
            .with("globaltag", ParamValue::str(""))
            .with("snapshotTime", ParamValue::str("")),
    )?;

    registry.register_module(
        "condDB",
        "CondDBSetup",
        ModuleKind::Service,
        ParamSet::new()
            .with("connect", ParamValue::str(constants::CONDITIONS_DB))
            .with(
                "DBParameters",
                ParamValue::Nested(
                    ParamSet::new()
                        .with("authenticationPath", ParamValue::str(""))
                        .with("messageLevel", ParamValue::Int(0)),
                ),
            ),
    )?;

    debug!("Conditions collaborators registered");
    Ok(())
}
