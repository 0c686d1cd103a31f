use crate::config::constants;
use crate::error::Result;
use crate::params::{ParamSet, ParamValue};
use crate::pipeline::{ConfigRegistry, ModuleKind, ModuleTemplate};
use tracing::debug;

/// Register the two raw-to-digi unpacker templates.
///
/// Both generations read the same raw collection; the phase-2 board keeps
/// its own field name for the source tag.
pub fn register_unpacker_templates(registry: &mut ConfigRegistry) -> Result<()> {
    registry.add_template(ModuleTemplate::new(
        constants::LEGACY_UNPACKER_TEMPLATE,
        "DTuROSRawToDigi",
        ModuleKind::Producer,
        ParamSet::new()
            .with("inputLabel", ParamValue::input_tag("rawDataCollector"))
            .with("debug", ParamValue::Bool(false)),
    ))?;

    registry.add_template(ModuleTemplate::new(
        constants::PHASE2_UNPACKER_TEMPLATE,
        "DTAB7RawToDigi",
        ModuleKind::Producer,
        ParamSet::new()
            .with("DTAB7InputTag", ParamValue::input_tag("rawDataCollector"))
            .with("feds", ParamValue::VInt(vec![1369, 1370, 1371]))
            .with("debug", ParamValue::Bool(false)),
    ))?;

    debug!("Unpacker templates registered");
    Ok(())
}
