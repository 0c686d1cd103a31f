use crate::catalog::{conditions, reco, unpackers};
use crate::config::constants;
use crate::error::Result;
use crate::params::ParamSet;
use crate::pipeline::ConfigRegistry;
use tracing::{debug, info};

/// Populate a registry with the full offline cosmics calibration catalog.
///
/// Two unpacker instances are cloned from their templates with no
/// overrides. Only the legacy clone is wired into a sequence; the phase-2
/// clone is exposed under its own label for consumers that read out the
/// newer boards.
pub fn build_offline_cosmics(registry: &mut ConfigRegistry) -> Result<()> {
    conditions::register_conditions(registry)?;
    unpackers::register_unpacker_templates(registry)?;
    reco::register_reco_modules(registry)?;

    registry.clone_module(
        constants::LEGACY_UNPACKER_TEMPLATE,
        constants::LEGACY_UNPACKER,
        &ParamSet::new(),
    )?;
    registry.clone_module(
        constants::PHASE2_UNPACKER_TEMPLATE,
        constants::PHASE2_UNPACKER,
        &ParamSet::new(),
    )?;

    registry.define_pipeline(
        constants::RECO_SEQUENCE,
        &[
            constants::DT_1D_RECHITS,
            constants::DT_2D_SEGMENTS,
            constants::DT_4D_SEGMENTS,
        ],
    )?;
    registry.define_pipeline(
        constants::RAW_RECO_SEQUENCE,
        &[
            constants::LEGACY_UNPACKER,
            constants::DT_1D_RECHITS,
            constants::DT_2D_SEGMENTS,
            constants::DT_4D_SEGMENTS,
        ],
    )?;

    debug!(
        "Offline cosmics catalog built: '{}' and '{}'",
        constants::RECO_SEQUENCE,
        constants::RAW_RECO_SEQUENCE
    );
    Ok(())
}

/// Build the offline cosmics catalog in a fresh registry
pub fn offline_cosmics() -> Result<ConfigRegistry> {
    let mut registry = ConfigRegistry::new();
    build_offline_cosmics(&mut registry)?;
    info!(
        "Offline cosmics catalog ready ({} modules, {} pipelines)",
        registry.modules().count(),
        registry.pipelines().count()
    );
    Ok(registry)
}
