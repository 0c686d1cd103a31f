use crate::config::constants;
use crate::error::Result;
use crate::params::{ParamSet, ParamValue};
use crate::pipeline::{ConfigRegistry, ModuleKind};
use tracing::debug;

/// Drift-time reconstruction block tuned for cosmic-ray data: no
/// time-of-flight or wire-propagation corrections, cosmics trigger timing.
fn cosmics_drift_algo() -> ParamSet {
    ParamSet::new()
        .with("minTime", ParamValue::Double(-3.0))
        .with("maxTime", ParamValue::Double(415.0))
        .with("doVdriftCorr", ParamValue::Bool(false))
        .with(
            "tTrigModeConfig",
            ParamValue::Nested(
                ParamSet::new()
                    .with("vPropWire", ParamValue::Double(24.4))
                    .with("doTOFCorrection", ParamValue::Bool(false))
                    .with("doWirePropCorrection", ParamValue::Bool(false))
                    .with("doT0Correction", ParamValue::Bool(true))
                    .with("tTrigLabel", ParamValue::str("cosmics"))
                    .with("debug", ParamValue::Bool(false)),
            ),
        )
        .with("tTrigMode", ParamValue::str("DTTTrigSyncFromDB"))
        .with("debug", ParamValue::Bool(false))
}

/// Register the three local reconstruction stages as pre-built singletons:
/// 1D rec-hits from digis, 2D superlayer segments, 4D chamber segments.
pub fn register_reco_modules(registry: &mut ConfigRegistry) -> Result<()> {
    registry.register_module(
        constants::DT_1D_RECHITS,
        "DTRecHitProducer",
        ModuleKind::Producer,
        ParamSet::new()
            .with(
                "dtDigiLabel",
                ParamValue::input_tag(constants::LEGACY_UNPACKER),
            )
            .with("recAlgo", ParamValue::str("DTLinearDriftFromDBAlgo"))
            .with("recAlgoConfig", ParamValue::Nested(cosmics_drift_algo()))
            .with("debug", ParamValue::Bool(false)),
    )?;

    registry.register_module(
        constants::DT_2D_SEGMENTS,
        "DTRecSegment2DProducer",
        ModuleKind::Producer,
        ParamSet::new()
            .with(
                "recHits1DLabel",
                ParamValue::input_tag(constants::DT_1D_RECHITS),
            )
            .with(
                "Reco2DAlgoName",
                ParamValue::str("DTCombinatorialPatternReco"),
            )
            .with(
                "Reco2DAlgoConfig",
                ParamValue::Nested(
                    ParamSet::new()
                        // Wide acceptance windows, cosmics arrive at all angles
                        .with("AlphaMaxPhi", ParamValue::Double(100.0))
                        .with("AlphaMaxTheta", ParamValue::Double(100.0))
                        .with("MaxAllowedHits", ParamValue::Int(50))
                        .with("segmCleanerMode", ParamValue::Int(2))
                        .with("debug", ParamValue::Bool(false)),
                ),
            )
            .with("debug", ParamValue::Bool(false)),
    )?;

    registry.register_module(
        constants::DT_4D_SEGMENTS,
        "DTRecSegment4DProducer",
        ModuleKind::Producer,
        ParamSet::new()
            .with(
                "recHits1DLabel",
                ParamValue::input_tag(constants::DT_1D_RECHITS),
            )
            .with(
                "recHits2DLabel",
                ParamValue::input_tag(constants::DT_2D_SEGMENTS),
            )
            .with(
                "Reco4DAlgoName",
                ParamValue::str("DTCombinatorialPatternReco4D"),
            )
            .with(
                "Reco4DAlgoConfig",
                ParamValue::Nested(
                    ParamSet::new()
                        .with("AllDTRecHits", ParamValue::Bool(true))
                        .with("segmCleanerMode", ParamValue::Int(2))
                        .with("debug", ParamValue::Bool(false)),
                ),
            )
            .with("debug", ParamValue::Bool(false)),
    )?;

    debug!("Local reconstruction stages registered");
    Ok(())
}
