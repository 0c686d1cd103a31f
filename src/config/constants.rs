//! Fixed names of the offline cosmics calibration catalog

/// Reconstruction-only sequence
pub const RECO_SEQUENCE: &str = "dtCalibOfflineReco";

/// Unpacking plus reconstruction sequence
pub const RAW_RECO_SEQUENCE: &str = "dtCalibOfflineRecoRAW";

/// Legacy readout unpacker template
pub const LEGACY_UNPACKER_TEMPLATE: &str = "dturosunpacker";

/// Phase-2 readout unpacker template
pub const PHASE2_UNPACKER_TEMPLATE: &str = "dtAB7unpacker";

/// Cloned legacy unpacker instance
pub const LEGACY_UNPACKER: &str = "muonDTDigis";

/// Cloned phase-2 unpacker instance
pub const PHASE2_UNPACKER: &str = "muonDTDigisPhase2";

/// Local reconstruction stages, in processing order
pub const DT_1D_RECHITS: &str = "dt1DRecHits";
pub const DT_2D_SEGMENTS: &str = "dt2DSegments";
pub const DT_4D_SEGMENTS: &str = "dt4DSegments";

/// Conditions global tag source
pub const GLOBAL_TAG_LABEL: &str = "globalTag";

/// Event-data sources supplied by the framework, not by any catalog module
pub const EXTERNAL_SOURCES: &[&str] = &["rawDataCollector"];

/// Conditions database connect string
pub const CONDITIONS_DB: &str = "frontier://FrontierProd/CMS_CONDITIONS";

/// Debug log file written next to the console output
pub const LOG_FILE: &str = "dtcalib.log";
