// Concrete offline cosmics calibration catalog.
// Registration is explicit: nothing here runs before the caller asks for it.

pub mod conditions;
pub mod cosmics;
pub mod reco;
pub mod unpackers;

pub use cosmics::{build_offline_cosmics, offline_cosmics};
