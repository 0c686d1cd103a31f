pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod pipeline;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use params::{ParamKey, ParamSet, ParamValue};
pub use pipeline::{
    ConfigRegistry, Module, ModuleId, ModuleKind, ModuleTemplate, Pipeline, PipelineBuilder,
};
