// Fluent pipeline construction over a registry
use crate::error::{ConfigError, Result};
use crate::pipeline::core::Pipeline;
use crate::pipeline::registry::ConfigRegistry;

/// Builder for constructing pipelines from registered modules.
///
/// Labels are validated as they are added; `build` resolves them to shared
/// module references without registering the result.
pub struct PipelineBuilder<'a> {
    name: String,
    registry: &'a ConfigRegistry,
    labels: Vec<String>,
}

impl<'a> PipelineBuilder<'a> {
    /// Create a new pipeline builder
    pub fn new(name: impl Into<String>, registry: &'a ConfigRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
            labels: Vec::new(),
        }
    }

    /// Add a module by label
    pub fn add_module(mut self, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if self.registry.module(&label).is_none() {
            return Err(ConfigError::UnknownModule { label });
        }
        self.labels.push(label);
        Ok(self)
    }

    /// Add multiple modules by labels
    pub fn add_modules<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self = self.add_module(label)?;
        }
        Ok(self)
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        crate::pipeline::module::validate_name(&self.name)?;
        if self.labels.is_empty() {
            return Err(ConfigError::EmptyPipeline { name: self.name });
        }

        let labels: Vec<&str> = self.labels.iter().map(|l| l.as_str()).collect();
        let modules = self.registry.resolve_members(&self.name, &labels)?;
        Ok(Pipeline::new(self.name, modules))
    }
}
