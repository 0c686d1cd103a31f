use crate::error::{ConfigError, Result};
use crate::pipeline::module::Module;
use std::sync::Arc;
use tracing::debug;

/// An ordered, immutable sequence of modules.
///
/// Order is fixed at construction and significant to the external engine.
/// Members are shared by reference, so two pipelines may hold the very same
/// module instances.
pub struct Pipeline {
    name: String,
    modules: Vec<Arc<Module>>,
}

impl Pipeline {
    /// Invariants (non-empty, producers only, no forward references) are
    /// enforced by the registry and builder construction paths.
    pub(crate) fn new(name: impl Into<String>, modules: Vec<Arc<Module>>) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Module>> {
        self.modules.get(index)
    }

    pub fn modules(&self) -> &[Arc<Module>] {
        &self.modules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Module>> {
        self.modules.iter()
    }

    /// Ordered member labels
    pub fn labels(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.label()).collect()
    }

    /// Check that every input tag of every member resolves to an available
    /// source.
    ///
    /// Available sources accumulate in member order: a member may consume
    /// the declared external sources and any member placed before it, but
    /// never one placed after it.
    pub fn validate_inputs(&self, external_sources: &[String]) -> Result<()> {
        let mut available: Vec<String> = external_sources.to_vec();

        for module in &self.modules {
            for (field, target) in module.params().input_tags() {
                debug!(
                    "Pipeline '{}': module '{}' consumes '{}' via {}",
                    self.name,
                    module.label(),
                    target,
                    field
                );
                if !available.iter().any(|source| source == &target) {
                    return Err(ConfigError::UnresolvedInput {
                        pipeline: self.name.clone(),
                        module: module.label().to_string(),
                        tag: format!("{field} -> {target}"),
                    });
                }
            }
            available.push(module.label().to_string());
        }

        debug!(
            "Pipeline '{}' input wiring resolved for {} modules",
            self.name,
            self.modules.len()
        );
        Ok(())
    }
}
