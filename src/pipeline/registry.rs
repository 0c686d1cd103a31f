// Explicit catalog registry, no framework-global state
use crate::error::{ConfigError, Result};
use crate::params::ParamSet;
use crate::pipeline::core::Pipeline;
use crate::pipeline::module::{Module, ModuleId, ModuleKind, ModuleTemplate, validate_name};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Registry for module templates, module instances and named pipelines.
///
/// Everything is created once at configuration-build time and read-only
/// afterwards; the registry is the single owner of definition order.
pub struct ConfigRegistry {
    templates: IndexMap<String, ModuleTemplate>,
    modules: IndexMap<String, Arc<Module>>,
    pipelines: IndexMap<String, Pipeline>,
    next_id: u64,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: IndexMap::new(),
            modules: IndexMap::new(),
            pipelines: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Register a module template under its own name
    pub fn add_template(&mut self, template: ModuleTemplate) -> Result<()> {
        validate_name(template.name())?;
        if self.templates.contains_key(template.name()) {
            return Err(ConfigError::DuplicateTemplate {
                name: template.name().to_string(),
            });
        }
        debug!(
            "Registering template '{}' (plugin '{}')",
            template.name(),
            template.plugin()
        );
        self.templates.insert(template.name().to_string(), template);
        Ok(())
    }

    /// Clone a template into a fresh, independently configured module.
    ///
    /// The new module copies the template's defaults patched with
    /// `overrides`; the template and any earlier clones are unaffected.
    pub fn clone_module(
        &mut self,
        template_name: &str,
        label: &str,
        overrides: &ParamSet,
    ) -> Result<Arc<Module>> {
        validate_name(label)?;
        if self.modules.contains_key(label) {
            return Err(ConfigError::DuplicateModule {
                label: label.to_string(),
            });
        }
        let template =
            self.templates
                .get(template_name)
                .ok_or_else(|| ConfigError::UnknownTemplate {
                    name: template_name.to_string(),
                })?;

        let id = ModuleId::new(self.next_id);
        let module = Arc::new(template.instantiate(id, label, overrides));
        self.next_id += 1;

        debug!(
            "Cloned module '{}' from template '{}' ({} overrides)",
            label,
            template_name,
            overrides.len()
        );
        self.modules.insert(label.to_string(), Arc::clone(&module));
        Ok(module)
    }

    /// Register an already-built module instance under `label`.
    ///
    /// This is the import path for pre-built singletons that have no
    /// template in this registry.
    pub fn register_module(
        &mut self,
        label: &str,
        plugin: &str,
        kind: ModuleKind,
        params: ParamSet,
    ) -> Result<Arc<Module>> {
        validate_name(label)?;
        if self.modules.contains_key(label) {
            return Err(ConfigError::DuplicateModule {
                label: label.to_string(),
            });
        }

        let id = ModuleId::new(self.next_id);
        self.next_id += 1;
        let module = Arc::new(Module::new(id, label, plugin, kind, params));

        debug!("Registered module '{}' (plugin '{}')", label, plugin);
        self.modules.insert(label.to_string(), Arc::clone(&module));
        Ok(module)
    }

    /// Register `name` as the fixed ordered sequence of the given module
    /// labels.
    ///
    /// Every label must already be registered and refer to a producer, so
    /// forward references are impossible by construction.
    pub fn define_pipeline(&mut self, name: &str, labels: &[&str]) -> Result<&Pipeline> {
        validate_name(name)?;
        if self.pipelines.contains_key(name) {
            return Err(ConfigError::DuplicatePipeline {
                name: name.to_string(),
            });
        }
        if labels.is_empty() {
            return Err(ConfigError::EmptyPipeline {
                name: name.to_string(),
            });
        }

        let modules = self.resolve_members(name, labels)?;

        debug!(
            "Defining pipeline '{}' with {} modules: {:?}",
            name,
            modules.len(),
            labels
        );
        let (index, _) = self
            .pipelines
            .insert_full(name.to_string(), Pipeline::new(name, modules));
        Ok(&self.pipelines[index])
    }

    /// Resolve an ordered label list to shared module references
    pub(crate) fn resolve_members(
        &self,
        pipeline: &str,
        labels: &[&str],
    ) -> Result<Vec<Arc<Module>>> {
        let mut modules = Vec::with_capacity(labels.len());
        for label in labels {
            let module = self
                .modules
                .get(*label)
                .ok_or_else(|| ConfigError::UnknownModule {
                    label: label.to_string(),
                })?;
            if module.kind() != ModuleKind::Producer {
                return Err(ConfigError::NotAProducer {
                    pipeline: pipeline.to_string(),
                    label: label.to_string(),
                });
            }
            modules.push(Arc::clone(module));
        }
        Ok(modules)
    }

    pub fn template(&self, name: &str) -> Option<&ModuleTemplate> {
        self.templates.get(name)
    }

    pub fn module(&self, label: &str) -> Option<&Arc<Module>> {
        self.modules.get(label)
    }

    pub fn pipeline(&self, name: &str) -> Option<&Pipeline> {
        self.pipelines.get(name)
    }

    /// Templates in definition order
    pub fn templates(&self) -> impl Iterator<Item = &ModuleTemplate> {
        self.templates.values()
    }

    /// Modules in definition order
    pub fn modules(&self) -> impl Iterator<Item = &Arc<Module>> {
        self.modules.values()
    }

    /// Pipelines in definition order
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        self.pipelines.values()
    }

    /// Validate input wiring for every pipeline.
    ///
    /// A member may consume the declared external sources, any member placed
    /// before it, and any registered producer that is not itself a member of
    /// the pipeline (digis or hits supplied by an upstream step).
    pub fn check(&self, external_sources: &[&str]) -> Result<()> {
        for pipeline in self.pipelines.values() {
            let member_labels = pipeline.labels();
            let mut available: Vec<String> =
                external_sources.iter().map(|s| s.to_string()).collect();
            available.extend(
                self.modules
                    .values()
                    .filter(|m| {
                        m.kind() == ModuleKind::Producer && !member_labels.contains(&m.label())
                    })
                    .map(|m| m.label().to_string()),
            );
            pipeline.validate_inputs(&available)?;
        }
        Ok(())
    }

    /// Serializable snapshot of the whole catalog.
    ///
    /// Pipelines are listed as ordered label sequences so shared modules
    /// stay shared in the output.
    pub fn dump(&self) -> CatalogDump<'_> {
        CatalogDump {
            templates: self.templates.values().collect(),
            modules: self.modules.values().map(|m| m.as_ref()).collect(),
            pipelines: self
                .pipelines
                .values()
                .map(|p| PipelineDump {
                    name: p.name(),
                    modules: p.labels(),
                })
                .collect(),
        }
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of a registry for serialization
#[derive(Debug, Serialize)]
pub struct CatalogDump<'a> {
    pub templates: Vec<&'a ModuleTemplate>,
    pub modules: Vec<&'a Module>,
    pub pipelines: Vec<PipelineDump<'a>>,
}

/// A pipeline as an ordered label sequence
#[derive(Debug, Serialize)]
pub struct PipelineDump<'a> {
    pub name: &'a str,
    pub modules: Vec<&'a str>,
}
