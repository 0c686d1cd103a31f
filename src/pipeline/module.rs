use crate::error::{ConfigError, Result};
use crate::params::ParamSet;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Check a template name, module label or pipeline name against the
/// allowed pattern
pub fn validate_name(name: &str) -> Result<()> {
    let pattern = NAME_PATTERN
        .get_or_init(|| Regex::new("^[A-Za-z][A-Za-z0-9_]*$").expect("invalid name pattern"));
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// What role a module plays in the external engine.
///
/// Only producers take part in event flow, so only they may appear in a
/// pipeline. Conditions sources and services are opaque collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Producer,
    ConditionsSource,
    Service,
}

/// Identity of a module instance, assigned by the registry.
///
/// Two instances never share an id, even when cloned from the same template
/// with equal field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleId(u64);

impl ModuleId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A named module definition used as a source for cloning instances.
///
/// Templates are plain values; instantiating one never mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleTemplate {
    name: String,
    plugin: String,
    kind: ModuleKind,
    defaults: ParamSet,
}

impl ModuleTemplate {
    pub fn new(
        name: impl Into<String>,
        plugin: impl Into<String>,
        kind: ModuleKind,
        defaults: ParamSet,
    ) -> Self {
        Self {
            name: name.into(),
            plugin: plugin.into(),
            kind,
            defaults,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn defaults(&self) -> &ParamSet {
        &self.defaults
    }

    /// Produce a fresh module from this template's defaults patched with
    /// `overrides`
    pub(crate) fn instantiate(&self, id: ModuleId, label: &str, overrides: &ParamSet) -> Module {
        Module {
            id,
            label: label.to_string(),
            plugin: self.plugin.clone(),
            kind: self.kind,
            params: self.defaults.patch(overrides),
        }
    }
}

/// An opaque, independently configured processing unit.
///
/// Modules are built once at configuration time and shared by reference;
/// a module referenced by several pipelines is one allocation.
#[derive(Debug, Serialize)]
pub struct Module {
    id: ModuleId,
    label: String,
    plugin: String,
    kind: ModuleKind,
    params: ParamSet,
}

impl Module {
    pub(crate) fn new(
        id: ModuleId,
        label: impl Into<String>,
        plugin: impl Into<String>,
        kind: ModuleKind,
        params: ParamSet,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            plugin: plugin.into(),
            kind,
            params,
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }
}
