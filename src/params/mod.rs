use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A single module configuration value.
///
/// `InputTag` refers to another module's output by label and is what the
/// wiring checks resolve. `Nested` holds a whole sub-configuration, used by
/// reconstruction algorithm blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
    InputTag(String),
    VInt(Vec<i64>),
    VDouble(Vec<f64>),
    VStr(Vec<String>),
    Nested(ParamSet),
}

impl ParamValue {
    /// Create a string value
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Create an input tag referring to a module label
    pub fn input_tag(label: impl Into<String>) -> Self {
        Self::InputTag(label.into())
    }
}

/// An ordered set of named configuration values.
///
/// Field order is preserved; patching never mutates the source set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    fields: IndexMap<String, ParamValue>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.fields.insert(name.into(), value);
    }

    /// Fluent insert for catalog construction
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.fields.iter()
    }

    /// Copy this set and apply field overrides on top.
    ///
    /// Overrides replace existing fields wholesale and append unknown ones;
    /// the source set is left untouched.
    pub fn patch(&self, overrides: &ParamSet) -> ParamSet {
        let mut patched = self.clone();
        for (name, value) in overrides.iter() {
            patched.fields.insert(name.clone(), value.clone());
        }
        patched
    }

    /// Typed access via a well-known key
    pub fn get_typed<T: FromParamValue>(&self, key: ParamKey<T>) -> Option<&T> {
        self.get(key.name()).and_then(T::from_value)
    }

    /// Collect every input tag in this set, recursing through nested sets.
    ///
    /// Returns `(field path, target label)` pairs; nested paths are joined
    /// with a dot.
    pub fn input_tags(&self) -> Vec<(String, String)> {
        let mut tags = Vec::new();
        self.collect_input_tags("", &mut tags);
        tags
    }

    fn collect_input_tags(&self, prefix: &str, tags: &mut Vec<(String, String)>) {
        for (name, value) in self.iter() {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match value {
                ParamValue::InputTag(label) => tags.push((path, label.clone())),
                ParamValue::Nested(nested) => nested.collect_input_tags(&path, tags),
                _ => {}
            }
        }
    }
}

/// A type-safe key for well-known parameter fields
pub struct ParamKey<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> ParamKey<T> {
    /// Create a new typed key with a static name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    /// Get the key name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ParamKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            _phantom: PhantomData,
        }
    }
}

impl<T> Copy for ParamKey<T> {}

/// Extract a typed reference out of a `ParamValue`
pub trait FromParamValue: Sized {
    fn from_value(value: &ParamValue) -> Option<&Self>;
}

impl FromParamValue for bool {
    fn from_value(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromParamValue for i64 {
    fn from_value(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl FromParamValue for f64 {
    fn from_value(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Double(d) => Some(d),
            _ => None,
        }
    }
}

impl FromParamValue for String {
    fn from_value(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FromParamValue for ParamSet {
    fn from_value(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Nested(set) => Some(set),
            _ => None,
        }
    }
}

// Common key definitions

/// Debug flag carried by most modules
pub const DEBUG: ParamKey<bool> = ParamKey::new("debug");

/// Conditions global tag
pub const GLOBAL_TAG: ParamKey<String> = ParamKey::new("globaltag");

/// Conditions database connect string
pub const CONNECT: ParamKey<String> = ParamKey::new("connect");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_typed_get() {
        let mut params = ParamSet::new();
        params.insert("debug", ParamValue::Bool(false));
        params.insert("threshold", ParamValue::Double(12.5));
        params.insert("connect", ParamValue::str("frontier://test"));

        assert_eq!(params.get_typed(DEBUG), Some(&false));
        assert_eq!(params.get_typed(CONNECT), Some(&"frontier://test".to_string()));
        assert_eq!(params.get("threshold"), Some(&ParamValue::Double(12.5)));

        // Wrong type yields nothing
        assert_eq!(params.get_typed(GLOBAL_TAG), None);
        assert_eq!(params.get("nonexistent"), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = ParamSet::new()
            .with("c", ParamValue::Int(3))
            .with("a", ParamValue::Int(1))
            .with("b", ParamValue::Int(2));

        let names: Vec<&String> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_patch_replaces_and_appends() {
        let defaults = ParamSet::new()
            .with("inputLabel", ParamValue::input_tag("rawDataCollector"))
            .with("debug", ParamValue::Bool(false));

        let overrides = ParamSet::new()
            .with("debug", ParamValue::Bool(true))
            .with("fedList", ParamValue::VInt(vec![770, 771, 772]));

        let patched = defaults.patch(&overrides);

        assert_eq!(patched.get_typed(DEBUG), Some(&true));
        assert_eq!(
            patched.get("inputLabel"),
            Some(&ParamValue::input_tag("rawDataCollector"))
        );
        assert_eq!(
            patched.get("fedList"),
            Some(&ParamValue::VInt(vec![770, 771, 772]))
        );

        // Source set is untouched
        assert_eq!(defaults.get_typed(DEBUG), Some(&false));
        assert!(!defaults.contains("fedList"));
    }

    #[test]
    fn test_patch_with_empty_overrides_is_identity() {
        let defaults = ParamSet::new()
            .with("debug", ParamValue::Bool(false))
            .with("window", ParamValue::VDouble(vec![-3.0, 415.0]));

        let patched = defaults.patch(&ParamSet::new());
        assert_eq!(patched, defaults);
    }

    #[test]
    fn test_input_tags_recurse_nested_sets() {
        let params = ParamSet::new()
            .with("dtDigiLabel", ParamValue::input_tag("muonDTDigis"))
            .with("debug", ParamValue::Bool(false))
            .with(
                "recAlgoConfig",
                ParamValue::Nested(
                    ParamSet::new()
                        .with("seedSource", ParamValue::input_tag("dt1DRecHits"))
                        .with("minTime", ParamValue::Double(-3.0)),
                ),
            );

        let tags = params.input_tags();
        assert_eq!(
            tags,
            vec![
                ("dtDigiLabel".to_string(), "muonDTDigis".to_string()),
                (
                    "recAlgoConfig.seedSource".to_string(),
                    "dt1DRecHits".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let params = ParamSet::new()
            .with("inputLabel", ParamValue::input_tag("rawDataCollector"))
            .with("debug", ParamValue::Bool(false))
            .with(
                "DBParameters",
                ParamValue::Nested(
                    ParamSet::new().with("messageLevel", ParamValue::Int(0)),
                ),
            );

        let json = serde_json::to_string(&params).unwrap();
        let restored: ParamSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, params);
    }
}
