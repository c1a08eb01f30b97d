//! Spec maps: the per-field configuration bound to a generator.
//!
//! A spec map names template fields and says how each should be generated,
//! either with a field spec string or, for nested records, with another spec
//! map. It can be built in code or loaded from YAML (JSON is valid YAML):
//!
//! ```yaml
//! label: string[8]
//! nested:
//!   value: integer in <4,6>
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for spec map loading.
#[derive(Debug, thiserror::Error)]
pub enum SpecMapError {
    /// Error reading spec map file
    #[error("Failed to read spec map file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// How one field is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecEntry {
    /// Field spec string, parsed when the generator compiles its plan
    Field(String),

    /// Specs for the fields of a nested record (or of each array element)
    Nested(SpecMap),
}

impl fmt::Display for SpecEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecEntry::Field(spec) => f.write_str(spec),
            SpecEntry::Nested(map) => write!(f, "{map}"),
        }
    }
}

/// Field name to [`SpecEntry`] mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMap {
    entries: BTreeMap<String, SpecEntry>,
}

impl SpecMap {
    /// Create an empty spec map. An empty map leaves every field unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a field spec string to a field.
    pub fn field(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        self.entries
            .insert(name.into(), SpecEntry::Field(spec.into()));
        self
    }

    /// Bind a nested spec map to a record (or array of records) field.
    pub fn nested(mut self, name: impl Into<String>, specs: SpecMap) -> Self {
        self.entries.insert(name.into(), SpecEntry::Nested(specs));
        self
    }

    /// Load a spec map from a YAML (or JSON) string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecMapError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a spec map from a YAML (or JSON) file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecMapError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn get(&self, name: &str) -> Option<&SpecEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SpecMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, entry)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {entry}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder() {
        let specs = SpecMap::new()
            .field("label", "string[8]")
            .nested("nested", SpecMap::new().field("value", "integer in <4,6>"));

        assert_eq!(specs.len(), 2);
        assert_eq!(
            specs.get("label"),
            Some(&SpecEntry::Field("string[8]".into()))
        );
        assert!(matches!(specs.get("nested"), Some(SpecEntry::Nested(_))));
        let names: Vec<&str> = specs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["label", "nested"]);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
firstName: string[10]
star: boolean
address:
  number: integer in <1, 200>
"#;
        let specs = SpecMap::from_yaml(yaml).unwrap();

        assert_eq!(
            specs.get("star"),
            Some(&SpecEntry::Field("boolean".into()))
        );
        let Some(SpecEntry::Nested(address)) = specs.get("address") else {
            panic!("Expected nested spec map for address");
        };
        assert_eq!(
            address.get("number"),
            Some(&SpecEntry::Field("integer in <1, 200>".into()))
        );
    }

    #[test]
    fn test_from_json_text() {
        let specs = SpecMap::from_yaml(r#"{"value": "number > 5"}"#).unwrap();
        assert_eq!(specs, SpecMap::new().field("value", "number > 5"));
    }

    #[test]
    fn test_from_yaml_rejects_non_string_spec() {
        assert!(SpecMap::from_yaml("value: 5").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: string[3]").unwrap();

        let specs = SpecMap::from_file(file.path()).unwrap();
        assert_eq!(specs, SpecMap::new().field("name", "string[3]"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = SpecMap::from_file("/nonexistent/specs.yaml");
        assert!(matches!(result, Err(SpecMapError::IoError(_))));
    }

    #[test]
    fn test_display() {
        let specs = SpecMap::new()
            .field("a", "boolean")
            .nested("b", SpecMap::new().field("c", "string"));
        assert_eq!(specs.to_string(), "{a: boolean, b: {c: string}}");
    }
}
