//! Host plugin container abstraction
//!
//! The host framework owns the loaded plugin and its metadata. Everything the
//! rest of the crate needs from it goes through [`PluginContainer`] and
//! [`PluginManager`], so a real host binding and the JSON-backed
//! [`PluginDescriptor`] are interchangeable.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::plugin::error::DescriptorError;

/// A dependency declared by a plugin
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDependency {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

impl PluginDependency {
    pub fn new(id: &str, version: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            version: version.map(str::to_string),
            optional: false,
        }
    }
}

/// Handle to a plugin loaded by the host
#[cfg_attr(test, automock)]
pub trait PluginContainer: Send + Sync {
    fn id(&self) -> String;

    fn name(&self) -> String;

    fn version(&self) -> Option<String>;

    fn description(&self) -> Option<String>;

    fn url(&self) -> Option<String>;

    fn authors(&self) -> Vec<String>;

    fn dependencies(&self) -> Vec<PluginDependency>;

    /// Find a declared dependency by id
    fn dependency(&self, id: &str) -> Option<PluginDependency> {
        self.dependencies().into_iter().find(|d| d.id == id)
    }
}

/// Lookup of loaded plugins by id
#[cfg_attr(test, automock)]
pub trait PluginManager: Send + Sync {
    fn plugin(&self, id: &str) -> Option<Arc<dyn PluginContainer>>;
}

/// Plugin metadata as written in a descriptor file
///
/// ```json
/// {
///   "id": "foundations",
///   "name": "Foundations",
///   "version": "0.1.0-SNAPSHOT",
///   "authors": ["Alice"],
///   "dependencies": [{ "id": "spongeapi", "version": "7.1.0" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub id: String,
    /// Display name; the id is used when absent
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub authors: Vec<String>,
    pub dependencies: Vec<PluginDependency>,
}

impl PluginDescriptor {
    pub fn from_json(content: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl PluginContainer for PluginDescriptor {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.clone())
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn url(&self) -> Option<String> {
        self.url.clone()
    }

    fn authors(&self) -> Vec<String> {
        self.authors.clone()
    }

    fn dependencies(&self) -> Vec<PluginDependency> {
        self.dependencies.clone()
    }
}

/// In-memory [`PluginManager`] keyed by plugin id
#[derive(Default)]
pub struct StaticPluginManager {
    plugins: HashMap<String, Arc<dyn PluginContainer>>,
}

impl StaticPluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container, replacing any previous one with the same id
    pub fn register(&mut self, container: Arc<dyn PluginContainer>) {
        self.plugins.insert(container.id(), container);
    }
}

impl PluginManager for StaticPluginManager {
    fn plugin(&self, id: &str) -> Option<Arc<dyn PluginContainer>> {
        self.plugins.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DESCRIPTOR: &str = r#"{
        "id": "foundations",
        "name": "Foundations",
        "version": "0.1.0-SNAPSHOT",
        "description": "Core utilities",
        "url": "https://pxlpowered.github.io",
        "authors": ["Alice", "Bob"],
        "dependencies": [
            { "id": "spongeapi", "version": "7.1.0" },
            { "id": "luckperms", "optional": true }
        ]
    }"#;

    #[test]
    fn descriptor_from_full_object_parses_all_fields() {
        let descriptor = PluginDescriptor::from_json(DESCRIPTOR).unwrap();

        assert_eq!(
            descriptor,
            PluginDescriptor {
                id: "foundations".to_string(),
                name: Some("Foundations".to_string()),
                version: Some("0.1.0-SNAPSHOT".to_string()),
                description: Some("Core utilities".to_string()),
                url: Some("https://pxlpowered.github.io".to_string()),
                authors: vec!["Alice".to_string(), "Bob".to_string()],
                dependencies: vec![
                    PluginDependency::new("spongeapi", Some("7.1.0")),
                    PluginDependency {
                        id: "luckperms".to_string(),
                        version: None,
                        optional: true,
                    },
                ],
            }
        );
    }

    #[test]
    fn descriptor_from_partial_object_uses_defaults_for_missing_fields() {
        let descriptor = PluginDescriptor::from_json(r#"{ "id": "foundations" }"#).unwrap();

        assert_eq!(descriptor.name(), "foundations");
        assert_eq!(descriptor.version(), None);
        assert!(descriptor.authors().is_empty());
        assert!(descriptor.dependencies().is_empty());
    }

    #[test]
    fn descriptor_from_invalid_json_fails() {
        let result = PluginDescriptor::from_json("{ not json");
        assert!(matches!(result, Err(DescriptorError::Json(_))));
    }

    #[rstest]
    #[case("spongeapi", Some(PluginDependency::new("spongeapi", Some("7.1.0"))))]
    #[case("missing", None)]
    fn dependency_finds_declared_dependency_by_id(
        #[case] id: &str,
        #[case] expected: Option<PluginDependency>,
    ) {
        let descriptor = PluginDescriptor::from_json(DESCRIPTOR).unwrap();
        assert_eq!(descriptor.dependency(id), expected);
    }

    #[test]
    fn static_manager_returns_registered_plugin() {
        let mut manager = StaticPluginManager::new();
        manager.register(Arc::new(PluginDescriptor::from_json(DESCRIPTOR).unwrap()));

        let plugin = manager.plugin("foundations").unwrap();
        assert_eq!(plugin.name(), "Foundations");
        assert!(manager.plugin("other").is_none());
    }
}
