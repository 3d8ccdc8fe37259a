//! Attribute-template bundles.
//!
//! An external collaborator packages reusable attribute declarations as
//! embedded resources; this module holds the four-field descriptor
//! bundle the core consumes and a small store keyed by qualified name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::{RegistryError, SourceRegistry};

/// A retrieved attribute-template bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeTemplate {
    /// Generated relative file path, e.g. `Messaging.MessageAttribute.g.cs`.
    pub path: String,
    /// Full source text of the attribute declaration.
    pub source: String,
    /// Simple type name, e.g. `MessageAttribute`.
    pub name: String,
    /// Fully-qualified type name, e.g. `Messaging.MessageAttribute`.
    pub qualified_name: String,
}

/// Insertion-ordered store of attribute templates keyed by their
/// fully-qualified type name.
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: IndexMap<String, AttributeTemplate>,
}

impl TemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, replacing any previous bundle with the same
    /// qualified name.
    pub fn insert(&mut self, template: AttributeTemplate) {
        self.templates
            .insert(template.qualified_name.clone(), template);
    }

    /// Look up a template by fully-qualified type name.
    pub fn get(&self, qualified_name: &str) -> Option<&AttributeTemplate> {
        self.templates.get(qualified_name)
    }

    /// Iterate templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeTemplate> {
        self.templates.values()
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Register every template's source under its relative path.
    pub fn register_all(&self, registry: &mut SourceRegistry) -> Result<(), RegistryError> {
        for template in self.templates.values() {
            registry.add_source(&template.path, &template.source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_attribute() -> AttributeTemplate {
        AttributeTemplate {
            path: "Messaging.MessageAttribute.g.cs".to_string(),
            source: "internal sealed class MessageAttribute { }\n".to_string(),
            name: "MessageAttribute".to_string(),
            qualified_name: "Messaging.MessageAttribute".to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = TemplateStore::new();
        store.insert(message_attribute());

        let template = store.get("Messaging.MessageAttribute").expect("stored");
        assert_eq!(template.name, "MessageAttribute");
        assert!(store.get("Messaging.Unknown").is_none());
    }

    #[test]
    fn test_insert_replaces_same_qualified_name() {
        let mut store = TemplateStore::new();
        store.insert(message_attribute());
        let mut updated = message_attribute();
        updated.source = "// v2\n".to_string();
        store.insert(updated);

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("Messaging.MessageAttribute").unwrap().source,
            "// v2\n"
        );
    }

    #[test]
    fn test_register_all() {
        let mut store = TemplateStore::new();
        store.insert(message_attribute());

        let mut registry = SourceRegistry::new();
        store.register_all(&mut registry).unwrap();

        assert!(registry.get("Messaging.MessageAttribute.g.cs").is_some());
    }
}
