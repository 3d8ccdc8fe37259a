//! Registration of finished source text.
//!
//! One emission session ends with a finished text blob plus a file
//! identifier (the hint name). The registry collects those pairs in
//! insertion order, rejects duplicate hint names, and can preview the
//! set as JSON or materialize it on disk for inspection.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use sharpgen_emit::TypeRef;
use thiserror::Error;

/// A finished, registered source text. Text is UTF-8 by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    /// The file identifier, e.g. `A.B.Foo.g.cs`.
    pub hint_name: String,
    /// The full source text.
    pub text: String,
}

/// Errors raised at the registration boundary.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a source with hint name `{0}` is already registered")]
    DuplicateHintName(String),
}

/// Insertion-ordered collection of generated sources for one
/// compilation.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: IndexMap<String, GeneratedSource>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under a hint name derived from the type's
    /// documentation-mode qualified name plus `.g.cs`.
    pub fn add_type_source(
        &mut self,
        ty: &TypeRef,
        text: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let hint_name = format!("{}.g.cs", ty.render_doc());
        self.add_source(hint_name, text)
    }

    /// Register `text` under a namespace-qualified file name plus
    /// suffix, for file-scoped helpers that are not tied to one type.
    pub fn add_named_source(
        &mut self,
        namespace: &str,
        file_name: &str,
        suffix: &str,
        text: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let hint_name = if namespace.is_empty() {
            format!("{file_name}{suffix}")
        } else {
            format!("{namespace}.{file_name}{suffix}")
        };
        self.add_source(hint_name, text)
    }

    /// Register `text` under an explicit hint name.
    pub fn add_source(
        &mut self,
        hint_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let hint_name = hint_name.into();
        if self.sources.contains_key(&hint_name) {
            return Err(RegistryError::DuplicateHintName(hint_name));
        }
        self.sources.insert(
            hint_name.clone(),
            GeneratedSource {
                hint_name,
                text: text.into(),
            },
        );
        Ok(())
    }

    /// Look up a registered source by hint name.
    pub fn get(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.get(hint_name)
    }

    /// Iterate registered sources in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedSource> {
        self.sources.values()
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Render a JSON preview of the registered set.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let sources: Vec<&GeneratedSource> = self.sources.values().collect();
        serde_json::to_string_pretty(&sources)
    }

    /// Write every registered source below `dir`, UTF-8 encoded.
    pub fn write_all(&self, dir: &Path) -> eyre::Result<()> {
        for source in self.sources.values() {
            let path = dir.join(&source.hint_name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, source.text.as_bytes())?;
        }
        Ok(())
    }
}
