//! Logical config names and the bundle the simulation check fills

use crate::yaml::Document;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// The two configuration files an application loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKind {
    Agents,
    Tasks,
}

impl ConfigKind {
    /// Fixed check order
    pub const ALL: [ConfigKind; 2] = [ConfigKind::Agents, ConfigKind::Tasks];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKind::Agents => "agents",
            ConfigKind::Tasks => "tasks",
        }
    }
}

/// Documents loaded under their logical names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBundle {
    documents: BTreeMap<ConfigKind, Document>,
}

impl ConfigBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ConfigKind, document: Document) {
        self.documents.insert(kind, document);
    }

    pub fn get(&self, kind: ConfigKind) -> Option<&Document> {
        self.documents.get(&kind)
    }

    /// The document for `kind`, or an empty mapping when it was not loaded
    pub fn get_or_default(&self, kind: ConfigKind) -> Cow<'_, Document> {
        match self.documents.get(&kind) {
            Some(document) => Cow::Borrowed(document),
            None => Cow::Owned(Document::empty_mapping()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ConfigKind::Agents.name(), "agents");
        assert_eq!(ConfigKind::Tasks.name(), "tasks");
    }

    #[test]
    fn test_default_is_empty_mapping() {
        let mut bundle = ConfigBundle::new();
        bundle.insert(ConfigKind::Tasks, Document::String("x".into()));

        assert_eq!(bundle.get_or_default(ConfigKind::Agents).type_name(), "mapping");
        assert_eq!(bundle.get_or_default(ConfigKind::Tasks).type_name(), "string");
        assert!(bundle.get(ConfigKind::Agents).is_none());
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_recorded_null_is_kept() {
        let mut bundle = ConfigBundle::new();
        bundle.insert(ConfigKind::Agents, Document::Null);
        assert!(!bundle.is_empty());
        assert_eq!(bundle.get_or_default(ConfigKind::Agents).type_name(), "null");
    }
}
