use serde::{Deserialize, Serialize};

/// One row of the extracted structural catalog. Constructed once during
/// traversal and never mutated; the finalizer may drop duplicates but does
/// not edit survivors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    pub fully_qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_methods: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_attributes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_parameters: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Package,
    Class,
    Interface,
    Object,
    Attribute,
    Method,
}

impl Entity {
    pub fn package(name: &str, fqn: String, container: Option<String>) -> Self {
        Self {
            entity_name: Some(name.to_string()),
            fully_qualified_name: fqn,
            container,
            kind: EntityKind::Package,
            extends: None,
            implements: Vec::new(),
            number_of_methods: None,
            number_of_attributes: None,
            number_of_parameters: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn class_like(
        name: &str,
        fqn: String,
        container: String,
        kind: EntityKind,
        extends: Option<String>,
        implements: Vec<String>,
        number_of_methods: usize,
        number_of_attributes: usize,
    ) -> Self {
        Self {
            entity_name: Some(name.to_string()),
            fully_qualified_name: fqn,
            container: Some(container),
            kind,
            extends,
            implements,
            number_of_methods: Some(number_of_methods),
            number_of_attributes: Some(number_of_attributes),
            number_of_parameters: None,
        }
    }

    pub fn attribute(name: &str, fqn: String, container: String) -> Self {
        Self {
            entity_name: Some(name.to_string()),
            fully_qualified_name: fqn,
            container: Some(container),
            kind: EntityKind::Attribute,
            extends: None,
            implements: Vec::new(),
            number_of_methods: None,
            number_of_attributes: None,
            number_of_parameters: None,
        }
    }

    pub fn method(name: &str, fqn: String, container: String, parameter_count: usize) -> Self {
        Self {
            entity_name: Some(name.to_string()),
            fully_qualified_name: fqn,
            container: Some(container),
            kind: EntityKind::Method,
            extends: None,
            implements: Vec::new(),
            number_of_methods: None,
            number_of_attributes: None,
            number_of_parameters: Some(parameter_count),
        }
    }

    /// Identity key for deduplication.
    pub fn identity(&self) -> (&str, EntityKind) {
        (self.fully_qualified_name.as_str(), self.kind)
    }
}
