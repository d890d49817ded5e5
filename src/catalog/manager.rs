//! Entity traversal: turns lowered declarations into catalog rows.

use crate::catalog::entity::{Entity, EntityKind};
use crate::catalog::names;
use crate::catalog::packages;
use crate::syntax::{ClassKind, ClassOrObject, Declaration, NamedFunction, SourceFile, SupertypeEntry};

/// Name of the synthetic object holding a file's top-level functions.
pub const PACKAGE_OBJECT: &str = "PackageObject";

/// Accumulates entities for one unit of traversal (typically one file).
/// Entities are appended in traversal order; merging and ordering across
/// files is the finalizer's job.
pub struct EntityManager {
    entities: Vec<Entity>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    /// Traverse one lowered file: materialize its package chain, walk the
    /// top-level declarations, and synthesize the package object for
    /// top-level functions.
    pub fn collect_file(&mut self, file: &SourceFile) {
        let package = file.package.as_deref().unwrap_or("");
        let package_fqn = names::package_fqn(package);
        // The chain for a declared package is emitted by its Package
        // declaration below; only a file without one needs the root here.
        if file.package.is_none() {
            self.add_package(package);
        }

        let mut top_level: Vec<&NamedFunction> = Vec::new();
        for declaration in &file.declarations {
            match declaration {
                Declaration::Package(path) => self.add_package(path),
                Declaration::Class(class) => self.add_class_or_object(class, &package_fqn),
                Declaration::Function(function) => top_level.push(function),
            }
        }

        self.add_package_object(&package_fqn, &top_level);
    }

    pub fn add_package(&mut self, path: &str) {
        packages::materialize(path, &mut self.entities);
    }

    pub fn add_class_or_object(&mut self, decl: &ClassOrObject, container: &str) {
        let fqn = names::qualify(container, &decl.name);
        let (extends, implements) = split_supertypes(&decl.supertypes);
        let number_of_attributes = decl.primary_parameters.len() + decl.properties.len();

        self.entities.push(Entity::class_like(
            &decl.name,
            fqn.clone(),
            container.to_string(),
            entity_kind(decl.kind),
            extends,
            implements,
            decl.functions.len(),
            number_of_attributes,
        ));

        for companion in &decl.companions {
            self.add_class_or_object(companion, &fqn);
        }
        for parameter in &decl.primary_parameters {
            self.add_attribute(parameter, &fqn);
        }
        for property in &decl.properties {
            self.add_attribute(property, &fqn);
        }
        for function in &decl.functions {
            self.add_method(function, &fqn);
        }
        for nested in &decl.nested {
            self.add_class_or_object(nested, &fqn);
        }
    }

    pub fn add_attribute(&mut self, name: &str, container: &str) {
        let fqn = names::qualify(container, name);
        self.entities
            .push(Entity::attribute(name, fqn, container.to_string()));
    }

    pub fn add_method(&mut self, function: &NamedFunction, container: &str) {
        let fqn = names::qualify(container, &function.name);
        self.entities.push(Entity::method(
            &function.name,
            fqn,
            container.to_string(),
            function.parameter_count,
        ));
    }

    /// Synthesize one OBJECT entity holding a file's top-level functions.
    /// A file without top-level functions is a normal, silent case.
    pub fn add_package_object(&mut self, package_fqn: &str, functions: &[&NamedFunction]) {
        if functions.is_empty() {
            return;
        }

        let fqn = names::qualify(package_fqn, PACKAGE_OBJECT);
        self.entities.push(Entity {
            entity_name: Some(PACKAGE_OBJECT.to_string()),
            fully_qualified_name: fqn.clone(),
            container: Some(package_fqn.to_string()),
            kind: EntityKind::Object,
            extends: None,
            implements: Vec::new(),
            number_of_methods: Some(functions.len()),
            number_of_attributes: None,
            number_of_parameters: None,
        });

        for function in functions {
            self.add_method(function, &fqn);
        }
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

fn entity_kind(kind: ClassKind) -> EntityKind {
    match kind {
        ClassKind::Class => EntityKind::Class,
        ClassKind::Interface => EntityKind::Interface,
        ClassKind::Object => EntityKind::Object,
    }
}

/// Split the supertype list into the single extended class and the
/// implemented interfaces. Only the first call-style entry is retained as
/// `extends`; plain entries keep their order.
fn split_supertypes(entries: &[SupertypeEntry]) -> (Option<String>, Vec<String>) {
    let mut extends = None;
    let mut implements = Vec::new();
    for entry in entries {
        match entry {
            SupertypeEntry::Call(text) => {
                if extends.is_none() {
                    extends = Some(text.clone());
                }
            }
            SupertypeEntry::Plain(text) => implements.push(text.clone()),
        }
    }
    (extends, implements)
}
