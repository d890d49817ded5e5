use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use kotlin_catalog::{
    finalize, lower_file, Catalog, Entity, EntityKind, EntityManager, FileWalker, LanguageRegistry,
    Parser,
};

fn create_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn catalog_for(root: &Path) -> Catalog {
    let walker = FileWalker::new(LanguageRegistry::new());
    let parser = Parser::new(LanguageRegistry::new());

    let mut entities: Vec<Entity> = Vec::new();
    for file in walker.walk(root).unwrap() {
        let Ok(parsed) = parser.parse_file(&file) else {
            continue;
        };
        let source_file = lower_file(&parsed);
        let mut manager = EntityManager::new();
        manager.collect_file(&source_file);
        entities.extend(manager.into_entities());
    }
    finalize(entities)
}

#[test]
fn package_chain_is_materialized_and_linked() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "C.kt", "package a.b.c\n\nclass C\n");

    let catalog = catalog_for(dir.path());

    for (fqn, parent) in [
        ("root.a", Some("root")),
        ("root.a.b", Some("root.a")),
        ("root.a.b.c", Some("root.a.b")),
    ] {
        let entity = catalog.get(fqn).unwrap_or_else(|| panic!("missing {fqn}"));
        assert_eq!(entity.kind, EntityKind::Package);
        assert_eq!(entity.container.as_deref(), parent);
    }
    assert_eq!(catalog.get("root").unwrap().container, None);
}

#[test]
fn class_counts_and_relations() {
    let dir = TempDir::new().unwrap();
    create_file(
        dir.path(),
        "Foo.kt",
        r#"package demo

class Foo(val id: Int) : Bar(), Baz {
    val name: String = "foo"

    fun first() {}
    fun second(a: Int, b: Int) {}
}
"#,
    );

    let catalog = catalog_for(dir.path());

    let foo = catalog.get("root.demo.Foo").unwrap();
    assert_eq!(foo.kind, EntityKind::Class);
    assert_eq!(foo.extends.as_deref(), Some("Bar"));
    assert_eq!(foo.implements, vec!["Baz"]);
    assert_eq!(foo.number_of_attributes, Some(2));
    assert_eq!(foo.number_of_methods, Some(2));

    assert_eq!(
        catalog.get("root.demo.Foo.id").unwrap().kind,
        EntityKind::Attribute
    );
    assert_eq!(
        catalog.get("root.demo.Foo.name").unwrap().kind,
        EntityKind::Attribute
    );
    let second = catalog.get("root.demo.Foo.second").unwrap();
    assert_eq!(second.kind, EntityKind::Method);
    assert_eq!(second.number_of_parameters, Some(2));
    assert_eq!(second.container.as_deref(), Some("root.demo.Foo"));
}

#[test]
fn nested_class_and_companion_qualify_transitively() {
    let dir = TempDir::new().unwrap();
    create_file(
        dir.path(),
        "Outer.kt",
        r#"package p

class Outer {
    companion object {
        fun create() {}
    }

    class Inner {
        fun poke() {}
    }
}
"#,
    );

    let catalog = catalog_for(dir.path());

    let inner = catalog.get("root.p.Outer.Inner").unwrap();
    assert_eq!(inner.container.as_deref(), Some("root.p.Outer"));

    let companion = catalog.get("root.p.Outer.Companion").unwrap();
    assert_eq!(companion.kind, EntityKind::Object);
    assert!(catalog.get("root.p.Outer.Companion.create").is_some());
    assert!(catalog.get("root.p.Outer.Inner.poke").is_some());
}

#[test]
fn top_level_functions_get_a_package_object() {
    let dir = TempDir::new().unwrap();
    create_file(
        dir.path(),
        "Util.kt",
        "package util\n\nfun add(a: Int, b: Int) = a + b\nfun noop() {}\n",
    );

    let catalog = catalog_for(dir.path());

    let package_object = catalog.get("root.util.PackageObject").unwrap();
    assert_eq!(package_object.kind, EntityKind::Object);
    assert_eq!(package_object.number_of_methods, Some(2));

    let add = catalog.get("root.util.PackageObject.add").unwrap();
    assert_eq!(add.number_of_parameters, Some(2));
    assert!(catalog.get("root.util.PackageObject.noop").is_some());
}

#[test]
fn duplicate_packages_across_files_collapse() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "A.kt", "package x.y\n\nclass A\n");
    create_file(dir.path(), "B.kt", "package x.y\n\nclass B\n");

    let walker = FileWalker::new(LanguageRegistry::new());
    let parser = Parser::new(LanguageRegistry::new());

    let mut entities: Vec<Entity> = Vec::new();
    for file in walker.walk(dir.path()).unwrap() {
        let parsed = parser.parse_file(&file).unwrap();
        let source_file = lower_file(&parsed);
        let mut manager = EntityManager::new();
        manager.collect_file(&source_file);
        entities.extend(manager.into_entities());
    }

    let package_rows = entities
        .iter()
        .filter(|e| e.fully_qualified_name == "root.x.y" && e.kind == EntityKind::Package)
        .count();
    assert_eq!(package_rows, 2, "both files emit the package row");

    let catalog = finalize(entities);
    assert!(catalog.get("root.x.y").is_some());
    assert!(catalog.get("root.x.y.A").is_some());
    assert!(catalog.get("root.x.y.B").is_some());
}

#[test]
fn interface_and_object_kinds() {
    let dir = TempDir::new().unwrap();
    create_file(
        dir.path(),
        "Types.kt",
        r#"package t

interface Repo {
    fun findAll()
}

object Registry {
    val entries: Int = 0
}
"#,
    );

    let catalog = catalog_for(dir.path());

    assert_eq!(catalog.get("root.t.Repo").unwrap().kind, EntityKind::Interface);
    let registry = catalog.get("root.t.Registry").unwrap();
    assert_eq!(registry.kind, EntityKind::Object);
    assert_eq!(registry.number_of_attributes, Some(1));
}

#[test]
fn catalog_keys_are_sorted() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "z/Zed.kt", "package zeta\n\nclass Zed\n");
    create_file(dir.path(), "a/Al.kt", "package alpha\n\nclass Al\n");
    create_file(dir.path(), "m/Mid.kt", "package mid\n\nfun f() {}\n");

    let catalog = catalog_for(dir.path());

    let keys: Vec<&str> = catalog.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(!keys.is_empty());
}

#[test]
fn json_round_trip_preserves_catalog() {
    let dir = TempDir::new().unwrap();
    create_file(
        dir.path(),
        "Foo.kt",
        "package demo\n\nclass Foo(val id: Int)\n",
    );

    let catalog = catalog_for(dir.path());
    let json = serde_json::to_string_pretty(&catalog).unwrap();
    let reread: Catalog = serde_json::from_str(&json).unwrap();

    assert_eq!(reread.len(), catalog.len());
    let foo = reread.get("root.demo.Foo").unwrap();
    assert_eq!(foo.kind, EntityKind::Class);
    assert_eq!(foo.number_of_attributes, Some(1));
}

#[test]
fn unreadable_or_unsupported_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "Good.kt", "class Good\n");
    create_file(dir.path(), "notes.txt", "not kotlin at all");

    let catalog = catalog_for(dir.path());
    assert!(catalog.get("root.Good").is_some());
}
