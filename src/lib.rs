pub mod catalog;
pub mod error;
pub mod extractor;
pub mod languages;
pub mod syntax;

pub use catalog::{deduplicate, finalize, sort_by_fqn, Catalog, Entity, EntityKind, EntityManager};
pub use error::{CatalogError, Result};
pub use extractor::{FileWalker, ParsedFile, Parser};
pub use languages::{LanguageGrammar, LanguageRegistry};
pub use syntax::{
    lower_file, ClassKind, ClassOrObject, Declaration, NamedFunction, SourceFile, SupertypeEntry,
};
