pub mod entity;
pub mod finalizer;
pub mod manager;
pub mod names;
pub mod packages;

pub use entity::{Entity, EntityKind};
pub use finalizer::{deduplicate, finalize, sort_by_fqn, Catalog};
pub use manager::EntityManager;
