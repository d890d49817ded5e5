//! Package materialization: one PACKAGE entity per path prefix, each linked
//! to its parent prefix.

use crate::catalog::entity::Entity;
use crate::catalog::names;

/// Emit PACKAGE entities for every prefix of the rooted package path, from
/// the synthetic root down to the full path. Idempotent across files: repeat
/// emissions are cleaned up by the finalizer, not rejected here.
pub fn materialize(path: &str, out: &mut Vec<Entity>) {
    let full = names::package_fqn(path);
    let mut parent: Option<String> = None;

    for segment in full.split('.') {
        let fqn = match &parent {
            Some(prefix) => names::qualify(prefix, segment),
            None => segment.to_string(),
        };
        out.push(Entity::package(segment, fqn.clone(), parent.take()));
        parent = Some(fqn);
    }
}
