//! FQN resolution. Purely structural: names are joined along the containment
//! path, never looked up in a symbol table.

/// Synthetic namespace every FQN hangs from.
pub const ROOT: &str = "root";

/// Qualify a local declaration name against its container's FQN.
pub fn qualify(container: &str, name: &str) -> String {
    format!("{container}.{name}")
}

/// Rooted FQN of a file's package path. The empty path maps to the synthetic
/// root itself.
pub fn package_fqn(path: &str) -> String {
    if path.is_empty() {
        ROOT.to_string()
    } else {
        format!("{ROOT}.{path}")
    }
}
