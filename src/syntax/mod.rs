//! Declaration model consumed by the catalog traversal.
//!
//! A Kotlin file is lowered into this closed set of declaration kinds before
//! any entity is produced, so the traversal matches exhaustively instead of
//! dispatching on raw node kinds.

pub mod lower;

pub use lower::lower_file;

/// One parsed source file: its package directive (if any) and the top-level
/// declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: Option<String>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `package a.b.c`
    Package(String),
    Class(ClassOrObject),
    Function(NamedFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Object,
}

/// A supertype list entry. Constructor-call syntax (`Base()`) marks the
/// extended class; a plain reference (`Iface`) marks an implemented
/// interface. The payload is raw syntactic text, never a resolved symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupertypeEntry {
    Call(String),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOrObject {
    pub name: String,
    pub kind: ClassKind,
    pub supertypes: Vec<SupertypeEntry>,
    /// Names of primary-constructor parameters, in declaration order.
    pub primary_parameters: Vec<String>,
    /// Names of properties declared in the body, in declaration order.
    pub properties: Vec<String>,
    pub functions: Vec<NamedFunction>,
    pub companions: Vec<ClassOrObject>,
    pub nested: Vec<ClassOrObject>,
}

impl ClassOrObject {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            primary_parameters: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            companions: Vec::new(),
            nested: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFunction {
    pub name: String,
    pub parameter_count: usize,
}

impl NamedFunction {
    pub fn new(name: impl Into<String>, parameter_count: usize) -> Self {
        Self {
            name: name.into(),
            parameter_count,
        }
    }
}
