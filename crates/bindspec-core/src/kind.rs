//! Declaration kinds.

use std::fmt;

/// The kind of an exportable declaration.
///
/// Each kind is served by exactly one exporter type downstream. Class
/// templates have no kind of their own: they only produce [`DeclKind::Class`]
/// declarations when instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Function,
    Include,
    Enum,
    Header,
    Var,
}

impl DeclKind {
    /// All declaration kinds, in a stable order.
    pub const ALL: [DeclKind; 6] = [
        DeclKind::Class,
        DeclKind::Function,
        DeclKind::Include,
        DeclKind::Enum,
        DeclKind::Header,
        DeclKind::Var,
    ];

    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Function => "function",
            DeclKind::Include => "include",
            DeclKind::Enum => "enum",
            DeclKind::Header => "header",
            DeclKind::Var => "var",
        }
    }

    /// Whether declarations of this kind carry a `name` attribute.
    ///
    /// Include and header declarations only describe a header file.
    pub fn is_named(&self) -> bool {
        !matches!(self, DeclKind::Include | DeclKind::Header)
    }

    /// Whether declarations of this kind start with `exclude = false`.
    pub fn has_exclude_flag(&self) -> bool {
        matches!(self, DeclKind::Class | DeclKind::Function | DeclKind::Enum)
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
