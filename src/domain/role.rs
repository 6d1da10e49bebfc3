//! Organizational roles and the permissions derived from them.

use std::fmt;

/// Role name that grants access to the variable registry.
pub const GERENCIA_CAMPUS: &str = "Gerencia Campus";

/// A caller's organizational role.
///
/// Role names are matched exactly: comparison is case-sensitive and no
/// whitespace is trimmed, so `"gerencia campus"` and `" Gerencia Campus"` are
/// both [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Campus management.
    GerenciaCampus,
    /// Any other role, kept verbatim for logging.
    Other(String),
}

impl Role {
    /// Classifies a stored role name.
    pub fn from_name(name: &str) -> Self {
        if name == GERENCIA_CAMPUS {
            Role::GerenciaCampus
        } else {
            Role::Other(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::GerenciaCampus => GERENCIA_CAMPUS,
            Role::Other(name) => name,
        }
    }

    /// Whether the role may list variables.
    pub fn can_view_variables(&self) -> bool {
        matches!(self, Role::GerenciaCampus)
    }

    /// Whether the role may create variables (drives the create button).
    pub fn can_create_variables(&self) -> bool {
        matches!(self, Role::GerenciaCampus)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
