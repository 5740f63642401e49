//! Principal association directives.

use serde::{Deserialize, Serialize};

/// Kind of identity principal a portfolio association grants access to.
///
/// Configuration may carry kinds this version does not recognize; those
/// deserialize as `Unknown` rather than failing, and the synthesis engine
/// decides explicitly what to do with them (it warns and emits nothing).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    /// An IAM group, looked up by name in the current account.
    Group,
    /// An IAM role, looked up by name in the current account.
    Role,
    /// An IAM user, looked up by name in the current account.
    User,
    /// An Identity Center permission set, resolved to the IAM role it
    /// provisions in the current account.
    PermissionSet,
    /// An unrecognized principal kind carried through from configuration.
    Unknown(String),
}

impl PrincipalKind {
    /// Returns the configuration wire-format string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Group => "Group",
            Self::Role => "Role",
            Self::User => "User",
            Self::PermissionSet => "PermissionSet",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// `true` for the four kinds the synthesis engine can resolve.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Serialize for PrincipalKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PrincipalKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Group" => Ok(Self::Group),
            "Role" => Ok(Self::Role),
            "User" => Ok(Self::User),
            "PermissionSet" => Ok(Self::PermissionSet),
            _ => Ok(Self::Unknown(s)),
        }
    }
}

impl std::fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured access grant: give the named principal access to the
/// portfolio the directive is declared under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDirective {
    /// What kind of principal `name` refers to.
    #[serde(rename = "type")]
    pub kind: PrincipalKind,
    /// Principal name (group/user/role name, or permission-set name).
    pub name: String,
}
