//! Roles, permissions, and user accounts. Authorization is descriptive only:
//! the console renders what a role allows but never enforces it.
use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, RoleId, TypeConstraintError, UserId};

/// Fixed permission vocabulary mirrored from the source schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "case:create")]
    CaseCreate,
    #[serde(rename = "case:view")]
    CaseView,
    #[serde(rename = "case:edit")]
    CaseEdit,
    #[serde(rename = "case:delete")]
    CaseDelete,
    #[serde(rename = "client:create")]
    ClientCreate,
    #[serde(rename = "client:view")]
    ClientView,
    #[serde(rename = "client:edit")]
    ClientEdit,
    #[serde(rename = "client:delete")]
    ClientDelete,
    #[serde(rename = "document:create")]
    DocumentCreate,
    #[serde(rename = "document:view")]
    DocumentView,
    #[serde(rename = "document:edit")]
    DocumentEdit,
    #[serde(rename = "document:delete")]
    DocumentDelete,
    #[serde(rename = "user:manage")]
    UserManage,
    #[serde(rename = "roles:manage")]
    RolesManage,
}

impl Permission {
    /// Stable `entity:action` key used in role fixtures and locale files.
    pub const fn key(self) -> &'static str {
        match self {
            Permission::CaseCreate => "case:create",
            Permission::CaseView => "case:view",
            Permission::CaseEdit => "case:edit",
            Permission::CaseDelete => "case:delete",
            Permission::ClientCreate => "client:create",
            Permission::ClientView => "client:view",
            Permission::ClientEdit => "client:edit",
            Permission::ClientDelete => "client:delete",
            Permission::DocumentCreate => "document:create",
            Permission::DocumentView => "document:view",
            Permission::DocumentEdit => "document:edit",
            Permission::DocumentDelete => "document:delete",
            Permission::UserManage => "user:manage",
            Permission::RolesManage => "roles:manage",
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case:create" => Ok(Permission::CaseCreate),
            "case:view" => Ok(Permission::CaseView),
            "case:edit" => Ok(Permission::CaseEdit),
            "case:delete" => Ok(Permission::CaseDelete),
            "client:create" => Ok(Permission::ClientCreate),
            "client:view" => Ok(Permission::ClientView),
            "client:edit" => Ok(Permission::ClientEdit),
            "client:delete" => Ok(Permission::ClientDelete),
            "document:create" => Ok(Permission::DocumentCreate),
            "document:view" => Ok(Permission::DocumentView),
            "document:edit" => Ok(Permission::DocumentEdit),
            "document:delete" => Ok(Permission::DocumentDelete),
            "user:manage" => Ok(Permission::UserManage),
            "roles:manage" => Ok(Permission::RolesManage),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown permission key: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: Bilingual,
    pub description: Bilingual,
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Permissions grouped for the role editor screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermissionGroup {
    pub group_key: String,
    pub permissions: Vec<PermissionInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermissionInfo {
    pub key: Permission,
    pub description: Bilingual,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Bilingual,
    pub email: String,
    pub role_id: RoleId,
    pub is_active: bool,
}

/// User enriched with its resolved role for the detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub user: User,
    pub role: Option<Role>,
}

/// Payload produced by the user form; covers both create ([`UserId`] absent)
/// and update.
#[derive(Clone, Debug, Deserialize)]
pub struct UserPayload {
    pub id: Option<UserId>,
    pub name: Bilingual,
    pub email: String,
    pub role_id: RoleId,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_round_trips_through_key() {
        for p in [
            Permission::CaseCreate,
            Permission::ClientDelete,
            Permission::RolesManage,
        ] {
            assert_eq!(p.key().parse::<Permission>().unwrap(), p);
        }
        assert!("case:fly".parse::<Permission>().is_err());
    }
}
