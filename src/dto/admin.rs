//! View models for the roles, teams, and users administration screens.
use serde::Serialize;

use crate::domain::access::{Permission, PermissionGroup, Role, UserDetail};
use crate::domain::team::TeamDetail;
use crate::domain::types::{Language, RoleId, TeamId, UserId};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoleRow {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub permission_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolesPage {
    pub roles: Vec<RoleRow>,
}

impl RolesPage {
    pub fn new(roles: &[Role], lang: Language) -> Self {
        Self {
            roles: roles
                .iter()
                .map(|r| RoleRow {
                    id: r.id,
                    name: r.name.display(lang).to_string(),
                    description: r.description.resolve(lang).map(str::to_string),
                    permission_count: r.permissions.len(),
                })
                .collect(),
        }
    }
}

/// Data required to render the role editor: the role plus the full
/// permission matrix with the role's grants marked.
#[derive(Debug, Clone, Serialize)]
pub struct RolePage {
    pub role: Role,
    pub name: String,
    pub groups: Vec<PermissionGroupRows>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionGroupRows {
    pub group_key: String,
    pub permissions: Vec<PermissionRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PermissionRow {
    pub key: Permission,
    pub description: String,
    pub granted: bool,
}

impl RolePage {
    pub fn new(role: Role, groups: &[PermissionGroup], lang: Language) -> Self {
        let name = role.name.display(lang).to_string();
        let groups = groups
            .iter()
            .map(|g| PermissionGroupRows {
                group_key: g.group_key.clone(),
                permissions: g
                    .permissions
                    .iter()
                    .map(|p| PermissionRow {
                        key: p.key,
                        description: p.description.display(lang).to_string(),
                        granted: role.allows(p.key),
                    })
                    .collect(),
            })
            .collect();
        Self { role, name, groups }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamRow {
    pub id: TeamId,
    pub name: String,
    pub description: String,
    pub member_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamsPage {
    pub teams: Vec<TeamRow>,
}

/// Data required to render the team editor. `detail` is `None` for the
/// new-team form.
#[derive(Debug, Clone, Serialize)]
pub struct TeamPage {
    pub detail: Option<TeamDetailView>,
    /// All lawyers available for membership, `(id, resolved name)`.
    pub available_lawyers: Vec<(crate::domain::types::LawyerId, String)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamDetailView {
    pub team: crate::domain::team::Team,
    pub name: String,
    pub members: Vec<String>,
}

impl TeamDetailView {
    pub fn new(detail: TeamDetail, lang: Language) -> Self {
        let name = detail.team.name.display(lang).to_string();
        let members = detail
            .members
            .iter()
            .map(|m| m.name.display(lang).to_string())
            .collect();
        Self {
            team: detail.team,
            name,
            members,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role_name: String,
    pub is_active: bool,
}

impl UserRow {
    pub fn new(detail: &UserDetail, lang: Language) -> Self {
        Self {
            id: detail.user.id,
            name: detail.user.name.display(lang).to_string(),
            email: detail.user.email.clone(),
            role_name: detail
                .role
                .as_ref()
                .map(|r| r.name.display(lang).to_string())
                .unwrap_or_default(),
            is_active: detail.user.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersPage {
    pub users: Vec<UserRow>,
}

/// Data required to render the user editor. `user` is `None` for the
/// new-user form.
#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    pub user: Option<UserRow>,
    /// All roles available for assignment, `(id, resolved name)`.
    pub available_roles: Vec<(RoleId, String)>,
}
