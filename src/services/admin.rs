//! Role, team, and user administration services.
use crate::domain::access::UserPayload;
use crate::domain::team::TeamPayload;
use crate::domain::types::{Language, RoleId, TeamId, UserId};
use crate::dto::admin::{
    RolePage, RolesPage, TeamDetailView, TeamPage, TeamRow, TeamsPage, UserPage, UserRow,
    UsersPage,
};
use crate::navigation::Target;
use crate::repository::{AccessReader, LawyerReader, ListQuery, TeamReader};
use crate::services::ServiceResult;

/// Builds the role list page.
pub fn roles_page<R>(repo: &R, lang: Language) -> ServiceResult<RolesPage>
where
    R: AccessReader + ?Sized,
{
    let roles = repo.list_roles()?;
    Ok(RolesPage::new(&roles, lang))
}

/// Builds the role editor with the full permission matrix.
pub fn role_page<R>(repo: &R, role_id: RoleId, lang: Language) -> ServiceResult<Option<RolePage>>
where
    R: AccessReader + ?Sized,
{
    let Some(role) = repo.get_role_by_id(role_id)? else {
        return Ok(None);
    };
    let groups = repo.permission_groups()?;
    Ok(Some(RolePage::new(role, &groups, lang)))
}

/// Builds the team list page.
pub fn teams_page<R>(repo: &R, lang: Language) -> ServiceResult<TeamsPage>
where
    R: TeamReader + ?Sized,
{
    let teams = repo.list_teams()?;
    Ok(TeamsPage {
        teams: teams
            .iter()
            .map(|t| TeamRow {
                id: t.id,
                name: t.name.display(lang).to_string(),
                description: t.description.display(lang).to_string(),
                member_count: t.lawyer_ids.len(),
            })
            .collect(),
    })
}

/// Builds the team editor. A `Target::New` yields the empty form.
pub fn team_page<R>(
    repo: &R,
    target: Target<TeamId>,
    lang: Language,
) -> ServiceResult<Option<TeamPage>>
where
    R: TeamReader + LawyerReader + ?Sized,
{
    let available_lawyers = repo
        .list_lawyers(ListQuery::new())?
        .iter()
        .map(|l| (l.id, l.name.display(lang).to_string()))
        .collect();
    let detail = match target {
        Target::New => None,
        Target::Existing(id) => match repo.get_team_by_id(id)? {
            Some(detail) => Some(TeamDetailView::new(detail, lang)),
            None => return Ok(None),
        },
    };
    Ok(Some(TeamPage {
        detail,
        available_lawyers,
    }))
}

/// Builds the user list page.
pub fn users_page<R>(repo: &R, lang: Language) -> ServiceResult<UsersPage>
where
    R: AccessReader + ?Sized,
{
    let users = repo.list_users()?;
    Ok(UsersPage {
        users: users.iter().map(|u| UserRow::new(u, lang)).collect(),
    })
}

/// Builds the user editor. A `Target::New` yields the empty form.
pub fn user_page<R>(
    repo: &R,
    target: Target<UserId>,
    lang: Language,
) -> ServiceResult<Option<UserPage>>
where
    R: AccessReader + ?Sized,
{
    let available_roles = repo
        .list_roles()?
        .iter()
        .map(|r| (r.id, r.name.display(lang).to_string()))
        .collect();
    let user = match target {
        Target::New => None,
        Target::Existing(id) => match repo.get_user_by_id(id)? {
            Some(detail) => Some(UserRow::new(&detail, lang)),
            None => return Ok(None),
        },
    };
    Ok(Some(UserPage {
        user,
        available_roles,
    }))
}

/// Records a request to create or update a team.
pub fn save_team(payload: &TeamPayload, lang: Language) -> ServiceResult<()> {
    let name = payload.name.resolve(lang).unwrap_or_default();
    match payload.id {
        Some(id) => log::info!("save requested: update team {id} ({name:?})"),
        None => log::info!(
            "save requested: new team {name:?} with {} members",
            payload.lawyer_ids.len()
        ),
    }
    Ok(())
}

/// Records a request to create or update a user account.
pub fn save_user(payload: &UserPayload, lang: Language) -> ServiceResult<()> {
    let name = payload.name.resolve(lang).unwrap_or_default();
    match payload.id {
        Some(id) => log::info!("save requested: update user {id} ({name:?})"),
        None => log::info!("save requested: new user {name:?} <{}>", payload.email),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    #[test]
    fn role_editor_marks_granted_permissions() {
        let repo = FixtureRepository::new(seed(), Language::En);
        // Paralegal: view-only plus document upload.
        let page = role_page(&repo, RoleId::new(4).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        let granted: usize = page
            .groups
            .iter()
            .flat_map(|g| &g.permissions)
            .filter(|p| p.granted)
            .count();
        assert_eq!(granted, 4);
    }

    #[test]
    fn new_team_target_yields_empty_form() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = team_page(&repo, Target::New, Language::En).unwrap().unwrap();
        assert!(page.detail.is_none());
        assert_eq!(page.available_lawyers.len(), 6);
    }

    #[test]
    fn users_page_resolves_role_names() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = users_page(&repo, Language::En).unwrap();
        assert_eq!(page.users.len(), 4);
        let admin = page.users.iter().find(|u| u.name == "Super Admin").unwrap();
        assert_eq!(admin.role_name, "Administrator");
    }
}
