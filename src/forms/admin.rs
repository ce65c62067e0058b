//! Team and user save forms.
use serde::Deserialize;
use validator::Validate;

use crate::domain::access::UserPayload;
use crate::domain::team::TeamPayload;
use crate::domain::types::{LawyerId, RoleId, TeamId, UserId};
use crate::forms::{FormError, require_bilingual};

/// Form data for creating or updating a team.
#[derive(Debug, Deserialize, Validate)]
pub struct TeamForm {
    /// Present when editing an existing team.
    pub id: Option<i32>,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    #[serde(default)]
    pub lawyer_ids: Vec<i32>,
}

impl TryFrom<&TeamForm> for TeamPayload {
    type Error = FormError;

    fn try_from(form: &TeamForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let lawyer_ids = form
            .lawyer_ids
            .iter()
            .map(|&id| LawyerId::new(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TeamPayload {
            id: form.id.map(TeamId::new).transpose()?,
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            description: crate::domain::types::Bilingual::new(
                form.description_ar.clone(),
                form.description_en.clone(),
            ),
            lawyer_ids,
        })
    }
}

/// Form data for creating or updating a user account.
#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    /// Present when editing an existing user.
    pub id: Option<i32>,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    #[validate(email)]
    pub email: String,
    pub role_id: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<&UserForm> for UserPayload {
    type Error = FormError;

    fn try_from(form: &UserForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UserPayload {
            id: form.id.map(UserId::new).transpose()?,
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            email: form.email.trim().to_string(),
            role_id: RoleId::new(form.role_id)?,
            is_active: form.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_member_ids_are_validated_together() {
        let form = TeamForm {
            id: None,
            name_ar: None,
            name_en: Some("Litigation Team Alpha".to_string()),
            description_ar: None,
            description_en: None,
            lawyer_ids: vec![1, 3, 0],
        };
        assert!(TeamPayload::try_from(&form).is_err());
    }

    #[test]
    fn user_form_requires_a_valid_email() {
        let form = UserForm {
            id: None,
            name_ar: None,
            name_en: Some("Alice Partner".to_string()),
            email: "alice-at-example".to_string(),
            role_id: 2,
            is_active: true,
        };
        assert!(UserPayload::try_from(&form).is_err());
    }
}
