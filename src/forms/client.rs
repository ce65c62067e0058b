//! Client save form.
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::normalize_phone_to_e164;
use crate::forms::{FormError, require_bilingual};

/// Form data for registering a new client.
#[derive(Debug, Deserialize, Validate)]
pub struct ClientForm {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    #[validate(length(min = 1))]
    pub print_name: String,
    pub code: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub engaged_from: Option<NaiveDate>,
}

impl TryFrom<&ClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: &ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let contact_phone = form
            .contact_phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(normalize_phone_to_e164)
            .transpose()?;
        Ok(NewClient {
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            print_name: form.print_name.trim().to_string(),
            code: form.code.as_deref().map(str::trim).map(str::to_string),
            contact_email: form.contact_email.clone(),
            contact_phone,
            engaged_from: form.engaged_from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> ClientForm {
        ClientForm {
            name_ar: None,
            name_en: Some("Toyota Egypt".to_string()),
            print_name: "Toyota Egypt".to_string(),
            code: Some("TOY-EG".to_string()),
            contact_email: Some("legal@toyota-eg.example".to_string()),
            contact_phone: Some("+20 100 555 0173".to_string()),
            engaged_from: None,
        }
    }

    #[test]
    fn phone_numbers_are_normalized() {
        let payload = NewClient::try_from(&base_form()).unwrap();
        assert_eq!(payload.contact_phone.as_deref(), Some("+201005550173"));
    }

    #[test]
    fn invalid_phone_is_rejected() {
        let mut form = base_form();
        form.contact_phone = Some("not a phone".to_string());
        assert!(NewClient::try_from(&form).is_err());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut form = base_form();
        form.contact_email = Some("not-an-email".to_string());
        assert!(NewClient::try_from(&form).is_err());
    }
}
