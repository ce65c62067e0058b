//! Save-request forms: raw user input validated and converted into typed
//! domain payloads. Conversion runs `validate()` first, then tightens the
//! raw fields into newtypes, so a payload in hand is always well-formed.
pub mod admin;
pub mod case;
pub mod client;
pub mod directory;
pub mod document;
pub mod hearing;

use thiserror::Error;

use crate::domain::types::{Bilingual, TypeConstraintError};

/// Errors produced while turning a form into a domain payload.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
}

/// Builds a bilingual label from a form's optional language fields,
/// requiring at least one of the two to be non-blank.
pub(crate) fn require_bilingual(
    ar: Option<&str>,
    en: Option<&str>,
) -> Result<Bilingual, FormError> {
    let label = Bilingual::new(ar.map(str::to_string), en.map(str::to_string));
    if label.is_empty() {
        return Err(TypeConstraintError::EmptyString.into());
    }
    Ok(label)
}
