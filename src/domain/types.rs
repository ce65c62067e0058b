//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty strings, sanitized notes) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CaseId, "Unique identifier for a case (matter).");
id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(OpponentId, "Unique identifier for an opponent.");
id_newtype!(LawyerId, "Unique identifier for a lawyer.");
id_newtype!(CourtId, "Unique identifier for a court.");
id_newtype!(HearingId, "Unique identifier for a hearing.");
id_newtype!(DocumentId, "Unique identifier for a client document.");
id_newtype!(MovementId, "Unique identifier for a document movement.");
id_newtype!(TaskId, "Unique identifier for a task.");
id_newtype!(RoleId, "Unique identifier for an access role.");
id_newtype!(TeamId, "Unique identifier for a team.");
id_newtype!(UserId, "Unique identifier for a user account.");
id_newtype!(OptionSetId, "Unique identifier for an option set.");
id_newtype!(OptionValueId, "Unique identifier for a coded option value.");

/// Text direction associated with a UI language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Languages supported by the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Text direction for the language.
    pub const fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    /// Lower-case ISO code used for locale file names.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown language code: {other}"
            ))),
        }
    }
}

/// Placeholder shown when neither language of a bilingual label is populated.
pub const EMPTY_LABEL_PLACEHOLDER: &str = "—";

/// A pair of optional Arabic/English strings with a single resolution policy:
/// prefer the active language, fall back to the other, then to a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub ar: Option<String>,
    pub en: Option<String>,
}

impl Bilingual {
    pub fn new(ar: Option<String>, en: Option<String>) -> Self {
        let clean = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Self {
            ar: clean(ar),
            en: clean(en),
        }
    }

    /// Both labels populated, for fully bilingual records.
    pub fn both(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self::new(Some(ar.into()), Some(en.into()))
    }

    /// Preferred-language text, falling back to the other language.
    pub fn resolve(&self, lang: Language) -> Option<&str> {
        let (first, second) = match lang {
            Language::Ar => (&self.ar, &self.en),
            Language::En => (&self.en, &self.ar),
        };
        first.as_deref().or(second.as_deref())
    }

    /// Like [`Bilingual::resolve`] but substitutes a placeholder when both
    /// languages are empty.
    pub fn display(&self, lang: Language) -> &str {
        self.resolve(lang).unwrap_or(EMPTY_LABEL_PLACEHOLDER)
    }

    pub fn is_empty(&self) -> bool {
        self.ar.is_none() && self.en.is_none()
    }

    /// True when either language matches the needle exactly. Used to resolve
    /// legacy name-string references (e.g. secondary lawyers on a case row).
    pub fn matches(&self, needle: &str) -> bool {
        self.ar.as_deref() == Some(needle) || self.en.as_deref() == Some(needle)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Free-text note sanitized with ammonia before entering the domain layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NoteText(String);

impl NoteText {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NoteText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NoteText {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NoteText {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoteText> for String {
    fn from(value: NoteText) -> Self {
        value.0
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (expected E.164).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it is valid and normalizes to E.164.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtype_rejects_non_positive() {
        assert!(CaseId::new(1).is_ok());
        assert_eq!(CaseId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ClientId::new(-3), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn bilingual_prefers_active_language() {
        let label = Bilingual::both("سارية", "Active");
        assert_eq!(label.resolve(Language::Ar), Some("سارية"));
        assert_eq!(label.resolve(Language::En), Some("Active"));
    }

    #[test]
    fn bilingual_falls_back_to_other_language() {
        let label = Bilingual::new(Some("الدائرة الأولى".to_string()), None);
        assert_eq!(label.resolve(Language::En), Some("الدائرة الأولى"));
    }

    #[test]
    fn bilingual_display_uses_placeholder_when_empty() {
        let label = Bilingual::new(None, Some("   ".to_string()));
        assert!(label.is_empty());
        assert_eq!(label.display(Language::En), EMPTY_LABEL_PLACEHOLDER);
    }

    #[test]
    fn note_text_sanitizes_markup() {
        let note = NoteText::new("hello <script>alert(1)</script>world").unwrap();
        assert!(!note.as_str().contains("script"));
        assert!(note.as_str().contains("hello"));
    }

    #[test]
    fn language_parses_codes() {
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert!("fr".parse::<Language>().is_err());
    }
}
