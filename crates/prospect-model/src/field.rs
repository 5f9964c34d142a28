//! The closed set of canonical prospect fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A canonical prospect attribute understood by the platform regardless of
/// source spreadsheet wording.
///
/// Declaration order is significant: the inference engine iterates fields in
/// this order, and [`ProspectField::Email`] is deliberately first so it gets
/// first pick of ambiguous headers. `email` is also the only field with a
/// mandatory-for-import role; every other field is optional.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ProspectField {
    Email,
    FirstName,
    LastName,
    Company,
    JobPosition,
    Phone,
    Website,
    Industry,
    City,
    State,
    Country,
    PersonalSocial,
    CompanySize,
    Domain,
    Notes,
    Icebreaker,
    Custom1,
    Custom2,
    Custom3,
    Custom4,
    Custom5,
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown prospect field '{0}'")]
pub struct FieldParseError(pub String);

impl ProspectField {
    /// All canonical fields in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::Company,
        Self::JobPosition,
        Self::Phone,
        Self::Website,
        Self::Industry,
        Self::City,
        Self::State,
        Self::Country,
        Self::PersonalSocial,
        Self::CompanySize,
        Self::Domain,
        Self::Notes,
        Self::Icebreaker,
        Self::Custom1,
        Self::Custom2,
        Self::Custom3,
        Self::Custom4,
        Self::Custom5,
    ];

    /// Wire name of the field as the upstream API spells it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Company => "company",
            Self::JobPosition => "jobPosition",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Industry => "industry",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::PersonalSocial => "personalSocial",
            Self::CompanySize => "companySize",
            Self::Domain => "domain",
            Self::Notes => "notes",
            Self::Icebreaker => "icebreaker",
            Self::Custom1 => "custom1",
            Self::Custom2 => "custom2",
            Self::Custom3 => "custom3",
            Self::Custom4 => "custom4",
            Self::Custom5 => "custom5",
        }
    }

    /// Human-readable label for tables and prompts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Company => "Company",
            Self::JobPosition => "Job Title",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Industry => "Industry",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::PersonalSocial => "LinkedIn / Social",
            Self::CompanySize => "Company Size",
            Self::Domain => "Domain",
            Self::Notes => "Notes",
            Self::Icebreaker => "Icebreaker",
            Self::Custom1 => "Custom 1",
            Self::Custom2 => "Custom 2",
            Self::Custom3 => "Custom 3",
            Self::Custom4 => "Custom 4",
            Self::Custom5 => "Custom 5",
        }
    }
}

impl fmt::Display for ProspectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProspectField {
    type Err = FieldParseError;

    /// Parses a wire name. Matching is case-insensitive so CLI input like
    /// `--map firstname=...` works without exact casing.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(raw))
            .copied()
            .ok_or_else(|| FieldParseError(raw.to_string()))
    }
}
