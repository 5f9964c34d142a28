//! Canonical prospect records produced by the mapping applier.

use serde::{Deserialize, Serialize};

use crate::field::ProspectField;

/// One canonical prospect record.
///
/// `email` is required and syntactically valid by construction (the applier
/// drops rows that fail the shape check before building a record). Every
/// other attribute is optional; an attribute that was empty in the source is
/// left unset rather than carried as an empty string, so partial data never
/// overwrites existing upstream values with blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedProspect {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_social: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icebreaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom5: Option<String>,
}

impl MappedProspect {
    /// Creates a record with the given (already validated) email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute by canonical field.
    pub fn set(&mut self, field: ProspectField, value: Option<String>) {
        match field {
            ProspectField::Email => self.email = value.unwrap_or_default(),
            ProspectField::FirstName => self.first_name = value,
            ProspectField::LastName => self.last_name = value,
            ProspectField::Company => self.company = value,
            ProspectField::JobPosition => self.job_position = value,
            ProspectField::Phone => self.phone = value,
            ProspectField::Website => self.website = value,
            ProspectField::Industry => self.industry = value,
            ProspectField::City => self.city = value,
            ProspectField::State => self.state = value,
            ProspectField::Country => self.country = value,
            ProspectField::PersonalSocial => self.personal_social = value,
            ProspectField::CompanySize => self.company_size = value,
            ProspectField::Domain => self.domain = value,
            ProspectField::Notes => self.notes = value,
            ProspectField::Icebreaker => self.icebreaker = value,
            ProspectField::Custom1 => self.custom1 = value,
            ProspectField::Custom2 => self.custom2 = value,
            ProspectField::Custom3 => self.custom3 = value,
            ProspectField::Custom4 => self.custom4 = value,
            ProspectField::Custom5 => self.custom5 = value,
        }
    }

    /// Reads an attribute by canonical field.
    #[must_use]
    pub fn get(&self, field: ProspectField) -> Option<&str> {
        let value = match field {
            ProspectField::Email => return Some(&self.email),
            ProspectField::FirstName => &self.first_name,
            ProspectField::LastName => &self.last_name,
            ProspectField::Company => &self.company,
            ProspectField::JobPosition => &self.job_position,
            ProspectField::Phone => &self.phone,
            ProspectField::Website => &self.website,
            ProspectField::Industry => &self.industry,
            ProspectField::City => &self.city,
            ProspectField::State => &self.state,
            ProspectField::Country => &self.country,
            ProspectField::PersonalSocial => &self.personal_social,
            ProspectField::CompanySize => &self.company_size,
            ProspectField::Domain => &self.domain,
            ProspectField::Notes => &self.notes,
            ProspectField::Icebreaker => &self.icebreaker,
            ProspectField::Custom1 => &self.custom1,
            ProspectField::Custom2 => &self.custom2,
            ProspectField::Custom3 => &self.custom3,
            ProspectField::Custom4 => &self.custom4,
            ProspectField::Custom5 => &self.custom5,
        };
        value.as_deref()
    }
}
