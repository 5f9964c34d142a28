//! Correspondence between canonical fields and spreadsheet column headers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::ProspectField;

/// A partial assignment of canonical prospect fields to source columns.
///
/// Produced once by inference, then editable by the operator before the
/// applier consumes it. At most one header per field; the inference engine
/// additionally guarantees at most one field per header, but an edited
/// mapping is taken as-is — the applier never second-guesses it.
///
/// Iteration is in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    bindings: BTreeMap<ProspectField, String>,
}

impl ColumnMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `field` to `header`, replacing any previous binding.
    pub fn bind(&mut self, field: ProspectField, header: impl Into<String>) {
        self.bindings.insert(field, header.into());
    }

    /// Removes the binding for `field`, if any.
    pub fn unbind(&mut self, field: ProspectField) {
        self.bindings.remove(&field);
    }

    /// The header bound to `field`, if any.
    #[must_use]
    pub fn header_for(&self, field: ProspectField) -> Option<&str> {
        self.bindings.get(&field).map(String::as_str)
    }

    /// True if `header` is bound to any field.
    #[must_use]
    pub fn is_bound(&self, header: &str) -> bool {
        self.bindings.values().any(|bound| bound == header)
    }

    /// True when no field is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bound fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Bound `(field, header)` pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProspectField, &str)> {
        self.bindings
            .iter()
            .map(|(field, header)| (*field, header.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_replaces_previous_binding() {
        let mut mapping = ColumnMapping::new();
        mapping.bind(ProspectField::Email, "Mail");
        mapping.bind(ProspectField::Email, "Email Address");
        assert_eq!(
            mapping.header_for(ProspectField::Email),
            Some("Email Address")
        );
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let mut mapping = ColumnMapping::new();
        mapping.bind(ProspectField::Company, "Org");
        mapping.bind(ProspectField::Email, "Email");
        mapping.bind(ProspectField::FirstName, "First");
        let fields: Vec<ProspectField> = mapping.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                ProspectField::Email,
                ProspectField::FirstName,
                ProspectField::Company
            ]
        );
    }

    #[test]
    fn serde_round_trip_uses_wire_names() {
        let mut mapping = ColumnMapping::new();
        mapping.bind(ProspectField::Email, "Email Address");
        mapping.bind(ProspectField::JobPosition, "Title");
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            "{\"email\":\"Email Address\",\"jobPosition\":\"Title\"}"
        );
        let back: ColumnMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
