//! Header-to-field inference.

use std::collections::BTreeSet;

use prospect_model::{ColumnMapping, ProspectField};

use crate::aliases::{COLUMN_ALIASES, normalize_header};

/// Proposes a best-effort mapping from canonical fields to source headers.
///
/// Pure and deterministic in the header list. Fields are visited in
/// declaration order; for each field, headers are scanned in file order and
/// the first unclaimed header whose normalized form exactly matches one of
/// the field's aliases is bound. A claimed header is unavailable to every
/// later field, so the result is one-to-one.
///
/// `email` alone gets a fallback: when no alias matched, the first unclaimed
/// header whose normalized form merely contains `"email"` or `"mail"` is
/// bound. Unmatched fields other than email stay unmapped — a wrong guess on
/// an optional field costs more than no guess.
///
/// Claimed headers are threaded through the field iteration as an explicit
/// set of column indices (not names, so duplicate header spellings cannot
/// alias each other).
#[must_use]
pub fn infer_mapping(headers: &[String]) -> ColumnMapping {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();

    let (mut mapping, mut claimed) = COLUMN_ALIASES.iter().fold(
        (ColumnMapping::new(), BTreeSet::<usize>::new()),
        |(mut mapping, mut claimed), &(field, aliases)| {
            let hit = normalized
                .iter()
                .enumerate()
                .find(|&(index, norm)| {
                    !claimed.contains(&index) && aliases.contains(&norm.as_str())
                })
                .map(|(index, _)| index);
            if let Some(index) = hit {
                claimed.insert(index);
                mapping.bind(field, headers[index].clone());
            }
            (mapping, claimed)
        },
    );

    if mapping.header_for(ProspectField::Email).is_none() {
        let hit = normalized
            .iter()
            .enumerate()
            .find(|&(index, norm)| {
                !claimed.contains(&index) && (norm.contains("email") || norm.contains("mail"))
            })
            .map(|(index, _)| index);
        if let Some(index) = hit {
            claimed.insert(index);
            mapping.bind(ProspectField::Email, headers[index].clone());
            tracing::debug!(header = %headers[index], "bound email via substring fallback");
        }
    }

    mapping
}
