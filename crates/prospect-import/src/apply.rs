//! Applies a confirmed column mapping to decoded rows.

use prospect_map::{is_valid_email, normalize_header};
use prospect_model::{ColumnMapping, DecodedTable, MappedProspect, ProspectField};

/// Normalized header spellings that can stand in for a split first/last name.
const FULL_NAME_HEADERS: [&str; 3] = ["name", "fullname", "contactname"];

/// Transforms each row into a canonical prospect record.
///
/// Rows are processed in source order. A row whose resolved email cell fails
/// the shape check after trimming is dropped silently — no error, no
/// placeholder — so the output length can only tell the caller how many rows
/// survived. All other fields resolve through the mapping, are trimmed, and
/// are left unset when empty so partial data never overwrites upstream
/// values with blanks.
///
/// When neither `firstName` nor `lastName` resolved, a single full-name
/// column (normalized header `name`, `fullname` or `contactname`, mapped or
/// not) is split on whitespace: first token becomes the first name, the
/// remaining tokens joined become the last name.
///
/// The mapping is taken as given; headers that do not exist in the table
/// simply resolve to empty cells.
#[must_use]
pub fn apply_mapping(table: &DecodedTable, mapping: &ColumnMapping) -> Vec<MappedProspect> {
    let field_columns: Vec<(ProspectField, usize)> = mapping
        .iter()
        .filter(|&(field, _)| field != ProspectField::Email)
        .filter_map(|(field, header)| {
            table.column_index(header).map(|column| (field, column))
        })
        .collect();
    let email_column = mapping
        .header_for(ProspectField::Email)
        .and_then(|header| table.column_index(header));
    let full_name_column = table.headers().iter().position(|header| {
        FULL_NAME_HEADERS.contains(&normalize_header(header).as_str())
    });

    let mut prospects = Vec::new();
    for row in 0..table.row_count() {
        let email = email_column
            .map_or("", |column| table.cell(row, column))
            .trim();
        if !is_valid_email(email) {
            continue;
        }

        let mut prospect = MappedProspect::new(email);
        for &(field, column) in &field_columns {
            let value = table.cell(row, column).trim();
            if !value.is_empty() {
                prospect.set(field, Some(value.to_string()));
            }
        }

        if prospect.first_name.is_none()
            && prospect.last_name.is_none()
            && let Some(column) = full_name_column
        {
            let full = table.cell(row, column).trim();
            let mut tokens = full.split_whitespace();
            if let Some(first) = tokens.next() {
                prospect.first_name = Some(first.to_string());
                let rest = tokens.collect::<Vec<_>>().join(" ");
                prospect.last_name = (!rest.is_empty()).then_some(rest);
            }
        }

        prospects.push(prospect);
    }

    tracing::debug!(
        input_rows = table.row_count(),
        mapped = prospects.len(),
        dropped = table.row_count() - prospects.len(),
        "applied column mapping"
    );
    prospects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DecodedTable {
        let mut table =
            DecodedTable::new(headers.iter().map(|h| (*h).to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|cell| (*cell).to_string()).collect());
        }
        table
    }

    fn email_mapping(header: &str) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();
        mapping.bind(ProspectField::Email, header);
        mapping
    }

    #[test]
    fn trims_email_but_preserves_case() {
        let table = table(&["Email Col"], &[&["  JANE@ACME.COM "]]);
        let prospects = apply_mapping(&table, &email_mapping("Email Col"));
        assert_eq!(prospects.len(), 1);
        assert_eq!(prospects[0].email, "JANE@ACME.COM");
    }

    #[test]
    fn drops_rows_with_invalid_email_silently() {
        let table = table(
            &["Email"],
            &[&["jane@acme.com"], &["not-an-email"], &["joe@acme.com"]],
        );
        let prospects = apply_mapping(&table, &email_mapping("Email"));
        assert_eq!(prospects.len(), 2);
        assert_eq!(prospects[0].email, "jane@acme.com");
        assert_eq!(prospects[1].email, "joe@acme.com");
    }

    #[test]
    fn drops_every_row_when_email_is_unmapped() {
        let table = table(&["Email"], &[&["jane@acme.com"]]);
        let prospects = apply_mapping(&table, &ColumnMapping::new());
        assert!(prospects.is_empty());
    }

    #[test]
    fn empty_cells_stay_unset_instead_of_empty_strings() {
        let mut mapping = email_mapping("Email");
        mapping.bind(ProspectField::Company, "Company");
        let table = table(&["Email", "Company"], &[&["jane@acme.com", "   "]]);
        let prospects = apply_mapping(&table, &mapping);
        assert_eq!(prospects[0].company, None);
    }

    #[test]
    fn splits_full_name_when_names_are_unmapped() {
        let table = table(
            &["Email", "Full Name"],
            &[&["jane@acme.com", "Jane Q. Doe"]],
        );
        let prospects = apply_mapping(&table, &email_mapping("Email"));
        assert_eq!(prospects[0].first_name.as_deref(), Some("Jane"));
        assert_eq!(prospects[0].last_name.as_deref(), Some("Q. Doe"));
    }

    #[test]
    fn single_token_name_has_no_last_name() {
        let table = table(&["Email", "Name"], &[&["jane@acme.com", "Jane"]]);
        let prospects = apply_mapping(&table, &email_mapping("Email"));
        assert_eq!(prospects[0].first_name.as_deref(), Some("Jane"));
        assert_eq!(prospects[0].last_name, None);
    }

    #[test]
    fn mapped_names_suppress_the_fallback() {
        let mut mapping = email_mapping("Email");
        mapping.bind(ProspectField::FirstName, "First");
        let table = table(
            &["Email", "First", "Full Name"],
            &[&["jane@acme.com", "Janet", "Jane Doe"]],
        );
        let prospects = apply_mapping(&table, &mapping);
        assert_eq!(prospects[0].first_name.as_deref(), Some("Janet"));
        assert_eq!(prospects[0].last_name, None);
    }

    #[test]
    fn mapping_to_a_missing_header_resolves_empty() {
        let mut mapping = email_mapping("Email");
        mapping.bind(ProspectField::City, "No Such Column");
        let table = table(&["Email"], &[&["jane@acme.com"]]);
        let prospects = apply_mapping(&table, &mapping);
        assert_eq!(prospects[0].city, None);
    }

    #[test]
    fn values_are_trimmed_but_not_otherwise_rewritten() {
        let mut mapping = email_mapping("Email");
        mapping.bind(ProspectField::Phone, "Phone");
        let table = table(&["Email", "Phone"], &[&["jane@acme.com", " 02134 "]]);
        let prospects = apply_mapping(&table, &mapping);
        assert_eq!(prospects[0].phone.as_deref(), Some("02134"));
    }
}
