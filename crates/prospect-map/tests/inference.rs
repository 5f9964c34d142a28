//! Inference behavior over realistic export headers.

use prospect_map::{infer_mapping, scan_table};
use prospect_model::{DecodedTable, ProspectField};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn crm_export_headers_map_cleanly() {
    let mapping = infer_mapping(&headers(&[
        "Contact First Name",
        "Contact Last Name",
        "Work Email",
        "Account Name",
        "Job Title",
        "Direct Dial",
        "LinkedIn URL",
        "Number of Employees",
    ]));
    assert_eq!(
        mapping.header_for(ProspectField::FirstName),
        Some("Contact First Name")
    );
    assert_eq!(
        mapping.header_for(ProspectField::LastName),
        Some("Contact Last Name")
    );
    assert_eq!(mapping.header_for(ProspectField::Email), Some("Work Email"));
    assert_eq!(
        mapping.header_for(ProspectField::Company),
        Some("Account Name")
    );
    assert_eq!(
        mapping.header_for(ProspectField::JobPosition),
        Some("Job Title")
    );
    assert_eq!(mapping.header_for(ProspectField::Phone), Some("Direct Dial"));
    assert_eq!(
        mapping.header_for(ProspectField::PersonalSocial),
        Some("LinkedIn URL")
    );
    assert_eq!(
        mapping.header_for(ProspectField::CompanySize),
        Some("Number of Employees")
    );
}

#[test]
fn nonstandard_email_column_is_still_found() {
    let mapping = infer_mapping(&headers(&["Lead", "Primary Mail Address"]));
    assert_eq!(
        mapping.header_for(ProspectField::Email),
        Some("Primary Mail Address")
    );
}

#[test]
fn scan_reports_mapping_and_quality_together() {
    let mut table = DecodedTable::new(headers(&["Email Address", "First Name", "Company Name"]));
    table.push_row(headers(&["jane@acme.com", "Jane", "Acme"]));
    table.push_row(headers(&["", "Bob", "Initech"]));
    let scan = scan_table(&table);
    assert_eq!(
        scan.mapping.header_for(ProspectField::Email),
        Some("Email Address")
    );
    assert_eq!(scan.total_rows, 2);
    assert_eq!(scan.valid_email_rows, 1);
    assert!(scan.unmapped_headers(table.headers()).is_empty());
}
