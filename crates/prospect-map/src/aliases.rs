//! Curated alias table for header recognition.
//!
//! Each canonical field carries the normalized header spellings seen in the
//! wild for that attribute. The table is ordered by field declaration order;
//! the inference engine depends on that ordering for its first-match-wins
//! claiming.

use prospect_model::ProspectField;

/// Known normalized header spellings per canonical field, in field
/// declaration order.
pub const COLUMN_ALIASES: [(ProspectField, &[&str]); 21] = [
    (
        ProspectField::Email,
        &[
            "email",
            "emailaddress",
            "mail",
            "emailaddr",
            "workemail",
            "businessemail",
            "contactemail",
        ],
    ),
    (
        ProspectField::FirstName,
        &[
            "firstname",
            "fname",
            "givenname",
            "first",
            "forename",
            "contactfirstname",
        ],
    ),
    (
        ProspectField::LastName,
        &[
            "lastname",
            "lname",
            "surname",
            "familyname",
            "last",
            "contactlastname",
        ],
    ),
    (
        ProspectField::Company,
        &[
            "company",
            "organization",
            "organisation",
            "org",
            "companyname",
            "employer",
            "account",
            "accountname",
            "business",
            "businessname",
            "firmname",
        ],
    ),
    (
        ProspectField::JobPosition,
        &[
            "title",
            "jobtitle",
            "position",
            "role",
            "designation",
            "jobrole",
            "jobposition",
            "occupation",
            "department",
            "function",
        ],
    ),
    (
        ProspectField::Phone,
        &[
            "phone",
            "phonenumber",
            "mobile",
            "cell",
            "telephone",
            "tel",
            "contactphone",
            "workphone",
            "mobilephone",
            "directdial",
            "phonework",
            "officephone",
        ],
    ),
    (
        ProspectField::Website,
        &[
            "website",
            "url",
            "web",
            "companywebsite",
            "homepage",
            "siteurl",
            "websiteurl",
        ],
    ),
    (
        ProspectField::Industry,
        &[
            "industry",
            "sector",
            "vertical",
            "industrytype",
            "businesstype",
            "niche",
            "market",
        ],
    ),
    (
        ProspectField::City,
        &["city", "town", "municipality", "locality"],
    ),
    (
        ProspectField::State,
        &["state", "province", "region", "county", "territory"],
    ),
    (
        ProspectField::Country,
        &["country", "nation", "countryname"],
    ),
    (
        ProspectField::PersonalSocial,
        &[
            "linkedin",
            "linkedinurl",
            "linkedinprofile",
            "twitter",
            "twitterhandle",
            "social",
            "socialprofile",
            "profile",
            "profileurl",
            "linkedinlink",
        ],
    ),
    (
        ProspectField::CompanySize,
        &[
            "companysize",
            "employees",
            "headcount",
            "size",
            "numberofemployees",
            "employeecount",
            "teamsize",
        ],
    ),
    (
        ProspectField::Domain,
        &["domain", "companydomain", "emaildomain", "websitedomain"],
    ),
    (
        ProspectField::Notes,
        &[
            "notes",
            "note",
            "comment",
            "comments",
            "remarks",
            "description",
            "memo",
        ],
    ),
    (
        ProspectField::Icebreaker,
        &[
            "icebreaker",
            "opener",
            "intro",
            "personalizedintro",
            "personalization",
        ],
    ),
    (ProspectField::Custom1, &["custom1", "customfield1"]),
    (ProspectField::Custom2, &["custom2", "customfield2"]),
    (ProspectField::Custom3, &["custom3", "customfield3"]),
    (ProspectField::Custom4, &["custom4", "customfield4"]),
    (ProspectField::Custom5, &["custom5", "customfield5"]),
];

/// Normalizes a header for alias comparison: lowercase with whitespace and
/// `_ - . / \` separators stripped. `"First Name"`, `"first_name"` and
/// `"FIRST-NAME"` all normalize to `"firstname"`.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|ch| {
            !ch.is_whitespace() && !matches!(ch, '_' | '-' | '.' | '/' | '\\')
        })
        .flat_map(char::to_lowercase)
        .collect()
}
