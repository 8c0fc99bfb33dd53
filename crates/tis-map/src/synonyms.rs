//! Fixed table of domain synonym groups.
//!
//! Each group pairs a canonical target name with substrings that
//! identify source columns likely referring to that concept. Scan order
//! matters: groups are checked first to last and the first hit wins.

pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    (
        "name",
        &["name", "full_name", "fullname", "customer_name", "user_name"],
    ),
    ("email", &["email", "email_address", "e_mail", "mail"]),
    (
        "phone",
        &["phone", "telephone", "mobile", "cell", "phone_number"],
    ),
    ("age", &["age", "years_old", "birth_year"]),
    ("city", &["city", "location", "town", "municipality"]),
    ("country", &["country", "nation", "country_code"]),
    ("address", &["address", "street", "location", "addr"]),
    ("date", &["date", "created_at", "timestamp", "time"]),
    ("id", &["id", "identifier", "key", "primary_key"]),
];

/// Finds the first synonym group whose substrings occur in the
/// normalized (lowercased, trimmed) source name.
pub fn match_synonym(normalized: &str) -> Option<&'static str> {
    SYNONYM_GROUPS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| normalized.contains(p)))
        .map(|(canonical, _)| *canonical)
}
