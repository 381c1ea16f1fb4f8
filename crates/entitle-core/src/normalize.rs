//! Attribute normalization.
//!
//! Converts raw directory entries into [`NormalizedUser`] records. Entries
//! lacking any required attribute are dropped, never partially filled.

use crate::user::{NormalizedUser, RawDirectoryEntry};

/// Attributes that must carry at least one value for an entry to survive.
pub const REQUIRED_ATTRIBUTES: [&str; 7] = [
    "is_active",
    "is_org_admin",
    "is_internal",
    "account_id",
    "org_id",
    "entitlements",
    "account_number",
];

/// Attribute holding entitlements as one value per service (newer naming).
pub const LIST_ENTITLEMENTS_ATTRIBUTE: &str = "newEntitlements";

/// Normalize every entry, preserving input order and dropping invalid ones.
///
/// Never fails. Coercion failures fall back to `false` / `0`.
pub fn normalize(entries: &[RawDirectoryEntry]) -> Vec<NormalizedUser> {
    entries.iter().filter_map(normalize_entry).collect()
}

/// Normalize a single entry, or `None` if a required attribute is missing.
pub fn normalize_entry(entry: &RawDirectoryEntry) -> Option<NormalizedUser> {
    let missing = missing_attributes(entry);
    if !missing.is_empty() {
        for attr in &missing {
            log::info!("User {} does not have field [{attr}]", entry.username);
        }
        log::info!("Skipping user {} as attributes are missing", entry.username);
        return None;
    }

    let first = |name: &str| entry.first(name).unwrap_or_default();

    Some(NormalizedUser {
        username: entry.username.clone(),
        numeric_id: parse_int_or_default(first("account_id")),
        email: entry.email.clone(),
        first_name: entry.first_name.clone(),
        last_name: entry.last_name.clone(),
        account_number: first("account_number").to_string(),
        address_string: NormalizedUser::UNKNOWN_ADDRESS.to_string(),
        is_active: parse_bool_or_default(first("is_active")),
        is_org_admin: parse_bool_or_default(first("is_org_admin")),
        is_internal: parse_bool_or_default(first("is_internal")),
        locale: NormalizedUser::DEFAULT_LOCALE.to_string(),
        org_id: parse_int_or_default(first("org_id")),
        display_name: entry.first_name.clone(),
        subject_type: NormalizedUser::SUBJECT_TYPE.to_string(),
        entitlements: resolve_entitlements(entry),
    })
}

/// Every required attribute the entry lacks, in check order.
pub fn missing_attributes(entry: &RawDirectoryEntry) -> Vec<&'static str> {
    REQUIRED_ATTRIBUTES
        .iter()
        .copied()
        .filter(|attr| !entry.has(attr))
        .collect()
}

/// Pick the entitlements payload.
///
/// `newEntitlements` wins when present and is rendered as `{v1,v2,...}`;
/// otherwise the first `entitlements` value is used verbatim.
pub fn resolve_entitlements(entry: &RawDirectoryEntry) -> String {
    let listed = entry.values(LIST_ENTITLEMENTS_ATTRIBUTE);
    if !listed.is_empty() {
        return format!("{{{}}}", listed.join(","));
    }
    entry.first("entitlements").unwrap_or_default().to_string()
}

/// Parse a boolean literal, returning `false` for anything unrecognised.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
pub fn parse_bool_or_default(raw: &str) -> bool {
    matches!(raw, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Parse a signed decimal integer, returning `0` on any failure.
pub fn parse_int_or_default(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}
