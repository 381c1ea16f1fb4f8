//! Directory records, before and after normalization.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A user record exactly as the identity provider lists it.
///
/// Every field is optional on the wire; absent or `null` scalars decode to
/// their empty value, and an absent or `null` attribute map or value list
/// decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDirectoryEntry {
    /// Login name, matched against the identity header's username.
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    /// Whether the account is enabled in the provider.
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    /// Given name.
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    /// Family name.
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    /// Email address.
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    /// Custom attributes, each holding an ordered list of string values.
    #[serde(deserialize_with = "nullable_map")]
    pub attributes: HashMap<String, Vec<String>>,
}

impl RawDirectoryEntry {
    /// All values recorded for `name`; empty when the attribute is absent.
    pub fn values(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value recorded for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    /// Whether `name` carries at least one value.
    pub fn has(&self, name: &str) -> bool {
        !self.values(name).is_empty()
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn nullable_map<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: HashMap<String, Option<Vec<String>>> = nullable(deserializer)?;
    Ok(map
        .into_iter()
        .map(|(name, values)| (name, values.unwrap_or_default()))
        .collect())
}

/// The canonical, strongly-typed user record handed to request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedUser {
    /// Login name.
    pub username: String,
    /// Numeric account identifier (`account_id` attribute).
    #[serde(rename = "id")]
    pub numeric_id: i64,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account number (`account_number` attribute).
    pub account_number: String,
    /// Always [`NormalizedUser::UNKNOWN_ADDRESS`]; the directory holds no address data.
    pub address_string: String,
    /// `is_active` attribute.
    pub is_active: bool,
    /// `is_org_admin` attribute.
    pub is_org_admin: bool,
    /// `is_internal` attribute.
    pub is_internal: bool,
    /// Always [`NormalizedUser::DEFAULT_LOCALE`].
    pub locale: String,
    /// Numeric organization identifier (`org_id` attribute).
    pub org_id: i64,
    /// Mirrors `first_name`.
    pub display_name: String,
    /// Always [`NormalizedUser::SUBJECT_TYPE`].
    #[serde(rename = "type")]
    pub subject_type: String,
    /// Opaque entitlements payload; format is provider-defined.
    pub entitlements: String,
}

impl NormalizedUser {
    /// Placeholder address.
    pub const UNKNOWN_ADDRESS: &'static str = "unknown";
    /// Locale assigned to every user.
    pub const DEFAULT_LOCALE: &'static str = "en_US";
    /// Subject type assigned to every user.
    pub const SUBJECT_TYPE: &'static str = "User";
}
