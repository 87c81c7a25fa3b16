//! Data model for decrypted cookie snapshots.
//!
//! The shape is dictated by the uploader: a JSON object with `cookie_data`
//! (domain -> cookie list), optional `local_storage_data` (domain -> key ->
//! value), and an opaque `update_time` stamp.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A decrypted snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedDocument {
    /// Cookies per domain, in upload order within each domain.
    pub cookie_data: BTreeMap<String, Vec<CookieRecord>>,

    /// Local-storage key/value pairs per domain.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub local_storage_data: BTreeMap<String, BTreeMap<String, serde_json::Value>>,

    /// Upload timestamp, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// A single cookie as captured by the browser extension.
///
/// Browsers disagree on the exact field set (sameSite, expirationDate,
/// storeId, ...), so anything beyond the named fields is preserved verbatim
/// and re-serialization is lossless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    #[serde(rename = "httpOnly", default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
