//! Env-file export of decrypted cookies.
//!
//! Downstream consumers (RSSHub-style services) read cookies from an
//! environment file, one `VAR = cookie-string` line per site. Which domains
//! map to which variable names is injected configuration, not library state.

use std::collections::BTreeMap;
use std::path::Path;

use crate::document::{CookieRecord, SyncedDocument};
use crate::error::Result;

/// Injected domain -> environment-variable-name table.
///
/// Lookups are case-insensitive on the domain.
#[derive(Debug, Clone, Default)]
pub struct EnvMapping {
    entries: BTreeMap<String, String>,
}

impl EnvMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `domain` to the environment variable `var`.
    pub fn insert(&mut self, domain: &str, var: &str) {
        self.entries
            .insert(domain.to_ascii_lowercase(), var.to_string());
    }

    /// Variable name for `domain`, if one is mapped.
    pub fn var_for(&self, domain: &str) -> Option<&str> {
        self.entries
            .get(&domain.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: AsRef<str>, V: AsRef<str>> FromIterator<(D, V)> for EnvMapping {
    fn from_iter<I: IntoIterator<Item = (D, V)>>(iter: I) -> Self {
        let mut mapping = EnvMapping::new();
        for (domain, var) in iter {
            mapping.insert(domain.as_ref(), var.as_ref());
        }
        mapping
    }
}

/// Join cookie records as `name=value` pairs separated by `"; "`.
pub fn cookie_header(records: &[CookieRecord]) -> String {
    records
        .iter()
        .map(|cookie| format!("{}={}", cookie.name, cookie.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render the env-file body: one `VAR = cookie-string` line per mapped
/// domain present in the snapshot. Empty when nothing matches.
pub fn render_env_file(document: &SyncedDocument, mapping: &EnvMapping) -> String {
    let mut lines = Vec::new();
    for (domain, records) in &document.cookie_data {
        if let Some(var) = mapping.var_for(domain) {
            lines.push(format!("{} = {}", var, cookie_header(records)));
        }
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Write the env file, replacing any previous one.
///
/// Returns the number of variables written. When no domain matches the
/// mapping, a stale file is still removed and nothing new is written.
pub fn write_env_file(
    path: &Path,
    document: &SyncedDocument,
    mapping: &EnvMapping,
) -> Result<usize> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::debug!(path = %path.display(), "removed previous env file");
    }

    let contents = render_env_file(document, mapping);
    if contents.is_empty() {
        return Ok(0);
    }

    std::fs::write(path, &contents)?;
    tracing::debug!(path = %path.display(), "wrote env file");
    Ok(contents.lines().count())
}
