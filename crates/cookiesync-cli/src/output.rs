//! Console reporting for decrypted snapshots.

use chrono::DateTime;

use cookiesync_core::export::cookie_header;
use cookiesync_core::SyncedDocument;

/// Print the per-domain cookie summary.
pub fn print_summary(document: &SyncedDocument) {
    if let Some(raw) = &document.update_time {
        println!("Snapshot updated: {}", format_update_time(raw));
        println!();
    }

    for (domain, records) in &document.cookie_data {
        println!("{}:", domain);
        println!("{}", cookie_header(records));
        println!();
    }
}

/// Print the whole snapshot as pretty JSON.
pub fn print_json(document: &SyncedDocument) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}

/// Render the upload timestamp, falling back to the wire value when it is
/// not RFC 3339.
fn format_update_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        Err(_) => raw.to_string(),
    }
}
