//! Shared key generation for storage backends.
//!
//! Key format: `{owner_id}-{unix_millis}[-{slot}].{ext}`. The owner id and
//! timestamp make collisions across users and submissions implausible; the
//! slot suffix (`cover`, `thumb`, ...) keeps the assets of one submission
//! distinguishable.

use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

/// Generate an object key for an upload.
///
/// The extension comes from the original filename, lowercased; files without
/// an extension fall back to `bin`.
pub fn object_key(
    owner: Uuid,
    slot: Option<&str>,
    original_filename: &str,
    at: DateTime<Utc>,
) -> String {
    let ext = extension_of(original_filename);
    match slot {
        Some(slot) => format!("{}-{}-{}.{}", owner, at.timestamp_millis(), slot, ext),
        None => format!("{}-{}.{}", owner, at.timestamp_millis(), ext),
    }
}

fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_format_with_slot() {
        let owner = Uuid::nil();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let key = object_key(owner, Some("cover"), "My Photo.PNG", at);
        assert_eq!(
            key,
            format!("{}-{}-cover.png", owner, at.timestamp_millis())
        );
    }

    #[test]
    fn test_key_format_without_slot() {
        let owner = Uuid::nil();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let key = object_key(owner, None, "data.csv", at);
        assert_eq!(key, format!("{}-{}.csv", owner, at.timestamp_millis()));
    }

    #[test]
    fn test_missing_extension_falls_back_to_bin() {
        let key = object_key(Uuid::nil(), Some("thumb"), "README", Utc::now());
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_keys_differ_across_timestamps() {
        let owner = Uuid::new_v4();
        let first = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let second = first + chrono::Duration::milliseconds(1);
        assert_ne!(
            object_key(owner, Some("cover"), "a.png", first),
            object_key(owner, Some("cover"), "a.png", second)
        );
    }
}
