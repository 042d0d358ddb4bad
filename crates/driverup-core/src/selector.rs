//! Version selection.
//!
//! The manifest is already ordered oldest to newest, so "newest matching" is
//! taken to be "last matching in manifest order". Versions are compared as
//! plain string prefixes; `"12"` matches both `12.0.1` and `120.0.2`.

use driverup_schema::VersionRecord;

/// Pick the record to install.
///
/// With no prefix this is the last record. With a prefix it is the last
/// record whose version starts with it. `None` when nothing matches or the
/// manifest is empty.
pub fn select<'a>(records: &'a [VersionRecord], prefix: Option<&str>) -> Option<&'a VersionRecord> {
    match prefix {
        None => records.last(),
        Some(prefix) => records
            .iter()
            .rev()
            .find(|r| r.version.starts_with(prefix)),
    }
}

/// Version strings for display.
///
/// `limit == 0` lists everything. Otherwise the window covers the last
/// `limit` entries but stops short of the final one, so the true latest
/// version is never printed in a limited listing.
pub fn list_versions(records: &[VersionRecord], limit: usize) -> Vec<&str> {
    let versions = records.iter().map(|r| r.version.as_str());
    if limit == 0 {
        return versions.collect();
    }

    let end = records.len().saturating_sub(1);
    let start = records.len().saturating_sub(limit);
    versions.skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn manifest(versions: &[&str]) -> Vec<VersionRecord> {
        versions
            .iter()
            .enumerate()
            .map(|(i, v)| VersionRecord {
                version: (*v).to_string(),
                revision: format!("{}", 1000 + i),
                downloads: BTreeMap::new(),
            })
            .collect()
    }

    #[test]
    fn test_select_latest_without_prefix() {
        let records = manifest(&["119.0.1", "120.0.2", "120.0.9"]);
        let picked = select(&records, None).unwrap();
        assert_eq!(picked.version, "120.0.9");
    }

    #[test]
    fn test_select_last_matching_prefix() {
        let records = manifest(&["119.0.1", "120.0.2", "120.0.9"]);
        let picked = select(&records, Some("120")).unwrap();
        assert_eq!(picked.version, "120.0.9");

        let picked = select(&records, Some("119")).unwrap();
        assert_eq!(picked.version, "119.0.1");
    }

    #[test]
    fn test_select_uses_manifest_order_not_semver() {
        // Out-of-order manifest: the last match wins even if it is "older".
        let records = manifest(&["120.0.9", "120.0.10", "120.0.2"]);
        let picked = select(&records, Some("120.0")).unwrap();
        assert_eq!(picked.version, "120.0.2");
    }

    #[test]
    fn test_select_plain_string_prefix() {
        let records = manifest(&["12.0.1", "120.0.2", "121.0.1"]);
        let picked = select(&records, Some("12")).unwrap();
        assert_eq!(picked.version, "121.0.1");

        let picked = select(&records, Some("12.")).unwrap();
        assert_eq!(picked.version, "12.0.1");
    }

    #[test]
    fn test_select_no_match() {
        let records = manifest(&["119.0.1", "120.0.2"]);
        assert!(select(&records, Some("121")).is_none());
        assert!(select(&[], None).is_none());
        assert!(select(&[], Some("120")).is_none());
    }

    #[test]
    fn test_selected_version_always_has_prefix() {
        let records = manifest(&["118.0.5", "119.0.1", "119.1.0", "120.0.2", "120.0.9"]);
        for prefix in ["1", "11", "118", "119.", "119.1", "120.0", "120.0.9"] {
            let picked = select(&records, Some(prefix)).unwrap();
            assert!(picked.version.starts_with(prefix), "{prefix}");
            let last = records
                .iter()
                .rposition(|r| r.version.starts_with(prefix))
                .unwrap();
            assert_eq!(picked, &records[last]);
        }
    }

    #[test]
    fn test_list_versions_unlimited() {
        let records = manifest(&["v1", "v2", "v3", "v4", "v5"]);
        assert_eq!(list_versions(&records, 0), vec!["v1", "v2", "v3", "v4", "v5"]);
    }

    #[test]
    fn test_list_versions_limit_drops_latest() {
        let records = manifest(&["v1", "v2", "v3", "v4", "v5"]);
        assert_eq!(list_versions(&records, 3), vec!["v3", "v4"]);
        assert_eq!(list_versions(&records, 1), Vec::<&str>::new());
        assert_eq!(list_versions(&records, 5), vec!["v1", "v2", "v3", "v4"]);
    }

    #[test]
    fn test_list_versions_limit_past_start() {
        let records = manifest(&["v1", "v2", "v3"]);
        assert_eq!(list_versions(&records, 10), vec!["v1", "v2"]);
        assert!(list_versions(&[], 3).is_empty());
    }
}
