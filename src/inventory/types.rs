use serde::{Deserialize, Serialize};

/// One datastore as returned by the listing endpoint, sizes in megabytes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatastoreSummary {
    pub name: String,
    pub capacity_mb: u64,
    pub free_space_mb: u64,
}

/// Refreshed per-datastore storage view, sizes in bytes.
///
/// `uncommitted_bytes` is the thin-provisioning overhang: space promised to
/// consumers of the datastore but not yet committed on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatastoreStorageInfo {
    pub capacity_bytes: u64,
    pub free_space_bytes: u64,
    pub uncommitted_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datastore_summary_wire_format() {
        let json = r#"{"name":"datastore1","capacity_mb":102400,"free_space_mb":51200}"#;
        let summary: DatastoreSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.name, "datastore1");
        assert_eq!(summary.capacity_mb, 102400);
        assert_eq!(summary.free_space_mb, 51200);
    }

    #[test]
    fn test_storage_info_wire_format() {
        let json = r#"{
            "capacity_bytes": 107374182400,
            "free_space_bytes": 53687091200,
            "uncommitted_bytes": 10737418240
        }"#;
        let info: DatastoreStorageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.capacity_bytes, 107_374_182_400);
        assert_eq!(info.free_space_bytes, 53_687_091_200);
        assert_eq!(info.uncommitted_bytes, 10_737_418_240);
    }
}
