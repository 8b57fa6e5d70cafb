//! Snapshot fixtures shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary workspace holding a snapshot file.
pub(super) struct SnapshotWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SnapshotWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn snapshot_path(&self) -> Utf8PathBuf {
        self.root.join("snapshot.json")
    }

    /// Write [`backpack_snapshot`] and return its path.
    pub(super) fn write_backpack_snapshot(&self) -> Utf8PathBuf {
        let path = self.snapshot_path();
        let payload = serde_json::to_vec_pretty(&backpack_snapshot()).expect("encode snapshot");
        write_utf8(&path, &payload);
        path
    }
}

/// One lost backpack against four found items.
///
/// `F1` (verified, same place) outranks `F2` (pending, cafeteria). `F3` is
/// claimed and `F4` shares nothing with the backpack.
pub(super) fn backpack_snapshot() -> Value {
    json!({
        "lostItems": [{
            "id": "L1",
            "itemName": "Blue Backpack",
            "description": "Navy blue backpack with laptop",
            "category": "Bags",
            "lostLocation": "Library 2nd floor",
            "lostDate": "2025-03-10"
        }],
        "foundItems": [
            found("F1", "Library", "2025-03-11", "verified"),
            found("F2", "Cafeteria", "2025-03-11", "pending"),
            found("F3", "Library", "2025-03-10", "claimed"),
            {
                "id": "F4",
                "itemName": "Calculator",
                "description": "Graphing calculator",
                "category": "Electronics",
                "foundLocation": "Engineering building",
                "foundDate": "2025-01-02",
                "status": "verified"
            }
        ]
    })
}

fn found(id: &str, location: &str, date: &str, status: &str) -> Value {
    json!({
        "id": id,
        "itemName": "Blue backpack",
        "description": "Dark blue backpack found near study area",
        "category": "Bags",
        "foundLocation": location,
        "foundDate": date,
        "status": status
    })
}

/// Candidate ids listed in a rendered match report.
pub(super) fn candidate_ids(report: &Value) -> Vec<String> {
    report
        .get("candidates")
        .and_then(Value::as_array)
        .expect("candidates array")
        .iter()
        .map(|candidate| {
            candidate
                .get("id")
                .and_then(Value::as_str)
                .expect("candidate id")
                .to_owned()
        })
        .collect()
}
