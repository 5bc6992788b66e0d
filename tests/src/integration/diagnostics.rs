//! Scanner, comparison and report over stores written to disk.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{linked_chain, write_config, write_store};
    use chain_inspector::commands::build_report;
    use chain_inspector::NodeSource;
    use ci_01_block_storage::{open_store, OpenMode};
    use ci_04_diagnostics::{compare_nodes, scan_errors, write_report, ErrorCode, FullReport};
    use shared_types::Block;

    #[tokio::test]
    async fn test_scan_finds_tampered_block() {
        let dir = tempfile::tempdir().unwrap();
        let mut chain = linked_chain(&["g", "a", "b", "c"]);
        chain[2].data = "rewritten".to_string();
        let db = write_store(dir.path(), "node", &chain);

        let source = NodeSource::open_local(&db).await.unwrap();
        let result = scan_errors(&source, "node");

        assert!(!result.healthy);
        assert_eq!(result.total_blocks, 4);
        assert!(result
            .errors
            .iter()
            .any(|e| e.height == 2 && e.code == ErrorCode::HashMismatch));
    }

    #[tokio::test]
    async fn test_scan_of_loaded_chain_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let db = write_store(dir.path(), "node", &linked_chain(&["g", "a", "b"]));

        let source = NodeSource::open_local(&db).await.unwrap();
        let result = scan_errors(&source, "node");
        assert!(result.healthy);
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_compare_stores_with_gap() {
        let dir = tempfile::tempdir().unwrap();
        let chain = linked_chain(&["g", "a", "b", "c"]);
        let a = write_store(dir.path(), "a", &chain);
        let b = write_store(dir.path(), "b", &chain[..2]);

        let a = open_store(&a, OpenMode::MustExist).unwrap();
        let b = open_store(&b, OpenMode::MustExist).unwrap();
        let result = compare_nodes(&a, &b, "a", "b");

        assert!(!result.in_sync);
        assert_eq!(result.matching_blocks, 2);
        assert!(result
            .mismatches
            .iter()
            .all(|m| m.code == ErrorCode::MissingOnNode2));
    }

    #[tokio::test]
    async fn test_full_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let chain = linked_chain(&["g", "a", "b"]);
        let n1 = write_store(dir.path(), "n1", &chain);
        let n2 = write_store(dir.path(), "n2", &chain);
        let config = write_config(dir.path(), &[("n1", &n1), ("n2", &n2)], &[]);

        let report = build_report(&config, Some(n1.as_path()), Some((n1.as_path(), n2.as_path()))).await.unwrap();
        let output = dir.path().join("inspector-report.json");
        write_report(&report, &output).unwrap();

        let written: FullReport =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, report);
        assert!(written.error_scan.unwrap().healthy);
        assert!(written.comparison.unwrap().in_sync);
        assert_eq!(written.consensus.unwrap().total_nodes, 2);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert!(raw.get("errorScan").is_some());
    }

    #[tokio::test]
    async fn test_report_without_usable_network_omits_consensus() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("absent.json");

        let report = build_report(&config, None, None).await.unwrap();
        assert!(report.consensus.is_none());
        assert_eq!(report.version, chain_inspector::VERSION);
    }

    #[test]
    fn test_gap_below_tip_is_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let chain = linked_chain(&["g", "a"]);
        let path = dir.path().join("node");
        let mut store = open_store(&path, OpenMode::CreateIfMissing).unwrap();
        store.save_block(&chain[0]).unwrap();
        store.save_block(&chain[1]).unwrap();
        // Jump straight to height 7, leaving 2..=6 empty.
        let stray = Block::new(7, chain[0].hash.clone(), "stray", 0);
        store.save_block(&stray).unwrap();
        store.close().unwrap();

        let store = open_store(&path, OpenMode::MustExist).unwrap();
        let result = scan_errors(&store, "node");
        assert_eq!(result.max_height, 7);
        assert!(result
            .errors
            .iter()
            .any(|e| e.height == 2 && e.code == ErrorCode::MissingBlock));
    }
}
