//! Local stores on disk analysed through the CLI's network loader.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{linked_chain, write_config, write_store};
    use chain_inspector::commands::{analyze_network, load_sample_chain};
    use ci_03_consensus::{NetworkHealth, SyncStatus};

    #[tokio::test]
    async fn test_identical_loaded_stores_agree() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("node1-data");
        let b = dir.path().join("node2-data");
        load_sample_chain(&a, 5, 1_700_000_000, |_| {}).unwrap();
        load_sample_chain(&b, 5, 1_700_000_000, |_| {}).unwrap();

        let config = write_config(dir.path(), &[("node1", &a), ("node2", &b)], &[]);
        let result = analyze_network(&config).await.unwrap();

        assert_eq!(result.total_nodes, 2);
        assert!(result.fork_points.is_empty());
        assert_eq!(result.consensus_height, 4);
        assert_eq!(result.network_health, NetworkHealth::Excellent);
        assert_eq!(result.canonical_name(), "node1");
    }

    #[tokio::test]
    async fn test_forked_store_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let main = linked_chain(&["g", "a", "b", "c"]);
        let fork = linked_chain(&["g", "a", "b'", "c'"]);
        let n1 = write_store(dir.path(), "n1", &main);
        let n2 = write_store(dir.path(), "n2", &main);
        let n3 = write_store(dir.path(), "n3", &fork);

        let config = write_config(dir.path(), &[("n1", &n1), ("n2", &n2), ("n3", &n3)], &[]);
        let result = analyze_network(&config).await.unwrap();

        let heights: Vec<u64> = result.fork_points.iter().map(|f| f.height).collect();
        assert_eq!(heights, vec![2, 3]);
        assert_eq!(result.fork_points[0].affected_nodes, vec!["n1", "n2", "n3"]);
        assert_eq!(result.canonical_name(), "n1");
        assert!(result.node_states["n2"].on_canonical);
        assert!(!result.node_states["n3"].on_canonical);
        assert_eq!(result.consensus_height, 1);
        assert!(result
            .recommendations
            .contains(&"🔧 n3: Resync from canonical chain (n1)".to_string()));
    }

    #[tokio::test]
    async fn test_lagging_store() {
        let dir = tempfile::tempdir().unwrap();
        let payloads: Vec<String> = (0..15).map(|h| format!("tx{h}")).collect();
        let payloads: Vec<&str> = payloads.iter().map(String::as_str).collect();
        let full = linked_chain(&payloads);

        let tip = write_store(dir.path(), "tip", &full);
        let behind = write_store(dir.path(), "behind", &full[..3]);

        let config = write_config(dir.path(), &[("tip", &tip), ("behind", &behind)], &[]);
        let result = analyze_network(&config).await.unwrap();

        let state = &result.node_states["behind"];
        assert_eq!(state.blocks_behind, 12);
        assert_eq!(state.status, SyncStatus::Behind);
        assert!(state.on_canonical);
        assert!(result.fork_points.is_empty());
    }

    #[tokio::test]
    async fn test_missing_stores_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_store(dir.path(), "good", &linked_chain(&["g", "a"]));
        let missing = dir.path().join("typo");

        let config = write_config(dir.path(), &[("good", &good), ("typo", &missing)], &[]);
        let result = analyze_network(&config).await.unwrap();

        assert_eq!(result.total_nodes, 1);
        assert!(!result.node_states.contains_key("typo"));
    }

    #[tokio::test]
    async fn test_no_usable_nodes_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nothing-here");
        let config = write_config(dir.path(), &[("ghost", &missing)], &[]);

        let err = analyze_network(&config).await.unwrap_err();
        assert!(err.to_string().contains("No valid nodes found"));
    }
}
