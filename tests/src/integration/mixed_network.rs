//! Local stores and remote nodes in one analysis.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{linked_chain, write_config, write_store};
    use chain_inspector::commands::analyze_network;
    use shared_types::Block;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Serve `blocks` the way a node's REST surface does.
    async fn mock_node(blocks: &[Block]) -> MockServer {
        let server = MockServer::start().await;
        let tip = blocks.last().map_or(0, |b| b.height);

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "height": tip,
                "last_block_time": 1_700_000_000,
                "peers": 2,
                "blocks_per_min": 6.0,
                "status": "ok"
            })))
            .mount(&server)
            .await;

        for block in blocks {
            Mock::given(method("GET"))
                .and(path(format!("/block/{}", block.height)))
                .respond_with(ResponseTemplate::new(200).set_body_json(block))
                .mount(&server)
                .await;
        }
        server
    }

    #[tokio::test]
    async fn test_remote_node_joins_local_consensus() {
        let dir = tempfile::tempdir().unwrap();
        let chain = linked_chain(&["g", "a", "b"]);
        let local = write_store(dir.path(), "local", &chain);
        let server = mock_node(&chain).await;

        let url = server.uri();
        let config = write_config(dir.path(), &[("local", &local)], &[("remote", url.as_str())]);
        let result = analyze_network(&config).await.unwrap();

        assert_eq!(result.total_nodes, 2);
        assert!(result.fork_points.is_empty());
        assert_eq!(result.consensus_height, 2);
        assert!(result.node_states["remote"].on_canonical);
    }

    #[tokio::test]
    async fn test_remote_fork_at_tip() {
        let dir = tempfile::tempdir().unwrap();
        let local_chain = linked_chain(&["g", "a", "b"]);
        let remote_chain = linked_chain(&["g", "a", "b-remote"]);
        let local = write_store(dir.path(), "local", &local_chain);
        let server = mock_node(&remote_chain).await;

        let url = server.uri();
        let config = write_config(dir.path(), &[("local", &local)], &[("remote", url.as_str())]);
        let result = analyze_network(&config).await.unwrap();

        assert_eq!(result.fork_points.len(), 1);
        assert_eq!(result.fork_points[0].height, 2);
        assert_eq!(result.canonical_name(), "local");
        assert!(!result.node_states["remote"].on_canonical);
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_store(dir.path(), "local", &linked_chain(&["g"]));

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = server.uri();
        let config = write_config(dir.path(), &[("local", &local)], &[("down", url.as_str())]);
        let result = analyze_network(&config).await.unwrap();

        assert_eq!(result.total_nodes, 1);
        assert!(!result.node_states.contains_key("down"));
    }
}
