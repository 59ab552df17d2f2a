//! Phase 3 tests: Configuration loading + CLI commands.

use std::io::Write;

use tempfile::NamedTempFile;

use undirected_graph::cli::commands::{render_info, render_traverse};
use undirected_graph::cli::{NamedGraph, TraverseOptions};
use undirected_graph::config::{load_config, load_or_default, CliConfig, OutputFormat};
use undirected_graph::graph::TraversalOrder;
use undirected_graph::types::GraphError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn options_from(config: &CliConfig) -> TraverseOptions {
    TraverseOptions {
        order: config.traversal_order().unwrap(),
        max_depth: config.max_depth,
        max_results: config.max_results,
    }
}

// ==================== Config ====================

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
format = "json"
order = "bfs"
max_depth = 2
max_results = 10
log_level = "debug"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.traversal_order().unwrap(), TraversalOrder::BreadthFirst);
    assert_eq!(config.max_depth, 2);
    assert_eq!(config.max_results, 10);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_explicit_config_is_loaded() {
    let file = write_config("order = \"bfs\"\n");
    let config = load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.order, "bfs");
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    match load_config(&missing) {
        Err(GraphError::Io(e)) => assert!(e.to_string().contains("nope.toml")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_config_is_parse_error() {
    let file = write_config("max_depth = \"deep\"\n");
    assert!(matches!(
        load_config(file.path()),
        Err(GraphError::Config(_))
    ));
}

// ==================== Commands ====================

#[test]
fn test_traverse_with_config_limits() {
    init_logger();
    let file = write_config("order = \"bfs\"\nmax_depth = 1\n");
    let config = load_config(file.path()).unwrap();
    let named = NamedGraph::parse("a,b,c,d", Some("a-b,b-c,a-d")).unwrap();

    let out = render_traverse(&named, "a", options_from(&config), OutputFormat::Text).unwrap();
    assert_eq!(
        out,
        "Traversal (bfs) from a:\n  [depth 0] a\n  [depth 1] b\n  [depth 1] d\n"
    );
}

#[test]
fn test_traverse_json_output() {
    init_logger();
    let named = NamedGraph::parse("a,b,c", Some("a-b,b-c")).unwrap();
    let out = render_traverse(
        &named,
        "c",
        options_from(&CliConfig::default()),
        OutputFormat::Json,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["start"], "c");
    assert_eq!(value["visited"], serde_json::json!(["c", "b", "a"]));
    assert_eq!(value["depths"]["a"], 2);
}

#[test]
fn test_info_json_output() {
    init_logger();
    let named = NamedGraph::parse("hub,x,y,lonely", Some("hub-x,hub-y,x-ghost")).unwrap();
    let out = render_info(&named, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["vertex_count"], 4);
    assert_eq!(value["edge_count"], 2);
    assert_eq!(value["vertices"][0]["name"], "hub");
    assert_eq!(value["vertices"][0]["neighbors"], serde_json::json!(["x", "y"]));
    assert_eq!(value["vertices"][3]["degree"], 0);
}

#[test]
fn test_unknown_start_is_reported() {
    let named = NamedGraph::parse("a,b", Some("a-b")).unwrap();
    let result = render_traverse(
        &named,
        "z",
        options_from(&CliConfig::default()),
        OutputFormat::Text,
    );
    match result {
        Err(GraphError::UnknownVertex(name)) => assert_eq!(name, "z"),
        other => panic!("Expected UnknownVertex, got {:?}", other),
    }
}
