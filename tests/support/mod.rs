use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for routekit
pub fn routekit() -> Command {
    cargo_bin_cmd!("routekit")
}

/// The bundled seven-state road network
#[allow(dead_code)]
pub fn states_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/states.toml")
}

/// Write a graph file into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Directed 4-node graph from the Floyd-Warshall worked example
#[allow(dead_code)]
pub fn floyd_graph(dir: &TempDir) -> PathBuf {
    write_graph(
        dir,
        "floyd.toml",
        r#"
directed = true
node_count = 4
edges = [
    { from = 0, to = 1, weight = 3 },
    { from = 0, to = 3, weight = 5 },
    { from = 1, to = 0, weight = 2 },
    { from = 1, to = 3, weight = 4 },
    { from = 2, to = 1, weight = 1 },
    { from = 3, to = 2, weight = 2 },
]
"#,
    )
}

/// Hub 0 joined to leaves 1, 2 and 3; leaves share no edges
#[allow(dead_code)]
pub fn star_graph(dir: &TempDir) -> PathBuf {
    write_graph(
        dir,
        "star.json",
        r#"{
  "node_count": 4,
  "edges": [
    { "from": 0, "to": 1, "weight": 1 },
    { "from": 0, "to": 2, "weight": 1 },
    { "from": 0, "to": 3, "weight": 1 }
  ]
}"#,
    )
}

/// Parse stdout of a successful command as JSON
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
