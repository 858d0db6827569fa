//! End-to-end tests for the batch run: config → load → layout → files.

use std::fs;

use pretty_assertions::assert_eq;
use skillnet::{run, Error, LayoutKind, LayoutParams, NetworkConfig, NetworkDocument};
use tempfile::TempDir;

const CSV: &str = "\
Nome da Área/Habilidade,Depende de...,Requerido por...,Grau de Familiaridade,Interesse,Relevância no Mercado
HTML,,CSS,🏆,⭐,⭐
CSS,HTML,JavaScript,💪,👍,🔥
JavaScript,\"HTML, CSS\",React (React%20f00d.md),📚,🔥,⭐
React,JavaScript,Desconhecido,🌱,⭐,⭐
";

fn config_in(dir: &TempDir, seed: u64) -> NetworkConfig {
    NetworkConfig {
        input: dir.path().join("skills.csv"),
        json_output: dir.path().join("network_3d.json"),
        obj_output: dir.path().join("network_3d.obj"),
        layout: LayoutParams { seed: Some(seed), ..LayoutParams::default() },
    }
}

#[test]
fn test_full_run_writes_both_artifacts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.csv"), CSV).unwrap();
    let config = config_in(&dir, 1);

    let summary = run(&config).unwrap();
    assert_eq!(summary.nodes, 4);
    assert_eq!(summary.edges, 4);
    assert_eq!(summary.unresolved_relations, 1);
    assert_eq!(summary.report.unresolved[0].target, "Desconhecido");

    let doc: NetworkDocument =
        serde_json::from_str(&fs::read_to_string(&config.json_output).unwrap()).unwrap();
    assert_eq!(doc.metadata.total_nodes, 4);
    assert_eq!(doc.metadata.total_edges, 4);
    let names: Vec<&str> = doc.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["HTML", "CSS", "JavaScript", "React"]);

    let obj = fs::read_to_string(&config.obj_output).unwrap();
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(obj.lines().filter(|l| l.starts_with("l ")).count(), 4);
}

#[test]
fn test_same_seed_same_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.csv"), CSV).unwrap();
    let config = config_in(&dir, 42);

    run(&config).unwrap();
    let first = fs::read_to_string(&config.json_output).unwrap();
    run(&config).unwrap();
    let second = fs::read_to_string(&config.json_output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, 1);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!config.json_output.exists());
    assert!(!config.obj_output.exists());
}

#[test]
fn test_unsolved_layout_kind_still_exports() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.csv"), CSV).unwrap();
    let mut config = config_in(&dir, 3);
    config.layout.kind = LayoutKind::Hierarchical;

    run(&config).unwrap();
    let doc: NetworkDocument =
        serde_json::from_str(&fs::read_to_string(&config.json_output).unwrap()).unwrap();
    assert_eq!(doc.metadata.layout, "hierarchical");
    for n in &doc.nodes {
        for c in [n.x, n.y, n.z] {
            assert!((-10.0..=10.0).contains(&c));
        }
    }
}

#[test]
fn test_config_file_relative_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.csv"), CSV).unwrap();
    let cfg_path = dir.path().join("skillnet.toml");
    fs::write(
        &cfg_path,
        "input = \"skills.csv\"\njson_output = \"out.json\"\nobj_output = \"out.obj\"\n\n[layout]\niterations = 5\nseed = 9\n",
    )
    .unwrap();

    let config = NetworkConfig::from_file(&cfg_path).unwrap().relative_to(dir.path());
    let summary = run(&config).unwrap();
    assert_eq!(summary.nodes, 4);
    assert!(dir.path().join("out.json").exists());
    assert!(dir.path().join("out.obj").exists());
}

#[test]
fn test_empty_csv_yields_empty_artifacts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.csv"), "Nome da Área/Habilidade\n").unwrap();
    let config = config_in(&dir, 1);

    let summary = run(&config).unwrap();
    assert_eq!(summary.nodes, 0);
    assert_eq!(summary.edges, 0);

    let obj = fs::read_to_string(&config.obj_output).unwrap();
    assert_eq!(obj, "# Career Skills Network\n# 0 nodes, 0 edges\n\n\n");
}
