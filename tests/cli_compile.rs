mod common;

use common::*;
use serde_json::Value;

#[test]
fn test_compile_writes_document_to_stdout() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["compile", "shop.toml"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let document: Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(document["namespace"], "shop");
    assert_eq!(document["machines"].as_array().unwrap().len(), 3);
    assert_eq!(document["containers"].as_array().unwrap().len(), 4);
    let labels: Vec<_> = document["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, ["lb", "app", "db"]);
}

#[test]
fn test_compile_is_deterministic() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let first = env.run(&["compile", "shop.toml"]);
    let second = env.run(&["compile", "shop.toml"]);
    assert!(first.success);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_compile_output_file() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["compile", "shop.toml", "-o", "out/shop.json"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stdout.starts_with("[OK] Compiled shop.toml -> out/shop.json"),
        "stdout:\n{}",
        result.stdout
    );

    let written = env.read_file("out/shop.json");
    let document: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["namespace"], "shop");
    assert!(written.contains("\n  "), "expected pretty output");
}

#[test]
fn test_compile_compact_is_single_line() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["compile", "shop.toml", "--compact"]);
    assert!(result.success);
    assert_eq!(result.stdout.trim_end().lines().count(), 1);
}

#[test]
fn test_compile_yaml_matches_toml_topology() {
    let env = TestEnv::new();
    env.write_file("shop.yaml", WEB_STACK_YAML);

    let result = env.run(&["compile", "shop.yaml"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    let document: Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(document["labels"].as_array().unwrap().len(), 2);
    assert_eq!(document["connections"].as_array().unwrap().len(), 2);
}

#[test]
fn test_compile_undeployed_peer_fails() {
    let env = TestEnv::new();
    env.write_file("bad.toml", UNDEPLOYED_PEER_TOML);

    let result = env.run(&["compile", "bad.toml"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
    assert!(
        result
            .stderr
            .contains("consistency error: foo has a connection to undeployed service: baz"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_compile_missing_manifest_fails() {
    let env = TestEnv::new();
    let result = env.run(&["compile", "missing.toml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("input error"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_compile_json_events() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["--json", "compile", "shop.toml"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let events = result.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[1]["event"], "complete");
    assert_eq!(events[1]["summary"]["containers"], 4);
    assert_eq!(events[1]["document"]["namespace"], "shop");
}

#[test]
fn test_compile_json_error_event() {
    let env = TestEnv::new();
    env.write_file("bad.toml", UNDEPLOYED_PEER_TOML);

    let result = env.run(&["compile", "bad.toml", "--json"]);
    assert!(!result.success);
    let events = result.events();
    let last = events.last().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["kind"], "consistency");
}

#[test]
fn test_compile_namespace_from_config_and_env() {
    let env = TestEnv::new();
    env.write_file(
        "plain.toml",
        "[[services]]\nname = \"web\"\n[[services.containers]]\nimage = \"nginx\"\n",
    );
    env.write_file("blueprint.toml", "[deployment]\nnamespace = \"from-config\"\n");

    let result = env.run(&["compile", "plain.toml"]);
    let document: Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(document["namespace"], "from-config");

    let result = env.run_with_env(
        &["compile", "plain.toml"],
        &[("BLUEPRINT_NAMESPACE", "from-env")],
    );
    let document: Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(document["namespace"], "from-env");
}

#[test]
fn test_compile_config_output_pretty_false() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);
    env.write_file("ci.toml", "[output]\npretty = false\n");

    let result = env.run(&["--config", "ci.toml", "compile", "shop.toml"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout.trim_end().lines().count(), 1);
}

#[test]
fn test_unknown_config_key_warns() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);
    env.write_file("blueprint.toml", "[deployment]\nnamspace = \"x\"\n");

    let result = env.run(&["compile", "shop.toml"]);
    assert!(result.success);
    assert!(
        result.stderr.contains("did you mean 'namespace'?"),
        "stderr:\n{}",
        result.stderr
    );
}
