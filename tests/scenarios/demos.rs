//! The manifests under `demos/` stay compilable.

use std::path::PathBuf;

use blueprint::application::{CompileOptions, CompileUseCase};
use blueprint::infrastructure::StaticKeySource;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn keys() -> StaticKeySource {
    StaticKeySource::new().with_user("octocat", ["ssh-ed25519 AAAA octocat"])
}

#[test]
fn scenario_demo_web_stack() {
    let result = CompileUseCase::new(keys())
        .execute(&demo("web_stack.toml"), &CompileOptions::default())
        .unwrap();
    assert_eq!(result.summary.namespace, "web-stack");
    assert_eq!(result.summary.machines, 4);
    assert_eq!(result.summary.containers, 5);
    assert_eq!(result.summary.invariants, 3);
}

#[test]
fn scenario_demo_etcd_cluster() {
    let result = CompileUseCase::new(keys())
        .execute(&demo("etcd_cluster.yaml"), &CompileOptions::default())
        .unwrap();
    let workers = &result.document.machines[1..];
    assert_eq!(workers.len(), 3);
    assert!(workers.iter().all(|m| m.preemptible));
    assert!(workers.iter().all(|m| m.ssh_keys == ["ssh-ed25519 AAAA octocat"]));
}

#[test]
fn scenario_demo_custom_image() {
    let result = CompileUseCase::new(keys())
        .execute(&demo("custom_image.json"), &CompileOptions::default())
        .unwrap();
    let proxy = &result.document.containers[0];
    assert_eq!(proxy.image.name(), "tools-proxy");
    assert!(proxy.image.dockerfile().is_some());
}
