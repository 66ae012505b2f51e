mod common;

use common::*;

#[test]
fn test_check_reports_summary() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["check", "shop.toml"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [OK] shop.toml is consistent
      2 invariants held

    Namespace: shop
    Machines: 3 (1 master, 2 workers)
    Services: 3
      - lb: 1 container
      - app: 2 containers
      - db: 1 container
    Containers: 4
    Connections: 3
    Placements: 1
    Invariants: 2
    ");
}

#[test]
fn test_check_writes_nothing() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["check", "shop.toml"]);
    assert!(result.success);
    let entries = std::fs::read_dir(env.project_root.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_check_failing_assertion() {
    let env = TestEnv::new();
    env.write_file("web.toml", FAILING_ASSERTION_TOML);

    let result = env.run(&["check", "web.toml"]);
    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains(r#"invariant failed: reach true "web" "public""#),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_check_json() {
    let env = TestEnv::new();
    env.write_file("shop.toml", WEB_STACK_TOML);

    let result = env.run(&["check", "--json", "shop.toml"]);
    assert!(result.success);
    let events = result.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["command"], "check");
    assert_eq!(events[0]["ok"], true);
    assert_eq!(events[0]["summary"]["invariants"], 2);
}

#[test]
fn test_check_unsupported_extension() {
    let env = TestEnv::new();
    env.write_file("shop.ini", "x");

    let result = env.run(&["check", "shop.ini"]);
    assert!(!result.success);
    assert!(result.stderr.contains("input error"), "stderr:\n{}", result.stderr);
}
