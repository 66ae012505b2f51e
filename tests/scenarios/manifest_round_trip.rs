//! Manifest on disk -> compiled document on disk -> inspection.

use std::fs;

use tempfile::tempdir;

use blueprint::application::{inspect_document, CompileOptions, CompileUseCase};
use blueprint::infrastructure::{write_atomic, StaticKeySource};

const MANIFEST: &str = r#"
[deployment]
namespace = "blog"
admin_acl = ["203.0.113.0/24"]

[[machines]]
provider = "DigitalOcean"
role = "Master"

[[machines]]
provider = "DigitalOcean"
role = "Worker"
count = 2
github_users = ["alice"]

[[services]]
name = "blog"
annotations = ["ACL"]
[[services.containers]]
image = "ghost"
env = { url = "https://example.org" }

[[services]]
name = "mysql"
[[services.containers]]
image = "mysql"
hostname = "mysql"
files = { "/etc/mysql/conf.d/blog.cnf" = "[mysqld]\nmax_connections = 50\n" }

[[connections]]
from = "public"
to = "blog"
ports = 443

[[connections]]
from = "blog"
to = "mysql"
ports = 3306

[[placements]]
service = "mysql"
exclusive = true
other = "blog"

[[assertions]]
form = "reachACL"
nodes = ["public", "mysql"]
target = false
"#;

#[test]
fn scenario_compile_write_inspect() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("blog.toml");
    fs::write(&manifest_path, MANIFEST).unwrap();

    let keys = StaticKeySource::new().with_user("alice", ["ssh-ed25519 AAAA alice@laptop"]);
    let result = CompileUseCase::new(keys)
        .execute(&manifest_path, &CompileOptions::default())
        .unwrap();

    let document = &result.document;
    assert_eq!(document.namespace, "blog");
    assert_eq!(document.admin_acl, ["203.0.113.0/24"]);
    assert!(document.machines[1..]
        .iter()
        .all(|m| m.ssh_keys == ["ssh-ed25519 AAAA alice@laptop"]));
    assert!(document.machines[0].ssh_keys.is_empty());

    let out = dir.path().join("build").join("blog.json");
    write_atomic(&out, &document.to_json_pretty().unwrap()).unwrap();

    let inspected = inspect_document(&out).unwrap();
    assert_eq!(&inspected.document, document);
    assert_eq!(inspected.summary, result.summary);
    assert_eq!(inspected.summary.labels[0].annotations, ["ACL"]);
}
