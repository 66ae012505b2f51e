//! Reusable manifests. None of them reference GitHub users, so tests
//! never touch the network.

#![allow(dead_code)]

/// Load balancer in front of a replicated app backed by a database
pub const WEB_STACK_TOML: &str = r#"
[deployment]
namespace = "shop"

[[machines]]
provider = "Amazon"
role = "Master"
size = "m4.large"

[[machines]]
provider = "Amazon"
role = "Worker"
size = "m4.large"
count = 2

[[services]]
name = "lb"
[[services.containers]]
image = "haproxy"

[[services]]
name = "app"
[[services.containers]]
image = "node"
command = ["node", "server.js"]
replicas = 2
env = { PORT = "3000" }

[[services]]
name = "db"
[[services.containers]]
image = "postgres"
hostname = "db"

[[connections]]
from = "public"
to = "lb"
ports = 80

[[connections]]
from = "lb"
to = "app"
ports = 3000

[[connections]]
from = "app"
to = "db"
ports = 5432

[[assertions]]
form = "between"
nodes = ["public", "db", "lb"]

[[assertions]]
form = "reach"
nodes = ["db", "public"]
target = false
"#;

/// Same stack in YAML, without assertions
pub const WEB_STACK_YAML: &str = r#"
deployment:
  namespace: shop
machines:
  - provider: Amazon
    role: Master
  - provider: Amazon
    role: Worker
    count: 2
services:
  - name: lb
    containers:
      - image: haproxy
  - name: app
    containers:
      - image: node
        replicas: 2
connections:
  - from: public
    to: lb
    ports: 80
  - from: lb
    to: app
    ports: 3000
"#;

/// A connection to a service that is never declared
pub const UNDEPLOYED_PEER_TOML: &str = r#"
[[services]]
name = "foo"
[[services.containers]]
image = "nginx"

[[connections]]
from = "foo"
to = "baz"
ports = 80
"#;

/// An assertion that cannot hold
pub const FAILING_ASSERTION_TOML: &str = r#"
[[services]]
name = "web"
[[services.containers]]
image = "nginx"

[[connections]]
from = "public"
to = "web"
ports = 80

[[assertions]]
form = "reach"
nodes = ["web", "public"]
"#;

/// One machine whose keys come from a GitHub user
pub const GITHUB_KEYS_TOML: &str = r#"
[[machines]]
provider = "Amazon"
role = "Worker"
github_users = ["octocat"]
"#;
