//! Describing a small cluster directly through the graph API.

use blueprint::domain::entities::MASTER_ROLE;
use blueprint::{
    BlueprintResult, Context, Deployable, Deployment, Endpoint, Invariant, Machine, MachineAttrs,
    Service,
};

/// Reusable building block: a replicated web tier behind a proxy
struct WebTier {
    proxy: Service,
    app: Service,
}

impl WebTier {
    fn new(ctx: &Context, replicas: usize) -> BlueprintResult<Self> {
        let mut proxy = ctx.service("proxy", vec![ctx.container("haproxy")]);
        proxy.allow_from(Endpoint::Public, 443)?;

        let mut app = ctx.service("app", ctx.container("node").replicate(replicas));
        app.allow_from(&proxy, 8080)?;
        Ok(Self { proxy, app })
    }
}

impl Deployable for WebTier {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()> {
        deployment.deploy(vec![self.proxy, self.app])
    }
}

fn machines(ctx: &Context, workers: usize) -> Vec<Machine> {
    let base = ctx.machine(MachineAttrs {
        provider: "Google".to_string(),
        size: "n1-standard-1".to_string(),
        ..Default::default()
    });
    let mut machines = vec![base.as_master()];
    machines.extend(base.as_worker().replicate(workers));
    machines
}

#[test]
fn scenario_web_tier_compiles_with_guarantees() {
    let ctx = Context::new();
    let mut deployment = Deployment::default();
    deployment.deploy(machines(&ctx, 2)).unwrap();
    deployment.deploy(WebTier::new(&ctx, 3).unwrap()).unwrap();

    deployment.assert(
        Invariant::between(Endpoint::Public, Endpoint::service("app"), Endpoint::service("proxy")),
        true,
    );
    deployment.assert(Invariant::reach_direct(Endpoint::Public, Endpoint::service("app")), false);

    let document = deployment.compile().unwrap();
    assert_eq!(document.machines.len(), 3);
    assert_eq!(
        document.machines.iter().filter(|m| m.role == MASTER_ROLE).count(),
        1
    );
    assert_eq!(document.containers.len(), 4);
    assert_eq!(document.invariants.len(), 2);
}

#[test]
fn scenario_two_tiers_get_distinct_names() {
    let ctx = Context::new();
    let mut deployment = Deployment::default();
    deployment.deploy(WebTier::new(&ctx, 1).unwrap()).unwrap();
    deployment.deploy(WebTier::new(&ctx, 1).unwrap()).unwrap();

    let document = deployment.compile().unwrap();
    let names: Vec<_> = document.labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["proxy", "app", "proxy2", "app2"]);
}

#[test]
fn scenario_not_enough_machines_is_reported() {
    let ctx = Context::new();
    let mut deployment = Deployment::default();
    deployment.deploy(machines(&ctx, 1)).unwrap();

    let mut web = ctx.service("web", ctx.container("nginx").replicate(3));
    web.allow_from(Endpoint::Public, 80).unwrap();
    deployment.deploy(web).unwrap();
    deployment.assert(Invariant::enough(), true);

    let err = deployment.compile().unwrap_err();
    assert!(err.to_string().starts_with("invariant failed: enough"), "{err}");
}
