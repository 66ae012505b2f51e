//! Deployment Builder
//!
//! Applies a [`Manifest`] to a fresh [`Deployment`] using only the public
//! graph API, so a manifest can express nothing a caller could not build by
//! hand. Connection and placement targets are resolved against the
//! manifest's own services; references to unknown services are passed
//! through and reported by vetting at compile time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::domain::entities::{
    Container, Deployment, DeploymentOptions, Image, Invariant, Machine, MachineAttrs,
    PlacementRule, Service,
};
use crate::domain::ports::KeySource;
use crate::domain::value_objects::{Endpoint, PortRange, PUBLIC_INTERNET_LABEL};
use crate::error::{BlueprintError, BlueprintResult};
use crate::manifest::{
    ConnectionSpec, ContainerSpec, DeploymentSection, MachineSpec, Manifest, PlacementSpec,
    ServiceSpec, MAX_REPLICAS,
};

/// Builds deployments from manifests
pub struct DeploymentBuilder<'a> {
    ctx: &'a Context,
    keys: &'a dyn KeySource,
    source: PathBuf,
}

impl<'a> DeploymentBuilder<'a> {
    /// `source` names the manifest in error messages
    pub fn new(ctx: &'a Context, keys: &'a dyn KeySource, source: impl AsRef<Path>) -> Self {
        Self {
            ctx,
            keys,
            source: source.as_ref().to_path_buf(),
        }
    }

    fn invalid(&self, message: impl Into<String>) -> BlueprintError {
        BlueprintError::InvalidManifest {
            file: self.source.clone(),
            message: message.into(),
        }
    }

    /// Build the deployment described by `manifest`
    ///
    /// `defaults` supplies policy fields the manifest leaves unset.
    pub fn build(
        &self,
        manifest: &Manifest,
        defaults: DeploymentOptions,
    ) -> BlueprintResult<Deployment> {
        let mut deployment = Deployment::new(merge_options(defaults, &manifest.deployment));

        for spec in &manifest.machines {
            deployment.deploy(self.machines(spec)?)?;
        }

        let mut services = Vec::with_capacity(manifest.services.len());
        let mut index: HashMap<&str, usize> = HashMap::new();
        for spec in &manifest.services {
            if spec.name == PUBLIC_INTERNET_LABEL {
                return Err(self.invalid(format!(
                    "service name '{}' is reserved for the public internet",
                    PUBLIC_INTERNET_LABEL
                )));
            }
            if index.insert(spec.name.as_str(), services.len()).is_some() {
                return Err(self.invalid(format!("duplicate service name '{}'", spec.name)));
            }
            services.push(self.service(spec)?);
        }

        let resolve = |services: &[Service], name: &str| -> String {
            index
                .get(name)
                .map(|&i| services[i].name().to_string())
                .unwrap_or_else(|| name.to_string())
        };

        for spec in &manifest.connections {
            self.connect(&mut services, &index, spec)?;
        }

        for spec in &manifest.placements {
            let Some(&target) = index.get(spec.service.as_str()) else {
                return Err(self.invalid(format!(
                    "placement for unknown service '{}'",
                    spec.service
                )));
            };
            let rule = self.placement(spec, |name| resolve(&services, name))?;
            services[target].place(rule);
        }

        for spec in &manifest.assertions {
            let nodes = spec.nodes.iter().map(|n| resolve(&services, n)).collect();
            deployment.assert(Invariant::new(spec.form, nodes)?, spec.target);
        }

        deployment.deploy(services)?;
        Ok(deployment)
    }

    fn check_replicas(&self, what: &str, field: &str, n: usize) -> BlueprintResult<()> {
        if n > MAX_REPLICAS {
            return Err(self.invalid(format!(
                "{} {} {} exceeds the limit of {}",
                what, field, n, MAX_REPLICAS
            )));
        }
        Ok(())
    }

    fn machines(&self, spec: &MachineSpec) -> BlueprintResult<Vec<Machine>> {
        self.check_replicas("machine", "count", spec.count)?;
        let mut ssh_keys = spec.ssh_keys.clone();
        for user in &spec.github_users {
            ssh_keys.extend(self.ctx.keys_for_user(self.keys, user)?);
        }

        let machine = self.ctx.machine(MachineAttrs {
            provider: spec.provider.clone(),
            role: spec.role.clone(),
            region: spec.region.clone(),
            size: spec.size.clone(),
            floating_ip: spec.floating_ip.clone(),
            disk_size: spec.disk_size,
            ssh_keys,
            cpu: spec.cpu.map(Into::into).unwrap_or_default(),
            ram: spec.ram.map(Into::into).unwrap_or_default(),
            preemptible: spec.preemptible,
        });
        Ok(machine.replicate(spec.count))
    }

    fn service(&self, spec: &ServiceSpec) -> BlueprintResult<Service> {
        let mut containers = Vec::new();
        for c in &spec.containers {
            self.check_replicas(&format!("container '{}'", c.image), "replicas", c.replicas)?;
            containers.extend(self.containers(c));
        }
        let mut service = self.ctx.service(&spec.name, containers);
        for annotation in &spec.annotations {
            service.annotate(annotation.clone());
        }
        Ok(service)
    }

    fn containers(&self, spec: &ContainerSpec) -> Vec<Container> {
        let image = match &spec.dockerfile {
            Some(dockerfile) => Image::with_dockerfile(spec.image.clone(), dockerfile.clone()),
            None => Image::new(spec.image.clone()),
        };
        let mut container = self
            .ctx
            .container_with_command(image, spec.command.iter().cloned())
            .with_env(spec.env.clone())
            .with_files(spec.files.clone());
        if let Some(hostname) = &spec.hostname {
            container.set_hostname(hostname.clone());
        }

        match spec.replicas {
            1 => vec![container],
            n => container.replicate(n),
        }
    }

    fn connect(
        &self,
        services: &mut [Service],
        index: &HashMap<&str, usize>,
        spec: &ConnectionSpec,
    ) -> BlueprintResult<()> {
        let ports = PortRange::from(spec.ports);
        let from = index.get(spec.from.as_str()).copied();
        let to = index.get(spec.to.as_str()).copied();

        if let Some(to) = to {
            let source = match from {
                Some(i) => Endpoint::from(&services[i]),
                None => Endpoint::from_label(&spec.from),
            };
            return services[to].allow_from(source, ports);
        }

        match from {
            Some(from) => services[from].connect(Endpoint::from_label(&spec.to), ports),
            None => Err(self.invalid(format!(
                "connection {} -> {} names no service in this manifest",
                spec.from, spec.to
            ))),
        }
    }

    fn placement(
        &self,
        spec: &PlacementSpec,
        resolve: impl Fn(&str) -> String,
    ) -> BlueprintResult<PlacementRule> {
        match (&spec.other, spec.machine_constraint()) {
            (Some(other), None) => Ok(PlacementRule::label_named(spec.exclusive, resolve(other))),
            (None, Some(constraint)) => Ok(PlacementRule::machine(spec.exclusive, constraint)),
            (Some(_), Some(_)) => Err(self.invalid(format!(
                "placement for '{}' mixes a service and machine attributes",
                spec.service
            ))),
            (None, None) => Err(self.invalid(format!(
                "placement for '{}' has no constraint",
                spec.service
            ))),
        }
    }
}

fn merge_options(mut options: DeploymentOptions, section: &DeploymentSection) -> DeploymentOptions {
    if let Some(namespace) = &section.namespace {
        options.namespace = namespace.clone();
    }
    if let Some(admin_acl) = &section.admin_acl {
        options.admin_acl = admin_acl.clone();
    }
    if let Some(max_price) = section.max_price {
        options.max_price = max_price;
    }
    options
}
