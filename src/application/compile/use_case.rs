//! Compile Use Case
//!
//! Orchestrates the compile flow:
//! 1. Load the manifest
//! 2. Build the deployment graph (fetching keys as needed)
//! 3. Compile: vet, assign identities, export, check invariants
//!
//! All business logic lives in the domain layer.

use std::path::Path;

use crate::context::Context;
use crate::domain::entities::Deployment;
use crate::domain::ports::KeySource;
use crate::error::BlueprintResult;
use crate::manifest::{self, Manifest};

use super::builder::DeploymentBuilder;
use super::options::CompileOptions;
use super::result::CompileResult;

/// Compile use case - manifest in, document out
///
/// Each use case owns an isolated [`Context`], so service names and
/// identities never leak between compilations.
pub struct CompileUseCase<K>
where
    K: KeySource,
{
    key_source: K,
    context: Context,
}

impl<K> CompileUseCase<K>
where
    K: KeySource,
{
    pub fn new(key_source: K) -> Self {
        Self::with_context(key_source, Context::new())
    }

    pub fn with_context(key_source: K, context: Context) -> Self {
        Self {
            key_source,
            context,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Load and compile the manifest at `path`
    pub fn execute(&self, path: &Path, options: &CompileOptions) -> BlueprintResult<CompileResult> {
        let manifest = manifest::load(path)?;
        self.compile(&manifest, path, options)
    }

    /// Build the deployment graph without compiling it
    pub fn build(
        &self,
        manifest: &Manifest,
        source: &Path,
        options: &CompileOptions,
    ) -> BlueprintResult<Deployment> {
        DeploymentBuilder::new(&self.context, &self.key_source, source)
            .build(manifest, options.deployment.clone())
    }

    /// Compile an already-parsed manifest
    pub fn compile(
        &self,
        manifest: &Manifest,
        source: &Path,
        options: &CompileOptions,
    ) -> BlueprintResult<CompileResult> {
        let mut deployment = self.build(manifest, source, options)?;
        let document = deployment.compile()?;

        let result = CompileResult::new(document);
        tracing::info!(
            manifest = %source.display(),
            namespace = %result.summary.namespace,
            machines = result.summary.machines,
            containers = result.summary.containers,
            invariants = result.summary.invariants,
            "compiled deployment"
        );
        Ok(result)
    }
}
