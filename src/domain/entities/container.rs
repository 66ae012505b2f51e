//! Container entity - one running instance of an image
//!
//! Containers are grouped into services at construction time. `with_env`,
//! `with_files` and `replicate` never touch the receiver: they produce new
//! instances with fresh instantiation tags.

use std::collections::BTreeMap;

use crate::context::Context;
use crate::domain::services::Identifiable;
use crate::domain::value_objects::InstanceTag;
use crate::error::{BlueprintError, BlueprintResult};

use super::Image;

/// A container in the deployment
#[derive(Debug, Clone)]
pub struct Container {
    pub image: Image,
    pub command: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub filepath_to_content: BTreeMap<String, String>,
    hostname: Option<String>,
    tag: InstanceTag,
    ctx: Context,
}

impl Container {
    pub(crate) fn new(ctx: Context, image: Image, command: Vec<String>) -> Self {
        Self {
            image,
            command,
            env: BTreeMap::new(),
            filepath_to_content: BTreeMap::new(),
            hostname: None,
            tag: ctx.next_tag(),
            ctx,
        }
    }

    /// Independent copy with a new instantiation tag
    pub fn duplicate(&self) -> Self {
        Self {
            image: self.image.clone(),
            command: self.command.clone(),
            env: self.env.clone(),
            filepath_to_content: self.filepath_to_content.clone(),
            hostname: self.hostname.clone(),
            tag: self.ctx.next_tag(),
            ctx: self.ctx.clone(),
        }
    }

    /// `n` independent copies
    pub fn replicate(&self, n: usize) -> Vec<Self> {
        (0..n).map(|_| self.duplicate()).collect()
    }

    /// Copy with the environment replaced by `env`
    pub fn with_env<I, K, V>(&self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut copy = self.duplicate();
        copy.env = env.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        copy
    }

    /// Copy with the file map replaced by `files`
    pub fn with_files<I, K, V>(&self, files: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut copy = self.duplicate();
        copy.filepath_to_content = files
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        copy
    }

    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.insert(key.into(), value.into());
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = Some(hostname.into());
    }

    /// Explicit hostname, if one was declared
    pub fn explicit_hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Explicit hostname, or a usage error if none was declared
    pub fn hostname(&self) -> BlueprintResult<&str> {
        self.hostname
            .as_deref()
            .ok_or_else(|| BlueprintError::MissingHostname {
                image: self.image.name().to_string(),
            })
    }
}

impl Identifiable for Container {
    fn instance_tag(&self) -> InstanceTag {
        self.tag
    }

    fn content_key(&self) -> String {
        serde_json::json!({
            "image": self.image,
            "command": self.command,
            "env": self.env,
            "filepathToContent": self.filepath_to_content,
            "hostname": self.hostname,
        })
        .to_string()
    }
}
