//! Assertions - correctness properties the compiled topology must satisfy
//!
//! | form          | nodes               | question                                   |
//! |---------------|---------------------|--------------------------------------------|
//! | `reach`       | from, to            | can `from` reach `to`?                     |
//! | `reachDirect` | from, to            | is there a direct connection?              |
//! | `reachACL`    | from, to            | reachable without crossing ACL services?   |
//! | `between`     | from, to, via       | does every path pass through `via`?        |
//! | `enough`      | (none)              | are there enough machines to schedule?     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Endpoint;
use crate::error::{BlueprintError, BlueprintResult};

/// The kind of question an assertion asks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvariantForm {
    #[serde(rename = "reach")]
    Reach,
    #[serde(rename = "reachDirect")]
    ReachDirect,
    #[serde(rename = "reachACL")]
    ReachAcl,
    #[serde(rename = "between")]
    Between,
    #[serde(rename = "enough")]
    Enough,
}

impl InvariantForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvariantForm::Reach => "reach",
            InvariantForm::ReachDirect => "reachDirect",
            InvariantForm::ReachAcl => "reachACL",
            InvariantForm::Between => "between",
            InvariantForm::Enough => "enough",
        }
    }

    /// Number of nodes the form operates on
    pub fn arity(&self) -> usize {
        match self {
            InvariantForm::Reach | InvariantForm::ReachDirect | InvariantForm::ReachAcl => 2,
            InvariantForm::Between => 3,
            InvariantForm::Enough => 0,
        }
    }
}

impl fmt::Display for InvariantForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvariantForm {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reach" => Ok(InvariantForm::Reach),
            "reachDirect" => Ok(InvariantForm::ReachDirect),
            "reachACL" => Ok(InvariantForm::ReachAcl),
            "between" => Ok(InvariantForm::Between),
            "enough" => Ok(InvariantForm::Enough),
            other => Err(BlueprintError::UnknownInvariantForm(other.to_string())),
        }
    }
}

/// A question about the topology, not yet paired with its expected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invariant {
    form: InvariantForm,
    nodes: Vec<String>,
}

impl Invariant {
    /// Build an invariant from raw node labels, checking arity
    pub fn new(form: InvariantForm, nodes: Vec<String>) -> BlueprintResult<Self> {
        if nodes.len() != form.arity() {
            return Err(BlueprintError::InvariantArity {
                form: form.to_string(),
                expected: form.arity(),
                actual: nodes.len(),
            });
        }
        Ok(Self { form, nodes })
    }

    fn of(form: InvariantForm, endpoints: &[Endpoint]) -> Self {
        Self {
            form,
            nodes: endpoints.iter().map(|e| e.label().to_string()).collect(),
        }
    }

    pub fn reach(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        Self::of(InvariantForm::Reach, &[from.into(), to.into()])
    }

    pub fn reach_direct(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        Self::of(InvariantForm::ReachDirect, &[from.into(), to.into()])
    }

    pub fn reach_acl(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        Self::of(InvariantForm::ReachAcl, &[from.into(), to.into()])
    }

    pub fn between(
        from: impl Into<Endpoint>,
        to: impl Into<Endpoint>,
        via: impl Into<Endpoint>,
    ) -> Self {
        Self::of(InvariantForm::Between, &[from.into(), to.into(), via.into()])
    }

    pub fn enough() -> Self {
        Self::of(InvariantForm::Enough, &[])
    }

    pub fn form(&self) -> InvariantForm {
        self.form
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

/// An invariant paired with its desired answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub form: InvariantForm,
    pub nodes: Vec<String>,
    pub target: bool,
}

impl Assertion {
    pub fn new(invariant: Invariant, desired: bool) -> Self {
        Self {
            form: invariant.form,
            nodes: invariant.nodes,
            target: desired,
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.form, self.target)?;
        for node in &self.nodes {
            write!(f, " {:?}", node)?;
        }
        Ok(())
    }
}
