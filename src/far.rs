// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders for FenceAgentsRemediation and FenceAgentsRemediationTemplate

use crate::builder::{BuildableResource, Builder};
use crate::types::far::{
    FenceAgentsRemediation, FenceAgentsRemediationSpec, FenceAgentsRemediationTemplate,
    FenceAgentsRemediationTemplateSpec, RemediationStrategy,
};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

pub type FenceAgentsRemediationBuilder = Builder<FenceAgentsRemediation>;
pub type FenceAgentsRemediationTemplateBuilder = Builder<FenceAgentsRemediationTemplate>;

/// A resource embedding a fence agents remediation spec.
pub trait FenceAgentsSpecHolder {
    fn fence_agents_spec_mut(&mut self) -> &mut FenceAgentsRemediationSpec;
}

impl BuildableResource for FenceAgentsRemediation {
    const DISPLAY_NAME: &'static str = "fence agents remediation";

    fn from_metadata(metadata: ObjectMeta) -> Self {
        FenceAgentsRemediation {
            metadata,
            spec: FenceAgentsRemediationSpec::default(),
            status: None,
        }
    }
}

impl FenceAgentsSpecHolder for FenceAgentsRemediation {
    fn fence_agents_spec_mut(&mut self) -> &mut FenceAgentsRemediationSpec {
        &mut self.spec
    }
}

impl BuildableResource for FenceAgentsRemediationTemplate {
    const DISPLAY_NAME: &'static str = "fence agents remediation template";

    fn from_metadata(metadata: ObjectMeta) -> Self {
        FenceAgentsRemediationTemplate {
            metadata,
            spec: FenceAgentsRemediationTemplateSpec::default(),
        }
    }
}

impl FenceAgentsSpecHolder for FenceAgentsRemediationTemplate {
    fn fence_agents_spec_mut(&mut self) -> &mut FenceAgentsRemediationSpec {
        &mut self.spec.template.spec
    }
}

/// Render a duration the way Go's time.Duration prints, which is what the CRD expects.
fn go_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else if duration.subsec_nanos() % 1_000_000 == 0 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{}ns", duration.as_nanos())
    }
}

impl<K: BuildableResource + FenceAgentsSpecHolder> Builder<K> {
    /// Apply `update` to the embedded spec unless the builder has failed or `problem` is set.
    fn configure<F>(mut self, problem: Option<String>, update: F) -> Self
    where
        F: FnOnce(&mut FenceAgentsRemediationSpec),
    {
        if self.validate().is_err() {
            return self;
        }

        if let Some(msg) = problem {
            debug!("Invalid {} {} configuration: {}", K::DISPLAY_NAME, self.name(), msg);
            self.record_error(msg);
            return self;
        }

        update(self.definition.fence_agents_spec_mut());
        self
    }

    /// Set the fence agent to run, e.g. `fence_ipmilan`.
    pub fn with_agent(self, agent: &str) -> Self {
        let problem = agent
            .is_empty()
            .then(|| format!("The {} 'agent' cannot be empty", K::DISPLAY_NAME));

        self.configure(problem, |spec| spec.agent = agent.to_string())
    }

    /// Merge parameters passed to the agent for every node.
    pub fn with_shared_parameters(self, parameters: BTreeMap<String, String>) -> Self {
        let problem = parameters
            .is_empty()
            .then(|| format!("The {} 'sharedparameters' cannot be empty", K::DISPLAY_NAME));

        self.configure(problem, |spec| spec.sharedparameters.extend(parameters))
    }

    /// Set a parameter whose value differs per node, keyed by node name.
    pub fn with_node_parameter(self, parameter: &str, values: BTreeMap<String, String>) -> Self {
        let problem = if parameter.is_empty() {
            Some(format!(
                "The {} node parameter name cannot be empty",
                K::DISPLAY_NAME
            ))
        } else if values.is_empty() {
            Some(format!(
                "The {} node parameter '{}' has no node values",
                K::DISPLAY_NAME,
                parameter
            ))
        } else {
            None
        };

        self.configure(problem, |spec| {
            spec.nodeparameters
                .entry(parameter.to_string())
                .or_default()
                .extend(values)
        })
    }

    pub fn with_retry_count(self, retry_count: i32) -> Self {
        let problem = (retry_count < 1)
            .then(|| format!("The {} 'retrycount' must be at least 1", K::DISPLAY_NAME));

        self.configure(problem, |spec| spec.retrycount = Some(retry_count))
    }

    pub fn with_retry_interval(self, interval: Duration) -> Self {
        let problem = interval
            .is_zero()
            .then(|| format!("The {} 'retryinterval' cannot be zero", K::DISPLAY_NAME));

        self.configure(problem, |spec| {
            spec.retryinterval = Some(go_duration(interval))
        })
    }

    /// Timeout of a single agent invocation.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let problem = timeout
            .is_zero()
            .then(|| format!("The {} 'timeout' cannot be zero", K::DISPLAY_NAME));

        self.configure(problem, |spec| spec.timeout = Some(go_duration(timeout)))
    }

    pub fn with_remediation_strategy(self, strategy: RemediationStrategy) -> Self {
        self.configure(None, |spec| spec.remediation_strategy = Some(strategy))
    }
}
